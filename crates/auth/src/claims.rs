//! Token claims types

use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
///
/// Tokens are self-contained: the subject and expiry are everything the
/// server needs, and nothing is stored server-side. A payload missing
/// `sub` fails deserialization and is rejected as invalid.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expires at (unix seconds)
    pub exp: u64,
}
