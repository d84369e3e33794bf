//! Authentication configuration

use chrono::Duration;

/// Authentication configuration
///
/// Constructed explicitly at startup and passed into the token service
/// and login flow; call sites never read environment state themselves.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Lifetime applied to issued tokens unless the caller overrides it
    pub token_ttl: Duration,
    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
    /// Admin credentials compared in cleartext on the admin login path
    pub admin_email: String,
    pub admin_password: String,
}

impl AuthConfig {
    /// Build the auth configuration from the loaded application config
    pub fn from_config(config: &greenjobs_common::Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            token_ttl: Duration::minutes(config.access_token_expire_minutes),
            bcrypt_cost: config.bcrypt_cost,
            admin_email: config.admin_email.clone(),
            admin_password: config.admin_password.clone(),
        }
    }
}
