//! Auth CQRS read-model types
//!
//! Lightweight views of the same DB rows owned by the accounts domain.
//! These types carry only the fields needed for authentication and
//! authorization; handlers needing the full `User` (profile, password
//! hash) load it from the accounts repository.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lightweight identity for authenticated users
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: AuthRole,
    pub company_id: Option<Uuid>,
}

/// User role for auth decisions.
///
/// Closed set: unknown values are rejected at the serde and sqlx
/// boundaries rather than carried as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthRole {
    Employee,
    Employer,
    Admin,
}

impl std::fmt::Display for AuthRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthRole::Employee => write!(f, "employee"),
            AuthRole::Employer => write!(f, "employer"),
            AuthRole::Admin => write!(f, "admin"),
        }
    }
}
