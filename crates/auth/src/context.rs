//! Authorization context for authenticated users

use crate::types::{AuthIdentity, AuthRole};

/// Represents an authenticated user context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
}

impl AuthContext {
    /// Create new auth context for a user
    pub fn new(user: AuthIdentity) -> Self {
        Self { user }
    }

    /// Check if user has the admin role
    pub fn is_admin(&self) -> bool {
        self.user.role == AuthRole::Admin
    }

    /// Check if user has the employer role
    pub fn is_employer(&self) -> bool {
        self.user.role == AuthRole::Employer
    }

    /// Check if user has the employee role
    pub fn is_employee(&self) -> bool {
        self.user.role == AuthRole::Employee
    }
}
