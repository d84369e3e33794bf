//! Domain entities for the accounts domain
//!
//! Users and companies, plus the employee profile blob. Each entity
//! includes validation and serialization rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use greenjobs_common::{Error, Result};
use validator::ValidateEmail;

/// Logo assigned to companies created inline during employer registration
pub const DEFAULT_COMPANY_LOGO: &str = "https://picsum.photos/seed/company/100";

/// User roles.
///
/// Closed set; unknown values are rejected at the serde and sqlx
/// boundaries. The role is fixed at registration and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Employee,
    Employer,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Employee => write!(f, "employee"),
            UserRole::Employer => write!(f, "employer"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// Employee profile blob.
///
/// All fields optional; an empty profile serializes as `{}`.
/// Experience and education entries are free-form objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

impl Profile {
    /// Shallow patch: overwrite only the fields supplied in the update.
    ///
    /// Absent fields are left untouched. Nested lists are replaced
    /// wholesale, never deep-merged.
    pub fn merge(&mut self, patch: Profile) {
        if patch.summary.is_some() {
            self.summary = patch.summary;
        }
        if patch.skills.is_some() {
            self.skills = patch.skills;
        }
        if patch.experience.is_some() {
            self.experience = patch.experience;
        }
        if patch.education.is_some() {
            self.education = patch.education;
        }
        if patch.resume_url.is_some() {
            self.resume_url = patch.resume_url;
        }
    }
}

/// User entity
#[derive(Clone, PartialEq, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub profile: Json<Profile>,
    pub company_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("role", &self.role)
            .field("profile", &self.profile)
            .field("company_id", &self.company_id)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl User {
    /// Create a new user with validation.
    ///
    /// `password_hash` must already be hashed; this constructor never
    /// sees a cleartext password. The profile starts empty.
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        role: UserRole,
        company_id: Option<Uuid>,
    ) -> Result<Self> {
        if !email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        if name.is_empty() || name.len() > 100 {
            return Err(Error::Validation(
                "Name must be 1-100 characters".to_string(),
            ));
        }

        Ok(User {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role,
            profile: Json(Profile::default()),
            company_id,
            created_at: Utc::now(),
        })
    }
}

/// Company entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub website: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Create a company inline during employer registration.
    ///
    /// Starts unverified with the placeholder logo; verification is an
    /// out-of-band concern.
    pub fn new(name: String, description: String, website: Option<String>) -> Result<Self> {
        if name.is_empty() || name.len() > 100 {
            return Err(Error::Validation(
                "Company name must be 1-100 characters".to_string(),
            ));
        }

        Ok(Company {
            id: Uuid::new_v4(),
            name,
            logo: DEFAULT_COMPANY_LOGO.to_string(),
            description,
            website: website.unwrap_or_default(),
            is_verified: false,
            created_at: Utc::now(),
        })
    }
}
