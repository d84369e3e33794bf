//! Registration, login, and profile API handlers
//!
//! Implements:
//! - POST /api/auth/register - Create an account and issue a token
//! - POST /api/auth/login - Verify credentials and issue a token
//! - GET /api/auth/me - Return the authenticated user
//! - PUT /api/auth/profile - Patch the employee profile

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use greenjobs_auth::{hash_password, issue_token, verify_password, AuthUser};
use greenjobs_common::{Error, Result};

use crate::api::middleware::AccountsState;
use crate::domain::entities::{Company, Profile, User, UserRole};

/// Inline company payload accepted at employer registration
#[derive(Debug, Deserialize)]
pub struct CompanyPayload {
    pub name: String,
    pub description: String,
    pub website: Option<String>,
}

/// Request for registering a new account
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub password: String,
    pub role: UserRole,

    /// Existing company to attach to (employer registration)
    pub company_id: Option<Uuid>,

    /// Inline company to create (employer registration)
    pub company: Option<CompanyPayload>,
}

/// Request for logging in
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User payload returned by auth endpoints
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub profile: Profile,
    #[serde(rename = "companyId")]
    pub company_id: Option<Uuid>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            profile: user.profile.0,
            company_id: user.company_id,
        }
    }
}

/// Response for register/login: a token plus the user it belongs to
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserResponse,
}

impl AuthResponse {
    fn new(access_token: String, user: User) -> Self {
        Self {
            access_token,
            token_type: "bearer",
            user: user.into(),
        }
    }
}

/// POST /api/auth/register - Create an account and issue a token
pub async fn register(
    State(state): State<AccountsState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    // Admin accounts are provisioned out-of-band only
    if request.role == UserRole::Admin {
        return Err(Error::Authorization(
            "Admin accounts must be provisioned via environment configuration".to_string(),
        ));
    }

    if state
        .repos
        .users
        .find_by_email(&request.email)
        .await?
        .is_some()
    {
        return Err(Error::Conflict("Email already registered".to_string()));
    }

    let mut company_id = request.company_id;
    if request.role == UserRole::Employer {
        if let Some(payload) = request.company {
            let company = Company::new(payload.name, payload.description, payload.website)?;
            let company = state.repos.companies.create(&company).await?;
            tracing::info!(company_id = %company.id, "Company created at registration");
            company_id = Some(company.id);
        }
        if company_id.is_none() {
            return Err(Error::Validation(
                "Employer accounts must include a company profile or a company identifier"
                    .to_string(),
            ));
        }
    }

    let config = state.auth.config();
    let password_hash = hash_password(&request.password, config.bcrypt_cost)?;
    let user = User::new(
        request.name,
        request.email,
        password_hash,
        request.role,
        company_id,
    )?;
    let user = state.repos.users.create(&user).await?;

    let token = issue_token(user.id, None, config)?;
    tracing::info!(user_id = %user.id, role = %user.role, "User registered");

    Ok(Json(AuthResponse::new(token, user)))
}

/// POST /api/auth/login - Verify credentials and issue a token
pub async fn login(
    State(state): State<AccountsState>,
    Json(credentials): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let config = state.auth.config();

    // Admin path: cleartext comparison against the configured pair,
    // honored only when a matching user record exists in the store
    if credentials.email == config.admin_email && credentials.password == config.admin_password {
        if let Some(admin) = state.repos.users.find_by_email(&config.admin_email).await? {
            let token = issue_token(admin.id, None, config)?;
            return Ok(Json(AuthResponse::new(token, admin)));
        }
    }

    // Standard path. Absent user and wrong password produce the same
    // error so callers cannot enumerate registered emails.
    let user = match state.repos.users.find_by_email(&credentials.email).await? {
        Some(user) if verify_password(&credentials.password, &user.password_hash) => user,
        _ => return Err(Error::Authentication("Invalid credentials".to_string())),
    };

    let token = issue_token(user.id, None, config)?;
    Ok(Json(AuthResponse::new(token, user)))
}

/// GET /api/auth/me - Return the authenticated user
pub async fn me(
    AuthUser(auth_context): AuthUser,
    State(state): State<AccountsState>,
) -> Result<Json<UserResponse>> {
    // The auth context carries a lightweight identity; load the full
    // user so the response includes the profile
    let user = state
        .repos
        .users
        .find_by_id(auth_context.user.id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

/// PUT /api/auth/profile - Patch the employee profile
pub async fn update_profile(
    AuthUser(auth_context): AuthUser,
    State(state): State<AccountsState>,
    Json(patch): Json<Profile>,
) -> Result<Json<UserResponse>> {
    if !auth_context.is_employee() {
        return Err(Error::Authorization(
            "Only employees can update profiles".to_string(),
        ));
    }

    let user = state
        .repos
        .users
        .find_by_id(auth_context.user.id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    let mut profile = user.profile.0.clone();
    profile.merge(patch);

    let updated = state
        .repos
        .users
        .update_profile(user.id, &profile)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(updated.into()))
}
