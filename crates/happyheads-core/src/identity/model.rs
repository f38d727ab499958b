//! Identity domain model.
//!
//! Represents the signed-in person and the credential inputs that produce one.

use serde::{Deserialize, Serialize};

use crate::error::{HappyHeadsError, Result};

/// Authorization role attached to an identity.
///
/// Serialized names match the blobs written by the web client
/// (`"user"`, `"admin"`, `"therapist"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    #[serde(rename = "user")]
    Standard,
    #[serde(rename = "admin")]
    Administrator,
    #[serde(rename = "therapist")]
    Practitioner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Standard => "user",
            Role::Administrator => "admin",
            Role::Practitioner => "therapist",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in person as held in memory and in durable storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// Opaque identifier
    pub id: String,
    /// Email-like handle used to sign in
    pub email: String,
    /// Display name
    pub name: String,
    /// Optional avatar reference (URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
}

impl Identity {
    pub fn is_administrator(&self) -> bool {
        self.role == Role::Administrator
    }

    /// Returns the part of the email before `@`, or the whole email when
    /// there is no `@`.
    pub fn email_local_part(email: &str) -> &str {
        email.split('@').next().unwrap_or(email)
    }
}

/// Validated sign-in input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Validates and wraps an email/password pair.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if either field is blank or the email has no `@`.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let email = email.into().trim().to_string();
        let password = password.into();

        validate_email(&email)?;
        if password.is_empty() {
            return Err(HappyHeadsError::validation("password", "is required"));
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Validated registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    credentials: Credentials,
    name: String,
}

impl Registration {
    /// # Errors
    ///
    /// Returns `Validation` if any field is blank or the email has no `@`.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Credentials::new(email, password)?;
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(HappyHeadsError::validation("name", "is required"));
        }
        Ok(Self { credentials, name })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn email(&self) -> &str {
        self.credentials.email()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(HappyHeadsError::validation("email", "is required"));
    }
    if !email.contains('@') {
        return Err(HappyHeadsError::validation(
            "email",
            format!("'{}' is not an email address", email),
        ));
    }
    Ok(())
}
