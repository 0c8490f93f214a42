//! User Entity
//!
//! The authenticated account plus the payloads exchanged with `/auth/*`.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use crate::error::FormError;

/// An account as returned by the profile and auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// First name when set, otherwise the username
    pub fn display_name(&self) -> &str {
        if self.first_name.trim().is_empty() {
            &self.username
        } else {
            &self.first_name
        }
    }

    /// Single uppercase letter shown in avatars
    pub fn initial(&self) -> char {
        avatar_initial(self.display_name())
    }
}

impl Entity for User {
    fn id(&self) -> u32 {
        self.id
    }
}

/// First letter of a name, `U` when there is none
pub fn avatar_initial(name: &str) -> char {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('U')
}

/// Login form payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Trim the username; both fields are required
    pub fn validate(&self) -> Result<Credentials, FormError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(FormError::MissingField("Username"));
        }
        if self.password.is_empty() {
            return Err(FormError::MissingField("Password"));
        }
        Ok(Credentials {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Registration form payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl Registration {
    /// Trim the text fields; username, email and password are required
    pub fn validate(&self) -> Result<Registration, FormError> {
        let username = self.username.trim();
        let email = self.email.trim();
        if username.is_empty() {
            return Err(FormError::MissingField("Username"));
        }
        if email.is_empty() {
            return Err(FormError::MissingField("Email"));
        }
        if self.password.is_empty() {
            return Err(FormError::MissingField("Password"));
        }
        Ok(Registration {
            username: username.to_string(),
            password: self.password.clone(),
            email: email.to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
        })
    }
}

/// Body of a successful login or registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}
