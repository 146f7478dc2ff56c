use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub role: UserRole,
}

/// Marketplace role. Administrators see every design regardless of author or
/// status; standard users are scoped to their own designs.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    User,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub image: Option<String>,
    pub role: UserRole,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "ADMIN"),
            UserRole::User => write!(f, "USER"),
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            "ADMIN" => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}
