use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Design {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub status: DesignStatus,
    /// Ordered tag list attached by the author.
    pub tags: Vec<String>,
    pub image: String,
    pub author_id: i32,
    pub created_at: NaiveDateTime,
}

/// Moderation state of a catalog entry. Only `Published` designs are visible
/// to anonymous callers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DesignStatus {
    Draft,
    Published,
    Pending,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDesign {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub status: DesignStatus,
    pub tags: Vec<String>,
    pub image: String,
    pub author_id: i32,
    pub created_at: NaiveDateTime,
}

impl Display for DesignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignStatus::Draft => write!(f, "DRAFT"),
            DesignStatus::Published => write!(f, "PUBLISHED"),
            DesignStatus::Pending => write!(f, "PENDING"),
        }
    }
}

impl From<&str> for DesignStatus {
    fn from(s: &str) -> Self {
        match s {
            "PUBLISHED" => DesignStatus::Published,
            "PENDING" => DesignStatus::Pending,
            _ => DesignStatus::Draft,
        }
    }
}

impl From<String> for DesignStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}
