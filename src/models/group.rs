//! Group and role models.

use serde::{Deserialize, Serialize};

/// A OneLogin group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional external reference
    #[serde(default)]
    pub reference: Option<String>,
}

/// A OneLogin role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role ID
    pub id: i64,
    /// Role name
    pub name: String,
}
