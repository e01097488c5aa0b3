//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around numeric identifiers
//! to prevent mixing up different kinds of IDs at compile time, plus the
//! [`Region`] that selects which OneLogin shard the client talks to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A strongly-typed OneLogin user ID.
///
/// # Example
///
/// ```
/// use onelogin_rs::UserId;
///
/// let user = UserId::new(32715399);
/// assert_eq!(user.to_string(), "32715399");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a new user ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw numeric ID.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Region hosting the OneLogin account.
///
/// Determines which API host the client uses.
///
/// # Example
///
/// ```
/// use onelogin_rs::Region;
///
/// let region: Region = "eu".parse().expect("valid region");
/// assert_eq!(region.api_base_url(), "https://api.eu.onelogin.com");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// United States shard.
    #[default]
    Us,
    /// European Union shard.
    Eu,
}

impl Region {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Region::Us => "https://api.us.onelogin.com",
            Region::Eu => "https://api.eu.onelogin.com",
        }
    }

    /// The short region code used in host names (`"us"` or `"eu"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
        }
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            other => Err(Error::Config(format!(
                "Invalid region code: {:?}. Expected \"us\" or \"eu\"",
                other
            ))),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
