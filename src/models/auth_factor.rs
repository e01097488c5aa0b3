//! Multi-factor authentication models.

use serde::{Deserialize, Serialize};

/// Factors a user may enroll in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthFactorsContainer {
    /// All factors available to the user
    #[serde(default)]
    pub auth_factors: Vec<AvailableAuthFactor>,
}

/// An authentication factor available for enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableAuthFactor {
    /// Factor name as shown to administrators
    pub name: String,
    /// Identifier used for enrollment
    pub factor_id: i64,
}

/// Devices a user has already enrolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpDevicesContainer {
    /// Enrolled devices
    #[serde(default)]
    pub otp_devices: Vec<OtpDevice>,
}

/// An enrolled OTP device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpDevice {
    /// Device ID
    pub id: i64,
    /// Whether the device is active
    #[serde(default)]
    pub active: bool,
    /// Whether this is the user's default device
    #[serde(default)]
    pub default: bool,
    /// Factor name, e.g. `"Google Authenticator"`
    #[serde(default)]
    pub auth_factor_name: Option<String>,
    /// Display name of the factor type
    #[serde(default)]
    pub type_display_name: Option<String>,
    /// Name the user gave the device
    #[serde(default)]
    pub user_display_name: Option<String>,
    /// Phone number for SMS factors
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Whether a verification must be triggered before use
    #[serde(default)]
    pub needs_trigger: Option<bool>,
}
