//! Provider Model

use serde::{Deserialize, Serialize};

/// Data-center partner offering rack spaces (read-only reference data)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Onboarding finished and visible to customers
    #[serde(default)]
    pub is_verified: bool,
}
