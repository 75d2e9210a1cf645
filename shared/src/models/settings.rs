//! Portal Settings Model

use serde::{Deserialize, Serialize};

/// Portal-wide settings owned by the invoice store
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalSettings {
    /// Tax rate percentage (PPN). `None` means no tax is applied
    #[serde(default)]
    pub ppn: Option<f64>,
}
