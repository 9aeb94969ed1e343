// AppInfo Model
// Application metadata cached for the frontend after startup

use serde::{Deserialize, Serialize};

/// Metadata about the running application, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub platform: String,
}
