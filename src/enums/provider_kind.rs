use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "directory")]
    Directory,
}

impl Default for ProviderKind {
    fn default() -> Self {
        ProviderKind::Http
    }
}
