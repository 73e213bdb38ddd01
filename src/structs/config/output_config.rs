use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_export_dir")]
    pub export_dir: String,

    #[serde(default = "ConfigHelper::default_open_exports")]
    pub open_exports: bool,

    #[serde(default = "ConfigHelper::default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            export_dir: ConfigHelper::default_export_dir(),
            open_exports: ConfigHelper::default_open_exports(),
            color: ConfigHelper::default_color(),
        }
    }
}
