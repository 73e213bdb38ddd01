use std::time::Duration;

pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_KEY_ENV: &str = "GRAMCHECK_API_KEY";
pub const CONFIG_DIR_NAME: &str = "gramcheck";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const MAX_USERNAME_LENGTH: usize = 30;
pub const FALLBACK_TERMINAL_WIDTH: usize = 80;
pub const MAX_RULE_WIDTH: usize = 100;
pub const SPINNER_FRAME_INTERVAL_MS: u64 = 150;

pub const REPORT_TITLE: &str = "Analysis Results";
pub const LOADING_MESSAGE: &str = "Loading results...";
pub const FAILED_HEADLINE: &str = "Analysis Failed";
pub const EXAMPLES_HEADING: &str = "Examples found:";
pub const DISCLAIMER: &str = "This analysis is based on publicly available content and automated detection \
methods. Results are estimates and should not be considered definitive policy violations. For official \
policy enforcement, please refer to Instagram's community guidelines and reporting mechanisms.";

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
