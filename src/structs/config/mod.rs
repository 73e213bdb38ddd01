pub mod config;
pub mod output_config;
pub mod provider_config;
pub mod server_config;
