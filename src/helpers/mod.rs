pub mod config_helper;
pub mod identifier_helper;
