//! Presents automated community-guideline analyses of social media accounts
//! as scored reports, in the terminal or over HTTP.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
