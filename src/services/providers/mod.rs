pub mod directory_provider;
pub mod http_provider;
