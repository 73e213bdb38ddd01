mod support;

mod provider_tests;
mod rendering_tests;
mod server_tests;
