pub mod channel_navigator;
pub mod html_renderer;
pub mod report_server;
pub mod text_renderer;
