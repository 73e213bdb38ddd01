use std::fs;
use std::path::PathBuf;
use chrono::Utc;
use crate::errors::{GramcheckError, GramcheckResult};
use crate::structs::config::output_config::OutputConfig;
use crate::structs::view::report_page::ReportPage;
use crate::ui::html_renderer::HtmlRenderer;

/// Writes a printable copy of a report and hands it to the browser, whose
/// print dialog opens as soon as the page loads.
pub struct ReportExporter {
    export_dir: PathBuf,
    open_in_browser: bool,
}

impl ReportExporter {
    pub fn new(export_dir: impl Into<PathBuf>, open_in_browser: bool) -> Self {
        Self {
            export_dir: export_dir.into(),
            open_in_browser,
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.export_dir, config.open_exports)
    }

    pub fn export(&self, page: &ReportPage) -> GramcheckResult<PathBuf> {
        fs::create_dir_all(&self.export_dir)
            .map_err(|e| GramcheckError::file_error(&self.export_dir.display().to_string(), "create directory", &e.to_string()))?;

        let file_name = format!(
            "{}-{}.html",
            file_safe(&page.account_username),
            Utc::now().format("%Y%m%d-%H%M%S")
        );
        let path = self.export_dir.join(file_name);

        fs::write(&path, HtmlRenderer::report_page(page, true))
            .map_err(|e| GramcheckError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
        log::info!("💾 Report exported to {}", path.display());

        if self.open_in_browser {
            match webbrowser::open(&path.to_string_lossy()) {
                Ok(()) => log::info!("🖨️ Opened report in browser for printing"),
                Err(e) => log::warn!("⚠️ Could not open browser: {}", e),
            }
        }

        Ok(path)
    }
}

fn file_safe(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' { c } else { '_' })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        "report".to_string()
    } else {
        cleaned
    }
}
