use std::sync::Arc;
use gramcheck::enums::analysis_error::AnalysisError;
use gramcheck::enums::overall_status::OverallStatus;
use gramcheck::enums::presenter_state::PresenterState;
use gramcheck::enums::report_action::ReportAction;
use gramcheck::enums::severity::Severity;
use gramcheck::services::report_exporter::ReportExporter;
use gramcheck::structs::view::report_page::ReportPage;
use gramcheck::structs::view::report_view::ReportView;
use gramcheck::ui::html_renderer::HtmlRenderer;
use gramcheck::ui::text_renderer::TextRenderer;
use crate::support::{clean_result, finding, result_for, spam_result};

fn loaded_view(result: gramcheck::structs::analysis_result::AnalysisResult) -> ReportView {
    ReportView::from_state(&PresenterState::Loaded(Arc::new(result)))
}

#[test]
fn report_page_for_single_violation() {
    let page = ReportPage::from_result(&spam_result("jane.doe"));

    assert_eq!(page.status, OverallStatus::Violations);
    assert_eq!(page.headline, "Policy Violations Detected");
    assert_eq!(page.summary, "1 potential issue identified");
    assert_eq!(page.violations_heading().as_deref(), Some("Policy Violations (1)"));
    assert_eq!(page.warnings_heading(), None);
    assert_eq!(page.passed_heading(), "Passed Guidelines (1)");
    assert_eq!(page.analysis_date_display(), "March 14, 2026");
    assert_eq!(page.violations[0].severity_badge, "High Risk");
    assert_eq!(page.violations[0].confidence_label(), "92% confidence");
    assert_eq!(page.actions, vec![ReportAction::AnalyzeAnother, ReportAction::ExportReport]);
}

#[test]
fn text_report_lists_sections_and_actions() {
    let view = loaded_view(result_for(
        "jane.doe",
        vec![],
        vec![finding("Engagement Bait", Severity::Medium, 0.456)],
        vec![],
    ));
    let text = TextRenderer::with_width(false, 80).render(&view);

    assert!(text.contains("Analysis Results"));
    assert!(text.contains("@jane.doe"));
    assert!(text.contains("Potential Issues Found"));
    assert!(text.contains("Potential Issues (1)"));
    assert!(text.contains("[Medium Risk] [46% confidence]"));
    assert!(text.contains("Examples found:"));
    assert!(text.contains("Passed Guidelines (0)"));
    assert!(!text.contains("Policy Violations ("));
    assert!(text.contains("Disclaimer:"));
    assert!(text.contains("1. Analyze Another Account"));
    assert!(text.contains("2. Export Report"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn colored_text_uses_ansi_codes() {
    let text = TextRenderer::with_width(true, 80).render(&loaded_view(spam_result("jane.doe")));
    assert!(text.contains("\x1b[31m"));
}

#[test]
fn clean_html_report_shows_every_passed_check() {
    let html = HtmlRenderer::render(&loaded_view(clean_result("jane.doe")), false);

    assert!(html.contains("Account Appears Clean"));
    assert!(html.contains("No significant guideline violations detected"));
    assert!(html.contains("Passed Guidelines (3)"));
    assert_eq!(html.matches("class=\"card passed\"").count(), 3);
    assert!(!html.contains("Policy Violations ("));
    assert!(!html.contains("Potential Issues ("));
    assert!(html.contains("Instagram's community guidelines"));
    assert!(!html.contains("window.addEventListener"));
}

#[test]
fn html_escapes_account_content() {
    let mut result = spam_result("jane.doe");
    result.violations[0].category = "<script>steal()</script>".to_string();
    result.violations[0].examples = vec!["<script>alert(1)</script>".to_string()];
    let html = HtmlRenderer::render(&loaded_view(result), false);

    assert!(html.contains("&lt;script&gt;steal()&lt;/script&gt;"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>steal()"));
    assert!(!html.contains("<script>alert(1)"));
}

#[test]
fn printable_export_triggers_print_dialog() {
    let page = ReportPage::from_result(&spam_result("jane.doe"));
    assert!(HtmlRenderer::report_page(&page, true).contains("window.addEventListener('load'"));
}

#[test]
fn failed_view_offers_retry_link() {
    let view = ReportView::from_state(&PresenterState::Failed {
        identifier: "jane doe".to_string(),
        error: AnalysisError::Network { reason: "connection reset".to_string() },
    });

    let html = HtmlRenderer::render(&view, false);
    assert!(html.contains("Analysis Failed"));
    assert!(html.contains("href=\"/results/jane%20doe\""));
    assert!(html.contains("Try Again"));

    let text = TextRenderer::with_width(false, 80).render(&view);
    assert!(text.contains("Network error: connection reset"));
    assert!(text.contains("1. Try Again"));
}

#[test]
fn loading_and_entry_views() {
    let loading = ReportView::from_state(&PresenterState::Loading { identifier: "jane.doe".to_string() });
    assert_eq!(TextRenderer::with_width(false, 80).render(&loading), "⏳ Loading results...\n");
    assert_eq!(ReportView::from_state(&PresenterState::Idle), ReportView::Entry);
    assert!(HtmlRenderer::render(&ReportView::Entry, false).contains("name=\"username\""));
}

#[test]
fn json_view_is_tagged() {
    let value = serde_json::to_value(loaded_view(spam_result("jane.doe"))).unwrap();
    assert_eq!(value["view"], "report");
    assert_eq!(value["status"], "violations");
    assert_eq!(value["total_issues"], 1);
}

#[test]
fn exporter_writes_printable_file() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = ReportExporter::new(dir.path().join("reports"), false);
    let page = ReportPage::from_result(&spam_result("jane.doe"));

    let path = exporter.export(&page).unwrap();

    assert!(path.starts_with(dir.path().join("reports")));
    let file_name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("jane.doe-"));
    assert!(file_name.ends_with(".html"));
    assert!(std::fs::read_to_string(&path).unwrap().contains("window.addEventListener('load'"));
}
