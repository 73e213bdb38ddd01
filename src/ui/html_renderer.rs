use maud::{html, Markup, PreEscaped, DOCTYPE};
use crate::config::constants::EXAMPLES_HEADING;
use crate::enums::report_action::ReportAction;
use crate::enums::route::Route;
use crate::structs::view::failure_page::FailurePage;
use crate::structs::view::finding_view::FindingView;
use crate::structs::view::report_page::ReportPage;
use crate::structs::view::report_view::ReportView;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #0f1115; color: #e6e6e6; margin: 0; }
main { max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }
header { text-align: center; margin-bottom: 2rem; }
.muted { color: #9aa0a6; }
.card { border: 1px solid #2a2e35; border-radius: .5rem; padding: 1.25rem; margin-bottom: 1rem; }
.status { text-align: center; padding: 2rem; }
.status-violations h2, .violation h4 { color: #ef4444; }
.status-warnings h2, .warning h4 { color: #eab308; }
.status-clean h2, .passed h4 { color: #22c55e; }
.badge { display: inline-block; border: 1px solid currentColor; border-radius: 999px; padding: 0 .5rem; font-size: .75rem; margin-left: .25rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr)); gap: 1rem; }
.actions { display: flex; justify-content: center; gap: 1rem; margin-top: 2rem; }
.actions a, .actions button { color: inherit; background: #1f232a; border: 1px solid #2a2e35; border-radius: .375rem; padding: .5rem 1rem; text-decoration: none; cursor: pointer; font: inherit; }
@media print { body { background: #fff; color: #000; } .actions { display: none; } }
"#;

const AUTOPRINT_SCRIPT: &str = "window.addEventListener('load', function () { window.print(); });";

/// Renders report views as standalone HTML pages.
pub struct HtmlRenderer;

impl HtmlRenderer {

    pub fn render(view: &ReportView, autoprint: bool) -> String {
        match view {
            ReportView::Entry => Self::entry_page(None),
            ReportView::Loading { message } => Self::document(
                "Loading",
                html! { main { p.status.muted { (message) } } },
                false,
            ),
            ReportView::Failed(page) => Self::failure_page(page),
            ReportView::Report(page) => Self::report_page(page, autoprint),
        }
    }

    /// Entry view with the account form. `notice` is shown above the form.
    pub fn entry_page(notice: Option<&str>) -> String {
        let body = html! {
            main {
                header {
                    h1 { "Account Guideline Check" }
                    p.muted { "Enter a public account username to see its analysis report." }
                }
                @if let Some(notice) = notice {
                    p.card.status-violations { (notice) }
                }
                form.card action="/analyze" method="get" {
                    label for="username" { "Username" }
                    " "
                    input #username name="username" placeholder="@username" required autofocus;
                    " "
                    button type="submit" { "Analyze" }
                }
            }
        };
        Self::document("Account Guideline Check", body, false)
    }

    pub fn report_page(page: &ReportPage, autoprint: bool) -> String {
        let body = html! {
            main {
                header {
                    h1 { (page.title) }
                    p { "Account: " strong { "@" (page.account_username) } }
                    p.muted { "Analysis completed on " (page.analysis_date_display()) }
                }
                section class={ "card status status-" (page.status.as_str()) } {
                    h2 { (page.headline) }
                    p.muted { (page.summary) }
                }
                @if let Some(heading) = page.violations_heading() {
                    (Self::findings_section(&heading, &page.violations, "violation"))
                }
                @if let Some(heading) = page.warnings_heading() {
                    (Self::findings_section(&heading, &page.warnings, "warning"))
                }
                section {
                    h3 { (page.passed_heading()) }
                    div.grid {
                        @for check in &page.passed {
                            div.card.passed {
                                h4 { (check.category) }
                                p.muted { (check.description) }
                            }
                        }
                    }
                }
                aside.card { strong { "Disclaimer:" } " " (page.disclaimer) }
                nav.actions {
                    @for action in &page.actions {
                        (Self::action(*action, &page.account_username))
                    }
                }
            }
        };

        let title = format!("Analysis Results for @{}", page.account_username);
        Self::document(&title, body, autoprint)
    }

    fn findings_section(heading: &str, findings: &[FindingView], class: &str) -> Markup {
        html! {
            section {
                h3 { (heading) }
                @for finding in findings {
                    div class={ "card " (class) } {
                        h4 {
                            (finding.category) " "
                            span.badge { (finding.severity_badge) }
                            span.badge { (finding.confidence_label()) }
                        }
                        p { (finding.description) }
                        @if !finding.examples.is_empty() {
                            p.muted { (EXAMPLES_HEADING) }
                            ul {
                                @for example in &finding.examples {
                                    li { (example) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn failure_page(page: &FailurePage) -> String {
        let body = html! {
            main {
                section.card.status.status-violations {
                    h2 { (page.headline) }
                    p { "Account: " strong { "@" (page.identifier) } }
                    p { (page.message) }
                }
                nav.actions {
                    @for action in &page.actions {
                        (Self::action(*action, &page.identifier))
                    }
                }
            }
        };
        Self::document(page.headline, body, false)
    }

    fn action(action: ReportAction, username: &str) -> Markup {
        match action {
            ReportAction::AnalyzeAnother => html! { a href=(Route::Entry.path()) { (action.label()) } },
            ReportAction::ExportReport => html! { button onclick="window.print()" { (action.label()) } },
            ReportAction::TryAgain => html! {
                a href=(Route::Results(username.to_string()).path()) { (action.label()) }
            },
        }
    }

    fn document(title: &str, body: Markup, autoprint: bool) -> String {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    style { (PreEscaped(STYLE)) }
                    @if autoprint {
                        script { (PreEscaped(AUTOPRINT_SCRIPT)) }
                    }
                }
                body { (body) }
            }
        }
        .into_string()
    }
}
