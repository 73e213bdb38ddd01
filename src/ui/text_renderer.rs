use terminal_size::{terminal_size, Width};
use crate::config::constants::{EXAMPLES_HEADING, FALLBACK_TERMINAL_WIDTH, MAX_RULE_WIDTH};
use crate::enums::overall_status::OverallStatus;
use crate::structs::view::failure_page::FailurePage;
use crate::structs::view::finding_view::FindingView;
use crate::structs::view::report_page::ReportPage;
use crate::structs::view::report_view::ReportView;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Renders report views as terminal text.
pub struct TextRenderer {
    color: bool,
    width: usize,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        let width = terminal_size()
            .map(|(Width(w), _)| w as usize)
            .unwrap_or(FALLBACK_TERMINAL_WIDTH);
        Self::with_width(color, width)
    }

    pub fn with_width(color: bool, width: usize) -> Self {
        Self {
            color,
            width: width.clamp(40, MAX_RULE_WIDTH),
        }
    }

    pub fn render(&self, view: &ReportView) -> String {
        match view {
            ReportView::Entry => "Enter an account username to analyze.\n".to_string(),
            ReportView::Loading { message } => format!("⏳ {}\n", message),
            ReportView::Failed(page) => self.render_failure(page),
            ReportView::Report(page) => self.render_report(page),
        }
    }

    fn render_report(&self, page: &ReportPage) -> String {
        let mut out = String::new();
        let rule = "━".repeat(self.width);

        out.push_str(&format!("{}\n", rule));
        out.push_str(&format!("  {}\n", self.paint(BOLD, page.title)));
        out.push_str(&format!("  Account: {}\n", self.paint(BOLD, &format!("@{}", page.account_username))));
        out.push_str(&format!("  {}\n", self.paint(DIM, &format!("Analysis completed on {}", page.analysis_date_display()))));
        out.push_str(&format!("{}\n\n", rule));

        let status_color = Self::status_color(page.status);
        out.push_str(&format!("{} {}\n", page.status.emoji(), self.paint(status_color, page.headline)));
        out.push_str(&format!("   {}\n", page.summary));

        if let Some(heading) = page.violations_heading() {
            out.push_str(&format!("\n{}\n", self.paint(RED, &format!("❌ {}", heading))));
            for finding in &page.violations {
                self.render_finding(&mut out, finding, RED);
            }
        }

        if let Some(heading) = page.warnings_heading() {
            out.push_str(&format!("\n{}\n", self.paint(YELLOW, &format!("⚠️ {}", heading))));
            for finding in &page.warnings {
                self.render_finding(&mut out, finding, YELLOW);
            }
        }

        out.push_str(&format!("\n{}\n", self.paint(GREEN, &format!("✅ {}", page.passed_heading()))));
        for check in &page.passed {
            out.push_str(&format!("  {} {}\n", self.paint(GREEN, "✔"), self.paint(GREEN, &check.category)));
            for line in wrap(&check.description, self.width.saturating_sub(5)) {
                out.push_str(&format!("     {}\n", self.paint(DIM, &line)));
            }
        }

        out.push('\n');
        let disclaimer = format!("Disclaimer: {}", page.disclaimer);
        for (i, line) in wrap(&disclaimer, self.width.saturating_sub(5)).iter().enumerate() {
            let prefix = if i == 0 { "🛡️  " } else { "    " };
            out.push_str(&format!("{}{}\n", prefix, line));
        }

        out.push_str(&format!("{}\n", rule));
        let actions: Vec<String> = page
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| format!("{}. {}", i + 1, action.label()))
            .collect();
        out.push_str(&format!("  {}\n", actions.join("   ")));
        out
    }

    fn render_finding(&self, out: &mut String, finding: &FindingView, color: &str) {
        out.push_str(&format!(
            "\n  {}  [{}] [{}]\n",
            self.paint(&format!("{}{}", BOLD, color), &finding.category),
            self.paint(color, &finding.severity_badge),
            finding.confidence_label()
        ));
        for line in wrap(&finding.description, self.width.saturating_sub(5)) {
            out.push_str(&format!("     {}\n", line));
        }
        if !finding.examples.is_empty() {
            out.push_str(&format!("     {}\n", self.paint(DIM, EXAMPLES_HEADING)));
            for example in &finding.examples {
                out.push_str(&format!("       {} {}\n", self.paint(color, "•"), example));
            }
        }
    }

    fn render_failure(&self, page: &FailurePage) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.paint(RED, &format!("❌ {}", page.headline))));
        out.push_str(&format!("   Account: @{}\n", page.identifier));
        for line in wrap(&page.message, self.width.saturating_sub(3)) {
            out.push_str(&format!("   {}\n", line));
        }
        if !page.retryable {
            out.push_str(&format!("   {}\n", self.paint(DIM, "Retrying is unlikely to help; check the account name.")));
        }
        let actions: Vec<String> = page
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| format!("{}. {}", i + 1, action.label()))
            .collect();
        out.push_str(&format!("\n  {}\n", actions.join("   ")));
        out
    }

    fn status_color(status: OverallStatus) -> &'static str {
        match status {
            OverallStatus::Violations => RED,
            OverallStatus::Warnings => YELLOW,
            OverallStatus::Clean => GREEN,
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Greedy word wrap. Words longer than the width get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap("one two three four", 9), vec!["one two", "three", "four"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
        assert_eq!(wrap("unbreakableword x", 5), vec!["unbreakableword", "x"]);
    }
}
