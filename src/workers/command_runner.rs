use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedReceiver;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::LOADING_MESSAGE;
use crate::enums::commands::Commands;
use crate::enums::load_outcome::LoadOutcome;
use crate::enums::output_format::OutputFormat;
use crate::enums::presenter_state::PresenterState;
use crate::enums::report_action::ReportAction;
use crate::enums::route::Route;
use crate::errors::{GramcheckError, GramcheckResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::provider_factory::ProviderFactory;
use crate::services::report_exporter::ReportExporter;
use crate::services::result_presenter::ResultPresenter;
use crate::structs::config::config::Config;
use crate::structs::view::report_view::ReportView;
use crate::ui::channel_navigator::ChannelNavigator;
use crate::ui::html_renderer::HtmlRenderer;
use crate::ui::report_server::ReportServer;
use crate::ui::text_renderer::TextRenderer;

/// Where the interactive report loop goes next.
enum Step {
    Show(Option<String>),
    Retry,
    Entry,
    Menu,
    Quit,
}

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> GramcheckResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Report { username, format, export, no_interactive } => {
                self.report_command(username, format, export, no_interactive).await
            }
            Commands::Serve { port, open } => self.serve_command(port, open).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> GramcheckResult<()> {
        log::info!("🚀 Initializing gramcheck configuration...");
        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("📝 Edit {} to point at your analysis provider.", path.display());
        log::info!("🔧 Run 'gramcheck validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> GramcheckResult<()> {
        log::info!("🔍 Validating gramcheck configuration...");

        let config = ConfigManager::load(self.config_path.as_deref())?;
        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("📡 Provider: {:?}, timeout {}s", config.provider.kind, config.provider.timeout_secs);
                Ok(())
            }
            Err(problems) => {
                log::error!("❌ Issues found:");
                for problem in &problems {
                    log::error!("   - {}", problem);
                }
                Err(GramcheckError::config_error(
                    &format!("{} configuration problem(s)", problems.len()),
                    None,
                    Some("Fix the issues above and run 'gramcheck validate' again"),
                ))
            }
        }
    }

    async fn report_command(
        &self,
        username: Option<String>,
        format: OutputFormat,
        export: bool,
        no_interactive: bool,
    ) -> GramcheckResult<()> {
        let config = ConfigManager::load_validated(self.config_path.as_deref())?;
        let provider = ProviderFactory::from_config(&config.provider)?;
        let (navigator, mut navigation) = ChannelNavigator::new();
        let presenter = ResultPresenter::new(provider, Arc::new(navigator), config.provider.timeout());
        let renderer = TextRenderer::new(config.output.color && io::stdout().is_terminal());
        let exporter = ReportExporter::from_config(&config.output);
        let identifier = username.and_then(|name| Route::Results(name).encoded_identifier());

        if no_interactive {
            return Self::report_once(&presenter, identifier, format, export, &renderer, &exporter).await;
        }

        let mut export_pending = export;
        let mut step = Step::Show(identifier);
        loop {
            step = match step {
                Step::Show(raw) => {
                    Self::load(&presenter, raw.as_deref()).await;
                    Self::follow_navigation(&mut navigation, Step::Menu)
                }
                Step::Retry => {
                    let mut spinner = AnimatedLogger::start(LOADING_MESSAGE);
                    let outcome = presenter.retry().await;
                    Self::finish_spinner(&mut spinner, outcome).await;
                    Self::follow_navigation(&mut navigation, Step::Menu)
                }
                Step::Entry => match Self::prompt_username()? {
                    Some(name) => Step::Show(Route::Results(name).encoded_identifier()),
                    None => Step::Quit,
                },
                Step::Menu => {
                    let view = presenter.view();
                    Self::print_view(&view, format, &renderer)?;

                    if export_pending {
                        if let ReportView::Report(page) = &view {
                            exporter.export(page)?;
                            export_pending = false;
                        }
                    }

                    match Self::prompt_action(&view)? {
                        Some(ReportAction::AnalyzeAnother) => {
                            presenter.restart();
                            Self::follow_navigation(&mut navigation, Step::Entry)
                        }
                        Some(ReportAction::ExportReport) => {
                            if let ReportView::Report(page) = &view {
                                let path = exporter.export(page)?;
                                println!("💾 Report saved to {}", path.display());
                            }
                            Step::Menu
                        }
                        Some(ReportAction::TryAgain) => Step::Retry,
                        None => Step::Quit,
                    }
                }
                Step::Quit => {
                    presenter.unmount();
                    log::info!("👋 Done");
                    return Ok(());
                }
            };
        }
    }

    async fn report_once(
        presenter: &ResultPresenter,
        identifier: Option<String>,
        format: OutputFormat,
        export: bool,
        renderer: &TextRenderer,
        exporter: &ReportExporter,
    ) -> GramcheckResult<()> {
        if Self::load(presenter, identifier.as_deref()).await == LoadOutcome::Redirected {
            return Err(GramcheckError::validation_error(
                "username",
                "",
                "an account username is required",
                Some("Pass a username, e.g. 'gramcheck report jane.doe --no-interactive'"),
            ));
        }

        let view = presenter.view();
        Self::print_view(&view, format, renderer)?;

        if export {
            if let ReportView::Report(page) = &view {
                exporter.export(page)?;
            }
        }

        match presenter.state() {
            PresenterState::Failed { identifier, error } => Err(GramcheckError::analysis_failed(&identifier, &error)),
            _ => Ok(()),
        }
    }

    async fn load(presenter: &ResultPresenter, raw: Option<&str>) -> LoadOutcome {
        if raw.map_or(true, str::is_empty) {
            return presenter.show(raw).await;
        }

        let mut spinner = AnimatedLogger::start(LOADING_MESSAGE);
        let outcome = presenter.show(raw).await;
        Self::finish_spinner(&mut spinner, outcome).await;
        outcome
    }

    async fn finish_spinner(spinner: &mut AnimatedLogger, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded => spinner.stop("Analysis loaded").await,
            LoadOutcome::Failed => spinner.error("Analysis failed").await,
            LoadOutcome::Redirected | LoadOutcome::Superseded => spinner.stop("Analysis cancelled").await,
        }
    }

    /// Applies the most recent navigation request, if any.
    fn follow_navigation(navigation: &mut UnboundedReceiver<Route>, otherwise: Step) -> Step {
        let mut latest = None;
        while let Ok(route) = navigation.try_recv() {
            latest = Some(route);
        }

        match latest {
            Some(Route::Entry) => Step::Entry,
            Some(route @ Route::Results(_)) => Step::Show(route.encoded_identifier()),
            None => otherwise,
        }
    }

    fn print_view(view: &ReportView, format: OutputFormat, renderer: &TextRenderer) -> GramcheckResult<()> {
        match format {
            OutputFormat::Text => print!("{}", renderer.render(view)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
            OutputFormat::Html => print!("{}", HtmlRenderer::render(view, false)),
        }
        io::stdout().flush()?;
        Ok(())
    }

    fn prompt_username() -> GramcheckResult<Option<String>> {
        print!("\n👤 Account username to analyze (blank to quit): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }

        let name = input.trim();
        Ok((!name.is_empty()).then(|| name.to_string()))
    }

    fn prompt_action(view: &ReportView) -> GramcheckResult<Option<ReportAction>> {
        let actions = match view {
            ReportView::Report(page) => &page.actions,
            ReportView::Failed(page) => &page.actions,
            ReportView::Entry | ReportView::Loading { .. } => return Ok(None),
        };

        loop {
            print!("\nSelect option (1-{}, q to quit): ", actions.len());
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                return Ok(None);
            }

            match input.trim().to_lowercase().as_str() {
                "q" | "quit" => return Ok(None),
                choice => match choice.parse::<usize>() {
                    Ok(n) if (1..=actions.len()).contains(&n) => return Ok(Some(actions[n - 1])),
                    _ => println!("Invalid option '{}'.", choice),
                },
            }
        }
    }

    async fn serve_command(&self, port: Option<u16>, open: bool) -> GramcheckResult<()> {
        let config: Config = ConfigManager::load_validated(self.config_path.as_deref())?;
        let provider = ProviderFactory::from_config(&config.provider)?;
        let server = ReportServer::new(provider, config.provider.timeout());

        let (addr, running) = server.bind(port.unwrap_or(config.server.port), async {
            if tokio::signal::ctrl_c().await.is_err() {
                log::warn!("⚠️ Could not listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
            log::info!("🛑 Shutting down report server...");
        })?;

        log::info!("⏹️ Press Ctrl+C to stop the server");

        if open || config.server.open_browser {
            if let Err(e) = webbrowser::open(&format!("http://{}", addr)) {
                log::warn!("⚠️ Could not open browser: {}", e);
            }
        }

        running.await;
        log::info!("✅ Report server shutdown complete");
        Ok(())
    }
}
