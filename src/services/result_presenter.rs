use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::timeout;
use crate::enums::analysis_error::AnalysisError;
use crate::enums::load_outcome::LoadOutcome;
use crate::enums::presenter_state::PresenterState;
use crate::enums::route::Route;
use crate::helpers::identifier_helper::decode_identifier;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::report_summary::ReportSummary;
use crate::structs::view::report_view::ReportView;
use crate::traits::analysis_provider::AnalysisProvider;
use crate::traits::navigator::Navigator;

struct Slot {
    state: PresenterState,
    raw_identifier: Option<String>,
}

/// Fetches the analysis for one account identifier at a time and exposes it
/// as a renderable state.
///
/// Every identifier change bumps a generation counter. A fetch only commits
/// its outcome while its generation is still current, and an in-flight fetch
/// is dropped as soon as a newer generation appears.
pub struct ResultPresenter {
    provider: Arc<dyn AnalysisProvider>,
    navigator: Arc<dyn Navigator>,
    fetch_timeout: Duration,
    generation: watch::Sender<u64>,
    slot: Mutex<Slot>,
}

impl ResultPresenter {
    pub fn new(provider: Arc<dyn AnalysisProvider>, navigator: Arc<dyn Navigator>, fetch_timeout: Duration) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            provider,
            navigator,
            fetch_timeout,
            generation,
            slot: Mutex::new(Slot {
                state: PresenterState::Idle,
                raw_identifier: None,
            }),
        }
    }

    pub fn state(&self) -> PresenterState {
        self.slot().state.clone()
    }

    /// Raw (still percent-encoded) identifier the current state belongs to.
    pub fn identifier(&self) -> Option<String> {
        self.slot().raw_identifier.clone()
    }

    pub fn result(&self) -> Option<Arc<AnalysisResult>> {
        self.slot().state.result().cloned()
    }

    pub fn summary(&self) -> Option<ReportSummary> {
        self.result().map(|result| ReportSummary::from_result(&result))
    }

    pub fn view(&self) -> ReportView {
        ReportView::from_state(&self.slot().state)
    }

    /// Switches the presenter to a new raw identifier and waits for its
    /// analysis. An absent or empty identifier redirects to the entry view
    /// without calling the provider.
    pub async fn show(&self, raw_identifier: Option<&str>) -> LoadOutcome {
        let raw = match raw_identifier.filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.to_string(),
            None => {
                self.begin(None, PresenterState::Redirected);
                log::info!("↩️ No account identifier given, returning to entry view");
                self.navigator.navigate(Route::Entry);
                return LoadOutcome::Redirected;
            }
        };

        let identifier = match decode_identifier(&raw) {
            Ok(identifier) => identifier,
            Err(error) => {
                log::error!("❌ Analysis failed for '{}': {}", raw, error);
                self.begin(Some(raw.clone()), PresenterState::Failed { identifier: raw, error });
                return LoadOutcome::Failed;
            }
        };

        let generation = self.begin(
            Some(raw),
            PresenterState::Loading { identifier: identifier.clone() },
        );
        self.fetch(generation, identifier).await
    }

    /// Re-issues the fetch for the current identifier.
    pub async fn retry(&self) -> LoadOutcome {
        let raw = self.identifier();
        log::info!("🔄 Retrying analysis");
        self.show(raw.as_deref()).await
    }

    /// Drops the current report and goes back to the entry view.
    pub fn restart(&self) {
        self.unmount();
        self.navigator.navigate(Route::Entry);
    }

    /// Discards the held result and cancels any in-flight fetch.
    pub fn unmount(&self) {
        self.begin(None, PresenterState::Idle);
    }

    async fn fetch(&self, generation: u64, identifier: String) -> LoadOutcome {
        log::info!("🔍 Requesting analysis for @{} from {} provider", identifier, self.provider.name());

        let superseded = wait_until_superseded(self.generation.subscribe(), generation);
        let outcome = tokio::select! {
            result = timeout(self.fetch_timeout, self.provider.analyze(&identifier)) => match result {
                Ok(result) => result,
                Err(_) => Err(AnalysisError::Timeout {
                    millis: u64::try_from(self.fetch_timeout.as_millis()).unwrap_or(u64::MAX),
                }),
            },
            () = superseded => {
                log::info!("⏭️ Cancelled analysis for @{}, identifier changed", identifier);
                return LoadOutcome::Superseded;
            }
        };

        self.commit(generation, identifier, outcome)
    }

    fn commit(&self, generation: u64, identifier: String, outcome: Result<AnalysisResult, AnalysisError>) -> LoadOutcome {
        let mut slot = self.slot();
        if *self.generation.borrow() != generation {
            log::info!("⏭️ Discarding stale analysis for @{}", identifier);
            return LoadOutcome::Superseded;
        }

        match outcome {
            Ok(result) => {
                log::info!(
                    "✅ Analysis loaded for @{} ({} violations, {} warnings, {} passed)",
                    result.account_username,
                    result.violations.len(),
                    result.warnings.len(),
                    result.passed.len()
                );
                slot.state = PresenterState::Loaded(Arc::new(result));
                LoadOutcome::Loaded
            }
            Err(error) => {
                log::error!("❌ Analysis failed for @{}: {}", identifier, error);
                slot.state = PresenterState::Failed { identifier, error };
                LoadOutcome::Failed
            }
        }
    }

    fn begin(&self, raw_identifier: Option<String>, state: PresenterState) -> u64 {
        let mut slot = self.slot();
        let mut current = 0;
        self.generation.send_modify(|generation| {
            *generation += 1;
            current = *generation;
        });
        slot.raw_identifier = raw_identifier;
        slot.state = state;
        current
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn wait_until_superseded(mut receiver: watch::Receiver<u64>, generation: u64) {
    loop {
        if *receiver.borrow_and_update() != generation {
            return;
        }
        if receiver.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
