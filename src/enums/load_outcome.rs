/// What happened to a single fetch issued by the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Redirected,
    Loaded,
    Failed,
    /// A newer identifier took over before this fetch finished; its result
    /// was dropped.
    Superseded,
}
