use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::oneshot;
use gramcheck::enums::analysis_error::AnalysisError;
use gramcheck::enums::severity::Severity;
use gramcheck::structs::analysis_result::AnalysisResult;
use gramcheck::structs::finding::Finding;
use gramcheck::structs::passed_check::PassedCheck;
use gramcheck::traits::analysis_provider::AnalysisProvider;

pub fn finding(category: &str, severity: Severity, confidence: f64) -> Finding {
    Finding {
        category: category.to_string(),
        severity,
        confidence,
        description: format!("{} detected in recent posts", category),
        examples: vec![format!("Example post flagged for {}", category.to_lowercase())],
    }
}

pub fn passed(category: &str) -> PassedCheck {
    PassedCheck {
        category: category.to_string(),
        description: format!("No {} concerns found", category.to_lowercase()),
    }
}

pub fn result_for(username: &str, violations: Vec<Finding>, warnings: Vec<Finding>, passed: Vec<PassedCheck>) -> AnalysisResult {
    AnalysisResult {
        account_username: username.to_string(),
        analysis_date: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
        violations,
        warnings,
        passed,
    }
}

pub fn spam_result(username: &str) -> AnalysisResult {
    result_for(
        username,
        vec![finding("Spam", Severity::High, 0.92)],
        vec![],
        vec![passed("Original Content")],
    )
}

pub fn clean_result(username: &str) -> AnalysisResult {
    result_for(
        username,
        vec![],
        vec![],
        vec![passed("Original Content"), passed("Hate Speech"), passed("Violence")],
    )
}

/// Answers from a fixed table and records every identifier it was asked for.
#[derive(Default)]
pub struct StaticProvider {
    results: HashMap<String, AnalysisResult>,
    seen: Mutex<Vec<String>>,
}

impl StaticProvider {
    pub fn with(mut self, identifier: &str, result: AnalysisResult) -> Self {
        self.results.insert(identifier.to_string(), result);
        self
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisProvider for StaticProvider {
    async fn analyze(&self, identifier: &str) -> Result<AnalysisResult, AnalysisError> {
        self.seen.lock().unwrap().push(identifier.to_string());
        self.results
            .get(identifier)
            .cloned()
            .ok_or_else(|| AnalysisError::NotFound { identifier: identifier.to_string() })
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Each identifier waits until the test releases its gate.
#[derive(Default)]
pub struct GatedProvider {
    gates: Mutex<HashMap<String, oneshot::Receiver<Result<AnalysisResult, AnalysisError>>>>,
}

impl GatedProvider {
    pub fn gate(&self, identifier: &str) -> oneshot::Sender<Result<AnalysisResult, AnalysisError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(identifier.to_string(), rx);
        tx
    }
}

#[async_trait]
impl AnalysisProvider for GatedProvider {
    async fn analyze(&self, identifier: &str) -> Result<AnalysisResult, AnalysisError> {
        let gate = self.gates.lock().unwrap().remove(identifier);
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(AnalysisError::failure("gate dropped"))),
            None => Err(AnalysisError::failure("no gate for identifier")),
        }
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}

/// Never answers.
pub struct HangingProvider;

#[async_trait]
impl AnalysisProvider for HangingProvider {
    async fn analyze(&self, _identifier: &str) -> Result<AnalysisResult, AnalysisError> {
        std::future::pending().await
    }

    fn name(&self) -> &'static str {
        "hanging"
    }
}

/// Fails the first `failures` calls, then succeeds.
pub struct FlakyProvider {
    failures: usize,
    calls: AtomicUsize,
}

impl FlakyProvider {
    pub fn new(failures: usize) -> Self {
        Self { failures, calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisProvider for FlakyProvider {
    async fn analyze(&self, identifier: &str) -> Result<AnalysisResult, AnalysisError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(AnalysisError::Network { reason: "connection reset".to_string() })
        } else {
            Ok(spam_result(identifier))
        }
    }

    fn name(&self) -> &'static str {
        "flaky"
    }
}
