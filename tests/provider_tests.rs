use std::net::SocketAddr;
use std::time::Duration;
use warp::http::StatusCode;
use tokio_test::assert_ok;
use warp::Filter;
use gramcheck::enums::analysis_error::AnalysisError;
use gramcheck::enums::provider_kind::ProviderKind;
use gramcheck::enums::severity::Severity;
use gramcheck::services::provider_factory::ProviderFactory;
use gramcheck::services::providers::directory_provider::DirectoryAnalysisProvider;
use gramcheck::services::providers::http_provider::HttpAnalysisProvider;
use gramcheck::structs::config::provider_config::ProviderConfig;
use gramcheck::traits::analysis_provider::AnalysisProvider;
use crate::support::spam_result;

const STORED_RESULT: &str = r#"{
  "accountUsername": "jane.doe",
  "analysisDate": "2026-03-14T09:30:00Z",
  "violations": [
    {
      "category": "Spam",
      "severity": "HIGH",
      "confidence": 0.92,
      "description": "Repeated promotional comments",
      "examples": ["Buy followers now!"]
    }
  ],
  "warnings": [
    { "category": "Engagement Bait", "severity": "Elevated", "confidence": 0.41, "description": "Like-for-like requests" }
  ],
  "passed": [
    { "category": "Violence", "description": "No violent content found" }
  ]
}"#;

#[tokio::test]
async fn directory_provider_reads_stored_result() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("jane.doe.json"), STORED_RESULT).unwrap();
    let provider = DirectoryAnalysisProvider::new(dir.path());

    let result = assert_ok!(provider.analyze("@Jane.Doe").await);

    assert_eq!(result.account_username, "jane.doe");
    assert_eq!(result.violations[0].severity, Severity::High);
    assert_eq!(result.warnings[0].severity, Severity::Other("Elevated".to_string()));
    assert!(result.warnings[0].examples.is_empty());
    assert_eq!(result.passed.len(), 1);
    assert_eq!(provider.name(), "directory");
}

#[tokio::test]
async fn directory_provider_error_cases() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    let provider = DirectoryAnalysisProvider::new(dir.path());

    assert_eq!(
        provider.analyze("ghost").await,
        Err(AnalysisError::NotFound { identifier: "ghost".to_string() })
    );
    assert!(matches!(provider.analyze("../secrets").await, Err(AnalysisError::InvalidIdentifier { .. })));
    assert!(matches!(provider.analyze("broken").await, Err(AnalysisError::Failure { .. })));
}

async fn analysis_service() -> SocketAddr {
    let analysis = warp::path!("v1" / "accounts" / String / "analysis")
        .and(warp::get())
        .and(warp::header::optional::<String>("authorization"))
        .map(|username: String, auth: Option<String>| {
            if auth.as_deref() != Some("Bearer test-token") {
                return warp::reply::with_status(warp::reply::json(&"unauthorized"), StatusCode::UNAUTHORIZED);
            }
            match username.as_str() {
                "jane.doe" => warp::reply::with_status(warp::reply::json(&spam_result("jane.doe")), StatusCode::OK),
                "broken" => warp::reply::with_status(warp::reply::json(&"oops"), StatusCode::INTERNAL_SERVER_ERROR),
                _ => warp::reply::with_status(warp::reply::json(&"missing"), StatusCode::NOT_FOUND),
            }
        });

    let (addr, server) = warp::serve(analysis).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

#[tokio::test]
async fn http_provider_fetches_with_bearer_token() {
    let addr = analysis_service().await;
    let provider = HttpAnalysisProvider::new(&format!("http://{}/v1/", addr), Some("test-token".to_string()));

    let result = assert_ok!(provider.analyze("@Jane.Doe").await);
    assert_eq!(result, spam_result("jane.doe"));
    assert_eq!(provider.name(), "http");
}

#[tokio::test]
async fn http_provider_maps_status_codes() {
    let addr = analysis_service().await;
    let base_url = format!("http://{}/v1", addr);
    let provider = HttpAnalysisProvider::new(&base_url, Some("test-token".to_string()));

    assert_eq!(
        provider.analyze("ghost").await,
        Err(AnalysisError::NotFound { identifier: "ghost".to_string() })
    );
    assert!(matches!(provider.analyze("broken").await, Err(AnalysisError::Failure { .. })));
    assert!(matches!(provider.analyze("bad name").await, Err(AnalysisError::InvalidIdentifier { .. })));

    let anonymous = HttpAnalysisProvider::new(&base_url, None);
    match anonymous.analyze("jane.doe").await {
        Err(AnalysisError::Failure { reason }) => assert!(reason.contains("401")),
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[tokio::test]
async fn http_provider_reports_unreachable_service() {
    let provider = HttpAnalysisProvider::new("http://127.0.0.1:1", None);
    let outcome = tokio::time::timeout(Duration::from_secs(10), provider.analyze("jane.doe")).await;
    assert!(matches!(outcome, Ok(Err(AnalysisError::Network { .. }))));
}

#[test]
fn factory_requires_results_dir_for_directory_kind() {
    let config = ProviderConfig {
        kind: ProviderKind::Directory,
        results_dir: None,
        ..ProviderConfig::default()
    };
    assert!(ProviderFactory::from_config(&config).is_err());

    let config = ProviderConfig {
        kind: ProviderKind::Directory,
        results_dir: Some("/tmp".to_string()),
        ..ProviderConfig::default()
    };
    assert_eq!(ProviderFactory::from_config(&config).unwrap().name(), "directory");
    assert_eq!(ProviderFactory::from_config(&ProviderConfig::default()).unwrap().name(), "http");
}
