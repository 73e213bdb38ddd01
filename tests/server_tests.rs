use std::sync::Arc;
use std::time::Duration;
use warp::http::StatusCode;
use gramcheck::ui::report_server::ReportServer;
use crate::support::{clean_result, spam_result, StaticProvider};

fn server() -> ReportServer {
    let mut hostile = spam_result("mallory");
    hostile.violations[0].category = "<script>steal()</script>".to_string();
    let provider = StaticProvider::default()
        .with("mallory", hostile)
        .with("jane.doe", spam_result("jane.doe"))
        .with("@clean", clean_result("clean"));
    ReportServer::new(Arc::new(provider), Duration::from_secs(5))
}

#[tokio::test]
async fn entry_page_has_username_form() {
    let routes = server().routes();
    let response = warp::test::request().method("GET").path("/").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(String::from_utf8_lossy(response.body()).contains("action=\"/analyze\""));
}

#[tokio::test]
async fn analyze_form_redirects_to_encoded_results_path() {
    let routes = server().routes();

    let response = warp::test::request().method("GET").path("/analyze?username=%40clean").reply(&routes).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/results/%40clean");

    let response = warp::test::request().method("GET").path("/analyze?username=").reply(&routes).await;
    assert_eq!(response.headers()["location"], "/");
}

#[tokio::test]
async fn results_without_identifier_redirect_to_entry() {
    let routes = server().routes();
    let response = warp::test::request().method("GET").path("/results").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");
}

#[tokio::test]
async fn results_page_renders_report() {
    let routes = server().routes();
    let response = warp::test::request().method("GET").path("/results/%40clean").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8_lossy(response.body()).to_string();
    assert!(body.contains("Analysis Results"));
    assert!(body.contains("Account Appears Clean"));
    assert!(body.contains("Passed Guidelines (3)"));
    assert!(!body.contains("window.addEventListener"));
}

#[tokio::test]
async fn export_page_prints_on_load() {
    let routes = server().routes();
    let response = warp::test::request().method("GET").path("/results/jane.doe/export").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(String::from_utf8_lossy(response.body()).contains("window.addEventListener('load'"));
}

#[tokio::test]
async fn unknown_account_is_not_found() {
    let routes = server().routes();
    let response = warp::test::request().method("GET").path("/results/ghost").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = String::from_utf8_lossy(response.body()).to_string();
    assert!(body.contains("Analysis Failed"));
    assert!(body.contains("Try Again"));
}

#[tokio::test]
async fn malformed_identifier_is_bad_request() {
    let routes = server().routes();
    let response = warp::test::request().method("GET").path("/api/results/jane%zz").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(json["view"], "failed");
    assert_eq!(json["error"]["kind"], "invalid_identifier");
}

#[tokio::test]
async fn api_returns_report_json() {
    let routes = server().routes();
    let response = warp::test::request().method("GET").path("/api/results/jane.doe").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(json["view"], "report");
    assert_eq!(json["account_username"], "jane.doe");
    assert_eq!(json["summary"], "1 potential issue identified");
    assert_eq!(json["violations"][0]["confidence_percent"], 92);
}

#[tokio::test]
async fn bound_server_stops_on_shutdown() {
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let (addr, running) = server()
        .bind(0, async move {
            let _ = rx.await;
        })
        .unwrap();
    assert_ne!(addr.port(), 0);

    let handle = tokio::spawn(running);
    tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
}

#[tokio::test]
async fn results_page_escapes_provider_content() {
    let routes = server().routes();
    let response = warp::test::request().method("GET").path("/results/mallory").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8_lossy(response.body()).to_string();
    assert!(body.contains("&lt;script&gt;steal()&lt;/script&gt;"));
    assert!(!body.contains("<script>steal()"));
}

#[tokio::test]
async fn api_without_identifier_is_bad_request() {
    let routes = server().routes();
    for path in ["/api/results", "/api/results/"] {
        let response = warp::test::request().method("GET").path(path).reply(&routes).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", path);
        let json: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(json["error"], "Missing account identifier");
    }
}
