use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use serde_json::json;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};
use crate::enums::analysis_error::AnalysisError;
use crate::enums::route::Route;
use crate::errors::{GramcheckError, GramcheckResult};
use crate::services::result_presenter::ResultPresenter;
use crate::structs::view::report_view::ReportView;
use crate::traits::analysis_provider::AnalysisProvider;
use crate::ui::channel_navigator::ChannelNavigator;
use crate::ui::html_renderer::HtmlRenderer;

/// Shared by every request; each request gets its own presenter.
struct ServerContext {
    provider: Arc<dyn AnalysisProvider>,
    fetch_timeout: Duration,
}

/// Web front end: entry form, report pages, printable export and a JSON
/// view of the same report.
pub struct ReportServer {
    context: Arc<ServerContext>,
}

impl ReportServer {
    pub fn new(provider: Arc<dyn AnalysisProvider>, fetch_timeout: Duration) -> Self {
        Self {
            context: Arc::new(ServerContext { provider, fetch_timeout }),
        }
    }

    /// Binds to `127.0.0.1:port` (0 picks a free port) and returns the bound
    /// address with the server future, which resolves once `shutdown` does.
    pub fn bind(
        &self,
        port: u16,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> GramcheckResult<(SocketAddr, impl Future<Output = ()> + 'static)> {
        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (bound, server) = warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(addr, shutdown)
            .map_err(|e| GramcheckError::system_error("bind report server", &e.to_string()))?;

        log::info!("🌐 Report server started on http://{}", bound);
        Ok((bound, server))
    }

    pub fn routes(&self) -> impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone {
        let context = Arc::clone(&self.context);
        let context_filter = warp::any().map(move || Arc::clone(&context));

        let entry = warp::path::end()
            .and(warp::get())
            .map(|| warp::reply::html(HtmlRenderer::entry_page(None)));

        let analyze = warp::path!("analyze")
            .and(warp::get())
            .and(warp::query::<HashMap<String, String>>())
            .map(analyze_redirect);

        let results_without_identifier = warp::path!("results")
            .and(warp::get())
            .map(|| redirect(&Route::Entry));

        let results = warp::path!("results" / String)
            .and(warp::get())
            .and(context_filter.clone())
            .and_then(|raw: String, context: Arc<ServerContext>| results_handler(raw, context, false));

        let export = warp::path!("results" / String / "export")
            .and(warp::get())
            .and(context_filter.clone())
            .and_then(|raw: String, context: Arc<ServerContext>| results_handler(raw, context, true));

        let api_without_identifier = warp::path!("api" / "results")
            .and(warp::get())
            .map(missing_identifier);

        let api_results = warp::path!("api" / "results" / String)
            .and(warp::get())
            .and(context_filter)
            .and_then(api_results_handler);

        entry
            .or(analyze)
            .or(results_without_identifier)
            .or(results)
            .or(export)
            .or(api_without_identifier)
            .or(api_results)
            .with(warp::log("gramcheck::server"))
    }
}

/// Runs one presenter to completion for a raw identifier and reports the
/// resulting view plus any navigation it asked for.
async fn present(context: &ServerContext, raw: &str) -> (ReportView, Option<Route>) {
    let (navigator, mut navigation) = ChannelNavigator::new();
    let presenter = ResultPresenter::new(
        Arc::clone(&context.provider),
        Arc::new(navigator),
        context.fetch_timeout,
    );

    presenter.show(Some(raw)).await;
    (presenter.view(), navigation.try_recv().ok())
}

fn analyze_redirect(params: HashMap<String, String>) -> Response {
    match params.get("username").map(|u| u.trim()).filter(|u| !u.is_empty()) {
        Some(username) => redirect(&Route::Results(username.to_string())),
        None => redirect(&Route::Entry),
    }
}

async fn results_handler(raw: String, context: Arc<ServerContext>, autoprint: bool) -> Result<Response, Infallible> {
    let (view, navigation) = present(&context, &raw).await;
    if let Some(route) = navigation {
        return Ok(redirect(&route));
    }

    let status = status_for(&view);
    let html = HtmlRenderer::render(&view, autoprint);
    Ok(warp::reply::with_status(warp::reply::html(html), status).into_response())
}

async fn api_results_handler(raw: String, context: Arc<ServerContext>) -> Result<Response, Infallible> {
    let (view, _) = present(&context, &raw).await;
    let status = status_for(&view);
    Ok(warp::reply::with_status(warp::reply::json(&view), status).into_response())
}

fn missing_identifier() -> Response {
    warp::reply::with_status(
        warp::reply::json(&json!({ "error": "Missing account identifier" })),
        StatusCode::BAD_REQUEST,
    )
    .into_response()
}

fn status_for(view: &ReportView) -> StatusCode {
    match view {
        ReportView::Failed(page) => match page.error {
            AnalysisError::NotFound { .. } => StatusCode::NOT_FOUND,
            AnalysisError::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
            AnalysisError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            AnalysisError::Failure { .. } | AnalysisError::Network { .. } => StatusCode::BAD_GATEWAY,
        },
        _ => StatusCode::OK,
    }
}

fn redirect(route: &Route) -> Response {
    warp::reply::with_header(
        warp::reply::with_status(warp::reply(), StatusCode::SEE_OTHER),
        "location",
        route.path(),
    )
    .into_response()
}
