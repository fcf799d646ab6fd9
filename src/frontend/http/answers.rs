use hyper::header::{self, HeaderMap, HeaderValue};
use hyper::{Method, Request, Response, StatusCode};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::frontend::context::FrontendContext;
use crate::query::error::QueryError;
use crate::query::types::RequestContext;
use crate::shared::response::CompositeResponse;

pub const ANSWERS_PATH: &str = "/api/answers/";

const RESPONSE_HEADERS: [(&str, &str); 6] = [
    ("content-type", "text/html; charset=utf-8"),
    ("cache-control", "no-cache"),
    ("pragma", "no-cache"),
    ("expires", "-1"),
    ("access-control-allow-origin", "*"),
    ("access-control-allow-headers", "Content-Type"),
];

pub fn is_answers_path(path: &str) -> bool {
    path == ANSWERS_PATH || path == ANSWERS_PATH.trim_end_matches('/')
}

pub async fn handle_answers<B>(
    req: Request<B>,
    ctx: Arc<FrontendContext>,
    peer_addr: Option<SocketAddr>,
) -> Response<String> {
    if req.method() != Method::GET {
        return method_not_allowed();
    }

    let raw = query_param(req.uri().query()).unwrap_or_default();
    let context = Arc::new(request_context(&req, peer_addr));
    debug!(target: "quick_info::http", query = %raw, client = ?context.client_addr, "Answer request");

    let response = answer_with_deadline(&ctx, raw, context).await;
    html_response(StatusCode::OK, response.into_html())
}

/// Runs the engine on the blocking pool, bounded by the configured deadline.
/// Timeouts and crashed workers become a diagnostic response.
///
/// The answer stays counted as in flight until the blocking work ends, even
/// when the caller stops waiting for it.
pub async fn answer_with_deadline(
    ctx: &FrontendContext,
    raw: String,
    context: Arc<RequestContext>,
) -> CompositeResponse {
    let engine = Arc::clone(&ctx.engine);
    let pending = ctx.server_state.track_pending();
    let task = tokio::task::spawn_blocking(move || {
        let _pending = pending;
        engine.answer(&raw, Some(context))
    });

    let joined = match ctx.options.timeout {
        Some(limit) => match tokio::time::timeout(limit, task).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!(target: "quick_info::http", timeout_ms = millis(limit), "Answer deadline exceeded");
                return ctx.engine.failure_response(&QueryError::DeadlineExceeded {
                    timeout_ms: millis(limit),
                });
            }
        },
        None => task.await,
    };

    match joined {
        Ok(response) => response,
        Err(e) => {
            error!(target: "quick_info::http", error = %e, "Answer task failed");
            ctx.engine
                .failure_response(&QueryError::Internal(format!("answer task failed: {e}")))
        }
    }
}

fn millis(limit: Duration) -> u64 {
    u64::try_from(limit.as_millis()).unwrap_or(u64::MAX)
}

/// Value of the first `query` parameter, URL-decoded. Absent means empty input.
pub fn query_param(query_string: Option<&str>) -> Option<String> {
    let qs = query_string?;
    url::form_urlencoded::parse(qs.as_bytes())
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.into_owned())
}

pub fn extract_client_ip_from_header_map(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    forwarded
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        })
        .map(str::to_string)
}

pub fn request_context<B>(req: &Request<B>, peer_addr: Option<SocketAddr>) -> RequestContext {
    let client_addr = extract_client_ip_from_header_map(req.headers())
        .and_then(|ip| ip.parse::<IpAddr>().ok())
        .or_else(|| peer_addr.map(|addr| addr.ip()));

    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    RequestContext {
        client_addr,
        user_agent,
        path: Some(req.uri().path().to_string()),
    }
}

pub fn html_response(status: StatusCode, body: String) -> Response<String> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    let headers = response.headers_mut();
    for (name, value) in RESPONSE_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    response
}

pub fn plain_response(status: StatusCode, body: &str) -> Response<String> {
    let mut response = Response::new(body.to_string());
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

fn method_not_allowed() -> Response<String> {
    let mut response = plain_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("GET"));
    response
}
