use hyper::{Request, Response, StatusCode};
use std::net::SocketAddr;
use std::{convert::Infallible, sync::Arc};

use crate::frontend::context::FrontendContext;

use super::answers::{handle_answers, is_answers_path, plain_response};
use super::static_files::{serve_asset, serve_index};

struct HttpHandler {
    ctx: Arc<FrontendContext>,
    peer_addr: Option<SocketAddr>,
}

impl HttpHandler {
    fn new(ctx: Arc<FrontendContext>, peer_addr: Option<SocketAddr>) -> Self {
        Self { ctx, peer_addr }
    }

    fn not_found() -> Response<String> {
        plain_response(StatusCode::NOT_FOUND, "Not Found")
    }

    fn serve_static(&self, path: &str) -> Option<Response<String>> {
        if !self.ctx.options.serve_static {
            return None;
        }
        match path {
            "/" | "/index.html" => Some(serve_index()),
            p if p.starts_with("/static/") => {
                let name = p.trim_start_matches("/static/");
                Some(serve_asset(name))
            }
            _ => None,
        }
    }

    async fn handle<B>(&self, req: Request<B>) -> Result<Response<String>, Infallible> {
        let path = req.uri().path().to_string();

        if let Some(resp) = self.serve_static(&path) {
            return Ok(resp);
        }

        if !is_answers_path(&path) {
            return Ok(Self::not_found());
        }

        // Static files are exempt from these checks
        if self.ctx.server_state.is_shutting_down() {
            return Ok(plain_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Server is shutting down",
            ));
        }

        if self.ctx.server_state.is_under_pressure() {
            return Ok(plain_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Server is under pressure, please retry later",
            ));
        }

        Ok(handle_answers(req, Arc::clone(&self.ctx), self.peer_addr).await)
    }
}

pub async fn handle_request<B>(
    req: Request<B>,
    ctx: Arc<FrontendContext>,
    peer_addr: Option<SocketAddr>,
) -> Result<Response<String>, Infallible> {
    let handler = HttpHandler::new(ctx, peer_addr);
    handler.handle(req).await
}
