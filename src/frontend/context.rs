use std::sync::Arc;
use std::time::Duration;

use crate::frontend::server_state::ServerState;
use crate::query::aggregator::AnswerEngine;
use crate::resolvers::default_registry;
use crate::shared::config::{CONFIG, Settings};

/// Transport knobs that do not belong to the answer engine.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub http_addr: String,
    pub keep_alive: bool,
    /// 0 = unlimited
    pub max_connections: usize,
    pub serve_static: bool,
    /// Deadline for a single `/api/answers/` request.
    pub timeout: Option<Duration>,
}

#[derive(Clone)]
pub struct FrontendContext {
    pub engine: Arc<AnswerEngine>,
    pub server_state: Arc<ServerState>,
    pub options: HttpOptions,
}

impl FrontendContext {
    pub fn new(engine: AnswerEngine, server_state: ServerState, options: HttpOptions) -> Arc<Self> {
        Arc::new(Self {
            engine: Arc::new(engine),
            server_state: Arc::new(server_state),
            options,
        })
    }

    pub fn from_config() -> Arc<Self> {
        Self::from_settings(&CONFIG)
    }

    pub fn from_settings(settings: &Settings) -> Arc<Self> {
        let registry = Arc::new(default_registry(settings.query.dispatch_policy()));
        let engine = AnswerEngine::new(registry, settings.query.engine_settings());

        let options = HttpOptions {
            http_addr: settings.server.http_addr.clone(),
            keep_alive: settings.server.keep_alive,
            max_connections: settings.server.max_connections,
            serve_static: settings.static_files.enabled,
            timeout: (settings.query.timeout_ms > 0)
                .then(|| Duration::from_millis(settings.query.timeout_ms)),
        };

        Self::new(
            engine,
            ServerState::new(settings.server.max_in_flight),
            options,
        )
    }
}
