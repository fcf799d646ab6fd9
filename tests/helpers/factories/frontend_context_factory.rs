use crate::frontend::context::{FrontendContext, HttpOptions};
use crate::frontend::server_state::ServerState;
use crate::query::aggregator::AnswerEngine;
use std::sync::Arc;
use std::time::Duration;

use super::EngineFactory;

pub struct FrontendContextFactory {
    engine: Option<AnswerEngine>,
    options: HttpOptions,
    max_in_flight: usize,
}

impl FrontendContextFactory {
    pub fn new() -> Self {
        Self {
            engine: None,
            options: HttpOptions {
                http_addr: "127.0.0.1:0".to_string(),
                keep_alive: false,
                max_connections: 0,
                serve_static: true,
                timeout: None,
            },
            max_in_flight: 0,
        }
    }

    pub fn with_engine(mut self, engine: AnswerEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    pub fn serve_static(mut self, enabled: bool) -> Self {
        self.options.serve_static = enabled;
        self
    }

    pub fn max_in_flight(mut self, max: usize) -> Self {
        self.max_in_flight = max;
        self
    }

    pub fn create(self) -> Arc<FrontendContext> {
        let engine = self
            .engine
            .unwrap_or_else(|| EngineFactory::new().create());
        FrontendContext::new(engine, ServerState::new(self.max_in_flight), self.options)
    }
}
