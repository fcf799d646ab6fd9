use crate::query::aggregator::{AnswerEngine, EngineSettings};
use crate::query::dispatcher::{DispatchPolicy, ResolverRegistry};
use crate::query::error::QueryError;
use crate::resolvers::{ResultItem, default_registry};
use crate::shared::response::Renderer;
use std::sync::Arc;

/// Renderer that refuses every item.
pub struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render_item(&self, _item: &ResultItem, _out: &mut String) -> Result<(), QueryError> {
        Err(QueryError::Render("renderer is out of ink".to_string()))
    }
}

pub struct EngineFactory {
    registry: Option<ResolverRegistry>,
    renderer: Option<Arc<dyn Renderer>>,
    settings: EngineSettings,
}

impl EngineFactory {
    pub fn new() -> Self {
        Self {
            registry: None,
            renderer: None,
            settings: EngineSettings::default(),
        }
    }

    pub fn with_registry(mut self, registry: ResolverRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.settings.parallel = parallel;
        self
    }

    pub fn issue_url(mut self, url: &str) -> Self {
        self.settings.issue_url = url.to_string();
        self
    }

    pub fn create(self) -> AnswerEngine {
        let registry = self
            .registry
            .unwrap_or_else(|| default_registry(DispatchPolicy::FailFast));
        let engine = AnswerEngine::new(Arc::new(registry), self.settings);
        match self.renderer {
            Some(renderer) => engine.with_renderer(renderer),
            None => engine,
        }
    }
}
