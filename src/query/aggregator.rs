use rayon::prelude::*;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::query::dispatcher::ResolverRegistry;
use crate::query::error::QueryError;
use crate::query::parser::{is_multi_query, parse};
use crate::query::types::{QueryDescriptor, QueryPath, RequestContext};
use crate::shared::response::{
    CompositeResponse, HtmlRenderer, RenderedBlock, Renderer, SubQueryBlock, render_batch,
};

pub const DEFAULT_ISSUE_URL: &str = "https://github.com/KirillOsenkov/QuickInfo/issues/new";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Answer the sub-queries of a multi-query in parallel.
    pub parallel: bool,
    /// Where diagnostics tell the caller to report failures.
    pub issue_url: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            parallel: false,
            issue_url: DEFAULT_ISSUE_URL.to_string(),
        }
    }
}

/// Entry point of the query pipeline: parse, dispatch, render, merge.
///
/// Holds only immutable state, so one instance serves every request.
pub struct AnswerEngine {
    registry: Arc<ResolverRegistry>,
    renderer: Arc<dyn Renderer>,
    settings: EngineSettings,
}

impl AnswerEngine {
    pub fn new(registry: Arc<ResolverRegistry>, settings: EngineSettings) -> Self {
        Self {
            registry,
            renderer: Arc::new(HtmlRenderer),
            settings,
        }
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn registry(&self) -> &ResolverRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Answer `raw`. Never fails: every failure ends up as a diagnostic block.
    pub fn answer(&self, raw: &str, context: Option<Arc<RequestContext>>) -> CompositeResponse {
        if raw.is_empty() {
            debug!(target: "quick_info::answer", "Empty input");
            return CompositeResponse::empty();
        }

        if is_multi_query(raw) {
            self.answer_multi(raw, context)
        } else {
            self.answer_single(raw, context)
        }
    }

    fn answer_single(&self, raw: &str, context: Option<Arc<RequestContext>>) -> CompositeResponse {
        let block = match parse(raw, context).first() {
            Some(descriptor) => self.answer_one(descriptor, QueryPath::Single),
            None => RenderedBlock::no_results(QueryPath::Single),
        };
        CompositeResponse::single(block)
    }

    fn answer_multi(&self, raw: &str, context: Option<Arc<RequestContext>>) -> CompositeResponse {
        let descriptors = parse(raw, context);
        info!(
            target: "quick_info::answer",
            sub_queries = descriptors.len(),
            parallel = self.settings.parallel,
            "Answering multi-query"
        );

        let boxed = |descriptor: &QueryDescriptor| SubQueryBlock {
            header: Some(descriptor.text().to_string()),
            block: self.answer_one(descriptor, QueryPath::Multi),
        };

        // Indexed parallel collect keeps input order regardless of completion order.
        let blocks: Vec<SubQueryBlock> = if self.settings.parallel {
            descriptors.par_iter().map(boxed).collect()
        } else {
            descriptors.iter().map(boxed).collect()
        };

        CompositeResponse::multi(blocks)
    }

    /// Per-sub-query failure boundary. A panicking resolver or renderer is
    /// reported like any other failure.
    fn answer_one(&self, descriptor: &QueryDescriptor, path: QueryPath) -> RenderedBlock {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            self.resolve_and_render(descriptor, path)
        }))
        .unwrap_or_else(|payload| Err(QueryError::Internal(panic_message(payload.as_ref()))));

        match outcome {
            Ok(block) => block,
            Err(err) => {
                warn!(
                    target: "quick_info::answer",
                    query = descriptor.text(),
                    error = %err,
                    "Sub-query failed"
                );
                self.diagnostic(&err)
            }
        }
    }

    fn resolve_and_render(
        &self,
        descriptor: &QueryDescriptor,
        path: QueryPath,
    ) -> Result<RenderedBlock, QueryError> {
        let batch = self.registry.dispatch(descriptor)?;
        render_batch(&batch, self.renderer.as_ref(), path)
    }

    pub fn diagnostic(&self, err: &QueryError) -> RenderedBlock {
        RenderedBlock::diagnostic(&err.detail(), &self.settings.issue_url)
    }

    /// Response for failures caught outside `answer`, such as an expired
    /// deadline or a crashed worker.
    pub fn failure_response(&self, err: &QueryError) -> CompositeResponse {
        CompositeResponse::failure(self.diagnostic(err))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload");
    format!("panicked: {message}")
}
