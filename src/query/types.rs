use std::net::IpAddr;
use std::sync::Arc;

use crate::resolvers::ResultItem;

/// Caller metadata attached to a query by the transport.
///
/// The engine never looks inside; it only hands it to resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub client_addr: Option<IpAddr>,
    pub user_agent: Option<String>,
    pub path: Option<String>,
}

/// One unit of work: a single sub-query and the context it arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    text: String,
    context: Option<Arc<RequestContext>>,
}

impl QueryDescriptor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: Option<Arc<RequestContext>>) -> Self {
        self.context = context;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn context(&self) -> Option<&RequestContext> {
        self.context.as_deref()
    }

    /// True when the sub-query holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Which entry path produced a block. The two paths use different
/// "no results" placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPath {
    Single,
    Multi,
}

/// Everything the registered resolvers produced for one descriptor,
/// in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultBatch {
    items: Vec<ResultItem>,
}

impl ResultBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A batch is a help answer as soon as any contributor flagged it so.
    pub fn is_help(&self) -> bool {
        self.items.iter().any(ResultItem::is_help)
    }
}

impl FromIterator<ResultItem> for ResultBatch {
    fn from_iter<I: IntoIterator<Item = ResultItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
