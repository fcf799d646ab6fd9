use std::sync::Arc;

use crate::query::types::{QueryDescriptor, RequestContext};

/// Reserved separator between sub-queries. It cannot appear literally
/// inside a single sub-query.
pub const MULTI_QUERY_SEPARATOR: char = '|';

pub fn is_multi_query(raw: &str) -> bool {
    raw.contains(MULTI_QUERY_SEPARATOR)
}

/// Split raw input into sub-query descriptors, left to right.
///
/// Segments are kept verbatim. Only the literal empty segments produced by
/// leading, trailing or doubled separators are dropped, so `"||"` yields
/// nothing while `" | "` yields two blank descriptors.
pub fn parse(raw: &str, context: Option<Arc<RequestContext>>) -> Vec<QueryDescriptor> {
    if raw.is_empty() {
        return Vec::new();
    }

    if !is_multi_query(raw) {
        return vec![QueryDescriptor::new(raw).with_context(context)];
    }

    raw.split(MULTI_QUERY_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| QueryDescriptor::new(segment).with_context(context.clone()))
        .collect()
}
