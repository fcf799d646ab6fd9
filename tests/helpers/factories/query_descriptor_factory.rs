use crate::query::types::{QueryDescriptor, RequestContext};
use std::sync::Arc;

pub struct QueryDescriptorFactory {
    text: String,
    context: Option<RequestContext>,
}

impl QueryDescriptorFactory {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn create(self) -> QueryDescriptor {
        QueryDescriptor::new(self.text).with_context(self.context.map(Arc::new))
    }
}
