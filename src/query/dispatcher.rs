use crate::query::error::QueryError;
use crate::query::types::{QueryDescriptor, ResultBatch};
use crate::resolvers::Resolver;
use tracing::{debug, trace, warn};

/// What happens when a resolver fails during dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// The first failure aborts the whole sub-query.
    #[default]
    FailFast,
    /// A failing resolver is logged and skipped; the others still contribute.
    Isolated,
}

/// The fixed, ordered set of resolvers consulted for every sub-query.
///
/// Built once at startup and never mutated, so it can be shared freely
/// between concurrent requests behind an `Arc`.
pub struct ResolverRegistry {
    resolvers: Vec<Box<dyn Resolver>>,
    policy: DispatchPolicy,
}

#[derive(Default)]
pub struct ResolverRegistryBuilder {
    resolvers: Vec<Box<dyn Resolver>>,
    policy: DispatchPolicy,
}

impl ResolverRegistryBuilder {
    pub fn register(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    pub fn register_boxed(mut self, resolver: Box<dyn Resolver>) -> Self {
        self.resolvers.push(resolver);
        self
    }

    pub fn policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> ResolverRegistry {
        ResolverRegistry {
            resolvers: self.resolvers,
            policy: self.policy,
        }
    }
}

impl ResolverRegistry {
    pub fn builder() -> ResolverRegistryBuilder {
        ResolverRegistryBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    /// Resolver names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resolvers.iter().map(|r| r.name())
    }

    /// Run every resolver against `descriptor` and concatenate what they
    /// return, in registration order.
    pub fn dispatch(&self, descriptor: &QueryDescriptor) -> Result<ResultBatch, QueryError> {
        debug!(
            target: "quick_info::dispatch",
            query = descriptor.text(),
            resolvers = self.resolvers.len(),
            "Dispatching query"
        );

        let mut batch = ResultBatch::new();
        for resolver in &self.resolvers {
            match resolver.resolve(descriptor) {
                Ok(items) => {
                    if !items.is_empty() {
                        trace!(
                            target: "quick_info::dispatch",
                            resolver = resolver.name(),
                            items = items.len(),
                            "Resolver contributed"
                        );
                    }
                    batch.extend(items);
                }
                Err(source) => match self.policy {
                    DispatchPolicy::FailFast => {
                        warn!(
                            target: "quick_info::dispatch",
                            resolver = resolver.name(),
                            query = descriptor.text(),
                            error = %source,
                            "Resolver failed, aborting sub-query"
                        );
                        return Err(QueryError::Resolver {
                            resolver: resolver.name().to_string(),
                            source,
                        });
                    }
                    DispatchPolicy::Isolated => {
                        warn!(
                            target: "quick_info::dispatch",
                            resolver = resolver.name(),
                            query = descriptor.text(),
                            error = %source,
                            "Resolver failed, skipping its contribution"
                        );
                    }
                },
            }
        }

        Ok(batch)
    }
}

impl std::fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverRegistry")
            .field("resolvers", &self.names().collect::<Vec<_>>())
            .field("policy", &self.policy)
            .finish()
    }
}
