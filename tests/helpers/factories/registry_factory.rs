use crate::query::dispatcher::{DispatchPolicy, ResolverRegistry, ResolverRegistryBuilder};
use crate::resolvers::Resolver;

pub struct RegistryFactory {
    builder: ResolverRegistryBuilder,
}

impl RegistryFactory {
    pub fn new() -> Self {
        Self {
            builder: ResolverRegistry::builder(),
        }
    }

    pub fn with(mut self, resolver: impl Resolver + 'static) -> Self {
        self.builder = self.builder.register(resolver);
        self
    }

    pub fn policy(mut self, policy: DispatchPolicy) -> Self {
        self.builder = self.builder.policy(policy);
        self
    }

    pub fn create(self) -> ResolverRegistry {
        self.builder.build()
    }
}
