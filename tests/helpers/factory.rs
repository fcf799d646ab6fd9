pub use super::factories::{
    EngineFactory, FrontendContextFactory, QueryDescriptorFactory, RegistryFactory,
    RequestContextFactory, StubResolverFactory,
};

pub struct Factory;

impl Factory {
    pub fn resolver(name: &str) -> StubResolverFactory {
        StubResolverFactory::new(name)
    }

    pub fn registry() -> RegistryFactory {
        RegistryFactory::new()
    }

    pub fn engine() -> EngineFactory {
        EngineFactory::new()
    }

    pub fn frontend() -> FrontendContextFactory {
        FrontendContextFactory::new()
    }

    pub fn query(text: &str) -> QueryDescriptorFactory {
        QueryDescriptorFactory::new(text)
    }

    pub fn request_context() -> RequestContextFactory {
        RequestContextFactory::new()
    }
}
