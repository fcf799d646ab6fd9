pub mod engine_factory;
pub mod frontend_context_factory;
pub mod query_descriptor_factory;
pub mod registry_factory;
pub mod request_context_factory;
pub mod stub_resolver_factory;

pub use engine_factory::{EngineFactory, FailingRenderer};
pub use frontend_context_factory::FrontendContextFactory;
pub use query_descriptor_factory::QueryDescriptorFactory;
pub use registry_factory::RegistryFactory;
pub use request_context_factory::RequestContextFactory;
pub use stub_resolver_factory::{StubResolver, StubResolverFactory};
