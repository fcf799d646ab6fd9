pub mod aggregator;
pub mod dispatcher;
pub mod error;
pub mod parser;
pub mod types;

pub use aggregator::{AnswerEngine, EngineSettings};
pub use dispatcher::{DispatchPolicy, ResolverRegistry};
pub use error::QueryError;
pub use types::{QueryDescriptor, QueryPath, RequestContext, ResultBatch};
