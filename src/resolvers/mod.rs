//! Built-in resolvers and the contract every resolver satisfies.
//!
//! A resolver inspects one sub-query and either declines (returns no items),
//! contributes one or more [`ResultItem`]s, or fails with a [`ResolveError`].
//! Resolvers never see each other's output.

pub mod answer;
pub mod date;
pub mod error;
pub mod hash;
pub mod help;
pub mod ip;
pub mod number;

pub use answer::{Answer, ResultItem};
pub use date::DateResolver;
pub use error::ResolveError;
pub use hash::HashResolver;
pub use help::HelpResolver;
pub use ip::IpAddressResolver;
pub use number::NumberResolver;

use crate::query::dispatcher::{DispatchPolicy, ResolverRegistry};
use crate::query::types::QueryDescriptor;

pub trait Resolver: Send + Sync {
    /// Stable name used in logs and diagnostics.
    fn name(&self) -> &str;

    fn resolve(&self, query: &QueryDescriptor) -> Result<Vec<ResultItem>, ResolveError>;
}

/// The registry served by default, in dispatch order.
pub fn default_registry(policy: DispatchPolicy) -> ResolverRegistry {
    ResolverRegistry::builder()
        .register(HelpResolver)
        .register(IpAddressResolver)
        .register(NumberResolver)
        .register(HashResolver)
        .register(DateResolver)
        .policy(policy)
        .build()
}

#[cfg(test)]
mod number_tests;
