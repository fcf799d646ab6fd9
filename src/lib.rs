pub mod frontend;
pub mod logging;
pub mod query;
pub mod resolvers;
pub mod shared;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
