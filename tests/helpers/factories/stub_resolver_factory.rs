use crate::query::types::QueryDescriptor;
use crate::resolvers::{Answer, ResolveError, Resolver, ResultItem};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Resolver with canned answers keyed by exact query text.
pub struct StubResolver {
    name: String,
    answers: HashMap<String, Vec<ResultItem>>,
    failures: HashSet<String>,
    delays: HashMap<String, Duration>,
    panics: HashSet<String>,
    calls: Arc<AtomicUsize>,
}

impl Resolver for StubResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, query: &QueryDescriptor) -> Result<Vec<ResultItem>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(query.text()) {
            std::thread::sleep(*delay);
        }
        if self.panics.contains(query.text()) {
            panic!("{} panicked on '{}'", self.name, query.text());
        }
        if self.failures.contains(query.text()) {
            return Err(ResolveError::Internal(format!(
                "{} exploded on '{}'",
                self.name,
                query.text()
            )));
        }
        Ok(self.answers.get(query.text()).cloned().unwrap_or_default())
    }
}

pub struct StubResolverFactory {
    name: String,
    answers: HashMap<String, Vec<ResultItem>>,
    failures: HashSet<String>,
    delays: HashMap<String, Duration>,
    panics: HashSet<String>,
    calls: Arc<AtomicUsize>,
}

impl StubResolverFactory {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            answers: HashMap::new(),
            failures: HashSet::new(),
            delays: HashMap::new(),
            panics: HashSet::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn answers(self, query: &str, text: &str) -> Self {
        self.answers_item(query, ResultItem::new(Answer::text(text)))
    }

    pub fn answers_item(mut self, query: &str, item: ResultItem) -> Self {
        self.answers.entry(query.to_string()).or_default().push(item);
        self
    }

    pub fn help_on(self, query: &str, text: &str) -> Self {
        self.answers_item(query, ResultItem::help(Answer::text(text)))
    }

    pub fn fails_on(mut self, query: &str) -> Self {
        self.failures.insert(query.to_string());
        self
    }

    pub fn panics_on(mut self, query: &str) -> Self {
        self.panics.insert(query.to_string());
        self
    }

    /// Blocks the calling thread for `delay` before answering `query`.
    pub fn sleeps_on(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// Shared counter of `resolve` calls, readable after `create`.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn create(self) -> StubResolver {
        StubResolver {
            name: self.name,
            answers: self.answers,
            failures: self.failures,
            delays: self.delays,
            panics: self.panics,
            calls: self.calls,
        }
    }
}
