use crate::query::types::RequestContext;

pub struct RequestContextFactory {
    inner: RequestContext,
}

impl RequestContextFactory {
    pub fn new() -> Self {
        Self {
            inner: RequestContext::default(),
        }
    }

    pub fn client(mut self, addr: &str) -> Self {
        self.inner.client_addr = Some(addr.parse().expect("valid client address"));
        self
    }

    pub fn user_agent(mut self, agent: &str) -> Self {
        self.inner.user_agent = Some(agent.to_string());
        self
    }

    pub fn create(self) -> RequestContext {
        self.inner
    }
}
