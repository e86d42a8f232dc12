use super::check::Container;
use crate::addrs::ResourceAddr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Resource {
    pub addr: ResourceAddr,
    /// The block this resource is embedded in, if any.
    pub container: Option<Arc<dyn Container>>,
}

impl Resource {
    pub fn new(addr: ResourceAddr) -> Self {
        Self { addr, container: None }
    }

    pub fn within(mut self, container: Arc<dyn Container>) -> Self {
        self.container = Some(container);
        self
    }
}
