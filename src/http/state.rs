use crate::registry::DatasetRegistry;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct HttpServerState {
    pub name: Arc<String>,
    pub registry: Arc<DatasetRegistry>,
}
