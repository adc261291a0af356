use forest::Classifier;
use std::sync::Arc;

/// Request-handler context. The classifier is loaded once at startup and
/// only ever read afterwards.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) classifier: Arc<dyn Classifier>,
}

impl AppState {
    pub(crate) fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }
}
