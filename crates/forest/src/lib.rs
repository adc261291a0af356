mod forest;
mod tree;

pub use forest::RandomForest;
pub use tree::{DecisionTree, Node};

/// A trained classifier over fixed-width numeric rows.
///
/// Implementations are shared read-only across request handlers, so they
/// must be safe to call concurrently.
pub trait Classifier: Send + Sync {
    /// Number of columns each row must have.
    fn n_features(&self) -> usize;

    /// Predicts one class label per row.
    fn predict(&self, rows: &[Vec<f64>]) -> anyhow::Result<Vec<i64>>;
}
