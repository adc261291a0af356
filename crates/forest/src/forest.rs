use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::tree::DecisionTree;
use crate::Classifier;

/// A random forest exported to JSON: per-tree leaf distributions are averaged
/// and the most probable class wins.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomForest {
    n_features: usize,
    classes: Vec<i64>,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("failed to parse model {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let forest: RandomForest = serde_json::from_str(raw)?;
        forest.validate()?;
        Ok(forest)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.n_features == 0 {
            anyhow::bail!("model must declare at least one feature");
        }
        if self.classes.is_empty() {
            anyhow::bail!("model must declare at least one class");
        }
        if self.trees.is_empty() {
            anyhow::bail!("model must include at least one tree");
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features, self.classes.len())
                .with_context(|| format!("tree[{index}] is invalid"))?;
        }
        Ok(())
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Mean class distribution over all trees for one row.
    pub fn predict_proba(&self, row: &[f64]) -> anyhow::Result<Vec<f64>> {
        if row.len() != self.n_features {
            anyhow::bail!(
                "row has {} features, model expects {}",
                row.len(),
                self.n_features
            );
        }
        let mut proba = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            let weights = tree.leaf_weights(row);
            let total: f64 = weights.iter().sum();
            if total <= 0.0 {
                continue;
            }
            for (slot, weight) in proba.iter_mut().zip(weights) {
                *slot += weight / total;
            }
        }
        let n_trees = self.trees.len() as f64;
        for slot in &mut proba {
            *slot /= n_trees;
        }
        Ok(proba)
    }

    fn predict_row(&self, row: &[f64]) -> anyhow::Result<i64> {
        let proba = self.predict_proba(row)?;
        let mut best = 0;
        for (index, value) in proba.iter().enumerate() {
            if *value > proba[best] {
                best = index;
            }
        }
        Ok(self.classes[best])
    }
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, rows: &[Vec<f64>]) -> anyhow::Result<Vec<i64>> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                self.predict_row(row)
                    .with_context(|| format!("row {index} could not be classified"))
            })
            .collect()
    }
}
