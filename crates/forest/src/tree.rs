use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DecisionTree {
    pub nodes: Vec<Node>,
}

impl DecisionTree {
    /// Checks the tree is walkable: children always point forward, so a walk
    /// from the root ends at a leaf.
    pub(crate) fn validate(&self, n_features: usize, n_classes: usize) -> anyhow::Result<()> {
        if self.nodes.is_empty() {
            anyhow::bail!("tree has no nodes");
        }
        let len = self.nodes.len();
        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        anyhow::bail!(
                            "node {index} splits on feature {feature}, model has {n_features}"
                        );
                    }
                    if !threshold.is_finite() {
                        anyhow::bail!("node {index} has non-finite threshold");
                    }
                    for child in [*left, *right] {
                        if child <= index || child >= len {
                            anyhow::bail!("node {index} has invalid child {child}");
                        }
                    }
                }
                Node::Leaf { value } => {
                    if value.len() != n_classes {
                        anyhow::bail!(
                            "leaf {index} has {} class weights, model has {n_classes} classes",
                            value.len()
                        );
                    }
                    if value.iter().any(|weight| !weight.is_finite() || *weight < 0.0) {
                        anyhow::bail!("leaf {index} has a negative or non-finite weight");
                    }
                }
            }
        }
        Ok(())
    }

    /// Walks a validated tree and returns the class weights of the leaf
    /// reached by `row`.
    pub(crate) fn leaf_weights(&self, row: &[f64]) -> &[f64] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Node::Leaf { value } => return value,
            }
        }
    }
}
