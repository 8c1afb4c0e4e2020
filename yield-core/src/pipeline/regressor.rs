use serde::{Deserialize, Serialize};

use super::{FeatureVector, PredictionError, Predictor};

/// A node of a fitted regression tree, addressed by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// Fitted regression models understood by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FittedRegressor {
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    /// Root is `nodes[0]`; a sample goes left when `x[feature] <= threshold`.
    DecisionTree {
        n_features: usize,
        nodes: Vec<TreeNode>,
    },
}

impl FittedRegressor {
    pub fn n_features(&self) -> usize {
        match self {
            Self::Linear { coefficients, .. } => coefficients.len(),
            Self::DecisionTree { n_features, .. } => *n_features,
        }
    }

    /// Checks tree references without evaluating a sample.
    pub fn validate(&self) -> Result<(), PredictionError> {
        let Self::DecisionTree { n_features, nodes } = self else {
            return Ok(());
        };
        if nodes.is_empty() {
            return Err(PredictionError::MalformedModel("tree has no nodes".to_string()));
        }
        for (i, node) in nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= *n_features {
                    return Err(PredictionError::MalformedModel(format!(
                        "node {i} splits on feature {feature} of {n_features}"
                    )));
                }
                if *left >= nodes.len() || *right >= nodes.len() {
                    return Err(PredictionError::MalformedModel(format!(
                        "node {i} points outside the tree"
                    )));
                }
            }
        }
        Ok(())
    }

    fn check_width(&self, features: &FeatureVector) -> Result<(), PredictionError> {
        let expected = self.n_features();
        if features.len() != expected {
            return Err(PredictionError::FeatureCountMismatch {
                expected,
                actual: features.len(),
            });
        }
        Ok(())
    }
}

fn walk_tree(nodes: &[TreeNode], x: &[f64]) -> Result<f64, PredictionError> {
    let mut index = 0;
    // a well-formed tree reaches a leaf in fewer steps than it has nodes
    for _ in 0..nodes.len() {
        match nodes.get(index) {
            Some(TreeNode::Leaf { value }) => return Ok(*value),
            Some(TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            }) => {
                let v = x.get(*feature).ok_or_else(|| {
                    PredictionError::MalformedModel(format!("feature {feature} out of range"))
                })?;
                index = if *v <= *threshold { *left } else { *right };
            }
            None => {
                return Err(PredictionError::MalformedModel(format!(
                    "node {index} does not exist"
                )));
            }
        }
    }
    Err(PredictionError::MalformedModel("tree contains a cycle".to_string()))
}

impl Predictor for FittedRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        self.check_width(features)?;

        let value = match self {
            Self::Linear {
                coefficients,
                intercept,
            } => {
                intercept
                    + coefficients
                        .iter()
                        .zip(features.iter())
                        .map(|(c, x)| c * x)
                        .sum::<f64>()
            }
            Self::DecisionTree { nodes, .. } => walk_tree(nodes, features)?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(PredictionError::NonFiniteOutput)
        }
    }
}
