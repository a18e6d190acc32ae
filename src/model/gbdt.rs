//! Evaluation of pretrained gradient-boosted decision-tree ensembles.

use super::Regressor;
use crate::error::QboostError;
use ndarray::{ArrayView1, ArrayView2};
use serde::Deserialize;
use std::path::Path;

/// One node of a binary regression tree.
///
/// Split nodes route a feature row left or right by comparing one feature against a
/// threshold; leaves carry the additive contribution of the tree.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
enum Node {
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

/// A single regression tree stored as a flat node array rooted at index 0.
#[derive(Deserialize, Debug, Clone, PartialEq)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn score(&self, row: ArrayView1<'_, f64>) -> Result<f64, QboostError> {
        let mut index = 0usize;
        // every hop must descend; more hops than nodes means a cycle in the artifact
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(Node::Leaf { value }) => return Ok(*value),
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = row.get(*feature).ok_or_else(|| {
                        QboostError::MalformedModel(format!(
                            "split references feature {feature} but rows have {} columns",
                            row.len()
                        ))
                    })?;
                    index = if *value < *threshold { *left } else { *right };
                }
                None => {
                    return Err(QboostError::MalformedModel(format!(
                        "node index {index} is out of range ({} nodes)",
                        self.nodes.len()
                    )));
                }
            }
        }
        Err(QboostError::MalformedModel(
            "tree walk did not reach a leaf; the node graph contains a cycle".to_string(),
        ))
    }
}

/// A pretrained gradient-boosted tree ensemble loaded from a JSON artifact.
///
/// Prediction is the bias plus the sum of every tree's leaf value for the row. The
/// artifact holds the trees in evaluation order; nothing about training is retained.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use qboost::{GbdtEnsemble, Regressor};
///
/// let artifact = r#"{
///     "bias": 0.5,
///     "trees": [{
///         "nodes": [
///             { "feature": 0, "threshold": 2.0, "left": 1, "right": 2 },
///             { "value": -1.0 },
///             { "value": 1.0 }
///         ]
///     }]
/// }"#;
/// let model = GbdtEnsemble::load_from_str(artifact).unwrap();
///
/// let features = array![[1.0], [3.0]];
/// let predictions = model.predict(features.view()).unwrap();
/// assert_eq!(predictions, vec![-0.5, 1.5]);
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GbdtEnsemble {
    #[serde(default)]
    bias: f64,
    trees: Vec<Tree>,
}

impl GbdtEnsemble {
    /// Loads an ensemble from a JSON artifact file.
    ///
    /// # Errors
    ///
    /// Returns `QboostError::Io` if the file cannot be read, or
    /// `QboostError::ModelFormat` if the JSON does not describe a valid ensemble. Both are
    /// fatal to a prediction run.
    pub fn load_from_file(path: &Path) -> Result<Self, QboostError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| QboostError::Io {
            path: path.to_path_buf(),
            source: io_error,
        })?;
        Self::load_from_str(&content)
    }

    /// Parses an ensemble from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `QboostError::ModelFormat` if the JSON is invalid.
    pub fn load_from_str(json: &str) -> Result<Self, QboostError> {
        serde_json::from_str(json).map_err(QboostError::from)
    }

    /// Returns the number of trees in the ensemble.
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    fn score_row(&self, row: ArrayView1<'_, f64>) -> Result<f64, QboostError> {
        let mut total = self.bias;
        for tree in &self.trees {
            total += tree.score(row)?;
        }
        Ok(total)
    }
}

impl Regressor for GbdtEnsemble {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Vec<f64>, QboostError> {
        features
            .rows()
            .into_iter()
            .map(|row| self.score_row(row))
            .collect()
    }
}
