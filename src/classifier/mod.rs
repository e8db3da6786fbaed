//! Binary logistic regression over sparse feature vectors.
//!
//! The classifier is a single weight vector plus a bias, fit by full-batch
//! gradient descent on L2-regularized binary cross-entropy. Initialization
//! is all-zeros, so a fit over the same data is fully deterministic — a
//! requirement for reproducible artifacts and tests.
//!
//! # Examples
//!
//! ```
//! use sentira::classifier::LogisticRegression;
//! use sentira::feature::SparseVector;
//!
//! let x = vec![
//!     SparseVector::from_sorted(2, vec![0], vec![1.0]),
//!     SparseVector::from_sorted(2, vec![1], vec![1.0]),
//! ];
//! let y = vec![1, 0];
//!
//! let mut model = LogisticRegression::new(2);
//! let stats = model.fit(&x, &y).unwrap();
//! assert!(stats.iterations > 0);
//!
//! let prediction = model.predict(&x[0]);
//! assert_eq!(prediction.label, 1);
//! assert!(prediction.probability >= 0.5);
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentiraError};
use crate::feature::SparseVector;

/// Default number of gradient-descent iterations.
pub const DEFAULT_MAX_ITER: usize = 1000;
/// Default gradient-descent step size.
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;
/// Default L2 regularization strength.
pub const DEFAULT_L2_PENALTY: f64 = 1e-4;
/// Default convergence tolerance on the loss delta between iterations.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Statistics from a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Loss value after each iteration.
    pub losses: Vec<f64>,
    /// Number of iterations completed.
    pub iterations: usize,
    /// Whether the loss delta fell below tolerance before `max_iter`.
    pub converged: bool,
    /// Training wall time in milliseconds.
    pub training_time_ms: u64,
    /// Final loss value.
    pub final_loss: f64,
}

/// A binary label with its calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted class: 1 (positive) or 0 (negative).
    pub label: u8,
    /// Probability of class 1, in `[0, 1]`.
    pub probability: f64,
    /// Probability of the *predicted* class: `max(p, 1 - p)`.
    pub confidence: f64,
}

/// Logistic regression model for binary classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One weight per feature dimension.
    weights: Vec<f64>,
    /// Bias (intercept) term.
    bias: f64,
    /// Gradient-descent step size.
    learning_rate: f64,
    /// Iteration budget for fitting.
    max_iter: usize,
    /// L2 regularization strength.
    l2_penalty: f64,
    /// Convergence tolerance on the loss delta.
    tolerance: f64,
}

impl LogisticRegression {
    /// Create a new, zero-initialized model for the given feature dimension.
    pub fn new(dim: usize) -> Self {
        LogisticRegression {
            weights: vec![0.0; dim],
            bias: 0.0,
            learning_rate: DEFAULT_LEARNING_RATE,
            max_iter: DEFAULT_MAX_ITER,
            l2_penalty: DEFAULT_L2_PENALTY,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Reconstruct a model from fitted parameters.
    pub fn from_parameters(weights: Vec<f64>, bias: f64) -> Self {
        LogisticRegression {
            weights,
            bias,
            learning_rate: DEFAULT_LEARNING_RATE,
            max_iter: DEFAULT_MAX_ITER,
            l2_penalty: DEFAULT_L2_PENALTY,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Set the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the iteration budget.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the L2 regularization strength.
    pub fn with_l2_penalty(mut self, l2_penalty: f64) -> Self {
        self.l2_penalty = l2_penalty;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The fitted weight vector.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The fitted bias term.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Feature dimension this model expects.
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// Fit the model with full-batch gradient descent.
    ///
    /// Stops when the loss delta between iterations falls below the
    /// tolerance, or at the iteration budget — hitting the budget is not
    /// an error and is reported through [`TrainingStats::converged`].
    /// A non-finite loss (diverged optimization) is an error.
    pub fn fit(&mut self, x: &[SparseVector], y: &[u8]) -> Result<TrainingStats> {
        if x.is_empty() {
            return Err(SentiraError::training("no training examples"));
        }
        if x.len() != y.len() {
            return Err(SentiraError::training(format!(
                "feature/label count mismatch: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        if let Some(bad) = x.iter().find(|v| v.dim() != self.dim()) {
            return Err(SentiraError::training(format!(
                "feature vector dimension {} does not match model dimension {}",
                bad.dim(),
                self.dim()
            )));
        }

        let start_time = Instant::now();
        let n = x.len() as f64;

        let mut losses = Vec::with_capacity(self.max_iter.min(1024));
        let mut previous_loss = f64::INFINITY;
        let mut converged = false;

        for _ in 0..self.max_iter {
            let mut gradient = vec![0.0; self.dim()];
            let mut bias_gradient = 0.0;
            let mut loss = 0.0;

            for (vector, &label) in x.iter().zip(y.iter()) {
                let p = sigmoid(vector.dot(&self.weights) + self.bias);
                let target = f64::from(label);
                let error = p - target;

                for (index, value) in vector.iter() {
                    gradient[index] += error * value;
                }
                bias_gradient += error;

                // Clamped log keeps the loss finite at saturated outputs.
                loss -= target * p.max(1e-12).ln() + (1.0 - target) * (1.0 - p).max(1e-12).ln();
            }

            let weight_norm_sq: f64 = self.weights.iter().map(|w| w * w).sum();
            loss = loss / n + self.l2_penalty / (2.0 * n) * weight_norm_sq;

            if !loss.is_finite() {
                return Err(SentiraError::training(
                    "optimization diverged: loss is not finite",
                ));
            }

            for (weight, grad) in self.weights.iter_mut().zip(gradient.iter()) {
                *weight -= self.learning_rate * (grad + self.l2_penalty * *weight) / n;
            }
            self.bias -= self.learning_rate * bias_gradient / n;

            losses.push(loss);

            if (previous_loss - loss).abs() < self.tolerance {
                converged = true;
                break;
            }
            previous_loss = loss;
        }

        let final_loss = losses.last().copied().unwrap_or(0.0);
        Ok(TrainingStats {
            iterations: losses.len(),
            converged,
            training_time_ms: start_time.elapsed().as_millis() as u64,
            final_loss,
            losses,
        })
    }

    /// Probability of class 1 for a feature vector.
    ///
    /// Only non-zero entries are visited; an all-zero vector scores as
    /// `sigmoid(bias)`.
    pub fn predict_proba(&self, x: &SparseVector) -> f64 {
        sigmoid(x.dot(&self.weights) + self.bias)
    }

    /// Predict the label and confidence for a feature vector.
    ///
    /// `label` is 1 iff the probability of class 1 is at least 0.5;
    /// `confidence` is the probability of the predicted class.
    pub fn predict(&self, x: &SparseVector) -> Prediction {
        let probability = self.predict_proba(x);
        let label = u8::from(probability >= 0.5);
        let confidence = probability.max(1.0 - probability);

        Prediction {
            label,
            probability,
            confidence,
        }
    }
}

/// Numerically stable logistic function.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
