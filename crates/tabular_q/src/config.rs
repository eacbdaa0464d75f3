//! Configuration for the tabular Q-learner.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Hyperparameters of a [`TabularQLearner`](crate::TabularQLearner).
///
/// All fields may be adjusted between episodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// The learning rate (alpha), the step size used to blend new evidence into an estimate.
    pub learning_rate: f64,
    /// The discount factor (gamma), the weight of estimated future value against immediate reward.
    pub discount_factor: f64,
    /// The probability of exploiting, i.e. of taking the greedy action in `choose_action`.
    ///
    /// The remaining `1 - exploit_probability` is the exploration rate (epsilon).
    pub exploit_probability: f64,
    /// Seed for the learner's random source. `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.4,
            discount_factor: 0.9,
            exploit_probability: 0.7,
            seed: None,
        }
    }
}

impl LearnerConfig {
    /// Parses a configuration from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Sets the learning rate (alpha).
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the discount factor (gamma).
    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    /// Sets the probability of choosing the greedy action.
    pub fn with_exploit_probability(mut self, exploit_probability: f64) -> Self {
        self.exploit_probability = exploit_probability;
        self
    }

    /// Sets the exploration rate (epsilon), i.e. `1 - exploit_probability`.
    pub fn with_exploration_rate(mut self, epsilon: f64) -> Self {
        self.exploit_probability = 1.0 - epsilon;
        self
    }

    /// Fixes the seed of the learner's random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the exploration rate (epsilon).
    pub fn exploration_rate(&self) -> f64 {
        1.0 - self.exploit_probability
    }

    /// Strictly checks that every rate lies in `[0, 1]`.
    ///
    /// The learner itself does not require this; it only warns about
    /// unconventional values. Callers wanting a hard guarantee call this.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.rates() {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Logs a warning for every rate outside its conventional `[0, 1]` range.
    pub(crate) fn warn_unconventional(&self) {
        for (name, value) in self.rates() {
            if !(0.0..=1.0).contains(&value) {
                log::warn!("{} = {} is outside the conventional range [0, 1]", name, value);
            }
        }
    }

    fn rates(&self) -> [(&'static str, f64); 3] {
        [
            ("learning_rate", self.learning_rate),
            ("discount_factor", self.discount_factor),
            ("exploit_probability", self.exploit_probability),
        ]
    }
}
