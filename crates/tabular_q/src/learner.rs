//! The tabular Q-learner.
//!
//! [`TabularQLearner`] owns a [`StateSpace`], a [`QTable`], a
//! [`LearnerConfig`] and its own random source. It starts uninitialized;
//! [`TabularQLearner::init`] fixes the shape of the table, after which values
//! can be read, written, used to choose actions and updated with the
//! Q-learning rule:
//!
//! ```text
//! Q(s,a) += α * (r + γ * max_a' Q(s',a') - Q(s,a))
//! ```
//!
//! Every operation validates its input before touching the table, so an
//! `Err` always leaves the learned values unchanged.

use crate::config::LearnerConfig;
use crate::error::{Error, Result};
use crate::policy::{EpsilonGreedy, Selection};
use crate::space::StateSpace;
use crate::table::QTable;
use crate::value::QValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape and storage established by `init`.
#[derive(Debug, Clone)]
struct Shape<T> {
    space: StateSpace,
    actions: Vec<i32>,
    table: QTable<T>,
}

/// Epsilon-greedy Q-learning over a discretized, multi-dimensional state space.
#[derive(Debug, Clone)]
pub struct TabularQLearner<T: QValue = f64, R: Rng = StdRng> {
    shape: Option<Shape<T>>,
    config: LearnerConfig,
    rng: R,
    total_updates: u64,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

impl<T: QValue> TabularQLearner<T, StdRng> {
    /// Creates an uninitialized learner. The random source is seeded from
    /// `config.seed`, or from the thread RNG when no seed is given.
    pub fn new(config: LearnerConfig) -> Self {
        let rng = build_rng(config.seed);
        Self::with_rng(config, rng)
    }

    /// Creates an uninitialized learner with the default configuration.
    pub fn default_config() -> Self {
        Self::new(LearnerConfig::default())
    }

    /// Creates a learner and initializes it with `dimensions` and `actions`.
    pub fn with_shape(
        dimensions: Vec<usize>,
        actions: Vec<i32>,
        config: LearnerConfig,
    ) -> Result<Self> {
        let mut learner = Self::new(config);
        learner.init(dimensions, actions)?;
        Ok(learner)
    }

    /// Reseeds the random source.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl<T: QValue> Default for TabularQLearner<T, StdRng> {
    fn default() -> Self {
        Self::default_config()
    }
}

impl<T: QValue, R: Rng> TabularQLearner<T, R> {
    /// Creates an uninitialized learner that draws from the given random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: LearnerConfig, rng: R) -> Self {
        config.warn_unconventional();
        Self {
            shape: None,
            config,
            rng,
            total_updates: 0,
        }
    }

    /// Establishes the shape of the table and resets every value to zero.
    ///
    /// `dimensions[i]` is the number of values the i-th state coordinate may
    /// take; `actions` lists the action identifiers, of which only the count
    /// is used for indexing. Calling `init` again replaces the previous shape.
    pub fn init(&mut self, dimensions: Vec<usize>, actions: Vec<i32>) -> Result<()> {
        let space = StateSpace::new(dimensions).inspect_err(|e| {
            log::warn!("Q-table initialization failed: {}", e);
        })?;
        if actions.is_empty() {
            log::warn!("Q-table initialization failed: empty action set");
            return Err(Error::invalid_argument("Actions cannot be empty."));
        }
        let table = QTable::zeros(space.total_states(), actions.len())?;

        log::debug!(
            "Initialized Q-table: dimensions [{}], {} states x {} actions",
            StateSpace::render(space.dimensions()),
            space.total_states(),
            actions.len()
        );

        self.shape = Some(Shape {
            space,
            actions,
            table,
        });
        self.total_updates = 0;
        Ok(())
    }

    /// Returns true once `init` has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.shape.is_some()
    }

    /// Returns the Q-value of `action` in `state`.
    pub fn get_q_value(&self, state: &[usize], action: usize) -> Result<T> {
        let shape = self.shape()?;
        let row = shape.space.index_of(state)?;
        shape.table.get(row, action)
    }

    /// Overwrites the Q-value of `action` in `state`.
    pub fn set_q_value(&mut self, state: &[usize], action: usize, value: T) -> Result<()> {
        let shape = self.shape_mut()?;
        let row = shape.space.index_of(state)?;
        shape.table.set(row, action, value)
    }

    /// Returns the Q-values of every action in `state`.
    pub fn q_values(&self, state: &[usize]) -> Result<&[T]> {
        let shape = self.shape()?;
        let row = shape.space.index_of(state)?;
        shape.table.row(row)
    }

    /// Returns the largest Q-value in `state`.
    pub fn max_q(&self, state: &[usize]) -> Result<T> {
        let shape = self.shape()?;
        let row = shape.space.index_of(state)?;
        shape.table.max(row)
    }

    /// Returns the greedy action in `state` without drawing from the random source.
    ///
    /// Ties go to the lowest action index.
    pub fn best_action(&self, state: &[usize]) -> Result<usize> {
        let shape = self.shape()?;
        let row = shape.space.index_of(state)?;
        shape.table.argmax(row)
    }

    /// Chooses an action index for `state` with the epsilon-greedy policy.
    ///
    /// With probability `exploit_probability` the greedy action is returned,
    /// otherwise an action drawn uniformly from all actions.
    pub fn choose_action(&mut self, state: &[usize]) -> Result<usize> {
        let policy = self.policy();
        let shape = self.shape.as_ref().ok_or(Error::NotInitialized)?;
        let row = shape.space.index_of(state)?;
        let selection = policy.select(shape.table.row(row)?, &mut self.rng)?;

        if let Selection::Random(action) = selection {
            log::trace!(
                "Exploring action {} in state [{}]",
                action,
                StateSpace::render(state)
            );
        }
        Ok(selection.action())
    }

    /// Applies one Q-learning update for the transition `state --action--> next_state`.
    pub fn update_q(
        &mut self,
        state: &[usize],
        action: usize,
        next_state: &[usize],
        reward: T,
    ) -> Result<()> {
        let alpha = T::from_f64(self.config.learning_rate);
        let gamma = T::from_f64(self.config.discount_factor);
        let shape = self.shape.as_mut().ok_or(Error::NotInitialized)?;

        let row = shape.space.index_of(state)?;
        let next_row = shape.space.index_of(next_state)?;
        let max_next = shape.table.max(next_row)?;
        let q = shape.table.get_mut(row, action)?;

        let td_error = reward + gamma * max_next - *q;
        *q += alpha * td_error;

        self.total_updates += 1;
        log::trace!(
            "Updated Q([{}], {}) by TD error {} (reward {})",
            StateSpace::render(state),
            action,
            td_error,
            reward
        );
        Ok(())
    }

    /// Resets every Q-value to zero while keeping the shape.
    pub fn reset(&mut self) -> Result<()> {
        self.shape_mut()?.table.fill_zero();
        self.total_updates = 0;
        log::debug!("Reset Q-table");
        Ok(())
    }

    /// Returns the linear row index of `state`.
    pub fn state_index(&self, state: &[usize]) -> Result<usize> {
        self.shape()?.space.index_of(state)
    }

    /// Returns the state space.
    pub fn state_space(&self) -> Result<&StateSpace> {
        Ok(&self.shape()?.space)
    }

    /// Returns the underlying table.
    pub fn table(&self) -> Result<&QTable<T>> {
        Ok(&self.shape()?.table)
    }

    /// Returns the action identifiers passed to `init`.
    pub fn actions(&self) -> Result<&[i32]> {
        Ok(&self.shape()?.actions)
    }

    /// Returns the number of actions.
    pub fn action_count(&self) -> Result<usize> {
        Ok(self.shape()?.actions.len())
    }

    /// Maps an action index back to the identifier given to `init`.
    pub fn action_id(&self, action: usize) -> Result<i32> {
        let actions = &self.shape()?.actions;
        actions
            .get(action)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: action,
                len: actions.len(),
            })
    }

    /// Returns the number of successful `update_q` calls since `init` or `reset`.
    pub fn total_updates(&self) -> u64 {
        self.total_updates
    }

    /// Returns the configuration.
    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    /// Returns a mutable reference to the configuration.
    ///
    /// Changes to `seed` only take effect through [`TabularQLearner::reseed`].
    pub fn config_mut(&mut self) -> &mut LearnerConfig {
        &mut self.config
    }

    /// Returns the learning rate (alpha).
    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    /// Sets the learning rate (alpha).
    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.config.learning_rate = learning_rate;
        self.config.warn_unconventional();
    }

    /// Returns the discount factor (gamma).
    pub fn discount_factor(&self) -> f64 {
        self.config.discount_factor
    }

    /// Sets the discount factor (gamma).
    pub fn set_discount_factor(&mut self, discount_factor: f64) {
        self.config.discount_factor = discount_factor;
        self.config.warn_unconventional();
    }

    /// Returns the probability of choosing the greedy action.
    pub fn exploit_probability(&self) -> f64 {
        self.config.exploit_probability
    }

    /// Sets the probability of choosing the greedy action.
    pub fn set_exploit_probability(&mut self, exploit_probability: f64) {
        self.config.exploit_probability = exploit_probability;
        self.config.warn_unconventional();
    }

    /// Returns the exploration rate (epsilon), `1 - exploit_probability`.
    pub fn exploration_rate(&self) -> f64 {
        self.config.exploration_rate()
    }

    /// Sets the exploration rate (epsilon).
    pub fn set_exploration_rate(&mut self, epsilon: f64) {
        self.set_exploit_probability(1.0 - epsilon);
    }

    /// Returns the action-selection policy implied by the configuration.
    pub fn policy(&self) -> EpsilonGreedy {
        EpsilonGreedy::new(self.config.exploit_probability)
    }

    fn shape(&self) -> Result<&Shape<T>> {
        self.shape.as_ref().ok_or(Error::NotInitialized)
    }

    fn shape_mut(&mut self) -> Result<&mut Shape<T>> {
        self.shape.as_mut().ok_or(Error::NotInitialized)
    }
}
