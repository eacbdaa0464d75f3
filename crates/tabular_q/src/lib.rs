//! # tabular_q - Tabular Q-Learning
//!
//! Epsilon-greedy Q-learning over a discretized, multi-dimensional state
//! space with a discrete action set. Intended as a building block for AIngle
//! agents that learn state-action values by interacting with an environment
//! small enough to enumerate.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               TabularQLearner                │
//! │                                              │
//! │  state [s0, s1, .., sn]                      │
//! │        │                                     │
//! │  ┌─────▼──────┐   row   ┌─────────────────┐  │
//! │  │ StateSpace ├────────►│ QTable          │  │
//! │  │ (mixed     │         │ rows x actions  │  │
//! │  │  radix)    │         └───────┬─────────┘  │
//! │  └────────────┘                 │            │
//! │                      ┌──────────▼─────────┐  │
//! │                      │ EpsilonGreedy      │  │
//! │                      │ exploit / explore  │  │
//! │                      └────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tabular_q::{LearnerConfig, TabularQLearner};
//!
//! let config = LearnerConfig::default()
//!     .with_learning_rate(0.5)
//!     .with_discount_factor(0.9)
//!     .with_seed(7);
//!
//! // Two coordinates with two values each, two actions.
//! let mut learner: TabularQLearner<f64> = TabularQLearner::new(config);
//! learner.init(vec![2, 2], vec![0, 1])?;
//!
//! learner.set_q_value(&[1, 0], 1, 5.0)?;
//! learner.update_q(&[0, 0], 0, &[1, 0], 1.0)?;
//! assert!((learner.get_q_value(&[0, 0], 0)? - 2.75).abs() < 1e-12);
//!
//! let action = learner.choose_action(&[0, 0])?;
//! assert!(action < 2);
//! # Ok::<(), tabular_q::Error>(())
//! ```
//!
//! ## Exploitation probability
//!
//! [`LearnerConfig::exploit_probability`] is the probability of taking the
//! *greedy* action. Its complement is the exploration rate (epsilon), exposed
//! through [`LearnerConfig::exploration_rate`] and
//! [`TabularQLearner::set_exploration_rate`].
//!
//! ## Errors
//!
//! Every operation returns a [`Result`]. Rejected input is also reported
//! through the `log` facade at `warn` level, and never modifies the table.

pub mod config;
pub mod error;
pub mod learner;
pub mod policy;
pub mod space;
pub mod table;
pub mod value;

pub use config::LearnerConfig;
pub use error::{Error, Result};
pub use learner::TabularQLearner;
pub use policy::{EpsilonGreedy, Selection};
pub use space::StateSpace;
pub use table::QTable;
pub use value::QValue;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
