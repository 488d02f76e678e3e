#![warn(missing_docs)]
//! Hindsight goal relabeling for goal-conditioned reinforcement learning.
//!
//! Trajectories collected while pursuing a desired goal often have no reward
//! signal at all. [`Hsg`] generates additional trajectories by replacing the desired
//! goal with goals the agent actually achieved and recomputing rewards with the
//! given [`RewardFn`], without further interaction with the environment.
//!
//! The way new trajectories are made is selected with [`HsgStrategy`].
pub mod error;
mod hsg;
mod reward;
mod strategy;
mod trajectory;
pub use error::HsgError;
pub use hsg::{get_hsg, Hsg, HsgConfig};
pub use reward::{goal_distance, reward_fn, sparse_reward, RewardFn};
pub use strategy::HsgStrategy;
pub use trajectory::{DictObs, GoalField, GoalObs, Trajectory, Transition};

#[cfg(test)]
mod dummy;
