//! Trajectories of goal-conditioned environments.
//!
//! A [`Trajectory`] is an ordered sequence of [`Transition`]s of a single episode,
//! or a fragment of it. Each transition holds an observation implementing
//! [`GoalObs`], i.e., an observation with an achieved goal and a desired goal,
//! together with its reward.
//!
//! The reward of the transition at `t` is given by the observation at `t + 1`,
//! the result of the action taken at `t`. Thus the reward of the last transition
//! in a trajectory can not be recomputed after relabeling.
mod base;
mod obs;
pub use base::{Trajectory, Transition};
pub use obs::{DictObs, GoalField, GoalObs};
