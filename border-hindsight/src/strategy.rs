//! Strategies of hindsight goal relabeling.
//!
//! A strategy transforms a trajectory into zero or more trajectories. Each output
//! trajectory is consistent: all transitions share the same desired goal and
//! rewards are recomputed against it, unless the strategy does not relabel goals
//! at all.
//!
//! | Name           | Strategy                      | Multiplier |
//! |----------------|-------------------------------|------------|
//! | `none`         | [`HsgStrategy::None`]         | 0          |
//! | `final`        | [`HsgStrategy::Final`]        | 1          |
//! | `future`       | [`HsgStrategy::Future`]       | 0          |
//! | `random`       | [`HsgStrategy::Random`]       | 0          |
//! | `split{K}`     | [`HsgStrategy::Split`]        | K - 1      |
//! | `randomsub{N}` | [`HsgStrategy::RandomSub`]    | N          |
mod final_goal;
mod random_sub;
mod split;
use crate::{GoalObs, HsgError, Trajectory};
use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt, str::FromStr};

/// Hindsight relabeling strategy and its parameter.
///
/// The string form, e.g. `split3`, is used in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum HsgStrategy {
    /// Returns the input trajectory as it is.
    None,

    /// Relabels the desired goal with the goal achieved at the end of the trajectory.
    Final,

    /// Relabels each transition with a goal achieved later in the same trajectory.
    ///
    /// Not implemented.
    Future,

    /// Relabels with goals taken from other trajectories.
    ///
    /// Not implemented.
    Random,

    /// Splits a trajectory into the given number of pieces, each of which is
    /// relabeled with its own final achieved goal.
    Split(usize),

    /// Samples the given number of random subtrajectories without relabeling.
    RandomSub(usize),
}

impl Default for HsgStrategy {
    fn default() -> Self {
        Self::None
    }
}

impl HsgStrategy {
    /// Expected ratio of the number of output trajectories to that of inputs.
    ///
    /// It is used to size buffers and not enforced.
    pub fn multiplier(&self) -> usize {
        match self {
            Self::None | Self::Future | Self::Random => 0,
            Self::Final => 1,
            Self::Split(k) => k.saturating_sub(1),
            Self::RandomSub(n) => *n,
        }
    }

    /// Applies the strategy to a trajectory.
    ///
    /// `rng` is used only by [`HsgStrategy::RandomSub`].
    pub fn apply<O, I, F, R>(
        &self,
        trajectory: Trajectory<O, I>,
        reward_fn: &F,
        rng: &mut R,
    ) -> Result<Vec<Trajectory<O, I>>, HsgError>
    where
        O: GoalObs,
        I: Clone,
        F: Fn(&O::Goal, &O::Goal, &I) -> f32 + ?Sized,
        R: Rng + ?Sized,
    {
        trace!("Apply {} to a trajectory of length {}", self, trajectory.len());

        match self {
            Self::None => Ok(vec![trajectory]),
            Self::Final => Ok(vec![final_goal::relabel(trajectory, reward_fn)]),
            Self::Future => Err(HsgError::Unimplemented("future")),
            Self::Random => Err(HsgError::Unimplemented("random")),
            Self::Split(k) => split::relabel(trajectory, *k, reward_fn),
            Self::RandomSub(n) => random_sub::sample(&trajectory, *n, rng),
        }
    }
}

fn parse_param(s: &str, name: &str) -> Result<usize, HsgError> {
    let value = s.replace(name, "");
    match value.parse::<usize>() {
        Ok(k) if k > 0 => Ok(k),
        _ => Err(HsgError::InvalidParameter {
            name: name.to_string(),
            value,
        }),
    }
}

impl FromStr for HsgStrategy {
    type Err = HsgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "final" => Ok(Self::Final),
            "future" => Ok(Self::Future),
            "random" => Ok(Self::Random),
            _ if s.contains("randomsub") => Ok(Self::RandomSub(parse_param(s, "randomsub")?)),
            _ if s.contains("split") => Ok(Self::Split(parse_param(s, "split")?)),
            _ => Err(HsgError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for HsgStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Final => write!(f, "final"),
            Self::Future => write!(f, "future"),
            Self::Random => write!(f, "random"),
            Self::Split(k) => write!(f, "split{}", k),
            Self::RandomSub(n) => write!(f, "randomsub{}", n),
        }
    }
}

impl TryFrom<String> for HsgStrategy {
    type Error = HsgError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HsgStrategy> for String {
    fn from(strategy: HsgStrategy) -> Self {
        strategy.to_string()
    }
}
