//! Observations with goals.
use crate::HsgError;
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, str::FromStr};

/// An observation of a goal-conditioned environment.
///
/// Besides arbitrary fields of the observation, it has the goal achieved in the
/// state and the goal the agent was instructed to pursue.
pub trait GoalObs: Clone + Debug {
    /// Goal.
    ///
    /// Goals are copied by value into each observation.
    type Goal: Clone + Debug + PartialEq;

    /// Returns the achieved goal.
    fn achieved_goal(&self) -> &Self::Goal;

    /// Returns the desired goal.
    fn desired_goal(&self) -> &Self::Goal;

    /// Overwrites the achieved goal.
    fn set_achieved_goal(&mut self, goal: Self::Goal);

    /// Overwrites the desired goal.
    fn set_desired_goal(&mut self, goal: Self::Goal);

    /// Returns the goal in the given field.
    fn goal(&self, field: GoalField) -> &Self::Goal {
        match field {
            GoalField::AchievedGoal => self.achieved_goal(),
            GoalField::DesiredGoal => self.desired_goal(),
        }
    }

    /// Overwrites the goal in the given field.
    fn set_goal(&mut self, field: GoalField, goal: Self::Goal) {
        match field {
            GoalField::AchievedGoal => self.set_achieved_goal(goal),
            GoalField::DesiredGoal => self.set_desired_goal(goal),
        }
    }
}

/// Goal fields of [`GoalObs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalField {
    /// `achieved_goal`.
    AchievedGoal,

    /// `desired_goal`.
    DesiredGoal,
}

impl FromStr for GoalField {
    type Err = HsgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "achieved_goal" => Ok(Self::AchievedGoal),
            "desired_goal" => Ok(Self::DesiredGoal),
            _ => Err(HsgError::UnknownField(s.to_string())),
        }
    }
}

/// Dictionary observation of goal-based environments like `FetchReach`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DictObs {
    /// Observation other than goals.
    pub observation: Vec<f32>,

    /// Achieved goal.
    pub achieved_goal: Vec<f32>,

    /// Desired goal.
    pub desired_goal: Vec<f32>,
}

impl DictObs {
    /// Constructs an observation.
    pub fn new(observation: Vec<f32>, achieved_goal: Vec<f32>, desired_goal: Vec<f32>) -> Self {
        Self {
            observation,
            achieved_goal,
            desired_goal,
        }
    }
}

impl GoalObs for DictObs {
    type Goal = Vec<f32>;

    fn achieved_goal(&self) -> &Self::Goal {
        &self.achieved_goal
    }

    fn desired_goal(&self) -> &Self::Goal {
        &self.desired_goal
    }

    fn set_achieved_goal(&mut self, goal: Self::Goal) {
        self.achieved_goal = goal;
    }

    fn set_desired_goal(&mut self, goal: Self::Goal) {
        self.desired_goal = goal;
    }
}
