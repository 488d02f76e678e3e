//! Trajectory and transition.
use super::{GoalField, GoalObs};
use crate::HsgError;
use serde::{Deserialize, Serialize};
use std::iter::FromIterator;

/// A step of a trajectory.
///
/// `reward` is the reward given after taking an action at the state of `obs`.
/// `info` is passed to the reward function when the reward is recomputed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transition<O, I = ()> {
    /// Observation.
    pub obs: O,

    /// Reward.
    pub reward: f32,

    /// Additional information.
    pub info: I,
}

impl<O, I> Transition<O, I> {
    /// Constructs a transition.
    pub fn new(obs: O, reward: f32, info: I) -> Self {
        Self { obs, reward, info }
    }
}

/// A sequence of transitions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Trajectory<O, I = ()> {
    transitions: Vec<Transition<O, I>>,
}

impl<O, I> Default for Trajectory<O, I> {
    fn default() -> Self {
        Self {
            transitions: vec![],
        }
    }
}

impl<O, I> FromIterator<Transition<O, I>> for Trajectory<O, I> {
    fn from_iter<T: IntoIterator<Item = Transition<O, I>>>(iter: T) -> Self {
        Self {
            transitions: iter.into_iter().collect(),
        }
    }
}

impl<O, I> Trajectory<O, I>
where
    O: GoalObs,
    I: Clone,
{
    /// Constructs a trajectory from transitions.
    pub fn new(transitions: Vec<Transition<O, I>>) -> Self {
        Self { transitions }
    }

    /// Appends a transition.
    pub fn push(&mut self, transition: Transition<O, I>) {
        self.transitions.push(transition);
    }

    /// Removes the last transition and returns it, or `None` if the trajectory is empty.
    pub fn pop(&mut self) -> Option<Transition<O, I>> {
        self.transitions.pop()
    }

    /// The number of transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Returns `true` if the trajectory has no transitions.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Transitions in order.
    pub fn transitions(&self) -> &[Transition<O, I>] {
        &self.transitions
    }

    /// Observations in order.
    pub fn obs(&self) -> impl Iterator<Item = &O> {
        self.transitions.iter().map(|t| &t.obs)
    }

    /// The observation of the last transition.
    pub fn last_obs(&self) -> Option<&O> {
        self.transitions.last().map(|t| &t.obs)
    }

    /// Rewards in order.
    pub fn rewards(&self) -> Vec<f32> {
        self.transitions.iter().map(|t| t.reward).collect()
    }

    /// Sum of rewards.
    pub fn total_reward(&self) -> f32 {
        self.transitions.iter().map(|t| t.reward).sum()
    }

    /// Overwrites the goal in `field` of all observations with a copy of `goal`.
    pub fn update_obs(&mut self, field: GoalField, goal: &O::Goal) {
        for t in self.transitions.iter_mut() {
            t.obs.set_goal(field, goal.clone());
        }
    }

    /// Recomputes rewards with `reward_fn(achieved_goal, desired_goal, info)`.
    ///
    /// The reward at `t` is computed from the achieved goal of the observation at
    /// `t + 1` and the desired goal at `t`. The last transition has no successor,
    /// so its reward is left as it is.
    pub fn update_rewards<F>(&mut self, reward_fn: &F)
    where
        F: Fn(&O::Goal, &O::Goal, &I) -> f32 + ?Sized,
    {
        for i in 0..self.len().saturating_sub(1) {
            let ts = &self.transitions;
            let reward = reward_fn(
                ts[i + 1].obs.achieved_goal(),
                ts[i].obs.desired_goal(),
                &ts[i].info,
            );
            self.transitions[i].reward = reward;
        }
    }

    /// Splits the trajectory into `k` contiguous pieces.
    ///
    /// When the length is not divisible by `k`, the first `len % k` pieces have
    /// one more transition than the others.
    pub fn split(self, k: usize) -> Result<Vec<Self>, HsgError> {
        let len = self.len();
        if k == 0 || len < k {
            return Err(HsgError::TrajectoryTooShort { len, min: k.max(1) });
        }

        let (base, rem) = (len / k, len % k);
        let mut rest = self.transitions;
        let mut pieces = Vec::with_capacity(k);

        for i in 0..k {
            let size = if i < rem { base + 1 } else { base };
            let tail = rest.split_off(size);
            pieces.push(Self { transitions: rest });
            rest = tail;
        }

        Ok(pieces)
    }

    /// Returns a copy of the transitions in the inclusive range `[start, end]`.
    ///
    /// `start < end < len` is required, so the result has at least two transitions.
    pub fn sub(&self, start: usize, end: usize) -> Result<Self, HsgError> {
        let len = self.len();
        if start >= end || end >= len {
            return Err(HsgError::InvalidRange { start, end, len });
        }

        Ok(Self {
            transitions: self.transitions[start..=end].to_vec(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dummy::{line_trajectory, reached};

    #[test]
    fn test_pop() {
        let mut traj = line_trajectory(3);
        assert_eq!(traj.pop().map(|t| t.obs.achieved_goal), Some(vec![2.0]));
        assert_eq!(traj.len(), 2);

        let mut empty = line_trajectory(0);
        assert!(empty.pop().is_none());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_update_obs() {
        let mut traj = line_trajectory(4);
        traj.update_obs(GoalField::DesiredGoal, &vec![7.0]);
        assert!(traj.obs().all(|o| o.desired_goal == vec![7.0]));

        // Each observation owns its own copy of the goal
        traj.update_obs(GoalField::DesiredGoal, &vec![1.0]);
        assert!(traj.obs().all(|o| o.desired_goal == vec![1.0]));
        assert_eq!(
            traj.obs().map(|o| o.achieved_goal[0]).collect::<Vec<_>>(),
            vec![0.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_update_rewards() {
        let mut traj = line_trajectory(4);
        traj.update_obs(GoalField::DesiredGoal, &vec![2.0]);
        traj.update_rewards(&reached);

        // The goal is reached at t = 2, which is the result of the action at t = 1
        assert_eq!(traj.rewards(), vec![-1.0, 0.0, -1.0, -1.0]);
        assert_eq!(traj.total_reward(), -3.0);
    }

    #[test]
    fn test_update_rewards_short() {
        let mut traj = line_trajectory(1);
        traj.update_rewards(&reached);
        assert_eq!(traj.rewards(), vec![-1.0]);

        let mut traj = line_trajectory(0);
        traj.update_rewards(&reached);
        assert!(traj.is_empty());
    }

    #[test]
    fn test_split() -> Result<(), HsgError> {
        let pieces = line_trajectory(9).split(3)?;
        assert_eq!(pieces.iter().map(|p| p.len()).collect::<Vec<_>>(), vec![3, 3, 3]);

        let pieces = line_trajectory(8).split(3)?;
        assert_eq!(pieces.iter().map(|p| p.len()).collect::<Vec<_>>(), vec![3, 3, 2]);
        let goals = pieces
            .iter()
            .flat_map(|p| p.obs().map(|o| o.achieved_goal[0]))
            .collect::<Vec<_>>();
        assert_eq!(goals, (0..8).map(|t| t as f32).collect::<Vec<_>>());

        Ok(())
    }

    #[test]
    fn test_split_invalid() {
        assert_eq!(
            line_trajectory(2).split(3),
            Err(HsgError::TrajectoryTooShort { len: 2, min: 3 })
        );
        assert!(line_trajectory(2).split(0).is_err());
    }

    #[test]
    fn test_sub() -> Result<(), HsgError> {
        let traj = line_trajectory(6);
        let sub = traj.sub(1, 4)?;
        assert_eq!(sub.transitions(), &traj.transitions()[1..=4]);

        assert!(traj.sub(3, 3).is_err());
        assert!(traj.sub(4, 2).is_err());
        assert_eq!(
            traj.sub(2, 6),
            Err(HsgError::InvalidRange { start: 2, end: 6, len: 6 })
        );

        Ok(())
    }
}
