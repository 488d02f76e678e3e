//! Relabeling with the final achieved goal.
use crate::{GoalField, GoalObs, Trajectory};

/// Sets the desired goal of all transitions to the achieved goal of the last
/// transition and recomputes rewards.
///
/// Does nothing on an empty trajectory.
pub(super) fn relabel_with_last<O, I, F>(trajectory: &mut Trajectory<O, I>, reward_fn: &F)
where
    O: GoalObs,
    I: Clone,
    F: Fn(&O::Goal, &O::Goal, &I) -> f32 + ?Sized,
{
    if let Some(goal) = trajectory.last_obs().map(|obs| obs.achieved_goal().clone()) {
        trajectory.update_obs(GoalField::DesiredGoal, &goal);
        trajectory.update_rewards(reward_fn);
    }
}

/// Drops the last transition, of which the reward can not be computed, then relabels
/// the trajectory with the goal achieved at its new end.
pub(super) fn relabel<O, I, F>(mut trajectory: Trajectory<O, I>, reward_fn: &F) -> Trajectory<O, I>
where
    O: GoalObs,
    I: Clone,
    F: Fn(&O::Goal, &O::Goal, &I) -> f32 + ?Sized,
{
    trajectory.pop();
    relabel_with_last(&mut trajectory, reward_fn);
    trajectory
}
