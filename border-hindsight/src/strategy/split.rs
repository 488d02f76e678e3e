//! Relabeling pieces of a trajectory.
use super::final_goal::relabel_with_last;
use crate::{GoalObs, HsgError, Trajectory};

/// Splits the trajectory into `k` pieces and relabels each piece with its own
/// final achieved goal.
///
/// A trajectory shorter than `k` is returned as it is. The last transition of each
/// piece keeps its reward, and a piece of length one is only relabeled.
pub(super) fn relabel<O, I, F>(
    trajectory: Trajectory<O, I>,
    k: usize,
    reward_fn: &F,
) -> Result<Vec<Trajectory<O, I>>, HsgError>
where
    O: GoalObs,
    I: Clone,
    F: Fn(&O::Goal, &O::Goal, &I) -> f32 + ?Sized,
{
    if trajectory.len() < k {
        return Ok(vec![trajectory]);
    }

    let mut pieces = trajectory.split(k)?;
    for piece in pieces.iter_mut() {
        relabel_with_last(piece, reward_fn);
    }

    Ok(pieces)
}
