//! Random subtrajectories.
use crate::{GoalObs, HsgError, Trajectory};
use rand::{seq::index, Rng};

/// Samples `n` subtrajectories of `trajectory`.
///
/// The endpoints of each subtrajectory are two distinct indices drawn uniformly
/// from `[0, len)`, and both are included. Goals and rewards are kept as they are.
pub(super) fn sample<O, I, R>(
    trajectory: &Trajectory<O, I>,
    n: usize,
    rng: &mut R,
) -> Result<Vec<Trajectory<O, I>>, HsgError>
where
    O: GoalObs,
    I: Clone,
    R: Rng + ?Sized,
{
    let len = trajectory.len();
    if len < 2 {
        return Err(HsgError::TrajectoryTooShort { len, min: 2 });
    }

    (0..n)
        .map(|_| {
            let ixs = index::sample(&mut *rng, len, 2);
            let (i1, i2) = (ixs.index(0), ixs.index(1));
            if i1 < i2 {
                trajectory.sub(i1, i2)
            } else {
                trajectory.sub(i2, i1)
            }
        })
        .collect()
}
