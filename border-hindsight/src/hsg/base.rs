//! Hindsight sample generator.
use super::HsgConfig;
use crate::{GoalObs, HsgError, HsgStrategy, RewardFn, Trajectory};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

/// Generates hindsight trajectories from trajectories collected in environments.
///
/// Trajectories given to [`Hsg::get`] are copied before relabeling, so the caller's
/// batch is never modified.
pub struct Hsg<O, I = ()>
where
    O: GoalObs,
{
    strategy: HsgStrategy,
    reward_fn: RewardFn<O::Goal, I>,
    rng: StdRng,
}

impl<O, I> Hsg<O, I>
where
    O: GoalObs,
    I: Clone,
{
    /// Builds a generator.
    pub fn build(config: &HsgConfig, reward_fn: RewardFn<O::Goal, I>) -> Self {
        info!(
            "Hindsight strategy {} (multiplier = {}, seed = {})",
            config.strategy,
            config.strategy.multiplier(),
            config.seed
        );

        Self {
            strategy: config.strategy,
            reward_fn,
            rng: StdRng::seed_from_u64(config.seed as _),
        }
    }

    /// The relabeling strategy.
    pub fn strategy(&self) -> HsgStrategy {
        self.strategy
    }

    /// Expected ratio of the number of generated trajectories to that of inputs.
    pub fn multiplier(&self) -> usize {
        self.strategy.multiplier()
    }

    /// Applies the strategy to a trajectory.
    pub fn relabel(
        &mut self,
        trajectory: Trajectory<O, I>,
    ) -> Result<Vec<Trajectory<O, I>>, HsgError> {
        self.strategy
            .apply(trajectory, &*self.reward_fn, &mut self.rng)
    }

    /// Generates hindsight trajectories from a batch of trajectories.
    ///
    /// Outputs of all trajectories are concatenated into a single list.
    pub fn get(
        &mut self,
        trajectories: &[Trajectory<O, I>],
    ) -> Result<Vec<Trajectory<O, I>>, HsgError> {
        let mut hs_trajectories = Vec::with_capacity(trajectories.len());

        for trajectory in trajectories.iter().cloned() {
            hs_trajectories.extend(self.relabel(trajectory)?);
        }

        debug!(
            "Generated {} trajectories from {} with {}",
            hs_trajectories.len(),
            trajectories.len(),
            self.strategy
        );

        Ok(hs_trajectories)
    }
}

/// Builds [`Hsg`] from the name of a strategy, like `final` or `split3`.
///
/// Fails if `reward_fn` is `None` or the name is invalid, before any trajectory
/// is processed.
pub fn get_hsg<O, I>(
    strategy: &str,
    reward_fn: Option<RewardFn<O::Goal, I>>,
) -> Result<Hsg<O, I>, HsgError>
where
    O: GoalObs,
    I: Clone,
{
    let reward_fn = reward_fn.ok_or(HsgError::MissingRewardFn)?;
    let config = HsgConfig::default().strategy(strategy.parse()?);
    Ok(Hsg::build(&config, reward_fn))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{dummy::line_trajectory, reward_fn, DictObs};
    use test_log::test;

    fn hsg(strategy: &str) -> Hsg<DictObs> {
        let f = reward_fn(|a: &Vec<f32>, d: &Vec<f32>, _: &()| if a == d { 0.0 } else { -1.0 });
        get_hsg(strategy, Some(f)).unwrap()
    }

    #[test]
    fn test_get_hsg() {
        assert_eq!(hsg("split3").strategy(), HsgStrategy::Split(3));
        assert_eq!(hsg("randomsub2").multiplier(), 2);
    }

    #[test]
    fn test_get_hsg_missing_reward_fn() {
        let err = get_hsg::<DictObs, ()>("final", None).err().unwrap();
        assert_eq!(err, HsgError::MissingRewardFn);
        assert!(err.is_config_error());
    }

    #[test]
    fn test_get_flattens() -> Result<(), HsgError> {
        let batch = vec![line_trajectory(9), line_trajectory(6), line_trajectory(2)];
        let trajs = hsg("split3").get(&batch)?;

        // The last trajectory is shorter than 3 and returned as it is
        assert_eq!(trajs.len(), 3 + 3 + 1);
        assert_eq!(trajs[6], line_trajectory(2));

        Ok(())
    }

    #[test]
    fn test_get_split_larger_than_trajectory() -> Result<(), HsgError> {
        let batch = vec![line_trajectory(5), line_trajectory(3)];
        let mut hsg = hsg("split100000000000000000");
        assert_eq!(hsg.multiplier(), 99_999_999_999_999_999);

        let trajs = hsg.get(&batch)?;
        assert_eq!(trajs, batch);

        Ok(())
    }

    #[test]
    fn test_get_empty_batch() -> Result<(), HsgError> {
        assert!(hsg("final").get(&[])?.is_empty());
        Ok(())
    }

    #[test]
    fn test_get_error() {
        let batch = vec![line_trajectory(5), line_trajectory(1)];
        assert_eq!(
            hsg("randomsub2").get(&batch).err(),
            Some(HsgError::TrajectoryTooShort { len: 1, min: 2 })
        );
        assert_eq!(
            hsg("future").get(&batch).err(),
            Some(HsgError::Unimplemented("future"))
        );
    }
}
