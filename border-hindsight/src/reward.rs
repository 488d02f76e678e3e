//! Reward functions used to recompute rewards of relabeled trajectories.
use std::sync::Arc;

/// Reward function `reward(achieved_goal, desired_goal, info)`.
///
/// It must be deterministic and free of side effects, as it is called once for
/// each transition whose reward is recomputed.
pub type RewardFn<G, I = ()> = Arc<dyn Fn(&G, &G, &I) -> f32 + Send + Sync>;

/// Wraps a closure into [`RewardFn`].
pub fn reward_fn<G, I, F>(f: F) -> RewardFn<G, I>
where
    F: Fn(&G, &G, &I) -> f32 + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Sparse reward of goal-based robotics environments.
///
/// Returns `0` if the Euclidean distance between the achieved and the desired goal
/// is less than `distance_threshold`, and `-1` otherwise.
pub fn sparse_reward<I: 'static>(distance_threshold: f32) -> RewardFn<Vec<f32>, I> {
    Arc::new(move |achieved_goal: &Vec<f32>, desired_goal: &Vec<f32>, _info: &I| {
        if goal_distance(achieved_goal, desired_goal) < distance_threshold {
            0.0
        } else {
            -1.0
        }
    })
}

/// Euclidean distance between two goals.
pub fn goal_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sparse_reward() {
        let f = sparse_reward::<()>(0.05);
        assert_eq!(f(&vec![0.0, 0.0], &vec![0.03, 0.0], &()), 0.0);
        assert_eq!(f(&vec![0.0, 0.0], &vec![0.0, 0.1], &()), -1.0);
    }

    #[test]
    fn test_goal_distance() {
        assert_eq!(goal_distance(&[0.0, 3.0], &[4.0, 0.0]), 5.0);
    }
}
