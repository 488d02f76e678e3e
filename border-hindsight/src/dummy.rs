//! This module is used for tests.
use crate::{DictObs, Trajectory, Transition};

/// A trajectory of length `len` moving along a line.
///
/// The achieved goal at `t` is `[t]` and the desired goal `[100]` is never
/// reached, so all rewards are `-1`.
pub fn line_trajectory(len: usize) -> Trajectory<DictObs> {
    (0..len)
        .map(|t| {
            let obs = DictObs::new(vec![t as f32, 0.5], vec![t as f32], vec![100.0]);
            Transition::new(obs, -1.0, ())
        })
        .collect()
}

/// Sparse reward, `0` if the desired goal is reached and `-1` otherwise.
pub fn reached(achieved_goal: &Vec<f32>, desired_goal: &Vec<f32>, _info: &()) -> f32 {
    if achieved_goal == desired_goal {
        0.0
    } else {
        -1.0
    }
}
