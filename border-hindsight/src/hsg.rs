//! Hindsight sample generator.
//!
//! [`Hsg`] applies a [`HsgStrategy`](crate::HsgStrategy) to every trajectory in a
//! batch and collects the generated trajectories into a flat list.
//!
//! # Examples
//!
//! ```rust
//! use border_hindsight::{get_hsg, sparse_reward, DictObs, Hsg, Trajectory, Transition};
//!
//! let trajectory: Trajectory<DictObs> = (0..5)
//!     .map(|t| {
//!         let obs = DictObs::new(vec![], vec![t as f32], vec![10.0]);
//!         Transition::new(obs, -1.0, ())
//!     })
//!     .collect();
//!
//! let mut hsg: Hsg<DictObs> = get_hsg("final", Some(sparse_reward(0.05))).unwrap();
//! let trajectories = hsg.get(&[trajectory]).unwrap();
//!
//! assert_eq!(trajectories.len(), 1);
//! assert_eq!(trajectories[0].len(), 4);
//! ```
mod base;
mod config;
pub use base::{get_hsg, Hsg};
pub use config::HsgConfig;
