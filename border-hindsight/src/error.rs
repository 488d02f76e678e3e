//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum HsgError {
    /// The strategy name matches none of the known strategies.
    #[error("Unknown hindsight strategy: {0}")]
    UnknownStrategy(String),

    /// The numeric parameter embedded in a strategy name is missing, not an
    /// integer, or zero.
    #[error("Invalid parameter for strategy {name}: {value:?}")]
    InvalidParameter {
        /// Strategy name, e.g. `split`.
        name: String,
        /// The text that failed to parse.
        value: String,
    },

    /// No reward function was given when building the relabeler.
    #[error("Reward function is not set")]
    MissingRewardFn,

    /// The strategy is a valid name but has no implementation.
    #[error("Hindsight strategy {0} is not implemented")]
    Unimplemented(&'static str),

    /// The trajectory is shorter than the strategy requires.
    #[error("Trajectory of length {len} is too short, at least {min} transitions are required")]
    TrajectoryTooShort {
        /// Length of the trajectory.
        len: usize,
        /// Required length.
        min: usize,
    },

    /// Index range out of the trajectory.
    #[error("Invalid range [{start}, {end}] for trajectory of length {len}")]
    InvalidRange {
        /// First index.
        start: usize,
        /// Last index (inclusive).
        end: usize,
        /// Length of the trajectory.
        len: usize,
    },

    /// Unknown observation field name.
    #[error("Unknown observation field: {0}")]
    UnknownField(String),
}

impl HsgError {
    /// Returns `true` if the error comes from an invalid configuration,
    /// i.e., an invalid name or a missing reward function, raised before any
    /// trajectory is processed.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownStrategy(_)
                | Self::InvalidParameter { .. }
                | Self::MissingRewardFn
                | Self::UnknownField(_)
        )
    }
}
