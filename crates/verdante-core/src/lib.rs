pub mod config;
pub mod error;
pub mod providers;
pub mod resolve;
pub mod seed;
pub mod types;
pub mod weights;

pub use config::ProjectDocument;
pub use error::{ConfigError, ConfigResult};
pub use resolve::{effective_compliance, effective_profile};
pub use types::*;
pub use weights::ObjectiveWeights;

/// Round to two decimal places, the precision every figure is reported at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
