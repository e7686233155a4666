pub mod analyzer;
pub mod common;
pub mod config;
pub mod prob;
pub mod series;
pub mod streak;

pub use analyzer::analyzer::{Analyzer, StreakReport};
pub use common::enums::Direction;
pub use config::streak_config::StreakConfig;
