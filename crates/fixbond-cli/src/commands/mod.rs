//! CLI command implementations.

pub mod config;
pub mod price;
pub mod schedule;

pub use config::ConfigArgs;
pub use price::PriceArgs;
pub use schedule::ScheduleArgs;
