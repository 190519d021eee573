pub mod breakdown;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod engine;
pub mod metrics;

pub use breakdown::CountdownBreakdown;
pub use config::CountdownConfig;
pub use engine::CountdownEngine;
