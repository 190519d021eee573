pub mod core;
pub mod quotes;
pub mod runtime;
pub mod state;
pub mod store;
pub mod terminal;
pub mod ui;

pub use crate::core::breakdown;
pub use crate::core::calendar;
pub use crate::core::clock;
pub use crate::core::config;
pub use crate::core::engine;
pub use crate::core::metrics;

pub use crate::runtime::Runtime;
pub use crate::state::AppState;
pub use crate::store::StatsStore;
pub use crate::terminal::Terminal;
