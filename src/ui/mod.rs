pub mod confetti;
pub mod layout;
pub mod progress;
pub mod renderer;
pub mod snowfall;
pub mod span;
pub mod style;
pub mod theme;

pub use renderer::{FrameSize, RenderFrame, Renderer};
