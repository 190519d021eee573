#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    /// The 1-second recomputation of the countdown and derived metrics.
    CountdownTick,
    /// Cosmetic timers; they read countdown state but never decide it.
    QuoteTick,
    SnowTick,
    ToggleExtraSaturday,
    ToggleTracker,
    ToggleGrinch,
    Noop,
}
