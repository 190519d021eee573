//! Pure command handling: mutate state, emit effects, no I/O. The wall
//! clock comes in as an argument so tests can replay any instant.

use crate::core::clock::EpochMillis;
use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::runtime::scheduler::SchedulerCommand;
use crate::state::AppState;

/// Scheduler keys for the periodic work this app runs.
pub const COUNTDOWN_TICK_KEY: &str = "countdown-tick";
pub const QUOTE_TICK_KEY: &str = "quote-tick";
pub const SNOW_TICK_KEY: &str = "snow-tick";

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, command: Command, now: EpochMillis) -> Vec<Effect> {
        match command {
            Command::Exit => {
                state.request_exit();
                vec![]
            }
            Command::CountdownTick => refresh(state, now),
            Command::QuoteTick => {
                state.rotate_quote();
                vec![Effect::RequestRender]
            }
            Command::SnowTick => {
                state.drift_snow();
                vec![Effect::RequestRender]
            }
            Command::ToggleExtraSaturday => {
                state.toggle_extra_saturday();
                refresh(state, now)
            }
            Command::ToggleTracker => {
                state.toggle_tracker();
                vec![Effect::RequestRender]
            }
            Command::ToggleGrinch => {
                state.toggle_grinch();
                vec![Effect::RequestRender]
            }
            Command::Noop => vec![],
        }
    }
}

/// Recompute the snapshot; on the tick that latches completion, tear the
/// periodic timers down. The cancels are idempotent, so a toggle landing
/// on the same instant cannot double-cancel anything.
fn refresh(state: &mut AppState, now: EpochMillis) -> Vec<Effect> {
    let newly_complete = state.tick(now);
    let mut effects = vec![Effect::RequestRender];
    if newly_complete {
        effects.push(Effect::Schedule(SchedulerCommand::Cancel {
            key: COUNTDOWN_TICK_KEY.to_string(),
        }));
        effects.push(Effect::Schedule(SchedulerCommand::Cancel {
            key: SNOW_TICK_KEY.to_string(),
        }));
    }
    effects
}
