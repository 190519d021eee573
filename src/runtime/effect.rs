use crate::runtime::scheduler::SchedulerCommand;

/// What a reduced command asks the runner to do besides mutating state.
#[derive(Debug, Clone)]
pub enum Effect {
    Schedule(SchedulerCommand),
    RequestRender,
}
