//! The event loop: drain due timers, poll the terminal up to the next
//! deadline, reduce, render when asked.

use crate::core::clock;
use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::runtime::event::AppEvent;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::{
    COUNTDOWN_TICK_KEY, QUOTE_TICK_KEY, Reducer, SNOW_TICK_KEY,
};
use crate::runtime::scheduler::{Scheduler, SchedulerCommand};
use crate::state::AppState;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::Renderer;
use std::io;
use std::time::{Duration, Instant};

const QUOTE_PERIOD: Duration = Duration::from_secs(15);
const SNOW_PERIOD: Duration = Duration::from_millis(200);

pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    scheduler: Scheduler,
    key_bindings: KeyBindings,
}

impl Runtime {
    pub fn new(state: AppState, terminal: Terminal) -> Self {
        Self {
            state,
            terminal,
            scheduler: Scheduler::new(),
            key_bindings: KeyBindings::new(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;
        let run_result = self.event_loop();
        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn event_loop(&mut self) -> io::Result<()> {
        self.install_timers();
        self.render()?;

        while !self.state.should_exit() {
            for event in self.scheduler.drain_ready(Instant::now()) {
                self.dispatch(event)?;
                if self.state.should_exit() {
                    return Ok(());
                }
            }

            let now = Instant::now();
            let timeout = self.scheduler.poll_timeout(now, Duration::from_millis(120));
            if let Some(event) = self.terminal.poll_event(timeout)? {
                self.dispatch(AppEvent::Terminal(event))?;
            }
        }

        Ok(())
    }

    fn install_timers(&mut self) {
        let now = Instant::now();
        // First recomputation immediately, then once per second. The
        // completion tick cancels the recurring keys again.
        self.scheduler.schedule(
            SchedulerCommand::EmitNow(AppEvent::Command(Command::CountdownTick)),
            now,
        );
        self.scheduler.schedule(
            SchedulerCommand::EmitEvery {
                key: COUNTDOWN_TICK_KEY.to_string(),
                period: Duration::from_secs(1),
                event: AppEvent::Command(Command::CountdownTick),
            },
            now,
        );
        self.scheduler.schedule(
            SchedulerCommand::EmitEvery {
                key: QUOTE_TICK_KEY.to_string(),
                period: QUOTE_PERIOD,
                event: AppEvent::Command(Command::QuoteTick),
            },
            now,
        );
        if !self.state.is_complete() {
            self.scheduler.schedule(
                SchedulerCommand::EmitEvery {
                    key: SNOW_TICK_KEY.to_string(),
                    period: SNOW_PERIOD,
                    event: AppEvent::Command(Command::SnowTick),
                },
                now,
            );
        }
    }

    fn dispatch(&mut self, event: AppEvent) -> io::Result<()> {
        match event {
            AppEvent::Terminal(TerminalEvent::Resize { width, .. }) => {
                self.state.handle_resize(width);
                self.render()
            }
            AppEvent::Terminal(TerminalEvent::Key(key)) => {
                let command = self.key_bindings.resolve(key).unwrap_or(Command::Noop);
                self.process_command(command)
            }
            AppEvent::Command(command) => self.process_command(command),
        }
    }

    fn process_command(&mut self, command: Command) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.state, command, clock::system_now_millis());
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;
        for effect in effects {
            match effect {
                Effect::Schedule(command) => {
                    self.scheduler.schedule(command, Instant::now());
                }
                Effect::RequestRender => {
                    render_requested = true;
                }
            }
        }
        if render_requested {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = Renderer::render(&self.state, self.terminal.size());
        self.terminal.render(&frame)
    }
}
