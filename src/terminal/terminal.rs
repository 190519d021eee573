//! Crossterm wrapper: raw mode + alternate screen for the lifetime of the
//! session, key/resize mapping into our event types, and frame drawing.

use crate::terminal::input_event::{KeyCode, KeyEvent, KeyModifiers};
use crate::terminal::terminal_event::TerminalEvent;
use crate::ui::renderer::{FrameSize, RenderFrame};
use crate::ui::style::{Color, Style};
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{
    Attribute, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

pub struct Terminal {
    stdout: Stdout,
    size: FrameSize,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let stdout = io::stdout();
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            size: FrameSize { width, height },
        })
    }

    pub fn size(&self) -> FrameSize {
        self.size
    }

    /// Raw mode, alternate screen, hidden cursor. Paired with `exit`.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )
    }

    /// Best effort teardown; runs even after a failed session so the
    /// shell is left usable.
    pub fn exit(&mut self) -> io::Result<()> {
        let restore = execute!(
            self.stdout,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let raw = terminal::disable_raw_mode();
        restore.and(raw)
    }

    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<TerminalEvent>> {
        if !poll(timeout)? {
            return Ok(None);
        }
        loop {
            match read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        if !poll(Duration::from_millis(0))? {
                            return Ok(None);
                        }
                        continue;
                    }
                    return Ok(Some(TerminalEvent::Key(map_key_event(key))));
                }
                Event::Resize(width, height) => {
                    self.size = FrameSize { width, height };
                    return Ok(Some(TerminalEvent::Resize { width, height }));
                }
                _ => {
                    if !poll(Duration::from_millis(0))? {
                        return Ok(None);
                    }
                }
            }
        }
    }

    pub fn render(&mut self, frame: &RenderFrame) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(0, 0))?;
        for line in &frame.lines {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::CurrentLine))?;
            for span in line {
                self.queue_span_style(span.style)?;
                write!(self.stdout, "{}", span.text)?;
                if !span.style.is_plain() {
                    queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
                }
            }
            write!(self.stdout, "\r\n")?;
        }
        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )?;
        self.stdout.flush()
    }

    fn queue_span_style(&mut self, style: Style) -> io::Result<()> {
        if let Some(fg) = style.color {
            queue!(self.stdout, SetForegroundColor(map_color(fg)))?;
        }
        if let Some(bg) = style.background {
            queue!(self.stdout, SetBackgroundColor(map_color(bg)))?;
        }
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::Black => crossterm::style::Color::Black,
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Yellow => crossterm::style::Color::Yellow,
        Color::Blue => crossterm::style::Color::Blue,
        Color::Magenta => crossterm::style::Color::Magenta,
        Color::Cyan => crossterm::style::Color::Cyan,
        Color::White => crossterm::style::Color::White,
    }
}

fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(event.code),
        modifiers: map_key_modifiers(event.modifiers),
    }
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        _ => KeyCode::Other,
    }
}

fn map_key_modifiers(modifiers: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut mapped = KeyModifiers::NONE;
    if modifiers.contains(crossterm::event::KeyModifiers::SHIFT) {
        mapped |= KeyModifiers::SHIFT;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::CONTROL) {
        mapped |= KeyModifiers::CONTROL;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::ALT) {
        mapped |= KeyModifiers::ALT;
    }
    mapped
}
