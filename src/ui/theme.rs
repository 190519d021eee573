use crate::ui::style::{Color, Style};

/// Palette for one rendering mode. Grinch mode trades red/white cheer for
/// green disdain; everything else about the layout stays put.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub label: Style,
    pub value: Style,
    pub unit: Style,
    pub bar_filled: Style,
    pub bar_empty: Style,
    pub quote: Style,
    pub hint: Style,
    pub alert: Style,
    pub snow: Style,
}

impl Theme {
    pub fn festive() -> Self {
        Self {
            title: Style::new().color(Color::Red).bold(),
            label: Style::new().color(Color::DarkGrey),
            value: Style::new().color(Color::White).bold(),
            unit: Style::new().color(Color::DarkGrey),
            bar_filled: Style::new().color(Color::Green),
            bar_empty: Style::new().color(Color::DarkGrey).dim(),
            quote: Style::new().color(Color::Yellow),
            hint: Style::new().color(Color::DarkGrey).dim(),
            alert: Style::new().color(Color::Magenta).bold(),
            snow: Style::new().color(Color::Cyan),
        }
    }

    pub fn grinch() -> Self {
        Self {
            title: Style::new().color(Color::Green).bold(),
            label: Style::new().color(Color::DarkGrey),
            value: Style::new().color(Color::Green).bold(),
            unit: Style::new().color(Color::DarkGrey),
            bar_filled: Style::new().color(Color::Green).dim(),
            bar_empty: Style::new().color(Color::Black),
            quote: Style::new().color(Color::Green),
            hint: Style::new().color(Color::DarkGrey).dim(),
            alert: Style::new().color(Color::Green).bold(),
            snow: Style::new().color(Color::DarkGrey).dim(),
        }
    }
}
