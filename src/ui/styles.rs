// UI Styles
// Theme tokens and styling for the toolbar

use ratatui::style::{Color, Modifier, Style};

/// Resolve a theme token or terminal colour name to a colour
pub fn parse_color(color: &str) -> Color {
    match color.to_lowercase().as_str() {
        // Theme tokens
        "primary" => Color::Cyan,
        "secondary" => Color::Magenta,
        "tertiary" => Color::Blue,
        "success" => Color::Green,
        "warning" => Color::Yellow,
        "danger" => Color::Red,
        "light" => Color::White,
        "medium" => Color::Gray,
        "dark" => Color::DarkGray,
        // Plain colour names
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        _ => Color::Cyan, // Default
    }
}

/// Toolbar color scheme and styles
pub struct Styles;

impl Styles {
    // === Buttons ===

    pub fn button_active(color: Color) -> Style {
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn indicator(color: Color) -> Style {
        Style::default().fg(color)
    }

    // === Content ===

    pub fn content_border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn content_title(color: Color) -> Style {
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }
}
