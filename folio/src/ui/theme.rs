//! Color theme and styling for the portfolio TUI

use ratatui::style::{Color, Modifier, Style};

/// Portfolio UI color theme
#[derive(Debug, Clone)]
pub struct FolioTheme {
    // Base colors
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,

    // Dialogue box
    pub nametag: Color,
    pub dialogue_text: Color,

    // Cards
    pub featured: Color,
    pub tag: Color,

    // Form feedback
    pub error: Color,
    pub success: Color,
}

impl Default for FolioTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Rgb(0xE8, 0xA8, 0x7C),
            accent: Color::Rgb(0xE8, 0xA8, 0x7C),

            nametag: Color::Rgb(0xA7, 0x8B, 0xFA),
            dialogue_text: Color::White,

            featured: Color::Yellow,
            tag: Color::Cyan,

            error: Color::LightRed,
            success: Color::LightGreen,
        }
    }
}

impl FolioTheme {
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    pub fn nametag_style(&self) -> Style {
        Style::default()
            .fg(self.nametag)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }

    /// Style for a filter button or page tab.
    pub fn tab_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for a card in a list.
    pub fn card_style(&self, highlighted: bool) -> Style {
        if highlighted {
            Style::default()
                .fg(self.foreground)
                .add_modifier(Modifier::REVERSED)
        } else {
            self.text_style()
        }
    }
}

/// Parse a `#RRGGBB` color, as stored with skills.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#61DAFB"), Some(Color::Rgb(0x61, 0xDA, 0xFB)));
        assert_eq!(hex_color("61DAFB"), None);
        assert_eq!(hex_color("#61DAF"), None);
        assert_eq!(hex_color("#GGGGGG"), None);
        assert_eq!(hex_color(""), None);
    }
}
