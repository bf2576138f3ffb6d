//! Gold and cyan palette shared by every screen

use crate::anim::RippleTier;
use crate::models::SkillLevel;
use ratatui::style::{Color, Modifier, Style};

/// Border shades the landing CTA pulses through
pub const GLOW_COLORS: [Color; 6] = [
    Color::Rgb(255, 215, 0),  // #FFD700
    Color::Rgb(255, 223, 51), // #FFDF33
    Color::Rgb(255, 199, 0),  // #FFC700
    Color::Rgb(255, 183, 0),  // #FFB700
    Color::Rgb(255, 199, 0),
    Color::Rgb(255, 223, 51),
];

/// Application palette
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    // Primary: gold
    pub gold: Color,
    pub gold_dark: Color,
    pub gold_dim: Color,

    // Secondary: cyan
    pub cyan: Color,
    pub cyan_dark: Color,
    pub cyan_dim: Color,

    // Backgrounds
    pub bg_dark: Color,
    pub bg_medium: Color,
    pub bg_light: Color,
    pub cta_bg: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_dim: Color,

    // Accents
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            gold: Color::Rgb(255, 215, 0),     // #FFD700
            gold_dark: Color::Rgb(184, 134, 11), // #B8860B
            gold_dim: Color::Rgb(139, 117, 0), // #8B7500

            cyan: Color::Rgb(0, 206, 209),     // #00CED1
            cyan_dark: Color::Rgb(0, 139, 139), // #008B8B
            cyan_dim: Color::Rgb(0, 102, 102), // #006666

            bg_dark: Color::Rgb(0, 0, 0),
            bg_medium: Color::Rgb(42, 42, 42), // #2A2A2A
            bg_light: Color::Rgb(58, 58, 58),  // #3A3A3A
            cta_bg: Color::Rgb(26, 26, 0),     // #1A1A00

            text_primary: Color::Rgb(255, 255, 255),
            text_secondary: Color::Rgb(204, 204, 204), // #CCCCCC
            text_dim: Color::Rgb(102, 102, 102),       // #666666

            success: Color::Rgb(50, 205, 50), // #32CD32
            error: Color::Rgb(255, 68, 68),   // #FF4444
            warning: Color::Rgb(255, 165, 0), // #FFA500
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Secondary text
    pub fn secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Hints and inactive content
    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Gold bold headings
    pub fn heading(&self) -> Style {
        Style::default().fg(self.gold).add_modifier(Modifier::BOLD)
    }

    /// Cyan bold section titles
    pub fn section(&self) -> Style {
        Style::default().fg(self.cyan).add_modifier(Modifier::BOLD)
    }

    /// Key names in hint bars
    pub fn key(&self) -> Style {
        Style::default().fg(self.gold_dark)
    }

    /// Border of a focused or selected panel
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.gold)
    }

    /// Border of an unfocused panel
    pub fn border_inactive(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Highlighted list row
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.gold)
            .bg(self.bg_medium)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// CTA character color for a ripple tier
    pub fn ripple_color(&self, tier: RippleTier) -> Color {
        match tier {
            RippleTier::Peak => self.gold,
            RippleTier::Near => Color::Rgb(230, 194, 0), // #E6C200
            RippleTier::Far => Color::Rgb(204, 170, 0),  // #CCAA00
            RippleTier::Base => self.gold_dark,
        }
    }

    /// Glow border color at palette index `index`
    pub fn glow_color(&self, index: usize) -> Color {
        GLOW_COLORS[index % GLOW_COLORS.len()]
    }

    /// Chip background for a skill level
    pub fn skill_chip(&self, level: SkillLevel) -> Style {
        let bg = match level {
            SkillLevel::Expert => self.gold_dim,
            SkillLevel::Advanced => self.cyan_dim,
            SkillLevel::Intermediate => self.bg_light,
            SkillLevel::Beginner => self.bg_medium,
        };
        Style::default().fg(self.text_primary).bg(bg)
    }
}

/// Mix `color` over `background` at `opacity` (0 = background, 1 = color).
/// Non-RGB colors are returned unchanged once opacity passes one half.
pub fn blend(color: Color, background: Color, opacity: f32) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |fg: u8, bg: u8| (bg as f32 + (fg as f32 - bg as f32) * t).round() as u8;
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        _ if t >= 0.5 => color,
        _ => background,
    }
}
