//! Landing screen implementation
//!
//! Types a random subtitle, deletes it, then types the title. Once the title
//! is complete a "Get Started" button fades in with a rippling label and a
//! pulsing border.

use crate::anim::{Fade, Glow, Ripple, Typewriter};
use crate::app::state::{NavigationAction, RouterEvent};
use crate::app::theme::{blend, Theme, GLOW_COLORS};
use crate::app::timer::{TimerKind, TimerSet};
use crate::config::AnimationConfig;
use crate::APP_TITLE;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Call-to-action label
pub const CTA_TEXT: &str = "Get Started";

/// Landing screen component
#[derive(Debug)]
pub struct LandingScreen {
    typewriter: Typewriter,
    ripple: Ripple,
    glow: Glow,
    fade: Fade,
    cta_enabled: bool,
    timing: AnimationConfig,
}

impl LandingScreen {
    /// Create a landing screen that opens with `subtitle`
    pub fn new(subtitle: &str, timing: &AnimationConfig) -> Self {
        let sequence = if subtitle.is_empty() {
            vec![APP_TITLE.to_string()]
        } else {
            vec![subtitle.to_string(), APP_TITLE.to_string()]
        };

        Self {
            typewriter: Typewriter::new(sequence, timing.typewriter_timing()),
            ripple: Ripple::new(CTA_TEXT.chars().count(), timing.ripple_rest),
            glow: Glow::new(GLOW_COLORS.len()),
            fade: Fade::new(timing.fade_steps),
            cta_enabled: false,
            timing: timing.clone(),
        }
    }

    /// Typewriter state
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Whether the button is visible
    pub fn cta_enabled(&self) -> bool {
        self.cta_enabled
    }

    pub fn ripple(&self) -> &Ripple {
        &self.ripple
    }

    pub fn fade(&self) -> &Fade {
        &self.fade
    }

    /// Start the typewriter
    pub fn mount(&mut self, timers: &mut TimerSet) {
        match self.typewriter.next_delay() {
            Some(delay) => timers.once(TimerKind::Typewriter, delay),
            None => self.enable_cta(timers),
        }
    }

    fn enable_cta(&mut self, timers: &mut TimerSet) {
        if self.cta_enabled {
            return;
        }
        self.cta_enabled = true;
        timers.every(TimerKind::Ripple, self.timing.ripple);
        timers.every(TimerKind::Glow, self.timing.glow);
        timers.every(TimerKind::Fade, self.timing.fade);
    }

    /// Advance the animation driven by `kind`
    pub fn on_timer(&mut self, kind: TimerKind, timers: &mut TimerSet) -> Option<RouterEvent> {
        match kind {
            TimerKind::Typewriter => {
                if self.typewriter.tick() {
                    timers.cancel(TimerKind::Typewriter);
                    self.enable_cta(timers);
                } else if let Some(delay) = self.typewriter.next_delay() {
                    timers.once(TimerKind::Typewriter, delay);
                }
            }
            TimerKind::Ripple => self.ripple.tick(),
            TimerKind::Glow => self.glow.tick(),
            TimerKind::Fade => {
                if self.fade.tick() {
                    timers.cancel(TimerKind::Fade);
                }
            }
            TimerKind::Spinner | TimerKind::Step => {}
        }
        None
    }

    /// Handle navigation input
    pub fn handle_action(&mut self, action: NavigationAction) -> Option<RouterEvent> {
        match action {
            NavigationAction::Select => Some(RouterEvent::Confirm),
            NavigationAction::Back => Some(RouterEvent::Cancel),
            _ => None,
        }
    }

    /// Render the landing screen
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let content_height = 8 + 3 + 5;
        let top = area.height.saturating_sub(content_height) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(top),
                Constraint::Length(8), // Title
                Constraint::Length(3), // Gap
                Constraint::Length(5), // Button
                Constraint::Min(0),
            ])
            .split(area);

        self.render_title(f, chunks[1], theme);
        if self.cta_enabled {
            self.render_cta(f, chunks[3], theme);
        }
    }

    fn render_title(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = self.typewriter.visible_text();
        let line = if self.typewriter.index() == 0 && !self.typewriter.is_complete() {
            Line::from(Span::styled(text, Style::default().fg(theme.gold)))
        } else {
            // Letter-spaced banner for the product name
            let spaced: String = text
                .chars()
                .flat_map(|c| [c, ' '])
                .collect::<String>()
                .trim_end()
                .to_string();
            Line::from(Span::styled(spaced, theme.heading()))
        };

        let top = area.height.saturating_sub(1) / 2;
        let title_area = Rect {
            y: area.y + top,
            height: 1.min(area.height),
            ..area
        };
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), title_area);
    }

    fn render_cta(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let opacity = self.fade.opacity();
        let width = (CTA_TEXT.chars().count() as u16 + 10).min(area.width);
        let button = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            width,
            ..area
        };

        let label: Vec<Span> = CTA_TEXT
            .chars()
            .zip(self.ripple.tiers())
            .map(|(c, tier)| {
                let color = blend(theme.ripple_color(tier), theme.cta_bg, opacity);
                Span::styled(
                    c.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            })
            .collect();

        let border = blend(theme.glow_color(self.glow.index()), theme.bg_dark, opacity);
        let widget = Paragraph::new(vec![Line::from(""), Line::from(label)])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            )
            .style(Style::default().bg(theme.cta_bg));
        f.render_widget(widget, button);
    }
}
