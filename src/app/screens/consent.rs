//! Consent screen implementation
//!
//! Side-by-side Cloud Analysis and Offline panels. Left/right toggles the
//! selection, Enter confirms it.

use crate::app::state::{NavigationAction, RouterEvent};
use crate::app::theme::Theme;
use crate::config::AnalysisMode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::bars::render_demo_banner;

struct PanelCopy {
    pros: [&'static str; 3],
    cons: [&'static str; 3],
    footer: &'static str,
}

fn panel_copy(mode: AnalysisMode) -> PanelCopy {
    match mode {
        AnalysisMode::Cloud => PanelCopy {
            pros: [
                "Enhanced skill detection",
                "Smarter summaries",
                "Better project insights",
            ],
            cons: ["Requires network", "Metadata sent to OpenAI", "Less privacy"],
            footer: "Sends: file names, commit messages, technology names",
        },
        AnalysisMode::Offline => PanelCopy {
            pros: [
                "All processing local",
                "Complete privacy",
                "No data transmitted",
            ],
            cons: [
                "Pattern-based analysis",
                "Less detailed insights",
                "Basic skill detection",
            ],
            footer: "All analysis happens on your machine. Zero external calls.",
        },
    }
}

/// Consent screen component
#[derive(Debug, Clone)]
pub struct ConsentScreen {
    selected: AnalysisMode,
}

impl ConsentScreen {
    /// Create a consent screen with `default_mode` preselected
    pub fn new(default_mode: AnalysisMode) -> Self {
        Self {
            selected: default_mode,
        }
    }

    /// Currently highlighted mode
    pub fn selected(&self) -> AnalysisMode {
        self.selected
    }

    /// Handle navigation input
    pub fn handle_action(&mut self, action: NavigationAction) -> Option<RouterEvent> {
        match action {
            NavigationAction::Left
            | NavigationAction::Right
            | NavigationAction::Next
            | NavigationAction::Previous => {
                self.selected = self.selected.toggled();
                None
            }
            NavigationAction::Select => Some(RouterEvent::ConfirmConsent {
                enhanced: self.selected.is_enhanced(),
            }),
            NavigationAction::Back => Some(RouterEvent::Cancel),
            _ => None,
        }
    }

    /// Render the consent screen
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .horizontal_margin(2)
            .split(rows[0]);

        self.render_panel(f, panels[0], AnalysisMode::Cloud, theme);
        self.render_panel(f, panels[1], AnalysisMode::Offline, theme);
        render_demo_banner(f, rows[1], theme);
    }

    fn render_panel(&self, f: &mut Frame, area: Rect, mode: AnalysisMode, theme: &Theme) {
        let selected = self.selected == mode;
        let copy = panel_copy(mode);

        let title_style = if selected {
            theme.heading()
        } else {
            theme.secondary().add_modifier(Modifier::BOLD)
        };

        let mut lines = vec![
            Line::from(Span::styled(mode.description(), title_style)),
            Line::from(""),
            Line::from(Span::styled("Pros:", theme.dim())),
        ];
        lines.extend(
            copy.pros
                .iter()
                .map(|p| Line::from(Span::styled(format!("  + {}", p), theme.success()))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Cons:", theme.dim())));
        lines.extend(
            copy.cons
                .iter()
                .map(|c| Line::from(Span::styled(format!("  - {}", c), theme.warning()))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "─────────────────────────",
            theme.dim(),
        )));
        lines.push(Line::from(Span::styled(copy.footer, theme.dim())));

        let (border_type, border_style, bg) = if selected {
            (BorderType::Double, theme.border_active(), theme.bg_medium)
        } else {
            (BorderType::Plain, theme.border_inactive(), theme.bg_dark)
        };

        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .border_style(border_style),
            )
            .style(Style::default().bg(bg));
        f.render_widget(panel, area);
    }
}
