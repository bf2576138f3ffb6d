//! Shared screen chrome
//!
//! Top bar (step | title, description), bottom key-hint bar, the demo-mode
//! banner and the notice shown when the terminal is too small.

use crate::app::state::Screen;
use crate::app::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of the top bar
pub const TOP_BAR_HEIGHT: u16 = 4;
/// Height of the bottom bar
pub const BOTTOM_BAR_HEIGHT: u16 = 2;

/// Top bar contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One entry of the bottom bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

const fn hint(key: &'static str, label: &'static str) -> KeyHint {
    KeyHint { key, label }
}

/// Top bar for `screen`; the landing and resume screens draw their own
pub fn header_for(screen: Screen) -> Option<Header> {
    let (step, title, description) = match screen {
        Screen::Landing | Screen::ResumePreview => return None,
        Screen::Consent => (
            "Privacy",
            "Settings",
            "Choose how your project metadata is analyzed.",
        ),
        Screen::FileUpload => (
            "Step 1",
            "Select Projects",
            "Browse for your project zip file",
        ),
        Screen::ProjectList => (
            "Step 2",
            "Review Detected Projects",
            "Select a project to see details.",
        ),
        Screen::Analysis => (
            "Step 3",
            "Analysis",
            "Mining artifacts and generating insights...",
        ),
    };
    Some(Header {
        step,
        title,
        description,
    })
}

/// Key hints for `screen`
pub fn hints_for(screen: Screen) -> &'static [KeyHint] {
    const LANDING: &[KeyHint] = &[hint("Enter", "Get Started"), hint("Esc", "Exit")];
    const CONSENT: &[KeyHint] = &[
        hint("←/→", "Navigate"),
        hint("Enter", "Confirm"),
        hint("Esc", "Back"),
    ];
    const FILE_UPLOAD: &[KeyHint] = &[
        hint("Tab", "Suggest"),
        hint("Enter", "Continue"),
        hint("Esc", "Back"),
    ];
    const PROJECT_LIST: &[KeyHint] = &[
        hint("↑/↓", "Navigate"),
        hint("Enter", "Analyze"),
        hint("Esc", "Back"),
    ];
    const ANALYSIS: &[KeyHint] = &[hint("", "Processing...")];
    const RESUME: &[KeyHint] = &[
        hint("↑/↓", "Scroll"),
        hint("r", "Restart"),
        hint("Esc", "Exit"),
    ];

    match screen {
        Screen::Landing => LANDING,
        Screen::Consent => CONSENT,
        Screen::FileUpload => FILE_UPLOAD,
        Screen::ProjectList => PROJECT_LIST,
        Screen::Analysis => ANALYSIS,
        Screen::ResumePreview => RESUME,
    }
}

/// Split `area` into (top bar, content, bottom bar)
pub fn frame_layout(area: Rect, with_header: bool) -> (Option<Rect>, Rect, Rect) {
    let header_height = if with_header { TOP_BAR_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(BOTTOM_BAR_HEIGHT),
        ])
        .split(area);

    let header = with_header.then_some(chunks[0]);
    (header, chunks[1], chunks[2])
}

/// Render the top bar
pub fn render_top_bar(f: &mut Frame, area: Rect, header: &Header, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(header.step, theme.heading()),
            Span::styled(" | ", theme.dim()),
            Span::styled(
                header.title,
                theme.text().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(header.description, theme.dim())),
    ];

    let bar = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.bg_dark));
    f.render_widget(bar, area);
}

/// Render the bottom key-hint bar
pub fn render_bottom_bar(f: &mut Frame, area: Rect, hints: &[KeyHint], theme: &Theme) {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("    "));
        }
        if !hint.key.is_empty() {
            spans.push(Span::styled(hint.key, theme.key()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(hint.label, theme.dim()));
    }

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme.border_inactive()),
        )
        .style(Style::default().bg(theme.bg_dark));
    f.render_widget(bar, area);
}

/// Render the red-bordered "Demo Mode" banner
pub fn render_demo_banner(f: &mut Frame, area: Rect, theme: &Theme) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled("Demo Mode:", theme.key()),
        Span::styled(" Press ", theme.dim()),
        Span::styled("Enter", Style::default().fg(theme.cyan)),
        Span::styled(" to continue", theme.dim()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.error()),
    );
    f.render_widget(banner, area);
}

/// Render the notice shown below the minimum terminal size
pub fn render_too_small(f: &mut Frame, area: Rect, min_width: u16, min_height: u16, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled("Terminal too small", theme.heading())),
        Line::from(Span::styled(
            format!("Need at least {}x{}", min_width, min_height),
            theme.secondary(),
        )),
        Line::from(Span::styled(
            format!("Current size {}x{}", area.width, area.height),
            theme.dim(),
        )),
    ];

    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let inner = Rect {
        y: area.y + top,
        height: area.height.saturating_sub(top),
        ..area
    };
    let notice = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(notice, inner);
}
