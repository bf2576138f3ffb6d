//! Resume preview screen implementation
//!
//! Scrollable generated resume: summary, skills by level, notable projects
//! and totals.

use crate::app::state::{NavigationAction, RouterEvent};
use crate::app::theme::Theme;
use crate::models::{ResumeData, SkillLevel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Projects listed under "Notable Projects"
pub const NOTABLE_PROJECTS: usize = 5;

/// Resume preview screen component
#[derive(Debug)]
pub struct ResumeScreen {
    resume: ResumeData,
    scroll: u16,
    max_scroll: u16,
}

impl ResumeScreen {
    pub fn new(resume: ResumeData) -> Self {
        let mut screen = Self {
            resume,
            scroll: 0,
            max_scroll: 0,
        };
        screen.max_scroll = screen.body_lines(&Theme::default()).len().saturating_sub(1) as u16;
        screen
    }

    /// Lines scrolled off the top
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Handle navigation input
    pub fn handle_action(&mut self, action: NavigationAction) -> Option<RouterEvent> {
        match action {
            NavigationAction::Up | NavigationAction::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            NavigationAction::Down | NavigationAction::Char('j') => {
                self.scroll = (self.scroll + 1).min(self.max_scroll);
                None
            }
            NavigationAction::Char('r') | NavigationAction::Char('R') => {
                Some(RouterEvent::Restart)
            }
            NavigationAction::Back => Some(RouterEvent::Cancel),
            _ => None,
        }
    }

    /// Render the resume preview screen
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.render_header(f, rows[0], theme);

        let body = Paragraph::new(self.body_lines(theme))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.border_active()),
            );

        let inner = Rect {
            x: area.x + 2.min(rows[1].width),
            width: rows[1].width.saturating_sub(4),
            ..rows[1]
        };
        f.render_widget(body, inner);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .horizontal_margin(2)
            .vertical_margin(1)
            .split(area);

        let background = Style::default().bg(theme.bg_medium);
        f.render_widget(Block::default().style(background), area);
        f.render_widget(
            Paragraph::new(Span::styled("Resume Generated!", theme.heading())).style(background),
            halves[0],
        );
        f.render_widget(
            Paragraph::new(Span::styled("✓ Analysis complete", theme.success()))
                .alignment(Alignment::Right)
                .style(background),
            halves[1],
        );
    }

    fn body_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let resume = &self.resume;
        let mut lines = vec![
            Line::from(Span::styled("Professional Summary", theme.heading())),
            Line::from(Span::styled(resume.summary.clone(), theme.secondary())),
            Line::from(""),
            Line::from(Span::styled("Technical Skills", theme.section())),
        ];

        for level in SkillLevel::descending() {
            let skills = resume.skills_at(level);
            if skills.is_empty() {
                continue;
            }
            let label = format!("{}:", level.label());
            let mut spans = vec![Span::styled(format!("{:<14}", label), theme.dim())];
            for (i, skill) in skills.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!(" {} ", skill.name), theme.skill_chip(level)));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Notable Projects", theme.section())));
        for project in resume.notable_projects(NOTABLE_PROJECTS) {
            lines.push(Line::from(vec![
                Span::styled(project.name.clone(), theme.heading()),
                Span::styled(format!("  {}", project.list_summary()), theme.dim()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", project.description),
                theme.secondary(),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", project.technologies.join(" • ")),
                Style::default().fg(theme.cyan_dark),
            )));
            lines.push(Line::from(""));
        }

        let totals = [
            ("Projects", resume.projects.len().to_string()),
            ("Skills", resume.skills.len().to_string()),
            ("Total Commits", resume.total_commits().to_string()),
            ("Languages", resume.language_count().to_string()),
        ];
        let mut spans = Vec::new();
        for (i, (label, value)) in totals.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("   │   ", theme.dim()));
            }
            spans.push(Span::styled(value, theme.heading()));
            spans.push(Span::styled(format!(" {}", label), theme.dim()));
        }
        lines.push(Line::from(spans));
        lines
    }
}
