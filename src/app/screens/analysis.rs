//! Analysis screen implementation
//!
//! Walks the simulated analysis steps on timers and hands control to the
//! resume once every step has finished. Takes no keyboard input.

use crate::anim::{Spinner, StepProgress, StepTick};
use crate::app::state::{NavigationAction, RouterEvent, WizardState};
use crate::app::theme::Theme;
use crate::app::timer::{TimerKind, TimerSet};
use crate::config::AnimationConfig;
use crate::models::AnalysisStep;
use crate::util::progress_bar;
use chrono::Local;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;
use tracing::debug;

/// Cells in the progress bar
pub const PROGRESS_BAR_WIDTH: usize = 50;
/// Log lines kept on screen
pub const LOG_TAIL: usize = 3;

/// Analysis screen component
#[derive(Debug)]
pub struct AnalysisScreen {
    progress: StepProgress,
    spinner: Spinner,
    spinner_interval: Duration,
}

impl AnalysisScreen {
    /// Create the screen over `steps`
    pub fn new(steps: Vec<AnalysisStep>, timing: &AnimationConfig) -> Self {
        Self {
            progress: StepProgress::new(steps, timing.step_timing()),
            spinner: Spinner::new(),
            spinner_interval: timing.spinner,
        }
    }

    /// Step progress state
    pub fn progress(&self) -> &StepProgress {
        &self.progress
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// Log the first step and start the spinner and step timers
    pub fn mount<R: Rng + ?Sized>(&mut self, timers: &mut TimerSet, rng: &mut R) {
        self.progress.start(Local::now());
        timers.every(TimerKind::Spinner, self.spinner_interval);
        self.schedule_step(timers, rng);
    }

    fn schedule_step<R: Rng + ?Sized>(&self, timers: &mut TimerSet, rng: &mut R) {
        if let Some(delay) = self.progress.next_delay(rng) {
            debug!(step = self.progress.current(), ?delay, "Scheduling analysis step");
            timers.once(TimerKind::Step, delay);
        }
    }

    /// Advance the animation driven by `kind`
    pub fn on_timer<R: Rng + ?Sized>(
        &mut self,
        kind: TimerKind,
        timers: &mut TimerSet,
        rng: &mut R,
    ) -> Option<RouterEvent> {
        match kind {
            TimerKind::Spinner => {
                self.spinner.tick();
                None
            }
            TimerKind::Step => match self.progress.tick(Local::now()) {
                StepTick::Advanced(_) => {
                    self.schedule_step(timers, rng);
                    None
                }
                StepTick::Completed => {
                    timers.cancel_all();
                    Some(RouterEvent::AnalysisComplete)
                }
                StepTick::Idle => None,
            },
            _ => None,
        }
    }

    /// Keyboard input is ignored while analysing
    pub fn handle_action(&mut self, _action: NavigationAction) -> Option<RouterEvent> {
        None
    }

    /// Render the analysis screen
    pub fn render(&self, f: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
        let steps = self.progress.steps();
        let checklist_height = steps.len() as u16;
        let content_height = 1 + 1 + checklist_height + 2 + 2 + 2 + (LOG_TAIL as u16 + 2);
        let top = area.height.saturating_sub(content_height) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(top),
                Constraint::Length(2),                     // Mode
                Constraint::Length(checklist_height),      // Checklist
                Constraint::Length(2),                     // Gap
                Constraint::Length(2),                     // Progress bar
                Constraint::Length(2),                     // Gap
                Constraint::Length(LOG_TAIL as u16 + 2),   // Log
                Constraint::Min(0),
            ])
            .split(area);

        let mode = if state.use_enhanced_analysis {
            "Cloud analysis enabled"
        } else {
            "Offline analysis"
        };
        f.render_widget(
            Paragraph::new(Span::styled(mode, theme.dim())).alignment(Alignment::Center),
            chunks[1],
        );

        self.render_checklist(f, chunks[2], theme);
        self.render_progress(f, chunks[4], theme);
        self.render_log(f, chunks[6], theme);
    }

    fn render_checklist(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let current = self.progress.current();
        let lines: Vec<Line> = self
            .progress
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let (marker, style) = if i < current {
                    (Span::styled("✓", theme.success()), theme.success())
                } else if i == current {
                    (
                        Span::styled(self.spinner.frame(), Style::default().fg(theme.cyan)),
                        Style::default().fg(theme.cyan),
                    )
                } else {
                    (Span::styled("○", theme.dim()), theme.dim())
                };
                Line::from(vec![marker, Span::raw("  "), Span::styled(step.label.clone(), style)])
            })
            .collect();

        let width = self
            .progress
            .steps()
            .iter()
            .map(|s| s.label.chars().count() as u16 + 3)
            .max()
            .unwrap_or(0)
            .min(area.width);
        let centered = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            width,
            ..area
        };
        f.render_widget(Paragraph::new(lines), centered);
    }

    fn render_progress(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let percent = self.progress.percent();
        let lines = vec![
            Line::from(Span::styled(
                progress_bar(percent, PROGRESS_BAR_WIDTH),
                Style::default().fg(theme.gold),
            )),
            Line::from(vec![
                Span::styled(
                    format!("{}%", percent),
                    theme.text().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" complete", theme.dim()),
            ]),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_log(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let log = self.progress.log();
        let tail = &log[log.len().saturating_sub(LOG_TAIL)..];
        let lines: Vec<Line> = tail
            .iter()
            .map(|entry| Line::from(Span::styled(entry.render(), theme.dim())))
            .collect();

        let width = (PROGRESS_BAR_WIDTH as u16 + 4).min(area.width);
        let centered = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            width,
            ..area
        };
        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_inactive())
                .title(Span::styled(" Log ", theme.dim())),
        );
        f.render_widget(panel, centered);
    }
}
