//! Project list screen implementation
//!
//! Projects detected in the chosen archive, with a details panel for the
//! highlighted one.

use crate::app::state::{NavigationAction, RouterEvent, WizardState};
use crate::app::theme::Theme;
use crate::models::Project;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Project list screen component
#[derive(Debug)]
pub struct ProjectListScreen {
    projects: Vec<Project>,
    list_state: ListState,
}

impl ProjectListScreen {
    /// Create the list with `selected` highlighted
    pub fn new(projects: Vec<Project>, selected: usize) -> Self {
        let mut list_state = ListState::default();
        if !projects.is_empty() {
            list_state.select(Some(selected.min(projects.len() - 1)));
        }
        Self {
            projects,
            list_state,
        }
    }

    /// Keep the highlight in sync with the wizard state
    pub fn sync(&mut self, state: &WizardState) {
        if !self.projects.is_empty() {
            self.list_state
                .select(Some(state.selected_project_index.min(self.projects.len() - 1)));
        }
    }

    /// Handle navigation input
    pub fn handle_action(
        &mut self,
        action: NavigationAction,
        state: &WizardState,
    ) -> Option<RouterEvent> {
        let len = self.projects.len();
        let current = state.selected_project_index;
        match action {
            NavigationAction::Up | NavigationAction::Char('k') if len > 0 => {
                let previous = if current == 0 { len - 1 } else { current - 1 };
                Some(RouterEvent::SelectProject(previous))
            }
            NavigationAction::Down | NavigationAction::Char('j') if len > 0 => {
                Some(RouterEvent::SelectProject((current + 1) % len))
            }
            NavigationAction::Select => Some(RouterEvent::Confirm),
            NavigationAction::Back => Some(RouterEvent::Cancel),
            _ => None,
        }
    }

    /// Render the project list screen
    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
        self.sync(state);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let source = Paragraph::new(Line::from(vec![
            Span::styled("  Archive: ", theme.dim()),
            Span::styled(state.selected_file_path.clone(), theme.secondary()),
            Span::styled(format!("  ({} projects)", self.projects.len()), theme.dim()),
        ]));
        f.render_widget(source, rows[0]);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .horizontal_margin(2)
            .split(rows[1]);

        self.render_list(f, panels[0], theme);
        self.render_details(f, panels[1], theme);
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .projects
            .iter()
            .map(|project| {
                ListItem::new(vec![
                    Line::from(Span::styled(project.name.clone(), theme.text())),
                    Line::from(Span::styled(format!("  {}", project.list_summary()), theme.dim())),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_active())
                    .title(Span::styled(" Projects ", theme.heading())),
            )
            .highlight_style(theme.highlight())
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_details(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_inactive())
            .title(Span::styled(" Details ", theme.section()));

        let Some(project) = self
            .list_state
            .selected()
            .and_then(|i| self.projects.get(i))
        else {
            f.render_widget(Paragraph::new("No projects detected").block(block), area);
            return;
        };

        let field = |name: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<10}", name), theme.dim()),
                Span::styled(value, theme.text()),
            ])
        };

        let lines = vec![
            Line::from(Span::styled(project.name.clone(), theme.heading())),
            Line::from(""),
            Line::from(Span::styled(project.description.clone(), theme.secondary())),
            Line::from(""),
            field("Language", project.language.clone()),
            field("Commits", project.commits.to_string()),
            field("Files", project.files.to_string()),
            field("Updated", project.last_updated.format("%b %-d, %Y").to_string()),
            Line::from(""),
            Line::from(Span::styled("Technologies", theme.section())),
            Line::from(Span::styled(
                project.technologies.join(" • "),
                Style::default().fg(theme.cyan),
            )),
        ];

        let details = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block);
        f.render_widget(details, area);
    }
}
