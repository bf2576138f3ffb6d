//! File upload screen implementation
//!
//! An editable path field over a mock file tree. The browser panel lists the
//! directory of the typed path and the details panel describes the entry it
//! names. Nothing on disk is ever touched.

use crate::app::state::{NavigationAction, RouterEvent};
use crate::app::theme::Theme;
use crate::models::FileNode;
use crate::util::path::{file_name, parent_dir};
use crate::util::{format_size, is_archive_path};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, List, ListItem, ListState, Paragraph, Wrap,
    },
    Frame,
};

use super::bars::render_demo_banner;

/// File upload screen component
#[derive(Debug)]
pub struct FileUploadScreen {
    input: String,
    tree: FileNode,
    extensions: Vec<String>,
    suggestions: Vec<String>,
    suggestion: Option<usize>,
    message: Option<String>,
}

impl FileUploadScreen {
    /// Create the picker over `tree`, prefilled with `initial_path`
    pub fn new(tree: FileNode, extensions: Vec<String>, initial_path: &str) -> Self {
        let suggestions = tree.archive_paths(&extensions);
        let suggestion = suggestions.iter().position(|p| p == initial_path);
        Self {
            input: initial_path.to_string(),
            tree,
            extensions,
            suggestions,
            suggestion,
            message: None,
        }
    }

    /// Current contents of the path field
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Archive paths Tab cycles through
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Rejection message from the last submit, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the typed path would be accepted
    pub fn is_valid(&self) -> bool {
        is_archive_path(&self.input, &self.extensions)
    }

    /// Show why the last submit was refused
    pub fn on_rejected(&mut self, reason: String) {
        self.message = Some(reason);
    }

    fn edited(&mut self) {
        self.suggestion = None;
        self.message = None;
    }

    fn cycle_suggestion(&mut self, forward: bool) {
        if self.suggestions.is_empty() {
            return;
        }
        let len = self.suggestions.len();
        let next = match (self.suggestion, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.input = self.suggestions[next].clone();
        self.suggestion = Some(next);
        self.message = None;
    }

    /// Handle navigation input
    pub fn handle_action(&mut self, action: NavigationAction) -> Option<RouterEvent> {
        match action {
            NavigationAction::Char(c) => {
                self.input.push(c);
                self.edited();
                None
            }
            NavigationAction::Erase => {
                self.input.pop();
                self.edited();
                None
            }
            NavigationAction::Next | NavigationAction::Down => {
                self.cycle_suggestion(true);
                None
            }
            NavigationAction::Previous | NavigationAction::Up => {
                self.cycle_suggestion(false);
                None
            }
            NavigationAction::Select => Some(RouterEvent::SubmitPath(self.input.clone())),
            NavigationAction::Back => Some(RouterEvent::Cancel),
            _ => None,
        }
    }

    /// Directory shown in the browser panel
    fn browsed_dir(&self) -> &str {
        let trimmed = self.input.trim();
        if trimmed.ends_with('/') {
            trimmed
        } else {
            parent_dir(trimmed)
        }
    }

    /// Entry named by the typed path
    pub fn selected_node(&self) -> Option<&FileNode> {
        let path = self.input.trim();
        if path.is_empty() || path.ends_with('/') {
            return None;
        }
        self.tree.lookup(path)
    }

    /// Render the file upload screen
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // Browser and details
                Constraint::Length(4), // Path field
                Constraint::Length(3), // Demo banner
            ])
            .split(area);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .horizontal_margin(2)
            .split(rows[0]);

        self.render_browser(f, panels[0], theme);
        self.render_details(f, panels[1], theme);
        self.render_path_field(f, rows[1], theme);
        render_demo_banner(f, rows[2], theme);
    }

    fn render_browser(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dir = self.browsed_dir();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_active())
            .title(Span::styled(" File Browser ", theme.heading()));

        let Some(node) = self.tree.lookup(dir).filter(|n| n.is_dir()) else {
            let empty = Paragraph::new(vec![
                Line::from(Span::styled(dir.to_string(), theme.secondary())),
                Line::from(Span::styled("(no such directory)", theme.dim())),
            ])
            .block(block);
            f.render_widget(empty, area);
            return;
        };

        let current = file_name(self.input.trim());
        let mut list_state = ListState::default();
        let items: Vec<ListItem> = node
            .children
            .iter()
            .enumerate()
            .map(|(i, child)| {
                if !child.is_dir() && child.name == current {
                    list_state.select(Some(i));
                }
                let line = if child.is_dir() {
                    Line::from(Span::styled(
                        format!("▸ {}/", child.name),
                        Style::default().fg(theme.cyan),
                    ))
                } else if is_archive_path(&child.name, &self.extensions) {
                    Line::from(vec![
                        Span::styled(format!("  {}", child.name), Style::default().fg(theme.gold)),
                        Span::styled(
                            child.size.map(|s| format!("  {}", format_size(s))).unwrap_or_default(),
                            theme.dim(),
                        ),
                    ])
                } else {
                    Line::from(Span::styled(format!("  {}", child.name), theme.dim()))
                };
                ListItem::new(line)
            })
            .collect();

        let path_line = if dir.is_empty() { "/" } else { dir };
        let list = List::new(items)
            .block(
                block.title(
                    Title::from(Span::styled(format!(" {} ", path_line), theme.dim()))
                        .position(Position::Bottom),
                ),
            )
            .highlight_style(theme.highlight())
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_details(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_inactive())
            .title(Span::styled(" Details ", theme.section()));

        let label = |name: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{}: ", name), theme.dim()),
                Span::styled(value, theme.text()),
            ])
        };

        let mut lines = Vec::new();
        match self.selected_node() {
            Some(node) if !node.is_dir() => {
                lines.push(label("Name", node.name.clone()));
                if let Some(size) = node.size {
                    lines.push(label("Size", format_size(size)));
                }
                let ext = node
                    .name
                    .rsplit_once('.')
                    .map(|(_, ext)| ext.to_uppercase())
                    .unwrap_or_default();
                lines.push(label("Type", format!("{} Archive", ext)));

                if let Some(contents) = &node.contents {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled("Contains:", theme.secondary())));
                    lines.push(Line::from(Span::styled(
                        format!("  {} repositories", contents.repositories),
                        theme.text(),
                    )));
                    lines.push(Line::from(Span::styled(
                        format!("  {} commits", contents.commits),
                        theme.text(),
                    )));
                    if !contents.languages.is_empty() {
                        lines.push(Line::from(Span::styled(
                            format!("  {}", contents.languages.join(", ")),
                            theme.text(),
                        )));
                    }
                }

                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled("Press ", theme.dim()),
                    Span::styled("Enter", Style::default().fg(theme.cyan)),
                    Span::styled(" to select", theme.dim()),
                ]));
            }
            Some(node) => {
                lines.push(label("Directory", node.name.clone()));
                lines.push(label("Entries", node.children.len().to_string()));
            }
            None if self.is_valid() => {
                lines.push(label("Name", file_name(self.input.trim()).to_string()));
                lines.push(Line::from(Span::styled(
                    "Not in the demo tree; it will be used as typed.",
                    theme.dim(),
                )));
            }
            None => {
                lines.push(Line::from(Span::styled("No archive selected", theme.dim())));
            }
        }

        let details = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block);
        f.render_widget(details, area);
    }

    fn render_path_field(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let indicator = if let Some(message) = &self.message {
            Span::styled(format!("✗ {}", message), theme.error())
        } else if self.is_valid() {
            Span::styled("✓ Valid archive", theme.success())
        } else {
            Span::styled(
                format!("✗ Expected a .{} file", self.extensions.join(" / .")),
                theme.error(),
            )
        };

        let field = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(self.input.clone(), theme.text()),
                Span::styled("█", Style::default().fg(theme.gold).add_modifier(Modifier::SLOW_BLINK)),
            ]),
            Line::from(indicator),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_active())
                .title(Span::styled(" Path ", theme.heading())),
        );

        let inner = Rect {
            x: area.x + 2.min(area.width),
            width: area.width.saturating_sub(4),
            ..area
        };
        f.render_widget(field, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::buffer_text;
    use crate::models::Catalog;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(initial: &str) -> FileUploadScreen {
        let catalog = Catalog::embedded().unwrap();
        FileUploadScreen::new(
            catalog.file_tree().clone(),
            vec!["zip".to_string()],
            initial,
        )
    }

    #[test]
    fn test_typing_and_erasing() {
        let mut screen = screen("");
        assert!(!screen.is_valid());

        for c in "/tmp/x.zip".chars() {
            assert_eq!(screen.handle_action(NavigationAction::Char(c)), None);
        }
        assert_eq!(screen.input(), "/tmp/x.zip");
        assert!(screen.is_valid());

        screen.handle_action(NavigationAction::Erase);
        assert_eq!(screen.input(), "/tmp/x.zi");
        assert!(!screen.is_valid());
    }

    #[test]
    fn test_submit_sends_typed_path() {
        let mut screen = screen("notes.txt");
        assert_eq!(
            screen.handle_action(NavigationAction::Select),
            Some(RouterEvent::SubmitPath("notes.txt".to_string()))
        );
        assert_eq!(
            screen.handle_action(NavigationAction::Back),
            Some(RouterEvent::Cancel)
        );
    }

    #[test]
    fn test_tab_cycles_archive_suggestions() {
        let mut screen = screen("");
        let suggestions = screen.suggestions().to_vec();
        assert_eq!(suggestions.len(), 4);

        screen.handle_action(NavigationAction::Next);
        assert_eq!(screen.input(), suggestions[0]);
        screen.handle_action(NavigationAction::Next);
        assert_eq!(screen.input(), suggestions[1]);
        screen.handle_action(NavigationAction::Previous);
        assert_eq!(screen.input(), suggestions[0]);
        screen.handle_action(NavigationAction::Previous);
        assert_eq!(screen.input(), suggestions[3]);
    }

    #[test]
    fn test_rejection_message_clears_on_edit() {
        let mut screen = screen("notes.txt");
        screen.on_rejected("Not an archive".to_string());
        assert_eq!(screen.message(), Some("Not an archive"));
        screen.handle_action(NavigationAction::Erase);
        assert_eq!(screen.message(), None);
    }

    #[test]
    fn test_selected_node_from_tree() {
        let screen = screen("/Users/demo/projects/capstone-project.zip");
        let node = screen.selected_node().unwrap();
        assert_eq!(node.size, Some(12_000_000));
        assert!(node.contents.is_some());

        let screen = self::screen("/tmp/x.zip");
        assert!(screen.selected_node().is_none());
        assert!(screen.is_valid());
    }

    #[test]
    fn test_render_details() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let screen = screen("/Users/demo/projects/capstone-project.zip");
        let theme = Theme::new();

        terminal
            .draw(|f| screen.render(f, f.size(), &theme))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("File Browser"));
        assert!(text.contains("personal-site.zip"));
        assert!(text.contains("12 MB"));
        assert!(text.contains("ZIP Archive"));
        assert!(text.contains("Valid archive"));
    }
}
