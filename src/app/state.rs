//! Wizard state management
//!
//! Holds the screen router, the cross-screen wizard state and the mapping
//! from keyboard events to navigation actions. Screens never mutate the
//! state themselves: they hand a [`RouterEvent`] back and the router decides.

use crate::util::path::is_archive_path;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Wizard screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Animated title and "Get Started"
    #[default]
    Landing,
    /// Cloud vs offline analysis choice
    Consent,
    /// Archive picker
    FileUpload,
    /// Detected projects
    ProjectList,
    /// Simulated analysis run
    Analysis,
    /// Generated resume
    ResumePreview,
}

impl Screen {
    /// Every screen in wizard order
    pub fn all() -> [Screen; 6] {
        [
            Screen::Landing,
            Screen::Consent,
            Screen::FileUpload,
            Screen::ProjectList,
            Screen::Analysis,
            Screen::ResumePreview,
        ]
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Consent => "consent",
            Screen::FileUpload => "file-upload",
            Screen::ProjectList => "project-list",
            Screen::Analysis => "analysis",
            Screen::ResumePreview => "resume-preview",
        }
    }
}

/// State shared across screens
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    pub current_screen: Screen,
    /// Archive chosen on the picker, empty until one is accepted
    pub selected_file_path: String,
    /// Whether cloud analysis was chosen on the consent screen
    pub use_enhanced_analysis: bool,
    /// Highlighted project on the project list
    pub selected_project_index: usize,
}

/// Requests screens send to the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    /// Continue from the landing or project list
    Confirm,
    /// Accept the consent screen with the chosen mode
    ConfirmConsent { enhanced: bool },
    /// Submit a path on the picker
    SubmitPath(String),
    /// Move the project list highlight
    SelectProject(usize),
    /// Go back, or exit where there is nothing to go back to
    Cancel,
    /// Every analysis step has finished
    AnalysisComplete,
    /// Start over from the resume
    Restart,
    /// Terminate immediately
    Quit,
}

/// Result of applying a [`RouterEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Event does not apply to the current screen
    Stay,
    /// State changed without leaving the screen
    Updated,
    /// Input rejected; state unchanged
    Rejected(String),
    /// Moved to another screen
    Moved { from: Screen, to: Screen },
    /// The application should terminate
    Exit,
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Confirm (Enter)
    Select,
    /// Go back/cancel (Esc)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Delete the last typed character (Backspace)
    Erase,
    /// A literal character
    Char(char),
    /// Quit application (Ctrl+C, Ctrl+Q)
    Quit,
    /// No action
    None,
}

/// Screen router owning the wizard state
#[derive(Debug)]
pub struct Router {
    state: WizardState,
    archive_extensions: Vec<String>,
    project_count: usize,
    should_quit: bool,
}

impl Router {
    /// Create a router at the landing screen
    pub fn new(archive_extensions: Vec<String>, project_count: usize) -> Self {
        Self {
            state: WizardState::default(),
            archive_extensions,
            project_count,
            should_quit: false,
        }
    }

    /// Read-only view of the wizard state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Get the current screen
    pub fn current_screen(&self) -> Screen {
        self.state.current_screen
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn move_to(&mut self, to: Screen) -> Transition {
        let from = self.state.current_screen;
        self.state.current_screen = to;
        Transition::Moved { from, to }
    }

    fn exit(&mut self) -> Transition {
        self.should_quit = true;
        Transition::Exit
    }

    /// Apply an event according to the wizard transition table
    pub fn apply(&mut self, event: RouterEvent) -> Transition {
        if self.should_quit {
            return Transition::Exit;
        }
        if event == RouterEvent::Quit {
            return self.exit();
        }

        match (self.state.current_screen, event) {
            (Screen::Landing, RouterEvent::Confirm) => self.move_to(Screen::Consent),
            (Screen::Landing, RouterEvent::Cancel) => self.exit(),

            (Screen::Consent, RouterEvent::ConfirmConsent { enhanced }) => {
                self.state.use_enhanced_analysis = enhanced;
                self.move_to(Screen::FileUpload)
            }
            (Screen::Consent, RouterEvent::Cancel) => self.move_to(Screen::Landing),

            (Screen::FileUpload, RouterEvent::SubmitPath(path)) => {
                if is_archive_path(&path, &self.archive_extensions) {
                    self.state.selected_file_path = path;
                    self.move_to(Screen::ProjectList)
                } else if path.is_empty() {
                    Transition::Rejected("Enter the path of an archive".to_string())
                } else {
                    Transition::Rejected(format!(
                        "Not an archive: expected .{}",
                        self.archive_extensions.join(", .")
                    ))
                }
            }
            (Screen::FileUpload, RouterEvent::Cancel) => self.move_to(Screen::Consent),

            (Screen::ProjectList, RouterEvent::SelectProject(index)) => {
                let index = index.min(self.project_count.saturating_sub(1));
                if index == self.state.selected_project_index {
                    Transition::Stay
                } else {
                    self.state.selected_project_index = index;
                    Transition::Updated
                }
            }
            (Screen::ProjectList, RouterEvent::Confirm) => self.move_to(Screen::Analysis),
            (Screen::ProjectList, RouterEvent::Cancel) => self.move_to(Screen::FileUpload),

            (Screen::Analysis, RouterEvent::AnalysisComplete) => {
                self.move_to(Screen::ResumePreview)
            }

            (Screen::ResumePreview, RouterEvent::Restart) => {
                let from = self.state.current_screen;
                self.state = WizardState::default();
                Transition::Moved {
                    from,
                    to: Screen::Landing,
                }
            }
            (Screen::ResumePreview, RouterEvent::Cancel) => self.exit(),

            _ => Transition::Stay,
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('q') | KeyCode::Char('Q') => {
                    NavigationAction::Quit
                }
                _ => NavigationAction::None,
            };
        }

        match key.code {
            // Navigation keys
            KeyCode::Up => NavigationAction::Up,
            KeyCode::Down => NavigationAction::Down,
            KeyCode::Left => NavigationAction::Left,
            KeyCode::Right => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc => NavigationAction::Back,
            KeyCode::Backspace => NavigationAction::Erase,

            // Tab navigation
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                NavigationAction::Previous
            }
            KeyCode::Tab => NavigationAction::Next,
            KeyCode::BackTab => NavigationAction::Previous,

            KeyCode::Char(c) => NavigationAction::Char(c),

            _ => NavigationAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn router() -> Router {
        Router::new(vec!["zip".to_string()], 8)
    }

    fn router_at(screen: Screen) -> Router {
        let mut router = router();
        router.state.current_screen = screen;
        router
    }

    #[test]
    fn test_router_creation() {
        let router = router();
        assert_eq!(router.current_screen(), Screen::Landing);
        assert_eq!(*router.state(), WizardState::default());
        assert!(!router.should_quit());
    }

    #[test]
    fn test_forward_path() {
        let mut router = router();

        assert_eq!(
            router.apply(RouterEvent::Confirm),
            Transition::Moved {
                from: Screen::Landing,
                to: Screen::Consent
            }
        );
        router.apply(RouterEvent::ConfirmConsent { enhanced: true });
        assert_eq!(router.current_screen(), Screen::FileUpload);
        assert!(router.state().use_enhanced_analysis);

        router.apply(RouterEvent::SubmitPath("/tmp/x.zip".to_string()));
        assert_eq!(router.current_screen(), Screen::ProjectList);
        assert_eq!(router.state().selected_file_path, "/tmp/x.zip");

        router.apply(RouterEvent::Confirm);
        assert_eq!(router.current_screen(), Screen::Analysis);

        router.apply(RouterEvent::AnalysisComplete);
        assert_eq!(router.current_screen(), Screen::ResumePreview);
    }

    #[test]
    fn test_back_navigation() {
        let mut router = router_at(Screen::ProjectList);
        router.apply(RouterEvent::Cancel);
        assert_eq!(router.current_screen(), Screen::FileUpload);
        router.apply(RouterEvent::Cancel);
        assert_eq!(router.current_screen(), Screen::Consent);
        router.apply(RouterEvent::Cancel);
        assert_eq!(router.current_screen(), Screen::Landing);
        assert!(!router.should_quit());
    }

    #[test]
    fn test_cancel_exits_from_landing_and_resume() {
        let mut router = router();
        assert_eq!(router.apply(RouterEvent::Cancel), Transition::Exit);
        assert!(router.should_quit());

        let mut router = router_at(Screen::ResumePreview);
        assert_eq!(router.apply(RouterEvent::Cancel), Transition::Exit);
        assert!(router.should_quit());
    }

    #[test]
    fn test_quit_from_any_screen() {
        for screen in Screen::all() {
            let mut router = router_at(screen);
            assert_eq!(router.apply(RouterEvent::Quit), Transition::Exit);
            assert!(router.should_quit());
            assert_eq!(router.current_screen(), screen);
        }
    }

    #[test]
    fn test_events_after_quit_are_ignored() {
        let mut router = router();
        assert_eq!(router.apply(RouterEvent::Quit), Transition::Exit);
        assert_eq!(router.apply(RouterEvent::Confirm), Transition::Exit);
        assert_eq!(router.current_screen(), Screen::Landing);
    }

    #[test]
    fn test_invalid_path_is_rejected() {
        for path in ["notes.txt", "", "   ", "/tmp/archive", "x.zip.txt"] {
            let mut router = router_at(Screen::FileUpload);
            let before = router.state().clone();
            let result = router.apply(RouterEvent::SubmitPath(path.to_string()));
            assert!(matches!(result, Transition::Rejected(_)), "{:?}", path);
            assert_eq!(*router.state(), before);
        }
    }

    #[test]
    fn test_path_is_matched_as_typed() {
        let mut router = router_at(Screen::FileUpload);
        let result = router.apply(RouterEvent::SubmitPath("/tmp/.zip".to_string()));
        assert_eq!(
            result,
            Transition::Moved {
                from: Screen::FileUpload,
                to: Screen::ProjectList
            }
        );
        assert_eq!(router.state().selected_file_path, "/tmp/.zip");

        let mut router = router_at(Screen::FileUpload);
        let result = router.apply(RouterEvent::SubmitPath("  /tmp/x.zip  ".to_string()));
        assert!(matches!(result, Transition::Rejected(_)));
        assert_eq!(router.current_screen(), Screen::FileUpload);
        assert!(router.state().selected_file_path.is_empty());
    }

    #[test]
    fn test_restart_resets_state() {
        let mut router = router_at(Screen::ResumePreview);
        router.state.selected_file_path = "/tmp/x.zip".to_string();
        router.state.use_enhanced_analysis = true;
        router.state.selected_project_index = 3;

        router.apply(RouterEvent::Restart);
        assert_eq!(*router.state(), WizardState::default());
        assert_eq!(router.current_screen(), Screen::Landing);
    }

    #[test]
    fn test_project_selection_is_clamped() {
        let mut router = router_at(Screen::ProjectList);
        assert_eq!(router.apply(RouterEvent::SelectProject(2)), Transition::Updated);
        assert_eq!(router.state().selected_project_index, 2);
        assert_eq!(router.apply(RouterEvent::SelectProject(2)), Transition::Stay);
        router.apply(RouterEvent::SelectProject(99));
        assert_eq!(router.state().selected_project_index, 7);
    }

    #[test]
    fn test_inapplicable_events_leave_state_unchanged() {
        let events = [
            RouterEvent::Confirm,
            RouterEvent::ConfirmConsent { enhanced: true },
            RouterEvent::SubmitPath("/tmp/x.zip".to_string()),
            RouterEvent::SelectProject(1),
            RouterEvent::Cancel,
            RouterEvent::AnalysisComplete,
            RouterEvent::Restart,
        ];

        for screen in Screen::all() {
            for event in events.iter().cloned() {
                let mut router = router_at(screen);
                let before = router.state().clone();
                if router.apply(event.clone()) == Transition::Stay {
                    assert_eq!(*router.state(), before, "{:?} on {:?}", event, screen);
                    assert!(!router.should_quit());
                }
            }
        }

        let mut router = router_at(Screen::Analysis);
        for event in [RouterEvent::Confirm, RouterEvent::Cancel, RouterEvent::Restart] {
            assert_eq!(router.apply(event), Transition::Stay);
        }
        assert_eq!(router.current_screen(), Screen::Analysis);
    }

    #[test]
    fn test_key_to_navigation() {
        // Test quit keys
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );

        // Plain letters are text, not commands
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Char('q')
        );

        // Test navigation keys
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            NavigationAction::Right
        );

        // Test selection and back keys
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            NavigationAction::Erase
        );

        // Test tab navigation
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            NavigationAction::Next
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );

        // Unmapped
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)),
            NavigationAction::None
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            NavigationAction::None
        );
    }
}
