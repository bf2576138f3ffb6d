//! TUI screen components
//!
//! One module per wizard screen plus the shared chrome. [`ActiveScreen`]
//! holds whichever screen is mounted and forwards input, timer ticks and
//! rendering to it.

pub mod analysis;
pub mod bars;
pub mod consent;
pub mod file_upload;
pub mod landing;
pub mod project_list;
pub mod resume;

pub use analysis::AnalysisScreen;
pub use consent::ConsentScreen;
pub use file_upload::FileUploadScreen;
pub use landing::LandingScreen;
pub use project_list::ProjectListScreen;
pub use resume::ResumeScreen;

use crate::app::state::{NavigationAction, RouterEvent, Screen, WizardState};
use crate::app::theme::Theme;
use crate::app::timer::{TimerKind, TimerSet};
use crate::config::DemoConfig;
use crate::models::Catalog;
use rand::Rng;
use ratatui::{layout::Rect, Frame};

/// The mounted screen
#[derive(Debug)]
pub enum ActiveScreen {
    Landing(LandingScreen),
    Consent(ConsentScreen),
    FileUpload(FileUploadScreen),
    ProjectList(ProjectListScreen),
    Analysis(AnalysisScreen),
    ResumePreview(ResumeScreen),
}

impl ActiveScreen {
    /// Build a fresh screen for `screen`
    pub fn build<R: Rng + ?Sized>(
        screen: Screen,
        state: &WizardState,
        catalog: &Catalog,
        config: &DemoConfig,
        rng: &mut R,
    ) -> Self {
        match screen {
            Screen::Landing => ActiveScreen::Landing(LandingScreen::new(
                catalog.random_subtitle(rng),
                &config.animation,
            )),
            Screen::Consent => ActiveScreen::Consent(ConsentScreen::new(config.wizard.default_mode)),
            Screen::FileUpload => {
                let initial = if state.selected_file_path.is_empty() {
                    config.wizard.initial_path.as_str()
                } else {
                    state.selected_file_path.as_str()
                };
                ActiveScreen::FileUpload(FileUploadScreen::new(
                    catalog.file_tree().clone(),
                    config.wizard.archive_extensions.clone(),
                    initial,
                ))
            }
            Screen::ProjectList => ActiveScreen::ProjectList(ProjectListScreen::new(
                catalog.projects().to_vec(),
                state.selected_project_index,
            )),
            Screen::Analysis => ActiveScreen::Analysis(AnalysisScreen::new(
                catalog.analysis_steps().to_vec(),
                &config.animation,
            )),
            Screen::ResumePreview => ActiveScreen::ResumePreview(ResumeScreen::new(catalog.resume())),
        }
    }

    /// Which screen this is
    pub fn kind(&self) -> Screen {
        match self {
            ActiveScreen::Landing(_) => Screen::Landing,
            ActiveScreen::Consent(_) => Screen::Consent,
            ActiveScreen::FileUpload(_) => Screen::FileUpload,
            ActiveScreen::ProjectList(_) => Screen::ProjectList,
            ActiveScreen::Analysis(_) => Screen::Analysis,
            ActiveScreen::ResumePreview(_) => Screen::ResumePreview,
        }
    }

    /// Start the screen's timers
    pub fn mount<R: Rng + ?Sized>(&mut self, timers: &mut TimerSet, rng: &mut R) {
        match self {
            ActiveScreen::Landing(screen) => screen.mount(timers),
            ActiveScreen::Analysis(screen) => screen.mount(timers, rng),
            _ => {}
        }
    }

    /// Forward a timer tick
    pub fn on_timer<R: Rng + ?Sized>(
        &mut self,
        kind: TimerKind,
        timers: &mut TimerSet,
        rng: &mut R,
    ) -> Option<RouterEvent> {
        match self {
            ActiveScreen::Landing(screen) => screen.on_timer(kind, timers),
            ActiveScreen::Analysis(screen) => screen.on_timer(kind, timers, rng),
            _ => None,
        }
    }

    /// Forward a navigation action
    pub fn handle_action(
        &mut self,
        action: NavigationAction,
        state: &WizardState,
    ) -> Option<RouterEvent> {
        match self {
            ActiveScreen::Landing(screen) => screen.handle_action(action),
            ActiveScreen::Consent(screen) => screen.handle_action(action),
            ActiveScreen::FileUpload(screen) => screen.handle_action(action),
            ActiveScreen::ProjectList(screen) => screen.handle_action(action, state),
            ActiveScreen::Analysis(screen) => screen.handle_action(action),
            ActiveScreen::ResumePreview(screen) => screen.handle_action(action),
        }
    }

    /// Tell the screen its request was refused
    pub fn on_rejected(&mut self, reason: String) {
        if let ActiveScreen::FileUpload(screen) = self {
            screen.on_rejected(reason);
        }
    }

    /// Render the screen body into `area`
    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
        match self {
            ActiveScreen::Landing(screen) => screen.render(f, area, theme),
            ActiveScreen::Consent(screen) => screen.render(f, area, theme),
            ActiveScreen::FileUpload(screen) => screen.render(f, area, theme),
            ActiveScreen::ProjectList(screen) => screen.render(f, area, state, theme),
            ActiveScreen::Analysis(screen) => screen.render(f, area, state, theme),
            ActiveScreen::ResumePreview(screen) => screen.render(f, area, theme),
        }
    }
}
