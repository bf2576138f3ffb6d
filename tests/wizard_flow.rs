//! End-to-end wizard navigation driven through key events

use artifact_miner::app::{Screen, Transition, Wizard, WizardState};
use artifact_miner::config::{AnalysisMode, DemoConfig};
use artifact_miner::models::Catalog;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn wizard_with(config: DemoConfig) -> Wizard {
    Wizard::with_rng(config, Catalog::embedded().unwrap(), SmallRng::seed_from_u64(42))
}

fn wizard() -> Wizard {
    wizard_with(DemoConfig::default())
}

fn press(wizard: &mut Wizard, code: KeyCode) -> Transition {
    wizard.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_path(wizard: &mut Wizard, path: &str) {
    for _ in 0..200 {
        press(wizard, KeyCode::Backspace);
    }
    for c in path.chars() {
        press(wizard, KeyCode::Char(c));
    }
}

/// Feed timer events until `done` holds; panics after `limit` events
async fn run_until(wizard: &mut Wizard, limit: usize, done: impl Fn(&Wizard) -> bool) {
    for _ in 0..limit {
        if done(wizard) {
            return;
        }
        let event = wizard.next_timer().await.unwrap();
        wizard.handle_timer(event);
    }
    assert!(done(wizard), "condition not reached after {} events", limit);
}

#[tokio::test(start_paused = true)]
async fn test_full_walkthrough() {
    let mut wizard = wizard();
    assert_eq!(wizard.current_screen(), Screen::Landing);

    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.current_screen(), Screen::Consent);

    // Offline is preselected
    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.current_screen(), Screen::FileUpload);
    assert!(!wizard.state().use_enhanced_analysis);

    type_path(&mut wizard, "/tmp/x.zip");
    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.current_screen(), Screen::ProjectList);
    assert_eq!(wizard.state().selected_file_path, "/tmp/x.zip");

    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.current_screen(), Screen::Analysis);

    // No input from here on
    run_until(&mut wizard, 10_000, |w| {
        w.current_screen() == Screen::ResumePreview
    })
    .await;
    assert_eq!(wizard.state().selected_file_path, "/tmp/x.zip");

    press(&mut wizard, KeyCode::Char('r'));
    assert_eq!(wizard.current_screen(), Screen::Landing);
    assert_eq!(*wizard.state(), WizardState::default());
}

#[tokio::test]
async fn test_non_archive_path_stays_on_picker() {
    let mut wizard = wizard();
    press(&mut wizard, KeyCode::Enter);
    press(&mut wizard, KeyCode::Enter);

    for path in ["notes.txt", "", "archive.tar", "  /tmp/x.zip  "] {
        type_path(&mut wizard, path);
        let transition = press(&mut wizard, KeyCode::Enter);
        assert!(matches!(transition, Transition::Rejected(_)), "{:?}", path);
        assert_eq!(wizard.current_screen(), Screen::FileUpload);
        assert!(wizard.state().selected_file_path.is_empty());
    }

    // Extension matching ignores case
    type_path(&mut wizard, "/tmp/BACKUP.ZIP");
    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.current_screen(), Screen::ProjectList);
}

#[tokio::test]
async fn test_cloud_mode_is_stored() {
    let mut wizard = wizard();
    press(&mut wizard, KeyCode::Enter);
    press(&mut wizard, KeyCode::Left);
    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.current_screen(), Screen::FileUpload);
    assert!(wizard.state().use_enhanced_analysis);
}

#[tokio::test]
async fn test_configured_default_mode() {
    let mut config = DemoConfig::default();
    config.wizard.default_mode = AnalysisMode::Cloud;
    let mut wizard = wizard_with(config);
    press(&mut wizard, KeyCode::Enter);
    press(&mut wizard, KeyCode::Enter);
    assert!(wizard.state().use_enhanced_analysis);
}

#[tokio::test]
async fn test_escape_walks_back_then_exits() {
    let mut wizard = wizard();
    press(&mut wizard, KeyCode::Enter);
    press(&mut wizard, KeyCode::Enter);
    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.current_screen(), Screen::ProjectList);

    press(&mut wizard, KeyCode::Esc);
    assert_eq!(wizard.current_screen(), Screen::FileUpload);
    press(&mut wizard, KeyCode::Esc);
    assert_eq!(wizard.current_screen(), Screen::Consent);
    press(&mut wizard, KeyCode::Esc);
    assert_eq!(wizard.current_screen(), Screen::Landing);
    assert!(!wizard.should_quit());

    assert_eq!(press(&mut wizard, KeyCode::Esc), Transition::Exit);
    assert!(wizard.should_quit());
}

#[tokio::test]
async fn test_picker_remembers_accepted_path() {
    let mut wizard = wizard();
    press(&mut wizard, KeyCode::Enter);
    press(&mut wizard, KeyCode::Enter);
    type_path(&mut wizard, "/tmp/x.zip");
    press(&mut wizard, KeyCode::Enter);
    press(&mut wizard, KeyCode::Esc);
    assert_eq!(wizard.current_screen(), Screen::FileUpload);

    // Resubmitting the prefilled field keeps the same path
    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.state().selected_file_path, "/tmp/x.zip");
}

#[tokio::test]
async fn test_project_selection_moves_highlight() {
    let mut wizard = wizard();
    press(&mut wizard, KeyCode::Enter);
    press(&mut wizard, KeyCode::Enter);
    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.current_screen(), Screen::ProjectList);

    assert_eq!(press(&mut wizard, KeyCode::Down), Transition::Updated);
    press(&mut wizard, KeyCode::Down);
    assert_eq!(wizard.state().selected_project_index, 2);
    press(&mut wizard, KeyCode::Up);
    assert_eq!(wizard.state().selected_project_index, 1);
    assert_eq!(wizard.current_screen(), Screen::ProjectList);
}

#[tokio::test]
async fn test_ctrl_q_quits_from_text_field() {
    let mut wizard = wizard();
    press(&mut wizard, KeyCode::Enter);
    press(&mut wizard, KeyCode::Enter);

    // Plain q is typed into the path
    press(&mut wizard, KeyCode::Char('q'));
    assert!(!wizard.should_quit());

    let quit = wizard.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
    assert_eq!(quit, Transition::Exit);
    assert!(wizard.should_quit());
}
