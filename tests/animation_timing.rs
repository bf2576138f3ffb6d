//! Timer behaviour across screen mounts, on virtual time

use artifact_miner::app::{ActiveScreen, Screen, Wizard};
use artifact_miner::config::DemoConfig;
use artifact_miner::models::Catalog;
use artifact_miner::APP_TITLE;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::time::Instant;

fn wizard() -> Wizard {
    Wizard::with_rng(
        DemoConfig::default(),
        Catalog::embedded().unwrap(),
        SmallRng::seed_from_u64(5),
    )
}

fn press(wizard: &mut Wizard, code: KeyCode) {
    wizard.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

async fn pump(wizard: &mut Wizard, events: usize) {
    for _ in 0..events {
        let event = wizard.next_timer().await.unwrap();
        wizard.handle_timer(event);
    }
}

fn cta_enabled(wizard: &Wizard) -> bool {
    matches!(wizard.screen(), ActiveScreen::Landing(landing) if landing.cta_enabled())
}

#[tokio::test(start_paused = true)]
async fn test_no_ticks_after_unmount_mid_typing() {
    let mut wizard = wizard();
    pump(&mut wizard, 5).await;
    assert!(!cta_enabled(&wizard));

    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.current_screen(), Screen::Consent);
    let delivered = wizard.stats().delivered;

    tokio::time::sleep(Duration::from_secs(10)).await;
    wizard.drain_timers();

    assert_eq!(wizard.stats().delivered, delivered);
    assert_eq!(wizard.current_screen(), Screen::Consent);
    assert!(wizard.timers().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_no_ticks_after_unmount_with_ripple_running() {
    let mut wizard = wizard();
    for _ in 0..10_000 {
        if cta_enabled(&wizard) {
            break;
        }
        pump(&mut wizard, 1).await;
    }
    assert!(cta_enabled(&wizard));
    pump(&mut wizard, 20).await;

    press(&mut wizard, KeyCode::Enter);
    let delivered = wizard.stats().delivered;

    tokio::time::sleep(Duration::from_secs(5)).await;
    wizard.drain_timers();
    assert_eq!(wizard.stats().delivered, delivered);
}

#[tokio::test(start_paused = true)]
async fn test_typewriter_finishes_on_title() {
    let mut wizard = wizard();
    let start = Instant::now();
    for _ in 0..10_000 {
        if cta_enabled(&wizard) {
            break;
        }
        pump(&mut wizard, 1).await;
    }

    let ActiveScreen::Landing(landing) = wizard.screen() else {
        panic!("expected landing");
    };
    assert!(landing.typewriter().is_complete());
    assert_eq!(landing.typewriter().visible_text(), APP_TITLE);

    // Subtitle typed, held, deleted, then the title typed and held
    let title = APP_TITLE.len() as u64;
    assert!(start.elapsed() >= Duration::from_millis(title * 80 + 700));
}

#[tokio::test(start_paused = true)]
async fn test_analysis_completes_exactly_once() {
    let mut wizard = wizard();
    for _ in 0..3 {
        press(&mut wizard, KeyCode::Enter);
    }
    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.current_screen(), Screen::Analysis);

    for _ in 0..10_000 {
        if wizard.current_screen() == Screen::ResumePreview {
            break;
        }
        pump(&mut wizard, 1).await;
    }
    assert_eq!(wizard.current_screen(), Screen::ResumePreview);
    let mount = wizard.mount_id();

    tokio::time::sleep(Duration::from_secs(10)).await;
    wizard.drain_timers();
    assert_eq!(wizard.current_screen(), Screen::ResumePreview);
    assert_eq!(wizard.mount_id(), mount);
}

#[tokio::test(start_paused = true)]
async fn test_quit_during_analysis_stops_timers() {
    let mut wizard = wizard();
    for _ in 0..4 {
        press(&mut wizard, KeyCode::Enter);
    }
    assert_eq!(wizard.current_screen(), Screen::Analysis);
    pump(&mut wizard, 10).await;

    wizard.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(wizard.should_quit());
    let delivered = wizard.stats().delivered;

    tokio::time::sleep(Duration::from_secs(10)).await;
    wizard.drain_timers();
    assert_eq!(wizard.stats().delivered, delivered);
    assert_eq!(wizard.current_screen(), Screen::Analysis);
}
