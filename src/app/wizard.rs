//! Wizard controller
//!
//! Owns the router, the mounted screen and its timers, and applies input and
//! timer events in arrival order. Knows nothing about the terminal, so the
//! whole flow can be driven from tests.

use crate::app::screens::bars::{
    frame_layout, header_for, hints_for, render_bottom_bar, render_too_small, render_top_bar,
};
use crate::app::screens::ActiveScreen;
use crate::app::state::{NavigationAction, Router, RouterEvent, Screen, Transition, WizardState};
use crate::app::theme::Theme;
use crate::app::timer::{self, TimerEvent, TimerSet};
use crate::config::DemoConfig;
use crate::models::Catalog;
use crossterm::event::KeyEvent;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use ratatui::{style::Style, widgets::Block, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

/// Timer delivery counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Ticks handed to the mounted screen
    pub delivered: u64,
    /// Ticks from cancelled timers or earlier mounts
    pub discarded: u64,
}

/// Terminal-independent wizard core
///
/// Must be created inside a tokio runtime: mounting a screen spawns its
/// timer tasks.
#[derive(Debug)]
pub struct Wizard {
    router: Router,
    catalog: Catalog,
    config: DemoConfig,
    theme: Theme,
    screen: ActiveScreen,
    timers: TimerSet,
    timer_tx: mpsc::Sender<TimerEvent>,
    timer_rx: mpsc::Receiver<TimerEvent>,
    mounts: u64,
    rng: SmallRng,
    stats: TickStats,
}

impl Wizard {
    /// Start the wizard on the landing screen
    pub fn new(config: DemoConfig, catalog: Catalog) -> Self {
        Self::with_rng(config, catalog, SmallRng::from_entropy())
    }

    /// Start the wizard with a caller-supplied random source
    pub fn with_rng(config: DemoConfig, catalog: Catalog, mut rng: SmallRng) -> Self {
        let router = Router::new(
            config.wizard.archive_extensions.clone(),
            catalog.projects().len(),
        );
        let (timer_tx, timer_rx) = timer::channel();
        let screen = ActiveScreen::build(Screen::Landing, router.state(), &catalog, &config, &mut rng);
        let timers = TimerSet::new(1, timer_tx.clone());

        let mut wizard = Self {
            router,
            catalog,
            config,
            theme: Theme::default(),
            screen,
            timers,
            timer_tx,
            timer_rx,
            mounts: 1,
            rng,
            stats: TickStats::default(),
        };
        wizard.screen.mount(&mut wizard.timers, &mut wizard.rng);
        info!(screen = Screen::Landing.name(), mount = 1, "Wizard started");
        wizard
    }

    /// Read-only wizard state
    pub fn state(&self) -> &WizardState {
        self.router.state()
    }

    pub fn current_screen(&self) -> Screen {
        self.router.current_screen()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.router.should_quit()
    }

    /// The mounted screen
    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    /// Timers of the mounted screen
    pub fn timers(&self) -> &TimerSet {
        &self.timers
    }

    /// Generation id of the current mount
    pub fn mount_id(&self) -> u64 {
        self.mounts
    }

    pub fn stats(&self) -> TickStats {
        self.stats
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Translate and apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        self.handle_action(Router::key_to_navigation(key))
    }

    /// Apply a navigation action to the mounted screen
    pub fn handle_action(&mut self, action: NavigationAction) -> Transition {
        match action {
            NavigationAction::None => Transition::Stay,
            NavigationAction::Quit => self.dispatch(RouterEvent::Quit),
            action => match self.screen.handle_action(action, self.router.state()) {
                Some(event) => self.dispatch(event),
                None => Transition::Stay,
            },
        }
    }

    /// Apply a timer event, discarding ticks that do not belong to the mount
    pub fn handle_timer(&mut self, event: TimerEvent) -> Transition {
        if !self.timers.accepts(&event) {
            self.stats.discarded += 1;
            trace!(
                kind = ?event.kind,
                mount = event.mount,
                current = self.mounts,
                "Discarding stale tick"
            );
            return Transition::Stay;
        }

        self.stats.delivered += 1;
        match self.screen.on_timer(event.kind, &mut self.timers, &mut self.rng) {
            Some(router_event) => self.dispatch(router_event),
            None => Transition::Stay,
        }
    }

    /// Apply every queued timer event; returns how many were read
    pub fn drain_timers(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.timer_rx.try_recv() {
            self.handle_timer(event);
            count += 1;
        }
        count
    }

    /// Wait for the next timer event
    pub async fn next_timer(&mut self) -> Option<TimerEvent> {
        self.timer_rx.recv().await
    }

    /// Send an event to the router and remount on a screen change
    pub fn dispatch(&mut self, event: RouterEvent) -> Transition {
        let transition = self.router.apply(event);
        match &transition {
            Transition::Moved { from, to } => {
                info!(from = from.name(), to = to.name(), "Screen transition");
                self.remount(*to);
            }
            Transition::Rejected(reason) => {
                warn!(reason = %reason, "Input rejected");
                self.screen.on_rejected(reason.clone());
            }
            Transition::Exit => {
                info!(screen = self.current_screen().name(), "Exit requested");
                self.timers.cancel_all();
            }
            Transition::Updated => {
                debug!(state = ?self.router.state(), "Wizard state updated");
            }
            Transition::Stay => {}
        }
        transition
    }

    fn remount(&mut self, screen: Screen) {
        self.mounts += 1;
        // Replacing the set drops the old one, which stops its timers
        self.timers = TimerSet::new(self.mounts, self.timer_tx.clone());
        self.screen = ActiveScreen::build(
            screen,
            self.router.state(),
            &self.catalog,
            &self.config,
            &mut self.rng,
        );
        self.screen.mount(&mut self.timers, &mut self.rng);
        debug!(
            screen = screen.name(),
            mount = self.mounts,
            timers = self.timers.len(),
            "Screen mounted"
        );
    }

    /// Render the whole frame
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.size();
        f.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg_dark)),
            area,
        );

        let ui = &self.config.ui;
        if area.width < ui.min_width || area.height < ui.min_height {
            render_too_small(f, area, ui.min_width, ui.min_height, &self.theme);
            return;
        }

        let kind = self.screen.kind();
        let header = header_for(kind);
        let (header_area, content, bottom) = frame_layout(area, header.is_some());
        if let (Some(header), Some(header_area)) = (header, header_area) {
            render_top_bar(f, header_area, &header, &self.theme);
        }
        self.screen.render(f, content, self.router.state(), &self.theme);
        render_bottom_bar(f, bottom, hints_for(kind), &self.theme);
    }
}
