//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! wizard state handling and the animation timers.

pub mod app;
pub mod screens;
pub mod state;
pub mod theme;
pub mod timer;
pub mod tui;
pub mod wizard;

pub use app::App;
pub use screens::ActiveScreen;
pub use state::{NavigationAction, Router, RouterEvent, Screen, Transition, WizardState};
pub use theme::Theme;
pub use timer::{TimerEvent, TimerKind, TimerSet};
pub use tui::Tui;
pub use wizard::{TickStats, Wizard};
