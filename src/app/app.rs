//! Main application controller
//!
//! Connects the terminal to the wizard: draws a frame, waits briefly for a
//! key, then applies whatever timer ticks arrived in the meantime.

use crate::{
    app::{tui::Tui, wizard::Wizard},
    config::DemoConfig,
    models::Catalog,
    MinerError, Result,
};
use tracing::info;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Wizard core
    wizard: Wizard,
}

impl App {
    /// Create a new application instance
    pub fn new(config: DemoConfig, catalog: Catalog) -> Result<Self> {
        let tui = Tui::new(config.ui.frame_rate)
            .map_err(|e| MinerError::Tui(format!("Failed to open terminal: {}", e)))?;
        Ok(Self {
            tui,
            wizard: Wizard::new(config, catalog),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| MinerError::Tui(format!("Failed to initialize terminal: {}", e)))
    }

    /// Put the terminal back the way it was
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.wizard.should_quit() {
            self.wizard.drain_timers();
            if self.wizard.should_quit() {
                break;
            }
            self.draw()?;
            self.handle_events()?;
            // Let timer tasks post before the next drain
            tokio::task::yield_now().await;
        }
        info!(stats = ?self.wizard.stats(), "Main loop finished");
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let wizard = &mut self.wizard;
        self.tui.draw(|f| wizard.render(f))?;
        Ok(())
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.handle_events()? {
            self.wizard.handle_key(key);
        }
        Ok(())
    }
}
