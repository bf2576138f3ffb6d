//! Braille spinner

/// Spinner animation frames (braille pattern)
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Endless frame cycler
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    index: usize,
}

impl Spinner {
    /// Spinner over the default braille frames
    pub fn new() -> Self {
        Self::with_frames(SPINNER_FRAMES)
    }

    /// Spinner over custom frames; must not be empty
    pub fn with_frames(frames: &'static [&'static str]) -> Self {
        debug_assert!(!frames.is_empty());
        Self { frames, index: 0 }
    }

    /// Move to the next frame, wrapping around
    pub fn tick(&mut self) {
        self.index = (self.index + 1) % self.frames.len();
    }

    /// Current frame index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current frame glyph
    pub fn frame(&self) -> &'static str {
        self.frames[self.index]
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}
