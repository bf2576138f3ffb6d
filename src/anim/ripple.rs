//! Decorative color cycles for the landing call-to-action
//!
//! [`Ripple`] sweeps a bright spot across a label, [`Glow`] pulses the border
//! through a fixed palette and [`Fade`] ramps opacity in once.

/// Brightness tier of a character relative to the ripple center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleTier {
    /// At the center
    Peak,
    /// One character away
    Near,
    /// Two characters away
    Far,
    /// Everything else
    Base,
}

/// Moving highlight over a text of fixed length
#[derive(Debug, Clone)]
pub struct Ripple {
    len: usize,
    rest: usize,
    /// `None` before the first tick, then a position in `0..len + rest`
    center: Option<usize>,
}

impl Ripple {
    /// Ripple over `len` characters with `rest` idle positions per pass
    pub fn new(len: usize, rest: usize) -> Self {
        Self {
            len,
            rest,
            center: None,
        }
    }

    /// Number of positions in one pass
    pub fn cycle_len(&self) -> usize {
        self.len + self.rest
    }

    /// Current center position
    pub fn center(&self) -> Option<usize> {
        self.center
    }

    /// Move the highlight one position
    pub fn tick(&mut self) {
        let cycle = self.cycle_len().max(1);
        self.center = Some(match self.center {
            None => 0,
            Some(c) => (c + 1) % cycle,
        });
    }

    /// Tier for the character at `index`
    pub fn tier(&self, index: usize) -> RippleTier {
        let Some(center) = self.center else {
            return RippleTier::Base;
        };
        match index.abs_diff(center) {
            0 => RippleTier::Peak,
            1 => RippleTier::Near,
            2 => RippleTier::Far,
            _ => RippleTier::Base,
        }
    }

    /// Tiers for every character, left to right
    pub fn tiers(&self) -> Vec<RippleTier> {
        (0..self.len).map(|i| self.tier(i)).collect()
    }
}

/// Endless cycle over a palette of `len` shades
#[derive(Debug, Clone)]
pub struct Glow {
    len: usize,
    index: usize,
}

impl Glow {
    /// Glow over a palette of `len` entries
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1), index: 0 }
    }

    /// Advance to the next shade
    pub fn tick(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Current palette index
    pub fn index(&self) -> usize {
        self.index
    }
}

/// One-shot opacity ramp from 0 to 1
#[derive(Debug, Clone)]
pub struct Fade {
    step: u8,
    steps: u8,
}

impl Fade {
    /// Fade that reaches full opacity after `steps` ticks
    pub fn new(steps: u8) -> Self {
        Self {
            step: 0,
            steps: steps.max(1),
        }
    }

    /// Raise opacity one step; returns `true` once fully opaque
    pub fn tick(&mut self) -> bool {
        self.step = (self.step + 1).min(self.steps);
        self.is_done()
    }

    /// Whether opacity has reached 1
    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }

    /// Opacity in `0.0..=1.0`
    pub fn opacity(&self) -> f32 {
        self.step as f32 / self.steps as f32
    }
}
