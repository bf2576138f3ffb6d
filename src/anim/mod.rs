//! Animation state machines
//!
//! Pure, timer-agnostic state for every animated effect. Each type exposes a
//! `tick` that advances it by one step; the screens decide when ticks happen
//! by scheduling timers (see [`crate::app::timer`]).

pub mod progress;
pub mod ripple;
pub mod spinner;
pub mod typewriter;

pub use progress::{LogEntry, StepProgress, StepTick, StepTiming};
pub use ripple::{Fade, Glow, Ripple, RippleTier};
pub use spinner::{Spinner, SPINNER_FRAMES};
pub use typewriter::{Typewriter, TypewriterPhase, TypewriterTiming};
