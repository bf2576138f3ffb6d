//! Typewriter text reveal
//!
//! Types each string of a sequence one character at a time, holds it, then
//! deletes it faster before typing the next one. The last string stays on
//! screen and the sequence reports completion once.

use std::time::Duration;

/// Delays between typewriter ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_interval: Duration,
    pub delete_interval: Duration,
    pub pause: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(80),
            delete_interval: Duration::from_millis(45),
            pause: Duration::from_millis(700),
        }
    }
}

/// Current phase of the reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    Pause,
    Deleting,
    Done,
}

/// Typewriter animation state
#[derive(Debug, Clone)]
pub struct Typewriter {
    sequence: Vec<Vec<char>>,
    index: usize,
    revealed: usize,
    phase: TypewriterPhase,
    timing: TypewriterTiming,
}

impl Typewriter {
    /// Create a typewriter over `sequence`; an empty sequence is already done
    pub fn new<I, S>(sequence: I, timing: TypewriterTiming) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sequence: Vec<Vec<char>> = sequence
            .into_iter()
            .map(|s| s.as_ref().chars().collect())
            .collect();
        let phase = if sequence.is_empty() {
            TypewriterPhase::Done
        } else {
            TypewriterPhase::Typing
        };

        Self {
            sequence,
            index: 0,
            revealed: 0,
            phase,
            timing,
        }
    }

    /// Index of the string currently on screen
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of characters currently revealed
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Current phase
    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// Whether the whole sequence has been shown
    pub fn is_complete(&self) -> bool {
        self.phase == TypewriterPhase::Done
    }

    /// Length in characters of the current target string
    pub fn target_len(&self) -> usize {
        self.sequence.get(self.index).map_or(0, Vec::len)
    }

    /// Text revealed so far
    pub fn visible_text(&self) -> String {
        self.sequence
            .get(self.index)
            .map(|chars| chars[..self.revealed].iter().collect())
            .unwrap_or_default()
    }

    fn is_last(&self) -> bool {
        self.index + 1 >= self.sequence.len()
    }

    /// Delay until the next tick, `None` once complete
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            TypewriterPhase::Typing if self.revealed < self.target_len() => {
                Some(self.timing.type_interval)
            }
            TypewriterPhase::Typing | TypewriterPhase::Pause => Some(self.timing.pause),
            TypewriterPhase::Deleting => Some(self.timing.delete_interval),
            TypewriterPhase::Done => None,
        }
    }

    /// Advance one step; returns `true` exactly once, when the sequence completes
    pub fn tick(&mut self) -> bool {
        match self.phase {
            TypewriterPhase::Typing => {
                if self.revealed < self.target_len() {
                    self.revealed += 1;
                } else if self.is_last() {
                    self.phase = TypewriterPhase::Done;
                    return true;
                } else {
                    self.phase = TypewriterPhase::Pause;
                }
            }
            TypewriterPhase::Pause => self.phase = TypewriterPhase::Deleting,
            TypewriterPhase::Deleting => {
                self.revealed = self.revealed.saturating_sub(1);
                if self.revealed == 0 {
                    self.index += 1;
                    self.phase = TypewriterPhase::Typing;
                }
            }
            TypewriterPhase::Done => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter(sequence: &[&str]) -> Typewriter {
        Typewriter::new(sequence.iter().copied(), TypewriterTiming::default())
    }

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut tw = typewriter(&["Hello", "ARTIFACT MINER"]);
        assert_eq!(tw.visible_text(), "");
        assert_eq!(tw.next_delay(), Some(Duration::from_millis(80)));

        for expected in 1..=5 {
            tw.tick();
            assert_eq!(tw.revealed(), expected);
        }
        assert_eq!(tw.visible_text(), "Hello");
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        assert_eq!(tw.next_delay(), Some(Duration::from_millis(700)));
    }

    #[test]
    fn test_count_never_exceeds_target() {
        let mut tw = typewriter(&["abc", "xyz"]);
        for _ in 0..100 {
            tw.tick();
            assert!(tw.revealed() <= tw.target_len());
        }
    }

    #[test]
    fn test_full_sequence_phases() {
        let mut tw = typewriter(&["ab", "XYZ"]);

        tw.tick();
        tw.tick();
        assert_eq!(tw.visible_text(), "ab");

        assert!(!tw.tick());
        assert_eq!(tw.phase(), TypewriterPhase::Pause);
        assert_eq!(tw.next_delay(), Some(Duration::from_millis(700)));

        tw.tick();
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);
        assert_eq!(tw.next_delay(), Some(Duration::from_millis(45)));

        tw.tick();
        assert_eq!(tw.visible_text(), "a");
        tw.tick();
        assert_eq!(tw.index(), 1);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        assert_eq!(tw.visible_text(), "");

        for _ in 0..3 {
            assert!(!tw.tick());
        }
        assert_eq!(tw.visible_text(), "XYZ");

        assert!(tw.tick());
        assert!(tw.is_complete());
        assert_eq!(tw.visible_text(), "XYZ");
        assert_eq!(tw.next_delay(), None);
    }

    #[test]
    fn test_completion_fires_once() {
        let mut tw = typewriter(&["hi"]);
        let completions = (0..20).filter(|_| tw.tick()).count();
        assert_eq!(completions, 1);
        assert!(tw.is_complete());
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = typewriter(&["TODOs → ta-das"]);
        for _ in 0..7 {
            tw.tick();
        }
        assert_eq!(tw.visible_text(), "TODOs →");
    }

    #[test]
    fn test_empty_inputs() {
        let tw = typewriter(&[]);
        assert!(tw.is_complete());
        assert_eq!(tw.next_delay(), None);

        let mut tw = typewriter(&["", "x"]);
        tw.tick();
        assert_eq!(tw.phase(), TypewriterPhase::Pause);
        tw.tick();
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);
        tw.tick();
        assert_eq!(tw.index(), 1);
    }
}
