//! Simulated multi-step progress
//!
//! Walks a list of labelled steps with a random delay per step, logging the
//! start of each one, then signals completion after a final settle delay.

use crate::models::AnalysisStep;
use chrono::{DateTime, Local};
use rand::Rng;
use std::time::Duration;

/// Delays used by [`StepProgress`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTiming {
    /// Shortest step
    pub min: Duration,
    /// Longest step
    pub max: Duration,
    /// Wait after the last step before completion
    pub finish: Duration,
}

impl Default for StepTiming {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(600),
            max: Duration::from_millis(1000),
            finish: Duration::from_millis(500),
        }
    }
}

/// A timestamped line in the analysis log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub message: String,
}

impl LogEntry {
    /// `[HH:MM:SS] message`
    pub fn render(&self) -> String {
        format!("[{}] {}", self.at.format("%H:%M:%S"), self.message)
    }
}

/// Outcome of one progress tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTick {
    /// A step finished; the payload is the new current index
    Advanced(usize),
    /// Every step and the settle delay are done
    Completed,
    /// Nothing left to do
    Idle,
}

/// Step-progress animation state
#[derive(Debug, Clone)]
pub struct StepProgress {
    steps: Vec<AnalysisStep>,
    current: usize,
    completed: bool,
    log: Vec<LogEntry>,
    timing: StepTiming,
}

impl StepProgress {
    /// Create progress over `steps`
    pub fn new(steps: Vec<AnalysisStep>, timing: StepTiming) -> Self {
        Self {
            steps,
            current: 0,
            completed: false,
            log: Vec::new(),
            timing,
        }
    }

    /// Log the first step; call once when the owning screen mounts
    pub fn start(&mut self, now: DateTime<Local>) {
        if self.log.is_empty() {
            self.log_current(now);
        }
    }

    fn log_current(&mut self, now: DateTime<Local>) {
        if let Some(step) = self.steps.get(self.current) {
            self.log.push(LogEntry {
                at: now,
                message: step.label.clone(),
            });
        }
    }

    /// Steps being walked
    pub fn steps(&self) -> &[AnalysisStep] {
        &self.steps
    }

    /// Index of the step in progress; equals the step count once all are done
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether completion has been signalled
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Log lines so far
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Whole-percent progress over finished steps
    pub fn percent(&self) -> u8 {
        if self.steps.is_empty() {
            return 100;
        }
        ((self.current as f64 / self.steps.len() as f64) * 100.0).round() as u8
    }

    /// Delay until the next tick, `None` once completed
    pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Duration> {
        if self.current < self.steps.len() {
            Some(if self.timing.min >= self.timing.max {
                self.timing.min
            } else {
                rng.gen_range(self.timing.min..=self.timing.max)
            })
        } else if !self.completed {
            Some(self.timing.finish)
        } else {
            None
        }
    }

    /// Advance one step, or complete once every step is done
    pub fn tick(&mut self, now: DateTime<Local>) -> StepTick {
        if self.current < self.steps.len() {
            self.current += 1;
            self.log_current(now);
            StepTick::Advanced(self.current)
        } else if !self.completed {
            self.completed = true;
            StepTick::Completed
        } else {
            StepTick::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn steps(n: usize) -> Vec<AnalysisStep> {
        (0..n)
            .map(|i| AnalysisStep {
                id: format!("s{}", i),
                label: format!("Step {}...", i),
            })
            .collect()
    }

    #[test]
    fn test_completes_exactly_once() {
        let mut progress = StepProgress::new(steps(7), StepTiming::default());
        progress.start(Local::now());

        let mut completions = 0;
        let mut last = progress.current();
        for _ in 0..20 {
            if progress.tick(Local::now()) == StepTick::Completed {
                completions += 1;
            }
            assert!(progress.current() >= last);
            assert!(progress.current() <= 7);
            last = progress.current();
        }

        assert_eq!(completions, 1);
        assert!(progress.is_completed());
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_log_gets_one_entry_per_step() {
        let mut progress = StepProgress::new(steps(3), StepTiming::default());
        progress.start(Local::now());
        progress.start(Local::now());
        assert_eq!(progress.log().len(), 1);

        for _ in 0..5 {
            progress.tick(Local::now());
        }
        let messages: Vec<_> = progress.log().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["Step 0...", "Step 1...", "Step 2..."]);
        assert!(progress.log()[0].render().ends_with("] Step 0..."));
    }

    #[test]
    fn test_delays_follow_timing() {
        let timing = StepTiming::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut progress = StepProgress::new(steps(2), timing);

        for _ in 0..2 {
            let delay = progress.next_delay(&mut rng).unwrap();
            assert!(delay >= timing.min && delay <= timing.max);
            progress.tick(Local::now());
        }
        assert_eq!(progress.next_delay(&mut rng), Some(timing.finish));
        assert_eq!(progress.tick(Local::now()), StepTick::Completed);
        assert_eq!(progress.next_delay(&mut rng), None);
        assert_eq!(progress.tick(Local::now()), StepTick::Idle);
    }

    #[test]
    fn test_percent_rounds() {
        let mut progress = StepProgress::new(steps(7), StepTiming::default());
        assert_eq!(progress.percent(), 0);
        progress.tick(Local::now());
        assert_eq!(progress.percent(), 14);
        progress.tick(Local::now());
        assert_eq!(progress.percent(), 29);
    }

    #[test]
    fn test_fixed_delay_when_range_is_empty() {
        let timing = StepTiming {
            min: Duration::from_millis(10),
            max: Duration::from_millis(10),
            finish: Duration::from_millis(5),
        };
        let progress = StepProgress::new(steps(1), timing);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(progress.next_delay(&mut rng), Some(Duration::from_millis(10)));
    }
}
