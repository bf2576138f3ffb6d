//! Screen-scoped animation timers
//!
//! Every timer is a tokio task that posts [`TimerEvent`]s into the wizard's
//! channel. A [`TimerSet`] belongs to exactly one mounted screen and cancels
//! all of its tasks when dropped, so unmounting a screen stops its timers.
//! Events also carry the mount id and a per-timer sequence number so that a
//! tick already queued before cancellation can be recognised and discarded.

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Capacity of the timer event channel
pub const TIMER_CHANNEL_CAPACITY: usize = 256;

/// Animation timers a screen can run, at most one of each at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Typewriter,
    Glow,
    Ripple,
    Fade,
    Spinner,
    Step,
}

/// A timer firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    /// Screen mount the timer belongs to
    pub mount: u64,
    pub kind: TimerKind,
    /// Schedule generation within the mount
    pub seq: u64,
}

/// Create the channel timers post into
pub fn channel() -> (mpsc::Sender<TimerEvent>, mpsc::Receiver<TimerEvent>) {
    mpsc::channel(TIMER_CHANNEL_CAPACITY)
}

#[derive(Debug)]
struct TimerHandle {
    seq: u64,
    repeating: bool,
    handle: JoinHandle<()>,
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl TimerHandle {
    fn cancel(mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(()); // Receiver may already be gone
        }
        self.handle.abort();
    }
}

/// Timers owned by one mounted screen
#[derive(Debug)]
pub struct TimerSet {
    mount: u64,
    next_seq: u64,
    tx: mpsc::Sender<TimerEvent>,
    timers: HashMap<TimerKind, TimerHandle>,
}

impl TimerSet {
    /// Empty set for the screen mount `mount`
    pub fn new(mount: u64, tx: mpsc::Sender<TimerEvent>) -> Self {
        Self {
            mount,
            next_seq: 0,
            tx,
            timers: HashMap::new(),
        }
    }

    /// Mount id stamped on every event
    pub fn mount(&self) -> u64 {
        self.mount
    }

    fn next_event(&mut self, kind: TimerKind) -> TimerEvent {
        self.next_seq += 1;
        TimerEvent {
            mount: self.mount,
            kind,
            seq: self.next_seq,
        }
    }

    /// Fire `kind` once after `delay`, replacing any timer of the same kind
    pub fn once(&mut self, kind: TimerKind, delay: Duration) {
        self.cancel(kind);
        let event = self.next_event(kind);
        let tx = self.tx.clone();
        let (cancel_tx, mut cancel_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    let _ = tx.send(event).await;
                }
                _ = &mut cancel_rx => {}
            }
        });

        self.timers.insert(
            kind,
            TimerHandle {
                seq: event.seq,
                repeating: false,
                handle,
                cancel_tx: Some(cancel_tx),
            },
        );
    }

    /// Fire `kind` every `period`, first after one period, replacing any
    /// timer of the same kind
    pub fn every(&mut self, kind: TimerKind, period: Duration) {
        self.cancel(kind);
        let event = self.next_event(kind);
        let tx = self.tx.clone();
        let (cancel_tx, mut cancel_rx) = oneshot::channel();
        let period = period.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    _ = &mut cancel_rx => break,
                }
            }
        });

        self.timers.insert(
            kind,
            TimerHandle {
                seq: event.seq,
                repeating: true,
                handle,
                cancel_tx: Some(cancel_tx),
            },
        );
    }

    /// Stop the timer of `kind`; returns whether one was scheduled
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        match self.timers.remove(&kind) {
            Some(timer) => {
                timer.cancel();
                true
            }
            None => false,
        }
    }

    /// Stop every timer in the set
    pub fn cancel_all(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.cancel();
        }
    }

    /// Whether a timer of `kind` is scheduled and has not been cancelled
    pub fn is_active(&self, kind: TimerKind) -> bool {
        self.timers
            .get(&kind)
            .map(|t| t.repeating || !t.handle.is_finished())
            .unwrap_or(false)
    }

    /// Number of scheduled timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Whether `event` comes from a live timer of this set
    pub fn accepts(&self, event: &TimerEvent) -> bool {
        event.mount == self.mount
            && self
                .timers
                .get(&event.kind)
                .map(|t| t.seq == event.seq)
                .unwrap_or(false)
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
