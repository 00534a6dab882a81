use super::phase::Phase;

/// Remaining seconds of the current phase plus the running flag
///
/// Pausing only clears the flag, so resuming continues from the frozen
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            running: false,
        }
    }

    /// Load a fresh duration and stop
    pub fn load(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Advance one second; returns the remaining seconds
    pub fn tick(&mut self) -> u32 {
        if self.running {
            self.remaining = self.remaining.saturating_sub(1);
        }
        self.remaining
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer is not running; nothing changed
    Idle,
    /// One second elapsed within the current phase
    Counting { phase: Phase, remaining: u32 },
    /// The phase ran out and `next` was loaded
    PhaseFinished { finished: Phase, next: Phase },
    /// The configured number of sessions is done
    Completed { sessions: u32 },
}

/// Tick contract shared by both Pomodoro variants
///
/// Timers never schedule themselves. An external driver calls [`tick`]
/// once per elapsed second while [`is_running`] holds.
///
/// [`tick`]: SessionTimer::tick
/// [`is_running`]: SessionTimer::is_running
pub trait SessionTimer {
    fn tick(&mut self) -> TickOutcome;

    fn is_running(&self) -> bool;
}
