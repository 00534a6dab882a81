use super::config::TimerConfig;
use super::countdown::{Countdown, SessionTimer, TickOutcome};
use super::phase::Phase;
use crate::error::Result;

/// What the cycle timer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// Never started, or reset
    Idle,
    Active(Phase),
    /// All sessions done; only `reset` leaves this state
    Complete,
}

/// Snapshot of a [`CycleTimer`] for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleStatus {
    pub state: CycleState,
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub session_index: u32,
    pub total_sessions: u32,
    pub is_running: bool,
}

/// Auto-rotating Pomodoro timer
///
/// Every requested phase bumps a repetition counter and the phase follows
/// [`Phase::for_repetition`]. `session_index` counts the work phases
/// started; once it reaches the configured session count, the next work
/// phase is not started and the cycle completes instead.
#[derive(Debug, Clone)]
pub struct CycleTimer {
    config: TimerConfig,
    repetitions: u32,
    phase: Phase,
    countdown: Countdown,
    session_index: u32,
    complete: bool,
}

impl CycleTimer {
    pub fn new(config: TimerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            repetitions: 0,
            phase: Phase::Work,
            countdown: Countdown::new(config.seconds(Phase::Work)),
            session_index: 0,
            complete: false,
        })
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Replace the configuration
    ///
    /// An invalid configuration is rejected and the current one is kept.
    /// While idle the new work duration is shown right away; otherwise the
    /// new durations apply from the next phase on.
    pub fn configure(&mut self, config: TimerConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        if self.repetitions == 0 {
            self.countdown.load(config.seconds(Phase::Work));
        }
        Ok(())
    }

    /// Request the next phase according to the rotation rule
    ///
    /// Loads the phase's full duration and keeps the running flag as is.
    pub fn next_phase(&mut self) -> Phase {
        self.repetitions += 1;
        self.phase = Phase::for_repetition(self.repetitions);

        let running = self.countdown.is_running();
        self.countdown.load(self.config.seconds(self.phase));
        if running {
            self.countdown.resume();
        }
        if self.phase == Phase::Work {
            self.session_index += 1;
        }
        self.phase
    }

    /// Start, or resume from the frozen remaining time
    ///
    /// Returns `false` when the cycle is complete and needs a reset.
    pub fn start(&mut self) -> bool {
        if self.complete {
            return false;
        }
        if self.repetitions == 0 {
            self.next_phase();
        }
        self.countdown.resume();
        true
    }

    /// Freeze the remaining time
    pub fn pause(&mut self) {
        self.countdown.pause();
    }

    /// Back to idle: first work phase at full duration, counters cleared
    pub fn reset(&mut self) {
        self.repetitions = 0;
        self.phase = Phase::Work;
        self.countdown.load(self.config.seconds(Phase::Work));
        self.session_index = 0;
        self.complete = false;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn status(&self) -> CycleStatus {
        let state = if self.complete {
            CycleState::Complete
        } else if self.repetitions == 0 {
            CycleState::Idle
        } else {
            CycleState::Active(self.phase)
        };
        CycleStatus {
            state,
            phase: self.phase,
            remaining_seconds: self.countdown.remaining(),
            session_index: self.session_index,
            total_sessions: self.config.session_count,
            is_running: self.countdown.is_running(),
        }
    }
}

impl SessionTimer for CycleTimer {
    fn tick(&mut self) -> TickOutcome {
        if !self.countdown.is_running() {
            return TickOutcome::Idle;
        }

        let remaining = self.countdown.tick();
        if remaining > 0 {
            return TickOutcome::Counting {
                phase: self.phase,
                remaining,
            };
        }

        let finished = self.phase;
        let upcoming = Phase::for_repetition(self.repetitions + 1);
        if upcoming == Phase::Work && self.session_index >= self.config.session_count {
            self.complete = true;
            self.countdown.pause();
            return TickOutcome::Completed {
                sessions: self.session_index,
            };
        }

        let next = self.next_phase();
        TickOutcome::PhaseFinished { finished, next }
    }

    fn is_running(&self) -> bool {
        self.countdown.is_running()
    }
}
