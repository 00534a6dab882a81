use super::config::TimerConfig;
use super::countdown::{Countdown, SessionTimer, TickOutcome};
use super::phase::Phase;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusStatus {
    pub mode: Phase,
    pub remaining_seconds: u32,
    pub is_running: bool,
}

/// Pomodoro timer whose mode is chosen explicitly
///
/// When a phase runs out the timer stops and switches to the suggested
/// next mode: a short break after work, work after any break.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    config: TimerConfig,
    mode: Phase,
    countdown: Countdown,
    /// Set once the current phase has counted; cleared when a mode is loaded
    started: bool,
}

impl FocusTimer {
    pub fn new(config: TimerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            mode: Phase::Work,
            countdown: Countdown::new(config.seconds(Phase::Work)),
            started: false,
        })
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Replace the configuration
    ///
    /// A phase that has not started yet is reloaded with the new duration.
    /// A running or paused phase keeps its remaining time.
    pub fn configure(&mut self, config: TimerConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        if !self.started {
            self.countdown.load(config.seconds(self.mode));
        }
        Ok(())
    }

    /// Switch mode, stopping the timer and loading the full duration
    pub fn select_mode(&mut self, mode: Phase) {
        self.mode = mode;
        self.countdown.load(self.config.seconds(mode));
        self.started = false;
    }

    pub fn start(&mut self) {
        self.started = true;
        self.countdown.resume();
    }

    pub fn pause(&mut self) {
        self.countdown.pause();
    }

    /// Stop and restore the current mode's full duration
    pub fn reset(&mut self) {
        self.select_mode(self.mode);
    }

    pub fn mode(&self) -> Phase {
        self.mode
    }

    pub fn status(&self) -> FocusStatus {
        FocusStatus {
            mode: self.mode,
            remaining_seconds: self.countdown.remaining(),
            is_running: self.countdown.is_running(),
        }
    }

    fn suggested_next(mode: Phase) -> Phase {
        match mode {
            Phase::Work => Phase::ShortBreak,
            Phase::ShortBreak | Phase::LongBreak => Phase::Work,
        }
    }
}

impl SessionTimer for FocusTimer {
    fn tick(&mut self) -> TickOutcome {
        if !self.countdown.is_running() {
            return TickOutcome::Idle;
        }

        let remaining = self.countdown.tick();
        if remaining > 0 {
            return TickOutcome::Counting {
                phase: self.mode,
                remaining,
            };
        }

        let finished = self.mode;
        let next = Self::suggested_next(finished);
        self.select_mode(next);
        TickOutcome::PhaseFinished { finished, next }
    }

    fn is_running(&self) -> bool {
        self.countdown.is_running()
    }
}
