//! Background drivers for the timers and the reminder list
//!
//! The Pomodoro timers only know how to `tick()`. [`TickDriver`] owns a
//! timer and keeps a tick task armed exactly while the timer runs: the task
//! sleeps one period, ticks, and re-arms itself. Stopping the timer aborts
//! the pending task and bumps an epoch so a tick already queued behind the
//! lock is discarded.
//!
//! [`ReminderWatch`] polls the reminder list and hands out reminders whose
//! time has come.

use crate::entity::Entry;
use crate::pomodoro::{SessionTimer, TickOutcome};
use crate::reminder::{Reminder, ReminderManager};
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

/// Default tick period: one second per tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

struct Driven<T> {
    timer: T,
    /// Generation of the armed tick task; bumped on every arm and cancel
    epoch: u64,
    pending: Option<JoinHandle<()>>,
}

pub struct TickDriver<T> {
    name: &'static str,
    state: Arc<Mutex<Driven<T>>>,
    period: Duration,
}

impl<T: SessionTimer + Send + 'static> TickDriver<T> {
    pub fn new(name: &'static str, timer: T, period: Duration) -> Self {
        Self {
            name,
            state: Arc::new(Mutex::new(Driven {
                timer,
                epoch: 0,
                pending: None,
            })),
            period,
        }
    }

    /// Inspect the timer without touching the schedule
    pub async fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let driven = self.state.lock().await;
        f(&driven.timer)
    }

    /// Mutate the timer, then arm or cancel the tick task to match
    pub async fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut driven = self.state.lock().await;
        let result = f(&mut driven.timer);
        match (driven.timer.is_running(), driven.pending.is_some()) {
            (true, false) => self.arm(&mut driven),
            (false, true) => Self::cancel(&mut driven),
            _ => {}
        }
        result
    }

    /// Whether a tick task is currently scheduled
    pub async fn is_armed(&self) -> bool {
        self.state.lock().await.pending.is_some()
    }

    fn arm(&self, driven: &mut Driven<T>) {
        driven.epoch += 1;
        let epoch = driven.epoch;
        let state = Arc::clone(&self.state);
        let period = self.period;
        let name = self.name;

        debug!("{}: arming tick task (epoch {})", name, epoch);
        driven.pending = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;

                let mut driven = state.lock().await;
                if driven.epoch != epoch {
                    debug!("{}: dropping stale tick (epoch {})", name, epoch);
                    break;
                }

                match driven.timer.tick() {
                    TickOutcome::PhaseFinished { finished, next } => {
                        info!("{}: {} session complete, next up: {}", name, finished, next);
                    }
                    TickOutcome::Completed { sessions } => {
                        info!("{}: all {} session(s) complete", name, sessions);
                    }
                    outcome => debug!("{}: {:?}", name, outcome),
                }

                if !driven.timer.is_running() {
                    driven.pending = None;
                    break;
                }
            }
        }));
    }

    fn cancel(driven: &mut Driven<T>) {
        driven.epoch += 1;
        if let Some(handle) = driven.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for TickDriver<T> {
    fn drop(&mut self) {
        if let Ok(mut driven) = self.state.try_lock() {
            driven.epoch += 1;
            if let Some(handle) = driven.pending.take() {
                handle.abort();
            }
        }
    }
}

/// Shared reminder list plus the queue of reminders delivered in the background
#[derive(Clone)]
pub struct ReminderWatch {
    manager: Arc<Mutex<ReminderManager>>,
    delivered: Arc<Mutex<Vec<Reminder>>>,
}

impl ReminderWatch {
    pub fn new(manager: ReminderManager) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn manager(&self) -> &Mutex<ReminderManager> {
        &self.manager
    }

    /// Remove and return the reminders due at `now`
    ///
    /// Each reminder is handed out once; it is gone from the list (and the
    /// data file) before the caller shows it.
    pub async fn check(&self, now: NaiveDateTime) -> Vec<Entry<Reminder>> {
        let mut manager = self.manager.lock().await;
        let due = manager.take_due(now);
        if let Some(e) = manager.take_storage_error() {
            error!("Due reminders removed in memory only: {}", e);
        }
        for entry in &due {
            info!(
                "Reminder due: {} ({})",
                entry.entity.message(),
                entry.entity.time_string()
            );
        }
        due
    }

    /// Take every reminder the background watcher has delivered so far
    pub async fn drain_delivered(&self) -> Vec<Reminder> {
        std::mem::take(&mut *self.delivered.lock().await)
    }

    /// Poll for due reminders every `every`, starting immediately
    pub fn spawn(&self, every: Duration) -> JoinHandle<()> {
        let watch = self.clone();
        tokio::spawn(async move {
            info!("Reminder watcher started (every {}s)", every.as_secs());
            let mut interval = tokio::time::interval(every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let due = watch.check(Local::now().naive_local()).await;
                if !due.is_empty() {
                    watch
                        .delivered
                        .lock()
                        .await
                        .extend(due.into_iter().map(|e| e.entity));
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pomodoro::{CycleTimer, FocusTimer, Phase, TimerConfig};
    use crate::reminder::TIME_FORMAT;
    use tempfile::TempDir;

    fn one_minute() -> TimerConfig {
        TimerConfig {
            work_minutes: 1,
            short_break_minutes: 1,
            long_break_minutes: 1,
            session_count: 1,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_ticks_while_running() {
        let timer = CycleTimer::new(TimerConfig::default()).unwrap();
        let driver = TickDriver::new("cycle", timer, TICK_PERIOD);
        driver.update(|t| t.start()).await;
        assert!(driver.is_armed().await);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        let remaining = driver.read(|t| t.status().remaining_seconds).await;
        assert_eq!(remaining, 25 * 60 - 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_cancels_pending_tick() {
        let timer = CycleTimer::new(TimerConfig::default()).unwrap();
        let driver = TickDriver::new("cycle", timer, TICK_PERIOD);
        driver.update(|t| t.start()).await;
        tokio::time::sleep(Duration::from_millis(2500)).await;

        driver.update(|t| t.pause()).await;
        assert!(!driver.is_armed().await);
        let frozen = driver.read(|t| t.status().remaining_seconds).await;

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(driver.read(|t| t.status().remaining_seconds).await, frozen);

        driver.update(|t| t.start()).await;
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(driver.read(|t| t.status().remaining_seconds).await, frozen - 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_disarms_on_completion() {
        let driver = TickDriver::new("focus", FocusTimer::new(one_minute()).unwrap(), TICK_PERIOD);
        driver.update(|t| t.start()).await;

        tokio::time::sleep(Duration::from_millis(61_500)).await;
        let status = driver.read(|t| t.status()).await;
        assert_eq!(status.mode, Phase::ShortBreak);
        assert!(!status.is_running);
        assert!(!driver.is_armed().await);
    }

    #[tokio::test]
    async fn test_reminder_check_removes_due_only() {
        let dir = TempDir::new().unwrap();
        let mut manager = ReminderManager::open(dir.path().join("reminders.json"));
        manager.add_reminder(Reminder::new("due", "2025-01-01 09:00").unwrap());
        manager.add_reminder(Reminder::new("later", "2030-01-01 09:00").unwrap());
        let watch = ReminderWatch::new(manager);

        let now = NaiveDateTime::parse_from_str("2025-06-01 00:00", TIME_FORMAT).unwrap();
        let due = watch.check(now).await;
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].entity.message(), "due");
        assert_eq!(watch.manager().lock().await.reminders().len(), 1);
        assert!(watch.check(now).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_watcher_queues_delivered_reminders() {
        let dir = TempDir::new().unwrap();
        let mut manager = ReminderManager::open(dir.path().join("reminders.json"));
        manager.add_reminder(Reminder::new("overdue", "2000-01-01 00:00").unwrap());
        let watch = ReminderWatch::new(manager);

        let handle = watch.spawn(Duration::from_secs(30));
        tokio::time::sleep(Duration::from_millis(100)).await;

        let delivered = watch.drain_delivered().await;
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].message(), "overdue");
        assert!(watch.drain_delivered().await.is_empty());
        handle.abort();
    }
}
