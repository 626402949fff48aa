//! Reference driver loop.
//!
//! Machines never pace themselves. A [`Driver`] repeatedly calls
//! [`Machine::step`], pausing between calls while the machine is running,
//! and resets it after each finished run.

use crate::core::StageList;
use crate::machine::Machine;
use std::time::Duration;
use tracing::debug;

/// Something that can pause the driving thread.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread with [`std::thread::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Pacing policy for a [`Driver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Pause between polls while the machine is running
    pub poll_interval: Duration,
    /// Use the active stage's poll hint instead of `poll_interval` when it has one
    pub honor_hints: bool,
    /// Stop [`Driver::run`] after this many runs; `None` runs forever
    pub max_runs: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(10),
            honor_hints: false,
            max_runs: None,
        }
    }
}

impl DriverConfig {
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_honor_hints(mut self, honor_hints: bool) -> Self {
        self.honor_hints = honor_hints;
        self
    }

    pub fn with_max_runs(mut self, max_runs: u64) -> Self {
        self.max_runs = Some(max_runs);
        self
    }
}

/// Summary of one run driven to completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverReport {
    /// `step` calls that did work, including the finishing one
    pub polls: u64,
    /// Pauses taken between polls
    pub pauses: u64,
    /// Total time requested from the sleeper
    pub slept: Duration,
}

/// Busy-loop driver with a configurable pause between polls.
///
/// # Example
///
/// ```rust
/// use scoro::driver::{Driver, DriverConfig, Sleeper};
/// use scoro::stages::WaitUntil;
/// use scoro::Machine;
/// use std::cell::Cell;
/// use std::time::Duration;
///
/// struct NoSleep;
///
/// impl Sleeper for NoSleep {
///     fn sleep(&mut self, _duration: Duration) {}
/// }
///
/// let checks = Cell::new(0);
/// let mut machine = Machine::new((WaitUntil::new(|| {
///     checks.set(checks.get() + 1);
///     checks.get() % 3 == 0
/// }),));
///
/// let mut driver = Driver::with_sleeper(DriverConfig::default(), NoSleep);
/// let report = driver.run_once(&mut machine);
/// assert_eq!(report.polls, 3);
/// assert_eq!(report.pauses, 2);
///
/// machine.reset();
/// assert_eq!(driver.run_once(&mut machine), report);
/// ```
#[derive(Debug)]
pub struct Driver<S = ThreadSleeper> {
    config: DriverConfig,
    sleeper: S,
}

impl Driver<ThreadSleeper> {
    pub fn new(config: DriverConfig) -> Self {
        Self::with_sleeper(config, ThreadSleeper)
    }
}

impl<S: Sleeper> Driver<S> {
    pub fn with_sleeper(config: DriverConfig, sleeper: S) -> Self {
        Self { config, sleeper }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Poll `machine` until it finishes. Does not reset it.
    pub fn run_once<L: StageList>(&mut self, machine: &mut Machine<L>) -> DriverReport {
        let polls_before = machine.polls();
        let mut report = DriverReport::default();

        while machine.step().is_running() {
            let pause = self.pause_for(machine);
            self.sleeper.sleep(pause);
            report.pauses += 1;
            report.slept = report.slept.saturating_add(pause);
        }

        report.polls = machine.polls() - polls_before;
        debug!(
            polls = report.polls,
            pauses = report.pauses,
            slept_ms = u64::try_from(report.slept.as_millis()).unwrap_or(u64::MAX),
            "run complete"
        );
        report
    }

    /// Drive `machine` to completion, call `on_finish`, reset, and repeat
    /// until `max_runs` is reached. Returns the number of runs.
    pub fn run<L, F>(&mut self, machine: &mut Machine<L>, mut on_finish: F) -> u64
    where
        L: StageList,
        F: FnMut(&DriverReport),
    {
        let mut runs = 0;
        while self.config.max_runs.is_none_or(|max| runs < max) {
            let report = self.run_once(machine);
            on_finish(&report);
            machine.reset();
            runs += 1;
        }
        runs
    }

    fn pause_for<L: StageList>(&self, machine: &Machine<L>) -> Duration {
        if self.config.honor_hints {
            machine.poll_hint().unwrap_or(self.config.poll_interval)
        } else {
            self.config.poll_interval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::core::{Stage, StageOutcome};
    use crate::stages::{Action, Delay, WaitUntil};
    use std::cell::Cell;

    /// Advances a manual clock instead of blocking.
    struct ClockSleeper {
        clock: ManualClock,
        requested: Vec<Duration>,
    }

    impl Sleeper for ClockSleeper {
        fn sleep(&mut self, duration: Duration) {
            self.requested.push(duration);
            self.clock.advance(duration);
        }
    }

    fn sleeper(clock: &ManualClock) -> ClockSleeper {
        ClockSleeper {
            clock: clock.clone(),
            requested: Vec::new(),
        }
    }

    #[test]
    fn default_config_polls_every_ten_ms_forever() {
        let config = DriverConfig::default();
        assert_eq!(config.poll_interval, Duration::from_millis(10));
        assert!(!config.honor_hints);
        assert_eq!(config.max_runs, None);
    }

    #[test]
    fn run_once_pauses_between_polls_until_delay_expires() {
        let clock = ManualClock::default();
        let mut machine = Machine::new((Delay::new(clock.clone(), Duration::from_millis(25)),));
        let mut driver = Driver::with_sleeper(DriverConfig::default(), sleeper(&clock));

        let report = driver.run_once(&mut machine);

        // Expires once 25ms have passed: after the third 10ms pause.
        assert_eq!(report.pauses, 3);
        assert_eq!(report.polls, 4);
        assert_eq!(report.slept, Duration::from_millis(30));
        assert!(machine.is_finished());
    }

    #[test]
    fn honoring_hints_sleeps_for_remaining_time() {
        let clock = ManualClock::default();
        let mut machine = Machine::new((Delay::new(clock.clone(), Duration::from_millis(25)),));
        let config = DriverConfig::default().with_honor_hints(true);
        let mut driver = Driver::with_sleeper(config, sleeper(&clock));

        let report = driver.run_once(&mut machine);

        assert_eq!(driver.sleeper().requested, vec![Duration::from_millis(25)]);
        assert_eq!(report.polls, 2);
        assert_eq!(report.pauses, 1);
    }

    #[test]
    fn run_resets_between_runs_and_stops_at_max() {
        let clock = ManualClock::default();
        let fired = Cell::new(0);
        let mut machine = Machine::new((
            Delay::new(clock.clone(), Duration::from_millis(5)),
            Action::new(|| fired.set(fired.get() + 1)),
        ));
        let config = DriverConfig::default().with_max_runs(3);
        let mut driver = Driver::with_sleeper(config, sleeper(&clock));

        let mut reports = Vec::new();
        let runs = driver.run(&mut machine, |report| reports.push(*report));

        assert_eq!(runs, 3);
        assert_eq!(fired.get(), 3);
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(|r| *r == reports[0]));
        assert_eq!(machine.cursor(), 0);
        assert_eq!(machine.runs_completed(), 3);
    }

    #[test]
    fn predicate_reading_external_state_replays_after_reset() {
        let clock = ManualClock::default();
        let checks = Cell::new(0);
        let mut machine = Machine::new((WaitUntil::new(|| {
            checks.set(checks.get() + 1);
            checks.get() % 3 == 0
        }),));
        let config = DriverConfig::default().with_max_runs(3);
        let mut driver = Driver::with_sleeper(config, sleeper(&clock));

        let mut reports = Vec::new();
        driver.run(&mut machine, |report| reports.push(*report));

        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(|r| r.polls == 3 && r.pauses == 2));
    }

    #[test]
    fn zero_max_runs_never_polls() {
        let clock = ManualClock::default();
        let fired = Cell::new(0);
        let mut machine = Machine::new((Action::new(|| fired.set(fired.get() + 1)),));
        let config = DriverConfig::default().with_max_runs(0);
        let mut driver = Driver::with_sleeper(config, sleeper(&clock));

        let mut finished = 0;
        let runs = driver.run(&mut machine, |_| finished += 1);

        assert_eq!(runs, 0);
        assert_eq!(finished, 0);
        assert_eq!(fired.get(), 0);
        assert_eq!(machine.polls(), 0);
    }

    /// Completes on its third poll and asks for the longest possible pause.
    struct Sluggish {
        polls: u32,
    }

    impl Stage for Sluggish {
        fn step(&mut self) -> StageOutcome {
            self.polls += 1;
            StageOutcome::from_ready(self.polls >= 3)
        }

        fn reset(&mut self) {
            self.polls = 0;
        }

        fn poll_hint(&self) -> Option<Duration> {
            Some(Duration::MAX)
        }
    }

    /// Records requested pauses without sleeping.
    #[derive(Default)]
    struct Recorder {
        requested: Vec<Duration>,
    }

    impl Sleeper for Recorder {
        fn sleep(&mut self, duration: Duration) {
            self.requested.push(duration);
        }
    }

    #[test]
    fn huge_hints_saturate_total_sleep() {
        let mut machine = Machine::new((Sluggish { polls: 0 },));
        let config = DriverConfig::default().with_honor_hints(true);
        let mut driver = Driver::with_sleeper(config, Recorder::default());

        let report = driver.run_once(&mut machine);

        assert_eq!(report.pauses, 2);
        assert_eq!(report.slept, Duration::MAX);
        assert_eq!(driver.sleeper().requested, vec![Duration::MAX; 2]);
    }

    #[test]
    fn run_once_on_finished_machine_does_nothing() {
        let clock = ManualClock::default();
        let mut machine = Machine::new((Action::new(|| {}),));
        let _ = machine.step();

        let mut driver = Driver::with_sleeper(DriverConfig::default(), sleeper(&clock));
        assert_eq!(driver.run_once(&mut machine), DriverReport::default());
    }
}
