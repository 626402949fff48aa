//! Composable Stages
//!
//! This example rebuilds a five-stage machine and drives it forever:
//! an initial pacing hint, a one second delay, a nested pair of print
//! stages, another one second delay, and a completion tag.
//!
//! Key concepts:
//! - Statically dispatched stage tuples
//! - A whole machine nested as a single stage
//! - Busy-loop driving with a fixed pause, then reset and repeat
//!
//! Run with: cargo run --example composable
//! Set RUST_LOG=scoro=trace to see stage retirements.

use scoro::clock::SystemClock;
use scoro::driver::{Driver, DriverConfig, Sleeper, ThreadSleeper};
use scoro::stages::{Delay, Hinted};
use scoro::{oneshot_stage, Machine, Stage, StageOutcome};
use std::io::Write;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

oneshot_stage! {
    struct PrintSlash => {
        print!("/");
    }
}

oneshot_stage! {
    struct PrintBackslash => {
        print!("\\");
    }
}

oneshot_stage! {
    struct PrintTag => {
        println!("complete");
    }
}

/// Starts a new line, then runs its own two-stage machine.
struct PrintPollAttempts {
    nested: Machine<(PrintSlash, PrintBackslash)>,
}

impl PrintPollAttempts {
    fn new() -> Self {
        Self {
            nested: Machine::new((PrintSlash, PrintBackslash)),
        }
    }
}

impl Stage for PrintPollAttempts {
    fn step(&mut self) -> StageOutcome {
        println!();
        self.nested.step().into_stage_outcome()
    }

    fn reset(&mut self) {
        self.nested.reset();
    }

    fn name(&self) -> &str {
        "print-poll-attempts"
    }
}

/// Prints a dash for every pause while the machine is busy.
struct DashSleeper;

impl Sleeper for DashSleeper {
    fn sleep(&mut self, duration: Duration) {
        print!("-");
        if let Err(err) = std::io::stdout().flush() {
            warn!(error = %err, "failed to flush stdout");
        }
        ThreadSleeper.sleep(duration);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let second = Duration::from_millis(1000);
    let mut machine = Machine::new((
        Hinted::new(Duration::from_secs(1)),
        Delay::new(SystemClock, second),
        PrintPollAttempts::new(),
        Delay::new(SystemClock, second),
        PrintTag,
    ));

    let config = DriverConfig::default().with_poll_interval(Duration::from_millis(10));
    let mut driver = Driver::with_sleeper(config, DashSleeper);

    driver.run(&mut machine, |_report| {
        print!("\n\n");
    });
}
