use std::future::{Future, pending};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Source of simulation ticks. The session loop awaits `next_tick` only while
/// the clock is running; a stopped clock never yields.
pub trait TickClock: Send {
    fn start(&mut self, period: Duration);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
    fn next_tick(&mut self) -> impl Future<Output = ()> + Send;
}

/// Wall-clock ticks backed by a tokio interval.
#[derive(Default)]
pub struct IntervalClock {
    interval: Option<Interval>,
}

impl IntervalClock {
    pub fn new() -> Self {
        Self { interval: None }
    }
}

impl TickClock for IntervalClock {
    fn start(&mut self, period: Duration) {
        // First tick lands one full period after start, not immediately.
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn stop(&mut self) {
        self.interval = None;
    }

    fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    async fn next_tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => pending::<()>().await,
        }
    }
}

/// Clock driven by explicit pulses, for tests and step-by-step debugging.
pub struct ManualClock {
    pulses: mpsc::UnboundedReceiver<()>,
    running: bool,
    period: Option<Duration>,
}

#[derive(Clone)]
pub struct ManualClockHandle {
    pulses: mpsc::UnboundedSender<()>,
}

impl ManualClockHandle {
    pub fn pulse(&self) {
        let _ = self.pulses.send(());
    }

    pub fn pulse_n(&self, count: usize) {
        for _ in 0..count {
            self.pulse();
        }
    }
}

pub fn manual_clock() -> (ManualClock, ManualClockHandle) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        ManualClock {
            pulses: rx,
            running: false,
            period: None,
        },
        ManualClockHandle { pulses: tx },
    )
}

impl ManualClock {
    pub fn period(&self) -> Option<Duration> {
        self.period
    }
}

impl TickClock for ManualClock {
    fn start(&mut self, period: Duration) {
        // Pulses sent while stopped belong to the previous run.
        while self.pulses.try_recv().is_ok() {}
        self.running = true;
        self.period = Some(period);
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    async fn next_tick(&mut self) {
        if !self.running || self.pulses.recv().await.is_none() {
            pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_clock_start_stop() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        runtime.block_on(async {
            let mut clock = IntervalClock::new();
            assert!(!clock.is_running());
            clock.start(Duration::from_millis(5));
            assert!(clock.is_running());
            clock.next_tick().await;
            clock.stop();
            assert!(!clock.is_running());
        });
    }

    #[tokio::test]
    async fn test_manual_clock_yields_once_per_pulse() {
        let (mut clock, handle) = manual_clock();
        clock.start(Duration::from_millis(150));
        assert_eq!(clock.period(), Some(Duration::from_millis(150)));

        handle.pulse_n(2);
        clock.next_tick().await;
        clock.next_tick().await;

        let third = tokio::time::timeout(Duration::from_millis(20), clock.next_tick()).await;
        assert!(third.is_err());
    }

    #[tokio::test]
    async fn test_stopped_manual_clock_never_ticks() {
        let (mut clock, handle) = manual_clock();
        handle.pulse();
        let result = tokio::time::timeout(Duration::from_millis(20), clock.next_tick()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_restart_discards_pulses_left_from_previous_run() {
        let (mut clock, handle) = manual_clock();
        clock.start(Duration::from_millis(150));
        handle.pulse_n(3);
        clock.next_tick().await;
        clock.stop();

        clock.start(Duration::from_millis(150));
        let stale = tokio::time::timeout(Duration::from_millis(20), clock.next_tick()).await;
        assert!(stale.is_err());

        handle.pulse();
        clock.next_tick().await;
    }
}
