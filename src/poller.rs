//! Snapshot Polling
//!
//! Fixed-interval refresh with an explicit stop handle.

use gloo_timers::callback::Interval;

pub struct Poller {
    stop: Option<Box<dyn FnOnce()>>,
}

impl Poller {
    /// Run `tick` now, then every `period_ms` until cancelled or dropped.
    pub fn start(period_ms: u32, tick: impl FnMut() + 'static) -> Self {
        log::debug!("polling every {} ms", period_ms);
        Self::start_with(tick, move |tick| {
            let interval = Interval::new(period_ms, tick);
            move || {
                interval.cancel();
            }
        })
    }

    /// Run `tick` once, then hand it to `schedule`, which arms the repeating
    /// timer and returns the function that disarms it.
    pub fn start_with<T, S, C>(mut tick: T, schedule: S) -> Self
    where
        T: FnMut() + 'static,
        S: FnOnce(T) -> C,
        C: FnOnce() + 'static,
    {
        tick();
        Self {
            stop: Some(Box::new(schedule(tick))),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
            log::debug!("polling stopped");
        }
    }
}
