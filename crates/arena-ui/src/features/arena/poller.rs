//! Periodic status polling with an overlap guard and explicit teardown.
//!
//! # Design
//! - The tick-admission logic is a plain struct (`PollGate`) so the overlap
//!   guard can be tested without a browser.
//! - The wasm task owns its interval and a liveness token; after `cancel`
//!   (or drop) no response is applied, even one already in flight.

/// Admission control for snapshot requests: at most one in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollGate {
    in_flight: bool,
}

impl PollGate {
    /// A gate with no request outstanding.
    #[must_use]
    pub const fn new() -> Self {
        Self { in_flight: false }
    }

    /// Try to admit a tick. Returns `false` while a request is outstanding,
    /// in which case the tick must be skipped entirely.
    pub const fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Mark the outstanding request as resolved, whatever its outcome.
    pub const fn finish(&mut self) {
        self.in_flight = false;
    }

    /// Whether a request is currently outstanding.
    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use task::StatusPoller;

#[cfg(target_arch = "wasm32")]
mod task {
    use super::PollGate;
    use crate::core::store::AppStore;
    use crate::features::arena::state::{ArenaEvent, apply, snapshot_token};
    use crate::services::api::ApiClient;
    use gloo::console;
    use gloo_timers::callback::Interval;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use yew::platform::spawn_local;
    use yewdux::prelude::Dispatch;

    /// Cancellable background task refreshing the arena snapshot.
    ///
    /// Owned by the app shell; dropping it (or calling [`cancel`]) stops
    /// future ticks and discards any response still in flight.
    ///
    /// [`cancel`]: StatusPoller::cancel
    pub(crate) struct StatusPoller {
        alive: Rc<Cell<bool>>,
        _interval: Interval,
    }

    impl StatusPoller {
        /// Start polling immediately and then every `interval_ms`.
        pub(crate) fn start(
            client: Rc<ApiClient>,
            dispatch: Dispatch<AppStore>,
            interval_ms: u32,
        ) -> Self {
            let alive = Rc::new(Cell::new(true));
            let gate = Rc::new(RefCell::new(PollGate::new()));

            tick(&client, &dispatch, &gate, &alive);
            let interval = {
                let alive = alive.clone();
                Interval::new(interval_ms, move || {
                    tick(&client, &dispatch, &gate, &alive);
                })
            };

            Self {
                alive,
                _interval: interval,
            }
        }

        /// Stop the task: no further ticks fire and in-flight responses are
        /// discarded.
        pub(crate) fn cancel(&self) {
            self.alive.set(false);
        }
    }

    impl Drop for StatusPoller {
        fn drop(&mut self) {
            self.cancel();
        }
    }

    fn tick(
        client: &Rc<ApiClient>,
        dispatch: &Dispatch<AppStore>,
        gate: &Rc<RefCell<PollGate>>,
        alive: &Rc<Cell<bool>>,
    ) {
        if !gate.borrow_mut().try_begin() {
            // A slow request is still outstanding; skip this tick.
            return;
        }
        let issued_seq = snapshot_token(&dispatch.get().arena);
        let client = client.clone();
        let dispatch = dispatch.clone();
        let gate = gate.clone();
        let alive = alive.clone();
        spawn_local(async move {
            let result = client.fetch_status().await;
            if !alive.get() {
                return;
            }
            gate.borrow_mut().finish();
            match result {
                Ok(status) => dispatch.reduce_mut(|store| {
                    apply(&mut store.arena, ArenaEvent::Snapshot { issued_seq, status });
                }),
                Err(err) => {
                    console::warn!(format!("status poll failed: {err}"));
                    dispatch.reduce_mut(|store| apply(&mut store.arena, ArenaEvent::PollFailed));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_admits_one_request_at_a_time() {
        let mut gate = PollGate::new();
        assert!(gate.try_begin());
        assert!(gate.in_flight());
        // Second tick while the request is outstanding is skipped.
        assert!(!gate.try_begin());
        assert!(!gate.try_begin());
    }

    #[test]
    fn gate_reopens_after_the_request_resolves() {
        let mut gate = PollGate::new();
        assert!(gate.try_begin());
        gate.finish();
        assert!(!gate.in_flight());
        assert!(gate.try_begin());
    }

    #[test]
    fn finish_without_begin_is_harmless() {
        let mut gate = PollGate::new();
        gate.finish();
        assert!(gate.try_begin());
    }
}
