//! Loop control shared between the refresh loop and signal handlers.
//!
//! Handlers only flip the termination flag or wake a sleeping loop. Every
//! decision based on those flags is taken by the loop itself once its wait
//! returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Why an interruptible sleep returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeReason {
    Elapsed,
    Woken,
    Stopped,
}

/// The waits the refresh loop performs
pub trait Sleeper {
    /// Wait up to `duration`, returning early on a wake or stop request.
    fn sleep(&self, duration: Duration) -> WakeReason;

    /// Wait the full `duration` regardless of wake requests.
    fn hold(&self, duration: Duration);
}

struct Inner {
    stop: AtomicBool,
    wake: Mutex<bool>,
    cond: Condvar,
}

/// Termination flag plus an interruptible sleep primitive
#[derive(Clone)]
pub struct LoopControl {
    inner: Arc<Inner>,
}

impl LoopControl {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                stop: AtomicBool::new(false),
                wake: Mutex::new(false),
                cond: Condvar::new(),
            }),
        }
    }

    /// Ask the loop to stop after its current cycle.
    pub fn request_stop(&self) {
        self.inner.stop.store(true, Ordering::SeqCst);
        self.request_wake();
    }

    /// Cut the current sleep short. A request made while the loop is busy
    /// makes the next sleep return immediately.
    pub fn request_wake(&self) {
        let mut woken = self.inner.wake.lock();
        *woken = true;
        self.inner.cond.notify_all();
    }

    pub fn should_stop(&self) -> bool {
        self.inner.stop.load(Ordering::SeqCst)
    }
}

impl Default for LoopControl {
    fn default() -> Self {
        Self::new()
    }
}

impl Sleeper for LoopControl {
    fn sleep(&self, duration: Duration) -> WakeReason {
        let deadline = Instant::now() + duration;
        let mut woken = self.inner.wake.lock();
        while !*woken {
            if self.inner.cond.wait_until(&mut woken, deadline).timed_out() {
                break;
            }
        }
        let was_woken = std::mem::replace(&mut *woken, false);

        if self.should_stop() {
            WakeReason::Stopped
        } else if was_woken {
            WakeReason::Woken
        } else {
            WakeReason::Elapsed
        }
    }

    fn hold(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
