// Request/complete handshake between the main loop and the ADC handler
//
// Main loop: request() -> wait() -> act on the returned state.
// Handler:   complete(sample) classifies, latches, clears pending.
//
// At most one conversion is outstanding. The latch is written before
// pending is cleared (Release) and read after pending is seen clear
// (Acquire), so wait() always returns the result of the conversion it
// waited for. request() is check-and-set under a critical section
// because riscv32imc has no atomic swap.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use log::warn;

use crate::button::{ButtonState, Sample};
use crate::classifier::Classifier;
use crate::error::Error;
use crate::latch::ButtonLatch;

/// Millisecond clock used to bound waits.
pub trait Monotonic {
    fn now_ms(&self) -> u64;
}

impl<F: Fn() -> u64> Monotonic for F {
    #[inline]
    fn now_ms(&self) -> u64 {
        self()
    }
}

pub struct Conversion {
    classifier: Classifier,
    latch: ButtonLatch,
    pending: AtomicBool,
    // single writer (the handler), so load + store is enough
    completed: AtomicU32,
}

impl Conversion {
    pub const fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            latch: ButtonLatch::new(),
            pending: AtomicBool::new(false),
            completed: AtomicU32::new(0),
        }
    }

    /// Start a conversion. Returns `false` and does nothing if one is already in flight.
    pub fn request(&self) -> bool {
        critical_section::with(|_| {
            if self.pending.load(Ordering::Acquire) {
                return false;
            }
            self.pending.store(true, Ordering::Release);
            true
        })
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Drop an outstanding request, e.g. after [`Error::Timeout`].
    ///
    /// Requests carry no generation tag: if the handler for a cancelled
    /// conversion still runs after the next `request()`, its sample
    /// satisfies the new request. Callers whose handler can outlive a
    /// cancel must tolerate that. The firmware samples inside a critical
    /// section on one core, so a completion never straddles a cancel.
    pub fn cancel(&self) {
        self.pending.store(false, Ordering::Release);
    }

    /// Conversion-complete handler. Safe to call from interrupt context:
    /// no blocking, no allocation, no logging.
    pub fn complete(&self, sample: Sample) -> ButtonState {
        let state = self.classifier.classify(sample);
        self.latch.store(state);
        let n = self.completed.load(Ordering::Relaxed).wrapping_add(1);
        self.completed.store(n, Ordering::Relaxed);
        self.pending.store(false, Ordering::Release);
        state
    }

    /// Latched state without waiting. `None` until the first conversion completes.
    #[inline]
    pub fn latest(&self) -> ButtonState {
        self.latch.load()
    }

    /// Number of conversions completed so far (wraps).
    #[inline]
    pub fn completed(&self) -> u32 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Busy-wait for the outstanding conversion, giving up after `timeout_ms`.
    ///
    /// With nothing outstanding this returns the latched state at once.
    /// On timeout the request stays pending, so a late completion still
    /// lands in the latch.
    pub fn wait<C: Monotonic>(&self, clock: &C, timeout_ms: u64) -> Result<ButtonState, Error> {
        let start = clock.now_ms();
        while self.pending.load(Ordering::Acquire) {
            let waited_ms = clock.now_ms().saturating_sub(start);
            if waited_ms >= timeout_ms {
                warn!("keypad: conversion pending after {} ms", waited_ms);
                return Err(Error::Timeout { waited_ms });
            }
            core::hint::spin_loop();
        }
        Ok(self.latch.load())
    }

    /// Busy-wait with no bound. Hangs forever if the handler never runs;
    /// prefer [`wait`](Self::wait).
    pub fn wait_forever(&self) -> ButtonState {
        while self.pending.load(Ordering::Acquire) {
            core::hint::spin_loop();
        }
        self.latch.load()
    }

    /// One consumer cycle: request, then wait for the result.
    ///
    /// If an earlier request is still in flight no new one is issued and
    /// this waits for that one instead.
    pub fn read<C: Monotonic>(&self, clock: &C, timeout_ms: u64) -> Result<ButtonState, Error> {
        self.request();
        self.wait(clock, timeout_ms)
    }

    pub fn latch(&self) -> &ButtonLatch {
        &self.latch
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}

impl Default for Conversion {
    fn default() -> Self {
        Self::new(Classifier::new())
    }
}
