//! Single-slot blocking handoff between an interactive surface and the
//! controller thread.
//!
//! The engine itself is synchronous; the only cross-thread concern is that a
//! move source (mouse input, an AI driver) may run elsewhere and must hand
//! its chosen move over exactly once. The slot resolves exactly once with
//! either a value or a cancellation; cancelling unblocks the waiter without
//! anything having been applied.
//!
//! ```
//! use chess_rules::handoff::handoff;
//! use chess_core::Location;
//!
//! let (tx, rx) = handoff::<(Location, Location)>();
//! std::thread::spawn(move || {
//!     let from = "E2".parse().unwrap();
//!     let to = "E4".parse().unwrap();
//!     let _ = tx.deliver((from, to));
//! });
//! assert!(rx.wait().is_some());
//! ```

use std::sync::{Arc, Condvar, Mutex};

use chess_core::{Location, Promotion};

/// Resolution state of the slot.
#[derive(Debug)]
enum Slot<T> {
    Pending,
    Delivered(T),
    Cancelled,
}

#[derive(Debug)]
struct Shared<T> {
    slot: Mutex<Slot<T>>,
    cond: Condvar,
}

/// Producer half: resolves the slot once with a value or a cancellation.
#[derive(Debug)]
pub struct HandoffSender<T> {
    shared: Arc<Shared<T>>,
}

/// Consumer half: blocks until the slot resolves.
#[derive(Debug)]
pub struct HandoffReceiver<T> {
    shared: Arc<Shared<T>>,
}

/// Creates a connected sender/receiver pair around one empty slot.
pub fn handoff<T>() -> (HandoffSender<T>, HandoffReceiver<T>) {
    let shared = Arc::new(Shared {
        slot: Mutex::new(Slot::Pending),
        cond: Condvar::new(),
    });
    (
        HandoffSender {
            shared: Arc::clone(&shared),
        },
        HandoffReceiver { shared },
    )
}

impl<T> HandoffSender<T> {
    /// Delivers the value. The first resolution wins; if the slot was
    /// already resolved the value is handed back in `Err`.
    pub fn deliver(&self, value: T) -> Result<(), T> {
        let mut slot = self.shared.slot.lock().unwrap();
        match *slot {
            Slot::Pending => {
                *slot = Slot::Delivered(value);
                self.shared.cond.notify_one();
                Ok(())
            }
            _ => Err(value),
        }
    }

    /// Cancels the wait. Returns true if this call resolved the slot,
    /// false if it had already been resolved.
    pub fn cancel(&self) -> bool {
        let mut slot = self.shared.slot.lock().unwrap();
        match *slot {
            Slot::Pending => {
                *slot = Slot::Cancelled;
                self.shared.cond.notify_one();
                true
            }
            _ => false,
        }
    }
}

impl<T> Drop for HandoffSender<T> {
    /// A sender dropped without resolving counts as a cancellation, so the
    /// waiting side can never block forever.
    fn drop(&mut self) {
        // Tolerate a poisoned lock: never panic inside drop.
        if let Ok(mut slot) = self.shared.slot.lock() {
            if matches!(*slot, Slot::Pending) {
                *slot = Slot::Cancelled;
                self.shared.cond.notify_one();
            }
        }
    }
}

impl<T> HandoffReceiver<T> {
    /// Blocks the calling thread until the slot resolves. Returns the
    /// delivered value, or `None` on cancellation.
    pub fn wait(self) -> Option<T> {
        let mut slot = self.shared.slot.lock().unwrap();
        loop {
            match std::mem::replace(&mut *slot, Slot::Pending) {
                Slot::Delivered(value) => return Some(value),
                Slot::Cancelled => return None,
                Slot::Pending => {
                    slot = self.shared.cond.wait(slot).unwrap();
                }
            }
        }
    }

    /// Non-blocking probe. Returns `Ok(Some(value))` on delivery,
    /// `Ok(None)` on cancellation, and `Err(self)` while still pending.
    pub fn try_take(self) -> Result<Option<T>, Self> {
        let mut slot = self.shared.slot.lock().unwrap();
        match std::mem::replace(&mut *slot, Slot::Pending) {
            Slot::Delivered(value) => Ok(Some(value)),
            Slot::Cancelled => Ok(None),
            Slot::Pending => {
                drop(slot);
                Err(self)
            }
        }
    }
}

/// Handoff pair for a chosen `(from, to)` move.
pub type MoveHandoff = (
    HandoffSender<(Location, Location)>,
    HandoffReceiver<(Location, Location)>,
);

/// Creates the handoff used to submit a chosen move.
pub fn move_handoff() -> MoveHandoff {
    handoff()
}

/// Handoff pair for a promotion choice.
pub type PromotionHandoff = (HandoffSender<Promotion>, HandoffReceiver<Promotion>);

/// Creates the handoff used to submit a promotion choice.
pub fn promotion_handoff() -> PromotionHandoff {
    handoff()
}
