/// Admission gate — a counting semaphore shared by every task of one scan.
///
/// Tasks take a [`Permit`] around each filesystem operation (stat, directory
/// listing, recursive size walk) and never while waiting on their children.
/// Holders therefore always make progress, which keeps the gate deadlock-free
/// no matter how deep the tree is, while the total number of concurrent
/// filesystem operations stays bounded across the whole traversal.
use parking_lot::{Condvar, Mutex};

/// Counting permit set built on a mutex-guarded counter.
#[derive(Debug)]
pub struct AdmissionGate {
    state: Mutex<GateState>,
    freed: Condvar,
    capacity: usize,
}

#[derive(Debug)]
struct GateState {
    available: usize,
    /// Most slots ever held at once.
    peak: usize,
}

/// A held slot. Dropping it returns the slot to the gate, including when the
/// holder unwinds from a panic.
#[must_use = "the slot is released as soon as the permit is dropped"]
#[derive(Debug)]
pub struct Permit<'a> {
    gate: &'a AdmissionGate,
}

impl AdmissionGate {
    /// Create a gate admitting `permits` concurrent holders.
    ///
    /// A zero-sized gate would block forever, so it is raised to one.
    pub fn new(permits: usize) -> Self {
        let capacity = permits.max(1);
        Self {
            state: Mutex::new(GateState {
                available: capacity,
                peak: 0,
            }),
            freed: Condvar::new(),
            capacity,
        }
    }

    /// Block until a slot is free and take it.
    pub fn acquire(&self) -> Permit<'_> {
        let mut state = self.state.lock();
        while state.available == 0 {
            self.freed.wait(&mut state);
        }
        state.available -= 1;
        state.peak = state.peak.max(self.capacity - state.available);
        Permit { gate: self }
    }

    /// Slots currently free.
    pub fn available(&self) -> usize {
        self.state.lock().available
    }

    /// Highest number of slots held at the same time since the gate was created.
    pub fn peak(&self) -> usize {
        self.state.lock().peak
    }

    /// Total slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn release(&self) {
        let mut state = self.state.lock();
        state.available += 1;
        debug_assert!(state.available <= self.capacity, "admission gate over-released");
        drop(state);
        self.freed.notify_one();
    }
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        self.gate.release();
    }
}
