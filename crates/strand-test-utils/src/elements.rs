//! Instrumented element types.
//!
//! Counters and budgets are thread-local. libtest runs each test on its own
//! thread, so tests never observe each other's instances.

use std::cell::Cell;
use std::thread::LocalKey;

thread_local! {
    static LIVE: Cell<usize> = const { Cell::new(0) };
    static CLONES_LEFT: Cell<Option<usize>> = const { Cell::new(None) };
    static DEFAULTS_LEFT: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Element that counts how many instances are alive on the current thread.
///
/// Every construction path (`new`, `Default`, `Clone`) increments the
/// counter and `Drop` decrements it, so a container that leaks or
/// double-drops shows up as a mismatch in [`Tracked::live`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tracked {
    value: i64,
}

impl Tracked {
    pub fn new(value: i64) -> Self {
        LIVE.with(|live| live.set(live.get() + 1));
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Instances currently alive on this thread.
    pub fn live() -> usize {
        LIVE.with(Cell::get)
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
    }
}

/// Element whose `Clone` and `Default` panic once an armed budget runs out.
///
/// Unarmed, it behaves like a plain wrapper around an `i32`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fragile(pub i32);

impl Fragile {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Allow `n` more clones on this thread; the next one panics.
    pub fn arm_clone(n: usize) {
        CLONES_LEFT.with(|left| left.set(Some(n)));
    }

    /// Allow `n` more default constructions on this thread; the next one
    /// panics.
    pub fn arm_default(n: usize) {
        DEFAULTS_LEFT.with(|left| left.set(Some(n)));
    }

    /// Remove both budgets.
    pub fn disarm() {
        CLONES_LEFT.with(|left| left.set(None));
        DEFAULTS_LEFT.with(|left| left.set(None));
    }
}

/// Spend one unit of `budget`, panicking when it is already exhausted.
///
/// The budget is cleared before panicking so unwinding code that clones or
/// defaults again does not trigger a second panic.
fn spend(budget: &'static LocalKey<Cell<Option<usize>>>, what: &str) {
    let exhausted = budget.with(|left| match left.get() {
        Some(0) => {
            left.set(None);
            true
        }
        Some(n) => {
            left.set(Some(n - 1));
            false
        }
        None => false,
    });
    if exhausted {
        panic!("Fragile: {what} budget exhausted");
    }
}

impl Default for Fragile {
    fn default() -> Self {
        spend(&DEFAULTS_LEFT, "default");
        Self(0)
    }
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        spend(&CLONES_LEFT, "clone");
        Self(self.0)
    }
}
