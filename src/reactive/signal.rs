use std::cell::RefCell;
use std::rc::Rc;

use super::transaction::{current_transaction, Transaction};

struct SignalInner<T> {
    value: T,
    /// Bumped on every write that changes the value
    version: u64,
    /// Transaction that was in scope for the last changing write
    transaction: Option<Transaction>,
}

/// A shared, observable value cell.
///
/// Every changing write bumps a version counter and records the
/// [`Transaction`] that was in scope, so observers polling once per frame can
/// tell both *that* the value moved and *how* it should be animated there.
/// Writes made outside any transaction carry `None` and are meant to be
/// applied instantly.
///
/// Signals are single-threaded; clones share the same cell.
pub struct Signal<T> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                value,
                version: 0,
                transaction: None,
            })),
        }
    }

    /// A handle that can observe but never write this signal.
    pub fn read_only(&self) -> ReadSignal<T> {
        ReadSignal {
            inner: self.inner.clone(),
        }
    }

}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }
}

impl<T: PartialEq> Signal<T> {
    /// Sets the signal's value, only recording a write if the value actually changed.
    pub fn set(&self, value: T) {
        let mut inner = self.inner.borrow_mut();
        if inner.value != value {
            inner.value = value;
            inner.version += 1;
            inner.transaction = current_transaction();
        }
    }
}

impl<T: PartialEq + Clone> Signal<T> {
    /// Updates the signal's value using a closure, only recording a write if the value changed.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }
}

/// Read-only handle to a signal.
pub struct ReadSignal<T> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> ReadSignal<T> {
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow().value)
    }

    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    pub fn transaction(&self) -> Option<Transaction> {
        self.inner.borrow().transaction
    }
}

impl<T: Clone> ReadSignal<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }
}

pub fn create_signal<T>(value: T) -> Signal<T> {
    Signal::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{TimingFunction, Transition};
    use crate::reactive::with_transaction;
    use std::time::Duration;

    #[test]
    fn test_create_signal_and_get() {
        let signal = create_signal(42);
        assert_eq!(signal.get(), 42);
        assert_eq!(signal.read_only().version(), 0);
    }

    #[test]
    fn test_set_only_bumps_version_on_change() {
        let signal = create_signal(5);
        let read = signal.read_only();
        signal.set(5);
        assert_eq!(read.version(), 0);
        signal.set(10);
        assert_eq!(signal.get(), 10);
        assert_eq!(read.version(), 1);
    }

    #[test]
    fn test_update_with_closure() {
        let signal = create_signal(5);
        signal.update(|v| *v += 10);
        assert_eq!(signal.get(), 15);
        signal.update(|v| *v = 15);
        assert_eq!(signal.read_only().version(), 1);
    }

    #[test]
    fn test_read_only_handle_sees_writes() {
        let signal = create_signal(String::from("hello"));
        let read = signal.read_only();
        signal.set(String::from("world"));
        assert_eq!(read.get(), "world");
        assert_eq!(read.with(|s| s.len()), 5);
        assert_eq!(read.version(), 1);
    }

    #[test]
    fn test_write_records_transaction_in_scope() {
        let signal = create_signal(false);
        let read = signal.read_only();
        signal.set(true);
        assert!(read.transaction().is_none());

        let tx = Transaction::new(
            Transition::new(Duration::from_millis(300), TimingFunction::EaseInOut),
            Duration::from_millis(40),
        );
        with_transaction(tx, || signal.set(false));

        let recorded = read.transaction().expect("write inside a transaction");
        assert_eq!(recorded.started_at, Duration::from_millis(40));
        assert_eq!(recorded.transition.duration, Duration::from_millis(300));

        // An unchanged write keeps the previous record
        signal.set(false);
        assert!(read.transaction().is_some());
    }
}
