//! Animation transactions.
//!
//! A transaction pairs a [`Transition`] with the instant it starts. Signal
//! writes made inside [`with_transaction`] remember it, and whatever observes
//! those signals animates toward the new value with that curve, starting at
//! that instant. Writes outside a transaction apply instantly.
//!
//! ```ignore
//! with_transaction(Transaction::new(transition, now), || {
//!     state.update(|s| s.advance());
//!     pulse.set(true);
//! });
//! ```

use std::cell::RefCell;
use std::time::Duration;

use crate::animation::Transition;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transaction {
    pub transition: Transition,
    pub started_at: Duration,
}

impl Transaction {
    pub fn new(transition: Transition, started_at: Duration) -> Self {
        Self {
            transition,
            started_at,
        }
    }
}

thread_local! {
    static CURRENT: RefCell<Option<Transaction>> = const { RefCell::new(None) };
}

/// Restores the previously active transaction when dropped, so nesting and
/// unwinding both leave the slot as it was.
struct Restore(Option<Transaction>);

impl Drop for Restore {
    fn drop(&mut self) {
        let previous = self.0.take();
        CURRENT.with(|slot| *slot.borrow_mut() = previous);
    }
}

fn scoped<F, R>(transaction: Option<Transaction>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let previous = CURRENT.with(|slot| slot.replace(transaction));
    let _restore = Restore(previous);
    f()
}

/// Run `f` with `transaction` recorded on every signal write it makes.
pub fn with_transaction<F, R>(transaction: Transaction, f: F) -> R
where
    F: FnOnce() -> R,
{
    scoped(Some(transaction), f)
}

/// Run `f` with no transaction in scope, even when nested inside one.
pub fn without_transaction<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    scoped(None, f)
}

pub fn current_transaction() -> Option<Transaction> {
    CURRENT.with(|slot| *slot.borrow())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TimingFunction;

    fn tx(ms: u64) -> Transaction {
        Transaction::new(
            Transition::new(Duration::from_millis(100), TimingFunction::Linear),
            Duration::from_millis(ms),
        )
    }

    #[test]
    fn test_scope_is_restored() {
        assert!(current_transaction().is_none());
        with_transaction(tx(1), || {
            assert_eq!(current_transaction().map(|t| t.started_at), Some(Duration::from_millis(1)));
            with_transaction(tx(2), || {
                assert_eq!(
                    current_transaction().map(|t| t.started_at),
                    Some(Duration::from_millis(2))
                );
            });
            without_transaction(|| assert!(current_transaction().is_none()));
            assert_eq!(current_transaction().map(|t| t.started_at), Some(Duration::from_millis(1)));
        });
        assert!(current_transaction().is_none());
    }
}
