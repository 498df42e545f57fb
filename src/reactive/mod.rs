pub mod invalidation;
pub mod signal;
pub mod transaction;

pub use invalidation::{ChangeFlags, Invalidation};
pub use signal::{create_signal, ReadSignal, Signal};
pub use transaction::{current_transaction, with_transaction, without_transaction, Transaction};
