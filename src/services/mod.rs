//! Service layer for the splitter
//!
//! Pure computation over the session ledger: the balance calculator and the
//! settlement summary formatter. Nothing in here mutates state or touches
//! disk; both functions recompute from scratch on every call.

pub mod balance;
pub mod summary;

pub use balance::{compute_balances, Balance, BalanceEntry, BalanceStatus, Balances};
pub use summary::format_summary;
