//! Settlement summary formatter
//!
//! Turns the computed balance mapping into the plain-text report shown in
//! the summary view and written by the text export.

use std::fmt::Write;

use super::balance::{BalanceStatus, Balances};

/// Format the settlement summary
///
/// One newline-terminated line per participant, in balance order:
/// "<name> owes <amount>", "<name> should receive <amount>", or
/// "<name> is settled up." Amounts are unsigned, two decimals, no symbol.
pub fn format_summary(balances: &Balances) -> String {
    let mut out = String::new();

    for entry in balances.iter() {
        match entry.balance.status() {
            BalanceStatus::Owes => {
                let _ = writeln!(
                    out,
                    "{} owes {:.2}",
                    entry.participant,
                    entry.balance.magnitude()
                );
            }
            BalanceStatus::Receives => {
                let _ = writeln!(
                    out,
                    "{} should receive {:.2}",
                    entry.participant,
                    entry.balance.magnitude()
                );
            }
            BalanceStatus::Settled => {
                let _ = writeln!(out, "{} is settled up.", entry.participant);
            }
        }
    }

    out
}
