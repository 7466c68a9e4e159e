use serde::Serialize;

use crate::fleet::{dollars::Dollars, vehicle::Plate};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEntryKind {
    TripPayment,
    Maintenance,
    Adjustment,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub kind: LedgerEntryKind,
    pub plate: Option<Plate>,
    /// Signed movement, negative for debits.
    pub amount: Dollars,
}

/// The operator's account: a running balance and every movement that produced it, in the
/// order they were booked.
#[derive(Serialize, Debug, Clone, Default)]
pub struct OperatorAccount {
    balance: Dollars,
    ledger: Vec<LedgerEntry>,
}

impl OperatorAccount {
    pub fn balance(&self) -> Dollars {
        self.balance
    }

    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    pub fn total(&self, kind: LedgerEntryKind) -> Dollars {
        self.ledger
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.amount)
            .sum()
    }

    pub(crate) fn credit_trip(&mut self, plate: &Plate, cost: Dollars) {
        self.book(LedgerEntryKind::TripPayment, Some(plate.clone()), cost);
    }

    pub(crate) fn debit_maintenance(&mut self, plate: &Plate, cost: Dollars) {
        self.book(LedgerEntryKind::Maintenance, Some(plate.clone()), -cost);
    }

    pub(crate) fn adjust(&mut self, delta: Dollars) {
        self.book(LedgerEntryKind::Adjustment, None, delta);
    }

    fn book(&mut self, kind: LedgerEntryKind, plate: Option<Plate>, amount: Dollars) {
        self.balance += amount;
        self.ledger.push(LedgerEntry {
            kind,
            plate,
            amount,
        });
    }
}
