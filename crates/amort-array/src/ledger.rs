//! Credit bookkeeping for the accounting method of amortized analysis.
//!
//! Every array operation charges a fixed number of credits up front and
//! spends one credit per primitive step it performs (a write, a removal, or
//! one element copied during a resize). If the charges are sufficient, the
//! balance never dips below zero between operations, which proves the
//! amortized O(1) bound.

/// Running credit balance with charge/spend totals and a low-water mark.
///
/// Invariant: `balance == charged - spent` at all times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreditLedger {
    balance: i64,
    charged: i64,
    spent: i64,
    /// Lowest balance observed at a `settle()` point.
    low_water: i64,
    /// Number of completed operations.
    settled: u64,
}

impl CreditLedger {
    /// Create an empty ledger with a zero balance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `credits` to the balance.
    pub fn charge(&mut self, credits: i64) {
        self.charged += credits;
        self.balance += credits;
    }

    /// Deduct `credits` from the balance.
    ///
    /// The balance may go negative mid-operation; only the value at the
    /// next [`settle`](Self::settle) counts toward the low-water mark.
    pub fn spend(&mut self, credits: i64) {
        self.spent += credits;
        self.balance -= credits;
    }

    /// Mark the end of one complete operation.
    ///
    /// Records the low-water mark. Debug builds report an insolvent balance
    /// on stderr; this can only happen with non-default charges.
    pub fn settle(&mut self) {
        self.settled += 1;
        if self.balance < self.low_water {
            self.low_water = self.balance;
        }
        if cfg!(debug_assertions) && self.balance < 0 {
            eprintln!(
                "amort-array: credit balance {} after operation {} (charged {}, spent {})",
                self.balance, self.settled, self.charged, self.spent,
            );
        }
    }

    /// Current balance.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Total credits charged since creation.
    pub fn charged(&self) -> i64 {
        self.charged
    }

    /// Total credits spent since creation.
    pub fn spent(&self) -> i64 {
        self.spent
    }

    /// Lowest balance observed after any completed operation (0 if none).
    pub fn low_water(&self) -> i64 {
        self.low_water
    }

    /// Number of operations settled so far.
    pub fn settled(&self) -> u64 {
        self.settled
    }

    /// Whether the balance has stayed non-negative after every operation.
    pub fn is_solvent(&self) -> bool {
        self.low_water >= 0
    }
}
