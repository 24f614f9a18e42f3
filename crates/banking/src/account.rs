use serde::{Deserialize, Serialize};

/// Mutable account state: a status label and a balance.
///
/// Plain record with no identity and no behavior of its own; all mutation goes
/// through [`crate::EventProcessor`]. A freshly constructed account carries an
/// empty status and a zero balance; opening it is the caller's concern, and
/// no invariant is enforced at construction.
///
/// The balance is conceptually non-negative after any successfully applied
/// withdrawal. That is checked only at withdrawal time, not as a standing
/// invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub(crate) status: String,
    pub(crate) balance: i64,
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Balance in the smallest currency unit (e.g. cents).
    pub fn balance(&self) -> i64 {
        self.balance
    }
}
