//! Single dispatch point for account state transitions.

use tracing::{debug, warn};

use passbook_events::{Event, RawEnvelope};

use crate::account::Account;
use crate::error::{ProcessError, ProcessResult};
use crate::event::{AccountEvent, DepositMoney, OpenAccount, WithdrawMoney};

/// Applies events to accounts.
///
/// Every transition rule lives in the match below, in one auditable table,
/// rather than being distributed across the event types. The processor holds
/// no state: it is freely shareable across unrelated accounts, and exclusive
/// access to a given account during a call is enforced by the `&mut Account`
/// borrow.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventProcessor;

impl EventProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Apply one event to one account, mutating it in place.
    ///
    /// On error the account is left exactly as it was.
    pub fn apply(&self, account: &mut Account, event: &AccountEvent) -> ProcessResult<()> {
        match event {
            AccountEvent::OpenAccount(OpenAccount {
                status,
                initial_balance,
            }) => {
                // Overwrite, not merge: re-opening resets the account.
                account.status = status.clone();
                account.balance = *initial_balance;
            }
            AccountEvent::DepositMoney(DepositMoney { amount, .. }) => {
                account.balance += *amount;
            }
            AccountEvent::WithdrawMoney(WithdrawMoney { amount, .. }) => {
                if *amount > account.balance {
                    let err = ProcessError::insufficient_funds(*amount, account.balance);
                    warn!(event_type = event.event_type(), %err, "event rejected");
                    return Err(err);
                }
                account.balance -= *amount;
            }
        }

        debug!(
            event_type = event.event_type(),
            status = account.status.as_str(),
            balance = account.balance,
            "event applied"
        );
        Ok(())
    }

    /// Apply events in order, stopping at the first failure.
    ///
    /// Events already applied stay applied; there is no rollback.
    pub fn apply_all(&self, account: &mut Account, events: &[AccountEvent]) -> ProcessResult<()> {
        for event in events {
            self.apply(account, event)?;
        }
        Ok(())
    }

    /// Decode a raw envelope by its event-type name, then apply it.
    ///
    /// An unrecognized name yields [`ProcessError::UnknownEvent`] and leaves
    /// the account untouched.
    pub fn apply_envelope(&self, account: &mut Account, envelope: &RawEnvelope) -> ProcessResult<()> {
        let event = AccountEvent::from_raw(envelope)?;
        self.apply(account, &event)
    }
}
