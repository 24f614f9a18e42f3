use serde::{Deserialize, Serialize};

use passbook_events::{Event, RawEnvelope};

use crate::error::ProcessError;

/// Stable event-type name for [`OpenAccount`].
pub const OPEN_ACCOUNT_TYPE: &str = "banking.account.open_account";
/// Stable event-type name for [`DepositMoney`].
pub const DEPOSIT_MONEY_TYPE: &str = "banking.account.deposit_money";
/// Stable event-type name for [`WithdrawMoney`].
pub const WITHDRAW_MONEY_TYPE: &str = "banking.account.withdraw_money";

/// Event: OpenAccount.
///
/// Not additive: applying it overwrites status and balance unconditionally,
/// even on an already-open account. Re-opening is a reset, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAccount {
    pub status: String,
    pub initial_balance: i64,
}

/// Event: DepositMoney.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositMoney {
    pub amount: i64,
    /// Descriptive label; not consulted by the transition logic.
    pub description: Option<String>,
}

/// Event: WithdrawMoney.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawMoney {
    pub amount: i64,
    /// Descriptive label; not consulted by the transition logic.
    pub description: Option<String>,
    /// Payout channel (e.g. "bank_transfer"); not consulted by the transition
    /// logic.
    pub method: Option<String>,
}

/// The closed set of events an account understands.
///
/// Matched exhaustively by the processor, so adding a variant forces a new
/// match arm at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountEvent {
    OpenAccount(OpenAccount),
    DepositMoney(DepositMoney),
    WithdrawMoney(WithdrawMoney),
}

impl Event for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::OpenAccount(_) => OPEN_ACCOUNT_TYPE,
            AccountEvent::DepositMoney(_) => DEPOSIT_MONEY_TYPE,
            AccountEvent::WithdrawMoney(_) => WITHDRAW_MONEY_TYPE,
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl AccountEvent {
    /// Decode a raw envelope into a typed event.
    ///
    /// The envelope's event-type name is the dispatch authority; the payload
    /// only has to match that variant's shape. An unrecognized name yields
    /// [`ProcessError::UnknownEvent`] carrying the offending name.
    pub fn from_raw(envelope: &RawEnvelope) -> Result<Self, ProcessError> {
        let payload = envelope.payload().clone();
        match envelope.event_type() {
            OPEN_ACCOUNT_TYPE => serde_json::from_value(payload)
                .map(AccountEvent::OpenAccount)
                .map_err(|e| ProcessError::invalid_payload(OPEN_ACCOUNT_TYPE, e.to_string())),
            DEPOSIT_MONEY_TYPE => serde_json::from_value(payload)
                .map(AccountEvent::DepositMoney)
                .map_err(|e| ProcessError::invalid_payload(DEPOSIT_MONEY_TYPE, e.to_string())),
            WITHDRAW_MONEY_TYPE => serde_json::from_value(payload)
                .map(AccountEvent::WithdrawMoney)
                .map_err(|e| ProcessError::invalid_payload(WITHDRAW_MONEY_TYPE, e.to_string())),
            other => Err(ProcessError::unknown_event(other)),
        }
    }
}
