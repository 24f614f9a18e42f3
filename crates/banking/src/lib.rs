//! Banking domain module (event-sourced, in-memory).
//!
//! Business rules for the account entity, implemented purely as deterministic
//! domain logic: no IO, no HTTP, no storage. An [`Account`] is mutated
//! exclusively by the [`EventProcessor`], which dispatches on the closed
//! [`AccountEvent`] sum type.

pub mod account;
pub mod error;
pub mod event;
pub mod processor;

pub use account::Account;
pub use error::{ProcessError, ProcessResult};
pub use event::{AccountEvent, DepositMoney, OpenAccount, WithdrawMoney};
pub use processor::EventProcessor;
