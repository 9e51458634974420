use thiserror::Error;

use crate::domain::account::AccountId;

pub type Result<T> = std::result::Result<T, TransferError>;

/// Ways a transfer can be refused.
///
/// All variants are caller errors: they are reported synchronously, leave
/// every balance untouched, and are not logged as faults.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferError {
    #[error("cannot transfer non-positive amount: {0}")]
    InvalidAmount(i64),
    #[error("account not found: {0}")]
    AccountNotFound(AccountId),
    #[error("not enough money in account: {0}")]
    InsufficientFunds(AccountId),
}
