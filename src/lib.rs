pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use application::ledger::Ledger;
pub use domain::account::AccountId;
pub use error::TransferError;
