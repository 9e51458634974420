use serde::{Deserialize, Serialize};

use crate::domain::account::AccountId;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub amount: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateAccountResponse {
    pub id: AccountId,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: i64,
}
