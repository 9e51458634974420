use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ledger::Ledger;
use crate::domain::account::AccountId;

use super::dto::{BalanceResponse, CreateAccountRequest, CreateAccountResponse, TransferRequest};
use super::errors;

pub async fn create_account(
    Extension(ledger): Extension<Arc<Ledger>>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(json) => json,
        Err(rejection) => return errors::bad_request(rejection.body_text()),
    };
    let id = ledger.create(request.amount);
    (StatusCode::CREATED, Json(CreateAccountResponse { id })).into_response()
}

pub async fn get_account(
    Extension(ledger): Extension<Arc<Ledger>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<AccountId>() else {
        return errors::bad_request(format!("wrong account id: {id}"));
    };
    match ledger.balance(id) {
        Some(amount) => (StatusCode::OK, Json(BalanceResponse { amount })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn transfer(
    Extension(ledger): Extension<Arc<Ledger>>,
    body: Result<Json<TransferRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(json) => json,
        Err(rejection) => return errors::bad_request(rejection.body_text()),
    };
    match ledger.transfer(request.from, request.to, request.amount) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => errors::bad_request(err.to_string()),
    }
}
