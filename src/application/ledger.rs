use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::domain::account::{Account, AccountId, lock_ordered};
use crate::error::{Result, TransferError};

/// The in-memory account store.
///
/// Owns every account and the id sequence for the lifetime of the process.
/// The map lock covers only lookup and insertion; balances live behind
/// per-account guards, so operations on disjoint accounts never contend.
pub struct Ledger {
    accounts: RwLock<HashMap<AccountId, Arc<Account>>>,
    last_id: AtomicU64,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            last_id: AtomicU64::new(0),
        }
    }

    /// Opens an account with the given starting balance and returns its id.
    ///
    /// Always succeeds. Ids are dense, strictly increasing from 1, and never
    /// reused; the id is reserved before the account becomes visible. The
    /// starting balance is taken as-is, a negative opening amount is allowed.
    pub fn create(&self, start_amount: i64) -> AccountId {
        let id = self.last_id.fetch_add(1, Ordering::Relaxed) + 1;
        let account = Arc::new(Account::new(id, start_amount));
        self.accounts.write().insert(id, account);
        id
    }

    /// Returns the current balance, or `None` if the account does not exist.
    ///
    /// The read takes the account's guard, so it cannot overlap a transfer
    /// touching the same account.
    pub fn balance(&self, id: AccountId) -> Option<i64> {
        let account = self.account(id)?;
        let balance = *account.lock();
        Some(balance)
    }

    /// Moves `amount` from `from` to `to` as one atomic step.
    ///
    /// Preconditions, all checked before any mutation:
    /// - `amount` must be strictly positive,
    /// - both accounts must exist,
    /// - `from` must cover `amount` at the moment both guards are held.
    ///
    /// On any failure both balances stay exactly as they were. A transfer
    /// from an account to itself runs the same checks under a single guard
    /// and leaves the balance unchanged.
    pub fn transfer(&self, from: AccountId, to: AccountId, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(TransferError::InvalidAmount(amount));
        }
        let source = self
            .account(from)
            .ok_or(TransferError::AccountNotFound(from))?;
        let dest = self.account(to).ok_or(TransferError::AccountNotFound(to))?;

        if from == to {
            // One guard; the debit and credit would cancel out.
            let balance = source.lock();
            if *balance < amount {
                return Err(TransferError::InsufficientFunds(from));
            }
            return Ok(());
        }

        let (mut src_balance, mut dst_balance) = lock_ordered(&source, &dest);
        // The balance may have moved between lookup and acquisition, so the
        // funds check only counts once both guards are held.
        if *src_balance < amount {
            return Err(TransferError::InsufficientFunds(from));
        }
        *src_balance -= amount;
        *dst_balance += amount;
        Ok(())
    }

    fn account(&self, id: AccountId) -> Option<Arc<Account>> {
        self.accounts.read().get(&id).cloned()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
