use parking_lot::{Mutex, MutexGuard};

/// Unique account identifier. Assigned from a shared counter, starting at 1,
/// never reused.
pub type AccountId = u64;

/// An account: a fixed identifier and a balance behind its own guard.
///
/// The balance is the only mutable state. All reads and writes go through
/// [`Account::lock`], so an observer sees either the pre-transfer or the
/// post-transfer value, never anything in between.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    balance: Mutex<i64>,
}

impl Account {
    pub fn new(id: AccountId, balance: i64) -> Self {
        Self {
            id,
            balance: Mutex::new(balance),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Acquires exclusive access to the balance.
    pub fn lock(&self) -> MutexGuard<'_, i64> {
        self.balance.lock()
    }
}

/// Acquires the guards of two distinct accounts, lower id first.
///
/// The guards come back in the order the accounts were passed, so callers
/// keep thinking in terms of source and destination while the acquisition
/// order stays fixed process-wide. Two transfers racing over the same pair
/// in opposite directions both contend for the lower id before the higher
/// one, which rules out lock-ordering deadlock.
///
/// Callers must handle `a.id() == b.id()` before getting here; the guards
/// are not reentrant.
pub fn lock_ordered<'a>(
    a: &'a Account,
    b: &'a Account,
) -> (MutexGuard<'a, i64>, MutexGuard<'a, i64>) {
    debug_assert_ne!(a.id, b.id);
    if a.id < b.id {
        let first = a.lock();
        let second = b.lock();
        (first, second)
    } else {
        let second = b.lock();
        let first = a.lock();
        (first, second)
    }
}
