use contracts::domain::a001_account::{visible_accounts, Account, AccountFilter};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct AccountListState {
    /// Accounts as fetched, built-in administrator included.
    pub accounts: Vec<Account>,
    /// Values in the search panel, not yet applied.
    pub draft: AccountFilter,
    /// Filter behind the rendered rows.
    pub applied: AccountFilter,
    pub is_loaded: bool,
    pub error: Option<String>,
    /// Id of the row whose code was just copied.
    pub copied: Option<i64>,
}

impl AccountListState {
    pub fn rows(&self) -> Vec<Account> {
        self.applied.apply(&visible_accounts(self.accounts.clone()))
    }
}

pub fn create_state() -> RwSignal<AccountListState> {
    RwSignal::new(AccountListState::default())
}
