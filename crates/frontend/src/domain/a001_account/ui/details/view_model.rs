use crate::domain::a001_account::api;
use contracts::domain::a001_account::aggregate::save_error_message;
use contracts::domain::a001_account::{Account, AccountForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Create/edit form of one account.
#[derive(Clone, Copy)]
pub struct AccountDetailsViewModel {
    pub form: RwSignal<AccountForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl AccountDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AccountForm::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Fresh form for a new account, or the fields of `account`.
    pub fn reset(&self, account: Option<&Account>) {
        self.form
            .set(account.map(Account::to_form).unwrap_or_default());
        self.error.set(None);
        self.saving.set(false);
    }

    pub fn save_command(
        &self,
        existing: Vec<Account>,
        editing: Option<i64>,
        on_saved: impl Fn() + 'static,
    ) {
        if self.saving.get_untracked() {
            return;
        }
        let form = self.form.get_untracked();
        if let Err(e) = form.validate(&existing, editing) {
            self.error.set(Some(save_error_message(&e)));
            return;
        }

        self.saving.set(true);
        self.error.set(None);
        let (error, saving) = (self.error, self.saving);
        spawn_local(async move {
            let result = match editing {
                Some(id) => api::update_account(id, &form).await,
                None => api::create_account(&form).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("a001: saved account {}", saved.id);
                    on_saved();
                }
                Err(e) => {
                    log::error!("a001: save failed: {}", e);
                    error.set(Some(save_error_message(&e)));
                }
            }
        });
    }
}

impl Default for AccountDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
