pub mod aggregate;

pub use aggregate::{visible_accounts, Account, AccountFilter, AccountForm, StatusFilter};
