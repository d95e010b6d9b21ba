use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::shared::error::ApiError;

/// Built-in account that never shows up in the management list.
pub const BUILTIN_ADMIN_CODE: &str = "admin123";

pub const EMPTY_FIELDS_MESSAGE: &str = "정보를 모두 입력해주세요";
pub const DUPLICATE_CODE_MESSAGE: &str = "이미 등록된 코드입니다.";
pub const SAVE_FAILED_MESSAGE: &str = "계정 저장에 실패했습니다.";

/// Access-code account (customer or administrator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    /// Customer name
    pub name: String,
    /// Access code typed on the login page
    pub code: String,
    pub role: Role,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

impl Account {
    /// Form pre-filled for editing this account.
    pub fn to_form(&self) -> AccountForm {
        AccountForm {
            name: self.name.clone(),
            code: self.code.clone(),
            role: self.role,
            is_active: self.is_active,
        }
    }

    /// Same account with the active flag flipped, ready to send as an update.
    pub fn toggled(&self) -> AccountForm {
        AccountForm {
            is_active: !self.is_active,
            ..self.to_form()
        }
    }
}

/// Body of create and update calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountForm {
    pub name: String,
    pub code: String,
    pub role: Role,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            role: Role::Client,
            is_active: true,
        }
    }
}

impl AccountForm {
    /// Check the form before saving. `editing` is the id being updated, if any;
    /// duplicate codes are only checked on create.
    pub fn validate(&self, existing: &[Account], editing: Option<i64>) -> Result<(), ApiError> {
        if self.name.trim().is_empty() || self.code.trim().is_empty() {
            return Err(ApiError::validation(EMPTY_FIELDS_MESSAGE));
        }
        if editing.is_none() {
            let code = self.code.trim();
            if existing.iter().any(|a| a.code == code) {
                return Err(ApiError::validation(DUPLICATE_CODE_MESSAGE));
            }
        }
        Ok(())
    }
}

/// Drop the built-in administrator from a fetched list.
pub fn visible_accounts(accounts: Vec<Account>) -> Vec<Account> {
    accounts
        .into_iter()
        .filter(|a| a.code != BUILTIN_ADMIN_CODE)
        .collect()
}

/// Map a failed save to the message shown in the dialog.
pub fn save_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Validation(message) => message.clone(),
        ApiError::Backend { message, .. } if is_duplicate_detail(message) => {
            DUPLICATE_CODE_MESSAGE.to_string()
        }
        other => other.user_message(SAVE_FAILED_MESSAGE),
    }
}

fn is_duplicate_detail(detail: &str) -> bool {
    detail.contains("duplicate") || detail.contains("already exists") || detail.contains("중복")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }
}

/// Search panel of the account list. Applied on button press and after every reload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountFilter {
    pub status: StatusFilter,
    /// `None` means every role.
    pub role: Option<Role>,
    pub code: String,
    pub name: String,
}

impl AccountFilter {
    pub fn matches(&self, account: &Account) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => account.is_active,
            StatusFilter::Inactive => !account.is_active,
        };
        let role_ok = self.role.map_or(true, |r| account.role == r);
        status_ok
            && role_ok
            && contains_ignore_case(&account.code, &self.code)
            && contains_ignore_case(&account.name, &self.name)
    }

    pub fn apply(&self, accounts: &[Account]) -> Vec<Account> {
        accounts.iter().filter(|a| self.matches(a)).cloned().collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.trim().is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64, name: &str, code: &str, role: Role, active: bool) -> Account {
        Account {
            id,
            name: name.into(),
            code: code.into(),
            role,
            is_active: active,
            created_at: "2024-01-01T00:00:00".into(),
            updated_at: None,
        }
    }

    fn sample() -> Vec<Account> {
        vec![
            account(1, "Admin", BUILTIN_ADMIN_CODE, Role::Admin, true),
            account(2, "Acme Apparel", "ACME-01", Role::Client, true),
            account(3, "Blue Knit", "BK-77", Role::Client, false),
            account(4, "Ops", "OPS-1", Role::Admin, true),
        ]
    }

    #[test]
    fn test_builtin_admin_is_hidden() {
        let visible = visible_accounts(sample());
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|a| a.code != BUILTIN_ADMIN_CODE));
    }

    #[test]
    fn test_filters_combine() {
        let accounts = visible_accounts(sample());
        let filter = AccountFilter {
            status: StatusFilter::Active,
            role: Some(Role::Client),
            ..AccountFilter::default()
        };
        let found = filter.apply(&accounts);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "ACME-01");

        let by_name = AccountFilter {
            name: "knit".into(),
            ..AccountFilter::default()
        };
        assert_eq!(by_name.apply(&accounts)[0].id, 3);

        let by_code = AccountFilter {
            code: "ops".into(),
            status: StatusFilter::Inactive,
            ..AccountFilter::default()
        };
        assert!(by_code.apply(&accounts).is_empty());
    }

    #[test]
    fn test_validate_form() {
        let accounts = sample();
        let blank = AccountForm {
            name: "  ".into(),
            code: "X".into(),
            ..AccountForm::default()
        };
        assert_eq!(
            blank.validate(&accounts, None),
            Err(ApiError::validation(EMPTY_FIELDS_MESSAGE))
        );

        let duplicate = AccountForm {
            name: "New".into(),
            code: " BK-77 ".into(),
            ..AccountForm::default()
        };
        assert_eq!(
            duplicate.validate(&accounts, None),
            Err(ApiError::validation(DUPLICATE_CODE_MESSAGE))
        );
        assert!(duplicate.validate(&accounts, Some(3)).is_ok());
    }

    #[test]
    fn test_save_error_message() {
        assert_eq!(
            save_error_message(&ApiError::backend(400, "code already exists")),
            DUPLICATE_CODE_MESSAGE
        );
        assert_eq!(
            save_error_message(&ApiError::backend(400, "이름이 너무 깁니다")),
            "이름이 너무 깁니다"
        );
        assert_eq!(
            save_error_message(&ApiError::Network("offline".into())),
            SAVE_FAILED_MESSAGE
        );
    }

    #[test]
    fn test_toggled() {
        let acc = account(2, "Acme", "ACME", Role::Client, true);
        let form = acc.toggled();
        assert!(!form.is_active);
        assert_eq!(form.code, "ACME");
    }

    #[test]
    fn test_wire_names() {
        let json = r#"{"id":5,"name":"n","code":"c","role":"client","isActive":false,"createdAt":"t","updatedAt":null}"#;
        let parsed: Account = serde_json::from_str(json).unwrap();
        assert!(!parsed.is_active);
        assert!(parsed.updated_at.is_none());
    }
}
