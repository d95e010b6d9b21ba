use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::system::auth::SessionState;

/// Every page of the application, keyed the way the `?page=` query parameter stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageKey {
    Home,
    HsClassification,
    MappingRules,
    ExcelUpload,
    StandardCategories,
    FabricComponents,
    Accounts,
    Unauthorized,
}

impl PageKey {
    pub fn key(&self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::HsClassification => "u501_hs_classification",
            PageKey::MappingRules => "u502_mapping_rules",
            PageKey::ExcelUpload => "u503_excel_upload",
            PageKey::StandardCategories => "a002_standard_category",
            PageKey::FabricComponents => "a003_fabric_component",
            PageKey::Accounts => "a001_account",
            PageKey::Unauthorized => "unauthorized",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageKey::Home => "홈",
            PageKey::HsClassification => "HS코드 분류",
            PageKey::MappingRules => "HS코드 매핑",
            PageKey::ExcelUpload => "엑셀 업로드",
            PageKey::StandardCategories => "의류 카테고리 사전",
            PageKey::FabricComponents => "의류 성분 사전",
            PageKey::Accounts => "계정 코드 관리",
            PageKey::Unauthorized => "접근 권한 없음",
        }
    }

    /// Roles allowed on the page; `None` means public.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            PageKey::Home | PageKey::Unauthorized => None,
            PageKey::HsClassification | PageKey::MappingRules => Some(&[Role::Admin, Role::Client]),
            PageKey::ExcelUpload
            | PageKey::StandardCategories
            | PageKey::FabricComponents
            | PageKey::Accounts => Some(&[Role::Admin]),
        }
    }

    pub fn all() -> Vec<PageKey> {
        vec![
            PageKey::Home,
            PageKey::HsClassification,
            PageKey::MappingRules,
            PageKey::ExcelUpload,
            PageKey::StandardCategories,
            PageKey::FabricComponents,
            PageKey::Accounts,
            PageKey::Unauthorized,
        ]
    }

    /// Pages listed in the navigation for a session.
    pub fn menu_for(session: &SessionState) -> Vec<PageKey> {
        Self::all()
            .into_iter()
            .filter(|p| *p != PageKey::Unauthorized)
            .filter(|p| matches!(authorize(session, *p), Access::Granted))
            .collect()
    }
}

/// Outcome of the route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Not logged in: show the login form.
    Login,
    /// Logged in with the wrong role: go to this page instead.
    Redirect(PageKey),
}

pub fn authorize(session: &SessionState, page: PageKey) -> Access {
    let Some(allowed) = page.allowed_roles() else {
        return Access::Granted;
    };
    if !session.is_authenticated {
        return Access::Login;
    }
    match session.role {
        Some(role) if allowed.contains(&role) => Access::Granted,
        Some(Role::Client) => Access::Redirect(PageKey::HsClassification),
        _ => Access::Redirect(PageKey::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> SessionState {
        SessionState {
            is_authenticated: true,
            access_code: Some("c".into()),
            access_token: Some("t".into()),
            role: Some(role),
            error: None,
        }
    }

    #[test]
    fn test_public_pages() {
        assert_eq!(authorize(&SessionState::default(), PageKey::Home), Access::Granted);
    }

    #[test]
    fn test_anonymous_goes_to_login() {
        assert_eq!(
            authorize(&SessionState::default(), PageKey::HsClassification),
            Access::Login
        );
    }

    #[test]
    fn test_client_is_redirected_to_classification() {
        let client = session(Role::Client);
        assert_eq!(authorize(&client, PageKey::HsClassification), Access::Granted);
        assert_eq!(
            authorize(&client, PageKey::Accounts),
            Access::Redirect(PageKey::HsClassification)
        );
    }

    #[test]
    fn test_admin_sees_everything() {
        let admin = session(Role::Admin);
        assert!(PageKey::all()
            .into_iter()
            .all(|p| authorize(&admin, p) == Access::Granted));
        assert!(!PageKey::menu_for(&admin).contains(&PageKey::Unauthorized));
    }

    #[test]
    fn test_key_round_trip() {
        for page in PageKey::all() {
            assert_eq!(PageKey::from_key(page.key()), Some(page));
        }
        assert_eq!(PageKey::from_key("nope"), None);
    }
}
