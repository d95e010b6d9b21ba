use contracts::system::auth::{SessionState, SESSION_STORAGE_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Session persisted by a previous visit, or a logged-out one.
pub fn load_session() -> SessionState {
    let raw = get_local_storage().and_then(|s| s.get_item(SESSION_STORAGE_KEY).ok().flatten());
    SessionState::restore(raw.as_deref())
}

/// Persist an authenticated session. Anything else clears the stored one.
pub fn save_session(session: &SessionState) {
    if !session.is_authenticated {
        clear_session();
        return;
    }
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            let _ = storage.set_item(SESSION_STORAGE_KEY, &json);
        }
        Err(e) => log::error!("failed to serialize session: {}", e),
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

/// `Authorization` header value for the stored session.
pub fn bearer() -> Option<String> {
    load_session().bearer()
}
