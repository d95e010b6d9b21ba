use contracts::system::auth::{login_failure_message, SessionState};
use leptos::prelude::*;

use super::{api, storage};

/// Auth context provider component
///
/// Restores the session saved by a previous visit and keeps `localStorage`
/// in step with every change.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (session, set_session) = signal(storage::load_session());

    Effect::new(move |_| {
        session.with(storage::save_session);
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session
pub fn use_auth() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session =
        use_context::<ReadSignal<SessionState>>().expect("AuthProvider not found in component tree");
    let set_session =
        use_context::<WriteSignal<SessionState>>().expect("AuthProvider not found in component tree");

    (session, set_session)
}

/// Validate `code` and store the resulting session.
///
/// On failure the previous session stays, with `error` set to the message
/// that is also returned.
pub async fn do_login(code: String, set_session: WriteSignal<SessionState>) -> Result<(), String> {
    match api::validate_code(&code).await {
        Ok(response) => {
            log::info!(
                "logged in with code '{}' as {}",
                response.access_code,
                response.role.code()
            );
            set_session.set(SessionState::authenticated(response));
            Ok(())
        }
        Err(e) => {
            let message = login_failure_message(&e);
            log::warn!("login failed: {}", e);
            set_session.update(|current| {
                let next = SessionState::failed(current, message.clone());
                *current = next;
            });
            Err(message)
        }
    }
}

pub fn do_logout(set_session: WriteSignal<SessionState>) {
    storage::clear_session();
    set_session.set(SessionState::default());
    log::info!("logged out");
}
