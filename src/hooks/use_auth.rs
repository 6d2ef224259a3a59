// ============================================================
// 🔐 SESIÓN - contexto de autenticación compartido
// ============================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::events::{self, AppEvent};
use crate::models::{Account, AuthSession};
use crate::routes::{self, Route};
use crate::stores::session::{self, Destination, SessionState};
use crate::utils::LocalStorage;

/// Handle compartido vía context. Todo componente bajo `SessionProvider`
/// puede leer el estado de sesión y disparar login/logout.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    state: UseStateHandle<SessionState>,
    pub login: Callback<AuthSession>,
    pub logout: Callback<()>,
}

impl SessionHandle {
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&Account> {
        match &*self.state {
            SessionState::Authenticated { user } => Some(user),
            _ => None,
        }
    }

    pub fn is_restoring(&self) -> bool {
        matches!(*self.state, SessionState::Restoring)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state, SessionState::Authenticated { .. })
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_state(|| SessionState::Restoring);
    let navigator = use_navigator().expect("SessionProvider debe vivir bajo un Router");

    // Restauración silenciosa al montar. Nunca emite LoginSucceeded:
    // los intents diferidos sólo se consumen en un login interactivo.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            match session::restore(&LocalStorage) {
                Some((_token, user)) => {
                    log::info!("✅ Sesión restaurada: {}", user.email);
                    state.set(SessionState::Authenticated { user });
                }
                None => state.set(SessionState::Unauthenticated),
            }
            || ()
        });
    }

    let login = {
        let state = state.clone();
        let navigator = navigator.clone();
        Callback::from(move |auth: AuthSession| {
            session::persist_login(&LocalStorage, &auth);
            let role = auth.user.role;
            log::info!("✅ Login exitoso: {}", auth.user.email);
            state.set(SessionState::Authenticated { user: auth.user });
            events::publish(AppEvent::LoginSucceeded);
            match session::post_login_destination(&LocalStorage, role) {
                Destination::Intended(path) => routes::navigate_to_path(&navigator, &path),
                Destination::Dashboard => navigator.push(&Route::Dashboard),
                Destination::Home => navigator.push(&Route::Home),
            }
        })
    };

    let logout = {
        let state = state.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session::clear_all(&LocalStorage);
            state.set(SessionState::Unauthenticated);
            log::info!("👋 Sesión cerrada");
            navigator.push(&Route::Home);
        })
    };

    let handle = SessionHandle { state, login, logout };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_auth() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_auth requiere SessionProvider")
}

/// Suscribe el componente al bus de eventos mientras esté montado.
#[hook]
pub fn use_app_events(callback: Callback<AppEvent>) {
    use_effect_with(callback, |callback| {
        let subscription = events::subscribe(callback.clone());
        move || drop(subscription)
    });
}
