// ============================================================
// 🧩 APP - router + sesión + overlays globales
// ============================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{LoginModal, ToastHost};
use crate::events::AppEvent;
use crate::hooks::{use_app_events, SessionProvider};
use crate::routes::{self, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <AppShell />
            </SessionProvider>
        </BrowserRouter>
    }
}

/// El modal de login vive aquí para poder abrirse desde cualquier pantalla
/// cuando expira la sesión.
#[function_component(AppShell)]
fn app_shell() -> Html {
    let show_login = use_state(|| false);

    {
        let show_login = show_login.clone();
        use_app_events(Callback::from(move |event: AppEvent| {
            if event == AppEvent::SessionExpired {
                show_login.set(true);
            }
        }));
    }

    let on_close_login = {
        let show_login = show_login.clone();
        Callback::from(move |_| show_login.set(false))
    };

    html! {
        <div class="app">
            <Switch<Route> render={routes::switch} />
            <ToastHost />
            <LoginModal open={*show_login} on_close={on_close_login} />
        </div>
    }
}
