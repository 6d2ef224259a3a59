// ============================================================
// 🛡️ ROUTE GUARD - control de acceso por rol
// ============================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::events::{self, AppEvent};
use crate::models::Role;
use crate::routes::Route;
use crate::stores::session;
use crate::utils::LocalStorage;

/// Decisión del guard. Separada del componente para poder testearla
/// sin DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    RedirectHome,
    PromptLogin,
}

/// Sin sesión nunca se renderiza el contenido protegido, aunque la lista
/// de roles esté vacía. Lista vacía = cualquier usuario autenticado.
pub fn evaluate(session_role: Option<Role>, allowed_roles: &[Role]) -> GuardOutcome {
    match session_role {
        None => GuardOutcome::PromptLogin,
        Some(role) if allowed_roles.is_empty() || allowed_roles.contains(&role) => {
            GuardOutcome::Render
        }
        Some(_) => GuardOutcome::RedirectHome,
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    #[prop_or_default]
    pub allowed_roles: Vec<Role>,
    pub children: Children,
}

/// Envuelve contenido protegido. Relee el storage en cada evaluación,
/// así un guard anidado revalida aunque el padre ya haya dejado pasar.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let location = use_location();
    let current_path = location
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    let session_role = session::restore(&LocalStorage).map(|(_, user)| user.role);
    let outcome = evaluate(session_role, &props.allowed_roles);

    {
        let outcome = outcome.clone();
        use_effect_with((outcome, current_path), |(outcome, path)| {
            if *outcome == GuardOutcome::PromptLogin {
                log::info!("🔒 Acceso sin sesión a {}, pidiendo login", path);
                session::remember_intended_route(&LocalStorage, path);
                events::publish(AppEvent::SessionExpired);
            }
            || ()
        });
    }

    match outcome {
        GuardOutcome::Render => html! { <>{ props.children.clone() }</> },
        GuardOutcome::RedirectHome => html! { <Redirect<Route> to={Route::Home} /> },
        GuardOutcome::PromptLogin => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_sesion_nunca_renderiza() {
        assert_eq!(evaluate(None, &[]), GuardOutcome::PromptLogin);
        assert_eq!(evaluate(None, &[Role::Admin]), GuardOutcome::PromptLogin);
    }

    #[test]
    fn lista_vacia_admite_cualquier_autenticado() {
        assert_eq!(evaluate(Some(Role::Student), &[]), GuardOutcome::Render);
        assert_eq!(evaluate(Some(Role::Admin), &[]), GuardOutcome::Render);
    }

    #[test]
    fn rol_fuera_de_lista_redirige_a_home() {
        let admin_only = [Role::Admin];
        assert_eq!(evaluate(Some(Role::Staff), &admin_only), GuardOutcome::RedirectHome);
        assert_eq!(evaluate(Some(Role::Student), &admin_only), GuardOutcome::RedirectHome);
        assert_eq!(evaluate(Some(Role::Admin), &admin_only), GuardOutcome::Render);
    }

    #[test]
    fn staff_y_admin_comparten_dashboard() {
        let staff_level = [Role::Admin, Role::Staff];
        assert_eq!(evaluate(Some(Role::Staff), &staff_level), GuardOutcome::Render);
        assert_eq!(evaluate(Some(Role::Admin), &staff_level), GuardOutcome::Render);
        assert_eq!(evaluate(Some(Role::Student), &staff_level), GuardOutcome::RedirectHome);
    }
}
