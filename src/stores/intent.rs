// ============================================================================
// COURSE INTENT - deferred "open course" click across the login modal
// ============================================================================
// In-memory counterpart of the durable intended route: a course tapped
// without a session is remembered for the lifetime of the tab (not across a
// reload) and opened when the login that the tap provoked completes.
// ============================================================================

use std::cell::RefCell;

use crate::events::AppEvent;

/// What the catalogue should do with a course click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CourseAccess {
    /// Session present: open the course now.
    Open(u64),
    /// No session: the id is captured and the caller prompts login.
    Deferred,
}

/// Resolves a course click against the session. Without a session the id is
/// captured for later; a second click overwrites the first.
pub fn resolve_course_click(
    intent: &RefCell<Option<u64>>,
    authenticated: bool,
    course_id: u64,
) -> CourseAccess {
    if authenticated {
        CourseAccess::Open(course_id)
    } else {
        *intent.borrow_mut() = Some(course_id);
        CourseAccess::Deferred
    }
}

/// Consumes the captured course when, and only when, a login completes.
/// At most one caller ever sees it.
pub fn consume_course_intent(intent: &RefCell<Option<u64>>, event: &AppEvent) -> Option<u64> {
    if *event == AppEvent::LoginSucceeded {
        intent.borrow_mut().take()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_sin_sesion_captura_y_difiere() {
        let intent = RefCell::new(None);
        assert_eq!(resolve_course_click(&intent, false, 7), CourseAccess::Deferred);
        assert_eq!(*intent.borrow(), Some(7));
        // El segundo tap pisa al primero.
        assert_eq!(resolve_course_click(&intent, false, 9), CourseAccess::Deferred);
        assert_eq!(*intent.borrow(), Some(9));
    }

    #[test]
    fn click_con_sesion_abre_sin_capturar() {
        let intent = RefCell::new(None);
        assert_eq!(resolve_course_click(&intent, true, 7), CourseAccess::Open(7));
        assert_eq!(*intent.borrow(), None);
    }

    #[test]
    fn solo_login_succeeded_consume_el_intent() {
        let intent = RefCell::new(Some(7));
        assert_eq!(consume_course_intent(&intent, &AppEvent::SessionExpired), None);
        assert_eq!(*intent.borrow(), Some(7));

        assert_eq!(consume_course_intent(&intent, &AppEvent::LoginSucceeded), Some(7));
        // Consumido: un segundo login no reabre nada.
        assert_eq!(consume_course_intent(&intent, &AppEvent::LoginSucceeded), None);
    }
}
