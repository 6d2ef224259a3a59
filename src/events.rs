// ============================================================================
// EVENT BUS - typed in-process broadcast signals
// ============================================================================
// Replaces window CustomEvents with a typed publish/subscribe bus. Three
// signals exist: session expiry (doubles as "show the login modal"), login
// success (resumes deferred intents), and api errors (toast notifications).
// ============================================================================

use std::cell::{Cell, RefCell};

use yew::Callback;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// The session is gone (401, or a guard blocked an anonymous visitor).
    /// Listeners show the login modal; the publisher already cleared storage.
    SessionExpired,
    /// An explicit login completed. Never fired on session restore, so
    /// deferred-intent listeners do not trigger on page reload.
    LoginSucceeded,
    /// A request failed and this is the message the user should see.
    ApiError(String),
}

thread_local! {
    static LISTENERS: RefCell<Vec<(usize, Callback<AppEvent>)>> = RefCell::new(Vec::new());
    static NEXT_ID: Cell<usize> = Cell::new(0);
}

/// RAII handle for a bus subscription; dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let id = self.id;
        LISTENERS.with(|listeners| listeners.borrow_mut().retain(|(other, _)| *other != id));
    }
}

pub fn subscribe(callback: Callback<AppEvent>) -> Subscription {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    LISTENERS.with(|listeners| listeners.borrow_mut().push((id, callback)));
    Subscription { id }
}

/// Delivers `event` to every live subscriber. Listeners may publish or
/// (un)subscribe during delivery; they see a snapshot of the list taken here.
pub fn publish(event: AppEvent) {
    let snapshot: Vec<Callback<AppEvent>> =
        LISTENERS.with(|listeners| listeners.borrow().iter().map(|(_, cb)| cb.clone()).collect());
    for callback in snapshot {
        callback.emit(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recording_listener() -> (Rc<RefCell<Vec<AppEvent>>>, Callback<AppEvent>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let callback = Callback::from(move |event| sink.borrow_mut().push(event));
        (seen, callback)
    }

    #[test]
    fn subscriber_receives_published_events() {
        let (seen, callback) = recording_listener();
        let _sub = subscribe(callback);

        publish(AppEvent::LoginSucceeded);
        publish(AppEvent::ApiError("boom".into()));

        let seen = seen.borrow();
        assert!(seen.contains(&AppEvent::LoginSucceeded));
        assert!(seen.contains(&AppEvent::ApiError("boom".into())));
    }

    #[test]
    fn dropping_the_subscription_stops_delivery() {
        let (seen, callback) = recording_listener();
        let sub = subscribe(callback);
        publish(AppEvent::SessionExpired);
        drop(sub);
        publish(AppEvent::SessionExpired);

        let count = seen
            .borrow()
            .iter()
            .filter(|e| **e == AppEvent::SessionExpired)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn publishing_from_a_listener_does_not_panic() {
        let relay = Callback::from(|event| {
            if event == AppEvent::SessionExpired {
                publish(AppEvent::ApiError("cascade".into()));
            }
        });
        let _sub = subscribe(relay);
        publish(AppEvent::SessionExpired);
    }
}
