// ============================================================
// 🍞 TOASTS - notificaciones efímeras
// ============================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::events::{self, AppEvent};

const DISMISS_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Warning => "toast toast-warning",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Warning => "⚠️",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

thread_local! {
    static HOST: RefCell<Option<Callback<ToastMessage>>> = RefCell::new(None);
}

pub fn success(text: impl Into<String>) {
    show(ToastKind::Success, text.into());
}

pub fn error(text: impl Into<String>) {
    show(ToastKind::Error, text.into());
}

pub fn warning(text: impl Into<String>) {
    show(ToastKind::Warning, text.into());
}

fn show(kind: ToastKind, text: String) {
    let delivered = HOST.with(|host| {
        if let Some(callback) = &*host.borrow() {
            callback.emit(ToastMessage { kind, text: text.clone() });
            true
        } else {
            false
        }
    });
    if !delivered {
        log::warn!("🔕 Toast sin host montado: {}", text);
    }
}

#[derive(Default, PartialEq)]
struct ToastList {
    items: Vec<(usize, ToastMessage)>,
}

enum ToastAction {
    Push(usize, ToastMessage),
    Dismiss(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        match action {
            ToastAction::Push(id, message) => {
                let mut items = self.items.clone();
                items.push((id, message));
                Rc::new(ToastList { items })
            }
            ToastAction::Dismiss(id) => {
                let items = self
                    .items
                    .iter()
                    .filter(|(toast_id, _)| *toast_id != id)
                    .cloned()
                    .collect();
                Rc::new(ToastList { items })
            }
        }
    }
}

/// Host único. Se registra al montar y además puentea los errores de API
/// del bus de eventos hacia un toast de error.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let toasts = use_reducer(ToastList::default);
    let counter = use_mut_ref(|| 0usize);

    {
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            let on_toast = {
                let toasts = toasts.clone();
                Callback::from(move |message: ToastMessage| {
                    let id = {
                        let mut next_id = counter.borrow_mut();
                        *next_id += 1;
                        *next_id
                    };
                    toasts.dispatch(ToastAction::Push(id, message));
                    let toasts = toasts.clone();
                    Timeout::new(DISMISS_MS, move || {
                        toasts.dispatch(ToastAction::Dismiss(id));
                    })
                    .forget();
                })
            };
            HOST.with(|host| *host.borrow_mut() = Some(on_toast));

            let subscription = events::subscribe(Callback::from(|event: AppEvent| {
                if let AppEvent::ApiError(message) = event {
                    error(message);
                }
            }));

            move || {
                HOST.with(|host| *host.borrow_mut() = None);
                drop(subscription);
            }
        });
    }

    html! {
        <div class="toast-container">
            { for toasts.items.iter().map(|(id, message)| html! {
                <div key={*id} class={message.kind.class()}>
                    <span class="toast-icon">{ message.kind.icon() }</span>
                    <span class="toast-text">{ &message.text }</span>
                </div>
            }) }
        </div>
    }
}
