// ============================================================
// 🔑 LOGIN MODAL - reautenticación sin perder la pantalla
// ============================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::LoginRequest;
use crate::services::auth_service;

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Se abre al expirar la sesión (o al tocar contenido protegido). Tras un
/// login exitoso el provider resuelve la navegación pendiente.
#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let session = use_auth();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let session = session.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value();
            let password = password_input.value();
            if email.trim().is_empty() || password.is_empty() {
                error.set(Some("Vui lòng nhập đầy đủ email và mật khẩu".to_string()));
                return;
            }
            submitting.set(true);

            let session = session.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                match auth_service::login(&LoginRequest { email, password }).await {
                    Ok(response) => match response.into_data() {
                        Some(auth) => {
                            error.set(None);
                            on_close.emit(());
                            session.login.emit(auth);
                        }
                        None => error.set(Some(
                            "Đăng nhập thất bại. Vui lòng kiểm tra lại thông tin.".to_string(),
                        )),
                    },
                    Err(_) => error.set(Some(
                        "Đăng nhập thất bại. Vui lòng kiểm tra lại thông tin.".to_string(),
                    )),
                }
                submitting.set(false);
            });
        })
    };

    let on_overlay_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.open {
        return Html::default();
    }

    html! {
        <div class="modal-overlay">
            <div class="modal login-modal">
                <div class="modal-header">
                    <h2>{ "Đăng nhập" }</h2>
                    <button class="modal-close" onclick={on_overlay_close}>{ "✕" }</button>
                </div>
                <p class="modal-note">{ "Phiên đăng nhập đã hết hạn hoặc bạn cần đăng nhập để tiếp tục." }</p>
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{ "Email" }</label>
                        <input ref={email_ref} type="email" placeholder="email@example.com" />
                    </div>
                    <div class="form-group">
                        <label>{ "Mật khẩu" }</label>
                        <input ref={password_ref} type="password" />
                    </div>
                    if let Some(message) = &*error {
                        <p class="form-error">{ message }</p>
                    }
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        { if *submitting { "Đang đăng nhập..." } else { "Đăng nhập" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
