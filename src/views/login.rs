// ============================================================
// 🔑 LOGIN - página de acceso
// ============================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::hooks::use_auth;
use crate::models::LoginRequest;
use crate::routes::Route;
use crate::services::auth_service;
use crate::utils::validate;

#[function_component(LoginView)]
pub fn login_view() -> Html {
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
            if !validate::is_valid_email(&email) {
                error.set(Some("Email không hợp lệ".to_string()));
                return;
            }
            if password.is_empty() {
                error.set(Some("Vui lòng nhập mật khẩu".to_string()));
                return;
            }
            submitting.set(true);

            let session = session.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match auth_service::login(&LoginRequest { email, password }).await {
                    Ok(response) => match response.into_data() {
                        Some(auth) => {
                            error.set(None);
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

    html! {
        <>
            <Navbar />
            <main class="auth-page">
                <form class="auth-card" onsubmit={on_submit}>
                    <h1>{ "Đăng nhập" }</h1>
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
                    <p class="auth-switch">
                        { "Chưa có tài khoản? " }
                        <Link<Route> to={Route::Register}>{ "Đăng ký ngay" }</Link<Route>>
                    </p>
                </form>
            </main>
        </>
    }
}
