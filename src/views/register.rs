// ============================================================
// 📝 REGISTER - tạo tài khoản học viên
// ============================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{toast, Navbar};
use crate::models::RegisterRequest;
use crate::routes::Route;
use crate::services::auth_service;
use crate::utils::validate;

fn validation_error(request: &RegisterRequest, confirm: &str) -> Option<&'static str> {
    if !validate::is_valid_full_name(&request.full_name) {
        return Some("Họ tên không được để trống và tối đa 80 ký tự");
    }
    if !validate::is_valid_email(&request.email) {
        return Some("Email không hợp lệ");
    }
    if !validate::is_valid_phone(&request.phone_number) {
        return Some("Số điện thoại phải có 10 chữ số và bắt đầu bằng 0");
    }
    if !validate::is_valid_password(&request.password) {
        return Some("Mật khẩu phải có ít nhất 6 ký tự");
    }
    if request.password != confirm {
        return Some("Mật khẩu nhập lại không khớp");
    }
    None
}

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let navigator = use_navigator().expect("RegisterView debe vivir bajo un Router");
    let full_name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let navigator = navigator.clone();
        let full_name_ref = full_name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            let inputs = (
                full_name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                confirm_ref.cast::<HtmlInputElement>(),
            );
            let (Some(full_name), Some(email), Some(phone), Some(password), Some(confirm)) = inputs
            else {
                return;
            };
            let request = RegisterRequest {
                email: email.value().trim().to_string(),
                password: password.value(),
                full_name: full_name.value().trim().to_string(),
                phone_number: phone.value().trim().to_string(),
            };
            if let Some(message) = validation_error(&request, &confirm.value()) {
                error.set(Some(message.to_string()));
                return;
            }
            error.set(None);
            submitting.set(true);

            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match auth_service::register(&request).await {
                    Ok(_) => {
                        toast::success("Đăng ký thành công! Vui lòng đăng nhập.");
                        navigator.push(&Route::Login);
                    }
                    Err(_) => error.set(Some("Đăng ký thất bại. Vui lòng thử lại.".to_string())),
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
                    <h1>{ "Đăng ký" }</h1>
                    <div class="form-group">
                        <label>{ "Họ và tên" }</label>
                        <input ref={full_name_ref} type="text" placeholder="Nguyễn Văn An" />
                    </div>
                    <div class="form-group">
                        <label>{ "Email" }</label>
                        <input ref={email_ref} type="email" placeholder="email@example.com" />
                    </div>
                    <div class="form-group">
                        <label>{ "Số điện thoại" }</label>
                        <input ref={phone_ref} type="tel" placeholder="0912345678" />
                    </div>
                    <div class="form-group">
                        <label>{ "Mật khẩu" }</label>
                        <input ref={password_ref} type="password" />
                    </div>
                    <div class="form-group">
                        <label>{ "Nhập lại mật khẩu" }</label>
                        <input ref={confirm_ref} type="password" />
                    </div>
                    if let Some(message) = &*error {
                        <p class="form-error">{ message }</p>
                    }
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        { if *submitting { "Đang đăng ký..." } else { "Đăng ký" } }
                    </button>
                    <p class="auth-switch">
                        { "Đã có tài khoản? " }
                        <Link<Route> to={Route::Login}>{ "Đăng nhập" }</Link<Route>>
                    </p>
                </form>
            </main>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            email: "an@example.com".to_string(),
            password: "secret1".to_string(),
            full_name: "Nguyễn Văn An".to_string(),
            phone_number: "0912345678".to_string(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(validation_error(&request(), "secret1"), None);
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        assert!(validation_error(&request(), "otra").is_some());
    }

    #[test]
    fn bad_phone_is_rejected() {
        let mut bad = request();
        bad.phone_number = "12345".to_string();
        assert!(validation_error(&bad, "secret1").is_some());
    }
}
