// ============================================================
// 👥 ADMIN ACCOUNTS - quản lý tài khoản (sólo ADMIN)
// ============================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::toast;
use crate::models::{Account, NewAccount, Role};
use crate::services::account_service;
use crate::utils::validate;

fn account_error(account: &NewAccount) -> Option<&'static str> {
    if !validate::is_valid_full_name(&account.full_name) {
        return Some("Họ tên không được để trống và tối đa 80 ký tự");
    }
    if !validate::is_valid_email(&account.email) {
        return Some("Email không hợp lệ");
    }
    if !validate::is_valid_phone(&account.phone_number) {
        return Some("Số điện thoại phải có 10 chữ số và bắt đầu bằng 0");
    }
    None
}

#[function_component(AdminAccountView)]
pub fn admin_account_view() -> Html {
    let accounts = use_state(Vec::<Account>::new);
    let editing = use_state(|| None::<u64>);
    let reload = use_state(|| 0u32);
    let full_name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let role_ref = use_node_ref();

    {
        let accounts = accounts.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                if let Ok(response) = account_service::get_all_accounts().await {
                    if let Some(list) = response.into_data() {
                        accounts.set(list);
                    }
                }
            });
            || ()
        });
    }

    let on_submit = {
        let full_name_ref = full_name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let role_ref = role_ref.clone();
        let editing = editing.clone();
        let reload = reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Some(full_name_input), Some(email_input), Some(phone_input), Some(role_select)) = (
                full_name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
                role_ref.cast::<HtmlSelectElement>(),
            ) else {
                return;
            };
            let role = Role::parse(&role_select.value());
            let account = NewAccount {
                email: email_input.value().trim().to_string(),
                full_name: full_name_input.value().trim().to_string(),
                phone_number: phone_input.value().trim().to_string(),
                role,
            };
            if let Some(message) = account_error(&account) {
                toast::warning(message);
                return;
            }
            let editing_id = *editing;
            let editing = editing.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => account_service::update_account(id, &account).await.map(|_| ()),
                    None => account_service::create_account(&account).await.map(|_| ()),
                };
                if result.is_ok() {
                    toast::success(if editing_id.is_some() {
                        "Cập nhật tài khoản thành công"
                    } else {
                        "Tạo tài khoản thành công"
                    });
                    full_name_input.set_value("");
                    email_input.set_value("");
                    phone_input.set_value("");
                    editing.set(None);
                    reload.set(*reload + 1);
                }
            });
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let full_name_ref = full_name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let role_ref = role_ref.clone();
        Callback::from(move |account: Account| {
            if let Some(input) = full_name_ref.cast::<HtmlInputElement>() {
                input.set_value(account.full_name.as_deref().unwrap_or(""));
            }
            if let Some(input) = email_ref.cast::<HtmlInputElement>() {
                input.set_value(&account.email);
            }
            if let Some(input) = phone_ref.cast::<HtmlInputElement>() {
                input.set_value(account.phone_number.as_deref().unwrap_or(""));
            }
            if let Some(select) = role_ref.cast::<HtmlSelectElement>() {
                select.set_value(account.role.as_str());
            }
            editing.set(Some(account.id));
        })
    };

    let on_delete = {
        let reload = reload.clone();
        Callback::from(move |id: u64| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Xóa tài khoản này?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let reload = reload.clone();
            spawn_local(async move {
                if account_service::delete_account(id).await.is_ok() {
                    toast::success("Đã xóa tài khoản");
                    reload.set(*reload + 1);
                }
            });
        })
    };

    html! {
        <div class="admin-panel">
            <h1>{ "Quản lý tài khoản" }</h1>
            <form class="admin-form" onsubmit={on_submit}>
                <input ref={full_name_ref} type="text" placeholder="Họ và tên" />
                <input ref={email_ref} type="email" placeholder="Email" />
                <input ref={phone_ref} type="tel" placeholder="Số điện thoại" />
                <select ref={role_ref}>
                    <option value="STUDENT" selected=true>{ "Học viên" }</option>
                    <option value="STAFF">{ "Nhân viên" }</option>
                    <option value="ADMIN">{ "Quản trị viên" }</option>
                </select>
                <button type="submit" class="btn btn-primary">
                    { if editing.is_some() { "Cập nhật" } else { "Thêm tài khoản" } }
                </button>
            </form>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>{ "Họ tên" }</th>
                        <th>{ "Email" }</th>
                        <th>{ "Điện thoại" }</th>
                        <th>{ "Vai trò" }</th>
                        <th>{ "Thao tác" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for accounts.iter().map(|account| {
                        let edit = {
                            let on_edit = on_edit.clone();
                            let account = account.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(account.clone()))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = account.id;
                            Callback::from(move |_: MouseEvent| on_delete.emit(id))
                        };
                        html! {
                            <tr key={account.id.to_string()}>
                                <td>{ account.display_name() }</td>
                                <td>{ &account.email }</td>
                                <td>{ account.phone_number.as_deref().unwrap_or("-") }</td>
                                <td>{ account.role.badge() }</td>
                                <td>
                                    <button class="btn btn-ghost" onclick={edit}>{ "✏️" }</button>
                                    <button class="btn btn-ghost" onclick={delete}>{ "🗑️" }</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_validation() {
        let valid = NewAccount {
            email: "staff@learnmap.vn".to_string(),
            full_name: "Trần Thị Bình".to_string(),
            phone_number: "0987654321".to_string(),
            role: Role::Staff,
        };
        assert_eq!(account_error(&valid), None);

        let bad_email = NewAccount { email: "staff".to_string(), ..valid.clone() };
        assert!(account_error(&bad_email).is_some());
    }
}
