// ============================================================
// 🏷️ ADMIN CATEGORIES - CRUD danh mục
// ============================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast;
use crate::models::{Category, CategoryPayload};
use crate::services::category_service;
use crate::utils::validate::{MAX_CATEGORY_DESCRIPTION, MAX_CATEGORY_NAME};

fn payload_error(payload: &CategoryPayload) -> Option<&'static str> {
    if payload.name.trim().is_empty() {
        return Some("Tên danh mục không được để trống");
    }
    if payload.name.chars().count() > MAX_CATEGORY_NAME {
        return Some("Tên danh mục tối đa 100 ký tự");
    }
    if payload.description.chars().count() > MAX_CATEGORY_DESCRIPTION {
        return Some("Mô tả tối đa 500 ký tự");
    }
    None
}

#[function_component(AdminCategoryView)]
pub fn admin_category_view() -> Html {
    let categories = use_state(Vec::<Category>::new);
    let editing = use_state(|| None::<u64>);
    let reload = use_state(|| 0u32);
    let name_ref = use_node_ref();
    let description_ref = use_node_ref();

    {
        let categories = categories.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                if let Ok(response) = category_service::get_all_categories_public().await {
                    if let Some(list) = response.into_data() {
                        categories.set(list);
                    }
                }
            });
            || ()
        });
    }

    let on_submit = {
        let name_ref = name_ref.clone();
        let description_ref = description_ref.clone();
        let editing = editing.clone();
        let reload = reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Some(name_input), Some(description_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                description_ref.cast::<HtmlTextAreaElement>(),
            ) else {
                return;
            };
            let payload = CategoryPayload {
                name: name_input.value().trim().to_string(),
                description: description_input.value().trim().to_string(),
            };
            if let Some(message) = payload_error(&payload) {
                toast::warning(message);
                return;
            }
            let editing_id = *editing;
            let editing = editing.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => category_service::update_category(id, &payload).await.map(|_| ()),
                    None => category_service::create_category(&payload).await.map(|_| ()),
                };
                if result.is_ok() {
                    toast::success(if editing_id.is_some() {
                        "Cập nhật danh mục thành công"
                    } else {
                        "Tạo danh mục thành công"
                    });
                    name_input.set_value("");
                    description_input.set_value("");
                    editing.set(None);
                    reload.set(*reload + 1);
                }
            });
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let name_ref = name_ref.clone();
        let description_ref = description_ref.clone();
        Callback::from(move |category: Category| {
            if let (Some(name_input), Some(description_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                description_ref.cast::<HtmlTextAreaElement>(),
            ) {
                name_input.set_value(&category.name);
                description_input.set_value(category.description.as_deref().unwrap_or(""));
            }
            editing.set(Some(category.id));
        })
    };

    let on_delete = {
        let reload = reload.clone();
        Callback::from(move |id: u64| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Xóa danh mục này?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let reload = reload.clone();
            spawn_local(async move {
                if category_service::delete_category(id).await.is_ok() {
                    toast::success("Đã xóa danh mục");
                    reload.set(*reload + 1);
                }
            });
        })
    };

    html! {
        <div class="admin-panel">
            <h1>{ "Quản lý danh mục" }</h1>
            <form class="admin-form" onsubmit={on_submit}>
                <input ref={name_ref} type="text" placeholder="Tên danh mục" />
                <textarea ref={description_ref} placeholder="Mô tả" />
                <button type="submit" class="btn btn-primary">
                    { if editing.is_some() { "Cập nhật" } else { "Thêm danh mục" } }
                </button>
            </form>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>{ "Tên" }</th>
                        <th>{ "Mô tả" }</th>
                        <th>{ "Thao tác" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for categories.iter().map(|category| {
                        let edit = {
                            let on_edit = on_edit.clone();
                            let category = category.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(category.clone()))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = category.id;
                            Callback::from(move |_: MouseEvent| on_delete.emit(id))
                        };
                        html! {
                            <tr key={category.id.to_string()}>
                                <td>{ &category.name }</td>
                                <td>{ category.description.as_deref().unwrap_or("-") }</td>
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
    fn empty_name_is_rejected() {
        let payload = CategoryPayload { name: "  ".to_string(), description: String::new() };
        assert!(payload_error(&payload).is_some());
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let long_name = CategoryPayload { name: "a".repeat(101), description: String::new() };
        assert!(payload_error(&long_name).is_some());

        let long_description =
            CategoryPayload { name: "Toán".to_string(), description: "a".repeat(501) };
        assert!(payload_error(&long_description).is_some());
    }

    #[test]
    fn valid_payload_passes() {
        let payload =
            CategoryPayload { name: "Lập trình".to_string(), description: "Các khóa học code".to_string() };
        assert_eq!(payload_error(&payload), None);
    }
}
