// ============================================================
// 📚 ADMIN COURSES - CRUD khóa học + upload thumbnail
// ============================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast;
use crate::models::{Category, Course, CoursePayload};
use crate::services::{category_service, course_service, upload_service};
use crate::utils::format::format_price;

#[function_component(AdminCourseView)]
pub fn admin_course_view() -> Html {
    let courses = use_state(Vec::<Course>::new);
    let categories = use_state(Vec::<Category>::new);
    let editing = use_state(|| None::<u64>);
    let thumbnail_url = use_state(|| None::<String>);
    let uploading = use_state(|| false);
    let reload = use_state(|| 0u32);
    let title_ref = use_node_ref();
    let description_ref = use_node_ref();
    let price_ref = use_node_ref();
    let category_ref = use_node_ref();
    let published_ref = use_node_ref();
    let file_ref = use_node_ref();

    {
        let courses = courses.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                if let Ok(response) = course_service::get_all_courses().await {
                    if let Some(list) = response.into_data() {
                        courses.set(list);
                    }
                }
            });
            || ()
        });
    }

    {
        let categories = categories.clone();
        use_effect_with((), move |_| {
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

    let on_upload = {
        let thumbnail_url = thumbnail_url.clone();
        let uploading = uploading.clone();
        let file_ref = file_ref.clone();
        Callback::from(move |_: Event| {
            let Some(input) = file_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            uploading.set(true);
            let thumbnail_url = thumbnail_url.clone();
            let uploading = uploading.clone();
            spawn_local(async move {
                if let Ok(url) = upload_service::upload_image(&file).await {
                    toast::success("Tải ảnh lên thành công");
                    thumbnail_url.set(Some(url));
                }
                uploading.set(false);
            });
        })
    };

    let on_submit = {
        let title_ref = title_ref.clone();
        let description_ref = description_ref.clone();
        let price_ref = price_ref.clone();
        let category_ref = category_ref.clone();
        let published_ref = published_ref.clone();
        let thumbnail_url = thumbnail_url.clone();
        let editing = editing.clone();
        let reload = reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Some(title_input), Some(description_input), Some(price_input), Some(category_select)) = (
                title_ref.cast::<HtmlInputElement>(),
                description_ref.cast::<HtmlTextAreaElement>(),
                price_ref.cast::<HtmlInputElement>(),
                category_ref.cast::<HtmlSelectElement>(),
            ) else {
                return;
            };
            let title = title_input.value().trim().to_string();
            if title.is_empty() {
                toast::warning("Tiêu đề không được để trống");
                return;
            }
            let Ok(price) = price_input.value().parse::<f64>() else {
                toast::warning("Giá không hợp lệ");
                return;
            };
            if price < 0.0 {
                toast::warning("Giá không được âm");
                return;
            }
            let Ok(category_id) = category_select.value().parse::<u64>() else {
                toast::warning("Vui lòng chọn danh mục");
                return;
            };
            let published = published_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.checked())
                .unwrap_or(false);
            let payload = CoursePayload {
                title,
                description: description_input.value().trim().to_string(),
                price,
                category_id,
                thumbnail_url: (*thumbnail_url).clone(),
                published,
            };

            let editing_id = *editing;
            let editing = editing.clone();
            let reload = reload.clone();
            let thumbnail_url = thumbnail_url.clone();
            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => course_service::update_course(id, &payload).await.map(|_| ()),
                    None => course_service::create_course(&payload).await.map(|_| ()),
                };
                if result.is_ok() {
                    toast::success(if editing_id.is_some() {
                        "Cập nhật khóa học thành công"
                    } else {
                        "Tạo khóa học thành công"
                    });
                    title_input.set_value("");
                    description_input.set_value("");
                    price_input.set_value("");
                    editing.set(None);
                    thumbnail_url.set(None);
                    reload.set(*reload + 1);
                }
            });
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let thumbnail_url = thumbnail_url.clone();
        let title_ref = title_ref.clone();
        let description_ref = description_ref.clone();
        let price_ref = price_ref.clone();
        let category_ref = category_ref.clone();
        let published_ref = published_ref.clone();
        Callback::from(move |course: Course| {
            if let Some(input) = title_ref.cast::<HtmlInputElement>() {
                input.set_value(&course.title);
            }
            if let Some(input) = description_ref.cast::<HtmlTextAreaElement>() {
                input.set_value(course.description.as_deref().unwrap_or(""));
            }
            if let Some(input) = price_ref.cast::<HtmlInputElement>() {
                input.set_value(&course.price.unwrap_or(0.0).to_string());
            }
            if let (Some(select), Some(category_id)) =
                (category_ref.cast::<HtmlSelectElement>(), course.category_id)
            {
                select.set_value(&category_id.to_string());
            }
            if let Some(input) = published_ref.cast::<HtmlInputElement>() {
                input.set_checked(course.published);
            }
            thumbnail_url.set(course.thumbnail_url.clone());
            editing.set(Some(course.id));
        })
    };

    let on_delete = {
        let reload = reload.clone();
        Callback::from(move |id: u64| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Xóa khóa học này?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let reload = reload.clone();
            spawn_local(async move {
                if course_service::delete_course(id).await.is_ok() {
                    toast::success("Đã xóa khóa học");
                    reload.set(*reload + 1);
                }
            });
        })
    };

    html! {
        <div class="admin-panel">
            <h1>{ "Quản lý khóa học" }</h1>
            <form class="admin-form" onsubmit={on_submit}>
                <input ref={title_ref} type="text" placeholder="Tiêu đề khóa học" />
                <textarea ref={description_ref} placeholder="Mô tả" />
                <input ref={price_ref} type="number" min="0" step="1000" placeholder="Giá (VND)" />
                <select ref={category_ref}>
                    <option value="" selected=true disabled=true>{ "Chọn danh mục" }</option>
                    { for categories.iter().map(|category| html! {
                        <option key={category.id.to_string()} value={category.id.to_string()}>
                            { &category.name }
                        </option>
                    }) }
                </select>
                <label class="checkbox-label">
                    <input ref={published_ref} type="checkbox" />
                    { "Công khai" }
                </label>
                <label class="upload-label">
                    { if *uploading { "⏳ Đang tải ảnh..." } else { "📷 Ảnh bìa" } }
                    <input ref={file_ref} type="file" accept="image/*" onchange={on_upload} />
                </label>
                if let Some(url) = &*thumbnail_url {
                    <img class="thumbnail-preview" src={url.clone()} alt="thumbnail" />
                }
                <button type="submit" class="btn btn-primary" disabled={*uploading}>
                    { if editing.is_some() { "Cập nhật" } else { "Thêm khóa học" } }
                </button>
            </form>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>{ "Tiêu đề" }</th>
                        <th>{ "Danh mục" }</th>
                        <th>{ "Giá" }</th>
                        <th>{ "Trạng thái" }</th>
                        <th>{ "Thao tác" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for courses.iter().map(|course| {
                        let edit = {
                            let on_edit = on_edit.clone();
                            let course = course.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(course.clone()))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = course.id;
                            Callback::from(move |_: MouseEvent| on_delete.emit(id))
                        };
                        html! {
                            <tr key={course.id.to_string()}>
                                <td>{ &course.title }</td>
                                <td>{ course.category_name().unwrap_or("-") }</td>
                                <td>{ course.price.map(format_price).unwrap_or_else(|| "-".to_string()) }</td>
                                <td>{ if course.published { "✅ Công khai" } else { "📝 Nháp" } }</td>
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
