// ============================================================
// 💎 ADMIN PLANS - gói học và tính năng (sólo ADMIN)
// ============================================================

use std::collections::HashSet;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast;
use crate::models::{Feature, Plan, PlanPayload};
use crate::services::plan_service;
use crate::utils::format::format_price;

fn plan_error(payload: &PlanPayload) -> Option<&'static str> {
    if payload.code.trim().is_empty() || payload.name.trim().is_empty() {
        return Some("Mã và tên gói không được để trống");
    }
    if payload.price <= 0.0 {
        return Some("Giá phải lớn hơn 0");
    }
    if payload.duration_in_days <= 0 {
        return Some("Thời hạn phải lớn hơn 0");
    }
    if payload.plan_feature_ids.is_empty() {
        return Some("Chọn ít nhất một tính năng");
    }
    None
}

#[function_component(AdminPlanView)]
pub fn admin_plan_view() -> Html {
    let plans = use_state(Vec::<Plan>::new);
    let features = use_state(Vec::<Feature>::new);
    let selected_features = use_state(HashSet::<u64>::new);
    let editing = use_state(|| None::<u64>);
    let reload = use_state(|| 0u32);
    let code_ref = use_node_ref();
    let name_ref = use_node_ref();
    let description_ref = use_node_ref();
    let price_ref = use_node_ref();
    let duration_ref = use_node_ref();

    {
        let plans = plans.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                if let Ok(response) = plan_service::get_all_plans().await {
                    if let Some(list) = response.into_data() {
                        plans.set(list);
                    }
                }
            });
            || ()
        });
    }

    {
        let features = features.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Ok(response) = plan_service::get_all_features().await {
                    if let Some(list) = response.into_data() {
                        features.set(list);
                    }
                }
            });
            || ()
        });
    }

    let toggle_feature = {
        let selected_features = selected_features.clone();
        Callback::from(move |feature_id: u64| {
            let mut current = (*selected_features).clone();
            if !current.insert(feature_id) {
                current.remove(&feature_id);
            }
            selected_features.set(current);
        })
    };

    let on_submit = {
        let code_ref = code_ref.clone();
        let name_ref = name_ref.clone();
        let description_ref = description_ref.clone();
        let price_ref = price_ref.clone();
        let duration_ref = duration_ref.clone();
        let selected_features = selected_features.clone();
        let editing = editing.clone();
        let reload = reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Some(code_input), Some(name_input), Some(description_input), Some(price_input), Some(duration_input)) = (
                code_ref.cast::<HtmlInputElement>(),
                name_ref.cast::<HtmlInputElement>(),
                description_ref.cast::<HtmlTextAreaElement>(),
                price_ref.cast::<HtmlInputElement>(),
                duration_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let mut feature_ids: Vec<u64> = selected_features.iter().copied().collect();
            feature_ids.sort_unstable();
            let payload = PlanPayload {
                code: code_input.value().trim().to_uppercase(),
                name: name_input.value().trim().to_string(),
                description: description_input.value().trim().to_string(),
                price: price_input.value().parse().unwrap_or(0.0),
                duration_in_days: duration_input.value().parse().unwrap_or(0),
                plan_feature_ids: feature_ids,
            };
            if let Some(message) = plan_error(&payload) {
                toast::warning(message);
                return;
            }
            let editing_id = *editing;
            let editing = editing.clone();
            let reload = reload.clone();
            let selected_features = selected_features.clone();
            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => plan_service::update_plan(id, &payload).await.map(|_| ()),
                    None => plan_service::create_plan(&payload).await.map(|_| ()),
                };
                if result.is_ok() {
                    toast::success(if editing_id.is_some() {
                        "Cập nhật gói học thành công"
                    } else {
                        "Tạo gói học thành công"
                    });
                    code_input.set_value("");
                    name_input.set_value("");
                    description_input.set_value("");
                    price_input.set_value("");
                    duration_input.set_value("");
                    selected_features.set(HashSet::new());
                    editing.set(None);
                    reload.set(*reload + 1);
                }
            });
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let selected_features = selected_features.clone();
        let code_ref = code_ref.clone();
        let name_ref = name_ref.clone();
        let description_ref = description_ref.clone();
        let price_ref = price_ref.clone();
        let duration_ref = duration_ref.clone();
        Callback::from(move |plan: Plan| {
            if let Some(input) = code_ref.cast::<HtmlInputElement>() {
                input.set_value(&plan.code);
            }
            if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                input.set_value(&plan.name);
            }
            if let Some(input) = description_ref.cast::<HtmlTextAreaElement>() {
                input.set_value(plan.description.as_deref().unwrap_or(""));
            }
            if let Some(input) = price_ref.cast::<HtmlInputElement>() {
                input.set_value(&plan.price.to_string());
            }
            if let Some(input) = duration_ref.cast::<HtmlInputElement>() {
                input.set_value(&plan.duration_in_days.to_string());
            }
            selected_features.set(plan.features.iter().map(|feature| feature.id).collect());
            editing.set(Some(plan.id));
        })
    };

    html! {
        <div class="admin-panel">
            <h1>{ "Quản lý gói học" }</h1>
            <form class="admin-form" onsubmit={on_submit}>
                <input ref={code_ref} type="text" placeholder="Mã gói (FREE, STANDARD...)" />
                <input ref={name_ref} type="text" placeholder="Tên gói" />
                <textarea ref={description_ref} placeholder="Mô tả" />
                <input ref={price_ref} type="number" min="0" step="1000" placeholder="Giá (VND)" />
                <input ref={duration_ref} type="number" min="1" placeholder="Thời hạn (ngày)" />
                <fieldset class="feature-picker">
                    <legend>{ "Tính năng" }</legend>
                    { for features.iter().map(|feature| {
                        let checked = selected_features.contains(&feature.id);
                        let toggle = {
                            let toggle_feature = toggle_feature.clone();
                            let feature_id = feature.id;
                            Callback::from(move |_: Event| toggle_feature.emit(feature_id))
                        };
                        html! {
                            <label key={feature.id.to_string()} class="checkbox-label">
                                <input type="checkbox" checked={checked} onchange={toggle} />
                                { &feature.name }
                            </label>
                        }
                    }) }
                </fieldset>
                <button type="submit" class="btn btn-primary">
                    { if editing.is_some() { "Cập nhật" } else { "Thêm gói học" } }
                </button>
            </form>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>{ "Mã" }</th>
                        <th>{ "Tên" }</th>
                        <th>{ "Giá" }</th>
                        <th>{ "Thời hạn" }</th>
                        <th>{ "Tính năng" }</th>
                        <th>{ "Thao tác" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for plans.iter().map(|plan| {
                        let edit = {
                            let on_edit = on_edit.clone();
                            let plan = plan.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(plan.clone()))
                        };
                        html! {
                            <tr key={plan.id.to_string()}>
                                <td>{ format!("{} {}", plan.icon(), plan.code) }</td>
                                <td>{ &plan.name }</td>
                                <td>{ format_price(plan.price) }</td>
                                <td>{ format!("{} ngày", plan.duration_in_days) }</td>
                                <td>{ plan.features.len() }</td>
                                <td>
                                    <button class="btn btn-ghost" onclick={edit}>{ "✏️" }</button>
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

    fn payload() -> PlanPayload {
        PlanPayload {
            code: "STANDARD".to_string(),
            name: "Gói chuẩn".to_string(),
            description: String::new(),
            price: 199_000.0,
            duration_in_days: 30,
            plan_feature_ids: vec![1, 2],
        }
    }

    #[test]
    fn valid_plan_passes() {
        assert_eq!(plan_error(&payload()), None);
    }

    #[test]
    fn non_positive_price_and_duration_are_rejected() {
        let mut free = payload();
        free.price = 0.0;
        assert!(plan_error(&free).is_some());

        let mut instant = payload();
        instant.duration_in_days = 0;
        assert!(plan_error(&instant).is_some());
    }

    #[test]
    fn at_least_one_feature_required() {
        let mut bare = payload();
        bare.plan_feature_ids.clear();
        assert!(plan_error(&bare).is_some());
    }
}
