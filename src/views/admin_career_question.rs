// ============================================================
// 🧭 ADMIN CAREER QUESTIONS - soạn câu hỏi RIASEC theo lô
// ============================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::toast;
use crate::models::{CareerQuestion, CareerType, NewCareerQuestion};
use crate::services::career_service;

#[derive(Clone, PartialEq)]
struct DraftRow {
    content: String,
    career_type: CareerType,
}

impl Default for DraftRow {
    fn default() -> Self {
        DraftRow { content: String::new(), career_type: CareerType::R }
    }
}

#[function_component(AdminCareerQuestionView)]
pub fn admin_career_question_view() -> Html {
    let questions = use_state(Vec::<CareerQuestion>::new);
    let drafts = use_state(|| vec![DraftRow::default()]);
    let submitting = use_state(|| false);
    let reload = use_state(|| 0u32);

    {
        let questions = questions.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                if let Ok(response) = career_service::get_all_career_questions().await {
                    if let Some(list) = response.into_data() {
                        questions.set(list);
                    }
                }
            });
            || ()
        });
    }

    let on_add_row = {
        let drafts = drafts.clone();
        Callback::from(move |_: MouseEvent| {
            let mut current = (*drafts).clone();
            current.push(DraftRow::default());
            drafts.set(current);
        })
    };

    let on_remove_row = {
        let drafts = drafts.clone();
        Callback::from(move |index: usize| {
            let mut current = (*drafts).clone();
            if current.len() > 1 {
                current.remove(index);
                drafts.set(current);
            }
        })
    };

    let on_content_change = {
        let drafts = drafts.clone();
        Callback::from(move |(index, content): (usize, String)| {
            let mut current = (*drafts).clone();
            if let Some(row) = current.get_mut(index) {
                row.content = content;
            }
            drafts.set(current);
        })
    };

    let on_type_change = {
        let drafts = drafts.clone();
        Callback::from(move |(index, code): (usize, String)| {
            let mut current = (*drafts).clone();
            if let (Some(row), Some(career_type)) =
                (current.get_mut(index), CareerType::parse(&code))
            {
                row.career_type = career_type;
            }
            drafts.set(current);
        })
    };

    let on_submit = {
        let drafts = drafts.clone();
        let submitting = submitting.clone();
        let reload = reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            let batch: Vec<NewCareerQuestion> = drafts
                .iter()
                .filter(|row| !row.content.trim().is_empty())
                .map(|row| NewCareerQuestion {
                    content: row.content.trim().to_string(),
                    career_type: row.career_type,
                })
                .collect();
            if batch.is_empty() {
                toast::warning("Vui lòng nhập ít nhất một câu hỏi");
                return;
            }
            submitting.set(true);
            let drafts = drafts.clone();
            let submitting = submitting.clone();
            let reload = reload.clone();
            spawn_local(async move {
                if career_service::create_career_questions(&batch).await.is_ok() {
                    toast::success(format!("Đã thêm {} câu hỏi", batch.len()));
                    drafts.set(vec![DraftRow::default()]);
                    reload.set(*reload + 1);
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="admin-panel">
            <h1>{ "Câu hỏi nghề nghiệp" }</h1>
            <form class="admin-form" onsubmit={on_submit}>
                { for drafts.iter().enumerate().map(|(index, row)| {
                    let content_change = {
                        let on_content_change = on_content_change.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                                on_content_change.emit((index, input.value()));
                            }
                        })
                    };
                    let type_change = {
                        let on_type_change = on_type_change.clone();
                        Callback::from(move |event: Event| {
                            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                                on_type_change.emit((index, select.value()));
                            }
                        })
                    };
                    let remove = {
                        let on_remove_row = on_remove_row.clone();
                        Callback::from(move |_: MouseEvent| on_remove_row.emit(index))
                    };
                    html! {
                        <div key={index} class="draft-row">
                            <input
                                type="text"
                                placeholder="Nội dung câu hỏi"
                                value={row.content.clone()}
                                oninput={content_change}
                            />
                            <select onchange={type_change}>
                                { for CareerType::ALL.iter().map(|career_type| html! {
                                    <option
                                        value={career_type.as_str()}
                                        selected={*career_type == row.career_type}
                                    >
                                        { career_type.label() }
                                    </option>
                                }) }
                            </select>
                            <button type="button" class="btn btn-ghost" onclick={remove}>{ "🗑️" }</button>
                        </div>
                    }
                }) }
                <div class="draft-actions">
                    <button type="button" class="btn btn-ghost" onclick={on_add_row}>{ "➕ Thêm dòng" }</button>
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        { if *submitting { "Đang lưu..." } else { "Lưu tất cả" } }
                    </button>
                </div>
            </form>
            <h2>{ format!("Câu hỏi hiện có ({})", questions.len()) }</h2>
            <ul class="question-list">
                { for questions.iter().map(|question| html! {
                    <li key={question.id.to_string()}>
                        <span class="question-type">{ question.career_type.as_str() }</span>
                        { &question.content }
                    </li>
                }) }
            </ul>
        </div>
    }
}
