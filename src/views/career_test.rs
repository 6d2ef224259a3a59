// ============================================================
// 🧭 CAREER TEST - trắc nghiệm RIASEC
// ============================================================

use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{toast, Navbar, RouteGuard};
use crate::models::{CareerAnswers, CareerQuestion, CareerType};
use crate::services::career_service;

const QUESTIONS_PER_PAGE: usize = 6;

#[function_component(CareerTestView)]
pub fn career_test_view() -> Html {
    html! {
        <>
            <Navbar />
            <RouteGuard>
                <CareerTest />
            </RouteGuard>
        </>
    }
}

#[function_component(CareerTest)]
fn career_test() -> Html {
    let questions = use_state(Vec::<CareerQuestion>::new);
    let answers = use_state(HashMap::<u64, u8>::new);
    let page = use_state(|| 0usize);
    let result = use_state(|| None::<CareerType>);
    let submitting = use_state(|| false);

    {
        let questions = questions.clone();
        use_effect_with((), move |_| {
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

    if let Some(career_type) = *result {
        let on_retry = {
            let result = result.clone();
            let answers = answers.clone();
            let page = page.clone();
            Callback::from(move |_: MouseEvent| {
                result.set(None);
                answers.set(HashMap::new());
                page.set(0);
            })
        };
        return html! {
            <div class="career-result">
                <h1>{ "Kết quả của bạn" }</h1>
                <h2>{ career_type.label() }</h2>
                <p>{ career_type.description() }</p>
                <button class="btn btn-primary" onclick={on_retry}>{ "Làm lại" }</button>
            </div>
        };
    }

    let total_pages = questions.len().div_ceil(QUESTIONS_PER_PAGE).max(1);
    let start = *page * QUESTIONS_PER_PAGE;
    let visible = questions
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect::<Vec<_>>();
    let answered = answers.len();
    let is_last_page = *page + 1 >= total_pages;

    let on_answer = {
        let answers = answers.clone();
        Callback::from(move |(question_id, score): (u64, u8)| {
            let mut current = (*answers).clone();
            current.insert(question_id, score);
            answers.set(current);
        })
    };

    let on_prev = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            if *page > 0 {
                page.set(*page - 1);
            }
        })
    };

    let on_next = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(*page + 1))
    };

    let on_submit = {
        let questions = questions.clone();
        let answers = answers.clone();
        let result = result.clone();
        let submitting = submitting.clone();
        Callback::from(move |_: MouseEvent| {
            if *submitting {
                return;
            }
            if answers.len() < questions.len() {
                toast::warning("Vui lòng trả lời tất cả câu hỏi trước khi nộp bài");
                return;
            }
            submitting.set(true);
            let sheet = CareerAnswers { answers: (*answers).clone() };
            let result = result.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                if let Ok(response) = career_service::calculate_career_result(&sheet).await {
                    match response.into_data().as_deref().and_then(CareerType::parse) {
                        Some(career_type) => result.set(Some(career_type)),
                        None => toast::error("Không đọc được kết quả. Vui lòng thử lại."),
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="career-test">
            <h1>{ "Trắc nghiệm định hướng nghề nghiệp" }</h1>
            <p class="career-progress">
                { format!("Đã trả lời {}/{} câu · Trang {}/{}", answered, questions.len(), *page + 1, total_pages) }
            </p>
            { for visible.iter().map(|question| {
                let current = answers.get(&question.id).copied();
                html! {
                    <div key={question.id.to_string()} class="career-question">
                        <p>{ &question.content }</p>
                        <div class="career-scale">
                            { for (1u8..=5).map(|score| {
                                let on_answer = on_answer.clone();
                                let question_id = question.id;
                                let active = current == Some(score);
                                html! {
                                    <button
                                        class={classes!("scale-option", active.then_some("active"))}
                                        onclick={Callback::from(move |_: MouseEvent| on_answer.emit((question_id, score)))}
                                    >
                                        { score }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                }
            }) }
            <div class="career-nav">
                <button class="btn btn-ghost" onclick={on_prev} disabled={*page == 0}>
                    { "← Trang trước" }
                </button>
                if is_last_page {
                    <button class="btn btn-primary" onclick={on_submit} disabled={*submitting}>
                        { if *submitting { "Đang chấm..." } else { "Nộp bài" } }
                    </button>
                } else {
                    <button class="btn btn-primary" onclick={on_next}>{ "Trang sau →" }</button>
                }
            </div>
        </div>
    }
}
