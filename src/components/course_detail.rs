// ============================================================
// 📖 COURSE DETAIL - nội dung khóa học cho học viên
// ============================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::toast;
use crate::models::{CourseContent, Lesson};
use crate::routes::Route;
use crate::services::{course_service, course_structure_service, ApiError};
use crate::utils::format::{format_duration, format_file_size};

#[derive(Properties, PartialEq)]
pub struct CourseDetailProps {
    pub course_id: u64,
    pub on_back: Callback<()>,
}

/// Vista protegida del contenido. Si el contenido no carga (el caso típico
/// es un 403 por falta de suscripción) se avisa y se redirige a los planes.
#[function_component(CourseDetail)]
pub fn course_detail(props: &CourseDetailProps) -> Html {
    let navigator = use_navigator().expect("CourseDetail debe vivir bajo un Router");
    let content = use_state(|| None::<CourseContent>);
    let loading = use_state(|| true);
    let open_lesson = use_state(|| None::<u64>);

    {
        let content = content.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        use_effect_with(props.course_id, move |course_id| {
            let course_id = *course_id;
            spawn_local(async move {
                match course_service::get_course_by_id(course_id).await {
                    Ok(response) => {
                        content.set(response.into_data().map(CourseContent::normalized));
                        loading.set(false);
                    }
                    Err(error) => {
                        loading.set(false);
                        // Cualquier fallo de carga termina en la página de
                        // planes; el 403 sólo cambia el mensaje.
                        if matches!(error, ApiError::Http { status: 403, .. }) {
                            toast::warning("Bạn cần đăng ký gói học để xem nội dung này");
                        } else {
                            toast::warning("Không tải được khóa học, mời bạn xem các gói học");
                        }
                        Timeout::new(2_000, move || navigator.push(&Route::Plans)).forget();
                    }
                }
            });
            || ()
        });
    }

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    if *loading {
        return html! { <div class="loading">{ "⏳ Đang tải nội dung..." }</div> };
    }

    let Some(course) = &*content else {
        return html! {
            <div class="course-detail-empty">
                <p>{ "Không tải được nội dung khóa học." }</p>
                <button class="btn btn-ghost" onclick={on_back}>{ "← Quay lại" }</button>
            </div>
        };
    };

    let (paths, chapters, lessons, minutes) = course.stats();

    html! {
        <div class="course-detail">
            <button class="btn btn-ghost" onclick={on_back}>{ "← Quay lại" }</button>
            <h1>{ course.title.as_deref().unwrap_or("Khóa học") }</h1>
            if let Some(description) = &course.description {
                <p class="course-description">{ description }</p>
            }
            <p class="course-stats">
                { format!(
                    "{} lộ trình · {} chương · {} bài học · {}",
                    paths, chapters, lessons, format_duration(minutes)
                ) }
            </p>
            { for course.learning_paths().iter().map(|path| html! {
                <section key={path.id.to_string()} class="learning-path">
                    <h2>{ &path.title }</h2>
                    { for path.chapters.iter().map(|chapter| html! {
                        <div key={chapter.id.to_string()} class="chapter">
                            <h3>{ &chapter.title }</h3>
                            <ul class="lesson-list">
                                { for chapter.lessons.iter().map(|lesson| {
                                    render_lesson(lesson, &open_lesson)
                                }) }
                            </ul>
                        </div>
                    }) }
                </section>
            }) }
        </div>
    }
}

fn render_lesson(lesson: &Lesson, open_lesson: &UseStateHandle<Option<u64>>) -> Html {
    let is_open = **open_lesson == Some(lesson.id);
    let on_toggle = {
        let open_lesson = open_lesson.clone();
        let lesson_id = lesson.id;
        Callback::from(move |_: MouseEvent| {
            open_lesson.set(if *open_lesson == Some(lesson_id) {
                None
            } else {
                Some(lesson_id)
            });
        })
    };

    html! {
        <li key={lesson.id.to_string()} class="lesson-item">
            <button class="lesson-toggle" onclick={on_toggle}>
                { format!("📄 {} ({})", lesson.title, format_duration(lesson.duration)) }
            </button>
            if is_open {
                <ul class="resource-list">
                    { for lesson.resources.iter().map(|resource| html! {
                        <li key={resource.id.to_string()} class="resource-item">
                            {
                                match &resource.url {
                                    Some(url) => html! {
                                        <a href={url.clone()} target="_blank">{ &resource.name }</a>
                                    },
                                    // La lista llega sin URL para algunos
                                    // tipos; se pide el recurso al abrirlo.
                                    None => {
                                        let resource_id = resource.id;
                                        let on_open = Callback::from(move |_: MouseEvent| {
                                            spawn_local(async move {
                                                if let Ok(response) =
                                                    course_structure_service::get_resource_by_id(resource_id).await
                                                {
                                                    let url = response.into_data().and_then(|r| r.url);
                                                    match (web_sys::window(), url) {
                                                        (Some(window), Some(url)) => {
                                                            let _ = window.open_with_url_and_target(&url, "_blank");
                                                        }
                                                        _ => toast::error("Không mở được tài liệu"),
                                                    }
                                                }
                                            });
                                        });
                                        html! {
                                            <button class="resource-open" onclick={on_open}>
                                                { &resource.name }
                                            </button>
                                        }
                                    }
                                }
                            }
                            if let Some(size) = resource.size {
                                <span class="resource-size">{ format_file_size(size) }</span>
                            }
                        </li>
                    }) }
                </ul>
            }
        </li>
    }
}
