// ============================================================
// 🧱 COURSE BUILDER - dựng cây nội dung khóa học
// ============================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::toast;
use crate::models::{
    Course, CourseContent, NewChapter, NewLearningPath, NewLesson, NewResource,
};
use crate::services::{course_service, course_structure_service, upload_service};
use crate::utils::format::format_duration;

#[function_component(CourseBuilderView)]
pub fn course_builder_view() -> Html {
    let courses = use_state(Vec::<Course>::new);
    let selected_course = use_state(|| None::<u64>);
    let content = use_state(|| None::<CourseContent>);
    let reload = use_state(|| 0u32);

    {
        let courses = courses.clone();
        use_effect_with((), move |_| {
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
        let content = content.clone();
        use_effect_with((*selected_course, *reload), move |(course_id, _)| {
            if let Some(course_id) = *course_id {
                let content = content.clone();
                spawn_local(async move {
                    if let Ok(response) = course_service::get_course_by_id(course_id).await {
                        content.set(response.into_data().map(CourseContent::normalized));
                    }
                });
            } else {
                content.set(None);
            }
            || ()
        });
    }

    let on_select_course = {
        let selected_course = selected_course.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                selected_course.set(select.value().parse().ok());
            }
        })
    };

    let on_created = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    html! {
        <div class="admin-panel course-builder">
            <h1>{ "Xây dựng khóa học" }</h1>
            <select onchange={on_select_course}>
                <option value="" selected=true disabled=true>{ "Chọn khóa học" }</option>
                { for courses.iter().map(|course| html! {
                    <option key={course.id.to_string()} value={course.id.to_string()}>
                        { &course.title }
                    </option>
                }) }
            </select>
            if let (Some(course_id), Some(course)) = (*selected_course, &*content) {
                <BuilderTree content={course.clone()} />
                <BuilderForms {course_id} content={course.clone()} on_created={on_created} />
            } else {
                <p class="empty">{ "Chọn một khóa học để bắt đầu." }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BuilderTreeProps {
    content: CourseContent,
}

#[function_component(BuilderTree)]
fn builder_tree(props: &BuilderTreeProps) -> Html {
    html! {
        <div class="builder-tree">
            { for props.content.learning_paths().iter().map(|path| html! {
                <details key={path.id.to_string()} open=true>
                    <summary>{ format!("🛤️ {}", path.title) }</summary>
                    { for path.chapters.iter().map(|chapter| html! {
                        <details key={chapter.id.to_string()}>
                            <summary>{ format!("📖 {}", chapter.title) }</summary>
                            <ul>
                                { for chapter.lessons.iter().map(|lesson| html! {
                                    <li key={lesson.id.to_string()}>
                                        { format!(
                                            "📄 {} ({}) · {} tài liệu",
                                            lesson.title,
                                            format_duration(lesson.duration),
                                            lesson.resources.len()
                                        ) }
                                    </li>
                                }) }
                            </ul>
                        </details>
                    }) }
                </details>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BuilderFormsProps {
    course_id: u64,
    content: CourseContent,
    on_created: Callback<()>,
}

/// Un formulario por nivel del árbol. Cada alta refresca el árbol entero;
/// la posición se calcula como siguiente dentro del padre.
#[function_component(BuilderForms)]
fn builder_forms(props: &BuilderFormsProps) -> Html {
    let path_title_ref = use_node_ref();
    let chapter_title_ref = use_node_ref();
    let chapter_parent_ref = use_node_ref();
    let lesson_title_ref = use_node_ref();
    let lesson_duration_ref = use_node_ref();
    let lesson_parent_ref = use_node_ref();
    let resource_name_ref = use_node_ref();
    let resource_file_ref = use_node_ref();
    let resource_parent_ref = use_node_ref();
    let uploading = use_state(|| false);

    let paths = props.content.learning_paths().to_vec();
    let chapters: Vec<_> = paths.iter().flat_map(|p| p.chapters.iter().cloned()).collect();
    let lessons: Vec<_> = chapters.iter().flat_map(|c| c.lessons.iter().cloned()).collect();

    let on_add_path = {
        let path_title_ref = path_title_ref.clone();
        let course_id = props.course_id;
        let next_position = paths.len() as i32 + 1;
        let on_created = props.on_created.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(input) = path_title_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let title = input.value().trim().to_string();
            if title.is_empty() {
                return;
            }
            let on_created = on_created.clone();
            spawn_local(async move {
                let path = NewLearningPath { title, position: next_position, course_id };
                if course_structure_service::create_learning_path(&path).await.is_ok() {
                    toast::success("Đã thêm lộ trình");
                    input.set_value("");
                    on_created.emit(());
                }
            });
        })
    };

    let on_add_chapter = {
        let chapter_title_ref = chapter_title_ref.clone();
        let chapter_parent_ref = chapter_parent_ref.clone();
        let paths = paths.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Some(input), Some(parent)) = (
                chapter_title_ref.cast::<HtmlInputElement>(),
                chapter_parent_ref.cast::<HtmlSelectElement>(),
            ) else {
                return;
            };
            let title = input.value().trim().to_string();
            let Ok(learning_path_id) = parent.value().parse::<u64>() else {
                toast::warning("Chọn lộ trình cha");
                return;
            };
            if title.is_empty() {
                return;
            }
            let next_position = paths
                .iter()
                .find(|p| p.id == learning_path_id)
                .map(|p| p.chapters.len() as i32 + 1)
                .unwrap_or(1);
            let on_created = on_created.clone();
            spawn_local(async move {
                let chapter = NewChapter { title, position: next_position, learning_path_id };
                if course_structure_service::create_chapter(&chapter).await.is_ok() {
                    toast::success("Đã thêm chương");
                    input.set_value("");
                    on_created.emit(());
                }
            });
        })
    };

    let on_add_lesson = {
        let lesson_title_ref = lesson_title_ref.clone();
        let lesson_duration_ref = lesson_duration_ref.clone();
        let lesson_parent_ref = lesson_parent_ref.clone();
        let chapters = chapters.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Some(input), Some(duration_input), Some(parent)) = (
                lesson_title_ref.cast::<HtmlInputElement>(),
                lesson_duration_ref.cast::<HtmlInputElement>(),
                lesson_parent_ref.cast::<HtmlSelectElement>(),
            ) else {
                return;
            };
            let title = input.value().trim().to_string();
            let Ok(chapter_id) = parent.value().parse::<u64>() else {
                toast::warning("Chọn chương cha");
                return;
            };
            if title.is_empty() {
                return;
            }
            let duration = duration_input.value().parse().unwrap_or(0);
            let next_position = chapters
                .iter()
                .find(|c| c.id == chapter_id)
                .map(|c| c.lessons.len() as i32 + 1)
                .unwrap_or(1);
            let on_created = on_created.clone();
            spawn_local(async move {
                let lesson = NewLesson { title, position: next_position, duration, chapter_id };
                if course_structure_service::create_lesson(&lesson).await.is_ok() {
                    toast::success("Đã thêm bài học");
                    input.set_value("");
                    duration_input.set_value("");
                    on_created.emit(());
                }
            });
        })
    };

    let on_add_resource = {
        let resource_name_ref = resource_name_ref.clone();
        let resource_file_ref = resource_file_ref.clone();
        let resource_parent_ref = resource_parent_ref.clone();
        let uploading = uploading.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *uploading {
                return;
            }
            let (Some(name_input), Some(file_input), Some(parent)) = (
                resource_name_ref.cast::<HtmlInputElement>(),
                resource_file_ref.cast::<HtmlInputElement>(),
                resource_parent_ref.cast::<HtmlSelectElement>(),
            ) else {
                return;
            };
            let name = name_input.value().trim().to_string();
            let Ok(lesson_id) = parent.value().parse::<u64>() else {
                toast::warning("Chọn bài học cha");
                return;
            };
            let Some(file) = file_input.files().and_then(|files| files.get(0)) else {
                toast::warning("Chọn tệp tài liệu");
                return;
            };
            if name.is_empty() {
                return;
            }
            uploading.set(true);
            let uploading = uploading.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                let is_video = file.type_().starts_with("video/");
                let uploaded = if is_video {
                    upload_service::upload_video(&file).await
                } else {
                    upload_service::upload_document(&file).await
                };
                if let Ok(url) = uploaded {
                    let resource = NewResource {
                        name,
                        url: Some(url),
                        resource_type: Some(file.type_()),
                        size: Some((file.size() / 1024.0) as u64),
                        lesson_id,
                    };
                    if course_structure_service::create_resource(&resource).await.is_ok() {
                        toast::success("Đã thêm tài liệu");
                        name_input.set_value("");
                        file_input.set_value("");
                        on_created.emit(());
                    }
                }
                uploading.set(false);
            });
        })
    };

    html! {
        <div class="builder-forms">
            <form onsubmit={on_add_path}>
                <h3>{ "Thêm lộ trình" }</h3>
                <input ref={path_title_ref} type="text" placeholder="Tên lộ trình" />
                <button type="submit" class="btn btn-primary">{ "Thêm" }</button>
            </form>
            <form onsubmit={on_add_chapter}>
                <h3>{ "Thêm chương" }</h3>
                <select ref={chapter_parent_ref}>
                    { for paths.iter().map(|path| html! {
                        <option key={path.id.to_string()} value={path.id.to_string()}>{ &path.title }</option>
                    }) }
                </select>
                <input ref={chapter_title_ref} type="text" placeholder="Tên chương" />
                <button type="submit" class="btn btn-primary">{ "Thêm" }</button>
            </form>
            <form onsubmit={on_add_lesson}>
                <h3>{ "Thêm bài học" }</h3>
                <select ref={lesson_parent_ref}>
                    { for chapters.iter().map(|chapter| html! {
                        <option key={chapter.id.to_string()} value={chapter.id.to_string()}>{ &chapter.title }</option>
                    }) }
                </select>
                <input ref={lesson_title_ref} type="text" placeholder="Tên bài học" />
                <input ref={lesson_duration_ref} type="number" min="0" placeholder="Thời lượng (phút)" />
                <button type="submit" class="btn btn-primary">{ "Thêm" }</button>
            </form>
            <form onsubmit={on_add_resource}>
                <h3>{ "Thêm tài liệu" }</h3>
                <select ref={resource_parent_ref}>
                    { for lessons.iter().map(|lesson| html! {
                        <option key={lesson.id.to_string()} value={lesson.id.to_string()}>{ &lesson.title }</option>
                    }) }
                </select>
                <input ref={resource_name_ref} type="text" placeholder="Tên tài liệu" />
                <input ref={resource_file_ref} type="file" />
                <button type="submit" class="btn btn-primary" disabled={*uploading}>
                    { if *uploading { "⏳ Đang tải..." } else { "Thêm" } }
                </button>
            </form>
        </div>
    }
}
