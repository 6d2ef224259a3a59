// ============================================================
// 🏠 HOME - catálogo público de cursos
// ============================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{CourseDetail, Navbar};
use crate::events::{self, AppEvent};
use crate::hooks::{use_app_events, use_auth};
use crate::models::{Category, Course};
use crate::services::{category_service, course_service};
use crate::stores::intent::{self, CourseAccess};
use crate::utils::format::format_price;

/// Catálogo con filtro por categoría y búsqueda. Tocar un curso sin sesión
/// guarda el curso pendiente en memoria y abre el login; al completarse el
/// login se abre ese curso.
#[function_component(HomeView)]
pub fn home_view() -> Html {
    let session = use_auth();
    let categories = use_state(Vec::<Category>::new);
    let courses = use_state(Vec::<Course>::new);
    let selected_category = use_state(|| None::<u64>);
    let search = use_state(String::new);
    let viewing = use_state(|| None::<u64>);
    let loading = use_state(|| true);
    // Intent efímero: sobrevive al modal de login, no a un reload.
    let pending_course = use_mut_ref(|| None::<u64>);
    // Última lista completa, para filtrar del lado del cliente si el
    // endpoint por categoría falla.
    let all_courses = use_mut_ref(Vec::<Course>::new);

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

    {
        let courses = courses.clone();
        let loading = loading.clone();
        let all_courses = all_courses.clone();
        use_effect_with(*selected_category, move |selected| {
            loading.set(true);
            let selected = *selected;
            spawn_local(async move {
                let result = match selected {
                    Some(category_id) => {
                        course_service::get_courses_by_category_id(category_id).await
                    }
                    None => course_service::get_all_published_courses().await,
                };
                match (selected, result.ok().and_then(|response| response.into_data())) {
                    (None, Some(list)) => {
                        *all_courses.borrow_mut() = list.clone();
                        courses.set(list);
                    }
                    (Some(_), Some(list)) => courses.set(list),
                    (Some(category_id), None) => {
                        // Fallback: filtra la última lista completa.
                        courses.set(filter_by_category(&all_courses.borrow(), category_id));
                    }
                    (None, None) => {}
                }
                loading.set(false);
            });
            || ()
        });
    }

    // Al completarse un login interactivo se abre el curso que lo provocó.
    {
        let viewing = viewing.clone();
        let pending_course = pending_course.clone();
        use_app_events(Callback::from(move |event: AppEvent| {
            if let Some(course_id) = intent::consume_course_intent(&pending_course, &event) {
                viewing.set(Some(course_id));
            }
        }));
    }

    let on_course_click = {
        let session = session.clone();
        let viewing = viewing.clone();
        let pending_course = pending_course.clone();
        Callback::from(move |course_id: u64| {
            match intent::resolve_course_click(&pending_course, session.is_authenticated(), course_id)
            {
                CourseAccess::Open(course_id) => viewing.set(Some(course_id)),
                CourseAccess::Deferred => events::publish(AppEvent::SessionExpired),
            }
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    if let Some(course_id) = *viewing {
        let on_back = {
            let viewing = viewing.clone();
            Callback::from(move |_| viewing.set(None))
        };
        return html! {
            <>
                <Navbar />
                <CourseDetail {course_id} {on_back} />
            </>
        };
    }

    let needle = search.trim().to_lowercase();
    let visible: Vec<&Course> = courses
        .iter()
        .filter(|course| matches_search(course, &needle))
        .collect();

    let select_category = |target: Option<u64>| {
        let selected_category = selected_category.clone();
        Callback::from(move |_: MouseEvent| selected_category.set(target))
    };

    html! {
        <>
            <Navbar />
            <main class="home">
                <header class="hero">
                    <h1>{ "Học lập trình theo lộ trình" }</h1>
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Tìm khóa học..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                </header>
                <div class="category-filter">
                    <button
                        class={classes!("category-chip", selected_category.is_none().then_some("active"))}
                        onclick={select_category(None)}
                    >
                        { "Tất cả" }
                    </button>
                    { for categories.iter().map(|category| {
                        let active = *selected_category == Some(category.id);
                        html! {
                            <button
                                key={category.id.to_string()}
                                class={classes!("category-chip", active.then_some("active"))}
                                onclick={select_category(Some(category.id))}
                            >
                                { &category.name }
                            </button>
                        }
                    }) }
                </div>
                if *loading {
                    <div class="loading">{ "⏳ Đang tải khóa học..." }</div>
                } else if visible.is_empty() {
                    <p class="empty">{ "Không tìm thấy khóa học nào." }</p>
                } else {
                    <div class="course-grid">
                        { for visible.iter().map(|course| {
                            let on_click = {
                                let on_course_click = on_course_click.clone();
                                let course_id = course.id;
                                Callback::from(move |_: MouseEvent| on_course_click.emit(course_id))
                            };
                            html! {
                                <article key={course.id.to_string()} class="course-card" onclick={on_click}>
                                    if let Some(thumbnail) = &course.thumbnail_url {
                                        <img src={thumbnail.clone()} alt={course.title.clone()} />
                                    }
                                    <h3>{ &course.title }</h3>
                                    if let Some(name) = course.category_name() {
                                        <span class="course-category">{ name }</span>
                                    }
                                    if let Some(description) = &course.description {
                                        <p>{ description }</p>
                                    }
                                    <span class="course-price">
                                        { course.price.map(format_price).unwrap_or_else(|| "Miễn phí".to_string()) }
                                    </span>
                                </article>
                            }
                        }) }
                    </div>
                }
            </main>
        </>
    }
}

/// Búsqueda sobre título Y descripción; `needle` llega ya en minúsculas.
fn matches_search(course: &Course, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    course.title.to_lowercase().contains(needle)
        || course
            .description
            .as_ref()
            .is_some_and(|description| description.to_lowercase().contains(needle))
}

/// Filtro local por categoría cuando el endpoint dedicado falla.
fn filter_by_category(courses: &[Course], category_id: u64) -> Vec<Course> {
    courses
        .iter()
        .filter(|course| course.belongs_to(category_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: u64, title: &str, description: Option<&str>, category_id: Option<u64>) -> Course {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "description": description,
            "categoryId": category_id,
        }))
        .unwrap()
    }

    #[test]
    fn la_busqueda_mira_titulo_y_descripcion() {
        let by_title = course(1, "Lập trình Rust", None, None);
        let by_description = course(2, "Khóa nền tảng", Some("Giới thiệu Rust cơ bản"), None);
        let neither = course(3, "Toán rời rạc", Some("Logic và tổ hợp"), None);

        assert!(matches_search(&by_title, "rust"));
        assert!(matches_search(&by_description, "rust"));
        assert!(!matches_search(&neither, "rust"));
        // Sin término de búsqueda pasa todo.
        assert!(matches_search(&neither, ""));
    }

    #[test]
    fn el_fallback_filtra_la_lista_completa_por_categoria() {
        let all = vec![
            course(1, "Rust", None, Some(2)),
            course(2, "Toán", None, Some(3)),
            course(3, "Go", None, Some(2)),
        ];

        let filtered = filter_by_category(&all, 2);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|c| c.belongs_to(2)));
    }
}
