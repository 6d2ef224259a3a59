// ============================================================
// 🗣️ FORUM - chủ đề và bài viết
// ============================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::{toast, Navbar, PostDetailModal};
use crate::events::{self, AppEvent};
use crate::hooks::use_auth;
use crate::models::{NewPost, NewTopic, Post, Topic};
use crate::services::forum_service;

#[function_component(ForumView)]
pub fn forum_view() -> Html {
    let auth = use_auth();
    let topics = use_state(Vec::<Topic>::new);
    let selected_topic = use_state(|| None::<u64>);
    let posts = use_state(Vec::<Post>::new);
    let open_post = use_state(|| None::<Post>);
    let composing = use_state(|| false);
    let composing_topic = use_state(|| false);
    let reload_posts = use_state(|| 0u32);
    let reload_topics = use_state(|| 0u32);
    let title_ref = use_node_ref();
    let content_ref = use_node_ref();
    let topic_title_ref = use_node_ref();
    let topic_description_ref = use_node_ref();

    {
        let topics = topics.clone();
        let selected_topic = selected_topic.clone();
        use_effect_with(*reload_topics, move |_| {
            spawn_local(async move {
                if let Ok(response) = forum_service::get_all_topics().await {
                    if let Some(list) = response.into_data() {
                        if selected_topic.is_none() {
                            selected_topic.set(list.first().map(|topic| topic.id));
                        }
                        topics.set(list);
                    }
                }
            });
            || ()
        });
    }

    {
        let posts = posts.clone();
        use_effect_with((*selected_topic, *reload_posts), move |(topic_id, _)| {
            if let Some(topic_id) = *topic_id {
                let posts = posts.clone();
                spawn_local(async move {
                    if let Ok(response) = forum_service::get_posts_by_topic_id(topic_id).await {
                        if let Some(list) = response.into_data() {
                            posts.set(list);
                        }
                    }
                });
            } else {
                posts.set(Vec::new());
            }
            || ()
        });
    }

    let on_compose_topic = {
        let auth = auth.clone();
        let composing_topic = composing_topic.clone();
        Callback::from(move |_: MouseEvent| {
            if auth.is_authenticated() {
                composing_topic.set(!*composing_topic);
            } else {
                events::publish(AppEvent::SessionExpired);
            }
        })
    };

    let on_submit_topic = {
        let topic_title_ref = topic_title_ref.clone();
        let topic_description_ref = topic_description_ref.clone();
        let composing_topic = composing_topic.clone();
        let reload_topics = reload_topics.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Some(title_input), Some(description_input)) = (
                topic_title_ref.cast::<HtmlInputElement>(),
                topic_description_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let title = title_input.value();
            if title.trim().is_empty() {
                toast::warning("Vui lòng nhập tên chủ đề");
                return;
            }
            let topic = NewTopic {
                title: title.trim().to_string(),
                description: description_input.value().trim().to_string(),
                published: true,
            };
            let composing_topic = composing_topic.clone();
            let reload_topics = reload_topics.clone();
            spawn_local(async move {
                if forum_service::create_topic(&topic).await.is_ok() {
                    toast::success("Đã tạo chủ đề");
                    composing_topic.set(false);
                    reload_topics.set(*reload_topics + 1);
                }
            });
        })
    };

    let on_compose = {
        let auth = auth.clone();
        let composing = composing.clone();
        Callback::from(move |_: MouseEvent| {
            if auth.is_authenticated() {
                composing.set(true);
            } else {
                events::publish(AppEvent::SessionExpired);
            }
        })
    };

    let on_submit_post = {
        let title_ref = title_ref.clone();
        let content_ref = content_ref.clone();
        let composing = composing.clone();
        let selected_topic = selected_topic.clone();
        let reload_posts = reload_posts.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(topic_id) = *selected_topic else {
                return;
            };
            let (Some(title_input), Some(content_input)) = (
                title_ref.cast::<HtmlInputElement>(),
                content_ref.cast::<HtmlTextAreaElement>(),
            ) else {
                return;
            };
            let title = title_input.value();
            let content = content_input.value();
            if title.trim().is_empty() || content.trim().is_empty() {
                toast::warning("Vui lòng nhập tiêu đề và nội dung");
                return;
            }
            let composing = composing.clone();
            let reload_posts = reload_posts.clone();
            spawn_local(async move {
                if forum_service::create_post(&NewPost { title, content, topic_id })
                    .await
                    .is_ok()
                {
                    toast::success("Đăng bài thành công");
                    composing.set(false);
                    reload_posts.set(*reload_posts + 1);
                }
            });
        })
    };

    let select_topic = |topic_id: u64| {
        let selected_topic = selected_topic.clone();
        Callback::from(move |_: MouseEvent| selected_topic.set(Some(topic_id)))
    };

    html! {
        <>
            <Navbar />
            <main class="forum">
                <aside class="topic-list">
                    <div class="topic-list-header">
                        <h2>{ "Chủ đề" }</h2>
                        <button class="btn btn-ghost" onclick={on_compose_topic}>{ "➕" }</button>
                    </div>
                    if *composing_topic {
                        <form class="topic-form" onsubmit={on_submit_topic}>
                            <input ref={topic_title_ref} type="text" placeholder="Tên chủ đề" />
                            <input ref={topic_description_ref} type="text" placeholder="Mô tả (tùy chọn)" />
                            <button type="submit" class="btn btn-primary">{ "Tạo" }</button>
                        </form>
                    }
                    { for topics.iter().filter(|topic| topic.published).map(|topic| {
                        let active = *selected_topic == Some(topic.id);
                        html! {
                            <button
                                key={topic.id.to_string()}
                                class={classes!("topic-item", active.then_some("active"))}
                                onclick={select_topic(topic.id)}
                            >
                                { &topic.title }
                            </button>
                        }
                    }) }
                </aside>
                <section class="post-list">
                    <div class="post-list-header">
                        <h2>{ "Bài viết" }</h2>
                        <button class="btn btn-primary" onclick={on_compose}>{ "✏️ Viết bài" }</button>
                    </div>
                    if *composing {
                        <form class="post-form" onsubmit={on_submit_post}>
                            <input ref={title_ref} type="text" placeholder="Tiêu đề" />
                            <textarea ref={content_ref} placeholder="Nội dung bài viết..." />
                            <button type="submit" class="btn btn-primary">{ "Đăng bài" }</button>
                        </form>
                    }
                    if posts.is_empty() {
                        <p class="empty">{ "Chưa có bài viết nào trong chủ đề này." }</p>
                    } else {
                        { for posts.iter().map(|post| {
                            let on_open = {
                                let open_post = open_post.clone();
                                let post = post.clone();
                                Callback::from(move |_: MouseEvent| open_post.set(Some(post.clone())))
                            };
                            html! {
                                <article key={post.id.to_string()} class="post-card" onclick={on_open}>
                                    <h3>{ &post.title }</h3>
                                    <span class="post-author">
                                        { format!("👤 {}", post.account.as_deref().unwrap_or("Ẩn danh")) }
                                    </span>
                                    if let Some(posted_on) = post.posted_on() {
                                        <span class="post-date">{ posted_on }</span>
                                    }
                                </article>
                            }
                        }) }
                    }
                </section>
                if let Some(post) = &*open_post {
                    <PostDetailModal
                        post={post.clone()}
                        on_close={{
                            let open_post = open_post.clone();
                            Callback::from(move |_| open_post.set(None))
                        }}
                    />
                }
            </main>
        </>
    }
}
