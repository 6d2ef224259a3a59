// ============================================================
// 💬 POST DETAIL - bài viết + bình luận
// ============================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::events::{self, AppEvent};
use crate::hooks::use_auth;
use crate::models::{Comment, NewComment, Post};
use crate::services::forum_service;

#[derive(Properties, PartialEq)]
pub struct PostDetailModalProps {
    pub post: Post,
    pub on_close: Callback<()>,
}

#[function_component(PostDetailModal)]
pub fn post_detail_modal(props: &PostDetailModalProps) -> Html {
    let session = use_auth();
    let comments = use_state(Vec::<Comment>::new);
    let comment_ref = use_node_ref();
    let submitting = use_state(|| false);
    let reload = use_state(|| 0u32);

    {
        let comments = comments.clone();
        use_effect_with((props.post.id, *reload), move |(post_id, _)| {
            let post_id = *post_id;
            spawn_local(async move {
                if let Ok(response) = forum_service::get_comments_by_post_id(post_id).await {
                    if let Some(list) = response.into_data() {
                        comments.set(list);
                    }
                }
            });
            || ()
        });
    }

    let on_submit = {
        let session = session.clone();
        let comment_ref = comment_ref.clone();
        let submitting = submitting.clone();
        let reload = reload.clone();
        let post_id = props.post.id;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            // Comentar pide sesión; el modal de login recoge al usuario.
            if !session.is_authenticated() {
                events::publish(AppEvent::SessionExpired);
                return;
            }
            let Some(textarea) = comment_ref.cast::<HtmlTextAreaElement>() else {
                return;
            };
            let content = textarea.value();
            if content.trim().is_empty() {
                return;
            }
            submitting.set(true);

            let submitting = submitting.clone();
            let reload = reload.clone();
            spawn_local(async move {
                if forum_service::create_comment(&NewComment { content, post_id })
                    .await
                    .is_ok()
                {
                    textarea.set_value("");
                    reload.set(*reload + 1);
                }
                submitting.set(false);
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal post-detail-modal">
                <div class="modal-header">
                    <h2>{ &props.post.title }</h2>
                    <button class="modal-close" onclick={on_close}>{ "✕" }</button>
                </div>
                <p class="post-author">
                    { format!("👤 {}", props.post.account.as_deref().unwrap_or("Ẩn danh")) }
                    if let Some(posted_on) = props.post.posted_on() {
                        <span class="post-date">{ format!(" · {}", posted_on) }</span>
                    }
                </p>
                <div class="post-content">{ &props.post.content }</div>
                <h3>{ format!("Bình luận ({})", comments.len()) }</h3>
                <ul class="comment-list">
                    { for comments.iter().map(|comment| html! {
                        <li key={comment.id.to_string()} class="comment-item">
                            <span class="comment-author">
                                { comment.account.as_deref().unwrap_or("Ẩn danh") }
                            </span>
                            <p>{ &comment.content }</p>
                        </li>
                    }) }
                </ul>
                <form class="comment-form" onsubmit={on_submit}>
                    <textarea ref={comment_ref} placeholder="Viết bình luận..." />
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        { "Gửi bình luận" }
                    </button>
                </form>
            </div>
        </div>
    }
}
