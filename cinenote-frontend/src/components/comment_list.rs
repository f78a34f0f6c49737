use leptos::*;

use cinenote_core::{
    entities::Comment,
    text::{rating_label, COMMENTS_TITLE, NO_COMMENTS_YET, REMOVE_LABEL},
};

use crate::Comments;

#[component]
pub fn CommentList() -> impl IntoView {
    let comments = expect_context::<Comments>();
    let list = comments.list();

    view! {
      <div>
        <h3>{ COMMENTS_TITLE }</h3>
        <Show
          when = move || list.with(|l| !l.is_empty())
          fallback = || view! {
            <div class="alert alert-info mt-4 w-100" role="alert">{ NO_COMMENTS_YET }</div>
          }
        >
          <For
            each = move || list.get()
            key = |comment| comment.id
            children = move |comment| view! { <CommentCard comment /> }
          />
        </Show>
      </div>
    }
}

#[component]
fn CommentCard(comment: Comment) -> impl IntoView {
    let comments = expect_context::<Comments>();
    let Comment { id, text, rating, .. } = comment;

    view! {
      <div class="card mb-5">
        <div class="card-body card-body-custom">
          <p class="card-text note-comment">{ rating_label(rating) }</p>
          <p class="card-text">{ text }</p>
          <button
            class="btn btn-danger btn-comment"
            on:click = move |_| comments.remove(id)
          >
            { REMOVE_LABEL }
          </button>
        </div>
      </div>
    }
}
