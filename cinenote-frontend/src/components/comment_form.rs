use leptos::{ev, *};

use cinenote_core::{
    entities::RatingValue,
    text::{
        ACCEPT_TERMS_LABEL, ADD_COMMENT_TITLE, COMMENT_LABEL, COMMENT_PLACEHOLDER, RATING_LABEL,
        RATING_PLACEHOLDER, SUBMIT_LABEL,
    },
    util::validate::{CommentField, CommentInvalidation, CommentInvalidations, NewComment},
};

use crate::Comments;

#[component]
pub fn CommentForm() -> impl IntoView {
    let comments = expect_context::<Comments>();

    // -- signals -- //

    let (text, set_text) = create_signal(String::new());
    let (rating, set_rating) = create_signal(String::new());
    let (accepted_terms, set_accepted_terms) = create_signal(false);
    let invalidations = create_rw_signal(CommentInvalidations::default());

    let invalidation_of = move |field: CommentField| {
        Signal::derive(move || invalidations.with(|i| i.get(field)))
    };
    let text_invalidation = invalidation_of(CommentField::Text);
    let rating_invalidation = invalidation_of(CommentField::Rating);
    let terms_invalidation = invalidation_of(CommentField::AcceptedTerms);

    // -- callbacks -- //

    let reset = move || {
        set_text.set(String::new());
        set_rating.set(String::new());
        set_accepted_terms.set(false);
        invalidations.set(CommentInvalidations::default());
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let new_comment = NewComment {
            text: text.get_untracked(),
            rating: rating.get_untracked(),
            accepted_terms: accepted_terms.get_untracked(),
        };
        match comments.submit(new_comment) {
            Some(Ok(id)) => {
                log::info!("Added comment {id}");
                reset();
            }
            Some(Err(err)) => {
                log::debug!("{err}");
                invalidations.set(err);
            }
            None => {
                log::error!("Unable to add comment: the comment store is gone");
            }
        }
    };

    view! {
      <form on:submit = on_submit class="mb-4" novalidate>
        <h3>{ ADD_COMMENT_TITLE }</h3>

        <div class="mb-3">
          <label for="comment" class="form-label">{ COMMENT_LABEL }</label>
          <textarea
            id="comment"
            rows="3"
            class="form-control"
            class:is-invalid = move || text_invalidation.get().is_some()
            placeholder = COMMENT_PLACEHOLDER
            prop:value = move || text.get()
            on:input = move |ev| set_text.set(event_target_value(&ev))
          ></textarea>
          <Feedback invalidation = text_invalidation />
        </div>

        <div class="mb-3">
          <label for="note" class="form-label">{ RATING_LABEL }</label>
          <select
            id="note"
            class="form-select"
            class:is-invalid = move || rating_invalidation.get().is_some()
            prop:value = move || rating.get()
            on:change = move |ev| set_rating.set(event_target_value(&ev))
          >
            <option value="">{ RATING_PLACEHOLDER }</option>
            {
              RatingValue::all()
                .map(|value| view! { <option value={ value.to_string() }>{ value.to_string() }</option> })
                .collect_view()
            }
          </select>
          <Feedback invalidation = rating_invalidation />
        </div>

        <div class="mb-3 form-check">
          <input
            id="acceptConditions"
            type="checkbox"
            class="form-check-input"
            class:is-invalid = move || terms_invalidation.get().is_some()
            prop:checked = move || accepted_terms.get()
            on:change = move |ev| set_accepted_terms.set(event_target_checked(&ev))
          />
          <label for="acceptConditions" class="form-check-label">{ ACCEPT_TERMS_LABEL }</label>
          <Feedback invalidation = terms_invalidation />
        </div>

        <button type="submit" class="btn btn-primary">{ SUBMIT_LABEL }</button>
      </form>
    }
}

#[component]
fn Feedback(invalidation: Signal<Option<CommentInvalidation>>) -> impl IntoView {
    move || {
        invalidation.get().map(|err| {
            view! { <div class="invalid-feedback d-block">{ err.to_string() }</div> }
        })
    }
}
