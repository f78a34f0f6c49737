use leptos::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
      <div class="d-flex justify-content-center mt-4">
        <div class="spinner-border" role="status"></div>
      </div>
    }
}
