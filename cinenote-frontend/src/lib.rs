use leptos::*;

use cinenote_core::{
    entities::{Comment, CommentId},
    loader::{LoadState, MovieLoader},
    store::CommentStore,
    usecases,
    util::validate::{CommentInvalidations, NewComment},
};
use cinenote_frontend_api::MovieApi;

mod components;
mod config;

use components::*;

pub use config::Config;

/// Comment state shared by the views.
///
/// The store is owned by the application root.
/// Views read the `list` snapshot that is refreshed
/// by a store observer after every mutation.
#[derive(Clone, Copy)]
pub struct Comments {
    store: StoredValue<CommentStore>,
    list: ReadSignal<Vec<Comment>>,
}

impl Comments {
    fn new() -> Self {
        let (list, set_list) = create_signal(Vec::<Comment>::new());
        let mut store = CommentStore::new();
        store.subscribe(move |comments| set_list.set(comments.to_vec()));
        Self {
            store: store_value(store),
            list,
        }
    }

    #[must_use]
    pub const fn list(self) -> ReadSignal<Vec<Comment>> {
        self.list
    }

    /// Returns `None` if the store has already been disposed.
    #[must_use]
    pub fn submit(
        self,
        new_comment: NewComment,
    ) -> Option<Result<CommentId, CommentInvalidations>> {
        self.store
            .try_update_value(|store| usecases::submit_comment(store, new_comment))
    }

    pub fn remove(self, id: CommentId) {
        self.store
            .update_value(|store| usecases::remove_comment(store, id));
    }
}

#[component]
#[must_use]
pub fn App(config: Config) -> impl IntoView {
    let Config {
        movie_api_url,
        load_error_message,
    } = config;

    // -- signals -- //

    let comments = Comments::new();
    provide_context(comments);

    let loader = create_rw_signal(MovieLoader::new(load_error_message));

    // -- actions -- //

    let movie_api = MovieApi::new(movie_api_url);

    let fetch_movie = create_action(move |_: &()| {
        let api = movie_api.clone();
        async move {
            log::debug!("Fetch random movie from {}", api.url());
            let result = api.random_movie().await;
            loader.update(|l| {
                l.finish(result);
            });
        }
    });

    fetch_movie.dispatch(());

    move || match loader.with(|l| l.state().clone()) {
        LoadState::Loading => view! { <Spinner /> }.into_view(),
        LoadState::Failed(message) => view! {
          <div class="alert alert-danger mt-4" role="alert">{ message }</div>
        }
        .into_view(),
        LoadState::Loaded(movie) => view! {
          <div class="container mt-4">
            <div class="row justify-content-center">
              <div class="col-12 col-md-6">
                <MovieCard movie />
                <CommentForm />
                <CommentList />
              </div>
            </div>
          </div>
        }
        .into_view(),
    }
}

pub fn run(config: Config) {
    mount_to_body(move || view! { <App config /> });
}
