use leptos::*;

use cinenote_core::{
    entities::Movie,
    text::{release_date_label, vote_summary},
};

#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let Movie {
        title,
        poster_url,
        overview,
        release_date,
        vote_average,
        vote_count,
    } = movie;
    let alt = title.clone();

    view! {
      <div class="card movie-card mb-4">
        {
          poster_url.map(move |src| view! {
            <img class="card-img-top movie-poster" src={ src } alt={ alt } />
          })
        }
        <div class="card-body">
          <h5 class="card-title">{ title }</h5>
          {
            release_date.map(|date| view! {
              <p class="card-text date-sortie">{ release_date_label(date) }</p>
            })
          }
          <p class="card-text">{ overview }</p>
          <p class="card-text">{ vote_summary(vote_average, vote_count) }</p>
        </div>
      </div>
    }
}
