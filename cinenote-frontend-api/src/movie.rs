use gloo_net::http::Request;

use cinenote_boundary as b;
use cinenote_entities::movie::Movie;

use crate::{into_json, Error, Result};

pub const DEFAULT_MOVIE_API_URL: &str = "https://jsonfakery.com/movies/random/1";

/// Public movie API
#[derive(Debug, Clone)]
pub struct MovieApi {
    url: String,
}

impl MovieApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn random_movie(&self) -> Result<Movie> {
        let response = Request::get(&self.url).send().await?;
        let movies: Vec<b::Movie> = into_json(response).await?;
        first_movie(movies)
    }
}

impl Default for MovieApi {
    fn default() -> Self {
        Self::new(DEFAULT_MOVIE_API_URL.to_string())
    }
}

fn first_movie(movies: Vec<b::Movie>) -> Result<Movie> {
    movies.into_iter().next().map(Movie::from).ok_or(Error::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_first_movie() {
        let movies = ["First", "Second"]
            .into_iter()
            .map(|title| b::Movie {
                original_title: title.into(),
                poster_path: None,
                overview: None,
                release_date: None,
                vote_average: None,
                vote_count: None,
            })
            .collect();
        assert_eq!(first_movie(movies).unwrap().title, "First");
    }

    #[test]
    fn empty_response() {
        assert_eq!(first_movie(vec![]), Err(Error::Empty));
    }

    #[test]
    fn default_url() {
        assert_eq!(MovieApi::default().url(), DEFAULT_MOVIE_API_URL);
    }
}
