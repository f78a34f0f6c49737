use cinenote_core::text::LOAD_ERROR;
use cinenote_frontend_api::DEFAULT_MOVIE_API_URL;

/// Settings that are fixed when the app is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub movie_api_url: String,
    /// Shown instead of the page if the movie cannot be loaded.
    pub load_error_message: String,
}

impl Config {
    /// Reads `CINENOTE_MOVIE_API_URL` and `CINENOTE_LOAD_ERROR_MESSAGE`
    /// at compile time and falls back to the defaults.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            movie_api_url: option_env!("CINENOTE_MOVIE_API_URL")
                .unwrap_or(DEFAULT_MOVIE_API_URL)
                .to_string(),
            load_error_message: option_env!("CINENOTE_LOAD_ERROR_MESSAGE")
                .unwrap_or(LOAD_ERROR)
                .to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            movie_api_url: DEFAULT_MOVIE_API_URL.to_string(),
            load_error_message: LOAD_ERROR.to_string(),
        }
    }
}
