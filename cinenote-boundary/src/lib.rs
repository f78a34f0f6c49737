use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A movie record as delivered by the movie API.
///
/// The API answers with a JSON array of these records.
/// Apart from the title every field may be missing or `null`,
/// and the vote count is sometimes sent as a float.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Movie {
    pub original_title : String,
    #[serde(default)]
    pub poster_path    : Option<String>,
    #[serde(default)]
    pub overview       : Option<String>,
    #[serde(default)]
    pub release_date   : Option<String>,
    #[serde(default)]
    pub vote_average   : Option<f64>,
    #[serde(default)]
    pub vote_count     : Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_api_response() {
        let json = r#"[{
            "id": "9a0e",
            "original_title": "The Thing",
            "poster_path": "https://image.tmdb.org/t/p/original/thing.jpg",
            "release_date": "1982-06-25",
            "overview": "Antarctica.",
            "vote_average": 8.1,
            "vote_count": 6443
        }]"#;
        let movies: Vec<Movie> = serde_json::from_str(json).unwrap();
        assert_eq!(movies.len(), 1);
        let m = &movies[0];
        assert_eq!(m.original_title, "The Thing");
        assert_eq!(m.release_date.as_deref(), Some("1982-06-25"));
        assert_eq!(m.vote_count, Some(6443.0));
    }

    #[test]
    fn deserialize_with_missing_optional_fields() {
        let json = r#"{ "original_title": "Untitled" }"#;
        let m: Movie = serde_json::from_str(json).unwrap();
        assert!(m.poster_path.is_none());
        assert!(m.overview.is_none());
        assert!(m.vote_count.is_none());
    }

    #[test]
    fn deserialize_null_and_float_fields() {
        let json = r#"{
            "original_title": "Alien",
            "poster_path": null,
            "overview": null,
            "release_date": null,
            "vote_average": null,
            "vote_count": 1234.0
        }"#;
        let m: Movie = serde_json::from_str(json).unwrap();
        assert!(m.overview.is_none());
        assert!(m.vote_average.is_none());
        assert_eq!(m.vote_count, Some(1234.0));
    }
}
