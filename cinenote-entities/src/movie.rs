use time::Date;

/// A movie as presented to the visitor.
///
/// Movies are fetched from an external source and never modified locally.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title        : String,
    pub poster_url   : Option<String>,
    pub overview     : String,
    pub release_date : Option<Date>,
    pub vote_average : f64,
    pub vote_count   : u64,
}
