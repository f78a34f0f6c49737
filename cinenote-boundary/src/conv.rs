use cinenote_entities as e;
use time::{format_description::FormatItem, macros::format_description, Date};

use super::*;

const RELEASE_DATE_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day]");

// The API sometimes appends a time part to the date.
fn parse_release_date(s: &str) -> Option<Date> {
    let date = s.trim().get(..10)?;
    Date::parse(date, RELEASE_DATE_FORMAT).ok()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_vote_count(count: f64) -> Option<u64> {
    if !count.is_finite() || count < 0.0 {
        return None;
    }
    Some(count.round() as u64)
}

impl From<Movie> for e::movie::Movie {
    fn from(from: Movie) -> Self {
        let Movie {
            original_title,
            poster_path,
            overview,
            release_date,
            vote_average,
            vote_count,
        } = from;
        Self {
            title: original_title,
            poster_url: poster_path.filter(|p| !p.trim().is_empty()),
            overview: overview.unwrap_or_default(),
            release_date: release_date.as_deref().and_then(parse_release_date),
            vote_average: vote_average.filter(|v| v.is_finite()).unwrap_or_default(),
            vote_count: vote_count.and_then(round_vote_count).unwrap_or_default(),
        }
    }
}
