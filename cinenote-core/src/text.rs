//! Fixed user-facing texts.

use time::{format_description::FormatItem, macros::format_description, Date};

use crate::entities::RatingValue;

pub const LOAD_ERROR: &str = "Impossible de charger les informations du film.";
pub const NO_COMMENTS_YET: &str = "Aucun commentaire pour le moment.";
pub const COMMENTS_TITLE: &str = "Commentaires";
pub const ADD_COMMENT_TITLE: &str = "Ajouter un commentaire";
pub const COMMENT_LABEL: &str = "Commentaire";
pub const COMMENT_PLACEHOLDER: &str = "Entrez votre commentaire ici";
pub const RATING_LABEL: &str = "Note";
pub const RATING_PLACEHOLDER: &str = "Sélectionnez une note";
pub const ACCEPT_TERMS_LABEL: &str = "J'accepte les conditions générales";
pub const SUBMIT_LABEL: &str = "Ajouter";
pub const REMOVE_LABEL: &str = "Supprimer";

const RELEASE_DATE_FORMAT: &[FormatItem] = format_description!("[day]/[month]/[year]");

pub fn rating_label(rating: RatingValue) -> String {
    format!("Note: {rating}/{}", RatingValue::max())
}

pub fn release_date_label(date: Date) -> String {
    let date = date
        .format(RELEASE_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string());
    format!("Sorti le : {date}")
}

pub fn vote_summary(average: f64, count: u64) -> String {
    format!("Note moyenne : {average} ({count} votes)")
}
