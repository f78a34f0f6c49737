use std::fmt;

use cinenote_entities::rating::RatingValue;
use strum::IntoStaticStr;
use thiserror::Error;

/// Maximum length of a comment, in UTF-16 code units
/// (the length a browser reports for the textarea value).
pub const MAX_COMMENT_LEN: usize = 500;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

/// Comment as entered by the visitor.
///
/// The rating is kept in its raw textual form
/// because it comes straight from the form control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub rating: String,
    pub accepted_terms: bool,
}

/// A comment that passed all checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidComment {
    pub text: String,
    pub rating: RatingValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum CommentField {
    Text,
    Rating,
    AcceptedTerms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum CommentInvalidation {
    #[error("Le commentaire est obligatoire")]
    Required,
    #[error("Max 500 caractères")]
    TooLong,
    #[error("La note doit être un nombre entre 1 et 5")]
    OutOfRange,
    #[error("Vous devez accepter les conditions générales")]
    TermsNotAccepted,
}

impl CommentInvalidation {
    /// Stable name of the reason, e.g. `tooLong`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The first failed check of each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentInvalidations {
    pub text: Option<CommentInvalidation>,
    pub rating: Option<CommentInvalidation>,
    pub accepted_terms: Option<CommentInvalidation>,
}

impl CommentInvalidations {
    pub const fn is_empty(&self) -> bool {
        self.text.is_none() && self.rating.is_none() && self.accepted_terms.is_none()
    }

    pub const fn get(&self, field: CommentField) -> Option<CommentInvalidation> {
        match field {
            CommentField::Text => self.text,
            CommentField::Rating => self.rating,
            CommentField::AcceptedTerms => self.accepted_terms,
        }
    }

    /// All failures in form order.
    pub fn iter(&self) -> impl Iterator<Item = CommentInvalidation> {
        [self.text, self.rating, self.accepted_terms]
            .into_iter()
            .flatten()
    }

    pub fn first(&self) -> Option<CommentInvalidation> {
        self.iter().next()
    }
}

impl fmt::Display for CommentInvalidations {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<_> = self.iter().map(CommentInvalidation::name).collect();
        write!(f, "Invalid comment: {}", names.join(", "))
    }
}

impl std::error::Error for CommentInvalidations {}

fn is_present(text: &str) -> bool {
    !text.is_empty()
}

fn is_short_enough(text: &str) -> bool {
    text.encode_utf16().count() <= MAX_COMMENT_LEN
}

fn is_accepted(accepted: &bool) -> bool {
    *accepted
}

const TEXT_CHECKS: &[(CommentInvalidation, fn(&str) -> bool)] = &[
    (CommentInvalidation::Required, is_present),
    (CommentInvalidation::TooLong, is_short_enough),
];

const TERMS_CHECKS: &[(CommentInvalidation, fn(&bool) -> bool)] =
    &[(CommentInvalidation::TermsNotAccepted, is_accepted)];

fn first_failed<T: ?Sized>(
    value: &T,
    checks: &[(CommentInvalidation, fn(&T) -> bool)],
) -> Option<CommentInvalidation> {
    checks
        .iter()
        .find(|(_, passes)| !passes(value))
        .map(|(invalidation, _)| *invalidation)
}

pub fn parse_rating(raw: &str) -> Result<RatingValue, CommentInvalidation> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| CommentInvalidation::OutOfRange)?;
    RatingValue::try_from(value).map_err(|_| CommentInvalidation::OutOfRange)
}

impl Validate for NewComment {
    type Error = CommentInvalidations;
    fn validate(&self) -> Result<(), Self::Error> {
        let invalidations = CommentInvalidations {
            text: first_failed(self.text.as_str(), TEXT_CHECKS),
            rating: parse_rating(&self.rating).err(),
            accepted_terms: first_failed(&self.accepted_terms, TERMS_CHECKS),
        };
        if invalidations.is_empty() {
            Ok(())
        } else {
            Err(invalidations)
        }
    }
}

impl TryFrom<NewComment> for ValidComment {
    type Error = CommentInvalidations;
    fn try_from(from: NewComment) -> Result<Self, Self::Error> {
        from.validate()?;
        let NewComment { text, rating, .. } = from;
        let rating = parse_rating(&rating).map_err(|err| CommentInvalidations {
            rating: Some(err),
            ..Default::default()
        })?;
        Ok(Self { text, rating })
    }
}
