use crate::{
    entities::CommentId,
    store::CommentStore,
    util::validate::{CommentInvalidations, NewComment, ValidComment},
};

/// Validates the input and adds it to the store.
///
/// Nothing is stored if any check fails.
pub fn submit_comment(
    store: &mut CommentStore,
    new_comment: NewComment,
) -> Result<CommentId, CommentInvalidations> {
    let ValidComment { text, rating } = ValidComment::try_from(new_comment).map_err(|err| {
        log::debug!("Rejected comment: {err}");
        err
    })?;
    Ok(store.add(text, rating))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{text::rating_label, util::validate::CommentInvalidation};

    fn new_comment(text: &str, rating: &str, accepted_terms: bool) -> NewComment {
        NewComment {
            text: text.into(),
            rating: rating.into(),
            accepted_terms,
        }
    }

    #[test]
    fn submit_valid_comment() {
        let mut store = CommentStore::new();
        let id = submit_comment(&mut store, new_comment("Great movie", "5", true)).unwrap();
        assert_eq!(store.len(), 1);
        let comment = &store.list()[0];
        assert_eq!(comment.id, id);
        assert_eq!(comment.text, "Great movie");
        assert_eq!(u8::from(comment.rating), 5);
        assert_eq!(rating_label(comment.rating), "Note: 5/5");
    }

    #[test]
    fn invalid_comment_is_not_stored() {
        let mut store = CommentStore::new();
        let err = submit_comment(&mut store, new_comment("Great movie", "5", false)).unwrap_err();
        assert_eq!(err.first(), Some(CommentInvalidation::TermsNotAccepted));
        assert!(store.is_empty());
    }

    #[test]
    fn resubmit_after_fixing_input() {
        let mut store = CommentStore::new();
        assert!(submit_comment(&mut store, new_comment("", "6", true)).is_err());
        assert!(submit_comment(&mut store, new_comment("Fixed", "4", true)).is_ok());
        assert_eq!(store.len(), 1);
    }
}
