use crate::{entities::CommentId, store::CommentStore};

/// Removes a comment; unknown ids are ignored.
pub fn remove_comment(store: &mut CommentStore, id: CommentId) {
    store.remove(id);
}
