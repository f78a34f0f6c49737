use crate::{id::*, rating::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : CommentId,
    pub created_at : TimestampMs,
    pub text       : String,
    pub rating     : RatingValue,
}
