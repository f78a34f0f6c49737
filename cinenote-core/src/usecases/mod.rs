mod remove_comment;
mod submit_comment;

pub use self::{remove_comment::*, submit_comment::*};
