mod comment_form;
mod comment_list;
mod movie_card;
mod spinner;

pub use self::{comment_form::*, comment_list::*, movie_card::*, spinner::*};
