pub mod loader;
pub mod store;
pub mod text;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use cinenote_entities::{comment::*, id::*, movie::*, rating::*, time::*};
}
