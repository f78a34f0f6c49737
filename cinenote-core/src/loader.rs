use std::fmt;

use crate::entities::Movie;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T = Movie> {
    Loading,
    Loaded(T),
    /// Contains the message that is shown to the visitor.
    Failed(String),
}

impl<T> LoadState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// One-shot loader of a single value.
///
/// The loader starts in [`LoadState::Loading`] and leaves it exactly once.
/// Any error is logged and replaced by the configured failure message.
#[derive(Debug, Clone)]
pub struct MovieLoader<T = Movie> {
    state: LoadState<T>,
    failure_message: String,
}

impl<T> MovieLoader<T> {
    pub fn new(failure_message: impl Into<String>) -> Self {
        Self {
            state: LoadState::Loading,
            failure_message: failure_message.into(),
        }
    }

    pub const fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }

    /// Records the outcome of the request.
    ///
    /// Returns `false` if an outcome has already been recorded,
    /// in which case the state is left untouched.
    pub fn finish<E>(&mut self, result: Result<T, E>) -> bool
    where
        E: fmt::Display,
    {
        if !self.state.is_loading() {
            log::warn!("Ignoring outcome of a request that has already finished");
            return false;
        }
        self.state = match result {
            Ok(value) => {
                log::debug!("Movie loaded");
                LoadState::Loaded(value)
            }
            Err(err) => {
                log::error!("Unable to load movie: {err}");
                LoadState::Failed(self.failure_message.clone())
            }
        };
        true
    }
}
