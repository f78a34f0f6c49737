use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod movie;

pub use self::movie::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("HTTP error {0}")]
    Status(u16),

    #[error("The response contains no movie")]
    Empty,
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(Error::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(Error::Status(500).to_string(), "HTTP error 500");
        assert_eq!(
            Error::Fetch("network down".into()).to_string(),
            "network down"
        );
    }
}
