// Error types shared by the library. The binary wraps these in
// `anyhow::Error` and prints the whole source chain once before exiting,
// so messages here leave the underlying cause to `source()`.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// The server answered with something other than 200 OK. `message` is
    /// the response body as sent by the server.
    #[error("{context} ({status}): {message}")]
    HttpStatus {
        context: &'static str,
        status: StatusCode,
        message: String,
    },

    /// The response body broke off while it was being received.
    #[error("transfer of {name} interrupted")]
    Transfer {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode file listing")]
    Decode(#[source] serde_json::Error),

    /// Rejected before any request was made.
    #[error("{0}")]
    Input(String),

    #[error("{}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn input(message: impl Into<String>) -> Self {
        ClientError::Input(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClientError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the failure happened before talking to the server.
    pub fn is_input(&self) -> bool {
        matches!(self, ClientError::Input(_))
    }
}
