// Library root
// -----------
// The binary (`main.rs`) only parses arguments and sets up logging; all
// behaviour lives in these modules.
//
// Module responsibilities:
// - `api`: blocking HTTP client for the storage server (`StorageApi`).
// - `endpoints`: URL layout of the server.
// - `listing`: the file listing and its 1-based ordinals.
// - `selection`: resolves user-typed numbers to file names.
// - `batch`: runs one operation per selected file.
// - `upload`, `sink`: upload payloads and download destinations.
// - `config`, `logging`, `error`: settings, tracing setup, error types.
// - `ui`, `cli`: command flows and the clap front-end.
pub mod api;
pub mod batch;
pub mod cli;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod listing;
pub mod logging;
pub mod selection;
pub mod sink;
pub mod ui;
pub mod upload;

pub use error::{ClientError, Result};
