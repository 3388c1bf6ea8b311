//! NIET.ly library crate
//!
//! A demo of a URL-shortening page: the user enters a URL, clicks "shorten",
//! and gets a fabricated short link (`NIET.ly/` plus a random 6-character
//! code) that is never registered and never resolves. A copy action puts the
//! link on the clipboard and flashes a confirmation for two seconds.
//!
//! Modules:
//!
//! - `codegen`: pure short-code generator over an explicit RNG.
//! - `link`: the `<prefix>/<code>` value type.
//! - `dom`: element, document and alert abstractions with in-memory versions.
//! - `view`: the page view object and its shorten / copy handlers.
//! - `clipboard`: clipboard capability (system via `arboard`, or in-memory).
//! - `config`: page settings and their command-line / environment form.
//!
//! The binary `src/main.rs` calls [`run`] to start the terminal front-end.

mod cli;

pub mod clipboard;
pub mod codegen;
pub mod config;
pub mod dom;
pub mod error;
pub mod link;
pub mod view;

pub use cli::run;
pub use error::{Error, Result};
