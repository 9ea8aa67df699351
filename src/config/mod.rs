// src/config/mod.rs

//! Configuration loading and validation for depviz.
//!
//! Responsibilities:
//! - Define the resolved configuration record (`model.rs`).
//! - Build a minimal element tree from XML text (`document.rs`).
//! - Apply required-field, default and boolean rules (`validate.rs`).
//! - Report loading checkpoints to an injectable observer (`observer.rs`).
//! - Tie it together behind `ConfigLoader` (`loader.rs`).

pub mod loader;
pub mod model;
pub mod observer;
pub mod validate;
pub mod document;

pub use loader::{ConfigLoader, load, load_str};
pub use model::{Configuration, DEFAULT_OUTPUT_FILE};
pub use observer::{FieldValue, LoadObserver, NoopObserver, TracingObserver, ValueSource};
pub use validate::{ParseBoolError, parse_bool};
