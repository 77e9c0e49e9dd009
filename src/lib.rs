pub mod cli;
pub mod clipboard;
pub mod config;
pub mod copier;
pub mod document;
pub mod notify;
pub mod utils;

pub use copier::{ClipboardCopier, CopyOutcome, CopyRequest};
