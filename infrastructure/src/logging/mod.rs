//! Structured change logging

mod jsonl_logger;

pub use jsonl_logger::JsonlChangeLogger;
