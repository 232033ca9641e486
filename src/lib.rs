//! Promptgate - HTTP facade for the Gemini generation API
//!
//! This library provides the core pipeline: prompt tools that rewrite a user
//! message into a specialized instruction prompt, and a resilient Gemini
//! invoker with exponential-backoff retry on rate limits.

pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
pub mod server;
pub mod service;
pub mod tools;

pub use error::{Error, Result};
