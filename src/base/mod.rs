//! Base types and error handling.
//!
//! Provides foundational types shared by the decoder layers:
//! - [`ParseError`](parseerror::ParseError): decode failure taxonomy
//! - [`LoadError`](parseerror::LoadError): file loading failures with path context

pub mod context;
pub mod parseerror;
