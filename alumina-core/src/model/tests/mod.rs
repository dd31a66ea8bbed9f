//! Tests for model building and execution
//!
//! - `basic`: stepping, solve order, serialisation
//! - `validation`: errors raised while building a model

mod validation;
