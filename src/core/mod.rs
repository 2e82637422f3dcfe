//! Core library components.
//!
//! This module contains the configuration model, key generation, template
//! rendering, storage, and the pipeline that ties them together.

pub mod archive;
pub mod config;
pub mod constants;
pub mod domain;
pub mod keys;
pub mod pipeline;
pub mod store;
pub mod template;
pub mod types;
pub mod validation;
