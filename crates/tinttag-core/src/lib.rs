//! Tinttag Core
//!
//! This crate provides the core types, traits, and error definitions
//! shared by the tinttag crates.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ColorPair`], [`Palette`] - Escape sequence pairs and the tag table
//! - [`ColorTag`], [`Taggable`] - The protocol for values carrying color tags
//! - [`Mark`] - A wrapper that attaches a color tag to any value
//! - [`TintError`], [`TemplateError`] - Error types

pub mod error;
pub mod mark;
pub mod palette;
pub mod tag;

pub use error::{Result, TemplateError, TintError};
pub use mark::Mark;
pub use palette::{ColorPair, Palette};
pub use tag::{ColorTag, Taggable};
