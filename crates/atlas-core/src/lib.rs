//! # atlas-core
//!
//! Core types shared across all Atlas crates:
//! - Entity structs for countries, their capital and their languages
//! - The closed `EditMode` / `EditAction` pair that drives the editor state machine
//! - Operator drafts (raw field text) and their parsing into entities
//! - Field validation rules applied before any store call
//! - Cross-cutting error types

pub mod drafts;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod validation;
