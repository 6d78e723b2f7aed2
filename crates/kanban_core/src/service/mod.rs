//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model mutations and snapshot persistence into the
//!   operations the UI layer calls.
//! - Keep UI layers decoupled from storage details.

pub mod board_store;
pub mod confirm;
pub mod drag;
pub mod selection;
