/// State management module
///
/// This module handles all application state, including:
/// - The static tier catalog (catalog.rs)
/// - Shared data structures (data.rs)
/// - The selected tier and nested-entry expansion (selection.rs)
/// - Per-tier image attachments for the session (attachments.rs)
/// - Section navigation highlight (nav.rs)

pub mod attachments;
pub mod catalog;
pub mod data;
pub mod nav;
pub mod selection;
