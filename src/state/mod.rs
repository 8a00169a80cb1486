/// State management module
///
/// This module handles all gallery state, including:
/// - Durable key-value storage backends (storage.rs)
/// - Reaction counter persistence (reactions.rs)
/// - Shared data structures (data.rs)
/// - The gallery model: catalog, cursor, reactions (gallery.rs)
/// - Application configuration (config.rs)

pub mod config;
pub mod data;
pub mod gallery;
pub mod reactions;
pub mod storage;
