//! Core business logic layer
//!
//! This module contains the catalog, the library filter, the preference store
//! and the navigation state machine that form the heart of the museum.

pub mod data;
pub mod filter;
pub mod operations;
pub mod preferences;
pub mod router;
pub mod storage;
pub mod traits;
