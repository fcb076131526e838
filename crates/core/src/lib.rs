//! # c3lingo core
//!
//! Domain types for the c3lingo interpretation tracker: languages, conferences,
//! rooms, talks and their translations, translators, booths and the shifts
//! volunteers sign up for.
//!
//! Nothing in this crate performs I/O. Persistence lives in `c3lingo-db`.

pub mod errors;
pub mod labels;
pub mod models;
pub mod registry;

/// Title of the landing page.
pub const PAGE_TITLE: &str = "c3Lingo";
