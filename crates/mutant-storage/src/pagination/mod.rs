//! Keyset pagination over integer primary keys.

pub mod keyset;

pub use keyset::{fetch_key_page, KeyPage};
