//! psych-core
//!
//! Static page content and the small state machines behind the non-criteria
//! pages: navigation, the case-based quiz, the glossary filter, case reveal
//! and the personality cluster explorer. No I/O.

pub mod error;
pub mod models;
