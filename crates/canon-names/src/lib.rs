//! Contact name canonicalization and text scrubbing.
//!
//! Stages:
//! 1. Selector — most meaningful candidate name field
//! 2. Canonical — ASCII identifier safe for filenames and keys
//! 3. Unique — numeric suffixes for repeated identifiers
//! 4. Clearer — blank subsidiary name columns
//!
//! `scrub` is independent of the above and works on free text.

pub mod canonical;
pub mod clearer;
pub mod pipeline;
pub mod scrub;
pub mod selector;
pub mod transliterate;
pub mod unique;

pub use canonical::canonicalize;
pub use pipeline::{BaseName, ContactPipeline, NormalizeReport};
pub use scrub::scrub;
pub use unique::{resolve_all, UniquenessTable};
