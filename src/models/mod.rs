//! Data models for the survey
//!
//! This module contains the core data structures:
//! - Cases and the filename matcher that pairs images across folders
//! - The response store that accumulates answers
//! - Typed form configuration for the intro and PART 2 screens
//! - Enums for stages, variants and answers

pub mod case;
pub mod enums;
pub mod form;
pub mod responses;

// Re-exports for convenient access
pub use case::{extract_case_id, has_extension, Case, CATALOG_EXTENSIONS, MATCH_EXTENSIONS};
pub use enums::{AdoptionIntent, CaseChoice, FinalPreference, Stage, Variant};
pub use form::{EvaluatorInfo, IntroForm, PartTwoAnswers, PartTwoField, PartTwoForm};
pub use responses::{case_keys, ResponseStore};
