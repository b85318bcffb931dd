//! Core domain entities for the character browser.
//!
//! Entities split into two groups:
//!
//! - Resolved data handed to consumers: [`Character`], [`CharacterPage`]
//! - Boundary schemas decoded from upstream JSON: [`RawCharacter`], [`NamedEntity`],
//!   [`AgeEstimate`]
//!
//! [`MemoizedResponse`] is the unit stored by the response cache and [`FilterSet`]
//! carries the user's filter criteria for one page request.

pub mod character;
pub mod filter;
pub mod memoized_response;
pub mod raw_character;

pub use character::{Character, CharacterPage, UNKNOWN_PAGE_COUNT};
pub use filter::FilterSet;
pub use memoized_response::MemoizedResponse;
pub use raw_character::{AgeEstimate, NamedEntity, RawCharacter};
