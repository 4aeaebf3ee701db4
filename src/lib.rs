//! # random_picker
//!
//! Pick random winners from a list, or split a list into balanced teams.
//!
//! The crate is three small, total functions plus a thin request layer:
//!
//! - [`parse_entries`] turns free-form multi-line text into a clean list
//!   (trimmed, blank lines dropped, order kept).
//! - [`select`] draws entries uniformly, with or without replacement.
//! - [`partition`] shuffles with Fisher-Yates, then deals teams round-robin
//!   ([`PartitionMode::ByCount`]) or in fixed-size chunks
//!   ([`PartitionMode::BySize`]).
//!
//! None of them fail. An empty list, a zero count or a zero team value simply
//! produces an empty (or shorter) result.
//!
//! ## Randomness
//!
//! Every function takes the generator as an explicit `&mut R: Rng` argument,
//! so tests pass a seeded `StdRng`. The request layer ([`pick`],
//! [`split_teams`], [`PickerSession`]) builds a `StdRng` from `rng_seed` when
//! given, otherwise from OS entropy. Index draws go through
//! [`uniform_index`], which samples the range without modulo bias.
//!
//! ## Quick start
//!
//! ```rust
//! use random_picker::{
//!     parse_entries, pick, split_teams, PartitionMode, PickRequest, TeamRequest,
//! };
//!
//! let entries = parse_entries("Alice\n \nBob\n\nCharlie");
//! assert_eq!(entries.len(), 3);
//!
//! // One winner from OS entropy:
//! let result = pick(PickRequest::new(entries.clone()));
//! println!("Winner: {}", result.winner().unwrap());
//!
//! // Reproducible teams of two:
//! let teams = split_teams(TeamRequest {
//!     entries,
//!     mode: PartitionMode::BySize,
//!     value: 2,
//!     rng_seed: Some(42),
//! });
//! println!("{teams}");
//! assert_eq!(teams.member_count(), 3);
//! ```

pub mod cli;
pub mod client_adapter;
pub mod config;
pub mod error;
pub mod logging;
pub mod picker_engine;

// Convenience re-exports so callers can use `random_picker::pick`
// directly without reaching into `picker_engine::`.
pub use client_adapter::{pick_to_json, teams_to_json};
pub use error::PickerError;
pub use picker_engine::{
    entries_to_text, parse_entries, partition, pick, select, select_indices, shuffle,
    split_teams, uniform_index, Entry, PartitionMode, MAX_DRAWS, PickMode, PickRequest, PickResult,
    PickerSession, Team, TeamRequest, TeamSet,
};
