//! Core picker engine: turning text into entries, then drawing winners or teams from them.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: entries, modes, request/result structs |
//! | `entries`     | Multi-line text to a clean entry list and back |
//! | `selector`    | Uniform index draws, with or without replacement |
//! | `partitioner` | Fisher-Yates shuffle, then round-robin or chunked teams |
//! | `generator`   | Request entry points `pick()` and `split_teams()` |
//! | `session`     | Multi-round picking with keep/remove modes |

pub mod entries;
pub mod generator;
pub mod models;
pub mod partitioner;
pub mod selector;
pub mod session;

pub use entries::{entries_to_text, parse_entries};
pub use generator::{pick, split_teams};
pub use models::{
    Entry, PartitionMode, MAX_DRAWS, PickMode, PickRequest, PickResult, Team, TeamRequest, TeamSet,
};
pub use partitioner::{partition, shuffle};
pub use selector::{select, select_indices, uniform_index};
pub use session::PickerSession;
