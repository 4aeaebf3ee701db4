//! Multi-round picking over one loaded list.
//!
//! A session mirrors a picker screen: the user loads a list, then picks one
//! winner per round. In [`PickMode::Remove`] the winning slot leaves the list,
//! so repeated rounds draw without replacement across rounds.

use rand::rngs::StdRng;
use tracing::debug;

use crate::picker_engine::{
    entries::{entries_to_text, parse_entries},
    generator::make_rng,
    models::{Entry, PickMode},
    selector,
};

pub struct PickerSession {
    entries: Vec<Entry>,
    rng: StdRng,
}

impl PickerSession {
    /// Start a session over `entries`; `rng_seed: Some(_)` makes every round reproducible.
    pub fn new(entries: Vec<Entry>, rng_seed: Option<u64>) -> Self {
        PickerSession {
            entries,
            rng: make_rng(rng_seed),
        }
    }

    /// Replace the list with freshly parsed text.
    pub fn load_text(&mut self, text: &str) {
        self.entries = parse_entries(text);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draw one winner. Returns `None` once the list is empty.
    pub fn pick(&mut self, mode: PickMode) -> Option<Entry> {
        let slot = *selector::select_indices(&mut self.rng, self.entries.len(), 1, false).first()?;
        let winner = match mode {
            PickMode::Once   => self.entries[slot].clone(),
            PickMode::Remove => self.entries.remove(slot),
        };
        debug!(%winner, ?mode, remaining = self.entries.len(), "session pick");
        Some(winner)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Current list as one-per-line text.
    pub fn to_text(&self) -> String {
        entries_to_text(&self.entries)
    }
}
