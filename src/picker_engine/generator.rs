use rand::{rngs::StdRng, SeedableRng};
use rand::RngCore;
use tracing::{debug, instrument, warn};

use crate::picker_engine::{
    models::{PickRequest, PickResult, Team, TeamRequest, TeamSet},
    partitioner, selector,
};

/// Seeded generator when a seed is given, otherwise one seeded from OS entropy.
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Draw id: two-letter prefix plus eight hex digits from the request RNG.
fn make_draw_id(prefix: &str, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Negative request values mean "nothing to do".
fn clamp(field: &'static str, value: i64) -> usize {
    if value < 0 {
        warn!(field, value, "negative value treated as zero");
    }
    usize::try_from(value).unwrap_or(0)
}

/// Pick entries from a request. Never fails; degenerate input gives an empty pick list.
#[instrument(name = "pick", skip_all, fields(pool_size = request.entries.len(), count = request.count))]
pub fn pick(request: PickRequest) -> PickResult {
    let mut rng = make_rng(request.rng_seed);
    let draw_id = make_draw_id("PK", &mut rng);
    let requested = clamp("count", request.count);

    let picks = selector::select(
        &mut rng,
        &request.entries,
        requested,
        request.with_replacement,
    );

    debug!(
        %draw_id,
        pool_size = request.entries.len(),
        requested,
        picked = picks.len(),
        with_replacement = request.with_replacement,
        "pick drawn"
    );

    PickResult {
        draw_id,
        picks,
        requested,
        pool_size: request.entries.len(),
        with_replacement: request.with_replacement,
    }
}

/// Split a request's entries into teams. Never fails; see [`partitioner::partition`].
#[instrument(
    name = "split_teams",
    skip_all,
    fields(entries = request.entries.len(), mode = ?request.mode, value = request.value)
)]
pub fn split_teams(request: TeamRequest) -> TeamSet {
    let mut rng = make_rng(request.rng_seed);
    let draw_id = make_draw_id("TM", &mut rng);
    let value = clamp("value", request.value);

    let teams: Vec<Team> = partitioner::partition(&mut rng, &request.entries, request.mode, value)
        .into_iter()
        .enumerate()
        .map(|(i, members)| Team { number: i + 1, members })
        .collect();

    debug!(
        %draw_id,
        mode = ?request.mode,
        value,
        entries = request.entries.len(),
        teams = teams.len(),
        "teams split"
    );

    TeamSet {
        draw_id,
        mode: request.mode,
        value,
        teams,
    }
}
