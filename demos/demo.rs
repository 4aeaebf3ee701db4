//! End-to-end tour of `random_picker`.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Parsing**: messy multi-line text becomes a clean entry list.
//! 2. **Picking**: one winner, several winners, and draws with replacement.
//! 3. **Teams**: the same list split by team count and by team size.
//! 4. **Rounds**: a session that removes each winner before the next round.
//!
//! Every request below sets `rng_seed`, so the output is reproducible. Drop
//! the seed (or use `PickRequest::new`) to draw from OS entropy instead.

use random_picker::{
    parse_entries, pick, pick_to_json, split_teams, PartitionMode, PickMode, PickRequest,
    PickerSession, TeamRequest,
};

const ROSTER: &str = "
    Alice
    Bob

    Charlie
    Diana
      Eve
    Frank

    Grace
";

fn main() {
    // ── Parsing ──────────────────────────────────────────────────────────────
    let entries = parse_entries(ROSTER);
    println!();
    println!("══ Parsed {} entries ══", entries.len());
    for e in &entries {
        println!("  • {e}");
    }

    // ── Picking ──────────────────────────────────────────────────────────────
    println!();
    println!("══ Picking ══");
    println!();
    for (label, count, with_replacement) in [
        ("Single winner", 1, false),
        ("Three winners", 3, false),
        ("Ten draws with replacement", 10, true),
        ("More than the list holds", 50, false),
    ] {
        let result = pick(PickRequest {
            entries: entries.clone(),
            count,
            with_replacement,
            rng_seed: Some(1001),
        });
        let picks: Vec<String> = result.picks.iter().map(|p| p.to_string()).collect();
        println!("  {label} [{}]: {}", result.draw_id, picks.join(", "));
    }

    // JSON payload a UI would render for the single-winner case.
    let single = pick(PickRequest { rng_seed: Some(7), ..PickRequest::new(entries.clone()) });
    println!();
    println!("  Client payload: {}", pick_to_json(&single));

    // ── Teams ────────────────────────────────────────────────────────────────
    for (mode, value) in [(PartitionMode::ByCount, 3), (PartitionMode::BySize, 2)] {
        let set = split_teams(TeamRequest {
            entries: entries.clone(),
            mode,
            value,
            rng_seed: Some(2002),
        });
        println!();
        println!("══ Teams {mode}, value {value}  ID: {} ══", set.draw_id);
        for line in set.to_string().lines() {
            println!("  {line}");
        }
    }

    // ── Rounds ───────────────────────────────────────────────────────────────
    println!();
    println!("══ Rounds: {} ══", PickMode::Remove);
    println!();
    let mut session = PickerSession::new(entries, Some(3003));
    let mut round = 1;
    while let Some(winner) = session.pick(PickMode::Remove) {
        println!("  Round {round}: {winner}  ({} left)", session.entries().len());
        round += 1;
    }
}
