use serde_json::{json, Value};
use crate::picker_engine::models::{Entry, PickResult, TeamSet};

/// Entry list as a JSON array of strings.
fn entry_array(entries: &[Entry]) -> Value {
    Value::Array(entries.iter().map(|e| Value::String(e.to_string())).collect())
}

/// Singular/plural label the UI shows under the list, e.g. "1 entry", "4 entries".
pub fn entry_count_label(n: usize) -> String {
    if n == 1 {
        "1 entry".to_string()
    } else {
        format!("{n} entries")
    }
}

/// Map a [`PickResult`] to the payload a picker screen renders.
///
/// `winner` is the first pick (null when nothing was drawn); `copy_text` is
/// the plain-text form for a copy-to-clipboard button.
pub fn pick_to_json(result: &PickResult) -> Value {
    json!({
        "kind": "pick",
        "draw_id": result.draw_id,
        "winner": result.winner().map(Entry::as_str),
        "picks": entry_array(&result.picks),
        "requested": result.requested,
        "pool": {
            "size": result.pool_size,
            "label": entry_count_label(result.pool_size),
        },
        "with_replacement": result.with_replacement,
        "copy_text": result.to_string(),
    })
}

/// Map a [`TeamSet`] to the payload a team-generator screen renders.
pub fn teams_to_json(set: &TeamSet) -> Value {
    let teams: Vec<Value> = set
        .teams
        .iter()
        .map(|t| {
            json!({
                "number": t.number,
                "name": format!("Team {}", t.number),
                "size": t.members.len(),
                "members": entry_array(&t.members),
            })
        })
        .collect();

    json!({
        "kind": "teams",
        "draw_id": set.draw_id,
        "mode": set.mode,
        "value": set.value,
        "team_count": set.teams.len(),
        "member_count": set.member_count(),
        "teams": teams,
        "copy_text": set.to_string(),
    })
}
