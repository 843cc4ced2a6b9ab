//! Private leaderboard JSON model

use serde::Deserialize;
use std::collections::HashMap;

/// A private leaderboard as served by `/{year}/leaderboard/private/view/{id}.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Leaderboard {
    pub owner_id: u64,
    /// Event year, as a string in the site's JSON
    pub event: String,
    /// Keyed by stringified user id
    pub members: HashMap<String, Member>,
}

/// One participant on a private leaderboard.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: u64,
    /// None for users who hide their name
    pub name: Option<String>,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub local_score: u32,
    #[serde(default)]
    pub global_score: u32,
    #[serde(default)]
    pub last_star_ts: i64,
}

impl Member {
    /// Name as the site would show it, with the anonymous fallback.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("(anonymous user #{})", self.id),
        }
    }
}

impl Leaderboard {
    /// Members ordered the way the site ranks them: local score descending,
    /// then star count, then earliest last star.
    pub fn standings(&self) -> Vec<&Member> {
        let mut members: Vec<&Member> = self.members.values().collect();
        members.sort_by(|a, b| {
            b.local_score
                .cmp(&a.local_score)
                .then(b.stars.cmp(&a.stars))
                .then(a.last_star_ts.cmp(&b.last_star_ts))
        });
        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_ranks_members() {
        let json = r#"{
            "owner_id": 42,
            "event": "2025",
            "members": {
                "42": {"id": 42, "name": "bob", "stars": 10, "local_score": 90, "global_score": 0, "last_star_ts": 100},
                "7": {"id": 7, "name": "eve", "stars": 12, "local_score": 120, "global_score": 0, "last_star_ts": 90},
                "9": {"id": 9, "name": null, "stars": 12, "local_score": 120, "global_score": 0, "last_star_ts": 80}
            }
        }"#;
        let board: Leaderboard = serde_json::from_str(json).unwrap();
        assert_eq!(board.owner_id, 42);

        let standings = board.standings();
        // Tied on score and stars, user 9 got their last star earlier
        assert_eq!(standings[0].id, 9);
        assert_eq!(standings[1].id, 7);
        assert_eq!(standings[2].id, 42);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "owner_id": 1,
            "event": "2025",
            "members": {"1": {"id": 1, "name": "solo"}}
        }"#;
        let board: Leaderboard = serde_json::from_str(json).unwrap();
        let member = &board.members["1"];
        assert_eq!(member.stars, 0);
        assert_eq!(member.local_score, 0);
    }
}
