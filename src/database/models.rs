use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type PlayerId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub wins: i32,
    pub matches: i32,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub created_at: Option<NaiveDateTime>,
}

/// One row of the standings projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub wins: i32,
    pub matches: i32,
}

impl From<Player> for Standing {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            wins: player.wins,
            matches: player.matches,
        }
    }
}
