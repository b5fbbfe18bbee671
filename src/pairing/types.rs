use serde::{Deserialize, Serialize};

use crate::database::models::{PlayerId, Standing};

/// Two players meeting in the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn new(first: &Standing, second: &Standing) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.id1, self.id2)
    }
}

/// Pairings for a round plus the player left over when the field is odd.
///
/// No bye is assigned to `unpaired`; callers decide what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairings {
    pub pairs: Vec<Pairing>,
    pub unpaired: Option<Standing>,
}

impl Pairings {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.unpaired.is_none()
    }
}
