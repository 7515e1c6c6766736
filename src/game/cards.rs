//! Card value types for the matching board

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a card within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// The attribute used to decide whether two flipped cards match.
///
/// Opaque to the engine: face values are only ever compared for
/// equality, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceValue(String);

impl FaceValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visibility state of a card on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Revealed,
    Matched,
}

/// A single card. Identity and face value never change once created;
/// only visibility mutates during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face: FaceValue,
    visibility: Visibility,
}

impl Card {
    pub fn new(id: CardId, face: FaceValue) -> Self {
        Self {
            id,
            face,
            visibility: Visibility::Hidden,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn face(&self) -> &FaceValue {
        &self.face
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}

/// Build a deck in which every face value appears exactly twice.
///
/// Ids are assigned sequentially; the pair order is immaterial since a
/// session shuffles before play.
pub fn paired_deck(faces: impl IntoIterator<Item = FaceValue>) -> Vec<Card> {
    let mut deck = Vec::new();
    let mut next_id = 0u32;
    for face in faces {
        for _ in 0..2 {
            deck.push(Card::new(CardId(next_id), face.clone()));
            next_id += 1;
        }
    }
    deck
}
