use super::buckets::Buckets;
use super::mapping::Mapping;
use crate::cards::Hole;
use crate::error::Error;
use crate::spot::Spot;
use serde::Deserialize;
use serde::Serialize;

/// the canonical cache key. opaque, deterministic, filename-safe.
///
/// segments joined by underscores: street, canonical board (flop
/// normalized to descending rank), stack bucket, pot bucket, relative
/// position, and the canonical hole when one is in play. any two deals
/// equivalent under suit relabeling and seat collapse share a key.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    pub fn derive(
        spot: &Spot,
        hole: Option<&Hole>,
        buckets: &Buckets,
    ) -> Result<(Self, Mapping), Error> {
        if let Some(hole) = hole {
            for card in hole.cards() {
                if spot.board().contains(card) {
                    return Err(Error::Configuration(format!(
                        "hole card {} already on board",
                        card
                    )));
                }
            }
        }
        let mapping = Mapping::derive(spot.board(), hole);
        let mut segments = vec![spot.street().to_string()];
        let board = Self::board(spot, &mapping);
        if !board.is_empty() {
            segments.push(board);
        }
        segments.push(format!("d{}", buckets.stack(spot.stack())));
        segments.push(format!("p{}", buckets.pot(spot.pot(), spot.stack())));
        segments.push(spot.position().relative().to_string());
        if let Some(hole) = hole {
            segments.push(mapping.hole(*hole).to_string());
        }
        Ok((Self(segments.join("_")), mapping))
    }

    fn board(spot: &Spot, mapping: &Mapping) -> String {
        mapping
            .normalize(spot.board())
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .concat()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
