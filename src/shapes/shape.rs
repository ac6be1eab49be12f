//! Card shape tokens.
//!
//! A `CardShape` is one entry of the precomputed catalogue of playable
//! combinations: `"3"`, `"33"`, `"34567"`, `"3334"`, `"BR"` and so on.
//! Identity is the exact token. Rank counts are parsed once at construction so
//! containment checks never re-read the string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::cards::{Rank, RankCounts};
use crate::core::CatalogueError;

/// An immutable, cheaply clonable shape token.
#[derive(Clone, Debug)]
pub struct CardShape {
    token: Arc<str>,
    counts: RankCounts,
}

impl CardShape {
    /// Parse a shape token.
    ///
    /// ```
    /// use doudizhu_judger::cards::Rank;
    /// use doudizhu_judger::shapes::CardShape;
    ///
    /// let trio = CardShape::parse("3334").unwrap();
    /// assert_eq!(trio.len(), 4);
    /// assert!(trio.uses(Rank::Four));
    /// assert!(CardShape::parse("3x").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, CatalogueError> {
        if token.is_empty() {
            return Err(CatalogueError::EmptyShape);
        }
        let counts = token
            .parse::<RankCounts>()
            .map_err(|e| CatalogueError::UnknownRank {
                token: token.to_string(),
                symbol: e.symbol,
            })?;
        if let Some(rank) = Rank::ALL
            .into_iter()
            .find(|&rank| counts.get(rank) > rank.copies())
        {
            return Err(CatalogueError::TooManyCards {
                token: token.to_string(),
                rank,
                count: token.chars().filter(|&c| c == rank.code()).count(),
            });
        }
        Ok(Self {
            token: Arc::from(token),
            counts,
        })
    }

    /// The token string.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Per-rank counts of the cards this shape needs.
    #[must_use]
    pub fn counts(&self) -> &RankCounts {
        &self.counts
    }

    /// Number of cards in the shape.
    #[must_use]
    pub fn len(&self) -> usize {
        self.token.chars().count()
    }

    /// Shapes are never empty; provided for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    /// Does this shape need at least one card of `rank`?
    #[must_use]
    pub fn uses(&self, rank: Rank) -> bool {
        self.counts.holds(rank)
    }
}

impl PartialEq for CardShape {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for CardShape {}

impl Hash for CardShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl PartialOrd for CardShape {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CardShape {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.token.cmp(&other.token)
    }
}

impl std::borrow::Borrow<str> for CardShape {
    fn borrow(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Display for CardShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}

impl std::str::FromStr for CardShape {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CardShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.token)
    }
}

impl<'de> Deserialize<'de> for CardShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::parse(&token).map_err(serde::de::Error::custom)
    }
}
