use std::fmt;
use std::str::FromStr;

use crate::errors::MalformedReason;

/// One line of an adjacency-list dump: `origin: dest1 dest2 ... destN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyRecord {
    pub origin: String,
    pub destinations: Vec<String>,
}

impl AdjacencyRecord {
    /// One edge per destination, in the order listed.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRecord<'_>> {
        self.destinations.iter().map(move |dest| EdgeRecord {
            origin: &self.origin,
            destination: dest,
        })
    }
}

/// Splits once on the first `:`. Anything after it, including further `:`
/// characters, belongs to the whitespace-separated destination tokens.
impl FromStr for AdjacencyRecord {
    type Err = MalformedReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (origin, rest) = s.split_once(':').ok_or(MalformedReason::MissingDelimiter)?;
        let origin = origin.trim();
        if origin.is_empty() {
            return Err(MalformedReason::EmptyOrigin);
        }
        Ok(AdjacencyRecord {
            origin: origin.to_string(),
            destinations: rest.split_whitespace().map(str::to_string).collect(),
        })
    }
}

/// A single directed edge borrowed from an [`AdjacencyRecord`].
///
/// Displays as `origin destination`, the edge-list line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
}

impl fmt::Display for EdgeRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.origin, self.destination)
    }
}
