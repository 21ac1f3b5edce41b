use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::town::Town;

/// Weight given to roads built without an explicit distance.
pub const DEFAULT_WEIGHT: u32 = 1;

/// An undirected, named, weighted connection between two towns.
///
/// Equality and hashing look only at the unordered endpoint pair, so a
/// `HashSet<Road>` holds at most one road per pair of towns no matter what
/// the roads are called or how long they are. Endpoints keep the order they
/// were given in for display.
#[derive(Debug, Clone)]
pub struct Road {
    source: Town,
    destination: Town,
    weight: u32,
    name: String,
}

impl Road {
    pub fn new(source: Town, destination: Town, weight: u32, name: impl Into<String>) -> Self {
        Self {
            source,
            destination,
            weight,
            name: name.into(),
        }
    }

    /// Road with [`DEFAULT_WEIGHT`].
    pub fn with_default_weight(source: Town, destination: Town, name: impl Into<String>) -> Self {
        Self::new(source, destination, DEFAULT_WEIGHT, name)
    }

    /// True if `town` is either endpoint.
    pub fn connects(&self, town: &Town) -> bool {
        self.source == *town || self.destination == *town
    }

    /// The endpoint across the road from `town`, or None if the road doesn't touch it.
    /// A self-loop returns the town itself.
    pub fn other_endpoint(&self, town: &Town) -> Option<&Town> {
        if self.source == *town {
            Some(&self.destination)
        } else if self.destination == *town {
            Some(&self.source)
        } else {
            None
        }
    }

    pub fn endpoints(&self) -> (&Town, &Town) {
        (&self.source, &self.destination)
    }

    pub fn source(&self) -> &Town {
        &self.source
    }

    pub fn destination(&self) -> &Town {
        &self.destination
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Endpoints sorted by town order: the canonical form of the unordered pair.
    fn normalized(&self) -> (&Town, &Town) {
        if self.source <= self.destination {
            (&self.source, &self.destination)
        } else {
            (&self.destination, &self.source)
        }
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl PartialOrd for Road {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Roads sort by name. Ties fall back to the endpoint pair so that
/// `Ordering::Equal` implies `==`.
impl Ord for Road {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.normalized().cmp(&other.normalized()))
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} to {} {} mi",
            self.source, self.name, self.destination, self.weight
        )
    }
}
