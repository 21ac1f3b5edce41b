use thiserror::Error;

/// Errors raised by graph queries.
///
/// Mutations never fail: duplicate inserts and missing endpoints are reported
/// through `bool`/`Option` returns instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("town '{name}' is not in the graph")]
    TownNotFound { name: String },
}

impl GraphError {
    pub(crate) fn town_not_found(name: &str) -> Self {
        GraphError::TownNotFound {
            name: name.to_string(),
        }
    }
}
