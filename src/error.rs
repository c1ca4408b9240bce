use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KDIndexError {
    /// The builder was given no items, so there is no point to derive the dimensionality from.
    #[error("Unable to count dimensions of an empty item collection.")]
    EmptyInput,

    /// A point did not have the same number of coordinates as the tree.
    #[error("Expected a point with {expected} dimensions, got {actual}.")]
    DimensionMismatch {
        /// The dimensionality of the tree
        expected: usize,
        /// The length of the offending point
        actual: usize,
    },

    /// The tree would have no axis to split on.
    #[error("Points must have at least one dimension.")]
    ZeroDimensions,
}

pub type Result<T> = std::result::Result<T, KDIndexError>;
