#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod r#type;
mod util;

pub use error::{KDIndexError, Result};
pub use r#type::IndexableNum;
