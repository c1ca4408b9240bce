//! An implementation of an immutable K-D Tree over arbitrary items.
//!
//! Items are never inspected directly: a caller-supplied projection maps each item onto a point
//! with `k` coordinates. The tree is built once through [`KDTreeBuilder`] (or [`KDTree::build`])
//! and then answers any number of nearest-neighbor queries.
//!
//! Generic code that forwards to the builder names its bounds through [`MaybeSend`] and
//! [`MaybeSync`]:
//!
//! ```
//! use kd_index::kdtree::{KDTree, MaybeSend, MaybeSync};
//!
//! fn index_xy<T, F>(items: Vec<T>, point_of: F) -> kd_index::Result<KDTree<T, f64, F>>
//! where
//!     T: MaybeSend,
//!     F: Fn(&T) -> [f64; 2] + MaybeSync,
//! {
//!     KDTree::build(items, point_of)
//! }
//!
//! let tree = index_xy(vec![(1., 1.), (4., 4.)], |p: &(f64, f64)| [p.0, p.1]).unwrap();
//! assert_eq!(tree.nearest_neighbor(&[3., 3.]).unwrap(), &(4., 4.));
//! ```

#![warn(missing_docs)]

mod builder;
mod index;
mod search;
mod traversal;

pub use builder::{KDTreeBuilder, MaybeSend, MaybeSync};
pub use index::KDTree;
pub use traversal::{Iter, NodeRef};
