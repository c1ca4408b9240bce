use std::marker::PhantomData;

use log::debug;

use crate::error::{KDIndexError, Result};
use crate::kdtree::index::{KDTree, Node};
use crate::r#type::IndexableNum;
use crate::util::cmp_coord;

/// Subsets at least this large build their two children on separate rayon tasks.
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 4096;

/// Thread-safety requirements of the build, only enforced with the `rayon` feature.
#[cfg(feature = "rayon")]
mod bounds {
    /// Items moved into a build. Equivalent to [`Send`] with the `rayon` feature, and to no
    /// bound at all without it.
    pub trait MaybeSend: Send {}
    impl<T: Send> MaybeSend for T {}

    /// Projections shared by a build. Equivalent to [`Sync`] with the `rayon` feature, and to no
    /// bound at all without it.
    pub trait MaybeSync: Sync {}
    impl<T: Sync> MaybeSync for T {}
}

#[cfg(not(feature = "rayon"))]
mod bounds {
    /// Items moved into a build. Equivalent to [`Send`] with the `rayon` feature, and to no
    /// bound at all without it.
    pub trait MaybeSend {}
    impl<T> MaybeSend for T {}

    /// Projections shared by a build. Equivalent to [`Sync`] with the `rayon` feature, and to no
    /// bound at all without it.
    pub trait MaybeSync {}
    impl<T> MaybeSync for T {}
}

pub use bounds::{MaybeSend, MaybeSync};

/// A builder to create a [`KDTree`].
///
/// ```
/// use kd_index::kdtree::KDTreeBuilder;
///
/// struct City {
///     name: &'static str,
///     lon: f64,
///     lat: f64,
/// }
///
/// let cities = vec![
///     City { name: "Paris", lon: 2.35, lat: 48.86 },
///     City { name: "Berlin", lon: 13.40, lat: 52.52 },
///     City { name: "Madrid", lon: -3.70, lat: 40.42 },
/// ];
///
/// let tree = KDTreeBuilder::new(|c: &City| [c.lon, c.lat])
///     .with_dimensions(2)
///     .finish(cities)
///     .unwrap();
/// assert_eq!(tree.nearest_neighbor(&[4.35, 50.85]).unwrap().name, "Paris");
/// ```
pub struct KDTreeBuilder<N: IndexableNum, F> {
    point_of: F,

    /// Explicit dimensionality. Derived from the first item when unset.
    dimensions: Option<usize>,

    phantom: PhantomData<N>,
}

impl<N: IndexableNum, F> KDTreeBuilder<N, F> {
    /// Create a new builder placing items with the provided projection.
    pub fn new(point_of: F) -> Self {
        Self {
            point_of,
            dimensions: None,
            phantom: PhantomData,
        }
    }

    /// Pin the dimensionality of the tree instead of deriving it from the first item.
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Consume this builder, performing the median splits and generating a KDTree ready for
    /// queries.
    ///
    /// Every item's point is checked against the tree's dimensionality before any partitioning
    /// takes place.
    pub fn finish<T, P, I>(self, items: I) -> Result<KDTree<T, N, F>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> P + MaybeSync,
        P: AsRef<[N]>,
        T: MaybeSend,
    {
        let items: Vec<T> = items.into_iter().collect();
        let first = items.first().ok_or(KDIndexError::EmptyInput)?;
        let dimensions = match self.dimensions {
            Some(dimensions) => dimensions,
            None => (self.point_of)(first).as_ref().len(),
        };
        if dimensions == 0 {
            return Err(KDIndexError::ZeroDimensions);
        }

        for item in items.iter() {
            let actual = (self.point_of)(item).as_ref().len();
            if actual != dimensions {
                return Err(KDIndexError::DimensionMismatch {
                    expected: dimensions,
                    actual,
                });
            }
        }

        let num_items = items.len();
        let root = build_node(items, &self.point_of, 0, dimensions);

        let tree = KDTree {
            root,
            point_of: self.point_of,
            num_items,
            dimensions,
            phantom: PhantomData,
        };
        debug!(
            "built kd-tree with {} items, {} dimensions, height {}",
            tree.num_items(),
            tree.dimensions(),
            tree.height()
        );
        Ok(tree)
    }
}

/// Recursively split `items` around the median on axis `depth % dimensions`.
///
/// `items` must be non-empty.
fn build_node<T, N, P, F>(
    mut items: Vec<T>,
    point_of: &F,
    depth: usize,
    dimensions: usize,
) -> Node<T>
where
    N: IndexableNum,
    F: Fn(&T) -> P + MaybeSync,
    P: AsRef<[N]>,
    T: MaybeSend,
{
    let axis = depth % dimensions;

    // stable, so equal coordinates keep their relative order
    items.sort_by(|a, b| cmp_coord(point_of(a).as_ref()[axis], point_of(b).as_ref()[axis]));

    let median = items.len() >> 1;
    let right_items = items.split_off(median + 1);
    // the pivot is now the last element
    let item = items.swap_remove(median);

    let (left, right) = build_children(items, right_items, point_of, depth + 1, dimensions);
    Node { item, left, right }
}

type Children<T> = (Option<Box<Node<T>>>, Option<Box<Node<T>>>);

#[cfg(not(feature = "rayon"))]
fn build_children<T, N, P, F>(
    left_items: Vec<T>,
    right_items: Vec<T>,
    point_of: &F,
    depth: usize,
    dimensions: usize,
) -> Children<T>
where
    N: IndexableNum,
    F: Fn(&T) -> P + MaybeSync,
    P: AsRef<[N]>,
    T: MaybeSend,
{
    (
        build_subtree(left_items, point_of, depth, dimensions),
        build_subtree(right_items, point_of, depth, dimensions),
    )
}

#[cfg(feature = "rayon")]
fn build_children<T, N, P, F>(
    left_items: Vec<T>,
    right_items: Vec<T>,
    point_of: &F,
    depth: usize,
    dimensions: usize,
) -> Children<T>
where
    N: IndexableNum,
    F: Fn(&T) -> P + MaybeSync,
    P: AsRef<[N]>,
    T: MaybeSend,
{
    if left_items.len() + right_items.len() < PARALLEL_THRESHOLD {
        return (
            build_subtree(left_items, point_of, depth, dimensions),
            build_subtree(right_items, point_of, depth, dimensions),
        );
    }

    rayon::join(
        || build_subtree(left_items, point_of, depth, dimensions),
        || build_subtree(right_items, point_of, depth, dimensions),
    )
}

#[inline]
fn build_subtree<T, N, P, F>(
    items: Vec<T>,
    point_of: &F,
    depth: usize,
    dimensions: usize,
) -> Option<Box<Node<T>>>
where
    N: IndexableNum,
    F: Fn(&T) -> P + MaybeSync,
    P: AsRef<[N]>,
    T: MaybeSend,
{
    if items.is_empty() {
        None
    } else {
        Some(Box::new(build_node(items, point_of, depth, dimensions)))
    }
}
