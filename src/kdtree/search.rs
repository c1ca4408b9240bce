use std::cmp::Ordering;

use geo_traits::CoordTrait;
use log::trace;

use crate::error::{KDIndexError, Result};
use crate::kdtree::index::{KDTree, Node};
use crate::r#type::IndexableNum;
use crate::util::{axis_dist, sq_dist};

/// The closest item found so far, with its squared distance to the query.
struct Candidate<'a, T> {
    item: &'a T,
    dist: f64,
}

impl<T> Candidate<'_, T> {
    /// Keep `self` unless `other` is strictly closer.
    #[inline]
    fn closer(self, other: Self) -> Self {
        if other.dist < self.dist {
            other
        } else {
            self
        }
    }
}

impl<T, N: IndexableNum, F> KDTree<T, N, F> {
    /// Find the item whose point is closest to `query` in squared euclidean distance.
    ///
    /// `query` must have exactly [`dimensions`][KDTree::dimensions] coordinates.
    ///
    /// When several items are equally close, the one met first on the search path is kept: a
    /// node's own item wins over anything below it, and the side of the split containing the
    /// query wins over the other side.
    ///
    /// ```
    /// use kd_index::kdtree::KDTree;
    ///
    /// let items: Vec<[f64; 1]> = vec![[1.], [2.], [3.], [4.], [5.]];
    /// let tree = KDTree::build(items, |p: &[f64; 1]| *p).unwrap();
    /// assert_eq!(tree.nearest_neighbor(&[3.4]).unwrap(), &[3.]);
    /// ```
    pub fn nearest_neighbor<P>(&self, query: &[N]) -> Result<&T>
    where
        F: Fn(&T) -> P,
        P: AsRef<[N]>,
    {
        self.nearest_neighbor_with_distance(query).map(|(item, _)| item)
    }

    /// Find the nearest item along with its squared euclidean distance to `query`.
    ///
    /// Distances are measured in `f64` whatever the coordinate type. Items with a NaN coordinate
    /// are infinitely far from every query.
    pub fn nearest_neighbor_with_distance<P>(&self, query: &[N]) -> Result<(&T, f64)>
    where
        F: Fn(&T) -> P,
        P: AsRef<[N]>,
    {
        if query.len() != self.dimensions {
            return Err(KDIndexError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }

        let mut visited = 0;
        let best = nearest(
            &self.root,
            query,
            &self.point_of,
            0,
            self.dimensions,
            &mut visited,
        );
        trace!(
            "nearest neighbor search visited {} of {} nodes",
            visited,
            self.num_items
        );

        Ok((best.item, best.dist))
    }

    /// Find the item closest to a coordinate.
    ///
    /// The coordinate's dimension must match the tree's, e.g. an `xy` coordinate for a tree of
    /// 2-dimensional points.
    pub fn nearest_neighbor_coord<P>(&self, coord: &impl CoordTrait<T = N>) -> Result<&T>
    where
        F: Fn(&T) -> P,
        P: AsRef<[N]>,
    {
        let query: Vec<N> = (0..coord.dim().size())
            .map(|n| coord.nth_or_panic(n))
            .collect();
        self.nearest_neighbor(&query)
    }
}

/// Descend towards the query, then backtrack into the far side of each split whenever the
/// splitting plane is closer than the best candidate found so far.
fn nearest<'a, T, N, P, F>(
    node: &'a Node<T>,
    query: &[N],
    point_of: &F,
    depth: usize,
    dimensions: usize,
    visited: &mut usize,
) -> Candidate<'a, T>
where
    N: IndexableNum,
    F: Fn(&T) -> P,
    P: AsRef<[N]>,
{
    *visited += 1;

    let pivot = point_of(&node.item);
    let pivot = pivot.as_ref();
    let mut best = Candidate {
        item: &node.item,
        dist: sq_dist(query, pivot),
    };

    let axis = depth % dimensions;
    let (near, far) = if query[axis].total_cmp(&pivot[axis]) == Ordering::Less {
        (&node.left, &node.right)
    } else {
        (&node.right, &node.left)
    };

    if let Some(near) = near {
        best = best.closer(nearest(near, query, point_of, depth + 1, dimensions, visited));
    }

    if let Some(far) = far {
        let plane_dist = axis_dist(query[axis], pivot[axis]);
        // a NaN on the split axis gives no bound on the far side
        if plane_dist.is_nan() || plane_dist * plane_dist < best.dist {
            best = best.closer(nearest(far, query, point_of, depth + 1, dimensions, visited));
        }
    }

    best
}
