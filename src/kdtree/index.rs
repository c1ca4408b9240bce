use std::fmt::Debug;
use std::marker::PhantomData;

use crate::error::Result;
use crate::kdtree::builder::{MaybeSend, MaybeSync};
use crate::kdtree::KDTreeBuilder;
use crate::r#type::IndexableNum;

/// One partition step of the tree.
///
/// The item is the median of its subset along the node's axis. Children are exclusively owned.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

/// An immutable K-D Tree owning its items and the projection used to place them.
///
/// Usually this will be created from scratch via [`KDTreeBuilder`] or [`KDTree::build`]. The
/// tree can't be empty and can't be modified after construction, so it is safe to share across
/// threads for concurrent queries whenever `T` and the projection are [`Sync`].
#[derive(Clone)]
pub struct KDTree<T, N: IndexableNum, F> {
    pub(crate) root: Node<T>,
    pub(crate) point_of: F,
    pub(crate) num_items: usize,
    pub(crate) dimensions: usize,
    pub(crate) phantom: PhantomData<N>,
}

impl<T, N: IndexableNum, F> KDTree<T, N, F> {
    /// Build a tree from `items`, deriving the dimensionality from the first item's point.
    ///
    /// ```
    /// use kd_index::kdtree::KDTree;
    ///
    /// let tree = KDTree::build(vec![[0., 0.], [5., 5.], [9., 1.]], |p: &[f64; 2]| *p).unwrap();
    /// assert_eq!(tree.nearest_neighbor(&[6., 4.]).unwrap(), &[5., 5.]);
    /// ```
    pub fn build<P, I>(items: I, point_of: F) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> P + MaybeSync,
        P: AsRef<[N]>,
        T: MaybeSend,
    {
        KDTreeBuilder::new(point_of).finish(items)
    }

    /// The number of items in this tree
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// The number of coordinates of every point in this tree
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The number of levels of the tree.
    ///
    /// Every split is an exact median split, so this is always `floor(log2(num_items)) + 1`.
    pub fn height(&self) -> usize {
        (usize::BITS - self.num_items.leading_zeros()) as usize
    }

    /// The projection this tree was built with.
    pub fn point_selector(&self) -> &F {
        &self.point_of
    }
}

impl<T: Debug, N: IndexableNum, F> Debug for KDTree<T, N, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KDTree")
            .field("num_items", &self.num_items)
            .field("dimensions", &self.dimensions)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
