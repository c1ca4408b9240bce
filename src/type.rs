use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::{Bounded, Num, NumCast, ToPrimitive};

/// A trait for types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Distances are always
/// computed in `f64`, so no coordinate type can overflow while measuring.
pub trait IndexableNum:
    private::Sealed
    + Num
    + NumCast
    + ToPrimitive
    + PartialOrd
    + Copy
    + Debug
    + Send
    + Sync
    + Bounded
{
    /// Widen this coordinate to `f64`.
    fn as_f64(self) -> f64;

    /// A total order over coordinates. Floats order as [`f64::total_cmp`], so NaN sorts after
    /// positive infinity (or before negative infinity when its sign bit is set).
    fn total_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl IndexableNum for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl IndexableNum for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_integer!(i8, u8, i16, u16, i32, u32);
impl_float!(f32, f64);

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
