use std::cmp::Ordering;

use crate::r#type::IndexableNum;

/// Squared euclidean distance between two points of equal length.
///
/// Points with a NaN coordinate are infinitely far from everything.
#[inline]
pub(crate) fn sq_dist<N: IndexableNum>(a: &[N], b: &[N]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let dist = a.iter().zip(b).fold(0., |dist, (&x, &y)| {
        let d = axis_dist(x, y);
        dist + d * d
    });
    if dist.is_nan() {
        f64::INFINITY
    } else {
        dist
    }
}

/// Absolute difference of two coordinates, measured in `f64`.
#[inline]
pub(crate) fn axis_dist<N: IndexableNum>(a: N, b: N) -> f64 {
    (a.as_f64() - b.as_f64()).abs()
}

/// Order two coordinates under the total order of [`IndexableNum::total_cmp`].
#[inline]
pub(crate) fn cmp_coord<N: IndexableNum>(a: N, b: N) -> Ordering {
    a.total_cmp(&b)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn squared_distance() {
        assert_eq!(sq_dist(&[0., 0.], &[3., 4.]), 25.);
        assert_eq!(sq_dist(&[1.5], &[1.5]), 0.);
        assert_eq!(sq_dist::<u8>(&[5, 1], &[2, 3]), 13.);
    }

    #[test]
    fn distance_does_not_overflow() {
        assert_eq!(axis_dist::<u32>(2, 7), 5.);
        assert_eq!(axis_dist::<u32>(7, 2), 5.);
        assert_eq!(axis_dist::<i8>(i8::MIN, i8::MAX), 255.);
        assert_eq!(sq_dist::<u8>(&[0, 255], &[255, 0]), 130_050.);
        let d = u32::MAX as f64;
        assert_eq!(sq_dist::<i32>(&[i32::MIN], &[i32::MAX]), d * d);
    }

    #[test]
    fn nan_is_infinitely_far() {
        assert_eq!(sq_dist(&[f64::NAN, 0.], &[1., 1.]), f64::INFINITY);
        assert_eq!(sq_dist(&[0f32], &[f32::NAN]), f64::INFINITY);
    }

    #[test]
    fn coordinates_are_totally_ordered() {
        assert_eq!(cmp_coord(1., f64::NAN), Ordering::Less);
        assert_eq!(cmp_coord(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(cmp_coord(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(cmp_coord(-1i8, 3), Ordering::Less);
    }
}
