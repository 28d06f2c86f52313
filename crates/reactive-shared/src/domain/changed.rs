//! Change detection
//!
//! Decides whether a new value differs from an old one for reactivity
//! purposes. Floating-point values follow "same value" semantics rather than
//! IEEE equality:
//!
//! - `+0.0` and `-0.0` are different
//! - `NaN` is the same as `NaN`
//!
//! Every other type falls back to plain equality.

/// Types that can report whether they changed relative to another value
pub trait ChangeDetect {
    /// Returns true when `self` and `other` should be treated as different
    fn has_changed(&self, other: &Self) -> bool;
}

/// Check whether `y` differs from `x`
///
/// ```
/// use reactive_shared::has_changed;
///
/// assert!(!has_changed(&5.0, &5.0));
/// assert!(has_changed(&0.0, &-0.0));
/// assert!(!has_changed(&f64::NAN, &f64::NAN));
/// assert!(!has_changed("a", "a"));
/// ```
#[inline]
pub fn has_changed<T: ChangeDetect + ?Sized>(x: &T, y: &T) -> bool {
    x.has_changed(y)
}

macro_rules! impl_float_change_detect {
    ($($t:ty),*) => {
        $(
            impl ChangeDetect for $t {
                #[inline]
                fn has_changed(&self, other: &Self) -> bool {
                    let (x, y) = (*self, *other);
                    if x == y {
                        // Only zeros of opposite sign compare equal yet differ
                        x == 0.0 && x.recip() != y.recip()
                    } else {
                        !(x.is_nan() && y.is_nan())
                    }
                }
            }
        )*
    };
}

macro_rules! impl_eq_change_detect {
    ($($t:ty),*) => {
        $(
            impl ChangeDetect for $t {
                #[inline]
                fn has_changed(&self, other: &Self) -> bool {
                    self != other
                }
            }
        )*
    };
}

impl_float_change_detect!(f32, f64);

impl_eq_change_detect!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String, ()
);

impl<T: ChangeDetect> ChangeDetect for Option<T> {
    fn has_changed(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(x), Some(y)) => x.has_changed(y),
            (None, None) => false,
            _ => true,
        }
    }
}

impl<T: ChangeDetect + ?Sized> ChangeDetect for &T {
    #[inline]
    fn has_changed(&self, other: &Self) -> bool {
        (**self).has_changed(*other)
    }
}
