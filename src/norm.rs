//! Channel datatypes and normalized rescaling.
//!
//! Every channel value is a normalized intensity: an integer channel of
//! width `W` spans `[0, 2^W - 1]`, a float channel spans `[0.0, 1.0]`.
//! [`norm_cast`] moves a value between datatypes by the rule
//! `out = round(in × Md / Ms)`, where `M = 2^W - 1` and floats act as an
//! infinitely wide source or destination.
//!
//! Rounding is half away from zero. Integer to integer rescales never land
//! exactly on a half because every `Ms` is odd, so the tie rule is only
//! observable for float inputs.

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A numeric type a color channel may be stored in.
///
/// Implemented for `u8`, `u16`, `u32`, `f32` and `f64`. Sealed: the
/// normalized-rescale rule is only defined for these.
pub trait ChannelType:
    sealed::Sealed + Copy + Default + PartialEq + PartialOrd + core::fmt::Debug + Send + Sync + 'static
{
    /// Zero intensity.
    const ZERO: Self;
    /// Full intensity: `2^W - 1` for integers, `1.0` for floats.
    const MAX: Self;
    /// Whether the channel is floating point.
    const IS_FLOAT: bool;

    /// Value as a fraction of [`MAX`](Self::MAX).
    fn to_unit(self) -> f64;

    /// Channel value for a fraction of [`MAX`](Self::MAX).
    ///
    /// Integer channels round half away from zero and saturate to
    /// `[0, MAX]`; NaN becomes zero. Float channels keep the value as is.
    fn from_unit(unit: f64) -> Self;
}

macro_rules! integer_channel {
    ($($ty:ty),+) => {$(
        impl ChannelType for $ty {
            const ZERO: Self = 0;
            const MAX: Self = <$ty>::MAX;
            const IS_FLOAT: bool = false;

            #[inline]
            fn to_unit(self) -> f64 {
                dequantize(u32::from(self), u32::from(<$ty>::MAX))
            }

            #[inline]
            fn from_unit(unit: f64) -> Self {
                // quantize never exceeds the max it was handed.
                quantize(unit, u32::from(<$ty>::MAX)) as $ty
            }
        }
    )+};
}

integer_channel!(u8, u16, u32);

impl ChannelType for f32 {
    const ZERO: Self = 0.0;
    const MAX: Self = 1.0;
    const IS_FLOAT: bool = true;

    #[inline]
    fn to_unit(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_unit(unit: f64) -> Self {
        unit as f32
    }
}

impl ChannelType for f64 {
    const ZERO: Self = 0.0;
    const MAX: Self = 1.0;
    const IS_FLOAT: bool = true;

    #[inline]
    fn to_unit(self) -> f64 {
        self
    }

    #[inline]
    fn from_unit(unit: f64) -> Self {
        unit
    }
}

/// Rescale a channel value from one datatype to another.
///
/// ```
/// use zencolor::norm_cast;
///
/// assert_eq!(norm_cast::<u16, u8>(255), 65535);
/// assert_eq!(norm_cast::<u8, u16>(0x8080), 128);
/// assert_eq!(norm_cast::<u8, f32>(0.5), 128);
/// assert_eq!(norm_cast::<f32, u8>(51), 0.2);
/// ```
#[inline]
pub fn norm_cast<To: ChannelType, From: ChannelType>(from: From) -> To {
    To::from_unit(from.to_unit())
}

/// Integer level `value` out of `max` as a fraction.
#[inline]
pub(crate) fn dequantize(value: u32, max: u32) -> f64 {
    f64::from(value) / f64::from(max)
}

/// Nearest integer level out of `max` for a fraction, saturating.
#[inline]
pub(crate) fn quantize(unit: f64, max: u32) -> u32 {
    let max_f = f64::from(max);
    let scaled = unit * max_f;
    // Written so NaN takes the first branch.
    if !(scaled > 0.0) {
        0
    } else if scaled >= max_f {
        max
    } else {
        (scaled + 0.5) as u32
    }
}
