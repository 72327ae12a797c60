//! The `color_cast` entry point.

use crate::traits::{ColorCastFrom, ColorCastTo};

/// Convert a color value from one representation to another.
///
/// The source is unpacked into the [canonical hub](crate::CanonicalRgba)
/// and the destination packed from it. Each channel is rescaled by
/// `out = round(in × Md / Ms)` with `M = 2^W - 1` for its field or datatype
/// width `W`; floats behave as infinitely wide. A source without alpha gives
/// fully opaque alpha; a source without some color channel gives zero for it.
///
/// `color_cast` never fails. Precision loss when narrowing is ordinary
/// quantization.
///
/// ```
/// use zencolor::{color_cast, Bgra8, Rgb565, Rgb8, Rgba8, RgbaF32};
///
/// let white = Rgb8::new(255, 255, 255);
/// let packed: Rgb565 = color_cast(white);
/// assert_eq!(packed.to_bits(), 0xFFFF);
/// assert_eq!(color_cast::<Rgb8, _>(packed), white);
///
/// // Channels are matched by name, not by position.
/// let bgra: Bgra8 = color_cast(Rgba8::new(1, 2, 3, 4));
/// assert_eq!((bgra.r, bgra.g, bgra.b, bgra.a), (1, 2, 3, 4));
///
/// // Missing alpha becomes opaque in the destination's datatype.
/// assert_eq!(color_cast::<RgbaF32, _>(packed).a, 1.0);
/// ```
///
/// Pairs without an implementation do not compile. A bare integer is not a
/// color:
///
/// ```compile_fail
/// use zencolor::{color_cast, Rgba8};
///
/// let c: Rgba8 = color_cast(0xFF00_00FFu32);
/// ```
///
/// and neither is a tuple:
///
/// ```compile_fail
/// use zencolor::{color_cast, Rgb565};
///
/// let c: Rgb565 = color_cast((255u8, 0u8, 0u8));
/// ```
#[inline]
pub fn color_cast<To: ColorCastTo, From: ColorCastFrom>(from: From) -> To {
    To::from_canonical(from.into_canonical())
}
