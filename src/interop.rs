//! Conversions to and from the [`rgb`] crate's pixel types.
//!
//! Field-for-field `From` impls in both directions, plus cast support so
//! `rgb` pixels can be passed to [`color_cast`](crate::color_cast) directly.

use rgb::alt::{BGR, BGRA};
use rgb::{Rgb as RgbPixel, Rgba as RgbaPixel};

use crate::color::{Bgr, Bgra, Rgb, Rgba};
use crate::norm::ChannelType;
use crate::traits::{CanonicalRgba, ColorCastFrom, ColorCastTo};

macro_rules! rgb_interop {
    ($($ours:ident <=> $theirs:ident { $($field:ident),+ };)+) => {$(
        impl<T> From<$theirs<T>> for $ours<T> {
            #[inline]
            fn from(px: $theirs<T>) -> Self {
                Self { $($field: px.$field),+ }
            }
        }

        impl<T> From<$ours<T>> for $theirs<T> {
            #[inline]
            fn from(px: $ours<T>) -> Self {
                Self { $($field: px.$field),+ }
            }
        }

        impl<T: ChannelType> ColorCastFrom for $theirs<T> {
            #[inline]
            fn into_canonical(self) -> CanonicalRgba {
                $ours::<T>::from(self).into_canonical()
            }
        }

        impl<T: ChannelType> ColorCastTo for $theirs<T> {
            #[inline]
            fn from_canonical(hub: CanonicalRgba) -> Self {
                $ours::<T>::from_canonical(hub).into()
            }
        }
    )+};
}

rgb_interop! {
    Rgb <=> RgbPixel { r, g, b };
    Rgba <=> RgbaPixel { r, g, b, a };
    Bgr <=> BGR { b, g, r };
    Bgra <=> BGRA { b, g, r, a };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cast::color_cast;
    use crate::color::{Bgra8, Rgb8, Rgba8};
    use crate::packed::Rgb565;

    #[test]
    fn from_both_ways() {
        let theirs = rgb::Rgb { r: 1u8, g: 2, b: 3 };
        let ours = Rgb8::from(theirs);
        assert_eq!(ours, Rgb8::new(1, 2, 3));
        assert_eq!(rgb::Rgb::from(ours), theirs);

        let theirs = BGRA { b: 1u8, g: 2, r: 3, a: 4 };
        let ours = Bgra8::from(theirs);
        assert_eq!((ours.r, ours.a), (3, 4));
        assert_eq!(BGRA::from(ours), theirs);
    }

    #[test]
    fn rgb_pixels_are_castable() {
        let packed: Rgb565 = color_cast(rgb::Rgb { r: 255u8, g: 255, b: 255 });
        assert_eq!(packed.to_bits(), 0xFFFF);

        let px: rgb::Rgba<u8> = color_cast(Rgb565::new(31, 0, 0));
        assert_eq!(px, rgb::Rgba { r: 255, g: 0, b: 0, a: 255 });

        let bgr: BGR<u16> = color_cast(Rgba8::new(255, 0, 0, 0));
        assert_eq!(bgr, BGR { b: 0, g: 0, r: 65535 });
    }

    #[test]
    fn float_pixels() {
        let px: rgb::Rgb<f32> = color_cast(Rgb8::new(0, 51, 255));
        assert_eq!(px, rgb::Rgb { r: 0.0, g: 0.2, b: 1.0 });
    }
}
