//! Channel and composite color types.
//!
//! Each type is a plain `#[repr(C)]` struct of public channel fields, generic
//! over the channel datatype. Field declaration order is memory order, so
//! [`Bgra<u8>`] is laid out `b, g, r, a` while its channels are still read
//! by name.
//!
//! Equality is exact per channel. Nothing here narrows implicitly; use
//! [`color_cast`](crate::color_cast) or [`norm_cast`](crate::norm_cast) to
//! change datatype.

use crate::norm::ChannelType;
use crate::traits::{BuiltinColor, CanonicalRgba, ColorCastFrom, ColorCastTo};

macro_rules! builtin_color {
    ($(
        $(#[$meta:meta])*
        $name:ident { $($field:ident),+ } channels: $n:literal, alpha: $alpha:literal;
    )+) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[repr(C)]
        pub struct $name<T> {
            $(pub $field: T,)+
        }

        impl<T> $name<T> {
            /// Create from channel values in declaration order.
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T> From<[T; $n]> for $name<T> {
            #[inline]
            fn from([$($field),+]: [T; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(color: $name<T>) -> Self {
                [$(color.$field),+]
            }
        }

        impl<T: ChannelType> BuiltinColor for $name<T> {
            type Channel = T;
            const CHANNELS: usize = $n;
            const HAS_ALPHA: bool = $alpha;
        }

        impl<T: ChannelType> ColorCastFrom for $name<T> {
            #[inline]
            fn into_canonical(self) -> CanonicalRgba {
                let mut hub = CanonicalRgba::new(0.0, 0.0, 0.0, 1.0);
                $(hub.$field = self.$field.to_unit();)+
                hub
            }
        }

        impl<T: ChannelType> ColorCastTo for $name<T> {
            #[inline]
            fn from_canonical(hub: CanonicalRgba) -> Self {
                Self { $($field: T::from_unit(hub.$field)),+ }
            }
        }
    )+};
}

builtin_color! {
    /// Red channel alone.
    R { r } channels: 1, alpha: false;
    /// Green channel alone.
    G { g } channels: 1, alpha: false;
    /// Blue channel alone.
    B { b } channels: 1, alpha: false;
    /// Red and green channels.
    Rg { r, g } channels: 2, alpha: false;
    /// Red, green, blue.
    Rgb { r, g, b } channels: 3, alpha: false;
    /// Blue, green, red (BGR byte order).
    Bgr { b, g, r } channels: 3, alpha: false;
    /// Red, green, blue, straight alpha.
    Rgba { r, g, b, a } channels: 4, alpha: true;
    /// Blue, green, red, alpha (Windows/DirectX byte order).
    Bgra { b, g, r, a } channels: 4, alpha: true;
    /// Alpha, red, green, blue.
    Argb { a, r, g, b } channels: 4, alpha: true;
    /// Alpha, blue, green, red.
    Abgr { a, b, g, r } channels: 4, alpha: true;
}

impl<T> Rgb<T> {
    /// Attach an alpha channel.
    #[inline]
    pub fn with_alpha(self, a: T) -> Rgba<T> {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl<T> Bgr<T> {
    /// Attach an alpha channel.
    #[inline]
    pub fn with_alpha(self, a: T) -> Bgra<T> {
        Bgra {
            b: self.b,
            g: self.g,
            r: self.r,
            a,
        }
    }
}

impl<T> Rgba<T> {
    /// Drop the alpha channel.
    #[inline]
    pub fn without_alpha(self) -> Rgb<T> {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl<T: ChannelType> Rgba<T> {
    /// Fully opaque color.
    #[inline]
    pub const fn opaque(r: T, g: T, b: T) -> Self {
        Self { r, g, b, a: T::MAX }
    }
}

impl<T> Bgra<T> {
    /// Drop the alpha channel.
    #[inline]
    pub fn without_alpha(self) -> Bgr<T> {
        Bgr {
            b: self.b,
            g: self.g,
            r: self.r,
        }
    }
}

impl<T: ChannelType> Bgra<T> {
    /// Fully opaque color.
    #[inline]
    pub const fn opaque(r: T, g: T, b: T) -> Self {
        Self { b, g, r, a: T::MAX }
    }
}

// Aliases -----------------------------------------------------------------

/// 8-bit RGB.
pub type Rgb8 = Rgb<u8>;
/// 16-bit RGB.
pub type Rgb16 = Rgb<u16>;
/// Float RGB.
pub type RgbF32 = Rgb<f32>;
/// 8-bit BGR.
pub type Bgr8 = Bgr<u8>;
/// 8-bit RGBA.
pub type Rgba8 = Rgba<u8>;
/// 16-bit RGBA.
pub type Rgba16 = Rgba<u16>;
/// Float RGBA.
pub type RgbaF32 = Rgba<f32>;
/// 8-bit BGRA.
pub type Bgra8 = Bgra<u8>;
/// 8-bit ARGB.
pub type Argb8 = Argb<u8>;
/// 8-bit ABGR.
pub type Abgr8 = Abgr<u8>;
