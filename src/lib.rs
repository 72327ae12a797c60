//! Color and packed pixel types with a compile-time checked cast between them.
//!
//! - [`R`], [`Rg`], [`Rgb`], [`Bgra`] and friends: plain channel structs,
//!   generic over `u8`, `u16`, `u32`, `f32` or `f64`
//! - [`Rgb565`], [`Argb4444`], [`Abgr2101010`] and the rest: packed
//!   bit-field formats with GPU-compatible layouts
//! - [`Hsv`]: hue/saturation/value
//! - [`color_cast`]: converts between any two of the above
//! - [`norm_cast`]: rescales a single channel value between datatypes
//! - [`PixelFormat`]: a runtime descriptor that reads and writes single
//!   pixels from bytes
//!
//! ```
//! use zencolor::{color_cast, Hsv, Rgb565, Rgb8, Rgba8};
//!
//! let packed: Rgb565 = color_cast(Rgb8::new(255, 128, 0));
//! assert_eq!((packed.r(), packed.g(), packed.b()), (31, 32, 0));
//!
//! let back: Rgba8 = color_cast(packed);
//! assert_eq!(back, Rgba8::new(255, 130, 0, 255));
//!
//! let hsv: Hsv = color_cast(back);
//! assert!(hsv.h > 30.0 && hsv.h < 31.0);
//! ```
//!
//! Integer channels are normalized intensities: converting between widths
//! rescales by `round(in × Md / Ms)` rather than shifting, so white stays
//! white and black stays black in every format. A source without alpha
//! becomes fully opaque.
//!
//! # Features
//!
//! - `rgb` (default): conversions to and from the [`rgb`] crate's pixel
//!   types, which also become valid [`color_cast`] endpoints.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod cast;
mod color;
mod format;
mod hsv;
#[cfg(feature = "rgb")]
mod interop;
mod norm;
mod packed;
mod traits;

pub use cast::color_cast;
pub use color::{
    Abgr, Abgr8, Argb, Argb8, B, Bgr, Bgr8, Bgra, Bgra8, G, R, Rg, Rgb, Rgb8, Rgb16, RgbF32, Rgba,
    Rgba8, Rgba16, RgbaF32,
};
pub use format::{ChannelOrder, FormatError, PixelFormat};
pub use hsv::Hsv;
pub use norm::{ChannelType, norm_cast};
pub use packed::{
    Abgr1555, Abgr4444, Abgr2101010, Abgr8888, Argb1555, Argb4444, Argb2101010, Argb8888,
    BitField, Bgr233, Bgr332, Bgr565, Bgra1010102, Bgra4444, Bgra5551, Bgra8888, Bgrx8888,
    PackedFormat, PackedLayout, Rgb233, Rgb332, Rgb565, Rgba1010102, Rgba4444, Rgba5551,
    Rgba8888, Rgbx8888, Xbgr1555, Xbgr8888, Xrgb1555, Xrgb4444, Xrgb8888,
};
pub use traits::{BuiltinColor, CanonicalRgba, CastInto, ColorCastFrom, ColorCastTo};

// Re-export for interop users.
#[cfg(feature = "rgb")]
pub use rgb;
