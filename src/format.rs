//! Runtime pixel format descriptors.
//!
//! [`PixelFormat`] names a storage layout chosen at runtime, for example
//! from a config file or a texture header, and reads or writes single pixels
//! of that layout from raw bytes. Packed formats are stored as one
//! native-endian integer; array formats as one byte per channel in the
//! named memory order.

use core::fmt;
use core::str::FromStr;

use crate::color::{Abgr8, Argb8, Bgr8, Bgra8, Rgb8, Rgba8};
use crate::packed::*;
use crate::traits::{CanonicalRgba, ColorCastFrom, ColorCastTo};

/// Channel order of a format.
///
/// For packed formats this lists channels from the most significant field
/// down; for array formats it is memory order. `X` is padding.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
    Rgba,
    Bgra,
    Argb,
    Abgr,
    Xrgb,
    Rgbx,
    Xbgr,
    Bgrx,
}

impl ChannelOrder {
    /// Whether the order includes an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            ChannelOrder::Rgba | ChannelOrder::Bgra | ChannelOrder::Argb | ChannelOrder::Abgr
        )
    }
}

// ---------------------------------------------------------------------------
// FormatError
// ---------------------------------------------------------------------------

/// Errors from the runtime format surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The name does not match any [`PixelFormat`].
    UnknownName,
    /// The byte slice is shorter than one pixel of the format.
    InsufficientData,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownName => write!(f, "unknown pixel format name"),
            Self::InsufficientData => write!(f, "byte slice is shorter than one pixel"),
        }
    }
}

impl core::error::Error for FormatError {}

// ---------------------------------------------------------------------------
// PixelFormat
// ---------------------------------------------------------------------------

macro_rules! pixel_formats {
    (
        packed { $($packed:ident => $pname:literal, $porder:ident;)+ }
        array { $($array:ident($color:ty, $n:literal) => $aname:literal, $aorder:ident;)+ }
    ) => {
        /// A pixel storage layout selected at runtime.
        ///
        /// Every [packed format](crate::PackedFormat) has a variant of the
        /// same name. The `*24`/`*32` variants are byte arrays with one `u8`
        /// per channel.
        #[non_exhaustive]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum PixelFormat {
            $(
                #[doc = concat!("[`", stringify!($packed), "`] in native byte order.")]
                $packed,
            )+
            $(
                #[doc = concat!("`", $aname, "` bytes, one per channel.")]
                $array,
            )+
        }

        impl PixelFormat {
            /// Every format, packed formats first.
            pub const ALL: &'static [PixelFormat] = &[
                $(PixelFormat::$packed,)+
                $(PixelFormat::$array,)+
            ];

            /// Canonical upper-case name, e.g. `"RGB565"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(PixelFormat::$packed => $pname,)+
                    $(PixelFormat::$array => $aname,)+
                }
            }

            /// Channel order.
            pub fn order(self) -> ChannelOrder {
                match self {
                    $(PixelFormat::$packed => ChannelOrder::$porder,)+
                    $(PixelFormat::$array => ChannelOrder::$aorder,)+
                }
            }

            /// Bit layout, for packed formats.
            pub fn layout(self) -> Option<PackedLayout> {
                match self {
                    $(PixelFormat::$packed => Some(<$packed as PackedFormat>::LAYOUT),)+
                    $(PixelFormat::$array => None,)+
                }
            }

            /// Storage size of one pixel in bits.
            pub fn bits_per_pixel(self) -> u32 {
                match self {
                    $(PixelFormat::$packed => u32::from(<$packed as PackedFormat>::LAYOUT.bits),)+
                    $(PixelFormat::$array => $n * 8,)+
                }
            }

            /// Unpack one pixel. `bytes` is at least one pixel long.
            fn unpack(self, bytes: &[u8]) -> CanonicalRgba {
                match self {
                    $(PixelFormat::$packed => {
                        <$packed as PackedFormat>::LAYOUT.unpack(read_packed(bytes))
                    })+
                    $(PixelFormat::$array => unpack_array::<$color, $n>(bytes),)+
                }
            }

            /// Pack one pixel. `out` is at least one pixel long.
            fn pack(self, hub: CanonicalRgba, out: &mut [u8]) {
                match self {
                    $(PixelFormat::$packed => {
                        let bits = <$packed as PackedFormat>::LAYOUT.pack(hub);
                        write_packed(bits, out);
                    })+
                    $(PixelFormat::$array => pack_array::<$color, $n>(hub, out),)+
                }
            }
        }
    };
}

pixel_formats! {
    packed {
        Rgb332 => "RGB332", Rgb;
        Rgb233 => "RGB233", Rgb;
        Bgr332 => "BGR332", Bgr;
        Bgr233 => "BGR233", Bgr;
        Rgb565 => "RGB565", Rgb;
        Bgr565 => "BGR565", Bgr;
        Rgba4444 => "RGBA4444", Rgba;
        Bgra4444 => "BGRA4444", Bgra;
        Argb4444 => "ARGB4444", Argb;
        Abgr4444 => "ABGR4444", Abgr;
        Xrgb4444 => "XRGB4444", Xrgb;
        Rgba5551 => "RGBA5551", Rgba;
        Bgra5551 => "BGRA5551", Bgra;
        Argb1555 => "ARGB1555", Argb;
        Abgr1555 => "ABGR1555", Abgr;
        Xrgb1555 => "XRGB1555", Xrgb;
        Xbgr1555 => "XBGR1555", Xbgr;
        Rgba8888 => "RGBA8888", Rgba;
        Bgra8888 => "BGRA8888", Bgra;
        Argb8888 => "ARGB8888", Argb;
        Abgr8888 => "ABGR8888", Abgr;
        Xrgb8888 => "XRGB8888", Xrgb;
        Rgbx8888 => "RGBX8888", Rgbx;
        Xbgr8888 => "XBGR8888", Xbgr;
        Bgrx8888 => "BGRX8888", Bgrx;
        Rgba1010102 => "RGBA1010102", Rgba;
        Bgra1010102 => "BGRA1010102", Bgra;
        Argb2101010 => "ARGB2101010", Argb;
        Abgr2101010 => "ABGR2101010", Abgr;
    }
    array {
        Rgb24(Rgb8, 3) => "RGB24", Rgb;
        Bgr24(Bgr8, 3) => "BGR24", Bgr;
        Rgba32(Rgba8, 4) => "RGBA32", Rgba;
        Bgra32(Bgra8, 4) => "BGRA32", Bgra;
        Argb32(Argb8, 4) => "ARGB32", Argb;
        Abgr32(Abgr8, 4) => "ABGR32", Abgr;
    }
}

impl PixelFormat {
    /// Look a format up by name (case-insensitive, `_` ignored).
    ///
    /// ```
    /// use zencolor::PixelFormat;
    ///
    /// assert_eq!(PixelFormat::from_name("rgb_565"), Some(PixelFormat::Rgb565));
    /// assert_eq!(PixelFormat::from_name("Argb2101010"), Some(PixelFormat::Argb2101010));
    /// assert_eq!(PixelFormat::from_name("yuv420"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        // Manual case folding without std.
        let mut buf = [0u8; 16];
        let mut len = 0;
        for &b in name.as_bytes() {
            if b == b'_' {
                continue;
            }
            if len == buf.len() {
                log::debug!("pixel format name too long: {name:?}");
                return None;
            }
            buf[len] = b.to_ascii_uppercase();
            len += 1;
        }
        let upper = &buf[..len];

        let found = Self::ALL
            .iter()
            .copied()
            .find(|format| format.name().as_bytes() == upper);
        if found.is_none() {
            log::debug!("unknown pixel format name: {name:?}");
        }
        found
    }

    /// Storage size of one pixel in bytes.
    pub fn bytes_per_pixel(self) -> usize {
        (self.bits_per_pixel() / 8) as usize
    }

    /// Whether the format stores alpha.
    pub fn has_alpha(self) -> bool {
        self.order().has_alpha()
    }

    /// Whether channels are bit fields of one integer.
    pub fn is_packed(self) -> bool {
        self.layout().is_some()
    }

    /// Whether channels are whole bytes in memory order.
    pub fn is_array(self) -> bool {
        !self.is_packed()
    }

    /// Read one pixel from the front of `bytes` into the canonical hub.
    ///
    /// ```
    /// use zencolor::{PixelFormat, Rgba};
    ///
    /// let hub = PixelFormat::Bgr24.decode_pixel(&[0, 0, 255]).unwrap();
    /// assert_eq!(hub, Rgba::new(1.0, 0.0, 0.0, 1.0));
    /// ```
    pub fn decode_pixel(self, bytes: &[u8]) -> Result<CanonicalRgba, FormatError> {
        let len = self.bytes_per_pixel();
        let Some(pixel) = bytes.get(..len) else {
            log::debug!("{self}: decode needs {len} bytes, got {}", bytes.len());
            return Err(FormatError::InsufficientData);
        };
        Ok(self.unpack(pixel))
    }

    /// Read one pixel and cast it to `To`.
    ///
    /// ```
    /// use zencolor::{PixelFormat, Rgb565, Rgb8};
    ///
    /// let bytes = Rgb565::new(31, 0, 0).to_bits().to_ne_bytes();
    /// let red: Rgb8 = PixelFormat::Rgb565.decode_as(&bytes).unwrap();
    /// assert_eq!(red, Rgb8::new(255, 0, 0));
    /// ```
    pub fn decode_as<To: ColorCastTo>(self, bytes: &[u8]) -> Result<To, FormatError> {
        self.decode_pixel(bytes).map(To::from_canonical)
    }

    /// Cast `color` into this format and write it to the front of `out`.
    ///
    /// Returns the number of bytes written. Bytes past the pixel are left
    /// untouched.
    ///
    /// ```
    /// use zencolor::{PixelFormat, Rgb8};
    ///
    /// let mut out = [0u8; 4];
    /// let n = PixelFormat::Argb32.encode_pixel(Rgb8::new(1, 2, 3), &mut out).unwrap();
    /// assert_eq!((n, out), (4, [255, 1, 2, 3]));
    /// ```
    pub fn encode_pixel<C: ColorCastFrom>(
        self,
        color: C,
        out: &mut [u8],
    ) -> Result<usize, FormatError> {
        let len = self.bytes_per_pixel();
        let available = out.len();
        let Some(pixel) = out.get_mut(..len) else {
            log::debug!("{self}: encode needs {len} bytes, got {available}");
            return Err(FormatError::InsufficientData);
        };
        self.pack(color.into_canonical(), pixel);
        Ok(len)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(FormatError::UnknownName)
    }
}

// ---------------------------------------------------------------------------
// Byte helpers
// ---------------------------------------------------------------------------

#[inline]
fn read_packed(bytes: &[u8]) -> u32 {
    match bytes.len() {
        1 => u32::from(bytes[0]),
        2 => u32::from(u16::from_ne_bytes([bytes[0], bytes[1]])),
        _ => u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
    }
}

#[inline]
fn write_packed(bits: u32, out: &mut [u8]) {
    match out.len() {
        1 => out[0] = bits as u8,
        2 => out.copy_from_slice(&(bits as u16).to_ne_bytes()),
        _ => out.copy_from_slice(&bits.to_ne_bytes()),
    }
}

#[inline]
fn unpack_array<C, const N: usize>(bytes: &[u8]) -> CanonicalRgba
where
    C: ColorCastFrom + From<[u8; N]>,
{
    let mut px = [0u8; N];
    px.copy_from_slice(bytes);
    C::from(px).into_canonical()
}

#[inline]
fn pack_array<C, const N: usize>(hub: CanonicalRgba, out: &mut [u8])
where
    C: ColorCastTo,
    [u8; N]: From<C>,
{
    out.copy_from_slice(&<[u8; N]>::from(C::from_canonical(hub)));
}
