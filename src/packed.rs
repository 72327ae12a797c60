//! Packed bit-field pixel formats.
//!
//! Each format is a `#[repr(transparent)]` newtype over a `u8`, `u16` or
//! `u32` whose channels occupy fixed bit ranges. Layouts match the packed
//! pixel-transfer types of OpenGL, Vulkan and DXGI bit for bit.
//!
//! # Naming
//!
//! A type name lists its channels from the **most significant** field down,
//! followed by the field widths in the same order. [`Rgb565`] keeps red in
//! bits 15..11, green in 10..5 and blue in 4..0, which is
//! `GL_RGB`/`GL_UNSIGNED_SHORT_5_6_5`. An `X` is padding: those bits are
//! always zero.
//!
//! Constructors mask each channel to its field width; they never reject
//! input.

use crate::norm::{dequantize, quantize};
use crate::traits::{CanonicalRgba, ColorCastFrom, ColorCastTo};

// ---------------------------------------------------------------------------
// Layout description
// ---------------------------------------------------------------------------

/// Position of one channel inside a packed integer.
///
/// A zero-width field marks a channel the format does not carry. It is never
/// read or written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitField {
    /// Bit index of the least significant bit of the field.
    pub offset: u8,
    /// Width of the field in bits.
    pub width: u8,
}

impl BitField {
    /// Field of a channel the format lacks.
    pub const ABSENT: Self = Self {
        offset: 0,
        width: 0,
    };

    /// Create a field.
    pub const fn new(offset: u8, width: u8) -> Self {
        Self { offset, width }
    }

    /// Whether the format carries this channel.
    #[inline]
    pub const fn is_present(self) -> bool {
        self.width != 0
    }

    /// Largest value the field holds, `2^width - 1`.
    #[inline]
    pub const fn max(self) -> u32 {
        if self.width == 0 {
            0
        } else if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        }
    }

    /// Mask covering the field in the packed integer.
    ///
    /// Bits of a field that reach past bit 31 are cut off.
    #[inline]
    pub const fn mask(self) -> u32 {
        match self.max().checked_shl(self.offset as u32) {
            Some(mask) => mask,
            None => 0,
        }
    }

    /// Read the field out of a packed integer.
    #[inline]
    pub const fn extract(self, bits: u32) -> u32 {
        match bits.checked_shr(self.offset as u32) {
            Some(value) => value & self.max(),
            None => 0,
        }
    }

    /// Position `value` in the field, masking it to the field width.
    #[inline]
    pub const fn insert(self, value: u32) -> u32 {
        match (value & self.max()).checked_shl(self.offset as u32) {
            Some(field) => field,
            None => 0,
        }
    }
}

/// Bit layout of a packed format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PackedLayout {
    /// Red field.
    pub r: BitField,
    /// Green field.
    pub g: BitField,
    /// Blue field.
    pub b: BitField,
    /// Alpha field ([`BitField::ABSENT`] for formats without alpha).
    pub a: BitField,
    /// Width of the containing integer.
    pub bits: u8,
}

impl PackedLayout {
    /// Layout with no channels in an integer of `bits` width.
    pub const fn empty(bits: u8) -> Self {
        Self {
            r: BitField::ABSENT,
            g: BitField::ABSENT,
            b: BitField::ABSENT,
            a: BitField::ABSENT,
            bits,
        }
    }

    /// Bits occupied by some channel. Everything else is padding.
    #[inline]
    pub const fn used_mask(self) -> u32 {
        self.r.mask() | self.g.mask() | self.b.mask() | self.a.mask()
    }

    /// Whether the layout has an alpha field.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        self.a.is_present()
    }

    /// Unpack every field and rescale it into the canonical hub.
    ///
    /// A missing alpha field reads as fully opaque.
    pub fn unpack(self, bits: u32) -> CanonicalRgba {
        let channel = |field: BitField, missing: f64| {
            if field.is_present() {
                dequantize(field.extract(bits), field.max())
            } else {
                missing
            }
        };
        CanonicalRgba::new(
            channel(self.r, 0.0),
            channel(self.g, 0.0),
            channel(self.b, 0.0),
            channel(self.a, 1.0),
        )
    }

    /// Rescale each hub channel to its field width and pack them.
    pub fn pack(self, hub: CanonicalRgba) -> u32 {
        let field = |field: BitField, unit: f64| {
            if field.is_present() {
                field.insert(quantize(unit, field.max()))
            } else {
                0
            }
        };
        field(self.r, hub.r) | field(self.g, hub.g) | field(self.b, hub.b) | field(self.a, hub.a)
    }
}

// ---------------------------------------------------------------------------
// PackedFormat
// ---------------------------------------------------------------------------

/// An opaque bit container with a fixed [`PackedLayout`].
pub trait PackedFormat: Copy + Eq + core::fmt::Debug + Send + Sync + 'static {
    /// Containing integer type.
    type Bits: Copy;

    /// Channel positions.
    const LAYOUT: PackedLayout;

    /// Build from a raw value widened to `u32`, clearing padding bits.
    fn from_u32(bits: u32) -> Self;

    /// Raw value widened to `u32`.
    fn to_u32(self) -> u32;
}

macro_rules! packed_format {
    ($(
        $(#[$meta:meta])*
        $name:ident($bits:ty) { $($ch:ident: ($offset:literal, $width:literal)),+ }
    )+) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name($bits);

        impl $name {
            /// Pack channel values, most significant field first.
            ///
            /// Each value is masked to its field width.
            #[inline]
            pub const fn new($($ch: $bits),+) -> Self {
                Self((0 $(| <Self as PackedFormat>::LAYOUT.$ch.insert($ch as u32))+) as $bits)
            }

            /// Wrap a raw packed value. Padding bits are cleared.
            #[inline]
            pub const fn from_bits(bits: $bits) -> Self {
                Self(bits & (<Self as PackedFormat>::LAYOUT.used_mask() as $bits))
            }

            /// The raw packed value.
            #[inline]
            pub const fn to_bits(self) -> $bits {
                self.0
            }

            $(
                #[doc = concat!("The `", stringify!($ch), "` field, in `[0, 2^", stringify!($width), " - 1]`.")]
                #[inline]
                pub const fn $ch(self) -> $bits {
                    <Self as PackedFormat>::LAYOUT.$ch.extract(self.0 as u32) as $bits
                }
            )+
        }

        impl PackedFormat for $name {
            type Bits = $bits;

            const LAYOUT: PackedLayout = PackedLayout {
                $($ch: BitField::new($offset, $width),)+
                ..PackedLayout::empty(<$bits>::BITS as u8)
            };

            #[inline]
            fn from_u32(bits: u32) -> Self {
                Self::from_bits(bits as $bits)
            }

            #[inline]
            fn to_u32(self) -> u32 {
                self.0 as u32
            }
        }

        impl From<$name> for $bits {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ColorCastFrom for $name {
            #[inline]
            fn into_canonical(self) -> CanonicalRgba {
                Self::LAYOUT.unpack(self.to_u32())
            }
        }

        impl ColorCastTo for $name {
            #[inline]
            fn from_canonical(hub: CanonicalRgba) -> Self {
                Self::from_u32(Self::LAYOUT.pack(hub))
            }
        }
    )+};
}

// ---------------------------------------------------------------------------
// 8-bit formats
// ---------------------------------------------------------------------------

packed_format! {
    /// 3-3-2 RGB in a byte (`GL_UNSIGNED_BYTE_3_3_2`).
    Rgb332(u8) { r: (5, 3), g: (2, 3), b: (0, 2) }
    /// 2-3-3 RGB in a byte.
    Rgb233(u8) { r: (6, 2), g: (3, 3), b: (0, 3) }
    /// 3-3-2 BGR in a byte.
    Bgr332(u8) { b: (5, 3), g: (2, 3), r: (0, 2) }
    /// 2-3-3 BGR in a byte (`GL_RGB`/`GL_UNSIGNED_BYTE_2_3_3_REV`).
    Bgr233(u8) { b: (6, 2), g: (3, 3), r: (0, 3) }
}

// ---------------------------------------------------------------------------
// 16-bit formats
// ---------------------------------------------------------------------------

packed_format! {
    /// 5-6-5 RGB (`GL_RGB`/`GL_UNSIGNED_SHORT_5_6_5`).
    Rgb565(u16) { r: (11, 5), g: (5, 6), b: (0, 5) }
    /// 5-6-5 BGR (`GL_BGR`/`GL_UNSIGNED_SHORT_5_6_5`).
    Bgr565(u16) { b: (11, 5), g: (5, 6), r: (0, 5) }

    /// 4-4-4-4 RGBA (`GL_RGBA`/`GL_UNSIGNED_SHORT_4_4_4_4`).
    Rgba4444(u16) { r: (12, 4), g: (8, 4), b: (4, 4), a: (0, 4) }
    /// 4-4-4-4 BGRA (`GL_BGRA`/`GL_UNSIGNED_SHORT_4_4_4_4`).
    Bgra4444(u16) { b: (12, 4), g: (8, 4), r: (4, 4), a: (0, 4) }
    /// 4-4-4-4 ARGB (`GL_BGRA`/`GL_UNSIGNED_SHORT_4_4_4_4_REV`).
    Argb4444(u16) { a: (12, 4), r: (8, 4), g: (4, 4), b: (0, 4) }
    /// 4-4-4-4 ABGR (`GL_RGBA`/`GL_UNSIGNED_SHORT_4_4_4_4_REV`).
    Abgr4444(u16) { a: (12, 4), b: (8, 4), g: (4, 4), r: (0, 4) }
    /// 4-4-4 RGB with the top nibble unused.
    Xrgb4444(u16) { r: (8, 4), g: (4, 4), b: (0, 4) }

    /// 5-5-5-1 RGBA (`GL_RGBA`/`GL_UNSIGNED_SHORT_5_5_5_1`).
    Rgba5551(u16) { r: (11, 5), g: (6, 5), b: (1, 5), a: (0, 1) }
    /// 5-5-5-1 BGRA (`GL_BGRA`/`GL_UNSIGNED_SHORT_5_5_5_1`).
    Bgra5551(u16) { b: (11, 5), g: (6, 5), r: (1, 5), a: (0, 1) }
    /// 1-5-5-5 ARGB (`GL_BGRA`/`GL_UNSIGNED_SHORT_1_5_5_5_REV`).
    Argb1555(u16) { a: (15, 1), r: (10, 5), g: (5, 5), b: (0, 5) }
    /// 1-5-5-5 ABGR (`GL_RGBA`/`GL_UNSIGNED_SHORT_1_5_5_5_REV`).
    Abgr1555(u16) { a: (15, 1), b: (10, 5), g: (5, 5), r: (0, 5) }
    /// 5-5-5 RGB with the top bit unused.
    Xrgb1555(u16) { r: (10, 5), g: (5, 5), b: (0, 5) }
    /// 5-5-5 BGR with the top bit unused.
    Xbgr1555(u16) { b: (10, 5), g: (5, 5), r: (0, 5) }
}

// ---------------------------------------------------------------------------
// 32-bit formats
// ---------------------------------------------------------------------------

packed_format! {
    /// 8-8-8-8 RGBA (`GL_RGBA`/`GL_UNSIGNED_INT_8_8_8_8`).
    Rgba8888(u32) { r: (24, 8), g: (16, 8), b: (8, 8), a: (0, 8) }
    /// 8-8-8-8 BGRA (`GL_BGRA`/`GL_UNSIGNED_INT_8_8_8_8`).
    Bgra8888(u32) { b: (24, 8), g: (16, 8), r: (8, 8), a: (0, 8) }
    /// 8-8-8-8 ARGB (`GL_BGRA`/`GL_UNSIGNED_INT_8_8_8_8_REV`).
    Argb8888(u32) { a: (24, 8), r: (16, 8), g: (8, 8), b: (0, 8) }
    /// 8-8-8-8 ABGR (`GL_RGBA`/`GL_UNSIGNED_INT_8_8_8_8_REV`).
    Abgr8888(u32) { a: (24, 8), b: (16, 8), g: (8, 8), r: (0, 8) }
    /// 8-8-8 RGB with the top byte unused.
    Xrgb8888(u32) { r: (16, 8), g: (8, 8), b: (0, 8) }
    /// 8-8-8 RGB with the bottom byte unused.
    Rgbx8888(u32) { r: (24, 8), g: (16, 8), b: (8, 8) }
    /// 8-8-8 BGR with the top byte unused.
    Xbgr8888(u32) { b: (16, 8), g: (8, 8), r: (0, 8) }
    /// 8-8-8 BGR with the bottom byte unused.
    Bgrx8888(u32) { b: (24, 8), g: (16, 8), r: (8, 8) }

    /// 10-10-10-2 RGBA (`GL_RGBA`/`GL_UNSIGNED_INT_10_10_10_2`).
    Rgba1010102(u32) { r: (22, 10), g: (12, 10), b: (2, 10), a: (0, 2) }
    /// 10-10-10-2 BGRA (`GL_BGRA`/`GL_UNSIGNED_INT_10_10_10_2`).
    Bgra1010102(u32) { b: (22, 10), g: (12, 10), r: (2, 10), a: (0, 2) }
    /// 2-10-10-10 ARGB (`GL_BGRA`/`GL_UNSIGNED_INT_2_10_10_10_REV`).
    Argb2101010(u32) { a: (30, 2), r: (20, 10), g: (10, 10), b: (0, 10) }
    /// 2-10-10-10 ABGR (`GL_RGBA`/`GL_UNSIGNED_INT_2_10_10_10_REV`,
    /// `DXGI_FORMAT_R10G10B10A2_UNORM`).
    Abgr2101010(u32) { a: (30, 2), b: (20, 10), g: (10, 10), r: (0, 10) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    fn check_layout<P: PackedFormat>() {
        let layout = P::LAYOUT;
        let fields = [layout.r, layout.g, layout.b, layout.a];
        let total: u32 = fields.iter().map(|f| u32::from(f.width)).sum();
        assert!(total <= u32::from(layout.bits), "{layout:?}");
        assert_eq!(usize::from(layout.bits), size_of::<P>() * 8);
        for (i, a) in fields.iter().enumerate() {
            assert!(u32::from(a.offset) + u32::from(a.width) <= u32::from(layout.bits));
            for b in &fields[i + 1..] {
                assert_eq!(a.mask() & b.mask(), 0, "overlapping fields in {layout:?}");
            }
        }
        assert_eq!(layout.used_mask().count_ones(), total);
        assert!(layout.r.is_present() && layout.g.is_present() && layout.b.is_present());
    }

    macro_rules! check_layouts {
        ($($ty:ty),+ $(,)?) => {$( check_layout::<$ty>(); )+};
    }

    #[test]
    fn layouts_are_consistent() {
        check_layouts!(
            Rgb332, Rgb233, Bgr332, Bgr233, Rgb565, Bgr565, Rgba4444, Bgra4444, Argb4444,
            Abgr4444, Xrgb4444, Rgba5551, Bgra5551, Argb1555, Abgr1555, Xrgb1555, Xbgr1555,
            Rgba8888, Bgra8888, Argb8888, Abgr8888, Xrgb8888, Rgbx8888, Xbgr8888, Bgrx8888,
            Rgba1010102, Bgra1010102, Argb2101010, Abgr2101010,
        );
    }

    #[test]
    fn rgb565_bit_positions() {
        assert_eq!(Rgb565::new(0x1F, 0, 0).to_bits(), 0b11111_000000_00000);
        assert_eq!(Rgb565::new(0, 0x3F, 0).to_bits(), 0b00000_111111_00000);
        assert_eq!(Rgb565::new(0, 0, 0x1F).to_bits(), 0b00000_000000_11111);
        assert_eq!(Bgr565::new(0x1F, 0, 0).to_bits(), 0b11111_000000_00000);

        let c = Rgb565::from_bits(0b10101_110011_01110);
        assert_eq!((c.r(), c.g(), c.b()), (0b10101, 0b110011, 0b01110));
    }

    #[test]
    fn constructor_masks_out_of_range() {
        let c = Rgb565::new(0xFF, 0xFF, 0xFF);
        assert_eq!(c.to_bits(), 0xFFFF);
        assert_eq!(c.r(), 31);
        assert_eq!(c.g(), 63);

        let c = Rgba5551::new(32, 0, 0, 3);
        assert_eq!((c.r(), c.a()), (0, 1));
    }

    #[test]
    fn padding_bits_are_zero() {
        assert_eq!(Xrgb8888::from_bits(0xFFFF_FFFF).to_bits(), 0x00FF_FFFF);
        assert_eq!(Rgbx8888::from_bits(0xFFFF_FFFF).to_bits(), 0xFFFF_FF00);
        assert_eq!(Xrgb1555::from_bits(0xFFFF).to_bits(), 0x7FFF);
        assert_eq!(Xrgb4444::new(15, 15, 15).to_bits(), 0x0FFF);
        assert_eq!(Xrgb4444::from_u32(0x1_FFFF).to_u32(), 0x0FFF);
    }

    #[test]
    fn ten_bit_layouts() {
        let c = Rgba1010102::new(1023, 0, 512, 3);
        assert_eq!(c.to_bits(), (1023 << 22) | (512 << 2) | 3);
        let c = Argb2101010::new(2, 1, 2, 3);
        assert_eq!(c.to_bits(), (2 << 30) | (1 << 20) | (2 << 10) | 3);
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (2, 1, 2, 3));
        let c = Abgr2101010::from_bits(0xC000_0000 | 1023);
        assert_eq!((c.a(), c.r(), c.b()), (3, 1023, 0));
    }

    #[test]
    fn eight_bit_layouts() {
        assert_eq!(Rgb332::new(7, 0, 0).to_bits(), 0b111_000_00);
        assert_eq!(Rgb233::new(3, 0, 0).to_bits(), 0b11_000_000);
        assert_eq!(Bgr233::new(0, 0, 7).to_bits(), 0b00_000_111);
        assert_eq!(Bgr332::from_bits(0b000_000_11).r(), 3);
    }

    #[test]
    fn unpack_missing_alpha_is_opaque() {
        let hub = Rgb565::LAYOUT.unpack(0);
        assert_eq!(hub, CanonicalRgba::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn pack_ignores_absent_fields() {
        let bits = Rgb565::LAYOUT.pack(CanonicalRgba::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(bits, 0);
    }

    #[test]
    fn bitfield_edges() {
        assert_eq!(BitField::new(0, 32).max(), u32::MAX);
        assert_eq!(BitField::new(0, 32).mask(), u32::MAX);
        assert_eq!(BitField::ABSENT.extract(0xFFFF_FFFF), 0);
        assert_eq!(BitField::ABSENT.insert(0xFFFF_FFFF), 0);
        assert_eq!(BitField::new(30, 2).insert(7), 0xC000_0000);
    }

    #[test]
    fn bitfield_past_bit_31_does_not_overflow() {
        let field = BitField::new(32, 1);
        assert_eq!(field.mask(), 0);
        assert_eq!(field.extract(u32::MAX), 0);
        assert_eq!(field.insert(1), 0);

        let field = BitField::new(31, 4);
        assert_eq!(field.mask(), 0x8000_0000);
        assert_eq!(field.extract(0x8000_0000), 1);
        assert_eq!(field.insert(0xF), 0x8000_0000);

        let layout = PackedLayout {
            r: BitField::new(40, 8),
            ..Rgb565::LAYOUT
        };
        assert_eq!(layout.unpack(u32::MAX).r, 0.0);
        assert_eq!(layout.pack(CanonicalRgba::new(1.0, 0.0, 0.0, 1.0)), 0);
    }

    #[test]
    fn raw_conversion() {
        assert_eq!(u16::from(Rgb565::new(1, 2, 3)), (1 << 11) | (2 << 5) | 3);
        assert_eq!(u8::from(Rgb332::default()), 0);
    }
}
