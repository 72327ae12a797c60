//! Capability traits for [`color_cast`](crate::color_cast).
//!
//! These traits partition types into what a cast may read from and what it
//! may produce. Every conversion passes through one hub, [`CanonicalRgba`]:
//! a source only knows how to reach the hub, a destination only knows how to
//! leave it, so `n` formats need `2n` conversions instead of `n²`.
//!
//! A pair that lacks an implementation is rejected by the compiler. There is
//! no runtime path for unsupported conversions.
//!
//! Downstream crates add their own types to the cast graph by implementing
//! [`ColorCastFrom`] and [`ColorCastTo`].

use crate::color::Rgba;
use crate::norm::ChannelType;

/// The hub every conversion passes through.
///
/// Straight (non-premultiplied) RGBA with `f64` channels in `[0, 1]`. `f64`
/// holds every `u32` level exactly, so no integer format loses precision on
/// the way through.
pub type CanonicalRgba = Rgba<f64>;

/// A plain channel composite: [`R`](crate::R), [`Rgb`](crate::Rgb),
/// [`Bgra`](crate::Bgra) and friends.
///
/// Builtin colors expose their channels as public fields of a single
/// datatype, unlike [packed formats](crate::PackedFormat), which are opaque
/// bit containers.
pub trait BuiltinColor: Copy + PartialEq {
    /// Datatype of every channel.
    type Channel: ChannelType;
    /// Number of channels.
    const CHANNELS: usize;
    /// Whether one of the channels is alpha.
    const HAS_ALPHA: bool;
}

/// A type [`color_cast`](crate::color_cast) can convert from.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be the source of a color_cast",
    label = "not a color type",
    note = "implement `ColorCastFrom` to make a custom type castable"
)]
pub trait ColorCastFrom: Copy {
    /// Unpack into the canonical hub.
    ///
    /// Channels the type does not carry are zero, except alpha, which is
    /// fully opaque (`1.0`).
    fn into_canonical(self) -> CanonicalRgba;
}

/// A type [`color_cast`](crate::color_cast) can convert to.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be the destination of a color_cast",
    label = "not a color type",
    note = "implement `ColorCastTo` to make a custom type castable"
)]
pub trait ColorCastTo: Sized {
    /// Pack from the canonical hub, dropping channels the type lacks.
    fn from_canonical(hub: CanonicalRgba) -> Self;
}

/// Method syntax for [`color_cast`](crate::color_cast).
///
/// ```
/// use zencolor::{CastInto, Rgb565, Rgb8};
///
/// let packed: Rgb565 = Rgb8::new(255, 255, 255).cast();
/// assert_eq!(packed.to_bits(), 0xFFFF);
/// ```
pub trait CastInto: ColorCastFrom {
    /// Convert `self` into `To`.
    #[inline]
    fn cast<To: ColorCastTo>(self) -> To {
        To::from_canonical(self.into_canonical())
    }
}

impl<T: ColorCastFrom> CastInto for T {}

