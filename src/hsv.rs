//! Hue/saturation/value color.
//!
//! HSV is not a channel permutation of RGB, so it joins the cast graph
//! through a real transform in each direction. Both directions work on
//! float RGB in `[0, 1]`; integer formats reach HSV through the hub's
//! normalized rescale.

use crate::traits::{CanonicalRgba, ColorCastFrom, ColorCastTo};

/// A color as hue, saturation and value.
///
/// `h` is in degrees. Any finite hue is accepted and wraps modulo 360 when
/// converted; non-finite hues read as 0. `s` and `v` are in `[0, 1]`.
///
/// HSV carries no alpha: casting to a format with alpha yields fully opaque,
/// and casting from one drops it.
///
/// ```
/// use zencolor::{color_cast, Hsv, Rgba8};
///
/// let red: Hsv = color_cast(Rgba8::new(255, 0, 0, 255));
/// assert_eq!(red, Hsv::new(0.0, 1.0, 1.0));
///
/// let cyan: Rgba8 = color_cast(Hsv::new(180.0, 1.0, 1.0));
/// assert_eq!(cyan, Rgba8::new(0, 255, 255, 255));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    /// Hue in degrees.
    pub h: f32,
    /// Saturation.
    pub s: f32,
    /// Value (brightness).
    pub v: f32,
}

impl Hsv {
    /// Create an HSV color.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// The same color with hue wrapped into `[0, 360)`.
    pub fn normalized(self) -> Self {
        Self {
            h: narrow_hue(wrap_degrees(f64::from(self.h))),
            ..self
        }
    }
}

impl ColorCastFrom for Hsv {
    #[inline]
    fn into_canonical(self) -> CanonicalRgba {
        let (r, g, b) = hsv_to_rgb(f64::from(self.h), f64::from(self.s), f64::from(self.v));
        CanonicalRgba::new(r, g, b, 1.0)
    }
}

impl ColorCastTo for Hsv {
    #[inline]
    fn from_canonical(hub: CanonicalRgba) -> Self {
        let (h, s, v) = rgb_to_hsv(hub.r, hub.g, hub.b);
        Self::new(narrow_hue(h), s as f32, v as f32)
    }
}

/// `h` reduced into `[0, 360)`.
fn wrap_degrees(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h - 360.0 * libm::floor(h / 360.0);
    // -1e-20 wraps to 360 - 1e-20, which rounds to 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Hue in `[0, 360)` as `f32`. Values within half an `f32` ulp of 360 round
/// up to it when narrowed, so they wrap to 0 here.
#[inline]
fn narrow_hue(h: f64) -> f32 {
    let h = h as f32;
    if h >= 360.0 { 0.0 } else { h }
}

/// Float RGB in `[0, 1]` to (hue degrees, saturation, value).
fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = v - min;

    let h = if delta == 0.0 {
        0.0
    } else if v == r {
        let sector = (g - b) / delta;
        let sector = sector - 6.0 * libm::floor(sector / 6.0);
        60.0 * sector
    } else if v == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let s = if v == 0.0 { 0.0 } else { delta / v };
    (h, s, v)
}

/// Hue degrees, saturation, value to float RGB.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = wrap_degrees(h) / 60.0;
    let sector = libm::floor(h);
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
