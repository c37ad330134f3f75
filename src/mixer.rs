//! Mixing two colors the way paints mix.
//!
//! Averaging RGB values describes light, not pigments: blending blue
//! and yellow gives a bright grey where paint gets darker.  The
//! [`Pigment`] model maps colors to a latent vector where mixing is
//! linear, interpolates there, and maps back to RGB.
//!
//! The latent vector holds, per channel, the Kubelka–Munk ratio of
//! absorption to scattering `K/S = (1 − R)² / (2R)` of the linear-light
//! reflectance `R`, followed by the residual between the channel and
//! the decoding of that ratio.  The residual makes every latent vector
//! decode to its source color exactly, so that mixing with proportion
//! `0.` or `1.` returns one of the inputs unchanged.

use crate::{error::{Error, Result},
            lab::{linear_to_srgb, srgb_to_linear, to_channel},
            ColorValue};

/// Number of components of a [`Latent`] vector.
pub const LATENT_SIZE: usize = 6;

/// A color in the latent mixing space of the [`Pigment`] model.
pub type Latent = [f64; LATENT_SIZE];

/// Lowest reflectance a paint can have.  Keeps `K/S` finite for
/// black channels.
const R_MIN: f64 = 0.1;

/// A way of mixing two colors.
pub trait Mixer {
    /// Mix `c0` and `c1` with `t` ∈ \[0., 1.\] parts of `c0` and
    /// `1 - t` parts of `c1`, without checking the range of `t`.
    /// Implementations must be deterministic and return `c1` for
    /// `t == 0.` and `c0` for `t == 1.`.
    fn mix_unchecked(&self, c0: ColorValue, c1: ColorValue, t: f64)
                     -> ColorValue;

    /// Mix `c0` and `c1` with `t` parts of `c0` and `1 - t` parts of
    /// `c1`.  Returns an error if `t` does not belong to \[0., 1.\].
    fn mix(&self, c0: ColorValue, c1: ColorValue, t: f64)
           -> Result<ColorValue> {
        check_proportion(t)?;
        Ok(self.mix_unchecked(c0, c1, t))
    }
}

/// Check that `t` is a valid mixing proportion.
pub(crate) fn check_proportion(t: f64) -> Result<()> {
    if (0. ..= 1.).contains(&t) { Ok(()) }
    else { Err(Error::InvalidProportion(t)) }
}

/// Subtractive mixing in the Kubelka–Munk latent space (the default).
#[derive(Clone, Copy, Debug, Default)]
pub struct Pigment;

/// Component-wise interpolation of gamma-encoded RGB values.
#[derive(Clone, Copy, Debug, Default)]
pub struct Linear;

#[inline]
fn k_over_s(r: f64) -> f64 { (1. - r) * (1. - r) / (2. * r) }

#[inline]
fn reflectance(ks: f64) -> f64 { 1. + ks - (ks * ks + 2. * ks).sqrt() }

/// Channel value in \[0, 255\] (not rounded) of a `K/S` ratio.
#[inline]
fn decode(ks: f64) -> f64 { 255. * linear_to_srgb(reflectance(ks.max(0.))) }

/// Map a color to the latent mixing space.
pub fn rgb_to_latent(c: ColorValue) -> Latent {
    let mut z = [0.; LATENT_SIZE];
    for (i, ch) in [c.r, c.g, c.b].into_iter().enumerate() {
        let r = srgb_to_linear(ch as f64 / 255.).max(R_MIN);
        z[i] = k_over_s(r);
        z[i + 3] = ch as f64 - decode(z[i]);
    }
    z
}

/// Map a latent vector back to RGB.  Channels are rounded and clamped
/// to \[0, 255\].
pub fn latent_to_rgb(z: &Latent) -> ColorValue {
    let ch = |i: usize| to_channel(decode(z[i]) + z[i + 3]);
    ColorValue::new(ch(0), ch(1), ch(2))
}

/// Interpolate two latent vectors: `t * z0 + (1 - t) * z1`.
pub fn lerp(z0: &Latent, z1: &Latent, t: f64) -> Latent {
    let mut z = [0.; LATENT_SIZE];
    for (zi, (a, b)) in z.iter_mut().zip(z0.iter().zip(z1)) {
        *zi = t * a + (1. - t) * b;
    }
    z
}

impl Mixer for Pigment {
    fn mix_unchecked(&self, c0: ColorValue, c1: ColorValue, t: f64)
                     -> ColorValue {
        latent_to_rgb(&lerp(&rgb_to_latent(c0), &rgb_to_latent(c1), t))
    }
}

impl Mixer for Linear {
    fn mix_unchecked(&self, c0: ColorValue, c1: ColorValue, t: f64)
                     -> ColorValue {
        let ch = |a: u8, b: u8| to_channel(t * a as f64 + (1. - t) * b as f64);
        ColorValue::new(ch(c0.r, c1.r), ch(c0.g, c1.g), ch(c0.b, c1.b))
    }
}

/// Mix `c0` and `c1` like paints, with `t` parts of `c0` and `1 - t`
/// parts of `c1`.
///
/// # Example
///
/// ```
/// use pigment_palette::{mix, ColorValue};
/// let blue = ColorValue::new(0, 33, 133);
/// let yellow = ColorValue::new(252, 211, 0);
/// assert_eq!(mix(blue, yellow, 1.)?, blue);
/// assert_eq!(mix(blue, yellow, 0.)?, yellow);
/// assert!(mix(blue, yellow, 1.5).is_err());
/// # Ok::<(), pigment_palette::Error>(())
/// ```
pub fn mix(c0: ColorValue, c1: ColorValue, t: f64) -> Result<ColorValue> {
    Pigment.mix(c0, c1, t)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> impl Iterator<Item = ColorValue> {
        const STEPS: [u8; 5] = [0, 2, 100, 201, 255];
        STEPS.iter().flat_map(|&r| STEPS.iter().flat_map(move |&g| {
            STEPS.iter().map(move |&b| ColorValue::new(r, g, b)) }))
    }

    fn brightness(c: ColorValue) -> u32 { c.r as u32 + c.g as u32 + c.b as u32 }

    #[test]
    fn latent_decodes_to_source() {
        for c in grid() {
            assert_eq!(latent_to_rgb(&rgb_to_latent(c)), c);
        }
    }

    #[test]
    fn mixing_boundaries() {
        let colors: Vec<_> = grid().collect();
        for &a in colors.iter().step_by(3) {
            for &b in &colors {
                assert_eq!(Pigment.mix_unchecked(a, b, 0.), b);
                assert_eq!(Pigment.mix_unchecked(a, b, 1.), a);
                assert_eq!(Linear.mix_unchecked(a, b, 0.), b);
                assert_eq!(Linear.mix_unchecked(a, b, 1.), a);
            }
        }
    }

    #[test]
    fn mixing_is_deterministic() {
        let a = ColorValue::new(227, 38, 54);
        let b = ColorValue::new(42, 82, 190);
        for k in 0 ..= 10 {
            let t = k as f64 / 10.;
            let c = mix(a, b, t).unwrap();
            for _ in 0 .. 3 { assert_eq!(mix(a, b, t).unwrap(), c) }
        }
    }

    #[test]
    fn same_color_mixes_to_itself() {
        for c in grid() {
            assert_eq!(mix(c, c, 0.3).unwrap(), c);
        }
    }

    #[test]
    fn invalid_proportions() {
        let a = ColorValue::new(1, 2, 3);
        for t in [-0.1, 1.000001, f64::NAN, f64::INFINITY] {
            assert!(matches!(mix(a, a, t), Err(Error::InvalidProportion(_))),
                    "t = {t}");
            assert!(Linear.mix(a, a, t).is_err());
        }
    }

    #[test]
    fn pigments_darken() {
        let blue = ColorValue::new(0, 0, 255);
        let yellow = ColorValue::new(255, 255, 0);
        let paint = mix(blue, yellow, 0.5).unwrap();
        let light = Linear.mix(blue, yellow, 0.5).unwrap();
        assert_eq!(light, ColorValue::new(128, 128, 128));
        assert!(4 * brightness(paint) < 3 * brightness(light),
                "{paint:?} vs {light:?}");
    }

    #[test]
    fn mixing_with_white_lightens() {
        let red = ColorValue::new(196, 27, 22);
        let white = ColorValue::new(255, 255, 255);
        let mut prev = red;
        for k in (0 .. 10).rev() {
            let c = mix(red, white, k as f64 / 10.).unwrap();
            assert!(brightness(c) >= brightness(prev), "{c:?} < {prev:?}");
            prev = c;
        }
        assert_eq!(prev, white);
    }
}
