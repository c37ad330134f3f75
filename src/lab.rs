//! Conversions between sRGB and CIE L\*a\*b\*, and the CIEDE2000
//! color difference.
//!
//! All conversions use the D65 reference white with the 2° standard
//! observer, the white point of sRGB itself, so no chromatic
//! adaptation takes place.

use std::f64::consts::PI;
use crate::ColorValue;

/// A color in the CIE L\*a\*b\* color space (D65, 2° observer).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    /// The lightness in the range 0. to 100.
    pub l: f64,
    /// Green (negative) to red (positive) axis.
    pub a: f64,
    /// Blue (negative) to yellow (positive) axis.
    pub b: f64,
}

/// The D65 reference white in CIE XYZ, normalized to `Y = 1`.
pub const WHITE_D65: [f64; 3] = [0.95047, 1., 1.08883];

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;
const TWO_PI: f64 = 2. * PI;

/// Gamma-encoded sRGB channel in \[0, 1\] to linear light.
#[inline]
pub(crate) fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 { c / 12.92 }
    else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// Linear light to gamma-encoded sRGB channel (not clamped).
#[inline]
pub(crate) fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 { 12.92 * c }
    else { 1.055 * c.powf(1. / 2.4) - 0.055 }
}

/// Round a channel in \[0, 255\] to the nearest 8-bit value,
/// clamping values out of range.  NaN maps to 0.
#[inline]
pub(crate) fn to_channel(c: f64) -> u8 {
    c.round().clamp(0., 255.) as u8
}

/// Convert an 8-bit sRGB color to CIE L\*a\*b\*.
///
/// # Example
///
/// ```
/// use pigment_palette::{rgb_to_lab, ColorValue};
/// let white = rgb_to_lab(ColorValue::new(255, 255, 255));
/// assert!((white.l - 100.).abs() < 1e-3);
/// ```
pub fn rgb_to_lab(c: ColorValue) -> Lab {
    const C0: f64 = 1. / 3.;
    const C1: f64 = 841. / 108.;
    const C2: f64 = 4. / 29.;
    let r = srgb_to_linear(c.r as f64 / 255.);
    let g = srgb_to_linear(c.g as f64 / 255.);
    let b = srgb_to_linear(c.b as f64 / 255.);
    let xr = (0.4124564 * r + 0.3575761 * g + 0.1804375 * b) / WHITE_D65[0];
    let yr = (0.2126729 * r + 0.7151522 * g + 0.0721750 * b) / WHITE_D65[1];
    let zr = (0.0193339 * r + 0.1191920 * g + 0.9503041 * b) / WHITE_D65[2];
    let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
    let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
    let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
    Lab { l: 116. * fy - 16.,  a: 500. * (fx - fy),  b: 200. * (fy - fz) }
}

/// Convert a CIE L\*a\*b\* color to 8-bit sRGB.  Colors outside the
/// sRGB gamut are clamped channel-wise.
pub fn lab_to_rgb(lab: Lab) -> ColorValue {
    const C0: f64 = 108. / 841.;
    const C1: f64 = 4. / 29.;
    let fy = (lab.l + 16.) / 116.;
    let fx = lab.a / 500. + fy;
    let fz = fy - lab.b / 200.;
    let x = WHITE_D65[0] * if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
    let y = WHITE_D65[1] * if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
    let z = WHITE_D65[2] * if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
    let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;
    // Out of gamut linear values would make `powf` return NaN.
    let encode = |c: f64| to_channel(255. * linear_to_srgb(c.clamp(0., 1.)));
    ColorValue::new(encode(r), encode(g), encode(b))
}

/// Hue angle in degrees, in \[0, 360).
fn hue_deg(a: f64, b: f64) -> f64 {
    if a == 0. && b == 0. { return 0. }
    let h = b.atan2(a);
    (if h < 0. { h + TWO_PI } else { h }).to_degrees()
}

/// The CIEDE2000 color difference between two L\*a\*b\* colors, with
/// the parametric factors `kL = kC = kH = 1`.
///
/// See G. Sharma, W. Wu, E. N. Dalal, “The CIEDE2000 color-difference
/// formula: implementation notes, supplementary test data, and
/// mathematical observations”, Color Res. Appl. 30 (2005).
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    const POW25_7: f64 = 6103515625.; // 25⁷
    let c1 = lab1.a.hypot(lab1.b);
    let c2 = lab2.a.hypot(lab2.b);
    let c_mean7 = ((c1 + c2) / 2.).powi(7);
    let g = 0.5 * (1. - (c_mean7 / (c_mean7 + POW25_7)).sqrt());
    let a1 = (1. + g) * lab1.a;
    let a2 = (1. + g) * lab2.a;
    let c1 = a1.hypot(lab1.b);
    let c2 = a2.hypot(lab2.b);
    let h1 = hue_deg(a1, lab1.b);
    let h2 = hue_deg(a2, lab2.b);

    let dl = lab2.l - lab1.l;
    let dc = c2 - c1;
    let cc = c1 * c2;
    let dh = {
        if cc == 0. { 0. }
        else if h2 - h1 > 180. { h2 - h1 - 360. }
        else if h2 - h1 < -180. { h2 - h1 + 360. }
        else { h2 - h1 } };
    let dh = 2. * cc.sqrt() * (dh.to_radians() / 2.).sin();

    let l_mean = (lab1.l + lab2.l) / 2.;
    let c_mean = (c1 + c2) / 2.;
    let h_mean = {
        if cc == 0. { h1 + h2 }
        else if (h1 - h2).abs() <= 180. { (h1 + h2) / 2. }
        else if h1 + h2 < 360. { (h1 + h2 + 360.) / 2. }
        else { (h1 + h2 - 360.) / 2. } };

    let t = 1. - 0.17 * (h_mean - 30.).to_radians().cos()
        + 0.24 * (2. * h_mean).to_radians().cos()
        + 0.32 * (3. * h_mean + 6.).to_radians().cos()
        - 0.20 * (4. * h_mean - 63.).to_radians().cos();
    let l50 = (l_mean - 50.) * (l_mean - 50.);
    let sl = 1. + 0.015 * l50 / (20. + l50).sqrt();
    let sc = 1. + 0.045 * c_mean;
    let sh = 1. + 0.015 * c_mean * t;
    let d_theta = 30. * (-((h_mean - 275.) / 25.).powi(2)).exp();
    let c_mean7 = c_mean.powi(7);
    let rc = 2. * (c_mean7 / (c_mean7 + POW25_7)).sqrt();
    let rt = -(2. * d_theta).to_radians().sin() * rc;

    let (l, c, h) = (dl / sl, dc / sc, dh / sh);
    (l * l + c * c + h * h + rt * c * h).max(0.).sqrt()
}

/// Perceptual distance between two sRGB colors: the CIEDE2000
/// difference of their L\*a\*b\* coordinates.
///
/// The result is symmetric in its arguments and `0.` for equal colors.
///
/// # Example
///
/// ```
/// use pigment_palette::{perceptual_distance, ColorValue};
/// let red = ColorValue::new(255, 0, 0);
/// let orange = ColorValue::new(255, 128, 0);
/// assert_eq!(perceptual_distance(red, red), 0.);
/// assert!(perceptual_distance(red, orange) > 10.);
/// ```
pub fn perceptual_distance(c1: ColorValue, c2: ColorValue) -> f64 {
    // Evaluate in a fixed argument order so that floating-point
    // rounding cannot break symmetry.
    let (c1, c2) = if (c1.r, c1.g, c1.b) <= (c2.r, c2.g, c2.b) { (c1, c2) }
                   else { (c2, c1) };
    delta_e_2000(rgb_to_lab(c1), rgb_to_lab(c2))
}
