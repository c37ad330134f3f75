//! Paint mixing palettes.
//!
//! Given a set of paints, a [`Palette`] holds every color obtainable
//! by mixing two of them in proportions `k / refinement`, and finds the
//! mix perceptually closest to any target color, together with its
//! recipe.
//!
//! - Color spaces and distance: [`rgb_to_lab`], [`lab_to_rgb`],
//!   [`perceptual_distance`] (CIEDE2000).
//! - Mixing: [`mix`] and the [`Mixer`] trait, with the subtractive
//!   [`Pigment`] model and plain [`Linear`] interpolation.
//! - Mixing tree: [`ColorNode`], [`NodeRef`], [`Recipe`].
//! - Paint catalogues: [`Paints`] and the built-in [`struct@PAINTS`].
//!
//! # Example
//!
//! ```
//! use pigment_palette::{parse_hex, Paints, PaintFamily, Palette};
//! let paints = Paints::family(PaintFamily::Blue);
//! let palette = Palette::build(paints.iter(), 8)?;
//! let target = parse_hex("#3a6ea5")?;
//! let (color, distance) = palette.closest(target)?;
//! assert!(distance >= 0.);
//! println!("{}: {}", color.describe(), color.recipe());
//! # Ok::<(), pigment_palette::Error>(())
//! ```

pub mod error;
pub mod lab;
pub mod mixer;
pub mod node;
pub mod paints;
pub mod palette;

pub use error::{Error, Result};
pub use lab::{delta_e_2000, lab_to_rgb, perceptual_distance, rgb_to_lab, Lab};
pub use mixer::{latent_to_rgb, mix, rgb_to_latent, Latent, Linear, Mixer,
                Pigment, LATENT_SIZE};
pub use node::{ColorNode, NodeId, NodeRef, Origin, Recipe};
pub use paints::{PaintFamily, Paints, PAINTS};
pub use palette::{Palette, DEFAULT_REFINEMENT};

/// An 8-bit sRGB color.
pub type ColorValue = rgb::RGB8;

/// Format `c` as `#rrggbb`.
pub fn to_hex(c: ColorValue) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Parse a color written `#rrggbb` (the leading `#` is optional).
///
/// # Example
///
/// ```
/// use pigment_palette::{parse_hex, ColorValue};
/// assert_eq!(parse_hex("#ff8000")?, ColorValue::new(255, 128, 0));
/// assert!(parse_hex("#ff80").is_err());
/// # Ok::<(), pigment_palette::Error>(())
/// ```
pub fn parse_hex(s: &str) -> Result<ColorValue> {
    let err = || Error::InvalidHex(s.to_string());
    let h = s.trim();
    let h = h.strip_prefix('#').unwrap_or(h);
    if h.len() != 6 || !h.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(err())
    }
    let ch = |i: usize| u8::from_str_radix(&h[i .. i + 2], 16).map_err(|_| err());
    Ok(ColorValue::new(ch(0)?, ch(2)?, ch(4)?))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        let c = ColorValue::new(42, 82, 190);
        assert_eq!(to_hex(c), "#2a52be");
        assert_eq!(parse_hex(&to_hex(c)), Ok(c));
        assert_eq!(parse_hex(" 2A52BE "), Ok(c));
        for s in ["", "#", "#12345", "#1234567", "#12345g", "#ééé"] {
            assert_eq!(parse_hex(s), Err(Error::InvalidHex(s.to_string())));
        }
    }

    #[test]
    fn palette_of_builtin_paints() {
        let palette = Palette::build(Paints::builtin().iter(), 10).unwrap();
        assert_eq!(palette.len(), 24 + 24 * 23 / 2 * 9);
        let white = palette.search(ColorValue::new(255, 255, 255)).unwrap();
        assert_eq!(white.name(), Some("Titanium White"));
        let (c, d) = palette.closest(ColorValue::new(120, 60, 140)).unwrap();
        assert!(d < 20., "{c} at {d}");
    }
}
