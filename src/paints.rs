//! Catalogues of named paints, the input of a [`Palette`][crate::Palette].

use lazy_static::lazy_static;
use crate::{error::{Error, Result}, ColorValue};

/// Family of a paint in the built-in catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintFamily {
    Yellow,
    Red,
    Blue,
    Green,
    /// Blacks, whites and earth tones.
    Neutral,
}

lazy_static! {
    /// Artist oil paints with the RGB value of their masstone, in
    /// catalogue order.
    pub static ref PAINTS: Vec<(&'static str, ColorValue, PaintFamily)> = {
        use PaintFamily::*;
        let p = |name: &'static str, r, g, b, family: PaintFamily|
            (name, ColorValue::new(r, g, b), family);
        vec![
            p("Cadmium Yellow Medium", 252, 234, 2, Yellow),
            p("Cadmium Yellow Light", 253, 218, 13, Yellow),
            p("Yellow Ochre", 203, 157, 6, Yellow),
            p("Naples Yellow", 250, 218, 94, Yellow),
            p("Lemon Yellow", 254, 242, 80, Yellow),
            p("Scarlet Red", 255, 36, 0, Red),
            p("Alizarin Crimson", 227, 38, 54, Red),
            p("Cadmium Orange", 242, 140, 40, Red),
            p("Cadmium Red Light", 196, 27, 22, Red),
            p("Crimson Red", 178, 34, 34, Red),
            p("Ultramarine Blue", 4, 55, 242, Blue),
            p("Cerulean Blue", 42, 82, 190, Blue),
            p("Light Blue Permanent", 173, 216, 230, Blue),
            p("Cobalt Blue", 0, 71, 171, Blue),
            p("Phthalo Blue", 0, 15, 137, Blue),
            p("Phthalo Green", 0, 60, 50, Green),
            p("Pale Green", 152, 251, 152, Green),
            p("Chromium Oxide Green", 58, 139, 60, Green),
            p("Mars Black", 22, 22, 23, Neutral),
            p("Titanium White", 255, 255, 255, Neutral),
            p("Burnt Sienna", 233, 116, 81, Neutral),
            p("Burnt Umber", 138, 51, 36, Neutral),
            p("Raw Sienna", 214, 138, 89, Neutral),
            p("Ivory Black", 12, 11, 10, Neutral),
        ]
    };
}

/// An ordered set of uniquely named paints.
///
/// The order of the paints is the order in which they are fed to
/// [`Palette::build`][crate::Palette::build], hence the canonical
/// order of the palette.
///
/// # Example
///
/// ```
/// use pigment_palette::{ColorValue, Paints, Palette};
/// let mut paints = Paints::builtin()
///     .select(["Titanium White", "Ultramarine Blue"])?;
/// paints.add("Sky", ColorValue::new(135, 206, 235))?;
/// let palette = Palette::build(paints.iter(), 4)?;
/// assert_eq!(palette.len(), 3 + 3 * 3);
/// # Ok::<(), pigment_palette::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paints {
    paints: Vec<(String, ColorValue)>,
}

impl Paints {
    /// An empty catalogue.
    pub fn new() -> Self { Self::default() }

    /// A copy of the built-in catalogue [`struct@PAINTS`].
    pub fn builtin() -> Self {
        Paints { paints: PAINTS.iter()
                 .map(|&(name, c, _)| (name.to_string(), c)).collect() }
    }

    /// The paints of the built-in catalogue belonging to `family`.
    pub fn family(family: PaintFamily) -> Self {
        Paints { paints: PAINTS.iter().filter(|p| p.2 == family)
                 .map(|&(name, c, _)| (name.to_string(), c)).collect() }
    }

    /// Add a paint at the end of the catalogue.  Fails if a paint with
    /// the same name already exists.
    pub fn add(&mut self, name: impl Into<String>, color: ColorValue)
               -> Result<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(Error::DuplicateName(name))
        }
        log::debug!("adding paint “{name}” {color:?}");
        self.paints.push((name, color));
        Ok(())
    }

    /// Return the paints named in `names`, in that order.  Fails on
    /// unknown or repeated names.
    pub fn select<I, S>(&self, names: I) -> Result<Paints>
    where I: IntoIterator<Item = S>,
          S: AsRef<str> {
        let mut selected = Paints::new();
        for name in names {
            let name = name.as_ref();
            let color = self.get(name)
                .ok_or_else(|| Error::UnknownPaint(name.to_string()))?;
            selected.add(name, color)?;
        }
        Ok(selected)
    }

    /// The color of the paint `name`, if any.
    pub fn get(&self, name: &str) -> Option<ColorValue> {
        self.paints.iter().find(|(n, _)| n == name).map(|&(_, c)| c)
    }

    /// Number of paints.
    pub fn len(&self) -> usize { self.paints.len() }

    /// Says whether there are no paints.
    pub fn is_empty(&self) -> bool { self.paints.is_empty() }

    /// Iterate on the names and colors of the paints, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ColorValue)> + '_ {
        self.paints.iter().map(|(n, c)| (n.as_str(), *c))
    }

    /// Iterate on the names of the paints, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.paints.iter().map(|(n, _)| n.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogue() {
        let paints = Paints::builtin();
        assert_eq!(paints.len(), 24);
        assert_eq!(paints.names().next(), Some("Cadmium Yellow Medium"));
        assert_eq!(paints.get("Cobalt Blue"), Some(ColorValue::new(0, 71, 171)));
        assert_eq!(paints.get("Prussian Blue"), None);
        let mut names: Vec<_> = paints.names().collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 24);
    }

    #[test]
    fn families() {
        let sizes = [(PaintFamily::Yellow, 5), (PaintFamily::Red, 5),
                     (PaintFamily::Blue, 5), (PaintFamily::Green, 3),
                     (PaintFamily::Neutral, 6)];
        for (family, n) in sizes {
            assert_eq!(Paints::family(family).len(), n, "{family:?}");
        }
        let greens: Vec<_> = Paints::family(PaintFamily::Green).names()
            .map(str::to_string).collect();
        assert_eq!(greens, ["Phthalo Green", "Pale Green",
                            "Chromium Oxide Green"]);
    }

    #[test]
    fn custom_paints() {
        let mut paints = Paints::new();
        assert!(paints.is_empty());
        paints.add("Mud", ColorValue::new(90, 70, 50)).unwrap();
        assert_eq!(paints.add("Mud", ColorValue::new(0, 0, 0)),
                   Err(Error::DuplicateName("Mud".to_string())));
        assert_eq!(paints.len(), 1);
        assert_eq!(paints.get("Mud"), Some(ColorValue::new(90, 70, 50)));
        // The built-in table is unaffected.
        assert_eq!(Paints::builtin().get("Mud"), None);
    }

    #[test]
    fn selection() {
        let paints = Paints::builtin();
        let sel = paints.select(["Titanium White", "Mars Black"]).unwrap();
        let sel: Vec<_> = sel.iter().collect();
        assert_eq!(sel, [("Titanium White", ColorValue::new(255, 255, 255)),
                         ("Mars Black", ColorValue::new(22, 22, 23))]);
        assert_eq!(paints.select(["Mauve"]),
                   Err(Error::UnknownPaint("Mauve".to_string())));
        assert!(matches!(paints.select(["Mars Black", "Mars Black"]),
                         Err(Error::DuplicateName(_))));
    }
}
