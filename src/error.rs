//! Error types for pigment-palette

use thiserror::Error;

/// Errors reported by the palette engine.
///
/// All variants but [`Error::EmptyPalette`] are validation errors:
/// the caller handed over malformed input and nothing was computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Mixing proportion outside \[0, 1\] (or NaN).
    #[error("invalid mixing proportion {0}: expected a value in [0, 1]")]
    InvalidProportion(f64),

    /// Refinement level below 2.
    #[error("invalid refinement {0}: at least 2 steps are required")]
    InvalidRefinement(usize),

    /// A palette needs at least one source paint.
    #[error("no source paints given")]
    NoSources,

    /// The same paint name was given twice.
    #[error("duplicate paint name “{0}”")]
    DuplicateName(String),

    /// A paint name not present in the catalogue.
    #[error("unknown paint “{0}”")]
    UnknownPaint(String),

    /// A string that is not a `#rrggbb` color.
    #[error("not a hexadecimal color: “{0}”")]
    InvalidHex(String),

    /// `search` on a palette without nodes.
    #[error("empty palette: no colors to search")]
    EmptyPalette,
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, Error>;
