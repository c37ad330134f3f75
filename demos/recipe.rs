//! Find how to mix colors given on the command line (as `#rrggbb`)
//! with the built-in paints, and write the recipes to `recipe.html`.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use pigment_palette::{parse_hex, to_hex, ColorValue, NodeRef, Paints,
                      Palette, DEFAULT_REFINEMENT};

type Err = Box<dyn Error>;

fn swatch(fh: &mut impl Write, c: ColorValue, width: u32)
          -> Result<(), Err> {
    writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                  background-color: {}\"></td>", to_hex(c))?;
    Ok(())
}

fn row(fh: &mut impl Write, target: ColorValue, m: NodeRef<'_>,
       distance: f64) -> Result<(), Err> {
    writeln!(fh, "<tr>")?;
    swatch(fh, target, 60)?;
    swatch(fh, m.value(), 60)?;
    for (p, _) in m.parents() {
        swatch(fh, p.value(), 20)?;
    }
    writeln!(fh, "  <td style=\"padding-left: 7px\">{} → {}: {} \
                  (ΔE₀₀ = {distance:.2})</td>\n</tr>",
             to_hex(target), to_hex(m.value()), m.describe())?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let targets = env::args().skip(1).map(|s| parse_hex(&s))
        .collect::<Result<Vec<_>, _>>()?;
    let targets = if targets.is_empty() {
        vec![ColorValue::new(46, 139, 87), ColorValue::new(128, 0, 128),
             ColorValue::new(210, 180, 140), ColorValue::new(112, 128, 144)]
    } else { targets };

    let palette = Palette::build(Paints::builtin().iter(),
                                 DEFAULT_REFINEMENT)?;
    println!("{} colors from {} paints", palette.len(),
             palette.sources().len());

    let mut fh = BufWriter::new(File::create("recipe.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>pigment-palette: recipes</title>\n\
                  </head>\n\
                  <body>\n\
                  <table style=\"border: 0px;  border-spacing: 2px\">")?;
    for target in targets {
        let (m, distance) = palette.closest(target)?;
        println!("{}: {m} (ΔE₀₀ = {distance:.2})", to_hex(target));
        row(&mut fh, target, m, distance)?;
    }
    writeln!(fh, "</table>\n\
                  </body>\n\
                  </html>")?;
    Ok(())
}
