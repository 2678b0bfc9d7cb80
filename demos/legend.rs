//! Write `legend.html`, a preview of the dashboard symbology.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use incident_symbology::{ColorMap, LinearRamp, SeriesEntry, color_series,
                         hex::{to_css_rgba, to_hex},
                         presets::{INCIDENT_TYPES, LMI_QUADRANTS, SEATBELT_RAMP}};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 to_hex(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table><br/>")?;
    Ok(())
}

fn ramp(fh: &mut impl Write, start: &str, end: &str, n: usize,
        width: u32) -> Result<(), Err> {
    let r = LinearRamp::new(start, end)?;
    table_of_colors(fh, &r.colors::<RGB8>(n), width,
                    &format!("{start} → {end} ({n} colors)"))
}

fn legend(fh: &mut impl Write, map: &ColorMap, extra: &[&str])
          -> Result<(), Err> {
    writeln!(fh, "<table>")?;
    for code in map.codes().into_iter().chain(extra.iter().copied()) {
        let c = map.resolve(code);
        let known = if map.contains(code) { "" } else { " (fallback)" };
        writeln!(fh, "  <tr><td style=\"width: 40px; height: 20px; \
                      border: 1px solid black; background-color: {}\"></td>\
                      <td>{code}{known}</td></tr>",
                 to_css_rgba(c))?;
    }
    writeln!(fh, "</table>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("legend.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Incident symbology: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>LMI quadrants</h3>")?;
    legend(&mut fh, &LMI_QUADRANTS, &["ZZ"])?;
    writeln!(fh, "<h3>Incident types</h3>")?;
    legend(&mut fh, &INCIDENT_TYPES, &["Property damage"])?;

    writeln!(fh, "<h3>Ramps</h3>")?;
    for n in [1, 2, 3, 7, 20] {
        ramp(&mut fh, "#7a0019", "#ffcc33", n, 43)?;
    }
    ramp(&mut fh, "#000080", "#9090ff", 150, 1)?;

    writeln!(fh, "<h3>Seatbelt use (sorted)</h3>")?;
    let pie = [SeriesEntry::new("Not used", 58.),
               SeriesEntry::new("Used", 1204.),
               SeriesEntry::new("Unknown", 311.),
               SeriesEntry::new("Not applicable", 97.)];
    for e in color_series(&pie, &SEATBELT_RAMP) {
        table_of_colors(&mut fh, &[e.color], 43,
                        &format!("{} ({})", e.entry.name, e.entry.value))?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
