//! Colored terminal rendering through crossterm.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use terrace_core::{Grid, Point};
use terrace_paths::Path;

use crate::text::{PATH_GLYPH, height_letters};

/// Colours used by [`write_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Shade of the lowest height level.
    pub low: (u8, u8, u8),
    /// Shade of the highest height level.
    pub high: (u8, u8, u8),
    pub wall: Color,
    pub path_fg: Color,
    pub path_bg: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            low: (40, 120, 60),
            high: (230, 220, 200),
            wall: Color::Rgb {
                r: 35,
                g: 35,
                b: 50,
            },
            path_fg: Color::Rgb {
                r: 255,
                g: 220,
                b: 80,
            },
            path_bg: Color::Rgb {
                r: 50,
                g: 90,
                b: 160,
            },
        }
    }
}

impl Palette {
    /// Linear blend between `low` and `high`; `t` is clamped to `[0, 1]`.
    pub fn shade(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Color::Rgb {
            r: mix(self.low.0, self.high.0),
            g: mix(self.low.1, self.high.1),
            b: mix(self.low.2, self.high.2),
        }
    }
}

/// Write `grid` to `out`, one line per row, with heights shaded and the
/// cells of `path` (if any) highlighted.
pub fn write_grid<W: Write, T>(
    out: &mut W,
    grid: &Grid<T>,
    path: Option<&Path<'_, T>>,
    palette: &Palette,
) -> io::Result<()> {
    let letters = height_letters(grid);
    let (lo, hi) = match (grid.min_height(), grid.max_height()) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ => return Ok(()),
    };
    let span = (f64::from(hi) - f64::from(lo)).max(1.0);
    let on_path: HashSet<Point> = path.map(|p| p.points().collect()).unwrap_or_default();

    for row in grid.rows() {
        for c in row {
            if on_path.contains(&c.pos()) {
                queue!(
                    out,
                    SetForegroundColor(palette.path_fg),
                    SetBackgroundColor(palette.path_bg),
                    Print(PATH_GLYPH)
                )?;
            } else if !c.walkable {
                queue!(out, SetBackgroundColor(palette.wall), Print(' '))?;
            } else {
                let t = (f64::from(c.height_level) - f64::from(lo)) / span;
                queue!(
                    out,
                    SetForegroundColor(palette.shade(t)),
                    Print(letters[&c.height_level])
                )?;
            }
            queue!(out, ResetColor)?;
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}
