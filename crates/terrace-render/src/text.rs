//! Plain-text height maps and path overlays.

use std::collections::HashMap;

use terrace_core::Grid;
use terrace_paths::Path;

/// Number of distinct letters available for height levels.
pub const LETTERS: usize = 26;

/// Glyph drawn on path cells by [`visualise_path`].
pub const PATH_GLYPH: char = '#';

/// Glyph drawn for unwalkable cells.
pub const WALL_GLYPH: char = ' ';

/// A rendered height map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visualisation {
    /// One string per grid row.
    pub rows: Vec<String>,
    /// Set when the grid holds more than [`LETTERS`] height levels; every
    /// level past the last letter is drawn as `z`.
    pub overflow: bool,
}

/// Letter for each distinct height level: `a` for the lowest, ascending.
pub fn height_letters<T>(grid: &Grid<T>) -> HashMap<i32, char> {
    let mut levels = grid.height_levels();
    levels.sort_unstable();
    levels
        .into_iter()
        .enumerate()
        .map(|(i, h)| (h, (b'a' + i.min(LETTERS - 1) as u8) as char))
        .collect()
}

/// Render each walkable cell as its height letter, unwalkable cells blank.
///
/// ```
/// use terrace_core::Grid;
/// use terrace_render::visualise;
///
/// let mut g = Grid::from_strings(&["..^", ".#^"]).unwrap();
/// g.set_height_level(&'^', 2);
/// g.set_walkable(&'#', false);
/// assert_eq!(visualise(&g).rows, vec!["aab", "a b"]);
/// ```
pub fn visualise<T>(grid: &Grid<T>) -> Visualisation {
    let letters = height_letters(grid);
    let overflow = letters.len() > LETTERS;
    if overflow {
        log::warn!(
            "{} height levels exceed the {} available letters",
            letters.len(),
            LETTERS
        );
    }
    let rows = grid
        .rows()
        .map(|row| {
            row.iter()
                .map(|c| {
                    if c.walkable {
                        letters[&c.height_level]
                    } else {
                        WALL_GLYPH
                    }
                })
                .collect()
        })
        .collect();
    Visualisation { rows, overflow }
}

/// [`visualise`] with every path cell replaced by [`PATH_GLYPH`].
pub fn visualise_path<T>(grid: &Grid<T>, path: &Path<'_, T>) -> Vec<String> {
    let mut cells: Vec<Vec<char>> = visualise(grid)
        .rows
        .into_iter()
        .map(|r| r.chars().collect())
        .collect();
    for p in path.points() {
        if let Some(ch) = cells
            .get_mut(p.y as usize)
            .and_then(|row| row.get_mut(p.x as usize))
        {
            *ch = PATH_GLYPH;
        }
    }
    cells.into_iter().map(String::from_iter).collect()
}
