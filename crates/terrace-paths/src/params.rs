/// Extra cost added to every diagonal step (≈ √2 − 1), so that an
/// orthogonal route of equal grid distance is preferred.
pub const DIAGONAL_PENALTY: f64 = 0.414;

/// When a cell counts as visited during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Discipline {
    /// Mark a cell the moment it is first pushed onto the frontier.
    ///
    /// The first route that reaches a cell wins, even if a cheaper one is
    /// discovered later. Fast, best-first, not guaranteed optimal.
    #[default]
    Enqueue,
    /// Mark a cell when it is popped as the frontier minimum.
    ///
    /// A cell may be pushed several times; only its cheapest entry is
    /// expanded. The resulting route has minimal accumulated cost.
    Settle,
}

/// Parameters of a single path search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchParams {
    /// Largest height increase allowed for one forward step. Dropping down
    /// is never limited.
    pub max_step_up: i32,
    /// Whether the 4 diagonal neighbours are considered.
    pub diagonals: bool,
    /// Whether a diagonal step needs both flanking orthogonal cells walkable.
    pub walls_block_diagonals: bool,
    pub discipline: Discipline,
}

impl SearchParams {
    /// Orthogonal moves only, flat terrain (no climbing).
    pub const fn new() -> Self {
        Self {
            max_step_up: 0,
            diagonals: false,
            walls_block_diagonals: false,
            discipline: Discipline::Enqueue,
        }
    }

    /// Set the maximum step-up (builder).
    #[inline]
    pub const fn with_max_step_up(mut self, max_step_up: i32) -> Self {
        self.max_step_up = max_step_up;
        self
    }

    /// Enable or disable diagonal moves (builder).
    #[inline]
    pub const fn with_diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    /// Enable or disable corner-cutting prevention (builder).
    #[inline]
    pub const fn with_walls_block_diagonals(mut self, block: bool) -> Self {
        self.walls_block_diagonals = block;
        self
    }

    /// Set the visited discipline (builder).
    #[inline]
    pub const fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }
}
