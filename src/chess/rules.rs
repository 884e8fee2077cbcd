//! Knobs that select how strictly the engine filters moves. The defaults
//! reproduce the classic behavior of the engine; the strict alternatives make
//! it play by the full rules of chess (apart from castling, en passant and
//! promotions which are not supported at all).

/// Which moves are tested for leaving the mover's own king under attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Legality {
    /// Only the king is prevented from stepping onto an attacked square. When
    /// the king is already in check, only king moves are offered: capturing
    /// or blocking the checker with another piece is not considered. Other
    /// pieces may move even if that exposes their king.
    #[default]
    KingSafety,
    /// Every candidate move of every piece is played out on a copy of the
    /// board and kept only if the mover's king is not attacked afterwards.
    Full,
}

/// Configuration of a [`crate::chess::game::Game`].
///
/// ```
/// use chessrules::chess::rules::{Legality, Rules};
///
/// let rules = Rules::new()
///     .with_legality(Legality::Full)
///     .with_clear_double_push(true);
/// assert_eq!(rules.legality, Legality::Full);
/// assert!(rules.clear_double_push);
/// assert_eq!(Rules::default(), Rules::new());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rules {
    #[allow(missing_docs)]
    pub legality: Legality,
    /// Whether a pawn double push also requires the square it passes over to
    /// be empty. When disabled, only the target square is checked and a pawn
    /// can jump over a piece right in front of it.
    pub clear_double_push: bool,
}

impl Rules {
    /// Default rules: [`Legality::KingSafety`], double pushes only check the
    /// target square.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            legality: Legality::KingSafety,
            clear_double_push: false,
        }
    }

    /// Follows all rules of standard chess that the engine supports.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            legality: Legality::Full,
            clear_double_push: true,
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn with_legality(mut self, legality: Legality) -> Self {
        self.legality = legality;
        self
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn with_clear_double_push(mut self, enabled: bool) -> Self {
        self.clear_double_push = enabled;
        self
    }
}
