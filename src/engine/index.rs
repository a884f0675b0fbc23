use crate::board::CellState;
use std::sync::OnceLock;

/// A cell can see at most 8 live neighbors, so there are 9 possible counts
const NEIGHBOR_COUNTS: usize = 9;
/// The number of (state, neighbor count) permutations
const PERMUTATIONS: usize = 2 * NEIGHBOR_COUNTS;
type RuleIndex = [Transition; PERMUTATIONS];

/// The outcome of the Game of Life rules for a single interior cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Dead with exactly 3 live neighbors
    Reproduce,
    /// Alive with more than 3 live neighbors
    Overpopulate,
    /// Alive with 2 or 3 live neighbors
    Survive,
    /// Alive with 0 or 1 live neighbors
    Underpopulate,
    /// Dead with anything but 3 live neighbors
    StayDead,
}
impl Transition {
    /// Classifies a cell, checking the rules in priority order
    pub fn classify(state: CellState, neighbors: u8) -> Self {
        match (state, neighbors) {
            (CellState::Dead, 3) => Self::Reproduce,
            (CellState::Alive, n) if n > 3 => Self::Overpopulate,
            (CellState::Alive, 2 | 3) => Self::Survive,
            (CellState::Alive, _) => Self::Underpopulate,
            (CellState::Dead, _) => Self::StayDead,
        }
    }

    #[inline]
    pub fn next_state(self) -> CellState {
        match self {
            Self::Reproduce | Self::Survive => CellState::Alive,
            Self::Overpopulate | Self::Underpopulate | Self::StayDead => CellState::Dead,
        }
    }
}

/// Returns a Singleton lookup table for the rule outcomes
///
/// Equivalent to calling [`generate_rule_index`] once and storing the result
pub(super) fn get_rule_index() -> &'static RuleIndex {
    static CELL: OnceLock<RuleIndex> = OnceLock::new();
    CELL.get_or_init(generate_rule_index)
}

/// Position of a (state, neighbor count) pair in the table
///
/// Dead cells occupy the first 9 entries and alive cells the last 9.
#[inline]
pub(super) fn rule_slot(state: CellState, neighbors: u8) -> usize {
    debug_assert!(
        (neighbors as usize) < NEIGHBOR_COUNTS,
        "more than 8 neighbors"
    );
    usize::from(state.is_alive()) * NEIGHBOR_COUNTS + neighbors as usize
}

/// Creates a lookup table of [`Transition`]s indexed by [`rule_slot`]
pub(super) fn generate_rule_index() -> RuleIndex {
    let mut index = [Transition::StayDead; PERMUTATIONS];
    for state in [CellState::Dead, CellState::Alive] {
        for neighbors in 0..NEIGHBOR_COUNTS as u8 {
            index[rule_slot(state, neighbors)] = Transition::classify(state, neighbors);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        let index = generate_rule_index();
        let next = |state, n| index[rule_slot(state, n)].next_state();

        assert_eq!(next(CellState::Alive, 2), CellState::Alive);
        assert_eq!(next(CellState::Alive, 3), CellState::Alive);
        assert_eq!(next(CellState::Dead, 3), CellState::Alive);

        assert_eq!(next(CellState::Alive, 0), CellState::Dead);
        assert_eq!(next(CellState::Alive, 1), CellState::Dead);
        assert_eq!(next(CellState::Alive, 4), CellState::Dead);
        assert_eq!(next(CellState::Alive, 8), CellState::Dead);
        assert_eq!(next(CellState::Dead, 2), CellState::Dead);
        assert_eq!(next(CellState::Dead, 4), CellState::Dead);
    }

    #[test]
    fn every_pair_has_exactly_one_outcome() {
        let index = generate_rule_index();

        let count = |t: Transition| index.iter().filter(|&&x| x == t).count();
        assert_eq!(count(Transition::Reproduce), 1);
        assert_eq!(count(Transition::Overpopulate), 5); // 4..=8
        assert_eq!(count(Transition::Survive), 2);
        assert_eq!(count(Transition::Underpopulate), 2);
        assert_eq!(count(Transition::StayDead), 8);
    }

    #[test]
    fn outcomes_follow_cell_state() {
        for neighbors in 0..NEIGHBOR_COUNTS as u8 {
            let dead = Transition::classify(CellState::Dead, neighbors);
            assert!(matches!(dead, Transition::Reproduce | Transition::StayDead));

            let alive = Transition::classify(CellState::Alive, neighbors);
            assert!(!matches!(alive, Transition::Reproduce | Transition::StayDead));
        }
    }

    #[test]
    fn shared_index_matches_generated() {
        assert_eq!(get_rule_index(), &generate_rule_index());
    }
}
