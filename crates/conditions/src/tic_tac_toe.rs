use core::fmt;

/// A player's mark. Noughts are written `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// `X`
    Cross,
    /// `0`
    Nought,
}

impl fmt::Display for Mark {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Cross => "X",
            Self::Nought => "0",
        })
    }
}

/// A 3×3 board; `None` is an empty cell.
pub type Board = [[Option<Mark>; 3]; 3];

/// Every winning line as (row, column) cells.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The player holding a complete row, column or diagonal, if any.
pub fn evaluate_tic_tac_toe_position(position: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| {
        let [first, second, third] = line.map(|(row, column)| position[row][column]);
        let mark = first?;
        (second == Some(mark) && third == Some(mark)).then_some(mark)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const XX: Option<Mark> = Some(Mark::Cross);
    const OO: Option<Mark> = Some(Mark::Nought);
    const EE: Option<Mark> = None;

    #[test]
    fn diagonal_win() {
        let board = [[XX, EE, OO], [EE, XX, OO], [EE, EE, XX]];
        assert_eq!(evaluate_tic_tac_toe_position(&board), Some(Mark::Cross));
    }

    #[test]
    fn row_win() {
        let board = [[OO, OO, OO], [EE, XX, EE], [XX, EE, XX]];
        assert_eq!(evaluate_tic_tac_toe_position(&board), Some(Mark::Nought));
        assert_eq!(Mark::Nought.to_string(), "0");
    }

    #[test]
    fn column_and_anti_diagonal_wins() {
        let column = [[EE, XX, OO], [EE, XX, OO], [XX, EE, OO]];
        assert_eq!(evaluate_tic_tac_toe_position(&column), Some(Mark::Nought));
        let anti = [[EE, EE, XX], [OO, XX, EE], [XX, OO, EE]];
        assert_eq!(evaluate_tic_tac_toe_position(&anti), Some(Mark::Cross));
    }

    #[test]
    fn no_winner() {
        let drawn = [[OO, XX, OO], [EE, XX, EE], [XX, OO, XX]];
        assert_eq!(evaluate_tic_tac_toe_position(&drawn), None);
        assert_eq!(evaluate_tic_tac_toe_position(&[[EE; 3]; 3]), None);
    }
}
