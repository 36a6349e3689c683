//! 终局评分

use ttt_core::{Board, Mark};

/// 终局评估器
pub struct Evaluator;

impl Evaluator {
    /// 对终局打分，非终局返回 None
    ///
    /// `requester` 为发起搜索的一方，`active` 为轮到走子的一方。
    /// 刚走完的一方（`active` 的对手）获胜时，分值为 `空格数 + 1`，
    /// 由 `requester` 获胜取正，否则取负；越快取胜分值越高。
    /// 棋盘已满且无人获胜记 0 分。
    pub fn terminal_score(board: &Board, requester: Mark, active: Mark) -> Option<i32> {
        let mover = active.opponent();
        if board.winner() == Some(mover) {
            let magnitude = board.empty_square_count() as i32 + 1;
            return Some(if mover == requester {
                magnitude
            } else {
                -magnitude
            });
        }

        if !board.has_empty_squares() {
            return Some(0);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(moves: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(cell, mark) in moves {
            assert!(board.apply_move(cell, mark));
        }
        board
    }

    #[test]
    fn test_win_with_three_empty() {
        // X X X / O O _ / O _ _
        let board = board_from(&[
            (0, Mark::X),
            (3, Mark::O),
            (1, Mark::X),
            (4, Mark::O),
            (6, Mark::O),
            (2, Mark::X),
        ]);
        assert_eq!(board.empty_square_count(), 3);

        assert_eq!(Evaluator::terminal_score(&board, Mark::X, Mark::O), Some(4));
        assert_eq!(Evaluator::terminal_score(&board, Mark::O, Mark::O), Some(-4));
    }

    #[test]
    fn test_win_on_last_cell() {
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);

        assert_eq!(Evaluator::terminal_score(&board, Mark::X, Mark::O), Some(1));
    }

    #[test]
    fn test_draw_scores_zero() {
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (4, Mark::O),
            (3, Mark::X),
            (5, Mark::O),
            (7, Mark::X),
            (6, Mark::O),
            (8, Mark::X),
        ]);

        assert_eq!(Evaluator::terminal_score(&board, Mark::O, Mark::O), Some(0));
    }

    #[test]
    fn test_not_terminal() {
        let board = board_from(&[(4, Mark::X)]);
        assert_eq!(Evaluator::terminal_score(&board, Mark::O, Mark::O), None);
    }
}
