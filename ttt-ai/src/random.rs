//! 随机走子

use rand::seq::SliceRandom;
use rand::Rng;
use ttt_core::Board;

/// 在所有空格中等概率选择一个，棋盘已满返回 None
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.available_moves().choose(rng).copied()
}
