//! 棋盘状态

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT, WIN_LINES};
use crate::error::{GameError, Result};
use crate::mark::Mark;

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// 某方连成一线
    Winner(Mark),
    /// 棋盘已满且无人获胜
    Draw,
}

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 3x3 棋盘，索引为 row * 3 + col
    cells: [Option<Mark>; CELL_COUNT],
    /// 最近一次落子形成连线的一方
    winner: Option<Mark>,
}

impl Board {
    /// 创建空棋盘
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            winner: None,
        }
    }

    /// 获取指定格子的标记，越界返回 None
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    /// 当前获胜方
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// 所有空格，按编号升序
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// 是否还有空格
    pub fn has_empty_squares(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// 空格数量
    pub fn empty_square_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        !self.has_empty_squares()
    }

    /// 对局结果，进行中返回 None
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner {
            Some(mark) => Some(Outcome::Winner(mark)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// 落子
    ///
    /// 仅当格子为空时写入并返回 true；随后检查经过该格的连线，
    /// 若 `mark` 连成一线则记录为获胜方。格子已被占用或越界时返回 false，棋盘不变。
    pub fn apply_move(&mut self, cell: usize, mark: Mark) -> bool {
        match self.cells.get(cell) {
            Some(None) => {}
            _ => return false,
        }

        self.cells[cell] = Some(mark);
        if self.completes_line(cell, mark) {
            self.winner = Some(mark);
        }
        true
    }

    /// 落子，失败时返回原因
    pub fn try_apply_move(&mut self, cell: usize, mark: Mark) -> Result<()> {
        if cell >= CELL_COUNT {
            return Err(GameError::InvalidCell { cell });
        }
        if self.apply_move(cell, mark) {
            Ok(())
        } else {
            Err(GameError::CellOccupied { cell })
        }
    }

    /// 撤销落子：清空格子并无条件清除获胜方
    ///
    /// 调用必须与 `apply_move` 严格后进先出配对。
    pub fn undo_move(&mut self, cell: usize) {
        if let Some(slot) = self.cells.get_mut(cell) {
            *slot = None;
        }
        self.winner = None;
    }

    /// 试探性落子，返回的守卫在离开作用域时自动撤销
    ///
    /// 格子不可用时返回 None。
    pub fn trial_move(&mut self, cell: usize, mark: Mark) -> Option<TrialMove<'_>> {
        if self.apply_move(cell, mark) {
            Some(TrialMove { board: self, cell })
        } else {
            None
        }
    }

    /// 检查经过 `cell` 的行、列以及（偶数格的）对角线
    fn completes_line(&self, cell: usize, mark: Mark) -> bool {
        let row = cell / BOARD_SIZE;
        let col = cell % BOARD_SIZE;

        if self.line_owned_by(&WIN_LINES[row], mark) {
            return true;
        }
        if self.line_owned_by(&WIN_LINES[BOARD_SIZE + col], mark) {
            return true;
        }

        // 奇数格不在对角线上
        if cell % 2 == 0 {
            return WIN_LINES[2 * BOARD_SIZE..]
                .iter()
                .any(|line| self.line_owned_by(line, mark));
        }

        false
    }

    fn line_owned_by(&self, line: &[usize; 3], mark: Mark) -> bool {
        line.iter().all(|&i| self.cells[i] == Some(mark))
    }

    /// 格子编号对照图
    pub fn cell_guide() -> String {
        (0..BOARD_SIZE)
            .map(|row| {
                let labels: Vec<String> = (0..BOARD_SIZE)
                    .map(|col| (row * BOARD_SIZE + col).to_string())
                    .collect();
                format!("| {} |", labels.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = chunk
                .iter()
                .map(|cell| cell.map_or(' ', |m| m.to_char()).to_string())
                .collect();
            write!(f, "| {} |", symbols.join(" | "))?;
        }
        Ok(())
    }
}

/// 试探性落子守卫
///
/// 可当作 `Board` 使用；析构时撤销这一步。
pub struct TrialMove<'a> {
    board: &'a mut Board,
    cell: usize,
}

impl TrialMove<'_> {
    /// 本次试探的格子
    pub fn cell(&self) -> usize {
        self.cell
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.cell);
    }
}
