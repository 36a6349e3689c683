//! 错误类型定义

use thiserror::Error;

/// 落子规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 格子编号越界
    #[error("Invalid cell: {cell} (expected 0-8)")]
    InvalidCell { cell: usize },

    /// 格子已被占用
    #[error("Cell {cell} is already occupied")]
    CellOccupied { cell: usize },
}

/// 棋盘操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
