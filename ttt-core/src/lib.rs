//! 井字棋核心库
//!
//! 包含:
//! - 棋子标记、棋盘等核心数据结构
//! - 落子、悔棋与胜负判定
//! - 错误类型定义

mod board;
mod constants;
mod error;
mod mark;

pub use board::{Board, Outcome, TrialMove};
pub use constants::*;
pub use error::{GameError, Result};
pub use mark::Mark;
