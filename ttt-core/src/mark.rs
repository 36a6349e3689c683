//! 棋子标记定义

use serde::{Deserialize, Serialize};

/// 标记（X 先手，O 后手）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// 获取对方标记
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// 获取显示字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// 从字符解析（不区分大小写）
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'x' | 'X' => Some(Mark::X),
            'o' | 'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
