//! 棋盘常量定义

/// 棋盘边长（行数与列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 所有可连成一线的格子组合：三行、三列、两条对角线
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
