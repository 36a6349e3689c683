//! 搜索引擎
//!
//! 实现完全深度的 Minimax 搜索（无剪枝、无置换表）

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use ttt_core::{Board, Mark, CELL_COUNT};

use crate::evaluate::Evaluator;
use crate::random::random_move;

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// 空棋盘先手时随机落子，跳过代价最高的一次全树搜索
    pub random_opening: bool,
    /// 随机数种子，None 时使用系统熵
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            random_opening: true,
            seed: None,
        }
    }
}

/// 单次搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// 推荐落子，终局叶子为 None
    pub position: Option<usize>,
    pub score: i32,
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rng: ChaCha8Rng,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            config,
            rng,
            nodes_searched: 0,
        }
    }

    /// 为 `mark` 选择最佳落子
    ///
    /// 搜索期间原地修改棋盘，返回前完全复原。棋盘已满时返回 None。
    pub fn select_move(&mut self, board: &mut Board, mark: Mark) -> Option<usize> {
        self.nodes_searched = 0;

        let moves = board.available_moves();
        if moves.is_empty() {
            tracing::warn!("棋盘已满，{} 无子可下", mark);
            return None;
        }

        if self.config.random_opening && moves.len() == CELL_COUNT {
            let cell = random_move(board, &mut self.rng);
            tracing::debug!("{} 开局随机落子: {:?}", mark, cell);
            return cell;
        }

        let result = self.minimax(board, mark, mark);
        tracing::debug!(
            "{} 搜索完成: 落子 {:?}，分值 {}，节点数 {}",
            mark,
            result.position,
            result.score,
            self.nodes_searched
        );
        result.position
    }

    /// Minimax 搜索
    ///
    /// `requester` 在整棵搜索树中保持不变，取最大值；`active` 为当前走子方。
    pub fn minimax(&mut self, board: &mut Board, requester: Mark, active: Mark) -> SearchResult {
        self.nodes_searched += 1;

        if let Some(score) = Evaluator::terminal_score(board, requester, active) {
            return SearchResult {
                position: None,
                score,
            };
        }

        let maximizing = active == requester;
        let mut best = SearchResult {
            position: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for cell in board.available_moves() {
            let score = match board.trial_move(cell, active) {
                Some(mut trial) => self.minimax(&mut trial, requester, active.opponent()).score,
                None => continue,
            };

            // 同分保留先找到的（编号较小的）落子
            let better = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if better {
                best = SearchResult {
                    position: Some(cell),
                    score,
                };
            }
        }

        best
    }

    /// 获取最近一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
