//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局评分
//! - 完全深度 Minimax 搜索
//! - 随机走子

mod evaluate;
mod random;
mod search;

pub use evaluate::Evaluator;
pub use random::random_move;
pub use search::{AiConfig, AiEngine, SearchResult};
