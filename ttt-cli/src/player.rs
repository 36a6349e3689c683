//! 玩家
//!
//! 人类、随机与 Minimax 玩家共用同一个 `Player` 接口，对局循环不关心玩家类型

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ttt_ai::{random_move, AiConfig, AiEngine};
use ttt_core::{Board, Mark};

use crate::console::Console;

/// 玩家接口
#[async_trait]
pub trait Player: Send {
    /// 执子标记
    fn mark(&self) -> Mark;

    /// 为当前棋盘选择一个格子
    async fn choose_move(&mut self, board: &Board) -> Result<usize>;
}

/// 玩家类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Random,
    Smart,
}

impl PlayerKind {
    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerKind::Human => "HumanPlayer",
            PlayerKind::Random => "RandomComputerPlayer",
            PlayerKind::Smart => "SmartComputerPlayer",
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, PlayerKind::Human)
    }
}

/// 人类玩家，从控制台读取落子
pub struct HumanPlayer {
    mark: Mark,
    console: Console,
}

impl HumanPlayer {
    pub fn new(mark: Mark, console: Console) -> Self {
        Self { mark, console }
    }
}

#[async_trait]
impl Player for HumanPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    async fn choose_move(&mut self, board: &Board) -> Result<usize> {
        let message = format!("{}'s turn. Input move (0-8): ", self.mark);
        loop {
            let Some(line) = self.console.prompt(&message).await? else {
                bail!("输入已结束，{} 无法落子", self.mark);
            };
            println!();

            match line.trim().parse::<usize>() {
                Ok(cell) if board.available_moves().contains(&cell) => return Ok(cell),
                _ => println!("Invalid square. Try again.\n"),
            }
        }
    }
}

/// 随机玩家
pub struct RandomPlayer {
    mark: Mark,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    pub fn new(mark: Mark, seed: u64) -> Self {
        Self {
            mark,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

#[async_trait]
impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    async fn choose_move(&mut self, board: &Board) -> Result<usize> {
        random_move(board, &mut self.rng).ok_or_else(|| anyhow!("棋盘已满，{} 无子可下", self.mark))
    }
}

/// Minimax 玩家
pub struct SmartPlayer {
    mark: Mark,
    engine: AiEngine,
}

impl SmartPlayer {
    pub fn new(mark: Mark, config: AiConfig) -> Self {
        Self {
            mark,
            engine: AiEngine::new(config),
        }
    }
}

#[async_trait]
impl Player for SmartPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    async fn choose_move(&mut self, board: &Board) -> Result<usize> {
        // 在副本上搜索，调用方的棋盘保持只读
        let mut scratch = board.clone();
        self.engine
            .select_move(&mut scratch, self.mark)
            .ok_or_else(|| anyhow!("棋盘已满，{} 无子可下", self.mark))
    }
}

/// 玩家工厂
///
/// 持有共享控制台和种子源，每个电脑玩家获得独立派生的种子。
pub struct PlayerFactory {
    console: Console,
    ai: AiConfig,
    rng: ChaCha8Rng,
}

impl PlayerFactory {
    pub fn new(console: Console, ai: AiConfig) -> Self {
        let rng = match ai.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { console, ai, rng }
    }

    /// 创建指定类型的玩家
    pub fn create(&mut self, kind: PlayerKind, mark: Mark) -> Box<dyn Player> {
        match kind {
            PlayerKind::Human => Box::new(HumanPlayer::new(mark, self.console.clone())),
            PlayerKind::Random => Box::new(RandomPlayer::new(mark, self.rng.gen())),
            PlayerKind::Smart => {
                let config = AiConfig {
                    seed: Some(self.rng.gen()),
                    ..self.ai.clone()
                };
                Box::new(SmartPlayer::new(mark, config))
            }
        }
    }
}
