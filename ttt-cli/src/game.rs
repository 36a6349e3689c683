//! 对局控制
//!
//! X 先手，双方轮流落子，直到一方连成一线或棋盘下满

use std::time::Duration;

use anyhow::Result;
use ttt_core::{Board, Mark, Outcome};

use crate::player::Player;

/// 对局选项
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// 是否打印棋盘与走子信息
    pub print_game: bool,
    /// 双方均为人类时不等待
    pub humans_only: bool,
    /// 有电脑参与且打印时，每步之后的等待时间
    pub computer_delay: Duration,
}

impl PlayOptions {
    /// 静默对局（批量模拟使用）
    pub fn quiet() -> Self {
        Self::default()
    }

    fn turn_delay(&self) -> Option<Duration> {
        if self.print_game && !self.humans_only && !self.computer_delay.is_zero() {
            Some(self.computer_delay)
        } else {
            None
        }
    }
}

/// 进行一局对局，返回结果
pub async fn play(
    board: &mut Board,
    x_player: &mut dyn Player,
    o_player: &mut dyn Player,
    options: &PlayOptions,
) -> Result<Outcome> {
    if options.print_game {
        println!("{}", Board::cell_guide());
    }

    let mut turn = Mark::X;

    while board.has_empty_squares() {
        let player: &mut dyn Player = match turn {
            Mark::X => &mut *x_player,
            Mark::O => &mut *o_player,
        };
        let cell = player.choose_move(board).await?;

        if let Err(e) = board.try_apply_move(cell, turn) {
            tracing::warn!("{} 的落子被拒绝: {}", turn, e);
            continue;
        }
        tracing::debug!("{} 落子 {}", turn, cell);

        if options.print_game {
            println!("{} moved on square {}", turn, cell);
            println!("{}", board);
            println!();
        }

        if let Some(winner) = board.winner() {
            if options.print_game {
                println!("{} won the game.\n", winner);
            }
            return Ok(Outcome::Winner(winner));
        }

        turn = turn.opponent();

        if let Some(delay) = options.turn_delay() {
            tokio::time::sleep(delay).await;
        }
    }

    if options.print_game {
        println!("Game ended in draw.");
    }
    Ok(Outcome::Draw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use ttt_ai::AiConfig;

    use crate::console::Console;
    use crate::player::{HumanPlayer, SmartPlayer};

    /// 按预设顺序落子的玩家
    struct ScriptedPlayer {
        mark: Mark,
        moves: VecDeque<usize>,
        asked: usize,
    }

    impl ScriptedPlayer {
        fn new(mark: Mark, moves: &[usize]) -> Self {
            Self {
                mark,
                moves: moves.iter().copied().collect(),
                asked: 0,
            }
        }
    }

    #[async_trait]
    impl Player for ScriptedPlayer {
        fn mark(&self) -> Mark {
            self.mark
        }

        async fn choose_move(&mut self, _board: &Board) -> Result<usize> {
            self.asked += 1;
            self.moves
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("脚本已用完"))
        }
    }

    #[tokio::test]
    async fn test_x_wins_row() {
        let mut board = Board::new();
        let mut x = ScriptedPlayer::new(Mark::X, &[0, 1, 2]);
        let mut o = ScriptedPlayer::new(Mark::O, &[3, 4]);

        let outcome = play(&mut board, &mut x, &mut o, &PlayOptions::quiet())
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Winner(Mark::X));
        assert_eq!(board.empty_square_count(), 4);
    }

    #[tokio::test]
    async fn test_draw() {
        let mut board = Board::new();
        let mut x = ScriptedPlayer::new(Mark::X, &[0, 2, 3, 7, 8]);
        let mut o = ScriptedPlayer::new(Mark::O, &[1, 4, 5, 6]);

        let outcome = play(&mut board, &mut x, &mut o, &PlayOptions::quiet())
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Draw);
        assert!(board.is_full());
    }

    #[tokio::test]
    async fn test_rejected_move_asks_same_player() {
        let mut board = Board::new();
        // O 先尝试已被占用的 0 和越界的 9，之后落在 3
        let mut x = ScriptedPlayer::new(Mark::X, &[0, 1, 2]);
        let mut o = ScriptedPlayer::new(Mark::O, &[0, 9, 3, 4]);

        let outcome = play(&mut board, &mut x, &mut o, &PlayOptions::quiet())
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Winner(Mark::X));
        assert_eq!(board.get(3), Some(Mark::O));
        assert_eq!(o.asked, 4);
        assert_eq!(x.asked, 3);
    }

    #[tokio::test]
    async fn test_player_error_propagates() {
        let mut board = Board::new();
        let mut x = ScriptedPlayer::new(Mark::X, &[0]);
        let mut o = ScriptedPlayer::new(Mark::O, &[]);

        assert!(play(&mut board, &mut x, &mut o, &PlayOptions::quiet())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_humans_from_console() {
        let console = Console::from_reader(&b"0\n3\nx\n1\n4\n2\n"[..]);
        let mut x = HumanPlayer::new(Mark::X, console.clone());
        let mut o = HumanPlayer::new(Mark::O, console);
        let options = PlayOptions {
            print_game: true,
            humans_only: true,
            computer_delay: Duration::from_secs(1),
        };

        let mut board = Board::new();
        let outcome = play(&mut board, &mut x, &mut o, &options).await.unwrap();
        assert_eq!(outcome, Outcome::Winner(Mark::X));
    }

    #[tokio::test(start_paused = true)]
    async fn test_engines_draw() {
        let mut board = Board::new();
        let mut x = SmartPlayer::new(Mark::X, AiConfig { random_opening: true, seed: Some(8) });
        let mut o = SmartPlayer::new(Mark::O, AiConfig { random_opening: true, seed: Some(9) });
        let options = PlayOptions {
            print_game: true,
            humans_only: false,
            computer_delay: Duration::from_millis(1000),
        };

        let outcome = play(&mut board, &mut x, &mut o, &options).await.unwrap();
        assert_eq!(outcome, Outcome::Draw);
    }

    #[test]
    fn test_turn_delay() {
        let mut options = PlayOptions {
            print_game: true,
            humans_only: false,
            computer_delay: Duration::from_millis(500),
        };
        assert_eq!(options.turn_delay(), Some(Duration::from_millis(500)));

        options.humans_only = true;
        assert_eq!(options.turn_delay(), None);

        assert_eq!(PlayOptions::quiet().turn_delay(), None);
    }
}
