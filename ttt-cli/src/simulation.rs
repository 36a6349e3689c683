//! 批量模拟
//!
//! 随机玩家（X）对战 Minimax 玩家（O），统计胜负

use anyhow::Result;
use ttt_core::{Board, Mark, Outcome};

use crate::game::{play, PlayOptions};
use crate::player::{PlayerFactory, PlayerKind};

/// 模拟统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    pub games: u32,
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl SimulationReport {
    /// 记录一局结果
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Winner(Mark::X) => self.x_wins += 1,
            Outcome::Winner(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.ties += 1,
        }
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Overall result:")?;
        writeln!(f, "Total # of games played: {}", self.games)?;
        writeln!(f, "X ({}) wins: {}", PlayerKind::Random.display_name(), self.x_wins)?;
        writeln!(f, "O ({}) wins: {}", PlayerKind::Smart.display_name(), self.o_wins)?;
        write!(f, "Ties: {}", self.ties)
    }
}

/// 运行 `iterations` 局静默对局
///
/// 每 `progress_interval` 局打印一次进度，为 0 时不打印。
pub async fn run_simulation(
    iterations: u32,
    progress_interval: u32,
    factory: &mut PlayerFactory,
) -> Result<SimulationReport> {
    let mut report = SimulationReport::default();
    let options = PlayOptions::quiet();

    for run in 0..iterations {
        let mut x_player = factory.create(PlayerKind::Random, Mark::X);
        let mut o_player = factory.create(PlayerKind::Smart, Mark::O);
        let mut board = Board::new();

        let outcome = play(&mut board, x_player.as_mut(), o_player.as_mut(), &options).await?;
        report.record(outcome);

        if progress_interval > 0 && run % progress_interval == 0 {
            println!("Running {} times...", run);
        }
    }

    tracing::info!(
        "模拟结束: 共 {} 局，X 胜 {}，O 胜 {}，和 {}",
        report.games,
        report.x_wins,
        report.o_wins,
        report.ties
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_ai::AiConfig;

    use crate::console::Console;

    #[test]
    fn test_record() {
        let mut report = SimulationReport::default();
        report.record(Outcome::Winner(Mark::X));
        report.record(Outcome::Winner(Mark::O));
        report.record(Outcome::Winner(Mark::O));
        report.record(Outcome::Draw);

        assert_eq!(
            report,
            SimulationReport {
                games: 4,
                x_wins: 1,
                o_wins: 2,
                ties: 1,
            }
        );
    }

    #[test]
    fn test_report_display() {
        let report = SimulationReport {
            games: 3,
            x_wins: 0,
            o_wins: 2,
            ties: 1,
        };
        let text = report.to_string();
        assert!(text.contains("Total # of games played: 3"));
        assert!(text.contains("X (RandomComputerPlayer) wins: 0"));
        assert!(text.contains("O (SmartComputerPlayer) wins: 2"));
        assert!(text.ends_with("Ties: 1"));
    }

    #[tokio::test]
    async fn test_minimax_never_loses() {
        let mut factory = PlayerFactory::new(
            Console::from_reader(&b""[..]),
            AiConfig {
                random_opening: true,
                seed: Some(42),
            },
        );

        let report = run_simulation(12, 5, &mut factory).await.unwrap();
        assert_eq!(report.games, 12);
        assert_eq!(report.x_wins, 0);
        assert_eq!(report.o_wins + report.ties, 12);
    }

    #[tokio::test]
    async fn test_zero_iterations() {
        let mut factory = PlayerFactory::new(Console::from_reader(&b""[..]), AiConfig::default());

        let report = run_simulation(0, 0, &mut factory).await.unwrap();
        assert_eq!(report, SimulationReport::default());
    }
}
