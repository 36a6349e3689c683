//! 菜单循环

use anyhow::Result;
use ttt_core::{Board, Mark, Outcome};

use crate::console::Console;
use crate::game::{play, PlayOptions};
use crate::player::{PlayerFactory, PlayerKind};
use crate::settings::Settings;
use crate::simulation::run_simulation;

/// 菜单文本
pub const MENU_TEXT: &str = "Choose one of the following program functions:
         (A: Human vs. Human),
         (B: Human vs. RandomComputerPlayer),
         (C: Human vs. SmartComputerPlayer),
         (D: SmartComputerPlayer vs. RandomComputerPlayer)
         (Q: Quit the program)";

/// 菜单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    HumanVsHuman,
    HumanVsRandom,
    HumanVsSmart,
    Simulation,
    Quit,
}

impl MenuChoice {
    /// 解析输入（不区分大小写，忽略首尾空白）
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "A" => Some(MenuChoice::HumanVsHuman),
            "B" => Some(MenuChoice::HumanVsRandom),
            "C" => Some(MenuChoice::HumanVsSmart),
            "D" => Some(MenuChoice::Simulation),
            "Q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    /// 交互对局的双方（X, O）
    pub fn lineup(&self) -> Option<(PlayerKind, PlayerKind)> {
        match self {
            MenuChoice::HumanVsHuman => Some((PlayerKind::Human, PlayerKind::Human)),
            MenuChoice::HumanVsRandom => Some((PlayerKind::Human, PlayerKind::Random)),
            MenuChoice::HumanVsSmart => Some((PlayerKind::Human, PlayerKind::Smart)),
            MenuChoice::Simulation | MenuChoice::Quit => None,
        }
    }
}

/// 运行菜单，直到选择退出或输入结束
pub async fn run(console: &Console, settings: &Settings) -> Result<()> {
    let mut factory = PlayerFactory::new(console.clone(), settings.ai.clone());

    loop {
        println!("{}", MENU_TEXT);
        let Some(line) = console.prompt("").await? else {
            tracing::info!("输入已结束，退出");
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            println!("Not a valid input.\n");
            continue;
        };

        match choice {
            MenuChoice::Quit => {
                println!("Quitting the program.");
                return Ok(());
            }
            MenuChoice::Simulation => {
                let Some(line) = console.prompt("Number of times to run simulation: ").await? else {
                    return Ok(());
                };
                let Ok(iterations) = line.trim().parse::<u32>() else {
                    println!("Not a valid input.\n");
                    continue;
                };

                let report =
                    run_simulation(iterations, settings.progress_interval, &mut factory).await?;
                println!("\n{}\n", report);
            }
            _ => {
                let Some((x_kind, o_kind)) = choice.lineup() else {
                    continue;
                };
                let mut x_player = factory.create(x_kind, Mark::X);
                let mut o_player = factory.create(o_kind, Mark::O);
                let options = PlayOptions {
                    print_game: true,
                    humans_only: x_kind.is_human() && o_kind.is_human(),
                    computer_delay: settings.computer_delay(),
                };

                let mut board = Board::new();
                let outcome =
                    play(&mut board, x_player.as_mut(), o_player.as_mut(), &options).await?;
                match outcome {
                    Outcome::Winner(mark) => tracing::info!("对局结束，{} 获胜", mark),
                    Outcome::Draw => tracing::info!("对局结束，和棋"),
                }
            }
        }
    }
}
