//! 井字棋命令行端
//!
//! 包含:
//! - 菜单循环
//! - 对局控制
//! - 玩家（人类、随机、Minimax）
//! - 批量模拟
//! - 本地设置

pub mod console;
pub mod game;
pub mod menu;
pub mod player;
pub mod settings;
pub mod simulation;

pub use console::Console;
pub use game::{play, PlayOptions};
pub use menu::MenuChoice;
pub use player::{HumanPlayer, Player, PlayerFactory, PlayerKind, RandomPlayer, SmartPlayer};
pub use settings::Settings;
pub use simulation::{run_simulation, SimulationReport};
