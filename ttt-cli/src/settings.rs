//! 本地设置
//!
//! 设置以 JSON 格式保存在系统配置目录，缺失或损坏时使用默认值

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use ttt_ai::AiConfig;

/// 指定设置文件路径的环境变量
pub const SETTINGS_ENV: &str = "TICTACTOE_SETTINGS";

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 有电脑参与时每步之后的等待（毫秒）
    pub computer_delay_ms: u64,
    /// 批量模拟的进度打印间隔（局），0 表示不打印
    pub progress_interval: u32,
    /// AI 配置
    pub ai: AiConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            computer_delay_ms: 1000,
            progress_interval: 5,
            ai: AiConfig::default(),
        }
    }
}

impl Settings {
    /// 设置文件路径：优先使用环境变量，其次为系统配置目录
    pub fn settings_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("tictactoe").join("settings.json"))
    }

    /// 加载设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// 从指定文件加载设置
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("已加载设置: {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("设置文件格式无效: {}，使用默认设置", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("无法读取设置文件: {}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 电脑落子后的等待时间
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}
