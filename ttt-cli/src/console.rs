//! 控制台输入
//!
//! 菜单与所有人类玩家共享同一个按行读取的输入源

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::Mutex;

type LineSource = Lines<Box<dyn AsyncBufRead + Unpin + Send>>;

/// 共享的行输入
#[derive(Clone)]
pub struct Console {
    lines: Arc<Mutex<LineSource>>,
}

impl Console {
    /// 从标准输入读取
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }

    /// 从任意异步读取源读取（测试中使用内存数据）
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let boxed: Box<dyn AsyncBufRead + Unpin + Send> = Box::new(reader);
        Self {
            lines: Arc::new(Mutex::new(boxed.lines())),
        }
    }

    /// 打印提示并读取一行，输入结束返回 None
    pub async fn prompt(&self, message: &str) -> Result<Option<String>> {
        if !message.is_empty() {
            print!("{}", message);
            std::io::stdout().flush()?;
        }
        let line = self.lines.lock().await.next_line().await?;
        Ok(line)
    }
}
