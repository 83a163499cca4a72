use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use super::model::ActivityEvent;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// 只追加的活动日志文件
///
/// 每条记录以追加模式单次写入整行，依赖系统的原子追加保证顺序，不加锁。
#[derive(Debug)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    /// 打开（必要时创建）日志文件，确认可写
    pub async fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, event: &ActivityEvent<'_>) -> io::Result<()> {
        let line = format_line(&Local::now().format(TIMESTAMP_FORMAT).to_string(), event);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }

    /// 记录事件；写入失败只报告给运维日志，不影响请求
    pub async fn record(&self, event: ActivityEvent<'_>) {
        match event {
            ActivityEvent::LookupFailed { .. } => {
                tracing::warn!(target: "activity", kind = event.kind(), "{}", event)
            }
            _ => tracing::info!(target: "activity", kind = event.kind(), "{}", event),
        }

        if let Err(e) = self.append(&event).await {
            tracing::error!(
                "Failed to append {} event to {}: {}",
                event.kind(),
                self.path.display(),
                e
            );
        }
    }
}

fn format_line(timestamp: &str, event: &ActivityEvent<'_>) -> String {
    format!("{} - {}\n", timestamp, event)
}
