use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

pub fn setup_logging(log_level: &str) {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    // 互動模式與 CLI 模式可能重複呼叫，只有第一次生效
    let _ = env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init();
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn update(&self, index: usize, total: usize, file_name: &str) {
        if self.no_progress {
            return;
        }
        self.pb.set_message(format!("處理 {}（{}/{}）", file_name, index + 1, total));
    }

    pub fn inc(&self) {
        self.pb.inc(1);
    }

    pub fn finish(&self, converted: usize, failed: usize) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        self.pb.finish_with_message(format!(
            "完成，成功 {} 個，失敗 {} 個，耗時 {:.1} 秒",
            converted, failed, elapsed
        ));
    }
}

pub fn format_file_size(size: u64) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

/// 壓縮檔大小一律以 MB 顯示
pub fn format_size_mb(size: u64) -> String {
    format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
}
