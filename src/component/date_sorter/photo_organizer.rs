use crate::config::Config;
use crate::tools::{Destination, extract_capture_tag, relocate, scan_directory_files};
use anyhow::Result;
use console::style;
use log::{debug, info, warn};
use rust_i18n::t;
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 單一檔案的處理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Moved(PathBuf),
    /// 不是影像或沒有拍攝日期，留在原處
    Skipped,
}

/// 整理結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrganizeSummary {
    pub total: usize,
    pub moved: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// 依拍攝年月整理單一資料夾中的照片
pub struct PhotoOrganizer {
    config: Config,
}

impl PhotoOrganizer {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// 依序處理資料夾中的每個檔案，單一檔案的錯誤只會輸出後繼續
    pub fn organize<W: Write>(&self, directory: &Path, out: &mut W) -> Result<OrganizeSummary> {
        info!("開始整理目錄: {}", directory.display());

        let files = scan_directory_files(directory)?;
        let total = files.len();
        let mut summary = OrganizeSummary {
            total,
            ..OrganizeSummary::default()
        };

        for (index, file) in files.iter().enumerate() {
            if index % self.config.progress_interval == 0 {
                emit_line(
                    out,
                    t!("date_sorter.progress", current = index, total = total),
                );
            }

            match self.process_file(file) {
                Ok(FileOutcome::Moved(target)) => {
                    debug!("移動檔案: {} -> {}", file.display(), target.display());
                    summary.moved += 1;
                }
                Ok(FileOutcome::Skipped) => summary.skipped += 1,
                Err(e) => {
                    warn!("無法處理檔案 {}: {e:#}", file.display());
                    summary.failed += 1;
                    report_failure(out, file, &e);
                }
            }
        }

        info!(
            "整理完成 - 總數: {}, 移動: {}, 跳過: {}, 失敗: {}",
            summary.total, summary.moved, summary.skipped, summary.failed
        );

        Ok(summary)
    }

    /// 讀取拍攝日期並移動檔案；沒有日期的檔案不做任何變更
    pub fn process_file(&self, file: &Path) -> Result<FileOutcome> {
        let layout = &self.config.capture_layout;

        let Some(tag) = extract_capture_tag(file, layout)? else {
            return Ok(FileOutcome::Skipped);
        };

        let year_month = tag.year_month(layout)?;
        let destination = Destination::resolve(file, &year_month)?;
        relocate(file, &destination)?;

        Ok(FileOutcome::Moved(destination.file_path))
    }
}

fn report_failure<W: Write>(out: &mut W, file: &Path, error: &anyhow::Error) {
    emit_line(
        out,
        style(t!("date_sorter.could_not_treat", path = file.display())).red(),
    );
    emit_line(out, t!("date_sorter.exception", message = error));
    emit_line(out, t!("date_sorter.stack", trace = format!("{error:?}")));
}

/// 輸出失敗不中斷整理流程
fn emit_line<W: Write>(out: &mut W, line: impl Display) {
    if let Err(e) = writeln!(out, "{line}") {
        warn!("無法輸出訊息: {e}");
    }
}
