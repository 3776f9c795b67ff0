use super::photo_organizer::{OrganizeSummary, PhotoOrganizer};
use crate::config::Config;
use crate::tools::{resolve_source_directory, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::warn;
use rust_i18n::t;
use std::io;
use std::path::{Path, PathBuf};

/// 整理一次的結果
#[derive(Debug)]
pub enum SortOutcome {
    Completed(OrganizeSummary),
    /// 來源資料夾不存在，沒有任何檔案被變更
    InvalidDirectory(PathBuf),
}

/// 依拍攝日期整理照片元件
pub struct DateSorter {
    organizer: PhotoOrganizer,
}

impl DateSorter {
    pub const fn new(config: Config) -> Self {
        Self {
            organizer: PhotoOrganizer::new(config),
        }
    }

    pub fn run(&self) -> Result<SortOutcome> {
        println!("{}", style(t!("date_sorter.banner")).cyan().bold());

        let directory = self.prompt_source_directory()?;
        self.sort_directory(&directory)
    }

    /// 驗證資料夾後開始整理，進度輸出到標準輸出
    pub fn sort_directory(&self, directory: &Path) -> Result<SortOutcome> {
        if let Err(e) = validate_directory_exists(directory) {
            warn!("{e}");
            println!("{}", style(t!("date_sorter.invalid_directory")).red());
            return Ok(SortOutcome::InvalidDirectory(directory.to_path_buf()));
        }

        let mut stdout = io::stdout().lock();
        let summary = self.organizer.organize(directory, &mut stdout)?;
        Ok(SortOutcome::Completed(summary))
    }

    fn prompt_source_directory(&self) -> Result<PathBuf> {
        let input: String = Input::new()
            .with_prompt(t!("date_sorter.prompt"))
            .allow_empty(true)
            .interact_text()?;
        resolve_source_directory(&input)
    }
}
