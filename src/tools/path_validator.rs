use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("無法建立資料夾: {}", path.display()))?;
    }
    Ok(())
}

/// 將使用者輸入轉為來源資料夾路徑
///
/// 空白輸入代表目前的工作目錄；其餘輸入去除前後空白後原樣回傳，不做驗證
pub fn resolve_source_directory(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return std::env::current_dir().context("無法取得目前的工作目錄");
    }
    Ok(PathBuf::from(trimmed))
}
