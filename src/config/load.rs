use crate::config::types::Config;
use anyhow::{Context, Result, ensure};

/// 編譯時嵌入的標籤格式設定（不需要外部檔案）
const CAPTURE_LAYOUT_JSON: &str = include_str!("../data/capture_layout.json");

impl Config {
    pub fn new() -> Result<Self> {
        let config: Self =
            serde_json::from_str(CAPTURE_LAYOUT_JSON).context("無法解析嵌入的標籤格式設定")?;
        ensure!(config.progress_interval > 0, "進度間隔必須大於 0");
        Ok(config)
    }
}
