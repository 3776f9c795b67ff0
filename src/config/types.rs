use serde::{Deserialize, Serialize};

/// EXIF `DateTimeOriginal`（拍攝日期時間）標籤編號
pub const DATE_TIME_ORIGINAL_TAG: u16 = 0x9003;

/// `YYYY:MM:DD HH:MM:SS` 中年份的起始位置與長度
pub const YEAR_START: usize = 0;
pub const YEAR_LENGTH: usize = 4;

/// `YYYY:MM:DD HH:MM:SS` 中月份的起始位置與長度
pub const MONTH_START: usize = 5;
pub const MONTH_LENGTH: usize = 2;

/// 每處理幾個檔案輸出一次進度
pub const PROGRESS_INTERVAL: usize = 100;

/// 拍攝日期標籤的格式定義
///
/// 值為固定寬度的 ASCII 字串，只取前 7 個字元（年份、分隔符號、月份）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureLayout {
    pub tag_id: u16,
    pub year_start: usize,
    pub year_length: usize,
    pub month_start: usize,
    pub month_length: usize,
}

impl Default for CaptureLayout {
    fn default() -> Self {
        Self {
            tag_id: DATE_TIME_ORIGINAL_TAG,
            year_start: YEAR_START,
            year_length: YEAR_LENGTH,
            month_start: MONTH_START,
            month_length: MONTH_LENGTH,
        }
    }
}

impl CaptureLayout {
    /// 取出年份與月份所需的最短字元數
    #[must_use]
    pub const fn min_length(&self) -> usize {
        let year_end = self.year_start + self.year_length;
        let month_end = self.month_start + self.month_length;
        if year_end > month_end {
            year_end
        } else {
            month_end
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub capture_layout: CaptureLayout,
    pub progress_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture_layout: CaptureLayout::default(),
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}
