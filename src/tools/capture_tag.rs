//! 讀取影像中的拍攝日期標籤
//!
//! 解碼結果以 [`MetadataDecode`] 明確區分「不是影像」與其他錯誤，
//! 只有前者會被靜默略過

use crate::config::CaptureLayout;
use anyhow::{Context, Result, anyhow, ensure};
use exif::{Exif, In, Reader, Value};
use log::debug;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// 影像中繼資料的解碼結果
pub enum MetadataDecode {
    /// 成功取得 Exif 資料
    Decoded(Exif),
    /// 是影像，但沒有 Exif 區段
    NoMetadata,
    /// 無法辨識的格式或已損壞的檔案
    NotAnImage,
    /// 其他讀取錯誤
    Failed(anyhow::Error),
}

/// 拍攝日期標籤的原始文字，格式為 `YYYY:MM:DD HH:MM:SS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTag {
    pub raw: String,
}

/// 從標籤取出的年份與月份（不驗證是否為數字）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearMonth {
    pub year: String,
    pub month: String,
}

impl CaptureTag {
    pub fn year_month(&self, layout: &CaptureLayout) -> Result<YearMonth> {
        ensure!(
            self.raw.len() >= layout.min_length(),
            "拍攝日期過短: {:?}",
            self.raw
        );
        let year = self.fragment(layout.year_start, layout.year_length)?;
        let month = self.fragment(layout.month_start, layout.month_length)?;
        Ok(YearMonth {
            year: year.to_string(),
            month: month.to_string(),
        })
    }

    fn fragment(&self, start: usize, length: usize) -> Result<&str> {
        self.raw
            .get(start..start + length)
            .with_context(|| format!("拍攝日期格式不正確: {:?}", self.raw))
    }
}

/// 開啟檔案並嘗試解碼 Exif；檔案在回傳前即關閉
pub fn decode_metadata(path: &Path) -> MetadataDecode {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return MetadataDecode::Failed(
                anyhow!(e).context(format!("無法開啟檔案: {}", path.display())),
            );
        }
    };
    let mut reader = BufReader::new(file);

    // 個別欄位損壞時仍保留其餘可讀的欄位
    let decoded = Reader::new()
        .continue_on_error(true)
        .read_from_container(&mut reader)
        .or_else(|e| {
            e.distill_partial_result(|errors| {
                for error in errors {
                    debug!("略過損壞的 Exif 欄位 {}: {error}", path.display());
                }
            })
        });

    match decoded {
        Ok(exif) => MetadataDecode::Decoded(exif),
        // 欄位層級的錯誤已在上面處理，剩下的是無法辨識或結構損壞的檔案
        Err(exif::Error::InvalidFormat(_)) => MetadataDecode::NotAnImage,
        Err(exif::Error::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
            MetadataDecode::NotAnImage
        }
        Err(exif::Error::NotFound(_)) => MetadataDecode::NoMetadata,
        Err(e) => MetadataDecode::Failed(
            anyhow!(e).context(format!("無法解碼影像中繼資料: {}", path.display())),
        ),
    }
}

/// 取得拍攝日期標籤；不是影像或沒有標籤時回傳 `None`
pub fn extract_capture_tag(path: &Path, layout: &CaptureLayout) -> Result<Option<CaptureTag>> {
    let exif = match decode_metadata(path) {
        MetadataDecode::Decoded(exif) => exif,
        MetadataDecode::NoMetadata => {
            debug!("沒有 Exif 資料: {}", path.display());
            return Ok(None);
        }
        MetadataDecode::NotAnImage => {
            debug!("不是影像檔: {}", path.display());
            return Ok(None);
        }
        MetadataDecode::Failed(e) => return Err(e),
    };

    let field = exif
        .fields()
        .find(|field| field.ifd_num == In::PRIMARY && field.tag.number() == layout.tag_id);

    let Some(bytes) = field.and_then(|field| raw_bytes(&field.value)) else {
        debug!("找不到拍攝日期標籤: {}", path.display());
        return Ok(None);
    };

    Ok(Some(CaptureTag {
        raw: decode_ascii(bytes),
    }))
}

fn raw_bytes(value: &Value) -> Option<&[u8]> {
    match value {
        Value::Ascii(parts) => parts.first().map(Vec::as_slice),
        Value::Undefined(bytes, _) | Value::Byte(bytes) => Some(bytes.as_slice()),
        _ => None,
    }
}

/// 以 ASCII 解讀位元組，非 ASCII 字元以 `?` 取代，並移除結尾的 NUL
fn decode_ascii(bytes: &[u8]) -> String {
    let end = bytes
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);

    bytes[..end]
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}
