//! 依拍攝日期整理照片元件
//!
//! 讀取資料夾第一層影像的 Exif 拍攝日期，移動到 `<年>/<月>` 子資料夾

mod main;
mod photo_organizer;

pub use main::{DateSorter, SortOutcome};
pub use photo_organizer::{FileOutcome, OrganizeSummary, PhotoOrganizer};
