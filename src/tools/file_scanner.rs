use anyhow::Result;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 列出資料夾第一層的檔案，不進入子資料夾，依檔名排序
///
/// 指向檔案的符號連結也會列出；移動時移動的是連結本身
pub fn scan_directory_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let files = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("無法讀取目錄項目: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect();

    Ok(files)
}
