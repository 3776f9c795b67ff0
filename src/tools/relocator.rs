use super::capture_tag::YearMonth;
use crate::tools::ensure_directory_exists;
use anyhow::{Context, Result, bail};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 檔案的目標位置：`<原資料夾>/<年>/<月>/<檔名>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub directory: PathBuf,
    pub file_path: PathBuf,
}

impl Destination {
    pub fn resolve(file: &Path, year_month: &YearMonth) -> Result<Self> {
        let parent = file
            .parent()
            .with_context(|| format!("無法取得所在資料夾: {}", file.display()))?;
        let file_name = file
            .file_name()
            .with_context(|| format!("無法取得檔名: {}", file.display()))?;

        let directory = parent.join(&year_month.year).join(&year_month.month);
        let file_path = directory.join(file_name);

        Ok(Self {
            directory,
            file_path,
        })
    }
}

/// 移動檔案到目標位置
///
/// 目標資料夾不存在時建立後重試一次；目標檔案已存在則回報錯誤，不覆蓋
pub fn relocate(file: &Path, destination: &Destination) -> Result<()> {
    // rename 在來源不存在時同樣回傳 NotFound，先確認以免留下空的目標資料夾
    file.symlink_metadata()
        .with_context(|| format!("來源檔案不存在: {}", file.display()))?;

    if destination.file_path.symlink_metadata().is_ok() {
        bail!("目標檔案已存在: {}", destination.file_path.display());
    }

    match fs::rename(file, &destination.file_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("建立目標資料夾: {}", destination.directory.display());
            ensure_directory_exists(&destination.directory)?;
            fs::rename(file, &destination.file_path).with_context(|| {
                format!(
                    "移動檔案失敗: {} -> {}",
                    file.display(),
                    destination.file_path.display()
                )
            })
        }
        Err(e) => Err(e).with_context(|| {
            format!(
                "移動檔案失敗: {} -> {}",
                file.display(),
                destination.file_path.display()
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn year_month(year: &str, month: &str) -> YearMonth {
        YearMonth {
            year: year.to_string(),
            month: month.to_string(),
        }
    }

    #[test]
    fn test_resolve_destination() {
        let destination =
            Destination::resolve(Path::new("/photos/img_001.jpg"), &year_month("2019", "07"))
                .unwrap();

        assert_eq!(destination.directory, PathBuf::from("/photos/2019/07"));
        assert_eq!(
            destination.file_path,
            PathBuf::from("/photos/2019/07/img_001.jpg")
        );
    }

    #[test]
    fn test_resolve_destination_without_file_name() {
        assert!(Destination::resolve(Path::new("/"), &year_month("2019", "07")).is_err());
    }

    #[test]
    fn test_relocate_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("photo.jpg");
        fs::write(&source, "image").unwrap();

        let destination = Destination::resolve(&source, &year_month("2020", "02")).unwrap();
        relocate(&source, &destination).unwrap();

        assert!(!source.exists());
        assert!(temp_dir.path().join("2020").is_dir());
        assert_eq!(fs::read_to_string(&destination.file_path).unwrap(), "image");
    }

    #[test]
    fn test_relocate_into_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("photo.jpg");
        fs::write(&source, "image").unwrap();
        fs::create_dir_all(temp_dir.path().join("2020/02")).unwrap();

        let destination = Destination::resolve(&source, &year_month("2020", "02")).unwrap();
        relocate(&source, &destination).unwrap();

        assert!(destination.file_path.exists());
    }

    #[test]
    fn test_relocate_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("photo.jpg");
        fs::write(&source, "new").unwrap();
        fs::create_dir_all(temp_dir.path().join("2020/02")).unwrap();
        fs::write(temp_dir.path().join("2020/02/photo.jpg"), "old").unwrap();

        let destination = Destination::resolve(&source, &year_month("2020", "02")).unwrap();
        assert!(relocate(&source, &destination).is_err());

        // 兩個檔案都保持原狀
        assert_eq!(fs::read_to_string(&source).unwrap(), "new");
        assert_eq!(fs::read_to_string(&destination.file_path).unwrap(), "old");
    }

    #[test]
    fn test_relocate_missing_source_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("gone.jpg");

        let destination = Destination::resolve(&source, &year_month("2020", "02")).unwrap();
        assert!(relocate(&source, &destination).is_err());

        // 失敗時不應留下新建立的資料夾
        assert!(!temp_dir.path().join("2020").exists());
    }
}
