//! ローカル画像の収集と読み込み
//!
//! ブラウザの input[type=file] に相当する。ファイル指定はそのまま、
//! フォルダ指定は直下の画像ファイルを対象にする。

use crate::error::{RecycleMeError, Result};
use async_trait::async_trait;
use base64::Engine;
use recycle_me_common::{to_data_url, ImageSource, SelectedFile};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 拡張子 → MIMEタイプ
const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
];

/// ローカルの画像ファイル
#[derive(Debug, Clone)]
pub struct LocalImage {
    pub path: PathBuf,
    pub file: SelectedFile,
}

impl LocalImage {
    /// 画像でない拡張子はNone
    pub fn from_path(path: &Path) -> Option<Self> {
        let mime_type = mime_type_for(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Some(Self {
            path: path.to_path_buf(),
            file: SelectedFile::new(name, mime_type, size),
        })
    }
}

#[async_trait(?Send)]
impl ImageSource for LocalImage {
    fn file(&self) -> SelectedFile {
        self.file.clone()
    }

    async fn read_data_url(&self) -> recycle_me_common::Result<String> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| recycle_me_common::Error::FileRead(format!("{}: {}", self.path.display(), e)))?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(to_data_url(&self.file.mime_type, &encoded))
    }
}

/// 拡張子からMIMEタイプを判定（大文字小文字は区別しない）
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

/// 指定パス群から画像を集める
///
/// - ファイル: 画像拡張子でなければ警告してスキップ
/// - フォルダ: 直下の画像をファイル名順で追加
pub fn collect_images(paths: &[PathBuf]) -> Result<Vec<LocalImage>> {
    let mut images = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(RecycleMeError::FileNotFound(path.display().to_string()));
        }

        if path.is_dir() {
            images.extend(scan_folder(path));
        } else if let Some(image) = LocalImage::from_path(path) {
            images.push(image);
        } else {
            tracing::warn!(path = %path.display(), "not an image file, skipped");
        }
    }

    Ok(images)
}

fn scan_folder(folder: &Path) -> Vec<LocalImage> {
    let mut images: Vec<LocalImage> = WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| LocalImage::from_path(e.path()))
        .collect();

    // ファイル名でソート
    images.sort_by(|a, b| a.file.name.cmp(&b.file.name));
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for(Path::new("a.jpg")), Some("image/jpeg"));
        assert_eq!(mime_type_for(Path::new("a.JPEG")), Some("image/jpeg"));
        assert_eq!(mime_type_for(Path::new("a.png")), Some("image/png"));
        assert_eq!(mime_type_for(Path::new("a.gif")), Some("image/gif"));
        assert_eq!(mime_type_for(Path::new("a.txt")), None);
        assert_eq!(mime_type_for(Path::new("noext")), None);
    }

    #[test]
    fn test_collect_images_not_found() {
        let result = collect_images(&[PathBuf::from("/nonexistent/folder")]);
        assert!(matches!(result, Err(RecycleMeError::FileNotFound(_))));
    }

    #[test]
    fn test_collect_images_from_folder() {
        let dir = tempdir().unwrap();
        let temp_dir = dir.path().to_path_buf();

        File::create(temp_dir.join("c.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("a.PNG")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("b.gif")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("readme.txt")).unwrap().write_all(b"text").unwrap();

        let result = collect_images(&[temp_dir.clone()]).unwrap();
        let names: Vec<_> = result.iter().map(|i| i.file.name.as_str()).collect();
        assert_eq!(names, vec!["a.PNG", "b.gif", "c.jpg"]);
        assert_eq!(result[0].file.mime_type, "image/png");
        assert_eq!(result[2].file.size, 5);
    }

    #[tokio::test]
    async fn test_read_data_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hello.png");
        File::create(&path).unwrap().write_all(b"hello").unwrap();

        let image = LocalImage::from_path(&path).unwrap();
        let data_url = image.read_data_url().await.unwrap();
        assert_eq!(data_url, "data:image/png;base64,aGVsbG8=");
    }
}
