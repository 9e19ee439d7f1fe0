//! 笔记文本加载
//!
//! 只处理已经完成文本提取的纯文本笔记；
//! PDF / 表格的文本提取由上游协作方完成

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 读取单个笔记文本文件
///
/// # 参数
/// - `path`: 笔记文件路径
///
/// # 返回
/// 返回去掉首尾空白的笔记文本（可能为空）
pub async fn load_notes_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取笔记文件: {}", path.display()))?;

    Ok(content.trim().to_string())
}

/// 从文件夹中加载所有 txt 笔记文件
///
/// # 返回
/// 返回 (文件名主干, 笔记文本) 列表，按文件名排序；
/// 单个文件加载失败只记录警告并跳过
pub async fn load_all_notes_files(folder_path: &str) -> Result<Vec<(String, String)>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            paths.push(path);
        }
    }

    // 处理顺序与目录遍历顺序无关
    paths.sort();

    let mut notes = Vec::new();
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_notes_text(&path).await {
            Ok(text) => {
                tracing::info!("成功加载 {} 字符", text.chars().count());
                let stem = path.file_stem().unwrap_or_default().to_string_lossy().to_string();
                notes.push((stem, text));
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_notes_text_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lecture.txt");
        tokio::fs::write(&path, "  Inheritance allows code reuse.  \n")
            .await
            .unwrap();

        let text = load_notes_text(&path).await.unwrap();
        assert_eq!(text, "Inheritance allows code reuse.");
    }

    #[tokio::test]
    async fn test_load_all_notes_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("b.txt"), "second").await.unwrap();
        tokio::fs::write(dir.path().join("a.txt"), "first").await.unwrap();
        // 非 txt 文件应该被忽略
        tokio::fs::write(dir.path().join("c.pdf"), "binary").await.unwrap();

        let notes = load_all_notes_files(dir.path().to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0], ("a".to_string(), "first".to_string()));
        assert_eq!(notes[1], ("b".to_string(), "second".to_string()));
    }

    #[tokio::test]
    async fn test_load_all_notes_files_missing_folder() {
        let result = load_all_notes_files("目录肯定不存在/notes").await;
        assert!(result.is_err());
    }
}
