//! 回收信息文档加载器：将 JSON 事实文件与同目录的 TXT 出处文件合并为 [`Document`]

use anyhow::{Result, anyhow};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::types::{Document, DocumentMetadata};

/// JSON 中表示地区的键，不作为品目处理
const REGION_KEY: &str = "지역";

/// 按顺序拼接进文档内容的可选字段
const CONTENT_FIELDS: [&str; 4] = ["배출방법", "배출요일", "세척여부", "주의사항"];

const SOURCE_PREFIX: &str = "[경로]";
const URL_PREFIX: &str = "[URL]";

/// 从 TXT 文件中提取的出处信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInfo {
    pub source: Option<String>,
    pub url: Option<String>,
}

impl SourceInfo {
    /// 逐行解析出处字段，后出现的值覆盖先出现的值
    pub fn merge_text(&mut self, text: &str) {
        for line in text.trim().lines() {
            if let Some(rest) = line.strip_prefix(SOURCE_PREFIX) {
                self.source = Some(rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix(URL_PREFIX) {
                self.url = Some(rest.trim().to_string());
            }
        }
    }
}

pub struct DocumentLoader;

impl DocumentLoader {
    /// 加载目录（递归）下的所有文档。单个文件失败只记录日志，不会中断加载
    pub fn load_all_documents(directory: &Path) -> Vec<Document> {
        let mut all_docs = Vec::new();

        for folder in Self::json_folders(directory) {
            let source_info = Self::load_source_info(&folder);

            for json_file in Self::files_with_extension(&folder, "json") {
                match Self::load_json_file(&json_file, &source_info) {
                    Ok(docs) => {
                        debug!("{} 에서 {}개 문서 로드", json_file.display(), docs.len());
                        all_docs.extend(docs);
                    }
                    Err(e) => warn!("Error loading {}: {}", json_file.display(), e),
                }
            }
        }

        all_docs
    }

    /// 包含至少一个 JSON 文件的所有目录（排序后去重）
    fn json_folders(directory: &Path) -> BTreeSet<PathBuf> {
        WalkDir::new(directory)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("디렉토리 탐색 실패: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && has_extension(entry.path(), "json"))
            .filter_map(|entry| entry.path().parent().map(Path::to_path_buf))
            .collect()
    }

    /// 目录下（非递归）指定扩展名的文件，按文件名排序
    fn files_with_extension(folder: &Path, extension: &str) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(folder)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file() && has_extension(entry.path(), extension))
            .map(|entry| entry.into_path())
            .collect();
        files.sort();
        files
    }

    fn load_source_info(folder: &Path) -> SourceInfo {
        let mut info = SourceInfo::default();
        for txt in Self::files_with_extension(folder, "txt") {
            match std::fs::read_to_string(&txt) {
                Ok(content) => info.merge_text(&content),
                Err(e) => warn!("출처 파일 읽기 실패 {}: {}", txt.display(), e),
            }
        }
        info
    }

    fn load_json_file(json_file: &Path, source_info: &SourceInfo) -> Result<Vec<Document>> {
        let content = std::fs::read_to_string(json_file)?;
        let data: Value = serde_json::from_str(&content)?;
        let filename = json_file
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        documents_from_json(&data, &filename, source_info)
    }
}

/// 将一个 JSON 事实文件转换为文档列表：每个品目（值为对象）生成一个文档
pub fn documents_from_json(
    data: &Value,
    filename: &str,
    source_info: &SourceInfo,
) -> Result<Vec<Document>> {
    let object = data
        .as_object()
        .ok_or_else(|| anyhow!("최상위 JSON 값이 객체가 아닙니다"))?;

    let region = object
        .get(REGION_KEY)
        .map(render_value)
        .unwrap_or_default();

    let docs = object
        .iter()
        .filter(|(item_name, _)| item_name.as_str() != REGION_KEY)
        .filter_map(|(item_name, item_info)| {
            item_info
                .as_object()
                .map(|attrs| build_document(&region, item_name, attrs, filename, source_info))
        })
        .collect();

    Ok(docs)
}

fn build_document(
    region: &str,
    item_name: &str,
    attrs: &Map<String, Value>,
    filename: &str,
    source_info: &SourceInfo,
) -> Document {
    let mut content = format!("지역: {}\n품목: {}", region, item_name);
    for field in CONTENT_FIELDS {
        if let Some(value) = attrs.get(field).filter(|v| is_present(v)) {
            content.push_str(&format!("\n{}: {}", field, render_value(value)));
        }
    }

    let metadata = DocumentMetadata {
        item: item_name.to_string(),
        region: region.to_string(),
        filename: filename.to_string(),
        source: source_info.source.clone(),
        url: source_info.url.clone(),
    };

    Document::new(content, metadata)
}

/// 空字符串、空数组、空对象、null、false 和 0 都视为未填写
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
