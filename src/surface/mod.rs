//! 展示面：接收 HTML 标记并展示给用户

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use url::Url;

/// 展示失败的类型
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// 预览文件写不进去
    #[error("写入预览文件失败: {0}")]
    Write(#[source] std::io::Error),

    /// 系统打开命令起不来
    #[error("调起系统打开命令失败: {0}")]
    Open(#[source] std::io::Error),
}

/// 渲染展示面：接收 `(HTML, 可选 base URL)` 并展示
///
/// 核心路径总是传 `base_url = None`，页面内的相对链接不保证可用
pub trait Surface {
    fn load_html(&self, html: &str, base_url: Option<&Url>) -> Result<(), SurfaceError>;
}

/// 系统浏览器展示面
///
/// 把文档写入预览目录，再用系统默认程序打开
#[derive(Debug)]
pub struct BrowserSurface {
    preview_dir: PathBuf,
    file_name: String,
}

impl BrowserSurface {
    pub fn new(preview_dir: PathBuf, page_name: &str) -> Self {
        Self {
            preview_dir,
            file_name: preview_file_name(page_name),
        }
    }

    /// 预览文件的完整路径
    pub fn preview_path(&self) -> PathBuf {
        self.preview_dir.join(&self.file_name)
    }
}

impl Surface for BrowserSurface {
    fn load_html(&self, html: &str, _base_url: Option<&Url>) -> Result<(), SurfaceError> {
        // 文件预览的相对链接以预览目录为基准，显式 base_url 不生效
        fs::create_dir_all(&self.preview_dir).map_err(SurfaceError::Write)?;
        let path = self.preview_path();
        fs::write(&path, html).map_err(SurfaceError::Write)?;
        do_open(&path.to_string_lossy()).map_err(SurfaceError::Open)
    }
}

/// 页面名 -> 预览文件名（主名加 .html）
fn preview_file_name(page_name: &str) -> String {
    let stem = Path::new(page_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("page");
    format!("{stem}.html")
}

/// 跨平台 open 命令
fn do_open(path: &str) -> std::io::Result<()> {
    let os = std::env::consts::OS;
    let result = if os == "macos" {
        Command::new("open").arg(path).status()
    } else if os == "windows" {
        Command::new("cmd").args(["/c", "start", "", path]).status()
    } else {
        // Linux fallback
        Command::new("xdg-open").arg(path).status()
    };

    result.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn preview_file_name_uses_stem() {
        assert_eq!(preview_file_name("markdown.md"), "markdown.html");
        assert_eq!(preview_file_name("notes"), "notes.html");
        assert_eq!(preview_file_name(""), "page.html");
    }

    /// 记录型展示面，验证调用方传入的内容
    struct RecordingSurface {
        loaded: RefCell<Vec<(String, Option<Url>)>>,
    }

    impl Surface for RecordingSurface {
        fn load_html(&self, html: &str, base_url: Option<&Url>) -> Result<(), SurfaceError> {
            self.loaded
                .borrow_mut()
                .push((html.to_string(), base_url.cloned()));
            Ok(())
        }
    }

    #[test]
    fn surface_receives_html_and_no_base_url() {
        let surface = RecordingSurface {
            loaded: RefCell::new(Vec::new()),
        };
        let doc = crate::render::html_document("markdown.md", "<h1>Hi</h1>\n");
        surface.load_html(&doc, None).unwrap();

        let loaded = surface.loaded.borrow();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].0.contains("<title>markdown.md</title>"));
        assert!(loaded[0].1.is_none());
    }
}
