use crate::bundle::{Bundle, MarkdownPage};
use crate::config::YamlConfig;
use crate::render;
use crate::{debug_log, error, info};
use std::fs;
use std::path::Path;

/// 处理 export 命令: mdv export <name> [-o out.html]
/// 与 view 相同的转换管线，结果写入文件而不是展示面
pub fn handle_export(name: &str, out: Option<&str>, config: &YamlConfig) {
    let bundle = Bundle::from_config(config);

    let page = match MarkdownPage::try_load(name, &bundle) {
        Ok(page) => page,
        Err(e) => {
            error!("❌ {}", e);
            return;
        }
    };

    let Some(body) = page.html() else {
        // 不应该走到这里（try_load 成功时 raw 必有内容）
        error!("❌ 页面 {{{}}} 没有可导出的内容", page.name());
        return;
    };
    let html = render::html_document(page.name(), &body);

    // 输出路径：未指定时取当前目录下 <主名>.html
    let out_path = match out {
        Some(path) => path.to_string(),
        None => default_out_path(page.name()),
    };
    debug_log!(config, "export target: {}", out_path);

    match fs::write(&out_path, &html) {
        Ok(()) => info!("✅ 已导出 {{{}}} 到 {{{}}}", page.name(), out_path),
        Err(e) => error!("💥 写入 {} 失败: {}", out_path, e),
    }
}

/// 默认导出文件名：页面主名加 .html
fn default_out_path(page_name: &str) -> String {
    let stem = Path::new(page_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("page");
    format!("{stem}.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_path_strips_extension() {
        assert_eq!(default_out_path("markdown.md"), "markdown.html");
        assert_eq!(default_out_path("notes"), "notes.html");
    }
}
