//! Markdown → HTML 转换与文档包装

use pulldown_cmark::{Options, Parser, html};

/// 将 Markdown 文本转换为 HTML 片段
///
/// 启用表格和删除线扩展，对合法 UTF-8 输入总是成功
pub fn markdown_to_html(md: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(md, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// 将 HTML 片段包装为完整文档，`<title>` 为页面名
pub fn html_document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         <style>\n\
         body {{ max-width: 46rem; margin: 2rem auto; padding: 0 1rem; \
         font-family: -apple-system, \"Segoe UI\", \"Helvetica Neue\", sans-serif; line-height: 1.6; }}\n\
         pre {{ background: #f6f8fa; padding: 1em; overflow-x: auto; }}\n\
         table {{ border-collapse: collapse; }}\n\
         td, th {{ border: 1px solid #ccc; padding: 0.3em 0.8em; }}\n\
         </style>\n\
         </head>\n\
         <body>\n{}</body>\n\
         </html>\n",
        escape_title(title),
        body
    )
}

/// 转义 `<title>` 中的特殊字符
fn escape_title(title: &str) -> String {
    title
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
