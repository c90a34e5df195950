use super::Bundle;
use crate::render;
use thiserror::Error;

/// 页面加载失败的类型
///
/// 区分"找不到"和"读取失败"，调用方可以按失败种类选择提示
#[derive(Debug, Error)]
pub enum PageError {
    /// 名字在命名空间中没有任何匹配
    #[error("找不到页面: {name}")]
    NotFound { name: String },

    /// 匹配到了文件但读取或解码失败
    #[error("读取页面 {name} 失败: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// 一个按名字加载的 Markdown 页面
///
/// 构造时同步地在注入的命名空间中解析并读取一次，之后不可变。
/// 名字同时用作查找 key 和展示标题。
#[derive(Debug, Clone)]
pub struct MarkdownPage {
    name: String,
    raw: Option<String>,
}

impl MarkdownPage {
    /// 加载页面，失败时只记录日志，`raw` 置空
    ///
    /// 永远构造成功，调用方通过 `raw()` 是否为 `None` 判断降级
    pub fn load(name: &str, bundle: &Bundle) -> Self {
        let raw = match bundle.read(name) {
            Ok(text) => Some(text),
            Err(e) => {
                crate::error!("{}", e);
                None
            }
        };
        Self {
            name: name.to_string(),
            raw,
        }
    }

    /// 加载页面，失败时返回具体的失败类型
    ///
    /// 成功返回的页面 `raw()` 一定有内容
    pub fn try_load(name: &str, bundle: &Bundle) -> Result<Self, PageError> {
        let raw = bundle.read(name)?;
        Ok(Self {
            name: name.to_string(),
            raw: Some(raw),
        })
    }

    /// 页面名（查找 key，同时用作展示标题）
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 原始 Markdown 文本
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// HTML 表示：对 `raw` 的纯函数，不做缓存
    ///
    /// `raw` 为空时返回 `None`，否则每次调用重新转换
    pub fn html(&self) -> Option<String> {
        self.raw.as_deref().map(render::markdown_to_html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const EMBEDDED: &[(&str, &str)] = &[("hello.md", "# Hello")];

    fn bundle() -> Bundle {
        Bundle::new(BTreeMap::new(), None, EMBEDDED)
    }

    #[test]
    fn load_present_page_has_raw_and_html() {
        let page = MarkdownPage::load("hello.md", &bundle());
        assert_eq!(page.name(), "hello.md");
        assert_eq!(page.raw(), Some("# Hello"));
        let html = page.html().unwrap();
        assert!(html.starts_with("<h1>Hello</h1>"));
    }

    #[test]
    fn load_missing_page_degrades_without_panic() {
        let page = MarkdownPage::load("missing.md", &bundle());
        assert_eq!(page.name(), "missing.md");
        assert!(page.raw().is_none());
        assert!(page.html().is_none());
    }

    #[test]
    fn try_load_missing_page_is_not_found() {
        match MarkdownPage::try_load("missing.md", &bundle()) {
            Err(PageError::NotFound { name }) => assert_eq!(name, "missing.md"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn html_is_none_iff_raw_is_none() {
        let present = MarkdownPage::load("hello.md", &bundle());
        let absent = MarkdownPage::load("missing.md", &bundle());
        assert_eq!(present.raw().is_none(), present.html().is_none());
        assert_eq!(absent.raw().is_none(), absent.html().is_none());
    }

    #[test]
    fn html_is_idempotent() {
        let page = MarkdownPage::load("hello.md", &bundle());
        assert_eq!(page.html(), page.html());
    }
}
