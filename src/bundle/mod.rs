//! 页面命名空间
//!
//! 只读、按名字索引的页面存储，分三层，解析顺序固定：
//!
//! 1. 配置 `page` section 中注册的本地文件（名字精确匹配）
//! 2. 用户页面目录（先全名匹配，再按文件名字典序做主名匹配）
//! 3. 编译时嵌入的内置页面（按声明顺序，先全名后主名）
//!
//! 同一份来源下重复解析同一个名字，结果保证一致。

mod page;

pub use page::{MarkdownPage, PageError};

use crate::config::YamlConfig;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 页面名的解析结果：命中的具体来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// 用户注册的本地文件
    Registered(PathBuf),
    /// 用户页面目录中的文件
    PagesDir(PathBuf),
    /// 编译时嵌入的内置页面: (名字, 内容)
    Embedded(&'static str, &'static str),
}

/// 页面命名空间
///
/// 查找能力通过构造注入，测试时可以用内存中的页面表替换
#[derive(Debug, Clone)]
pub struct Bundle {
    registered: BTreeMap<String, String>,
    pages_dir: Option<PathBuf>,
    embedded: &'static [(&'static str, &'static str)],
}

impl Bundle {
    /// 构造页面命名空间
    pub fn new(
        registered: BTreeMap<String, String>,
        pages_dir: Option<PathBuf>,
        embedded: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            registered,
            pages_dir,
            embedded,
        }
    }

    /// 从配置构造完整的三层命名空间
    pub fn from_config(config: &YamlConfig) -> Self {
        Self::new(
            config.page.clone(),
            Some(config.pages_dir()),
            crate::assets::EMBEDDED_PAGES,
        )
    }

    /// 解析页面名，返回命中的来源（不读取内容）
    pub fn resolve(&self, token: &str) -> Option<PageSource> {
        // 1. 注册页面：名字精确匹配
        if let Some(path) = self.registered.get(token) {
            return Some(PageSource::Registered(PathBuf::from(expand_tilde(path))));
        }

        // 2. 用户页面目录
        if let Some(path) = self.resolve_in_pages_dir(token) {
            return Some(PageSource::PagesDir(path));
        }

        // 3. 内置页面：先全名，后主名，均按声明顺序
        for (name, content) in self.embedded.iter().copied() {
            if name == token {
                return Some(PageSource::Embedded(name, content));
            }
        }
        for (name, content) in self.embedded.iter().copied() {
            if stem(name) == token {
                return Some(PageSource::Embedded(name, content));
            }
        }

        None
    }

    /// 解析并读取页面内容（UTF-8 解码）
    pub fn read(&self, token: &str) -> Result<String, PageError> {
        let source = self.resolve(token).ok_or_else(|| PageError::NotFound {
            name: token.to_string(),
        })?;

        match source {
            PageSource::Registered(path) | PageSource::PagesDir(path) => fs::read_to_string(&path)
                .map_err(|source| PageError::Read {
                    name: token.to_string(),
                    source,
                }),
            PageSource::Embedded(_, content) => Ok(content.to_string()),
        }
    }

    /// 用户页面目录中的文件名列表（字典序，只含普通文件）
    pub fn pages_dir_entries(&self) -> Vec<String> {
        let Some(dir) = &self.pages_dir else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().to_str().map(|s| s.to_string()))
            .collect();
        // read_dir 的顺序与平台有关，排序后保证主名匹配结果稳定
        names.sort();
        names
    }

    /// 注册页面表
    pub fn registered(&self) -> &BTreeMap<String, String> {
        &self.registered
    }

    /// 内置页面名列表（声明顺序）
    pub fn embedded_names(&self) -> Vec<&'static str> {
        self.embedded.iter().map(|(name, _)| *name).collect()
    }

    /// 所有可见页面名（按层去重，高层遮蔽低层的同名页面）
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.registered.keys() {
            if !names.iter().any(|n| n == name) {
                names.push(name.clone());
            }
        }
        for name in self.pages_dir_entries() {
            if !names.iter().any(|n| *n == name) {
                names.push(name);
            }
        }
        for name in self.embedded_names() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// 在用户页面目录中解析：先全名，再按字典序做主名匹配
    fn resolve_in_pages_dir(&self, token: &str) -> Option<PathBuf> {
        let dir = self.pages_dir.as_ref()?;
        let entries = self.pages_dir_entries();
        if entries.iter().any(|n| n == token) {
            return Some(dir.join(token));
        }
        entries.iter().find(|n| stem(n) == token).map(|n| dir.join(n))
    }
}

/// 文件名的主名（去掉最后一个扩展名）
fn stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

/// 展开路径开头的 ~
pub(crate) fn expand_tilde(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            if path == "~" {
                return home.to_string_lossy().to_string();
            } else if path.starts_with("~/") {
                return format!("{}{}", home.to_string_lossy(), &path[1..]);
            }
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const EMBEDDED: &[(&str, &str)] = &[
        ("markdown.md", "# 内置页面"),
        ("help.md", "# 帮助"),
    ];

    fn disk_bundle(dir: &Path) -> Bundle {
        Bundle::new(BTreeMap::new(), Some(dir.to_path_buf()), EMBEDDED)
    }

    #[test]
    fn embedded_exact_and_stem_match() {
        let bundle = Bundle::new(BTreeMap::new(), None, EMBEDDED);
        assert_eq!(
            bundle.resolve("markdown.md"),
            Some(PageSource::Embedded("markdown.md", "# 内置页面"))
        );
        // 不带扩展名也能命中
        assert_eq!(
            bundle.resolve("help"),
            Some(PageSource::Embedded("help.md", "# 帮助"))
        );
        assert_eq!(bundle.resolve("missing.md"), None);
    }

    #[test]
    fn pages_dir_exact_match_beats_stem_match() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("page"), "bare").unwrap();
        fs::write(tmp.path().join("page.md"), "with ext").unwrap();

        let bundle = disk_bundle(tmp.path());
        assert_eq!(
            bundle.resolve("page"),
            Some(PageSource::PagesDir(tmp.path().join("page")))
        );
    }

    #[test]
    fn stem_collision_resolves_lexicographically_and_deterministically() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("page.txt"), "txt").unwrap();
        fs::write(tmp.path().join("page.md"), "md").unwrap();

        let bundle = disk_bundle(tmp.path());
        // page.md < page.txt，字典序靠前的胜出
        for _ in 0..3 {
            assert_eq!(
                bundle.resolve("page"),
                Some(PageSource::PagesDir(tmp.path().join("page.md")))
            );
        }
    }

    #[test]
    fn registered_shadows_pages_dir_and_embedded() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("markdown.md"), "目录版本").unwrap();
        let elsewhere = tmp.path().join("elsewhere.md");
        fs::write(&elsewhere, "注册版本").unwrap();

        let mut registered = BTreeMap::new();
        registered.insert(
            "markdown.md".to_string(),
            elsewhere.to_string_lossy().to_string(),
        );
        let bundle = Bundle::new(registered, Some(tmp.path().to_path_buf()), EMBEDDED);

        assert_eq!(bundle.read("markdown.md").unwrap(), "注册版本");
    }

    #[test]
    fn pages_dir_shadows_embedded() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("markdown.md"), "目录版本").unwrap();

        let bundle = disk_bundle(tmp.path());
        assert_eq!(bundle.read("markdown.md").unwrap(), "目录版本");
    }

    #[test]
    fn read_missing_is_not_found() {
        let bundle = Bundle::new(BTreeMap::new(), None, EMBEDDED);
        match bundle.read("missing.md") {
            Err(PageError::NotFound { name }) => assert_eq!(name, "missing.md"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn read_invalid_utf8_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("bad.md"), [0xff_u8, 0xfe, 0xfd]).unwrap();

        let bundle = disk_bundle(tmp.path());
        match bundle.read("bad.md") {
            Err(PageError::Read { name, .. }) => assert_eq!(name, "bad.md"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn all_embedded_assets_load_and_render() {
        let bundle = Bundle::new(BTreeMap::new(), None, crate::assets::EMBEDDED_PAGES);
        for name in bundle.embedded_names() {
            let page = MarkdownPage::load(name, &bundle);
            assert!(page.raw().is_some(), "{name}");
            assert!(page.html().is_some(), "{name}");
        }
    }

    #[test]
    fn names_dedup_by_layer() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("markdown.md"), "目录版本").unwrap();
        fs::write(tmp.path().join("notes.md"), "笔记").unwrap();

        let bundle = disk_bundle(tmp.path());
        let names = bundle.names();
        assert_eq!(names, vec!["markdown.md", "notes.md", "help.md"]);
    }
}
