//! 编译时嵌入资源统一管理
//!
//! 所有通过 `include_str!` 嵌入的外部资源都在此模块集中管理，
//! 便于维护和追踪。
//!
//! # 资源清单
//!
//! | 资源名称 | 类型 | 路径 | 用途 |
//! |---------|------|------|------|
//! | `MARKDOWN_PAGE` | 文本 | `assets/markdown.md` | 默认内置页面 |
//! | `HELP_TEXT` | 文本 | `assets/help.md` | 帮助命令输出 |
//! | `VERSION_TEMPLATE` | 文本 | `assets/version.md` | 版本命令模板 |

// ========== 文本资源 ==========

/// 默认内置页面
///
/// 用途: `mdv` 无参数时展示的页面
/// 格式: Markdown
pub const MARKDOWN_PAGE: &str = include_str!("../assets/markdown.md");

/// 帮助文档内容
///
/// 用途: `mdv help` 命令输出，同时作为内置页面 `help.md`
/// 格式: Markdown
pub const HELP_TEXT: &str = include_str!("../assets/help.md");

/// 版本信息模板
///
/// 用途: `mdv version` 命令输出
/// 占位符: `{version}`, `{os}`, `{extra}`
/// 格式: Markdown 表格
pub const VERSION_TEMPLATE: &str = include_str!("../assets/version.md");

// ========== 内置页面命名空间 ==========

/// 内置页面表：按名字索引的只读命名空间
///
/// 声明顺序即解析顺序，bundle 模块按此表做名字匹配
pub const EMBEDDED_PAGES: &[(&str, &str)] = &[
    ("markdown.md", MARKDOWN_PAGE),
    ("help.md", HELP_TEXT),
];
