// 项目全局常量定义
// 所有魔法字符串和可复用常量统一在此维护

// ========== 版本信息 ==========

/// 内核版本号（自动从 Cargo.toml 读取，编译时确定）
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 项目名称
pub const APP_NAME: &str = "mdv";

/// 作者
pub const AUTHOR: &str = "lingojack";

/// 邮箱
pub const EMAIL: &str = "lingojack@qq.com";

// ========== Section 名称 ==========

/// 配置文件中的 section 名称常量
pub mod section {
    pub const PAGE: &str = "page";
    pub const LOG: &str = "log";
    pub const VERSION: &str = "version";
}

// ========== 配置 key ==========

/// 配置 key 名称常量
pub mod config_key {
    pub const MODE: &str = "mode";
    pub const VERBOSE: &str = "verbose";
    pub const CONCISE: &str = "concise";
    pub const SURFACE: &str = "surface";
    pub const PAGES_DIR: &str = "pages-dir";
}

// ========== 展示面 ==========

/// view 命令可用的展示面名称
pub mod surface_kind {
    pub const BROWSER: &str = "browser";
    pub const TERMINAL: &str = "terminal";
}

/// 默认展示面
pub const DEFAULT_SURFACE: &str = surface_kind::BROWSER;

// ========== 页面 ==========

/// 默认页面名（view 命令无参数时使用）
pub const DEFAULT_PAGE: &str = "markdown.md";

// ========== 命令名常量 ==========

/// 所有内置命令的名称和别名，统一在此维护
/// command/mod.rs 的分发与 set 命令的名字冲突检查共同引用
pub mod cmd {
    // 页面查看
    pub const VIEW: &[&str] = &["view", "show"];
    pub const EXPORT: &[&str] = &["export", "ex"];

    // 页面管理
    pub const LIST: &[&str] = &["ls", "list"];
    pub const SET: &[&str] = &["set", "s"];
    pub const REMOVE: &[&str] = &["rm", "remove"];

    // 系统设置
    pub const LOG: &[&str] = &["log"];

    // 系统信息
    pub const VERSION: &[&str] = &["version", "v"];
    pub const HELP: &[&str] = &["help", "h"];

    /// 获取所有内置命令关键字的扁平列表（用于判断页面名冲突等）
    pub fn all_keywords() -> Vec<&'static str> {
        let groups: &[&[&str]] = &[VIEW, EXPORT, LIST, SET, REMOVE, LOG, VERSION, HELP];
        groups.iter().flat_map(|g| g.iter().copied()).collect()
    }
}
