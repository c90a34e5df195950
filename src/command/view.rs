use crate::bundle::{Bundle, MarkdownPage, PageError};
use crate::config::YamlConfig;
use crate::constants::{DEFAULT_PAGE, surface_kind};
use crate::render;
use crate::surface::{BrowserSurface, Surface};
use crate::{debug_log, error, info, md};

/// 处理 view 命令: mdv view [name] [--terminal]
/// 也是 `mdv <页面名>` 和无参数 `mdv` 的落点
pub fn handle_view(name: Option<&str>, terminal: bool, config: &YamlConfig) {
    let name = name.unwrap_or(DEFAULT_PAGE);
    let bundle = Bundle::from_config(config);

    // 按失败种类提示，而不是静默展示空白页
    let page = match MarkdownPage::try_load(name, &bundle) {
        Ok(page) => page,
        Err(PageError::NotFound { name }) => {
            error!("❌ 找不到页面 {{{}}}。", name);
            info!("当前可见页面: {}", bundle.names().join(", "));
            return;
        }
        Err(e @ PageError::Read { .. }) => {
            error!("💥 {}", e);
            return;
        }
    };

    // 终端展示面：直接渲染原始 Markdown
    if terminal || config.surface() == surface_kind::TERMINAL {
        if let Some(raw) = page.raw() {
            md!("{}", raw);
        }
        return;
    }

    // 浏览器展示面：转换为 HTML，包上标题，交给系统浏览器
    let Some(body) = page.html() else {
        // 不应该走到这里（try_load 成功时 raw 必有内容）
        error!("❌ 页面 {{{}}} 没有可展示的内容", page.name());
        return;
    };
    let html = render::html_document(page.name(), &body);
    debug_log!(config, "html size: {} bytes", html.len());

    let surface = BrowserSurface::new(YamlConfig::preview_dir(), page.name());
    match surface.load_html(&html, None) {
        Ok(()) => info!("✅ 已在浏览器中打开 {{{}}}", page.name()),
        Err(e) => error!("💥 {}", e),
    }
}
