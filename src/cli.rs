use clap::{Parser, Subcommand};

/// mdv - 内置 Markdown 页面查看器 📖
#[derive(Parser, Debug)]
#[command(name = "mdv", version = "1.3.0", about = "内置 Markdown 页面查看器", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<SubCmd>,

    /// 当没有匹配到子命令时，收集所有剩余参数（用作页面名）
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum SubCmd {
    // ========== 页面查看 ==========
    /// 查看页面（默认在浏览器中打开）
    #[command(alias = "show")]
    View {
        /// 页面名（省略时为 markdown.md）
        name: Option<String>,
        /// 在终端中渲染而不是打开浏览器
        #[arg(long)]
        terminal: bool,
    },

    /// 导出页面为 HTML 文件
    #[command(alias = "ex")]
    Export {
        /// 页面名
        name: String,
        /// 输出文件路径（省略时为 ./<主名>.html）
        #[arg(short, long)]
        out: Option<String>,
    },

    // ========== 页面管理 ==========
    /// 列出所有可见页面
    #[command(alias = "list")]
    Ls,

    /// 注册本地 Markdown 文件为页面
    #[command(alias = "s")]
    Set {
        /// 页面名
        name: String,
        /// 文件路径（支持空格，多个参数会拼接）
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        path: Vec<String>,
    },

    /// 取消注册页面
    #[command(alias = "remove")]
    Rm {
        /// 要移除的页面名
        name: String,
    },

    // ========== 系统设置 ==========
    /// 日志模式设置
    Log {
        /// 设置项名称（如 mode）
        key: String,
        /// 设置值（如 verbose/concise）
        value: String,
    },

    // ========== 系统信息 ==========
    /// 版本信息
    #[command(alias = "v")]
    Version,

    /// 帮助信息
    #[command(alias = "h")]
    Help,
}
