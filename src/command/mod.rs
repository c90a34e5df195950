pub mod export;
pub mod list;
pub mod register;
pub mod system;
pub mod view;

use crate::cli::SubCmd;
use crate::config::YamlConfig;

/// 命令分发执行
pub fn dispatch(subcmd: SubCmd, config: &mut YamlConfig) {
    match subcmd {
        // 页面查看
        SubCmd::View { name, terminal } => view::handle_view(name.as_deref(), terminal, config),
        SubCmd::Export { name, out } => export::handle_export(&name, out.as_deref(), config),

        // 页面管理
        SubCmd::Ls => list::handle_list(config),
        SubCmd::Set { name, path } => register::handle_set(&name, &path, config),
        SubCmd::Rm { name } => register::handle_remove(&name, config),

        // 系统设置
        SubCmd::Log { key, value } => system::handle_log(&key, &value, config),

        // 系统信息
        SubCmd::Version => system::handle_version(config),
        SubCmd::Help => system::handle_help(),
    }
}
