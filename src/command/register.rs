use crate::bundle::expand_tilde;
use crate::config::YamlConfig;
use crate::constants::{cmd, section};
use crate::util::remove_quotes;
use crate::{error, info, usage};
use std::path::Path;

/// 处理 set 命令: mdv set <name> <path...>
/// 把一个本地 Markdown 文件注册为页面
pub fn handle_set(name: &str, path_parts: &[String], config: &mut YamlConfig) {
    if path_parts.is_empty() {
        usage!("mdv set <name> <path>");
        return;
    }

    // 检查页面名是否与内置命令冲突
    if cmd::all_keywords().contains(&name) {
        error!("页面名 `{}` 已经是预设命令，请换一个。 😢", name);
        return;
    }

    // 处理路径中包含空格的情况：将多个参数拼接
    let path = path_parts.join(" ");
    let path = remove_quotes(&path);
    let path = path.replace("\\ ", " ");

    if !Path::new(&expand_tilde(&path)).exists() {
        info!("⚠️ 注意：该路径当前不存在: {}", path);
    }

    let old_value = config.get_property(section::PAGE, name).cloned();
    config.set_property(section::PAGE, name, &path);

    match old_value {
        Some(old) => info!("✅ 已更新页面 {{{}}} : {{{}}}，旧路径为 {{{}}}", name, path, old),
        None => info!("✅ 已注册页面 {{{}}} : {{{}}}", name, path),
    }
}

/// 处理 rm 命令: mdv rm <name>
pub fn handle_remove(name: &str, config: &mut YamlConfig) {
    if config.contains(section::PAGE, name) {
        config.remove_property(section::PAGE, name);
        info!("成功移除页面 {} ✅", name);
    } else {
        error!("页面 {} 不存在 ❌", name);
    }
}
