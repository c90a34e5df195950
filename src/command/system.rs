use crate::assets::{HELP_TEXT, VERSION_TEMPLATE};
use crate::config::YamlConfig;
use crate::constants::{self, config_key, section};
use crate::{info, md, usage};

/// 处理 version 命令: mdv version
pub fn handle_version(config: &YamlConfig) {
    let mut extra = String::new();

    // 收集自定义版本信息
    if let Some(version_map) = config.get_section(section::VERSION) {
        for (key, value) in version_map {
            if key == "email" || key == "author" {
                continue;
            }
            extra.push_str(&format!("| {} | {} |\n", key, value));
        }
    }

    let text = VERSION_TEMPLATE
        .replace("{version}", constants::VERSION)
        .replace("{os}", std::env::consts::OS)
        .replace("{extra}", &extra);
    md!("{}", text);
}

/// 处理 help 命令: mdv help
pub fn handle_help() {
    md!("{}", HELP_TEXT);
}

/// 处理 log 命令: mdv log mode <verbose|concise>
pub fn handle_log(key: &str, value: &str, config: &mut YamlConfig) {
    if key == config_key::MODE {
        let mode = if value == config_key::VERBOSE {
            config_key::VERBOSE
        } else {
            config_key::CONCISE
        };
        config.set_property(section::LOG, config_key::MODE, mode);
        info!("✅ 日志模式已切换为: {}", mode);
    } else {
        usage!("mdv log mode <verbose|concise>");
    }
}
