use crate::bundle::Bundle;
use crate::config::YamlConfig;
use crate::md;

/// 处理 ls 命令: mdv ls
/// 按层列出所有可见页面
pub fn handle_list(config: &YamlConfig) {
    let bundle = Bundle::from_config(config);
    let mut md_text = String::new();

    // 注册页面（名字 → 路径）
    if !bundle.registered().is_empty() {
        md_text.push_str("## 注册页面\n");
        for (name, path) in bundle.registered() {
            md_text.push_str(&format!("- {} → {}\n", name, path));
        }
        md_text.push('\n');
    }

    // 用户页面目录
    let dir_entries = bundle.pages_dir_entries();
    if !dir_entries.is_empty() {
        md_text.push_str(&format!(
            "## 用户页面 ({})\n",
            config.pages_dir().display()
        ));
        for name in &dir_entries {
            md_text.push_str(&format!("- {}\n", name));
        }
        md_text.push('\n');
    }

    // 内置页面
    md_text.push_str("## 内置页面\n");
    for name in bundle.embedded_names() {
        md_text.push_str(&format!("- {}\n", name));
    }

    md!("{}", md_text);
}
