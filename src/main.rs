mod assets;
mod bundle;
mod cli;
mod command;
mod config;
mod constants;
mod render;
mod surface;
mod util;

use clap::Parser;
use cli::Cli;
use config::YamlConfig;

fn main() {
    // 加载配置
    let mut config = YamlConfig::load();

    let verbose = config.is_verbose();
    let start = if verbose {
        Some(std::time::Instant::now())
    } else {
        None
    };

    // 检查是否有命令行参数
    // 如果 argv 只有一个元素（程序名），查看默认页面
    let raw_args: Vec<String> = std::env::args().collect();
    if raw_args.len() <= 1 {
        command::view::handle_view(None, false, &config);
        return;
    }

    // 尝试用 clap 解析命令
    // 如果用户输入的是 `mdv <页面名>` 这种非子命令形式，clap 会解析失败
    // 这时候我们 fallback 到按页面名查看的逻辑
    let cli = Cli::try_parse();

    match cli {
        Ok(cli) => {
            match cli.command {
                Some(subcmd) => {
                    command::dispatch(subcmd, &mut config);
                }
                None => {
                    if cli.args.is_empty() {
                        // 不应该走到这里（已在上面处理了无参数情况）
                        command::view::handle_view(None, false, &config);
                    } else {
                        // 带参数但没匹配到子命令 → 按页面名查看
                        command::view::handle_view(Some(&cli.args[0]), false, &config);
                    }
                }
            }
        }
        Err(_) => {
            // clap 解析失败，可能是用户输入了页面名
            // 例如: mdv readme
            command::view::handle_view(Some(&raw_args[1]), false, &config);
        }
    }

    if let Some(start) = start {
        let elapsed = start.elapsed();
        debug_log!(config, "duration: {} ms", elapsed.as_millis());
    }
}
