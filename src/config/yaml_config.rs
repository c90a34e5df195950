use crate::constants::{self, config_key};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// YAML 配置文件的完整结构
/// 使用 BTreeMap 保持键的有序性，保证序列化结果稳定
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct YamlConfig {
    /// 用户注册的页面: 名字 -> 本地文件路径
    #[serde(default)]
    pub page: BTreeMap<String, String>,

    #[serde(default)]
    pub setting: BTreeMap<String, String>,

    #[serde(default)]
    pub log: BTreeMap<String, String>,

    #[serde(default)]
    pub version: BTreeMap<String, String>,

    /// 捕获未知的顶级键，保证不丢失任何配置
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl YamlConfig {
    /// 获取数据根目录: ~/.mdvdata/
    pub fn data_dir() -> PathBuf {
        // 优先使用环境变量指定的数据路径
        if let Ok(path) = std::env::var("MDV_DATA_PATH") {
            return PathBuf::from(path);
        }
        // 默认路径: ~/.mdvdata/
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mdvdata")
    }

    /// 获取配置文件路径: ~/.mdvdata/config.yaml
    fn config_path() -> PathBuf {
        Self::data_dir().join("config.yaml")
    }

    /// 获取用户页面目录: ~/.mdvdata/pages/（可被 setting.pages-dir 覆盖）
    pub fn pages_dir(&self) -> PathBuf {
        match self.setting.get(config_key::PAGES_DIR) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => Self::data_dir().join("pages"),
        }
    }

    /// 获取浏览器预览文件目录: ~/.mdvdata/preview/
    pub fn preview_dir() -> PathBuf {
        Self::data_dir().join("preview")
    }

    /// 从配置文件加载
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            // 配置文件不存在，创建默认配置
            let config = Self::default_config();
            config.save();
            return config;
        }

        let content = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("[ERROR] 读取配置文件失败: {}, 路径: {:?}", e, path);
            String::new()
        });

        serde_yaml::from_str(&content).unwrap_or_else(|e| {
            eprintln!("[ERROR] 解析配置文件失败: {}, 路径: {:?}", e, path);
            Self::default_config()
        })
    }

    /// 保存配置到文件
    pub fn save(&self) {
        let path = Self::config_path();

        // 确保目录存在
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                eprintln!("[ERROR] 创建配置目录失败: {}", e);
            });
        }

        let content = serde_yaml::to_string(self).unwrap_or_else(|e| {
            eprintln!("[ERROR] 序列化配置失败: {}", e);
            String::new()
        });

        fs::write(&path, content).unwrap_or_else(|e| {
            eprintln!("[ERROR] 保存配置文件失败: {}, 路径: {:?}", e, path);
        });
    }

    /// 创建默认配置
    fn default_config() -> Self {
        let mut config = Self::default();

        // 版本信息
        config
            .version
            .insert("name".into(), constants::APP_NAME.into());
        config
            .version
            .insert("author".into(), constants::AUTHOR.into());
        config.version.insert("email".into(), constants::EMAIL.into());

        // 日志模式
        config.log.insert("mode".into(), "concise".into());

        // 默认展示面
        config.setting.insert("surface".into(), "browser".into());

        config
    }

    /// 是否是 verbose 模式
    pub fn is_verbose(&self) -> bool {
        self.log.get("mode").map_or(false, |m| m == "verbose")
    }

    /// view 命令使用的展示面（browser/terminal）
    pub fn surface(&self) -> &str {
        self.setting
            .get(config_key::SURFACE)
            .map(|s| s.as_str())
            .unwrap_or(constants::DEFAULT_SURFACE)
    }

    /// 按名字获取 section
    pub fn get_section(&self, section: &str) -> Option<&BTreeMap<String, String>> {
        match section {
            "page" => Some(&self.page),
            "setting" => Some(&self.setting),
            "log" => Some(&self.log),
            "version" => Some(&self.version),
            _ => None,
        }
    }

    /// 按名字获取可变 section
    fn get_section_mut(&mut self, section: &str) -> Option<&mut BTreeMap<String, String>> {
        match section {
            "page" => Some(&mut self.page),
            "setting" => Some(&mut self.setting),
            "log" => Some(&mut self.log),
            "version" => Some(&mut self.version),
            _ => None,
        }
    }

    /// 判断某个 section 中是否存在指定 key
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get_section(section)
            .map_or(false, |map| map.contains_key(key))
    }

    /// 获取某个 section 中指定 key 的值
    pub fn get_property(&self, section: &str, key: &str) -> Option<&String> {
        self.get_section(section).and_then(|map| map.get(key))
    }

    /// 设置某个 section 中指定 key 的值
    pub fn set_property(&mut self, section: &str, key: &str, value: &str) {
        if let Some(map) = self.get_section_mut(section) {
            map.insert(key.to_string(), value.to_string());
            self.save();
        }
    }

    /// 删除某个 section 中指定 key
    pub fn remove_property(&mut self, section: &str, key: &str) {
        if let Some(map) = self.get_section_mut(section) {
            map.remove(key);
            self.save();
        }
    }
}
