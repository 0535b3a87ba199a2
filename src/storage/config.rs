//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 获取配置文件路径
fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// 加载配置（不存在或损坏则返回默认值）
pub fn load_config(data_dir: &Path) -> Config {
    let path = config_path(data_dir);
    if !path.exists() {
        return Config::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

/// 保存配置
pub fn save_config(data_dir: &Path, config: &Config) -> io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let content = toml::to_string_pretty(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(config_path(data_dir), content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_config_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path());
        assert_eq!(config.theme.name, "Auto");
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.theme.name = "Dark".to_string();

        save_config(dir.path(), &config).unwrap();

        let loaded = load_config(dir.path());
        assert_eq!(loaded.theme.name, "Dark");
    }

    #[test]
    fn test_load_corrupt_config_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(config_path(dir.path()), "not [valid toml").unwrap();

        let config = load_config(dir.path());
        assert_eq!(config.theme.name, "Auto");
    }
}
