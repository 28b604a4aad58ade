//! 配置模块
//!
//! 统一的配置管理，从 ~/.config/svtal/config.toml 加载

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SvTalError, SvTalResult};
use crate::numeral::{Gender, ScanMode, Spacing};

/// 编码配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// 单独的 1 使用 "ett" 还是 "en"
    pub gender: Gender,
    /// 连写或按数量级分组
    pub spacing: Spacing,
}

/// 解码配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// 无法识别的字符：跳过或报错
    pub scan_mode: ScanMode,
}

/// svtal 完整配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvTalConfig {
    pub encoder: EncoderConfig,
    pub decoder: DecoderConfig,
}

impl SvTalConfig {
    /// 加载配置文件，不存在时使用默认配置
    pub fn load() -> SvTalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 从指定路径加载
    pub fn load_from(path: &Path) -> SvTalResult<Self> {
        if !path.exists() {
            return Err(SvTalError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| SvTalError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!(
            "加载配置成功: {:?} (gender={:?}, spacing={:?}, scan_mode={:?})",
            path,
            config.encoder.gender,
            config.encoder.spacing,
            config.decoder.scan_mode
        );
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> SvTalResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> SvTalResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| SvTalError::ConfigSerialize {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 获取配置文件路径
    pub fn config_path() -> SvTalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SvTalError::ConfigNotFound("无法获取配置目录".to_string()))?;

        Ok(config_dir.join("svtal").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SvTalConfig::default();
        assert_eq!(config.encoder.gender, Gender::Neuter);
        assert_eq!(config.encoder.spacing, Spacing::Compact);
        assert_eq!(config.decoder.scan_mode, ScanMode::Permissive);
    }

    #[test]
    fn test_parse_partial() {
        let config: SvTalConfig = toml::from_str(
            r#"
            [decoder]
            scan_mode = "strict"
            "#,
        )
        .unwrap();
        assert_eq!(config.decoder.scan_mode, ScanMode::Strict);
        assert_eq!(config.encoder, EncoderConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = SvTalConfig {
            encoder: EncoderConfig {
                gender: Gender::Common,
                spacing: Spacing::Grouped,
            },
            decoder: DecoderConfig::default(),
        };
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("gender = \"common\""));
        assert!(content.contains("spacing = \"grouped\""));

        let loaded = SvTalConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing() {
        let dir = TempDir::new().unwrap();
        let result = SvTalConfig::load_from(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(SvTalError::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[encoder]\ngender = \"feminine\"\n").unwrap();

        let result = SvTalConfig::load_from(&path);
        assert!(matches!(result, Err(SvTalError::ConfigParse { .. })));
    }

    #[test]
    fn test_save_into_file_parent() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        // 父路径是普通文件，写入失败应报告为 I/O 错误而非解析错误
        let result = SvTalConfig::default().save_to(&blocker.join("config.toml"));
        assert!(matches!(result, Err(SvTalError::Io(_))), "{:?}", result);
    }
}
