use crate::error::{KdTreeError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// kdtree-cli 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KdTreeConfig {
    /// 建树配置
    pub tree: TreeConfig,

    /// 查询配置
    pub query: QueryConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 建树配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// 加载时拒绝单位正方形之外的点
    #[serde(default = "default_reject_out_of_domain")]
    pub reject_out_of_domain: bool,
}

/// 查询配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// 每次查询都用暴力点集核对结果
    #[serde(default = "default_verify")]
    pub verify: bool,

    /// 输出格式：text, json
    #[serde(default = "default_output")]
    pub output: String,

    /// 打印树结构时展开的最大层数
    #[serde(default = "default_dump_depth")]
    pub dump_depth: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_reject_out_of_domain() -> bool {
    false
}

fn default_verify() -> bool {
    false
}

fn default_output() -> String {
    "text".to_string()
}

fn default_dump_depth() -> usize {
    6
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for KdTreeConfig {
    fn default() -> Self {
        Self {
            tree: TreeConfig {
                reject_out_of_domain: default_reject_out_of_domain(),
            },
            query: QueryConfig {
                verify: default_verify(),
                output: default_output(),
                dump_depth: default_dump_depth(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl KdTreeConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（KDTREE__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use kdtree2d::config::KdTreeConfig;
    ///
    /// let config = KdTreeConfig::from_file("kdtree.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from_str(
                include_str!("default.toml"),
                ::config::FileFormat::Toml,
            ))
            .add_source(::config::File::with_name(path).required(false))
            .add_source(::config::Environment::with_prefix("KDTREE").separator("__"))
            .build()
            .map_err(|e| KdTreeError::Config(format!("Failed to load config: {}", e)))?;

        settings
            .try_deserialize()
            .map_err(|e| KdTreeError::Config(format!("Failed to parse config: {}", e)))
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| KdTreeError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// 验证配置
    pub fn validate(&self) -> Result<()> {
        match self.query.output.as_str() {
            "text" | "json" => {}
            other => {
                return Err(KdTreeError::Config(format!(
                    "Invalid output format: '{}'. Must be one of: text, json",
                    other
                )))
            }
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(KdTreeError::Config(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    other
                )))
            }
        }

        match self.logging.output.as_str() {
            "stdout" => {}
            "file" if self.logging.log_file.is_some() => {}
            "file" => {
                return Err(KdTreeError::Config(
                    "Log output is 'file' but log_file path is not specified".to_string(),
                ))
            }
            other => {
                return Err(KdTreeError::Config(format!(
                    "Invalid log output: '{}'. Must be one of: stdout, file",
                    other
                )))
            }
        }

        if self.query.dump_depth == 0 {
            return Err(KdTreeError::Config("dump_depth must be at least 1".to_string()));
        }

        Ok(())
    }
}
