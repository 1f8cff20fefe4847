//! 包装选项与配置管理
//!
//! 提供结果包装器的选项定义，支持默认值合并、TOML 文件和环境变量覆盖。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析错误
    #[error("解析配置文件失败: {0}")]
    Parse(String),

    /// 验证错误
    #[error("配置验证失败: {0}")]
    Validation(String),

    /// 环境变量错误
    #[error("环境变量解析失败: {0}")]
    EnvVar(String),
}

/// 配置 Result 类型
pub type Result<T> = std::result::Result<T, ConfigError>;

/// 环境变量：覆盖 `meaningful`
pub const ENV_MEANINGFUL: &str = "MAYBE_MEANINGFUL";

/// 透传选项的值
///
/// 与 `meaningful` 以外的键一起保留，包装器不解释它们。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// 布尔值
    Bool(bool),
    /// 整数
    Integer(i64),
    /// 浮点数
    Float(f64),
    /// 字符串
    String(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(v) => write!(f, "{}", v),
            OptionValue::Integer(v) => write!(f, "{}", v),
            OptionValue::Float(v) => write!(f, "{}", v),
            OptionValue::String(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Integer(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::String(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::String(v)
    }
}

/// 结果包装器选项
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WrapOptions {
    /// 将成功但为空（`None`、`()`、JSON `null`）的值视为失败
    #[serde(default = "default_meaningful")]
    pub meaningful: bool,

    /// 未识别的键，原样透传，没有定义的效果
    #[serde(flatten)]
    pub extra: BTreeMap<String, OptionValue>,
}

/// 部分选项，合并到默认值之上
///
/// 未设置的字段保留默认值。
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsOverride {
    /// `meaningful` 覆盖值
    #[serde(default)]
    pub meaningful: Option<bool>,

    /// 额外的透传键
    #[serde(flatten)]
    pub extra: BTreeMap<String, OptionValue>,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            meaningful: default_meaningful(),
            extra: BTreeMap::new(),
        }
    }
}

impl OptionsOverride {
    /// 设置 `meaningful`
    pub fn meaningful(mut self, meaningful: bool) -> Self {
        self.meaningful = Some(meaningful);
        self
    }

    /// 添加透传键
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl WrapOptions {
    /// 默认选项（`meaningful = true`）
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置 `meaningful`
    pub fn meaningful(mut self, meaningful: bool) -> Self {
        self.meaningful = meaningful;
        self
    }

    /// 添加透传键
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// 将覆盖值合并到当前选项之上，后者优先
    pub fn merge(mut self, overrides: OptionsOverride) -> Self {
        if let Some(meaningful) = overrides.meaningful {
            self.meaningful = meaningful;
        }
        self.extra.extend(overrides.extra);
        self
    }

    /// 读取透传键
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.extra.get(key)
    }

    /// 从 TOML 文件加载选项
    ///
    /// 文件中缺失的键使用默认值。
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let options: WrapOptions = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), meaningful = options.meaningful, "loaded wrap options");
        Ok(options)
    }

    /// 从环境变量加载选项并覆盖
    ///
    /// 支持的环境变量：
    /// - MAYBE_MEANINGFUL: 是否将空值视为失败 (true/false)
    pub fn load_with_env_override(mut self) -> Result<Self> {
        if let Ok(meaningful) = std::env::var(ENV_MEANINGFUL) {
            self.meaningful = meaningful.trim().parse().map_err(|_| {
                ConfigError::EnvVar(format!("{} 必须是 true 或 false", ENV_MEANINGFUL))
            })?;
            tracing::trace!(meaningful = self.meaningful, "meaningful overridden from environment");
        }

        Ok(self)
    }

    /// 从文件加载并应用环境变量覆盖
    pub fn from_file_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file(path)?.load_with_env_override()
    }

    /// 验证选项是否有效
    pub fn validate(&self) -> Result<()> {
        for key in self.extra.keys() {
            if key.trim().is_empty() {
                return Err(ConfigError::Validation("透传键不能为空".to_string()));
            }
            if key.eq_ignore_ascii_case("meaningful") {
                return Err(ConfigError::Validation(format!(
                    "透传键 {:?} 与 meaningful 冲突",
                    key
                )));
            }
        }

        Ok(())
    }

    /// 获取选项摘要信息
    pub fn summary(&self) -> String {
        let mut summary = format!("maybe 包装选项:\n  meaningful: {}", self.meaningful);
        for (key, value) in &self.extra {
            summary.push_str(&format!("\n  {}: {}", key, value));
        }
        summary
    }
}

fn default_meaningful() -> bool {
    true
}
