//! 被捕获的失败值
//!
//! 所有可能被包装器捕获的东西都先转换为 [`Thrown`]，规范化只在这一处分支。

use super::normalized::NormalizedError;
use super::stack;
use serde::Serialize;
use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// 共享的原始错误
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// 被捕获的失败值
pub enum Thrown {
    /// 具备 name / message / stack 的错误
    Error(RawError),
    /// 非错误值（序列化后的 JSON）
    Foreign(serde_json::Value),
    /// 非错误值，且序列化失败，携带失败原因
    Unserializable(String),
    /// panic 负载
    Panic(Box<dyn Any + Send + 'static>),
    /// 成功但为空的值
    Meaningless,
    /// 已经规范化的错误
    Normalized(NormalizedError),
}

impl Thrown {
    /// 将任意可序列化的值作为非错误值抛出
    ///
    /// 序列化失败时不会 panic，而是得到 [`Thrown::Unserializable`]。
    pub fn foreign<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => Thrown::Foreign(value),
            Err(e) => Thrown::Unserializable(e.to_string()),
        }
    }

    /// 将任意标准错误作为错误抛出
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Thrown::Error(RawError::from_error(err))
    }

    /// 是否具备错误形态
    pub fn is_error_shaped(&self) -> bool {
        matches!(self, Thrown::Error(_) | Thrown::Normalized(_))
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thrown::Error(raw) => f.debug_tuple("Error").field(raw).finish(),
            Thrown::Foreign(value) => f.debug_tuple("Foreign").field(value).finish(),
            Thrown::Unserializable(reason) => f.debug_tuple("Unserializable").field(reason).finish(),
            Thrown::Panic(_) => f.write_str("Panic(..)"),
            Thrown::Meaningless => f.write_str("Meaningless"),
            Thrown::Normalized(err) => f.debug_tuple("Normalized").field(err).finish(),
        }
    }
}

/// 具备错误形态的值
///
/// 各字段可以为空，规范化时分别补齐。
#[derive(Debug, Clone, Default)]
pub struct RawError {
    /// 错误名称
    pub name: String,
    /// 错误消息
    pub message: String,
    /// 调用栈
    pub stack: String,
    /// 构造该错误的类型名，名称为空时使用
    pub variant: Option<&'static str>,
    /// 原始错误
    pub cause: Option<Cause>,
}

impl RawError {
    /// 创建名称为 `Error` 的错误，并在此处捕获调用栈
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let stack = stack::capture(&header("Error", &message));
        Self {
            name: "Error".to_string(),
            message,
            stack,
            variant: None,
            cause: None,
        }
    }

    /// 从标准错误创建
    ///
    /// 标准错误没有名称和调用栈，这两个字段留空；
    /// 构造类型名记录在 `variant` 中。
    pub fn from_error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            name: String::new(),
            message: err.to_string(),
            stack: String::new(),
            variant: Some(short_type_name::<E>()),
            cause: Some(Arc::new(err)),
        }
    }

    /// 从装箱的标准错误创建，构造类型未知
    pub fn from_boxed(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            name: String::new(),
            message: err.to_string(),
            stack: String::new(),
            variant: None,
            cause: Some(Arc::from(err)),
        }
    }

    /// 设置名称
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 设置消息
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// 设置调用栈
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = stack.into();
        self
    }

    /// 设置构造类型名
    pub fn with_variant(mut self, variant: &'static str) -> Self {
        self.variant = Some(variant);
        self
    }
}

/// 调用栈首行
pub(crate) fn header(name: &str, message: &str) -> String {
    format!("{}: {}", name, message)
}

/// 去掉模块路径和泛型参数的类型名
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl From<RawError> for Thrown {
    fn from(raw: RawError) -> Self {
        Thrown::Error(raw)
    }
}

impl From<NormalizedError> for Thrown {
    fn from(err: NormalizedError) -> Self {
        Thrown::Normalized(err)
    }
}

impl From<serde_json::Value> for Thrown {
    fn from(value: serde_json::Value) -> Self {
        Thrown::Foreign(value)
    }
}

impl From<String> for Thrown {
    fn from(value: String) -> Self {
        Thrown::Foreign(serde_json::Value::String(value))
    }
}

impl From<&str> for Thrown {
    fn from(value: &str) -> Self {
        Thrown::Foreign(serde_json::Value::String(value.to_string()))
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Thrown {
    fn from(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Thrown::Error(RawError::from_boxed(err))
    }
}

macro_rules! impl_from_std_error {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Thrown {
                fn from(err: $ty) -> Self {
                    Thrown::error(err)
                }
            }
        )*
    };
}

impl_from_std_error!(
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    serde_json::Error,
    maybe_config::ConfigError,
);

macro_rules! impl_from_foreign {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Thrown {
                fn from(value: $ty) -> Self {
                    Thrown::Foreign(serde_json::Value::from(value))
                }
            }
        )*
    };
}

impl_from_foreign!(bool, i32, i64, u32, u64, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<std::io::Error>(), "Error");
        assert_eq!(short_type_name::<std::num::ParseIntError>(), "ParseIntError");
        assert_eq!(short_type_name::<Vec<std::num::ParseIntError>>(), "Vec");
    }

    #[test]
    fn test_raw_error_new_has_stack() {
        let raw = RawError::new("x");
        assert_eq!(raw.name, "Error");
        assert_eq!(raw.message, "x");
        assert!(raw.stack.starts_with("Error: x"));
    }

    #[test]
    fn test_raw_error_from_std() {
        let err = "abc".parse::<i32>().unwrap_err();
        let raw = RawError::from_error(err);
        assert!(raw.name.is_empty());
        assert!(raw.stack.is_empty());
        assert_eq!(raw.variant, Some("ParseIntError"));
        assert!(raw.cause.is_some());
    }

    #[test]
    fn test_foreign_from_serializable() {
        #[derive(Serialize)]
        struct Payload {
            code: u16,
        }

        let thrown = Thrown::foreign(&Payload { code: 7 });
        assert!(matches!(thrown, Thrown::Foreign(ref v) if v["code"] == 7));
        assert!(!thrown.is_error_shaped());
    }

    #[test]
    fn test_foreign_unserializable() {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], 1);
        let thrown = Thrown::foreign(&map);
        assert!(matches!(thrown, Thrown::Unserializable(_)));
    }

    #[test]
    fn test_conversions() {
        assert!(matches!(Thrown::from("boom"), Thrown::Foreign(_)));
        assert!(matches!(Thrown::from(42i64), Thrown::Foreign(_)));
        let io = std::io::Error::other("disk");
        assert!(Thrown::from(io).is_error_shaped());
    }
}
