//! 规范化后的错误
//!
//! `name`、`message`、`stack` 保证非空。

use super::thrown::Cause;
use thiserror::Error;

/// 非错误值被抛出时使用的名称
pub const NON_ERROR: &str = "NonError";

/// 失败来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorOrigin {
    /// 具备错误形态的值
    Error,
    /// 非错误值
    Foreign,
    /// panic
    Panic,
    /// 成功但为空的值
    Meaningless,
}

/// 规范化时被补齐的字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultedFields {
    pub name: bool,
    pub message: bool,
    pub stack: bool,
}

impl DefaultedFields {
    /// 是否有任一字段被补齐
    pub fn any(&self) -> bool {
        self.name || self.message || self.stack
    }
}

/// 规范化后的错误
#[derive(Error, Debug, Clone)]
#[error("{name}: {message}")]
pub struct NormalizedError {
    name: String,
    message: String,
    stack: String,
    origin: ErrorOrigin,
    defaulted: DefaultedFields,
    payload: Option<serde_json::Value>,
    #[source]
    cause: Option<Cause>,
}

impl NormalizedError {
    pub(crate) fn new(
        name: String,
        message: String,
        stack: String,
        origin: ErrorOrigin,
    ) -> Self {
        debug_assert!(!name.is_empty() && !message.is_empty() && !stack.is_empty());
        Self {
            name,
            message,
            stack,
            origin,
            defaulted: DefaultedFields::default(),
            payload: None,
            cause: None,
        }
    }

    pub(crate) fn with_defaulted(mut self, defaulted: DefaultedFields) -> Self {
        self.defaulted = defaulted;
        self
    }

    pub(crate) fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub(crate) fn with_cause(mut self, cause: Option<Cause>) -> Self {
        self.cause = cause;
        self
    }

    /// 错误名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 错误消息
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 调用栈
    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// 失败来源
    pub fn origin(&self) -> ErrorOrigin {
        self.origin
    }

    /// 被补齐的字段
    pub fn defaulted(&self) -> DefaultedFields {
        self.defaulted
    }

    /// 非错误值的原始负载
    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    /// 原始错误
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// 是否由非错误值产生
    pub fn is_non_error(&self) -> bool {
        self.name == NON_ERROR
    }

    /// 覆盖名称
    ///
    /// 规范化后的字段仍可被调用方改写，空值会被忽略。
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() {
            self.name = name;
        }
    }

    /// 尝试将原始错误向下转型
    pub fn downcast_cause<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.cause.as_deref()?.downcast_ref::<E>()
    }
}
