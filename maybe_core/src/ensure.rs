//! 错误规范化
//!
//! 将任意被捕获的失败值转换为 [`NormalizedError`]。该函数是全函数：
//! 对任何输入都不会失败，也不会 panic。

use crate::error::normalized::{DefaultedFields, ErrorOrigin, NON_ERROR, NormalizedError};
use crate::error::stack::{self, ORIGINAL_STACK_MISSING};
use crate::error::thrown::{RawError, Thrown, header};
use std::any::Any;

/// 消息为空时使用的消息
pub const NO_ERROR_MESSAGE: &str = "<No error message>";

/// 名称为空且构造类型未知时使用的名称
pub const DEFAULT_ERROR_NAME: &str = "Error";

/// 成功但为空的值对应的消息
pub const MEANINGLESS_MESSAGE: &str = "Value is undefined or null";

/// 非错误值无法序列化时使用的消息
pub const UNSERIALIZABLE_VALUE: &str = "<Unserializable value>";

/// 规范化任意失败值
///
/// - 非错误值：名称为 `NonError`，消息为其 JSON 序列化结果
/// - 具备错误形态的值：空的 name / message / stack 分别补齐，其余字段保持不变
/// - 已规范化的错误：原样返回
pub fn ensure_error(input: impl Into<Thrown>) -> NormalizedError {
    match input.into() {
        Thrown::Error(raw) => normalize_raw(raw),
        Thrown::Foreign(value) => {
            let message = value.to_string();
            non_error(message, ErrorOrigin::Foreign).with_payload(value)
        }
        Thrown::Unserializable(reason) => {
            tracing::debug!(%reason, "foreign value could not be serialized");
            non_error(UNSERIALIZABLE_VALUE.to_string(), ErrorOrigin::Foreign)
        }
        Thrown::Panic(payload) => normalize_panic(payload),
        Thrown::Meaningless => {
            let stack = stack::capture(&header(DEFAULT_ERROR_NAME, MEANINGLESS_MESSAGE));
            NormalizedError::new(
                DEFAULT_ERROR_NAME.to_string(),
                MEANINGLESS_MESSAGE.to_string(),
                stack,
                ErrorOrigin::Meaningless,
            )
        }
        Thrown::Normalized(err) => err,
    }
}

fn non_error(message: String, origin: ErrorOrigin) -> NormalizedError {
    let stack = stack::capture(&header(NON_ERROR, &message));
    NormalizedError::new(NON_ERROR.to_string(), message, stack, origin)
}

fn normalize_panic(payload: Box<dyn Any + Send>) -> NormalizedError {
    let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
        serde_json::Value::from(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        serde_json::Value::from(s.as_str())
    } else {
        return non_error(UNSERIALIZABLE_VALUE.to_string(), ErrorOrigin::Panic);
    };

    non_error(message.to_string(), ErrorOrigin::Panic).with_payload(message)
}

fn normalize_raw(raw: RawError) -> NormalizedError {
    let RawError {
        mut name,
        mut message,
        mut stack,
        variant,
        cause,
    } = raw;
    let mut defaulted = DefaultedFields::default();

    if name.is_empty() {
        name = variant
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_ERROR_NAME)
            .to_string();
        defaulted.name = true;
        tracing::trace!(%name, "error name defaulted");
    }

    if message.is_empty() {
        message = NO_ERROR_MESSAGE.to_string();
        defaulted.message = true;
        tracing::trace!("error message defaulted");
    }

    if stack.is_empty() {
        stack = stack::mark_missing(&stack::capture(&header(DEFAULT_ERROR_NAME, &message)));
        defaulted.stack = true;
        tracing::trace!("error stack synthesized");
    }

    NormalizedError::new(name, message, stack, ErrorOrigin::Error)
        .with_defaulted(defaulted)
        .with_cause(cause)
}
