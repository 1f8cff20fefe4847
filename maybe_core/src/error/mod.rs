//! 错误模型
//!
//! 被捕获的失败值、规范化后的错误以及调用栈捕获。

pub mod normalized;
pub mod stack;
pub mod thrown;

// 重新导出主要类型
pub use normalized::{DefaultedFields, ErrorOrigin, NON_ERROR, NormalizedError};
pub use stack::ORIGINAL_STACK_MISSING;
pub use thrown::{Cause, RawError, Thrown, short_type_name};
