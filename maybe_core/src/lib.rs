//! maybe 错误规范化与结果包装
//!
//! 提供两个入口：
//!
//! - [`ensure_error`]：把任意被捕获的失败值规范化为 name / message / stack 均非空的错误
//! - [`wrap`] 系列：执行可能失败的操作，返回 [`Outcome`]，自身从不失败

pub mod ensure;
pub mod error;
pub mod outcome;
pub mod presence;
pub mod wrap;

// 导出主要类型到 crate root
pub use crate::ensure::{
    DEFAULT_ERROR_NAME, MEANINGLESS_MESSAGE, NO_ERROR_MESSAGE, UNSERIALIZABLE_VALUE, ensure_error,
};
pub use crate::error::{
    DefaultedFields, ErrorOrigin, NON_ERROR, NormalizedError, ORIGINAL_STACK_MISSING, RawError,
    Thrown,
};
pub use crate::outcome::{Maybe, Outcome};
pub use crate::presence::Presence;
pub use crate::wrap::{wrap, wrap_fn, wrap_fn_with, wrap_value, wrap_value_with, wrap_with};

// 预导出
pub mod prelude {
    pub use crate::ensure::ensure_error;
    pub use crate::error::{NormalizedError, RawError, Thrown};
    pub use crate::outcome::{Maybe, Outcome};
    pub use crate::presence::Presence;
    pub use crate::wrap::{wrap, wrap_fn, wrap_fn_with, wrap_value, wrap_value_with, wrap_with};
    pub use maybe_config::{OptionsOverride, WrapOptions};
}
