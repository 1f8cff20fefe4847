//! # maybe - 将可能失败的操作统一包装为值或错误
//!
//! 执行同步闭包、future 或现成的值，得到 [`Outcome`]：要么是成功值，
//! 要么是 name / message / stack 均非空的 [`NormalizedError`]。包装器自身从不失败。
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use maybe::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     match wrap_fn(|| "42".parse::<i32>()).await {
//!         Outcome::Success(value) => println!("value: {}", value),
//!         Outcome::Failure(err) => println!("{}\n{}", err, err.stack()),
//!     }
//! }
//! ```
//!
//! ## 模块组织
//!
//! ### 配置模块
//! - WrapOptions - 包装选项（`meaningful` 与透传键）
//! - OptionsOverride - 合并到默认值之上的部分选项
//!
//! ### 核心模块
//! - ensure_error - 错误规范化
//! - wrap / wrap_fn / wrap_value - 结果包装器
//! - Outcome - 包装结果
//! - Presence - 空值判断

// ============================================================================
// Crate Re-exports
// ============================================================================

pub use maybe_config;

pub use maybe_core;

pub use maybe_config::{ConfigError, OptionValue, OptionsOverride, WrapOptions};

pub use maybe_core::{
    DefaultedFields, ErrorOrigin, Maybe, NormalizedError, Outcome, Presence, RawError, Thrown,
    ensure_error, wrap, wrap_fn, wrap_fn_with, wrap_value, wrap_value_with, wrap_with,
};

// ============================================================================
// Prelude Module
// ============================================================================

/// 预导出常用类型
///
/// 通过 `use maybe::prelude::*;` 导入所有常用类型
pub mod prelude {
    pub use maybe_core::prelude::*;

    pub use maybe_config::ConfigError;
}

// ============================================================================
// Version Information
// ============================================================================

/// maybe 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// maybe 包名
pub const NAME: &str = env!("CARGO_PKG_NAME");
