//! 结果包装器
//!
//! 执行一次可能失败的操作，返回 [`Outcome`]。包装器本身不会失败：
//! 返回的错误、panic 以及空值都会被规范化后放入 [`Outcome::Failure`]。
//!
//! 包装器不设超时，也不支持取消。操作永远不结束时，包装器也不会返回。
//!
//! panic 被捕获前仍会经过进程的 panic hook，默认 hook 会向 stderr 打印
//! `thread ... panicked at ...`。不希望看到这些输出时，调用方需要自行通过
//! [`std::panic::set_hook`] 安装 hook（例如改为记录 `tracing` 事件）。
//!
//! 成功值类型需实现 [`Presence`]；自定义类型写一行 `impl Presence for MyType {}` 即可。

use crate::ensure::ensure_error;
use crate::error::Thrown;
use crate::outcome::Outcome;
use crate::presence::Presence;
use futures_util::FutureExt;
use maybe_config::WrapOptions;
use std::any::Any;
use std::future::IntoFuture;
use std::panic::{self, AssertUnwindSafe};

/// 等待 future 并包装其结果，使用默认选项
pub async fn wrap<F, T, E>(operation: F) -> Outcome<T>
where
    F: IntoFuture<Output = Result<T, E>>,
    E: Into<Thrown>,
    T: Presence,
{
    wrap_with(operation, &WrapOptions::default()).await
}

/// 等待 future 并包装其结果
pub async fn wrap_with<F, T, E>(operation: F, options: &WrapOptions) -> Outcome<T>
where
    F: IntoFuture<Output = Result<T, E>>,
    E: Into<Thrown>,
    T: Presence,
{
    let settled = AssertUnwindSafe(operation.into_future())
        .catch_unwind()
        .await;
    settle(settled, options)
}

/// 执行同步闭包并包装其结果，使用默认选项
pub async fn wrap_fn<F, T, E>(operation: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Thrown>,
    T: Presence,
{
    wrap_fn_with(operation, &WrapOptions::default()).await
}

/// 执行同步闭包并包装其结果
///
/// 结果仍通过 future 返回，与 [`wrap_with`] 保持一致。
pub async fn wrap_fn_with<F, T, E>(operation: F, options: &WrapOptions) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Thrown>,
    T: Presence,
{
    settle(panic::catch_unwind(AssertUnwindSafe(operation)), options)
}

/// 包装一个现成的值，使用默认选项
pub async fn wrap_value<T: Presence>(value: T) -> Outcome<T> {
    wrap_value_with(value, &WrapOptions::default()).await
}

/// 包装一个现成的值
///
/// 只做有意义检查。
pub async fn wrap_value_with<T: Presence>(value: T, options: &WrapOptions) -> Outcome<T> {
    settle(Ok(Ok::<T, Thrown>(value)), options)
}

fn settle<T, E>(
    settled: Result<Result<T, E>, Box<dyn Any + Send>>,
    options: &WrapOptions,
) -> Outcome<T>
where
    E: Into<Thrown>,
    T: Presence,
{
    let thrown = match settled {
        Ok(Ok(value)) if options.meaningful && value.is_absent() => Thrown::Meaningless,
        Ok(Ok(value)) => return Outcome::Success(value),
        Ok(Err(err)) => err.into(),
        Err(payload) => Thrown::Panic(payload),
    };

    let err = ensure_error(thrown);
    tracing::debug!(
        name = err.name(),
        message = err.message(),
        origin = ?err.origin(),
        "wrapped operation failed"
    );
    Outcome::Failure(err)
}
