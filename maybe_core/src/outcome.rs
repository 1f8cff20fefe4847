//! 包装结果
//!
//! 成功值与规范化错误二者必居其一，由类型保证。

use crate::error::NormalizedError;

/// 包装结果
#[derive(Debug, Clone)]
#[must_use = "包装结果可能是失败，需要检查"]
pub enum Outcome<T> {
    /// 成功
    Success(T),
    /// 失败
    Failure(NormalizedError),
}

/// 以标准 `Result` 表示的包装结果
pub type Maybe<T> = Result<T, NormalizedError>;

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// 成功值的引用
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// 错误的引用
    pub fn error(&self) -> Option<&NormalizedError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_error(self) -> Option<NormalizedError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    /// 转换为 `(value, error)` 二元组，恰有一个位置为 `Some`
    pub fn into_pair(self) -> (Option<T>, Option<NormalizedError>) {
        match self {
            Outcome::Success(value) => (Some(value), None),
            Outcome::Failure(err) => (None, Some(err)),
        }
    }

    pub fn into_result(self) -> Maybe<T> {
        self.into()
    }

    /// 映射成功值
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, NormalizedError> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }
}

impl<T> From<Result<T, NormalizedError>> for Outcome<T> {
    fn from(result: Result<T, NormalizedError>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err),
        }
    }
}
