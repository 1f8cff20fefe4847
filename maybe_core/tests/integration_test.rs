//! maybe_core 集成测试
//!
//! 测试规范化与包装器在 crate 外部的使用方式。

// 规范化集成测试
#[cfg(test)]
mod ensure_tests {
    use maybe_core::prelude::*;
    use maybe_core::{ErrorOrigin, NO_ERROR_MESSAGE, ORIGINAL_STACK_MISSING};
    use std::error::Error as _;

    #[derive(Debug)]
    struct QuotaExceeded;

    impl std::fmt::Display for QuotaExceeded {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "quota exceeded")
        }
    }

    impl std::error::Error for QuotaExceeded {}

    #[test]
    fn test_custom_error_type_name() {
        let err = ensure_error(Thrown::error(QuotaExceeded));
        assert_eq!(err.name(), "QuotaExceeded");
        assert_eq!(err.message(), "quota exceeded");
        assert_eq!(err.to_string(), "QuotaExceeded: quota exceeded");
        assert!(err.source().is_some());
        assert!(err.downcast_cause::<QuotaExceeded>().is_some());
    }

    #[test]
    fn test_boxed_error_falls_back_to_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = "plain".into();
        let err = ensure_error(boxed);
        assert_eq!(err.name(), "Error");
        assert_eq!(err.message(), "plain");
    }

    #[test]
    fn test_malformed_fields_defaulted_independently() {
        let err = ensure_error(RawError::default().with_name("HttpError"));
        assert_eq!(err.name(), "HttpError");
        assert_eq!(err.message(), NO_ERROR_MESSAGE);
        assert!(!err.defaulted().name);
        assert!(err.defaulted().message);
        assert!(err.defaulted().stack);
        assert!(err.stack().contains("Error: <No error message>"));
    }

    #[test]
    fn test_provided_stack_kept() {
        let stack = "HttpError: timeout\n    at client::send (client.rs:10:5)";
        let err = ensure_error(
            RawError::default()
                .with_name("HttpError")
                .with_message("timeout")
                .with_stack(stack),
        );
        assert_eq!(err.stack(), stack);
        assert!(!err.stack().contains(ORIGINAL_STACK_MISSING));
    }

    #[test]
    fn test_foreign_json_object() {
        let err = ensure_error(serde_json::json!({ "code": 404 }));
        assert_eq!(err.message(), r#"{"code":404}"#);
        assert_eq!(err.origin(), ErrorOrigin::Foreign);
    }

    #[test]
    fn test_normalized_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<NormalizedError>();
    }
}

// 包装器集成测试
#[cfg(test)]
mod wrap_tests {
    use maybe_core::prelude::*;
    use maybe_core::{MEANINGLESS_MESSAGE, NON_ERROR};
    use std::time::Duration;

    async fn lookup(id: u32) -> Result<Option<String>, Thrown> {
        tokio::time::sleep(Duration::from_millis(10)).await;
        match id {
            0 => Err(RawError::new("invalid id").into()),
            1 => Ok(Some("alice".to_string())),
            _ => Ok(None),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrap_async_lookup() {
        let outcome = wrap(lookup(1)).await;
        assert_eq!(outcome.into_value(), Some(Some("alice".to_string())));

        let outcome = wrap(lookup(0)).await;
        assert_eq!(outcome.error().map(|e| e.message()), Some("invalid id"));

        let outcome = wrap(lookup(2)).await;
        assert_eq!(outcome.error().map(|e| e.message()), Some(MEANINGLESS_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrap_async_lookup_not_meaningful() {
        let options = WrapOptions::default().merge(OptionsOverride::default().meaningful(false));
        let outcome = wrap_with(lookup(2), &options).await;
        assert!(matches!(outcome, Outcome::Success(None)));
    }

    #[tokio::test]
    async fn test_spawned_task_panic() {
        let handle = tokio::spawn(async { wrap_fn(|| -> Result<u8, Thrown> { panic!("worker crashed") }).await });
        let outcome = handle.await.unwrap();
        let err = outcome.into_error().unwrap();
        assert_eq!(err.name(), NON_ERROR);
        assert_eq!(err.message(), "\"worker crashed\"");
    }

    #[tokio::test]
    async fn test_question_mark_inside_closure() {
        let outcome = wrap_fn(|| {
            let port: u16 = "80a".parse()?;
            Ok::<_, Thrown>(port)
        })
        .await;
        assert_eq!(outcome.error().map(|e| e.name()), Some("ParseIntError"));
    }

    #[tokio::test]
    async fn test_outcome_into_result() {
        let result: Maybe<i32> = wrap_fn(|| Ok::<_, Thrown>(7)).await.into_result();
        assert_eq!(result.unwrap(), 7);
    }
}
