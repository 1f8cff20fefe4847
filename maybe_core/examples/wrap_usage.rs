//! 包装器示例
//!
//! 演示如何包装同步闭包、future 与现成的值。

use maybe_core::prelude::*;
use maybe_core::RawError;

async fn fetch_user(id: u32) -> Result<Option<String>, Thrown> {
    match id {
        0 => Err(RawError::new("数据库不可用").into()),
        1 => Ok(Some("alice".to_string())),
        _ => Ok(None),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== maybe 包装器示例 ===\n");

    for id in 0..3 {
        match wrap(fetch_user(id)).await {
            Outcome::Success(user) => println!("用户 {}: {:?}", id, user),
            Outcome::Failure(err) => println!("用户 {} 失败: {}", id, err),
        }
    }

    println!("\n同步闭包:");
    let outcome = wrap_fn(|| "42".parse::<i32>()).await;
    println!("  {:?}", outcome.into_pair().0);

    println!("\n非错误值:");
    let (_, err) = wrap_fn(|| Err::<i32, _>("boom")).await.into_pair();
    if let Some(err) = err {
        println!("  {}", err);
        println!("{}", err.stack());
    }

    println!("\n从文件加载选项:");
    let options = match WrapOptions::from_file_with_env("maybe.toml") {
        Ok(options) => options,
        Err(e) => {
            println!("  使用默认选项 ({})", e);
            WrapOptions::default()
        }
    };
    options.validate()?;
    println!("{}", options.summary());

    let outcome = wrap_value_with(None::<u8>, &options).await;
    println!("  空值是否失败: {}", outcome.is_failure());

    Ok(())
}
