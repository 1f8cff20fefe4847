//! 选项加载示例
//!
//! 演示默认值合并、TOML 文件加载与环境变量覆盖。

use maybe_config::{OptionsOverride, WrapOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== maybe 选项加载示例 ===\n");

    // 示例 1: 合并到默认值之上
    println!("1. 合并覆盖值:");
    let options = WrapOptions::default().merge(
        OptionsOverride::default()
            .meaningful(false)
            .with("label", "cache"),
    );
    println!("{}", options.summary());
    println!();

    // 示例 2: 从 TOML 文件加载
    println!("2. 从 TOML 文件加载:");
    let path = std::env::temp_dir().join("maybe_example.toml");
    std::fs::write(&path, "meaningful = true\nretries = 3\n")?;
    let options = WrapOptions::from_file(&path)?;
    println!("{}", options.summary());
    std::fs::remove_file(&path)?;
    println!();

    // 示例 3: 环境变量覆盖
    println!("3. 环境变量覆盖:");
    unsafe { std::env::set_var(maybe_config::ENV_MEANINGFUL, "false") };
    let options = WrapOptions::default().load_with_env_override()?;
    println!("   meaningful: {}", options.meaningful);
    unsafe { std::env::remove_var(maybe_config::ENV_MEANINGFUL) };

    // 示例 4: 验证
    println!("\n4. 验证选项:");
    match WrapOptions::default().with("Meaningful", true).validate() {
        Ok(_) => println!("   ✓ 选项有效"),
        Err(e) => println!("   ✗ 选项无效: {}", e),
    }

    Ok(())
}
