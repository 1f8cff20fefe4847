//! 调用栈捕获
//!
//! 将 `std::backtrace::Backtrace` 渲染为 `"{name}: {message}"` 开头、
//! 每帧一行 `"    at symbol (file:line:col)"` 的文本。
//!
//! 依赖 `Backtrace` 的 Display 输出格式，该格式标准库并未承诺稳定；
//! 无法识别的行会被忽略，最坏情况下只剩首行。
//! `__rust_begin_short_backtrace` 之后的运行时帧（线程启动、测试框架等）不输出。

use std::backtrace::Backtrace;

/// 原始调用栈缺失时插入的标记
pub const ORIGINAL_STACK_MISSING: &str = "<Original stack missing>";

/// 帧行前缀
const FRAME_PREFIX: &str = "\n    at ";

/// 捕获机制自身的帧，不出现在结果中
const INTERNAL_FRAMES: &[&str] = &[
    "std::backtrace",
    "maybe_core::error::stack::capture",
];

/// 运行时入口帧，其后的帧不输出
const RUNTIME_BOUNDARY: &str = "__rust_begin_short_backtrace";

/// 捕获当前调用栈，以 `header` 作为首行
pub fn capture(header: &str) -> String {
    render(header, &Backtrace::force_capture().to_string())
}

/// 在第一帧之前插入 [`ORIGINAL_STACK_MISSING`]
///
/// 没有帧行时原样返回。
pub fn mark_missing(stack: &str) -> String {
    match stack.find(FRAME_PREFIX) {
        Some(at) => {
            let mut marked = String::with_capacity(stack.len() + ORIGINAL_STACK_MISSING.len() + 1);
            marked.push_str(&stack[..at]);
            marked.push('\n');
            marked.push_str(ORIGINAL_STACK_MISSING);
            marked.push_str(&stack[at..]);
            marked
        }
        None => stack.to_string(),
    }
}

/// 将 `Backtrace` 的 Display 输出转换为帧行
///
/// 输入形如：
///
/// ```text
///    0: crate::module::function
///              at ./src/module.rs:10:5
/// ```
fn render(header: &str, backtrace: &str) -> String {
    let mut stack = header.to_string();
    let mut frame: Option<(&str, Option<&str>)> = None;

    for line in backtrace.lines() {
        let line = line.trim();
        if let Some(location) = line.strip_prefix("at ") {
            if let Some((_, slot)) = frame.as_mut() {
                if slot.is_none() {
                    *slot = Some(location);
                }
            }
        } else if let Some(symbol) = frame_symbol(line) {
            if let Some(done) = frame.take() {
                push_frame(&mut stack, done);
            }
            if symbol.contains(RUNTIME_BOUNDARY) {
                return stack;
            }
            frame = Some((symbol, None));
        }
    }
    if let Some(done) = frame {
        push_frame(&mut stack, done);
    }

    stack
}

/// 解析 `"N: symbol"` 行
fn frame_symbol(line: &str) -> Option<&str> {
    let (index, symbol) = line.split_once(": ")?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(symbol.trim())
}

fn push_frame(stack: &mut String, (symbol, location): (&str, Option<&str>)) {
    if INTERNAL_FRAMES.iter().any(|internal| symbol.starts_with(internal)) {
        return;
    }

    stack.push_str(FRAME_PREFIX);
    stack.push_str(symbol);
    if let Some(location) = location {
        stack.push_str(" (");
        stack.push_str(location);
        stack.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "   0: std::backtrace_rs::backtrace::libunwind::trace
             at /rustc/library/std/src/../../backtrace/src/backtrace/libunwind.rs:116:5
   1: std::backtrace::Backtrace::force_capture
             at /rustc/library/std/src/backtrace.rs:312:9
   2: maybe_core::error::stack::capture
             at ./src/error/stack.rs:22:5
   3: app::handler
             at ./src/main.rs:10:5
   4: main
note: Some details are omitted, run with `RUST_BACKTRACE=full` for a verbose backtrace.";

    #[test]
    fn test_render_frames() {
        let stack = render("Error: x", SAMPLE);
        assert_eq!(
            stack,
            "Error: x\n    at app::handler (./src/main.rs:10:5)\n    at main"
        );
    }

    #[test]
    fn test_render_stops_at_runtime_boundary() {
        let backtrace = "   0: app::handler
             at ./src/main.rs:10:5
   1: core::ops::function::FnOnce::call_once
   2: std::sys::backtrace::__rust_begin_short_backtrace
             at /rustc/library/std/src/sys/backtrace.rs:152:18
   3: test::run_test_in_process
   4: std::thread::Builder::spawn_unchecked_";
        assert_eq!(
            render("Error: x", backtrace),
            "Error: x\n    at app::handler (./src/main.rs:10:5)\n    at core::ops::function::FnOnce::call_once"
        );
    }

    #[test]
    fn test_render_without_frames() {
        assert_eq!(render("Error: x", "disabled backtrace"), "Error: x");
        assert_eq!(render("Error: x", "unsupported backtrace"), "Error: x");
    }

    #[test]
    fn test_mark_missing_before_first_frame() {
        let marked = mark_missing("Error: x\n    at a (a.rs:1:1)\n    at b");
        assert_eq!(
            marked,
            "Error: x\n<Original stack missing>\n    at a (a.rs:1:1)\n    at b"
        );
    }

    #[test]
    fn test_mark_missing_without_frames() {
        assert_eq!(mark_missing("Error: x"), "Error: x");
        // 缩进不是恰好四个空格时不算帧行
        assert_eq!(mark_missing("Error: x\n  at a"), "Error: x\n  at a");
    }

    #[test]
    fn test_capture_starts_with_header() {
        let stack = capture("Error: boom");
        assert!(stack.starts_with("Error: boom"));
        assert!(!stack.contains("maybe_core::error::stack::capture"));
        assert!(!stack.contains(RUNTIME_BOUNDARY));
    }
}
