//! End-to-end tests for the `fatlang` command-line tool.

mod common;

use common::{run_fatlang, success_stdout};
use tempfile::TempDir;

#[test]
fn test_header_to_stdout() {
    let stdout = success_stdout(&run_fatlang(&["header"]));
    assert!(stdout.contains("#ifndef FATLANG_RUNTIME_H"));
    assert!(stdout.contains("int32_t __ext_add_i32(int32_t x, int32_t y);"));
    assert!(stdout.contains("struct __c_char_arr __ext_input_string(void);"));
    assert_eq!(stdout.lines().filter(|line| line.ends_with(");")).count(), 223);
}

#[test]
fn test_header_to_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("fatlang_runtime.h");
    let path_arg = path.to_str().expect("temp path is UTF-8");

    let stdout = success_stdout(&run_fatlang(&["header", "--output", path_arg]));
    assert!(stdout.is_empty());

    let written = std::fs::read_to_string(&path).expect("header was written");
    assert_eq!(written, success_stdout(&run_fatlang(&["header"])));
}

#[test]
fn test_symbols_by_family() {
    let stdout = success_stdout(&run_fatlang(&["symbols", "--family", "memory"]));
    insta::assert_snapshot!(stdout, @r"
    void* __ext_malloc(size_t s)
    void __ext_free(void* ptr)
    size_t __ext_cast_voidptr_usize(void* p)
    void* __ext_cast_usize_voidptr(size_t addr)
    ");
}

#[test]
fn test_symbols_by_family_and_kind() {
    let stdout = success_stdout(&run_fatlang(&["symbols", "--family", "io", "--kind", "bool"]));
    insta::assert_snapshot!(stdout, @r"
    void __ext_print_bool(bool v)
    void __ext_println_bool(bool v)
    ");
}

#[test]
fn test_symbols_kind_filter_spans_families() {
    let stdout = success_stdout(&run_fatlang(&["symbols", "--kind", "ui32"]));
    let lines: Vec<_> = stdout.lines().collect();
    assert!(lines.contains(&"uint32_t __ext_xor_ui32(uint32_t x, uint32_t y)"));
    assert!(lines.contains(&"bool __ext_greater_ui32(uint32_t x, uint32_t y)"));
    assert!(lines.contains(&"float __ext_cast_ui32_f32(uint32_t v)"));
    assert!(lines.contains(&"uint32_t __ext_cast_bool_ui32(bool v)"));
    assert!(lines.contains(&"uint32_t __ext_input_ui32(void)"));
    // 16 operators, 16 casts, print/println/input.
    assert_eq!(lines.len(), 35);
}

#[test]
fn test_unknown_kind_fails() {
    let output = run_fatlang(&["symbols", "--kind", "i8"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown kind `i8`"), "stderr: {stderr}");
}

#[test]
fn test_unknown_family_fails() {
    let output = run_fatlang(&["symbols", "--family", "network"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown symbol family `network`"), "stderr: {stderr}");
}
