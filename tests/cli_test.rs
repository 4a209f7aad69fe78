//! End-to-end tests for the `cxm` binary.
//!
//! Each test runs in its own temporary directory. Builds use stand-in tools
//! so no real CMake installation is needed.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn cxm(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cxm"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run cxm")
}

fn write_manifest(dir: &Path, toolchain: &str) {
    let manifest = format!(
        r#"[project]
name = "demo"
compiler = "g++"
profile = "release"
sources = ["main.cpp", "util.cpp"]

{toolchain}
"#
    );
    fs::write(dir.join("cxmake.toml"), manifest).unwrap();
}

#[test]
fn test_generate_writes_cmakelists() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "");

    let output = cxm(dir.path(), &["generate"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let content = fs::read_to_string(dir.path().join("CMakeLists.txt")).unwrap();
    assert_eq!(
        content,
        "cmake_minimum_required(VERSION 3.16)\n\
         project(demo)\n\
         set(CMAKE_CXX_STANDARD 17)\n\
         set(CMAKE_CXX_COMPILER g++)\n\
         \n\
         add_executable(demo main.cpp)\n\
         add_executable(demo util.cpp)\n"
    );
}

#[test]
fn test_generate_custom_output() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "");

    let output = cxm(dir.path(), &["generate", "--output", "out.txt"]);
    assert!(output.status.success());
    assert!(dir.path().join("out.txt").exists());
    assert!(!dir.path().join("CMakeLists.txt").exists());
}

#[test]
fn test_generate_without_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = cxm(dir.path(), &["generate"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cxm init"));
}

#[test]
fn test_init_then_generate() {
    let dir = tempfile::tempdir().unwrap();

    let output = cxm(dir.path(), &["init", "hello", "--compiler", "clang++"]);
    assert!(output.status.success());

    let again = cxm(dir.path(), &["init", "hello"]);
    assert!(!again.status.success(), "init must not overwrite");

    let output = cxm(dir.path(), &["generate"]);
    assert!(output.status.success());
    let content = fs::read_to_string(dir.path().join("CMakeLists.txt")).unwrap();
    assert!(content.contains("project(hello)\n"));
    assert!(content.contains("set(CMAKE_CXX_COMPILER clang++)\n"));
    assert!(content.contains("add_executable(hello main.cpp)\n"));
}

#[test]
fn test_build_stops_when_configure_tool_missing() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(
        dir.path(),
        "[toolchain]\ncmake = \"cxmake-missing-cmake\"\nmake = \"cxmake-missing-make\"\n",
    );

    let output = cxm(dir.path(), &["build"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("configure phase failed"), "stderr: {}", stderr);
    assert!(!stderr.contains("compile phase"), "stderr: {}", stderr);
    // The CMakeLists.txt is still written before configuring.
    assert!(dir.path().join("CMakeLists.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_build_reports_compile_failure() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(
        dir.path(),
        "[toolchain]\ncmake = \"true\"\nmake = \"false\"\nbuild_dir = \".\"\n",
    );

    let output = cxm(dir.path(), &["build"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("compile phase failed"), "stderr: {}", stderr);
}

#[cfg(unix)]
#[test]
fn test_build_succeeds_with_passing_tools() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(
        dir.path(),
        "[toolchain]\ncmake = \"true\"\nmake = \"true\"\nbuild_dir = \".\"\n",
    );

    let output = cxm(dir.path(), &["build", "--profile", "debug"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("config=debug"), "stdout: {}", stdout);
}

#[test]
fn test_clean_removes_build_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "");
    fs::create_dir_all(dir.path().join("build").join("CMakeFiles")).unwrap();
    assert!(cxm(dir.path(), &["generate"]).status.success());

    let output = cxm(dir.path(), &["clean"]);
    assert!(output.status.success());
    assert!(!dir.path().join("build").exists());
    assert!(dir.path().join("CMakeLists.txt").exists());

    let output = cxm(dir.path(), &["clean", "--all"]);
    assert!(output.status.success());
    assert!(!dir.path().join("CMakeLists.txt").exists());
}

#[test]
fn test_clean_keeps_in_source_build_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "[toolchain]\nbuild_dir = \".\"\n");
    fs::write(dir.path().join("main.cpp"), "int main() { return 0; }\n").unwrap();

    let output = cxm(dir.path(), &["clean"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Refusing to remove"), "stderr: {}", stderr);
    assert!(dir.path().join("main.cpp").exists());
    assert!(dir.path().join("cxmake.toml").exists());
}

#[test]
fn test_clean_keeps_build_dir_holding_sources() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(
        dir.path(),
        "[toolchain]\nsource_dir = \"app\"\nbuild_dir = \"app\"\n",
    );
    fs::create_dir_all(dir.path().join("app")).unwrap();
    fs::write(dir.path().join("app").join("main.cpp"), "int main() {}\n").unwrap();

    let output = cxm(dir.path(), &["clean"]);

    assert!(!output.status.success());
    assert!(dir.path().join("app").join("main.cpp").exists());
}

#[test]
fn test_init_escapes_windows_compiler_path() {
    let dir = tempfile::tempdir().unwrap();

    let output = cxm(
        dir.path(),
        &["init", "app", "--compiler", r"C:\LLVM\bin\clang++.exe"],
    );
    assert!(output.status.success());

    let output = cxm(dir.path(), &["generate"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let content = fs::read_to_string(dir.path().join("CMakeLists.txt")).unwrap();
    assert!(content.contains("set(CMAKE_CXX_COMPILER \"C:\\\\LLVM\\\\bin\\\\clang++.exe\")\n"));
}

#[test]
fn test_init_name_with_quote_stays_readable() {
    let dir = tempfile::tempdir().unwrap();

    assert!(cxm(dir.path(), &["init", "a\"b"]).status.success());

    let output = cxm(dir.path(), &["info"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("a\"b"));
}
