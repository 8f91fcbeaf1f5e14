use assert_cmd::Command;
use figcache::test_support::SAMPLE_FONT;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!("figcache_cli_{tag}_{}", std::process::id()));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, content).expect("write test file");
        path
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn figcache() -> Command {
    Command::cargo_bin("figcache").expect("binary built")
}

#[test]
fn render_prints_art() {
    let dir = TestDir::new("render");
    let font = dir.write("sample.flf", SAMPLE_FONT);
    figcache()
        .args(["render", "--font"])
        .arg(&font)
        .args(["--text", "!"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("██ \n██ \n██ \n"));
}

#[test]
fn repeated_render_hits_cache() {
    let dir = TestDir::new("stats");
    let font = dir.write("sample.flf", SAMPLE_FONT);
    figcache()
        .args(["render", "--stats", "--repeat", "3", "--font"])
        .arg(&font)
        .args(["--text", "!", "! !"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cache: 5 hits, 1 misses"));
}

#[test]
fn zero_repeat_is_rejected() {
    let dir = TestDir::new("repeat0");
    let font = dir.write("sample.flf", SAMPLE_FONT);
    figcache()
        .args(["render", "--repeat", "0", "--font"])
        .arg(&font)
        .args(["--text", "!"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--repeat"));
}

#[test]
fn inspect_reports_header() {
    let dir = TestDir::new("inspect");
    let font = dir.write("sample.flf", SAMPLE_FONT);
    figcache()
        .args(["inspect", "--font"])
        .arg(&font)
        .assert()
        .success()
        .stdout(predicate::str::contains("Height: 7"))
        .stdout(predicate::str::contains("Defined characters: 2"));
}

#[test]
fn bad_font_fails() {
    let dir = TestDir::new("bad");
    let font = dir.write("bad.flf", "not a font");
    figcache()
        .args(["render", "--font"])
        .arg(&font)
        .args(["--text", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid FIGlet font header"));
}

#[test]
fn missing_font_fails() {
    figcache()
        .args(["inspect", "--font", "/nonexistent/font.flf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading /nonexistent/font.flf"));
}
