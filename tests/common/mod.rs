//! Fixture projects shared by the integration tests.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

pub const REPO: &str = "github.com/example-inc/memcached-operator";
pub const OLD_DOCKERFILE: &str = "FROM quay.io/operator-framework/ansible-operator:v0.15.0\n";

/// `<tmp>/memcached-operator`, so the project name is stable.
pub struct Fixture {
    _tmp: TempDir,
    pub root: std::path::PathBuf,
}

fn base_project() -> Fixture {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("memcached-operator");
    fs::create_dir_all(root.join("build")).unwrap();
    fs::write(root.join("build/Dockerfile"), OLD_DOCKERFILE).unwrap();
    fs::write(root.join("watches.yaml"), "---\n- version: v1alpha1\n  group: cache.example.com\n  kind: Memcached\n").unwrap();
    Fixture { _tmp: tmp, root }
}

pub fn ansible_project(with_playbook: bool) -> Fixture {
    let fixture = base_project();
    fs::create_dir_all(fixture.root.join("roles/memcached/tasks")).unwrap();
    fs::write(fixture.root.join("roles/memcached/tasks/main.yml"), "---\n").unwrap();
    if with_playbook {
        fs::write(fixture.root.join("playbook.yml"), "- hosts: localhost\n").unwrap();
    }
    fixture
}

pub fn helm_project() -> Fixture {
    let fixture = base_project();
    fs::create_dir_all(fixture.root.join("helm-charts/memcached/templates")).unwrap();
    fs::write(fixture.root.join("helm-charts/memcached/Chart.yaml"), "name: memcached\n").unwrap();
    fixture
}

pub fn go_project() -> Fixture {
    let fixture = base_project();
    fs::create_dir_all(fixture.root.join("cmd/manager")).unwrap();
    fs::write(fixture.root.join("cmd/manager/main.go"), "package main\n").unwrap();
    fs::write(fixture.root.join("go.mod"), format!("module {REPO}\n\ngo 1.13\n")).unwrap();
    fixture
}

pub fn add_api_version(root: &Path, group: &str, version: &str) {
    let dir = root.join("pkg/apis").join(group).join(version);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("types.go"), format!("package {version}\n")).unwrap();
}

/// Relative path to contents of every file under `root`.
pub fn snapshot(root: &Path) -> BTreeMap<String, String> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap();
            (
                rel.to_string_lossy().replace('\\', "/"),
                fs::read_to_string(e.path()).unwrap(),
            )
        })
        .collect()
}

/// Buffer shared between a test and the `fmt` layer writing into it.
#[derive(Clone, Default)]
pub struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return its log output.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
