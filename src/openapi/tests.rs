#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::project::ProjectContext;
use crate::ScaffoldError;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

const REPO: &str = "github.com/example-inc/app-operator";

/// Records every argument set and optionally fails on one package.
#[derive(Default)]
struct RecordingEngine {
    calls: RefCell<Vec<GenerationArgs>>,
    fail_on: Option<String>,
}

impl OpenApiEngine for RecordingEngine {
    fn generate(&self, args: &GenerationArgs) -> anyhow::Result<()> {
        // The header must be readable while the engine runs.
        assert!(args.go_header_file_path.is_file());
        self.calls.borrow_mut().push(args.clone());
        if let Some(fail_on) = &self.fail_on {
            if args.input_dirs.iter().any(|d| d == fail_on) {
                anyhow::bail!("exit status 1");
            }
        }
        Ok(())
    }
}

fn api_version(root: &Path, group: &str, version: &str) {
    let dir = root.join("pkg/apis").join(group).join(version);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("types.go"), format!("package {version}\n")).unwrap();
}

#[test]
fn test_parse_group_subpackages_sorted() {
    let dir = tempfile::tempdir().unwrap();
    api_version(dir.path(), "core", "v1");
    api_version(dir.path(), "apps", "v1alpha1");
    api_version(dir.path(), "apps", "v1");

    let gvs = parse_group_subpackages(&dir.path().join("pkg/apis")).unwrap();
    let groups: Vec<_> = gvs.keys().cloned().collect();
    assert_eq!(groups, vec!["apps", "core"]);
    assert_eq!(gvs["apps"], vec!["v1", "v1alpha1"]);
    assert_eq!(describe_group_versions(&gvs), "apps:[v1, v1alpha1], core:[v1]");
}

#[test]
fn test_parse_group_subpackages_skips_empty_versions() {
    let dir = tempfile::tempdir().unwrap();
    api_version(dir.path(), "apps", "v1");
    fs::create_dir_all(dir.path().join("pkg/apis/apps/v2")).unwrap();
    fs::create_dir_all(dir.path().join("pkg/apis/batch/v1")).unwrap();
    // Files at the group level are not groups.
    fs::write(dir.path().join("pkg/apis/apis.go"), "package apis\n").unwrap();

    let gvs = parse_group_subpackages(&dir.path().join("pkg/apis")).unwrap();
    assert_eq!(gvs.len(), 1);
    assert_eq!(gvs["apps"], vec!["v1"]);
}

#[test]
fn test_parse_group_subpackages_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = parse_group_subpackages(&dir.path().join("pkg/apis")).unwrap_err();
    assert!(matches!(missing, ScaffoldError::GroupVersionParseFailed { .. }));

    fs::create_dir_all(dir.path().join("pkg/apis")).unwrap();
    let empty = parse_group_subpackages(&dir.path().join("pkg/apis")).unwrap_err();
    assert!(empty.to_string().contains("no groups or versions found"));
}

#[test]
fn test_create_fq_apis() {
    let mut gvs = GroupVersionMap::new();
    gvs.insert("apps".to_string(), vec!["v1".to_string(), "v1alpha1".to_string()]);
    assert_eq!(
        create_fq_apis("example.com/op/pkg/apis/", &gvs),
        vec![
            "example.com/op/pkg/apis/apps/v1".to_string(),
            "example.com/op/pkg/apis/apps/v1alpha1".to_string(),
        ]
    );
}

#[test]
fn test_generate_one_call_per_package() {
    let dir = tempfile::tempdir().unwrap();
    api_version(dir.path(), "apps", "v1");
    api_version(dir.path(), "apps", "v1alpha1");
    let ctx = ProjectContext::new(REPO, dir.path());
    let engine = RecordingEngine::default();

    let generated = OpenApiGenerator::new(ctx, &engine)
        .generate(Path::new("pkg/apis"))
        .unwrap();
    assert_eq!(
        generated,
        vec![
            format!("{REPO}/pkg/apis/apps/v1"),
            format!("{REPO}/pkg/apis/apps/v1alpha1"),
        ]
    );

    let calls = engine.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].input_dirs, vec!["./pkg/apis/apps/v1".to_string()]);
    assert_eq!(calls[1].input_dirs, vec!["./pkg/apis/apps/v1alpha1".to_string()]);
    assert_eq!(calls[0].output_package_path, dir.path().join("pkg/apis/apps/v1"));
    assert_eq!(calls[1].output_package_path, dir.path().join("pkg/apis/apps/v1alpha1"));
    for call in calls.iter() {
        assert_eq!(call.output_file_base_name, OUTPUT_FILE_BASE_NAME);
        assert_eq!(call.output_base, "");
        assert_eq!(call.report_filename, "-");
    }
}

#[test]
fn test_generate_stops_at_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    api_version(dir.path(), "apps", "v1");
    api_version(dir.path(), "apps", "v1alpha1");
    api_version(dir.path(), "core", "v1");
    let ctx = ProjectContext::new(REPO, dir.path());
    let engine = RecordingEngine {
        fail_on: Some("./pkg/apis/apps/v1alpha1".to_string()),
        ..Default::default()
    };

    let err = OpenApiGenerator::new(ctx, &engine)
        .generate(Path::new("pkg/apis"))
        .unwrap_err();
    match err {
        ScaffoldError::GenerationEngineFailed { package_path, reason } => {
            assert_eq!(package_path, format!("{REPO}/pkg/apis/apps/v1alpha1"));
            assert!(reason.contains("exit status 1"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(engine.calls.borrow().len(), 2);
}

#[test]
fn test_generate_uses_project_boilerplate() {
    let dir = tempfile::tempdir().unwrap();
    api_version(dir.path(), "apps", "v1");
    fs::create_dir_all(dir.path().join("hack")).unwrap();
    fs::write(dir.path().join("hack/boilerplate.go.txt"), "// Copyright\n").unwrap();
    let ctx = ProjectContext::new(REPO, dir.path());
    let engine = RecordingEngine::default();

    OpenApiGenerator::new(ctx, &engine)
        .generate(Path::new("pkg/apis"))
        .unwrap();
    assert_eq!(
        engine.calls.borrow()[0].go_header_file_path,
        dir.path().join("hack/boilerplate.go.txt")
    );
}

#[test]
fn test_generate_without_boilerplate_uses_temp_header() {
    let dir = tempfile::tempdir().unwrap();
    api_version(dir.path(), "apps", "v1");
    let ctx = ProjectContext::new(REPO, dir.path());
    let engine = RecordingEngine::default();

    OpenApiGenerator::new(ctx, &engine)
        .generate(Path::new("pkg/apis"))
        .unwrap();
    let header: PathBuf = engine.calls.borrow()[0].go_header_file_path.clone();
    assert!(!header.starts_with(dir.path()));
    // Removed once generation finishes.
    assert!(!header.exists());
}

#[test]
fn test_discover_custom_api_root() {
    let dir = tempfile::tempdir().unwrap();
    let version_dir = dir.path().join("api/cache/v1beta1");
    fs::create_dir_all(&version_dir).unwrap();
    fs::write(version_dir.join("types.go"), "package v1beta1\n").unwrap();
    let ctx = ProjectContext::new(REPO, dir.path());
    let generator = OpenApiGenerator::new(ctx, RecordingEngine::default());

    let packages = generator.discover(&dir.path().join("api")).unwrap();
    assert_eq!(
        packages,
        vec![ApiPackage {
            group: "cache".to_string(),
            version: "v1beta1".to_string(),
            fq_path: format!("{REPO}/api/cache/v1beta1"),
            rel_dir: "api/cache/v1beta1".to_string(),
        }]
    );
}

#[test]
fn test_discover_rejects_api_root_outside_project() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ProjectContext::new(REPO, dir.path());
    let generator = OpenApiGenerator::new(ctx, RecordingEngine::default());
    for bad in ["../apis", ".", ""] {
        let err = generator.discover(Path::new(bad)).unwrap_err();
        assert!(matches!(err, ScaffoldError::GroupVersionParseFailed { .. }), "{bad}");
    }
}

#[test]
fn test_generation_args() {
    let args = GenerationArgs::new(
        "./pkg/apis/apps/v1",
        PathBuf::from("/work/op/pkg/apis/apps/v1"),
        Path::new("/work/op/hack/boilerplate.go.txt"),
    );
    assert!(args.validate().is_ok());
    assert_eq!(
        args.to_cli_args(),
        vec![
            "--input-dirs=./pkg/apis/apps/v1",
            "--output-base=",
            "--output-file-base=zz_generated.openapi",
            "--output-package=/work/op/pkg/apis/apps/v1",
            "--go-header-file=/work/op/hack/boilerplate.go.txt",
            "--report-filename=-",
        ]
    );

    let mut no_input = args.clone();
    no_input.input_dirs.clear();
    assert!(no_input.validate().is_err());
    let mut no_output = args;
    no_output.output_package_path = PathBuf::new();
    assert!(no_output.validate().is_err());
}

#[cfg(unix)]
mod external {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn stub_engine(dir: &Path, script: &str) -> PathBuf {
        let stub = dir.join("openapi-gen");
        fs::write(&stub, script).unwrap();
        let mut perms = fs::metadata(&stub).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&stub, perms).unwrap();
        stub
    }

    #[test]
    fn test_external_engine_success() {
        let bin = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();
        let log = work.path().join("args.log");
        let stub = stub_engine(
            bin.path(),
            &format!("#!/bin/sh\necho \"$@\" > {}\nexit 0\n", log.display()),
        );
        let engine = ExternalEngine::new(stub.to_string_lossy(), work.path());
        let args = GenerationArgs::new(
            "./pkg/apis/apps/v1",
            work.path().join("pkg/apis/apps/v1"),
            Path::new("/dev/null"),
        );

        engine.generate(&args).unwrap();
        let logged = fs::read_to_string(&log).unwrap();
        assert!(logged.contains("--input-dirs=./pkg/apis/apps/v1"));
        assert!(logged.contains("--output-file-base=zz_generated.openapi"));
    }

    #[test]
    fn test_external_engine_failure() {
        let bin = tempfile::tempdir().unwrap();
        let stub = stub_engine(bin.path(), "#!/bin/sh\nexit 3\n");
        let engine = ExternalEngine::new(stub.to_string_lossy(), bin.path());
        let args = GenerationArgs::new("./x", bin.path().join("x"), Path::new("/dev/null"));
        assert!(engine.generate(&args).is_err());
    }

    #[test]
    fn test_external_engine_missing_binary() {
        let dir = tempfile::tempdir().unwrap();
        let engine = ExternalEngine::new(
            dir.path().join("no-such-openapi-gen").to_string_lossy(),
            dir.path(),
        );
        let args = GenerationArgs::new("./x", dir.path().join("x"), Path::new("/dev/null"));
        let err = engine.generate(&args).unwrap_err();
        assert!(err.to_string().contains("failed to run"));
    }
}
