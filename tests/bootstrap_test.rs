mod common;

use std::fs;

use common::{Sandbox, StubFetcher};
use git_hook::{
    bootstrap::{is_planted, plant_stubs, stub_script},
    installer::Installer,
    report::{inspect, inspect_all},
    timing::Timing,
};

#[test]
fn stub_delegates_to_test_with_arguments() {
    assert_eq!(
        stub_script(Timing::PreCommit),
        "#!/bin/sh\ngit-hook test pre-commit \"$@\"\n"
    );
}

#[test]
fn init_plants_a_stub_and_registry_for_every_timing() {
    let sandbox = Sandbox::new();
    fs::remove_dir_all(sandbox.paths().hooks_dir()).unwrap();
    let paths = sandbox.paths();

    let planted = plant_stubs(&paths).unwrap();

    assert_eq!(planted.len(), Timing::ALL.len());
    for timing in Timing::ALL {
        assert!(is_planted(&paths, timing), "{timing}");
        assert_eq!(fs::read_to_string(paths.registry(timing)).unwrap(), "");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(paths.stub(timing)).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }
}

#[test]
fn init_is_idempotent_and_keeps_registries() {
    let sandbox = Sandbox::new();
    let paths = sandbox.paths();
    plant_stubs(&paths).unwrap();

    fs::write(paths.registry(Timing::PostMerge), "./notify.sh\n").unwrap();
    fs::write(
        paths.stub(Timing::PostMerge),
        "#!/bin/sh\n# a much longer hand-written hook that must be fully replaced\nexit 0\n",
    )
    .unwrap();

    plant_stubs(&paths).unwrap();

    assert_eq!(
        fs::read_to_string(paths.registry(Timing::PostMerge)).unwrap(),
        "./notify.sh\n"
    );
    assert_eq!(
        fs::read_to_string(paths.stub(Timing::PostMerge)).unwrap(),
        stub_script(Timing::PostMerge)
    );
}

#[test]
fn report_for_untouched_repository() {
    let sandbox = Sandbox::new();
    let reports = inspect_all(&sandbox.paths()).unwrap();
    assert_eq!(reports.len(), Timing::ALL.len());
    for report in reports {
        assert!(!report.stub_planted);
        assert!(!report.registered);
        assert!(report.in_sync);
        assert!(report.registry_modified.is_none());
    }
}

#[tokio::test]
async fn report_tracks_sync_state() {
    let sandbox = Sandbox::new();
    let paths = sandbox.paths();
    plant_stubs(&paths).unwrap();
    sandbox.write("lint.sh", "#!/bin/sh\n");
    let installer = Installer::new(&sandbox.repo, StubFetcher::default());

    installer.install_append(Timing::PreCommit, "lint.sh").await.unwrap();
    let report = inspect(&paths, Timing::PreCommit).unwrap();
    assert!(report.stub_planted);
    assert_eq!(report.registered_hooks, 1);
    assert_eq!(report.installed_hooks, 1);
    assert!(report.in_sync);
    assert!(report.registry_modified.is_some());

    fs::write(paths.registry(Timing::PreCommit), "lint.sh\nlint.sh\n").unwrap();
    let report = inspect(&paths, Timing::PreCommit).unwrap();
    assert_eq!(report.registered_hooks, 2);
    assert!(!report.in_sync);

    fs::write(paths.registry(Timing::PreCommit), "https://bad host/x\n").unwrap();
    let report = inspect(&paths, Timing::PreCommit).unwrap();
    assert!(!report.in_sync);
    assert!(report.problem.is_some());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["timing"], "pre-commit");
}
