mod common;

use std::fs;

use common::Sandbox;
use git_hook::{hooks::HookSource, registry::Registry, timing::Timing};

#[test]
fn register_appends_in_order() {
    let sandbox = Sandbox::new();
    let registry = Registry::new(sandbox.paths());

    for input in ["./a.sh", "https://example.com/b.sh", "/abs/c.sh"] {
        registry
            .register(Timing::PostMerge, &HookSource::parse(input).unwrap())
            .unwrap();
    }

    let raw = registry.read_raw(Timing::PostMerge).unwrap();
    assert_eq!(raw, "./a.sh\nhttps://example.com/b.sh\n/abs/c.sh\n");

    let names: Vec<String> = registry
        .read_all(Timing::PostMerge)
        .unwrap()
        .iter()
        .map(|source| source.to_string())
        .collect();
    assert_eq!(names, vec!["./a.sh", "https://example.com/b.sh", "/abs/c.sh"]);
}

#[test]
fn read_all_skips_blank_lines_and_trims() {
    let sandbox = Sandbox::new();
    let registry = Registry::new(sandbox.paths());
    fs::write(
        registry.path(Timing::PreCommit),
        "\n  ./lint.sh  \n\n\t\nhttps://example.com/fmt.sh\n",
    )
    .unwrap();

    let sources = registry.read_all(Timing::PreCommit).unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].as_str(), "./lint.sh");
    assert_eq!(sources[1].as_str(), "https://example.com/fmt.sh");
}

#[test]
fn missing_registry_is_an_io_error() {
    let sandbox = Sandbox::new();
    let registry = Registry::new(sandbox.paths());

    let err = registry.read_all(Timing::CommitMsg).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("commit-msg.hooks"));
    assert!(registry.read_raw(Timing::CommitMsg).unwrap_err().is_not_found());
    assert!(registry.read_all_or_empty(Timing::CommitMsg).unwrap().is_empty());
}

#[test]
fn one_bad_line_fails_the_whole_read() {
    let sandbox = Sandbox::new();
    let registry = Registry::new(sandbox.paths());
    fs::write(
        registry.path(Timing::PreCommit),
        "./lint.sh\nhttps://bad host/x.sh\n",
    )
    .unwrap();

    assert!(registry.read_all(Timing::PreCommit).is_err());
    assert!(registry.read_all_or_empty(Timing::PreCommit).is_err());
}
