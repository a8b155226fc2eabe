use std::path::Path;

use git_hook::{
    error::HookError,
    hooks::{HookSource, LocalHook},
};

#[test]
fn http_and_https_parse_as_remote() {
    for input in ["http://example.com/hooks/lint.sh", "https://example.com/fmt.sh"] {
        let source = HookSource::parse(input).unwrap();
        assert!(matches!(source, HookSource::Remote(_)), "{input}");
    }
}

#[test]
fn anything_else_parses_as_local() {
    for input in ["./scripts/lint.sh", "/usr/local/bin/check", "ftp://example.com/x", "lint"] {
        let source = HookSource::parse(input).unwrap();
        assert_eq!(source, HookSource::Local(LocalHook::new(input)));
    }
}

#[test]
fn serialization_is_byte_identical() {
    for input in [
        "./scripts/lint.sh",
        "https://EXAMPLE.com/a/../fmt.sh",
        "http://example.com",
        "hooks/with space.sh",
    ] {
        let source: HookSource = input.parse().unwrap();
        assert_eq!(source.to_string(), input);
        assert_eq!(source.as_str(), input);
    }
}

#[test]
fn padded_input_is_kept_verbatim() {
    for input in [" ./scripts/lint.sh", "./scripts/lint.sh\t", "  https-tool.sh  "] {
        let source = HookSource::parse(input).unwrap();
        assert_eq!(source.as_str(), input);
    }
}

#[test]
fn malformed_url_is_a_parse_error() {
    let err = HookSource::parse("https://exa mple.com/x.sh").unwrap_err();
    assert!(matches!(err, HookError::InvalidSource { .. }));
}

#[test]
fn empty_input_is_a_parse_error() {
    assert!(matches!(
        HookSource::parse("   "),
        Err(HookError::InvalidSource { .. })
    ));
}

#[test]
fn names_come_from_the_last_path_component() {
    assert_eq!(HookSource::parse("./scripts/lint.sh").unwrap().name(), "lint.sh");
    assert_eq!(
        HookSource::parse("https://example.com/hooks/fmt.sh?ref=main").unwrap().name(),
        "fmt.sh"
    );
    assert_eq!(HookSource::parse("https://example.com/").unwrap().name(), "hook");
    assert_eq!(HookSource::parse("https://example.com/dir/").unwrap().name(), "hook");
}

#[test]
fn relative_local_paths_resolve_against_base() {
    let hook = LocalHook::new("scripts/lint.sh");
    assert_eq!(
        hook.resolve(Path::new("/work")),
        Path::new("/work/scripts/lint.sh")
    );
    let absolute = LocalHook::new("/opt/lint.sh");
    assert_eq!(absolute.resolve(Path::new("/work")), Path::new("/opt/lint.sh"));
}
