//! Failure cases: every one must leave the package directory as it was

#[path = "../common/mod.rs"]
mod common;
use common::*;

use gosplit::config::{FormatterKind, ImplicitRepetition};
use gosplit::{ErrorCategory, ReceiverShape, SplitError, SplitPipeline};

#[test]
fn test_missing_receiver_type() {
    let dir = package_dir(&[(
        "p.go",
        "package p\n\nfunc Helper() {}\n\nfunc (g *Ghost) Boo() {}\n",
    )]);
    let before = snapshot(dir.path());

    let err = pipeline(config(dir.path())).run().unwrap_err();

    match err {
        SplitError::MissingReceiverType { method, receiver } => {
            assert_eq!(method, "Boo");
            assert_eq!(receiver, "Ghost");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_unchanged(dir.path(), &before);
}

#[test]
fn test_generic_receiver_unsupported() {
    let dir = package_dir(&[(
        "list.go",
        "package p\n\ntype List[T any] struct{ items []T }\n\nfunc (l *List[T]) Len() int { return len(l.items) }\n",
    )]);
    let before = snapshot(dir.path());

    let err = pipeline(config(dir.path())).run().unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Unsupported);
    assert!(matches!(
        err,
        SplitError::UnsupportedReceiver {
            shape: ReceiverShape::Generic,
            ..
        }
    ));
    assert_unchanged(dir.path(), &before);
}

#[test]
fn test_two_packages() {
    let dir = package_dir(&[
        ("a.go", "package a\n\nfunc A() {}\n"),
        ("b.go", "package b\n\nfunc B() {}\n"),
    ]);
    let before = snapshot(dir.path());

    let err = pipeline(config(dir.path())).run().unwrap_err();

    match err {
        SplitError::PackageCount { found, names, .. } => {
            assert_eq!(found, 2);
            assert_eq!(names, vec!["a", "b"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_unchanged(dir.path(), &before);
}

#[test]
fn test_no_package() {
    let dir = package_dir(&[("README.md", "# nothing here\n")]);
    let err = pipeline(config(dir.path())).run().unwrap_err();

    assert!(matches!(err, SplitError::PackageCount { found: 0, .. }));
    assert!(err.to_string().ends_with("found 0"));
}

#[test]
fn test_syntax_error() {
    let dir = package_dir(&[
        ("good.go", "package p\n\nfunc Good() {}\n"),
        ("bad.go", "package p\n\nfunc Bad( {\n"),
    ]);
    let before = snapshot(dir.path());

    let err = pipeline(config(dir.path())).run().unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Structural);
    assert!(err.to_string().contains("bad.go"));
    assert_unchanged(dir.path(), &before);
}

#[test]
fn test_implicit_repetition_rejected() {
    let dir = package_dir(&[(
        "level.go",
        "package p\n\nconst (\n\tLow = iota\n\tHigh\n)\n",
    )]);
    let before = snapshot(dir.path());

    let err = pipeline(config(dir.path()).implicit_repetition(ImplicitRepetition::Reject))
        .run()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "constant High relies on implicit repetition of the previous value"
    );
    assert_unchanged(dir.path(), &before);
}

#[test]
fn test_unit_named_like_existing_test_file() {
    let dir = package_dir(&[
        ("p.go", "package p\n\nfunc loadTest() int { return 1 }\n"),
        ("load_test.go", "package p\n\nimport \"testing\"\n\nfunc TestLoad(t *testing.T) {}\n"),
    ]);
    let before = snapshot(dir.path());

    let err = pipeline(config(dir.path())).run().unwrap_err();

    match err {
        SplitError::OutputConflict { ref path, .. } => {
            assert_eq!(path, &dir.path().join("load_test.go"));
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.category(), ErrorCategory::Unsupported);
    assert_unchanged(dir.path(), &before);
}

#[test]
fn test_formatter_not_on_path() {
    let dir = package_dir(&[("p.go", "package p\n\nfunc A() {}\n")]);
    let before = snapshot(dir.path());

    let config = config(dir.path())
        .formatter(FormatterKind::GoImports)
        .formatter_program("gosplit-test-no-such-goimports");
    let err = SplitPipeline::new(config).err().unwrap();

    assert_eq!(err.category(), ErrorCategory::Environment);
    assert_eq!(
        err.to_string(),
        "gosplit-test-no-such-goimports: executable file not found in $PATH"
    );
    assert_unchanged(dir.path(), &before);
}

#[test]
fn test_empty_package_replaced_by_nothing() {
    let dir = package_dir(&[("doc.go", "// Package p does nothing.\npackage p\n")]);
    let report = pipeline(config(dir.path())).run().unwrap();

    assert!(report.commit.written.is_empty());
    assert_files(dir.path(), &["doc.go.bak"]);
}
