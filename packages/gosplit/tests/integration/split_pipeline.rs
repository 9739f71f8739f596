//! End-to-end split tests
//!
//! Each test builds a package in a temp directory and runs the pipeline
//! with the no-op formatter, so the written bytes are exactly what the
//! splitter produced.

#[path = "../common/mod.rs"]
mod common;
use common::*;

use gosplit::{CollisionPolicy, SplitError};
use pretty_assertions::assert_eq;

const GEO_HEADER: &str = "package geo\n\nimport (\n\t\"fmt\"\n\t\"math\"\n)\n\n";

// ═══════════════════════════════════════════════════════════════════════════
// Layout
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_one_file_per_declaration() {
    let dir = package_dir(&[("geo.go", GEO_PACKAGE)]);
    pipeline(config(dir.path())).run().unwrap();

    assert_files(
        dir.path(),
        &[
            "geo.go.bak",
            "point.go",
            "new_point.go",
            "max_x.go",
            "min_x.go",
            "origin.go",
        ],
    );
    assert_eq!(read(dir.path(), "geo.go.bak"), GEO_PACKAGE);
}

#[test]
fn test_methods_follow_their_type() {
    let dir = package_dir(&[("geo.go", GEO_PACKAGE)]);
    pipeline(config(dir.path())).run().unwrap();

    let expected = format!(
        "{GEO_HEADER}// Point is a location on the plane.
type Point struct {{
	X, Y float64
}}

// String formats the point.
func (p *Point) String() string {{
	return fmt.Sprintf(\"(%v, %v)\", p.X, p.Y)
}}

// Dist is the distance to the origin.
func (p Point) Dist() float64 {{
	return math.Hypot(p.X, p.Y)
}}
"
    );
    assert_eq!(read(dir.path(), "point.go"), expected);
}

#[test]
fn test_function_unit() {
    let dir = package_dir(&[("geo.go", GEO_PACKAGE)]);
    pipeline(config(dir.path())).run().unwrap();

    assert_eq!(
        read(dir.path(), "new_point.go"),
        format!(
            "{GEO_HEADER}// NewPoint returns a point.\nfunc NewPoint(x, y float64) Point {{\n\treturn Point{{X: x, Y: y}}\n}}\n"
        )
    );
}

#[test]
fn test_value_units_keep_docs_types_and_comments() {
    let dir = package_dir(&[("geo.go", GEO_PACKAGE)]);
    pipeline(config(dir.path())).run().unwrap();

    assert_eq!(
        read(dir.path(), "max_x.go"),
        format!("{GEO_HEADER}// Limits.\n// MaxX bounds X.\nconst MaxX = 100\n")
    );
    assert_eq!(
        read(dir.path(), "min_x.go"),
        format!("{GEO_HEADER}// Limits.\nconst MinX int = -100 // lower bound\n")
    );
    assert_eq!(
        read(dir.path(), "origin.go"),
        format!("{GEO_HEADER}var Origin = Point{{}} // zero value\n")
    );
}

#[test]
fn test_const_elision() {
    let dir = package_dir(&[("c.go", "package c\n\nconst (\n\tA = 1\n\tB\n\tC = 3\n)\n")]);
    pipeline(config(dir.path())).run().unwrap();

    assert_eq!(read(dir.path(), "a.go"), "package c\n\nconst A = 1\n");
    assert_eq!(read(dir.path(), "b.go"), "package c\n\nconst B\n");
    assert_eq!(read(dir.path(), "c.go"), "package c\n\nconst C = 3\n");
}

#[test]
fn test_imports_merged_across_files() {
    let dir = package_dir(&[
        ("a.go", "package p\n\nimport \"fmt\"\n\nfunc A() { fmt.Println() }\n"),
        ("b.go", "package p\n\nimport (\n\t\"fmt\"\n\tos2 \"os\"\n)\n\nfunc B() { os2.Exit(0) }\n"),
    ]);
    pipeline(config(dir.path())).run().unwrap();

    let header = "package p\n\nimport (\n\t\"fmt\"\n\tos2 \"os\"\n)\n\n";
    assert_eq!(
        read(dir.path(), "a.go"),
        format!("{header}func A() {{ fmt.Println() }}\n")
    );
    assert_eq!(
        read(dir.path(), "b.go"),
        format!("{header}func B() {{ os2.Exit(0) }}\n")
    );
}

#[test]
fn test_method_in_other_file_joins_its_type() {
    let dir = package_dir(&[
        ("a.go", "package p\n\ntype Point struct{}\n"),
        ("b.go", "package p\n\nfunc (p *Point) M() {}\n"),
    ]);
    pipeline(config(dir.path())).run().unwrap();

    assert_files(dir.path(), &["a.go.bak", "b.go.bak", "point.go"]);
    assert_eq!(
        read(dir.path(), "point.go"),
        "package p\n\ntype Point struct{}\n\nfunc (p *Point) M() {}\n"
    );
}

#[test]
fn test_test_files_untouched() {
    let dir = package_dir(&[
        ("geo.go", "package geo\n\nfunc Area() int { return 0 }\n"),
        ("geo_test.go", "package geo\n\nfunc TestArea() {}\n"),
    ]);
    pipeline(config(dir.path())).run().unwrap();

    assert_files(dir.path(), &["geo.go.bak", "geo_test.go", "area.go"]);
    assert_eq!(
        read(dir.path(), "geo_test.go"),
        "package geo\n\nfunc TestArea() {}\n"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Re-running
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_resplit_is_idempotent() {
    let dir = package_dir(&[("geo.go", GEO_PACKAGE)]);
    pipeline(config(dir.path())).run().unwrap();
    let first = go_files(dir.path());

    pipeline(config(dir.path())).run().unwrap();
    let second = go_files(dir.path());

    assert_eq!(first, second);
}

#[test]
fn test_second_run_keeps_first_backup() {
    let src = "package geo\n\ntype Geo int\n\nfunc Helper() {}\n";
    let dir = package_dir(&[("geo.go", src)]);
    pipeline(config(dir.path())).run().unwrap();
    assert_eq!(read(dir.path(), "geo.go.bak"), src);

    let report = pipeline(config(dir.path())).run().unwrap();

    assert_eq!(read(dir.path(), "geo.go.bak"), src);
    assert_eq!(read(dir.path(), "geo.go.bak.1"), "package geo\n\ntype Geo int\n");
    assert!(report.commit.backups.contains(&dir.path().join("geo.go.bak.1")));
    assert_files(
        dir.path(),
        &["geo.go.bak", "geo.go.bak.1", "helper.go.bak", "geo.go", "helper.go"],
    );
}

#[test]
fn test_without_backups_originals_removed() {
    let dir = package_dir(&[("geo.go", GEO_PACKAGE)]);
    let report = pipeline(config(dir.path()).backup(false)).run().unwrap();

    assert!(!dir.path().join("geo.go").exists());
    assert!(!dir.path().join("geo.go.bak").exists());
    assert_eq!(report.commit.removed.len(), 1);
    assert!(report.commit.backups.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// Collisions
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_collision_later_declaration_survives() {
    let dir = package_dir(&[("p.go", "package p\n\nfunc Foo() int { return 1 }\n\nfunc foo() int { return 2 }\n")]);
    pipeline(config(dir.path())).run().unwrap();

    assert_files(dir.path(), &["p.go.bak", "foo.go"]);
    assert_eq!(
        read(dir.path(), "foo.go"),
        "package p\n\nfunc foo() int { return 2 }\n"
    );
}

#[test]
fn test_collision_rejected_leaves_package_unchanged() {
    let dir = package_dir(&[("p.go", "package p\n\nfunc Foo() {}\n\nfunc foo() {}\n")]);
    let before = snapshot(dir.path());

    let err = pipeline(config(dir.path()).collision(CollisionPolicy::Reject))
        .run()
        .unwrap_err();

    assert!(matches!(err, SplitError::FilenameCollision { .. }));
    assert_unchanged(dir.path(), &before);
}

// ═══════════════════════════════════════════════════════════════════════════
// Dry run
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_plan_lists_units_without_writing() {
    let dir = package_dir(&[("geo.go", GEO_PACKAGE)]);
    let before = snapshot(dir.path());

    let plan = pipeline(config(dir.path())).plan().unwrap();

    assert_eq!(plan.package, "geo");
    assert_eq!(
        plan.units
            .iter()
            .map(|u| u.filename.as_str())
            .collect::<Vec<_>>(),
        vec!["point.go", "new_point.go", "max_x.go", "min_x.go", "origin.go"]
    );
    assert_eq!(plan.units[0].owner, "Point");
    assert_unchanged(dir.path(), &before);
}
