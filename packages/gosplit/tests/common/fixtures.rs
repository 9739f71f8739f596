//! Test fixtures: throwaway package directories

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use gosplit::features::formatting::NoopFormatter;
use gosplit::{SplitConfig, SplitPipeline};
use tempfile::TempDir;

/// A package with a type, a pointer method, a constructor, a const group
/// and a documented variable
pub const GEO_PACKAGE: &str = r#"package geo

import (
	"fmt"
	"math"
)

// Point is a location on the plane.
type Point struct {
	X, Y float64
}

// String formats the point.
func (p *Point) String() string {
	return fmt.Sprintf("(%v, %v)", p.X, p.Y)
}

// NewPoint returns a point.
func NewPoint(x, y float64) Point {
	return Point{X: x, Y: y}
}

// Dist is the distance to the origin.
func (p Point) Dist() float64 {
	return math.Hypot(p.X, p.Y)
}

// Limits.
const (
	// MaxX bounds X.
	MaxX = 100
	MinX int = -100 // lower bound
)

var Origin = Point{} // zero value
"#;

/// Create a temp directory holding `files`
pub fn package_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

/// Every file of `dir` by name
pub fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            (
                entry.file_name().to_string_lossy().into_owned(),
                fs::read(entry.path()).unwrap(),
            )
        })
        .collect()
}

/// Only the `.go` files of `dir`
pub fn go_files(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    snapshot(dir)
        .into_iter()
        .filter(|(name, _)| name.ends_with(".go"))
        .collect()
}

pub fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

/// Default config for `dir`, without the external formatter
pub fn config(dir: &Path) -> SplitConfig {
    SplitConfig::new(dir)
}

pub fn pipeline(config: SplitConfig) -> SplitPipeline {
    SplitPipeline::with_formatter(config, Box::new(NoopFormatter)).unwrap()
}
