//! Identifier naming
//!
//! `FooBarBaz` -> `foo_bar_baz.go`. Lossy on case: `Foo` and `foo` map to
//! the same file, which is the only way two units can collide.
//!
//! Some generated names mean something to `go build`: a leading `_` or `.`
//! hides the file, `_test` makes it a test file, and a trailing GOOS/GOARCH
//! word restricts it to one platform. [`special_filename`] spots them.

use std::fmt;

/// Extension of every generated unit
pub const GO_EXTENSION: &str = ".go";

/// Separator inserted before internal uppercase letters
pub const WORD_SEPARATOR: char = '_';

/// Output filename for a declaration identifier
pub fn unit_filename(identifier: &str) -> String {
    let mut buf = String::with_capacity(identifier.len() * 2 + GO_EXTENSION.len());
    for (i, ch) in identifier.chars().enumerate() {
        if i > 0 && ch.is_uppercase() {
            buf.push(WORD_SEPARATOR);
        }
        buf.extend(ch.to_lowercase());
    }
    buf.push_str(GO_EXTENSION);
    buf
}

const KNOWN_OS: &[&str] = &[
    "aix", "android", "darwin", "dragonfly", "freebsd", "hurd", "illumos", "ios", "js", "linux",
    "nacl", "netbsd", "openbsd", "plan9", "solaris", "wasip1", "windows", "zos",
];

const KNOWN_ARCH: &[&str] = &[
    "386", "amd64", "amd64p32", "arm", "armbe", "arm64", "arm64be", "loong64", "mips", "mipsle",
    "mips64", "mips64le", "mips64p32", "mips64p32le", "ppc", "ppc64", "ppc64le", "riscv",
    "riscv64", "s390", "s390x", "sparc", "sparc64", "wasm",
];

/// How the go tool treats a filename other than as a plain source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialFilename {
    /// Skipped by the go tool
    Ignored,
    /// Compiled only by `go test`
    Test,
    /// Compiled only for the named GOOS and/or GOARCH
    Platform(String),
}

impl fmt::Display for SpecialFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialFilename::Ignored => write!(f, "ignored by the go tool"),
            SpecialFilename::Test => write!(f, "compiled only by go test"),
            SpecialFilename::Platform(constraint) => {
                write!(f, "compiled only for {}", constraint)
            }
        }
    }
}

/// Build meaning the go tool attaches to `filename`, if any
pub fn special_filename(filename: &str) -> Option<SpecialFilename> {
    if filename.starts_with('_') || filename.starts_with('.') {
        return Some(SpecialFilename::Ignored);
    }
    let stem = filename.strip_suffix(GO_EXTENSION).unwrap_or(filename);
    if stem.ends_with("_test") {
        return Some(SpecialFilename::Test);
    }

    let (_, tail) = stem.split_once(WORD_SEPARATOR)?;
    let words: Vec<&str> = tail.split(WORD_SEPARATOR).collect();
    let is_os = |w: &str| KNOWN_OS.contains(&w);
    let is_arch = |w: &str| KNOWN_ARCH.contains(&w);

    let last = *words.last()?;
    if words.len() >= 2 {
        let prev = words[words.len() - 2];
        if is_os(prev) && is_arch(last) {
            return Some(SpecialFilename::Platform(format!("{}/{}", prev, last)));
        }
    }
    if is_os(last) || is_arch(last) {
        return Some(SpecialFilename::Platform(last.to_string()));
    }
    None
}
