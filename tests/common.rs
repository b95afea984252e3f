#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a templates root holding a `demo` template with `a.txt` and `sub/b.txt`.
pub fn templates_root() -> TempDir {
    let root = TempDir::new().unwrap();
    let demo = root.path().join("demo");
    fs::create_dir_all(demo.join("sub")).unwrap();
    fs::write(demo.join("a.txt"), "alpha\n").unwrap();
    fs::write(demo.join("sub").join("b.txt"), [0u8, 159, 146, 150]).unwrap();
    root
}

pub fn read_tree(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}
