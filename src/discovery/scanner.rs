//! File system scanner for order documents.
//!
//! Recursively scans directories for `.json`, `.yaml` and `.yml` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions recognized as order documents.
pub const ORDER_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Check if a path looks like an order document.
pub fn is_order_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ORDER_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Scan a directory for order documents, sorted by path.
pub fn scan_directory(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    if !root.exists() {
        return found;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if is_order_file(path) {
            found.push(path.to_path_buf());
        }
    }

    found.sort();
    found
}

/// Expand a list of files and directories into order documents.
///
/// Files are kept as given, whatever their extension; directories are
/// scanned recursively.
pub fn collect_orders(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut orders = Vec::new();
    for path in paths {
        if path.is_dir() {
            orders.extend(scan_directory(path));
        } else {
            orders.push(path.clone());
        }
    }
    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_order_file() {
        assert!(is_order_file(Path::new("a.json")));
        assert!(is_order_file(Path::new("dir/b.YAML")));
        assert!(is_order_file(Path::new("c.yml")));
        assert!(!is_order_file(Path::new("photo.png")));
        assert!(!is_order_file(Path::new("README")));
    }

    #[test]
    fn test_scan_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("nested/a.yaml"), "").unwrap();
        fs::write(dir.path().join("photo.png"), "").unwrap();

        let found = scan_directory(dir.path());
        assert_eq!(
            found,
            vec![dir.path().join("b.json"), dir.path().join("nested/a.yaml")]
        );
    }

    #[test]
    fn test_scan_missing_directory() {
        assert!(scan_directory(Path::new("/nonexistent/orders")).is_empty());
    }

    #[test]
    fn test_collect_orders_keeps_explicit_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("x.json"), "{}").unwrap();
        let explicit = PathBuf::from("orders.txt");

        let orders = collect_orders(&[explicit.clone(), dir.path().to_path_buf()]);
        assert_eq!(orders, vec![explicit, dir.path().join("x.json")]);
    }
}
