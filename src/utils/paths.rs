use std::path::{Component, Path, PathBuf};

/// Folds `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root; leading `..` in a relative path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_current_and_parent() {
        assert_eq!(normalize_path(Path::new("/a/./b/../c.txt")), PathBuf::from("/a/c.txt"));
    }

    #[test]
    fn test_parent_at_root_stays_at_root() {
        assert_eq!(normalize_path(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn test_relative_leading_parent_kept() {
        assert_eq!(normalize_path(Path::new("../a/../b")), PathBuf::from("../b"));
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn test_plain_path_unchanged() {
        assert_eq!(normalize_path(Path::new("/tmp/orig.txt")), PathBuf::from("/tmp/orig.txt"));
    }
}
