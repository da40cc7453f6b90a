//! Tests for image input discovery

#[cfg(test)]
mod tests {
    use brandlens::BrandError;
    use brandlens::io::discovery::{collect_image_paths, is_supported_image};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn asset_tree() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("b.png"), "b").unwrap();
        fs::write(root.join("a.JPG"), "a").unwrap();
        fs::write(root.join("notes.txt"), "n").unwrap();
        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("nested").join("c.webp"), "c").unwrap();
        temp_dir
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    // Tests extension matching ignores case
    // Verified by comparing extensions case-sensitively
    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("hero.PNG")));
        assert!(is_supported_image(Path::new("dir/photo.jpeg")));
        assert!(!is_supported_image(Path::new("readme.md")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    // Tests directory listing is sorted and skips subdirectories by default
    // Verified by removing the sort
    #[test]
    fn test_collect_directory_sorted() {
        let temp_dir = asset_tree();
        let paths = collect_image_paths(&[temp_dir.path().to_path_buf()], None, false).unwrap();

        assert_eq!(names(&paths), vec!["a.JPG", "b.png"]);
        assert!(paths.iter().all(|path| path.is_absolute()));
    }

    // Tests recursive discovery descends into subdirectories
    // Verified by ignoring the recursive flag
    #[test]
    fn test_collect_recursive() {
        let temp_dir = asset_tree();
        let paths = collect_image_paths(&[], Some(temp_dir.path()), true).unwrap();

        assert_eq!(names(&paths), vec!["a.JPG", "b.png", "c.webp"]);
    }

    // Tests files named twice are returned once, at their first position
    // Verified by deduplicating on the raw path instead of the canonical one
    #[test]
    fn test_collect_deduplicates() {
        let temp_dir = asset_tree();
        let root = temp_dir.path();
        let inputs = vec![
            root.join("b.png"),
            root.join("nested").join("..").join("b.png"),
            root.to_path_buf(),
        ];
        let paths = collect_image_paths(&inputs, None, false).unwrap();

        assert_eq!(names(&paths), vec!["b.png", "a.JPG"]);
    }

    // Tests missing inputs produce a descriptive error
    // Verified by returning an empty list instead
    #[test]
    fn test_collect_nothing_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let error =
            collect_image_paths(&[temp_dir.path().join("x.txt")], Some(&missing), false)
                .unwrap_err();

        match error {
            BrandError::NoInputs { reason } => {
                assert!(reason.contains("searched 1 input(s)"));
                assert!(reason.contains("missing"));
            }
            _ => unreachable!("Expected NoInputs error type"),
        }
    }
}
