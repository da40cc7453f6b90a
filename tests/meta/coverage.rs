//! Layout checks tying sources, unit tests and benches together

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const UNIT_DIR: &str = "tests/unit";

    /// Rust files under `root`, relative to it, skipping crate roots and module files
    fn leaf_sources(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        walk(root, root, &mut found)?;
        Ok(found)
    }

    fn walk(root: &Path, dir: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                walk(root, &path, found)?;
                continue;
            }
            let is_rust = path.extension().is_some_and(|ext| ext == "rs");
            let is_root = path
                .file_name()
                .is_some_and(|name| name == "main.rs" || name == "lib.rs" || name == "mod.rs");
            if is_rust
                && !is_root
                && let Ok(relative) = path.strip_prefix(root)
            {
                found.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }

    fn listing(paths: &[&String], prefix: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {prefix}{path}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests every source module has a mirrored unit test file and no test file is orphaned
    // Verified by deleting tests/unit/math/color.rs
    #[test]
    fn test_unit_tests_mirror_sources() {
        let sources = leaf_sources(Path::new("src")).unwrap();
        let units = leaf_sources(Path::new(UNIT_DIR)).unwrap();

        let missing: Vec<&String> = sources.difference(&units).collect();
        let orphaned: Vec<&String> = units.difference(&sources).collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            listing(&missing, "src/")
        );
        assert!(
            orphaned.is_empty(),
            "Unit test files without a source module:\n{}",
            listing(&orphaned, "tests/unit/")
        );
    }

    // Tests unit files keep their cases in a cfg(test) module with annotated cases
    // Verified by removing a Verified-by comment from one case
    #[test]
    fn test_unit_files_follow_test_module_layout() {
        let mut offenders = Vec::new();

        for relative in leaf_sources(Path::new(UNIT_DIR)).unwrap() {
            let content = fs::read_to_string(Path::new(UNIT_DIR).join(&relative)).unwrap();
            let cases = content.matches("#[test]").count();

            if !content.starts_with("//!") {
                offenders.push(format!("{relative}: missing module doc"));
            }
            if !content.contains("#[cfg(test)]\nmod tests {") {
                offenders.push(format!("{relative}: cases outside a cfg(test) mod tests"));
            }
            if cases == 0 {
                offenders.push(format!("{relative}: no #[test] functions"));
            }
            if content.matches("// Tests ").count() < cases
                || content.matches("// Verified by ").count() < cases
            {
                offenders.push(format!("{relative}: cases without Tests/Verified by notes"));
            }
        }

        assert!(offenders.is_empty(), "Unit test layout problems:\n{}", offenders.join("\n"));
    }

    // Tests each unit test directory declares every file and subdirectory it holds
    // Verified by dropping `pub mod ocr;` from tests/unit/io/mod.rs
    #[test]
    fn test_unit_modules_are_declared() {
        let mut undeclared = Vec::new();
        let mut pending = vec![Path::new(UNIT_DIR).to_path_buf()];

        while let Some(dir) = pending.pop() {
            let root_file = if dir == Path::new(UNIT_DIR) { "main.rs" } else { "mod.rs" };
            let declarations = fs::read_to_string(dir.join(root_file)).unwrap_or_default();

            for entry in fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                    continue;
                };
                if stem == "main" || stem == "mod" {
                    continue;
                }
                if path.is_dir() {
                    pending.push(path.clone());
                }
                let declared = declarations
                    .lines()
                    .any(|line| line.trim_start_matches("pub ").trim() == format!("mod {stem};"));
                if !declared {
                    undeclared.push(format!("  - {} (in {})", path.display(), root_file));
                }
            }
        }

        assert!(
            undeclared.is_empty(),
            "Unit test modules that are never compiled:\n{}",
            undeclared.join("\n")
        );
    }

    // Tests every [[bench]] target in the manifest has a source file and vice versa
    // Verified by renaming benches/aggregation.rs
    #[test]
    fn test_bench_targets_match_files() {
        let manifest = fs::read_to_string("Cargo.toml").unwrap();
        let declared: BTreeSet<String> = manifest
            .split("[[bench]]")
            .skip(1)
            .filter_map(|block| {
                block.lines().find_map(|line| {
                    let value = line.trim().strip_prefix("name")?.trim().strip_prefix('=')?;
                    Some(value.trim().trim_matches('"').to_string())
                })
            })
            .collect();
        let files: BTreeSet<String> = leaf_sources(Path::new("benches"))
            .unwrap()
            .into_iter()
            .map(|file| file.trim_end_matches(".rs").to_string())
            .collect();

        assert!(!declared.is_empty(), "Cargo.toml declares no benches");
        assert_eq!(declared, files, "[[bench]] names and benches/*.rs differ");
    }

    // Tests integration test files outside the unit tree contain cases
    // Verified by emptying tests/pipeline.rs
    #[test]
    fn test_integration_files_contain_tests() {
        let mut empty = Vec::new();
        for entry in fs::read_dir("tests").unwrap() {
            let path = entry.unwrap().path();
            if path.extension().is_some_and(|ext| ext == "rs") {
                let content = fs::read_to_string(&path).unwrap();
                if !content.contains("#[test]") {
                    empty.push(path.display().to_string());
                }
            }
        }

        assert!(empty.is_empty(), "Integration files without tests: {empty:?}");
    }
}
