//! Tests for ordered parallel execution

#[cfg(test)]
mod tests {
    use brandlens::BrandError;
    use brandlens::io::batch::run_ordered;
    use brandlens::io::progress::ProgressManager;
    use std::path::PathBuf;
    use std::time::Duration;

    fn paths(count: usize) -> Vec<PathBuf> {
        (0..count).map(|i| PathBuf::from(format!("{i}.png"))).collect()
    }

    fn index_of(path: &std::path::Path) -> usize {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse().ok())
            .unwrap()
    }

    // Tests results land in input order regardless of completion order
    // Verified by pushing results as they arrive
    #[test]
    fn test_results_in_input_order() {
        let inputs = paths(8);
        let mut progress = ProgressManager::hidden();
        let results = run_ordered(&inputs, 4, false, &mut progress, |path| {
            let index = index_of(path);
            std::thread::sleep(Duration::from_millis(((8 - index) * 3) as u64));
            Ok(index * 10)
        });

        let values: Vec<usize> = results
            .into_iter()
            .map(|slot| slot.unwrap().unwrap())
            .collect();
        assert_eq!(values, vec![0, 10, 20, 30, 40, 50, 60, 70]);
        assert_eq!(progress.image_count(), 8);
    }

    // Tests failures are kept per slot without fail-fast
    // Verified by stopping after the first failure unconditionally
    #[test]
    fn test_failures_recorded_per_slot() {
        let inputs = paths(4);
        let mut progress = ProgressManager::hidden();
        let results = run_ordered(&inputs, 2, false, &mut progress, |path| {
            if index_of(path) % 2 == 1 {
                Err(BrandError::AllImagesFailed { attempted: 1 })
            } else {
                Ok(())
            }
        });

        let outcomes: Vec<Option<bool>> = results
            .iter()
            .map(|slot| slot.as_ref().map(Result::is_ok))
            .collect();
        assert_eq!(outcomes, vec![Some(true), Some(false), Some(true), Some(false)]);
    }

    // Tests fail-fast keeps earlier results and the failure itself
    // Verified by clearing slots after a failure
    #[test]
    fn test_fail_fast_keeps_failure() {
        let inputs = paths(3);
        let mut progress = ProgressManager::hidden();
        let results = run_ordered(&inputs, 1, true, &mut progress, |path| {
            if index_of(path) == 1 {
                Err(BrandError::MissingApiKey)
            } else {
                Ok(())
            }
        });

        assert!(matches!(results[0], Some(Ok(()))));
        assert!(matches!(results[1], Some(Err(BrandError::MissingApiKey))));
        assert!(!matches!(results[2], Some(Err(_))));
    }

    // Tests empty input and zero jobs
    // Verified by spawning zero workers for a non-empty batch
    #[test]
    fn test_edge_job_counts() {
        let mut progress = ProgressManager::hidden();
        let empty = run_ordered(&[], 4, false, &mut progress, |_| Ok(()));
        assert!(empty.is_empty());

        let inputs = paths(2);
        let results = run_ordered(&inputs, 0, false, &mut progress, |_| Ok(1));
        assert!(results.iter().all(|slot| matches!(slot, Some(Ok(1)))));
    }
}
