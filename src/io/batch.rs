//! Ordered parallel execution of per-image work
//!
//! Workers pull image indices from a shared counter and report back over a
//! channel; the calling thread drives progress and stores every result in the
//! slot of its input index, so output order never depends on scheduling.

use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

enum Event<T> {
    Started(usize),
    Finished(usize, Result<T>),
}

/// Run `work` for every path on up to `jobs` threads, returning results in input order
///
/// With `fail_fast`, workers stop taking new images after the first failure;
/// images that were never started are reported as `None`.
pub fn run_ordered<T, F>(
    paths: &[PathBuf],
    jobs: usize,
    fail_fast: bool,
    progress: &mut ProgressManager,
    work: F,
) -> Vec<Option<Result<T>>>
where
    T: Send,
    F: Fn(&Path) -> Result<T> + Sync,
{
    let workers = jobs.clamp(1, paths.len().max(1));
    let next = AtomicUsize::new(0);
    let stop = AtomicBool::new(false);
    let mut slots: Vec<Option<Result<T>>> =
        std::iter::repeat_with(|| None).take(paths.len()).collect();

    progress.initialize(paths.len());

    thread::scope(|scope| {
        let (sender, receiver) = mpsc::channel();
        for _ in 0..workers {
            let sender = sender.clone();
            let (next, stop, work) = (&next, &stop, &work);
            scope.spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some(path) = paths.get(index) else {
                        break;
                    };
                    if sender.send(Event::Started(index)).is_err() {
                        break;
                    }
                    let result = work(path);
                    if sender.send(Event::Finished(index, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(sender);

        for event in receiver {
            match event {
                Event::Started(index) => {
                    if let Some(path) = paths.get(index) {
                        progress.start_image(index, path);
                    }
                }
                Event::Finished(index, result) => {
                    progress.complete_image(index, result.is_ok());
                    if fail_fast && result.is_err() {
                        stop.store(true, Ordering::Relaxed);
                    }
                    if let Some(slot) = slots.get_mut(index) {
                        *slot = Some(result);
                    }
                }
            }
        }
    });

    progress.finish();
    slots
}
