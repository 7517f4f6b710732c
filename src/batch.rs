//! Concurrent batch processing of discovered files.
//!
//! One worker thread per file: a corrupt envelope or I/O failure in one
//! file never keeps another file from being processed.  Workers report
//! through an mpsc channel, and `process` joins every worker before
//! draining it, so the returned collection is complete.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use crate::crypto::kdf::DerivedKey;
use crate::errors::Result;
use crate::files;
use crate::scan::Mode;

/// What happened to a single file during a batch run.
#[derive(Debug)]
pub struct FileOutcome {
    /// The file the batch was asked to process.
    pub path: PathBuf,
    /// The path written on success, or the error captured for this file.
    pub result: Result<PathBuf>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Encrypt or decrypt every path, one worker thread per file.
///
/// Every path is attempted no matter how many of the others fail.
/// Outcomes arrive in completion order, not input order.
pub fn process(paths: Vec<PathBuf>, mode: Mode, key: &DerivedKey) -> Vec<FileOutcome> {
    let (tx, rx) = mpsc::channel();

    let mut workers = Vec::with_capacity(paths.len());
    for path in paths {
        let tx = tx.clone();
        let key = key.clone();
        workers.push(thread::spawn(move || {
            let result = match mode {
                Mode::Encrypt => files::encrypt_file(&path, &key),
                Mode::Decrypt => files::decrypt_file(&path, &key),
            };
            // The receiver lives in `process`; this only fails if the
            // parent already panicked, and then nobody is reporting.
            let _ = tx.send(FileOutcome { path, result });
        }));
    }

    for worker in workers {
        // A worker that panicked simply reported nothing; the rest of
        // the batch still counts.
        let _ = worker.join();
    }

    // Sends never block (the channel is unbounded), so everything is
    // buffered by now; dropping the last sender ends the drain.
    drop(tx);
    rx.into_iter().collect()
}
