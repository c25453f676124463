// File: crates/progress-core/src/locks.rs
// Summary: In-process mutual exclusion keyed by book name.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// One lock per book. Entries live as long as the map; the key space is the
/// set of books a process has touched.
#[derive(Default)]
pub struct BookLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl BookLocks {
    pub fn new() -> Self { Self::default() }

    /// Run `f` while holding the lock for `book`. Other books are not blocked.
    pub fn with_book<T>(&self, book: &str, f: impl FnOnce() -> T) -> T {
        let lock = {
            let mut map = self.locks.lock();
            Arc::clone(map.entry(book.to_owned()).or_default())
        };
        let _guard = lock.lock();
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn same_book_is_serialized() {
        let locks = Arc::new(BookLocks::new());
        let inside = Arc::new(AtomicUsize::new(0));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let locks = Arc::clone(&locks);
                let inside = Arc::clone(&inside);
                thread::spawn(move || {
                    locks.with_book("Dune", || {
                        assert_eq!(inside.fetch_add(1, Ordering::SeqCst), 0);
                        thread::sleep(std::time::Duration::from_millis(2));
                        inside.fetch_sub(1, Ordering::SeqCst);
                    })
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }

    #[test]
    fn distinct_books_do_not_block_each_other() {
        let locks = BookLocks::new();
        let got = locks.with_book("Dune", || locks.with_book("Emma", || 7));
        assert_eq!(got, 7);
    }
}
