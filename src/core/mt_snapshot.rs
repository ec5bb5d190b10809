use std::sync::{Arc, PoisonError, RwLock};

/// A thread-safe, reference-counted slot holding the latest published version of a value.
///
/// `MtSnapshot` hands out immutable `Arc<T>` snapshots. Publishing replaces the whole value
/// at once, so a reader sees either the old version or the new one and never a value that
/// is still being built. Snapshots taken before a publish stay valid and unchanged.
///
/// # Type Parameters
/// - `T`: The type of the published value, must be `Send + Sync`
///
/// # Examples
///
/// ```
/// use voxel_terrain::core::MtSnapshot;
///
/// let slot = MtSnapshot::new(1);
/// let before = slot.snapshot();
///
/// slot.publish(2);
///
/// assert_eq!(*before, 1);
/// assert_eq!(*slot.snapshot(), 2);
/// ```
///
/// # Performance Considerations
/// - The lock is held only long enough to clone or swap an `Arc`
/// - Build the replacement value before calling [`MtSnapshot::publish`]
pub struct MtSnapshot<T: Send + Sync> {
    current: Arc<RwLock<Arc<T>>>,
}

impl<T: Send + Sync> MtSnapshot<T> {
    /// Creates a slot whose first published version is `value`.
    pub fn new(value: T) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(value))),
        }
    }

    /// Returns the currently published version.
    ///
    /// A poisoned lock is recovered: writers only ever swap in a complete `Arc`, so the
    /// stored value is valid even if a writer panicked.
    pub fn snapshot(&self) -> Arc<T> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the published version with `value`.
    ///
    /// # Arguments
    /// * `value` - The complete new version
    ///
    /// # Returns
    /// The version this call published. The clone is taken under the write lock, so it
    /// is never a version published by a concurrent caller.
    pub fn publish(&self, value: T) -> Arc<T> {
        let next = Arc::new(value);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next.clone();
        next
    }
}

impl<T: Send + Sync> Clone for MtSnapshot<T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn publish_returns_the_version_it_published() {
        let slot = MtSnapshot::new(String::from("old"));
        let before = slot.snapshot();
        let published = slot.publish(String::from("new"));
        assert_eq!(*before, "old");
        assert_eq!(*published, "new");
        assert!(Arc::ptr_eq(&published, &slot.snapshot()));
    }

    #[test]
    fn concurrent_publishers_get_back_their_own_version() {
        let slot = MtSnapshot::new(0u32);
        let handles: Vec<_> = (1..=8u32)
            .map(|writer| {
                let slot = slot.clone();
                thread::spawn(move || {
                    for round in 0..500u32 {
                        let value = writer * 10_000 + round;
                        assert_eq!(*slot.publish(value), value);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn clones_share_the_slot() {
        let slot = MtSnapshot::new(vec![1, 2, 3]);
        let clone = slot.clone();

        let handle = thread::spawn(move || {
            clone.publish(vec![4, 5]);
        });
        handle.join().unwrap();

        assert_eq!(*slot.snapshot(), vec![4, 5]);
    }

    #[test]
    fn readers_never_see_a_partial_value() {
        let slot = MtSnapshot::new(vec![0u32; 64]);
        let writer = slot.clone();

        let handle = thread::spawn(move || {
            for round in 1..200u32 {
                writer.publish(vec![round; 64]);
            }
        });

        for _ in 0..200 {
            let snapshot = slot.snapshot();
            let first = snapshot[0];
            assert!(snapshot.iter().all(|value| *value == first));
        }
        handle.join().unwrap();
    }
}
