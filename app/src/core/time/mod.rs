use std::cell::Cell;

thread_local! {
    static FIXED_NOW: Cell<Option<i64>> = const { Cell::new(None) };
}

/// Milliseconds since the Unix epoch, or the value pinned by [`with_fixed_now`] on this thread.
pub fn now_millis() -> i64 {
    FIXED_NOW
        .with(|fixed| fixed.get())
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis())
}

/// Runs `f` with [`now_millis`] pinned to `millis` on the current thread.
pub fn with_fixed_now<T>(millis: i64, f: impl FnOnce() -> T) -> T {
    struct Restore(Option<i64>);

    impl Drop for Restore {
        fn drop(&mut self) {
            FIXED_NOW.with(|fixed| fixed.set(self.0));
        }
    }

    let _restore = Restore(FIXED_NOW.with(|fixed| fixed.replace(Some(millis))));
    f()
}
