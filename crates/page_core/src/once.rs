/// A callback that can be invoked at most once.
///
/// One-shot listeners wrap their handler in this so a second delivery of the
/// same event, raced ahead of the DOM unregistration, is swallowed.
pub struct FireOnce<F> {
    callback: Option<F>,
}

impl<F> FireOnce<F> {
    pub fn new(callback: F) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    pub fn has_fired(&self) -> bool {
        self.callback.is_none()
    }

    /// Runs the callback with `arg` if it has not run yet.
    pub fn fire<A, R>(&mut self, arg: A) -> Option<R>
    where
        F: FnOnce(A) -> R,
    {
        self.callback.take().map(|callback| callback(arg))
    }
}

impl<F> std::fmt::Debug for FireOnce<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FireOnce")
            .field("fired", &self.has_fired())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fires_exactly_once() {
        let count = Cell::new(0);
        let mut once = FireOnce::new(|kind: &str| {
            count.set(count.get() + 1);
            kind.len()
        });

        assert!(!once.has_fired());
        assert_eq!(once.fire("click"), Some(5));
        assert_eq!(once.fire("scroll"), None);
        assert_eq!(count.get(), 1);
        assert!(once.has_fired());
    }
}
