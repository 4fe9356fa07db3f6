use core::ops::Deref;
use std::ops::DerefMut;

/// `Handler` is a type representing an optional event handler, commonly used for element
/// properties such as a button's click handler.
///
/// Any function that takes a single argument and returns `()` can be converted into a `Handler`,
/// and it can be invoked using function call syntax. Handlers are `FnMut`, so a handler may keep
/// private state between invocations.
pub struct Handler<'a, T>(bool, Box<dyn FnMut(T) + Send + Sync + 'a>);

impl<T> Handler<'_, T> {
    /// Returns `true` if the handler was default-initialized.
    pub fn is_default(&self) -> bool {
        !self.0
    }
}

impl<T> Default for Handler<'_, T> {
    fn default() -> Self {
        Self(false, Box::new(|_| {}))
    }
}

impl<'a, T, F> From<F> for Handler<'a, T>
where
    F: FnMut(T) + Send + Sync + 'a,
{
    fn from(f: F) -> Self {
        Self(true, Box::new(f))
    }
}

impl<'a, T: 'a> Deref for Handler<'a, T> {
    type Target = dyn FnMut(T) + Send + Sync + 'a;

    fn deref(&self) -> &Self::Target {
        self.1.as_ref()
    }
}

impl<'a, T: 'a> DerefMut for Handler<'a, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.1.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler() {
        let mut handler = Handler::<i32>::default();
        handler(0);
        handler(0);
        assert!(handler.is_default());

        let mut calls = 0;
        {
            let mut handler = Handler::from(|value| {
                assert_eq!(value, 42);
                calls += 1;
            });
            handler(42);
            handler(42);
            assert!(!handler.is_default());
        }
        assert_eq!(calls, 2);
    }
}
