use std::{
    fmt,
    sync::{Arc, Mutex},
};

/// The payload delivered to scroll listeners: the window's vertical scroll offset after the tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    /// The vertical scroll offset, in rows.
    pub scroll_y: f64,
}

/// A callback registered with a [`Window`]'s scroll event.
///
/// Listeners are compared by identity, not by behavior: clones of one listener are equal to
/// each other, while two listeners built from identical closures are not.
#[derive(Clone)]
pub struct ScrollListener(Arc<dyn Fn(&ScrollEvent) + Send + Sync + 'static>);

impl ScrollListener {
    /// Wraps a callback into a new listener with its own identity.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ScrollEvent) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    fn call(&self, event: &ScrollEvent) {
        (self.0)(event)
    }
}

impl PartialEq for ScrollListener {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ScrollListener {}

impl fmt::Debug for ScrollListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScrollListener")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

#[derive(Default)]
struct WindowInner {
    scroll_y: f64,
    scroll_listeners: Vec<ScrollListener>,
}

/// `Window` is the global event target a component subscribes to. It's a cheaply cloneable
/// handle, so it can be passed to components as a prop instead of being reached through an
/// ambient global.
#[derive(Clone, Default)]
pub struct Window {
    inner: Arc<Mutex<WindowInner>>,
}

impl Window {
    /// Creates a window scrolled to the top with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.inner.lock().unwrap().scroll_y
    }

    /// Returns the number of registered scroll listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().unwrap().scroll_listeners.len()
    }

    /// Registers a scroll listener. Registering the same listener twice adds it twice.
    pub fn add_scroll_listener(&self, listener: ScrollListener) {
        log::trace!("adding scroll listener {:?}", listener);
        self.inner.lock().unwrap().scroll_listeners.push(listener);
    }

    /// Removes the first registration of exactly this listener. Returns `false` if the listener
    /// was never registered, in which case nothing changes.
    pub fn remove_scroll_listener(&self, listener: &ScrollListener) -> bool {
        let mut inner = self.inner.lock().unwrap();
        match inner.scroll_listeners.iter().position(|l| l == listener) {
            Some(idx) => {
                inner.scroll_listeners.remove(idx);
                log::trace!("removed scroll listener {:?}", listener);
                true
            }
            None => {
                log::debug!(
                    "scroll listener {:?} is not registered, nothing removed",
                    listener
                );
                false
            }
        }
    }

    /// Scrolls to an absolute offset and dispatches one scroll tick.
    pub fn scroll_to(&self, y: f64) {
        let (event, listeners) = {
            let mut inner = self.inner.lock().unwrap();
            inner.scroll_y = y.max(0.0);
            (
                ScrollEvent {
                    scroll_y: inner.scroll_y,
                },
                inner.scroll_listeners.clone(),
            )
        };
        // The lock is released so listeners may touch the window themselves.
        for listener in &listeners {
            listener.call(&event);
        }
    }

    /// Scrolls by a relative amount and dispatches one scroll tick.
    pub fn scroll_by(&self, dy: f64) {
        let y = self.scroll_y() + dy;
        self.scroll_to(y);
    }
}
