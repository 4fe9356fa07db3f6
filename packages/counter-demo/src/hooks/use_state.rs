use crate::{Hook, Hooks};
use generational_box::{AnyStorage, GenerationalBox, Owner, SyncStorage};
use std::{
    fmt::{self, Debug, Display, Formatter},
    ops,
    pin::Pin,
    task::{Context, Poll},
};

mod private {
    pub trait Sealed {}
    impl Sealed for crate::Hooks<'_> {}
}

/// `UseState` is a hook that allows you to store state in a component.
///
/// When the state changes, the component will be updated again the next time its tree settles.
///
/// # Example
///
/// ```
/// # use counter_demo::prelude::*;
/// struct Clicker;
///
/// impl Component for Clicker {
///     type Props = ();
///
///     fn new(_props: &()) -> Self {
///         Self
///     }
///
///     fn update(&mut self, _props: &mut (), mut hooks: Hooks, updater: &mut ComponentUpdater) {
///         let count = hooks.use_state(|| 0);
///         updater.update_children([
///             Element::from(Button::new("+1", move |_| count.set_with(|prev| prev + 1))),
///             Element::from(Text::new(format!("clicks: {}", count))),
///         ]);
///     }
/// }
///
/// let mut tree = Tree::<Clicker>::mount(());
/// tree.click("+1").unwrap();
/// tree.settle();
/// assert!(tree.canvas().to_string().ends_with("clicks: 1\n"));
/// ```
pub trait UseState: private::Sealed {
    /// Creates a new state with its initial value computed by the given function.
    ///
    /// The function is only called on the component's first update. On later updates the hook
    /// returns a handle to the same storage.
    fn use_state<T, F>(&mut self, initial_value: F) -> State<T>
    where
        T: Unpin + Sync + Send + 'static,
        F: FnOnce() -> T;
}

impl UseState for Hooks<'_> {
    fn use_state<T, F>(&mut self, initial_value: F) -> State<T>
    where
        T: Unpin + Sync + Send + 'static,
        F: FnOnce() -> T,
    {
        self.use_hook(move || UseStateImpl::new(initial_value()))
            .state
    }
}

struct UseStateImpl<T: Unpin + Send + Sync + 'static> {
    _storage: Owner<SyncStorage>,
    state: State<T>,
}

impl<T: Unpin + Send + Sync + 'static> UseStateImpl<T> {
    pub fn new(initial_value: T) -> Self {
        let storage = Owner::default();
        UseStateImpl {
            state: State {
                inner: storage.insert(StateValue {
                    did_change: false,
                    value: initial_value,
                }),
            },
            _storage: storage,
        }
    }
}

impl<T: Unpin + Send + Sync + 'static> Hook for UseStateImpl<T> {
    fn poll_change(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        match self.state.inner.try_write() {
            Ok(mut value) if value.did_change => {
                value.did_change = false;
                Poll::Ready(())
            }
            _ => Poll::Pending,
        }
    }
}

struct StateValue<T> {
    did_change: bool,
    value: T,
}

/// A reference to the value of a [`State`].
pub struct StateRef<T: 'static> {
    inner: <SyncStorage as AnyStorage>::Ref<'static, StateValue<T>>,
}

impl<T: 'static> ops::Deref for StateRef<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner.value
    }
}

/// `State` is a copyable wrapper for a value that can be observed for changes. States used by a
/// component will cause the component to be updated again when their value changes.
///
/// Handles may be captured by event handlers and effects. Once the owning component is
/// unmounted, the storage is released and further access panics.
pub struct State<T: Send + Sync + 'static> {
    inner: GenerationalBox<StateValue<T>, SyncStorage>,
}

impl<T: Sync + Send + 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Sync + Send + 'static> Copy for State<T> {}

impl<T: Copy + Sync + Send + 'static> State<T> {
    /// Gets a copy of the current value of the state.
    pub fn get(&self) -> T {
        self.inner.read().value
    }
}

impl<T: Sync + Send + 'static> State<T> {
    /// Sets the value of the state.
    pub fn set(&self, value: T) {
        self.modify(|v| *v = value);
    }

    /// Requests an update computed from the previous value.
    ///
    /// This is the way to update state from a handler that may run several times before the
    /// component is updated again, since each call sees the result of the previous one.
    pub fn set_with<F>(&self, updater: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.modify(|v| *v = updater(v));
    }

    /// Returns a reference to the state's value.
    pub fn read(&self) -> StateRef<T> {
        StateRef {
            inner: self.inner.read(),
        }
    }

    fn modify<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.write();
        f(&mut inner.value);
        inner.did_change = true;
    }
}

impl<T: Debug + Sync + Send + 'static> Debug for State<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.inner.read().value.fmt(f)
    }
}

impl<T: Display + Sync + Send + 'static> Display for State<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.inner.read().value.fmt(f)
    }
}
