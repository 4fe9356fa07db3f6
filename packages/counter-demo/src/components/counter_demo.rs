use crate::{
    components::{Button, Fragment, Text},
    hooks::{UseEffect, UseState},
    Component, ComponentUpdater, Console, Element, Hooks, ScrollListener, Window,
};

/// The label of the counter demo's button.
pub const BUTTON_LABEL: &str = "버튼";

/// How [`CounterDemo`] tears down its scroll subscription when it is unmounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerCleanup {
    /// The cleanup builds a new listener and asks the window to remove that one. Since it was
    /// never registered, nothing is removed and the original listener keeps firing after
    /// unmount.
    FreshListener,

    /// The cleanup removes the listener that was registered at mount.
    SameListener,
}

impl Default for ListenerCleanup {
    /// `FreshListener`, or `SameListener` when the `stable-scroll-listener` feature is enabled.
    fn default() -> Self {
        if cfg!(feature = "stable-scroll-listener") {
            Self::SameListener
        } else {
            Self::FreshListener
        }
    }
}

/// The props which can be passed to the [`CounterDemo`] component.
#[non_exhaustive]
#[derive(Clone, Default)]
pub struct CounterDemoProps {
    /// The window whose scroll event the component subscribes to.
    pub window: Window,

    /// Where the component writes its diagnostics.
    pub console: Console,

    /// How the scroll subscription is torn down on unmount.
    pub cleanup: ListenerCleanup,
}

impl CounterDemoProps {
    /// Creates props for the given collaborators with the default cleanup behavior.
    pub fn new(window: Window, console: Console) -> Self {
        Self {
            window,
            console,
            cleanup: ListenerCleanup::default(),
        }
    }

    /// Sets how the scroll subscription is torn down on unmount.
    pub fn with_cleanup(mut self, cleanup: ListenerCleanup) -> Self {
        self.cleanup = cleanup;
        self
    }
}

/// `CounterDemo` renders a button, a local counter and a state counter.
///
/// Writes to the console:
///
/// - `1` at the start of every render and `2` while the output is being built, between the
///   two counters.
/// - `3` once, from the mount effect.
/// - the window's scroll offset on every scroll tick, from the listener the mount effect
///   registers.
///
/// Clicking the button increments both counters, but only the state counter is ever displayed
/// as incremented: the local counter is a plain variable that every render starts again at
/// zero.
#[derive(Default)]
pub struct CounterDemo;

impl Component for CounterDemo {
    type Props = CounterDemoProps;

    fn new(_props: &Self::Props) -> Self {
        Self
    }

    fn update(
        &mut self,
        props: &mut Self::Props,
        mut hooks: Hooks,
        updater: &mut ComponentUpdater,
    ) {
        let console = &props.console;

        // Scratch state. The click handler mutates its own copy, which dies with this pass.
        let mut value: i64 = 0;
        let state = hooks.use_state(|| 0i64);

        let handle_button_click = move |_: ()| {
            value += 1;
            log::trace!("local value is now {}", value);
            state.set_with(|prev| prev + 1);
        };

        console.log(1);

        hooks.use_effect_with_cleanup(
            {
                let window = props.window.clone();
                let console = console.clone();
                let cleanup = props.cleanup;
                move || {
                    console.log(3);

                    let listener = scroll_logger(&console);
                    window.add_scroll_listener(listener.clone());

                    move || {
                        let listener = match cleanup {
                            ListenerCleanup::FreshListener => scroll_logger(&console),
                            ListenerCleanup::SameListener => listener,
                        };
                        window.remove_scroll_listener(&listener);
                    }
                }
            },
            (),
        );

        let button = Button::new(BUTTON_LABEL, handle_button_click);
        let value_text = Text::new(format!("value: {}", value));
        console.log(2);
        let state_text = Text::new(format!("state: {}", state));

        updater.update_children([Fragment::new([
            Element::from(button),
            Element::from(value_text),
            Element::from(state_text),
        ])]);
    }
}

fn scroll_logger(console: &Console) -> ScrollListener {
    let console = console.clone();
    ScrollListener::new(move |event| console.log(event.scroll_y))
}
