use crate::{hook::AnyHook, Canvas, Component, Element, Error, Hook, Hooks, Result, Window};
use futures::{
    stream::{self, Stream, StreamExt},
    task::noop_waker,
};
use std::{
    pin::Pin,
    task::{Context, Poll},
};

/// Passed to [`Component::update`] and to hooks, it is how a pass commits its output.
pub struct ComponentUpdater<'a> {
    children: &'a mut Vec<Element>,
}

impl<'a> ComponentUpdater<'a> {
    pub(crate) fn new(children: &'a mut Vec<Element>) -> Self {
        Self { children }
    }

    /// Commits the component's output, replacing whatever the previous pass committed.
    pub fn update_children<I, T>(&mut self, children: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Element>,
    {
        self.children.clear();
        self.children.extend(children.into_iter().map(Into::into));
    }
}

/// An event delivered to a mounted tree by its host.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// The user clicked the button with the given label.
    Click(String),
    /// The window scrolled to an absolute offset.
    ScrollTo(f64),
    /// The window scrolled by a relative amount.
    ScrollBy(f64),
    /// The host is tearing the tree down.
    Unmount,
}

/// `Tree` owns a mounted component instance along with its hooks and its committed output.
///
/// Dropping a tree unmounts it.
///
/// ```
/// # use counter_demo::prelude::*;
/// let mut tree = Tree::<CounterDemo>::mount(CounterDemoProps::default());
/// assert_eq!(tree.render_count(), 1);
/// tree.unmount();
/// assert!(!tree.is_mounted());
/// ```
pub struct Tree<C: Component> {
    component: C,
    props: C::Props,
    hooks: Vec<Box<dyn AnyHook>>,
    children: Vec<Element>,
    render_count: usize,
    mounted: bool,
}

impl<C: Component> Tree<C> {
    /// Instantiates the component and performs the first update pass, which renders, commits,
    /// and runs the component's effects.
    pub fn mount(props: C::Props) -> Self {
        let mut tree = Self {
            component: C::new(&props),
            props,
            hooks: Vec::new(),
            children: Vec::new(),
            render_count: 0,
            mounted: true,
        };
        log::debug!("mounting {}", std::any::type_name::<C>());
        tree.pass();
        tree
    }

    /// Returns `true` until [`unmount`](Self::unmount) is called.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns the number of update passes committed since the tree was mounted.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Returns the committed output.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Performs one update pass: render, commit, then effects.
    pub fn update(&mut self) -> Result<()> {
        if !self.mounted {
            return Err(Error::Unmounted);
        }
        self.pass();
        Ok(())
    }

    fn pass(&mut self) {
        let first_update = self.render_count == 0;
        log::trace!("update pass {}", self.render_count);
        let mut updater = ComponentUpdater::new(&mut self.children);
        self.hooks.pre_component_update(&mut updater);
        self.component.update(
            &mut self.props,
            Hooks::new(&mut self.hooks, first_update),
            &mut updater,
        );
        self.render_count += 1;
        self.hooks.post_component_update(&mut updater);
    }

    /// Polls every hook once and reports whether any of them has a change pending.
    pub fn has_pending_change(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        Pin::new(&mut self.hooks).poll_change(&mut cx) == Poll::Ready(())
    }

    /// Performs update passes until no hook has a change pending. Returns the number of passes
    /// performed.
    pub fn settle(&mut self) -> usize {
        let mut passes = 0;
        while self.has_pending_change() {
            self.pass();
            passes += 1;
        }
        passes
    }

    /// Invokes the click handler of the first committed button with the given label.
    ///
    /// The handler runs immediately. Any state it changes is rendered by the next
    /// [`settle`](Self::settle).
    pub fn click(&mut self, label: &str) -> Result<()> {
        if !self.mounted {
            return Err(Error::Unmounted);
        }
        let button = self
            .children
            .iter_mut()
            .find_map(|child| child.find_button_mut(label))
            .ok_or_else(|| Error::ButtonNotFound(label.to_string()))?;
        button.click();
        Ok(())
    }

    /// Draws the committed output.
    pub fn canvas(&self) -> Canvas {
        let mut canvas = Canvas::new();
        for child in &self.children {
            child.draw(&mut canvas);
        }
        canvas
    }

    /// Unmounts the component: every hook gets to run its unmount procedure, in the order the
    /// hooks were declared, then the hooks and the committed output are dropped. State handles
    /// that outlive the tree must not be used afterwards. Calling this again does nothing.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        log::debug!("unmounting {}", std::any::type_name::<C>());
        self.hooks.on_unmount();
        self.children.clear();
        self.hooks.clear();
        self.mounted = false;
    }

    /// Applies one host event, then settles. Returns `true` if at least one update pass was
    /// performed.
    ///
    /// Scroll events are applied to `window`. Pass the window the component was given in its
    /// props; scrolling any other window reaches none of this tree's listeners.
    pub fn dispatch(&mut self, window: &Window, event: HostEvent) -> Result<bool> {
        log::trace!("dispatching {:?}", event);
        match event {
            HostEvent::Click(label) => self.click(&label)?,
            HostEvent::ScrollTo(y) => window.scroll_to(y),
            HostEvent::ScrollBy(dy) => window.scroll_by(dy),
            HostEvent::Unmount => {
                self.unmount();
                return Ok(false);
            }
        }
        Ok(self.settle() > 0)
    }

    /// Turns the tree into a stream of frames driven by host events.
    ///
    /// The stream yields the canvas of the initial commit, then one canvas per event that caused
    /// an update pass. It ends after an [`HostEvent::Unmount`], or unmounts the tree itself when
    /// the event stream ends. Events that fail, such as a click on a missing button, are logged
    /// and skipped.
    ///
    /// As with [`dispatch`](Self::dispatch), `window` must be the one the component was given in
    /// its props.
    pub fn render_loop<S>(self, window: Window, events: S) -> impl Stream<Item = Canvas>
    where
        S: Stream<Item = HostEvent>,
    {
        let state = RenderLoop {
            tree: self,
            window,
            events: Box::pin(events),
            started: false,
        };
        stream::unfold(state, |mut state| async move {
            if !state.started {
                state.started = true;
                let canvas = state.tree.canvas();
                return Some((canvas, state));
            }
            while state.tree.is_mounted() {
                let Some(event) = state.events.next().await else {
                    state.tree.unmount();
                    break;
                };
                match state.tree.dispatch(&state.window, event) {
                    Ok(true) => {
                        let canvas = state.tree.canvas();
                        return Some((canvas, state));
                    }
                    Ok(false) => {}
                    Err(err) => log::warn!("host event failed: {}", err),
                }
            }
            None
        })
    }
}

impl<C: Component> Drop for Tree<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

struct RenderLoop<C: Component, S> {
    tree: Tree<C>,
    window: Window,
    events: Pin<Box<S>>,
    started: bool,
}

/// Mounts the component, settles it, and returns its canvas. The tree is unmounted before
/// returning, so effects get to clean up after themselves.
pub fn render<C: Component>(props: C::Props) -> Canvas {
    let mut tree = Tree::<C>::mount(props);
    tree.settle();
    let canvas = tree.canvas();
    tree.unmount();
    canvas
}
