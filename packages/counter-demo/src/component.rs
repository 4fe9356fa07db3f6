use crate::{ComponentUpdater, Hooks};
use std::any::Any;

/// `Component` defines a piece of UI that renders itself into elements.
///
/// Components are driven by a [`Tree`](crate::Tree): the tree instantiates the component once,
/// then calls [`update`](Self::update) on mount and again whenever one of the component's hooks
/// reports a change. The component hands its output to the updater with
/// [`ComponentUpdater::update_children`], which commits it.
///
/// Anything declared as a local variable inside `update` lives for that single pass only. State
/// that must survive between passes belongs in a hook such as
/// [`use_state`](crate::hooks::UseState::use_state).
pub trait Component: Any + Unpin + Send {
    /// The properties the component is mounted with.
    type Props: Send;

    /// Creates the component instance.
    fn new(props: &Self::Props) -> Self;

    /// Renders the component. Called once per update pass.
    fn update(&mut self, props: &mut Self::Props, hooks: Hooks, updater: &mut ComponentUpdater);
}
