use counter_demo::{prelude::*, Error};
use futures::stream::{self, StreamExt};
use indoc::formatdoc;
use macro_rules_attribute::apply;
use smol_macros::test;

const RENDER_LOG: &str = "2";
const MOUNT_LOG: &str = "3";

fn mount(cleanup: ListenerCleanup) -> (Tree<CounterDemo>, Window, Console) {
    let window = Window::new();
    let console = Console::new();
    let tree = Tree::<CounterDemo>::mount(
        CounterDemoProps::new(window.clone(), console.clone()).with_cleanup(cleanup),
    );
    (tree, window, console)
}

fn click_and_settle(tree: &mut Tree<CounterDemo>) {
    tree.click(BUTTON_LABEL).unwrap();
    tree.settle();
}

#[test]
fn test_scenario_three_clicks() {
    let (mut tree, _window, console) = mount(ListenerCleanup::FreshListener);
    for _ in 0..3 {
        click_and_settle(&mut tree);
    }

    let output = tree.canvas().to_string();
    assert!(output.contains("state: 3"));
    assert!(output.contains("value: 0"));
    assert_eq!(console.count(MOUNT_LOG), 1);
    assert_eq!(console.count(RENDER_LOG), 4);
    assert_eq!(tree.render_count(), 4);
}

#[test]
fn test_render_log_fires_once_per_render() {
    for clicks in 0..6 {
        let (mut tree, _window, console) = mount(ListenerCleanup::FreshListener);
        for _ in 0..clicks {
            click_and_settle(&mut tree);
        }
        assert_eq!(console.count(RENDER_LOG), clicks + 1);
        assert_eq!(console.count("1"), clicks + 1);
        assert_eq!(tree.render_count(), clicks + 1);
    }
}

#[test]
fn test_render_log_precedes_mount_log() {
    let (_tree, _window, console) = mount(ListenerCleanup::FreshListener);
    assert_eq!(console.entries(), vec!["1", "2", "3"]);
}

/// Logs `commit` to the console once the pass's output has been committed.
struct CommitMarker {
    console: Console,
}

impl Hook for CommitMarker {
    fn post_component_update(&mut self, _updater: &mut ComponentUpdater) {
        self.console.log("commit");
    }
}

/// `CounterDemo` with a `CommitMarker` registered ahead of its own hooks.
struct MarkedCounterDemo {
    inner: CounterDemo,
}

impl Component for MarkedCounterDemo {
    type Props = CounterDemoProps;

    fn new(props: &Self::Props) -> Self {
        Self {
            inner: CounterDemo::new(props),
        }
    }

    fn update(
        &mut self,
        props: &mut Self::Props,
        mut hooks: Hooks,
        updater: &mut ComponentUpdater,
    ) {
        let console = props.console.clone();
        hooks.use_hook(move || CommitMarker { console });
        self.inner.update(props, hooks, updater);
    }
}

#[test]
fn test_render_logs_precede_every_commit() {
    let console = Console::new();
    let mut tree = Tree::<MarkedCounterDemo>::mount(
        CounterDemoProps::new(Window::new(), console.clone())
            .with_cleanup(ListenerCleanup::SameListener),
    );
    for _ in 0..2 {
        tree.click(BUTTON_LABEL).unwrap();
        tree.settle();
    }

    assert_eq!(
        console.entries(),
        vec!["1", "2", "commit", "3", "1", "2", "commit", "1", "2", "commit"]
    );
    assert_eq!(console.count("commit"), tree.render_count());
    assert!(tree.canvas().to_string().contains("state: 2"));
}

#[test]
fn test_state_counts_clicks_and_value_stays_zero() {
    let (mut tree, _window, _console) = mount(ListenerCleanup::FreshListener);
    for k in 1..=10 {
        click_and_settle(&mut tree);
        let output = tree.canvas().to_string();
        assert!(output.contains(&format!("state: {}\n", k)), "{}", output);
        assert!(output.contains("value: 0\n"), "{}", output);
    }
}

#[test]
fn test_mount_effect_runs_once() {
    let (mut tree, _window, console) = mount(ListenerCleanup::FreshListener);
    for _ in 0..5 {
        click_and_settle(&mut tree);
        tree.update().unwrap();
    }
    assert_eq!(console.count(MOUNT_LOG), 1);
    tree.unmount();
    assert_eq!(console.count(MOUNT_LOG), 1);
}

#[test]
fn test_listener_leaks_past_unmount() {
    let (mut tree, window, console) = mount(ListenerCleanup::FreshListener);
    assert_eq!(window.listener_count(), 1);

    tree.unmount();
    assert_eq!(window.listener_count(), 1);

    console.clear();
    window.scroll_to(40.0);
    assert_eq!(console.entries(), vec!["40"]);
}

#[test]
fn test_same_listener_cleanup_unsubscribes() {
    let (mut tree, window, console) = mount(ListenerCleanup::SameListener);
    window.scroll_to(5.0);
    assert_eq!(console.tail(1), vec!["5"]);

    tree.unmount();
    assert_eq!(window.listener_count(), 0);

    console.clear();
    window.scroll_to(40.0);
    assert!(console.entries().is_empty());
}

#[cfg(feature = "stable-scroll-listener")]
#[test]
fn test_default_cleanup_unsubscribes_with_stable_listener_feature() {
    let props = CounterDemoProps::default();
    let window = props.window.clone();
    let mut tree = Tree::<CounterDemo>::mount(props);
    tree.unmount();
    assert_eq!(window.listener_count(), 0);
}

#[cfg(not(feature = "stable-scroll-listener"))]
#[test]
fn test_default_cleanup_leaks() {
    let props = CounterDemoProps::default();
    let window = props.window.clone();
    let mut tree = Tree::<CounterDemo>::mount(props);
    tree.unmount();
    assert_eq!(window.listener_count(), 1);
}

#[test]
fn test_shared_window_keeps_other_subscribers() {
    let window = Window::new();
    let console = Console::new();
    let mut first = Tree::<CounterDemo>::mount(
        CounterDemoProps::new(window.clone(), console.clone())
            .with_cleanup(ListenerCleanup::SameListener),
    );
    let _second = Tree::<CounterDemo>::mount(
        CounterDemoProps::new(window.clone(), console.clone())
            .with_cleanup(ListenerCleanup::SameListener),
    );
    assert_eq!(window.listener_count(), 2);

    first.unmount();
    assert_eq!(window.listener_count(), 1);

    console.clear();
    window.scroll_by(2.0);
    assert_eq!(console.entries(), vec!["2"]);
}

#[test]
fn test_unmounted_tree_rejects_clicks() {
    let (mut tree, _window, _console) = mount(ListenerCleanup::FreshListener);
    assert!(matches!(tree.click("nope"), Err(Error::ButtonNotFound(label)) if label == "nope"));

    tree.unmount();
    assert!(!tree.is_mounted());
    assert!(matches!(tree.click(BUTTON_LABEL), Err(Error::Unmounted)));
    assert!(matches!(tree.update(), Err(Error::Unmounted)));
    assert!(tree.children().is_empty());
    assert_eq!(tree.canvas().to_string(), "");
}

#[test]
fn test_dispatch() {
    let (mut tree, window, console) = mount(ListenerCleanup::FreshListener);

    assert!(tree
        .dispatch(&window, HostEvent::Click(BUTTON_LABEL.to_string()))
        .unwrap());
    assert!(!tree.dispatch(&window, HostEvent::ScrollTo(3.0)).unwrap());
    assert!(!tree.dispatch(&window, HostEvent::ScrollBy(4.0)).unwrap());
    assert!(!tree.dispatch(&window, HostEvent::Unmount).unwrap());
    assert!(!tree.is_mounted());

    assert_eq!(window.scroll_y(), 7.0);
    assert_eq!(console.tail(2), vec!["3", "7"]);
}

#[test]
fn test_dispatch_scrolls_only_the_given_window() {
    let (mut tree, window, console) = mount(ListenerCleanup::FreshListener);
    console.clear();

    let elsewhere = Window::new();
    assert!(!tree.dispatch(&elsewhere, HostEvent::ScrollTo(9.0)).unwrap());
    assert_eq!(elsewhere.scroll_y(), 9.0);
    assert_eq!(window.scroll_y(), 0.0);
    assert!(console.entries().is_empty());

    assert!(!tree.dispatch(&window, HostEvent::ScrollTo(9.0)).unwrap());
    assert_eq!(console.entries(), vec!["9"]);
}

#[apply(test!)]
async fn test_render_loop() {
    let window = Window::new();
    let console = Console::new();
    let tree = Tree::<CounterDemo>::mount(
        CounterDemoProps::new(window.clone(), console.clone())
            .with_cleanup(ListenerCleanup::FreshListener),
    );

    let click = || HostEvent::Click(BUTTON_LABEL.to_string());
    let events = stream::iter(vec![
        click(),
        HostEvent::ScrollTo(10.0),
        click(),
        HostEvent::Click("missing".to_string()),
        click(),
        HostEvent::Unmount,
        click(),
    ]);

    let actual = tree
        .render_loop(window.clone(), events)
        .map(|canvas| canvas.to_string())
        .collect::<Vec<_>>()
        .await;

    let frame = |state: i64| {
        formatdoc! {"
                ╭────╮
                │버튼│
                ╰────╯
                value: 0
                state: {}
            ",
            state
        }
    };
    assert_eq!(actual, vec![frame(0), frame(1), frame(2), frame(3)]);
    assert_eq!(console.count(RENDER_LOG), 4);
    assert_eq!(console.count("10"), 1);

    // The loop unmounted the tree, but the listener it registered is still there.
    window.scroll_to(11.0);
    assert_eq!(console.count("11"), 1);
}

#[apply(test!)]
async fn test_render_loop_unmounts_when_events_end() {
    let window = Window::new();
    let tree = Tree::<CounterDemo>::mount(
        CounterDemoProps::new(window.clone(), Console::new())
            .with_cleanup(ListenerCleanup::SameListener),
    );
    let frames = tree
        .render_loop(window.clone(), stream::empty::<HostEvent>())
        .collect::<Vec<_>>()
        .await;
    assert_eq!(frames.len(), 1);
    assert_eq!(window.listener_count(), 0);
}
