//! Drives the counter demo through a fixed sequence of host events and prints every frame
//! along with the console output.
//!
//! Pass `--fixed` to remove the scroll listener properly on unmount.

use counter_demo::prelude::*;
use futures::{stream, StreamExt};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cleanup = if std::env::args().any(|arg| arg == "--fixed") {
        ListenerCleanup::SameListener
    } else {
        ListenerCleanup::FreshListener
    };

    let window = Window::new();
    let console = Console::new();
    let tree = Tree::<CounterDemo>::mount(
        CounterDemoProps::new(window.clone(), console.clone()).with_cleanup(cleanup),
    );

    let click = || HostEvent::Click(BUTTON_LABEL.to_string());
    let events = stream::iter([
        click(),
        click(),
        HostEvent::ScrollTo(120.0),
        click(),
        HostEvent::Unmount,
    ]);

    smol::block_on(async {
        let mut frames = Box::pin(tree.render_loop(window.clone(), events));
        while let Some(canvas) = frames.next().await {
            canvas.write(std::io::stdout())?;
            println!();
        }
        anyhow::Ok(())
    })?;

    window.scroll_to(240.0);

    println!("console:");
    for entry in console.entries() {
        println!("  {}", entry);
    }
    println!(
        "scroll listeners left after unmount: {}",
        window.listener_count()
    );
    Ok(())
}
