//! Interactive counter demo.
//!
//! Press Enter or Space to click the button, use the mouse wheel to scroll, and press `q` to
//! unmount. After unmounting, keep scrolling to see the leaked listener still writing to the
//! console, then press `q` again to exit.

use counter_demo::prelude::*;
use futures::StreamExt;

const CONSOLE_LINES: usize = 12;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let props = CounterDemoProps::default();
    let (window, console) = (props.window.clone(), props.console.clone());
    let mut tree = Tree::<CounterDemo>::mount(props);

    smol::block_on(async {
        let mut terminal = Terminal::new()?;
        let mut events = terminal.events(BUTTON_LABEL);

        terminal.draw(&tree.canvas(), &console.tail(CONSOLE_LINES))?;
        while let Some(event) = events.next().await {
            tree.dispatch(&window, event)?;
            terminal.draw(&tree.canvas(), &console.tail(CONSOLE_LINES))?;
            if !tree.is_mounted() {
                break;
            }
        }

        let mut unmounted = Canvas::new();
        unmounted.push_row([Segment::colored(
            format!("unmounted, {} scroll listener(s) left", window.listener_count()),
            Color::DarkGrey,
        )]);
        terminal.draw(&unmounted, &console.tail(CONSOLE_LINES))?;
        while let Some(event) = events.next().await {
            match event {
                HostEvent::Unmount => break,
                HostEvent::ScrollBy(dy) => window.scroll_by(dy),
                HostEvent::ScrollTo(y) => window.scroll_to(y),
                HostEvent::Click(_) => {}
            }
            terminal.draw(&unmounted, &console.tail(CONSOLE_LINES))?;
        }
        anyhow::Ok(())
    })
}
