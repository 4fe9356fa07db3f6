use crate::{Canvas, Color, Handler, Segment};
use unicode_width::UnicodeWidthStr;

/// `Button` is an element that invokes a handler when it is clicked.
///
/// It's drawn as its label inside a rounded border.
///
/// # Example
///
/// ```
/// # use counter_demo::prelude::*;
/// let mut canvas = Canvas::new();
/// Button::new("Click me!", |_| {}).draw(&mut canvas);
/// assert_eq!(canvas.to_string(), "╭─────────╮\n│Click me!│\n╰─────────╯\n");
/// ```
pub struct Button {
    label: String,
    handler: Handler<'static, ()>,
}

impl Button {
    /// Creates a button with the given label and click handler.
    pub fn new<S, F>(label: S, handler: F) -> Self
    where
        S: Into<String>,
        F: FnMut(()) + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            handler: Handler::from(handler),
        }
    }

    /// Returns the button's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Invokes the click handler.
    pub fn click(&mut self) {
        (self.handler)(());
    }

    /// Draws the button onto the canvas.
    pub fn draw(&self, canvas: &mut Canvas) {
        let border = Color::Blue;
        let horizontal = "─".repeat(self.label.width());
        canvas.push_row([Segment::colored(format!("╭{}╮", horizontal), border)]);
        canvas.push_row([
            Segment::colored("│", border),
            Segment::plain(self.label.as_str()),
            Segment::colored("│", border),
        ]);
        canvas.push_row([Segment::colored(format!("╰{}╯", horizontal), border)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[test]
    fn test_button_click() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let mut button = Button::new("Go", {
            let clicks = clicks.clone();
            move |_| {
                clicks.fetch_add(1, Ordering::SeqCst);
            }
        });
        button.click();
        button.click();
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_button_draw_wide_label() {
        let mut canvas = Canvas::new();
        Button::new("버튼", |_| {}).draw(&mut canvas);
        assert_eq!(
            canvas.to_string(),
            indoc! {"
                ╭────╮
                │버튼│
                ╰────╯
            "}
        );
    }
}
