use crate::{Canvas, Segment};

/// `Text` is an element that draws a single row of text.
pub struct Text {
    content: String,
}

impl Text {
    /// Creates a text element.
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Draws the text onto the canvas.
    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.push_row([Segment::plain(self.content.as_str())]);
    }
}
