use crate::{Canvas, Element};

/// `Fragment` groups elements without adding anything of its own to the output.
#[derive(Default)]
pub struct Fragment {
    children: Vec<Element>,
}

impl Fragment {
    /// Creates a fragment from its children, in order.
    pub fn new<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Returns the fragment's children mutably.
    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    /// Draws every child onto the canvas, in order.
    pub fn draw(&self, canvas: &mut Canvas) {
        for child in &self.children {
            child.draw(canvas);
        }
    }
}
