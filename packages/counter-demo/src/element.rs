use crate::{
    components::{Button, Fragment, Text},
    Canvas,
};

/// `Element` is one node of the UI description a component produces.
pub enum Element {
    /// A clickable button.
    Button(Button),
    /// A single row of text.
    Text(Text),
    /// An ordered group of elements with no visual representation of its own.
    Fragment(Fragment),
}

impl Element {
    /// Draws the element and its descendants onto the canvas, top to bottom.
    pub fn draw(&self, canvas: &mut Canvas) {
        match self {
            Self::Button(button) => button.draw(canvas),
            Self::Text(text) => text.draw(canvas),
            Self::Fragment(fragment) => fragment.draw(canvas),
        }
    }

    /// Returns the first button with the given label, searching depth-first in document order.
    pub fn find_button_mut(&mut self, label: &str) -> Option<&mut Button> {
        match self {
            Self::Button(button) if button.label() == label => Some(button),
            Self::Button(_) | Self::Text(_) => None,
            Self::Fragment(fragment) => fragment
                .children_mut()
                .iter_mut()
                .find_map(|child| child.find_button_mut(label)),
        }
    }
}

impl From<Button> for Element {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Fragment> for Element {
    fn from(fragment: Fragment) -> Self {
        Self::Fragment(fragment)
    }
}
