use crossterm::{csi, style::Colored};
use std::{
    fmt::{self, Display},
    io::{self, Write},
};
use unicode_width::UnicodeWidthStr;

pub use crossterm::style::Color;

/// A run of text drawn with a single style.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    text: String,
    color: Option<Color>,
}

impl Segment {
    /// Creates a segment drawn in the terminal's default color.
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    /// Creates a segment drawn in the given color.
    pub fn colored<S: Into<String>>(text: S, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    /// Returns the number of terminal columns the segment occupies.
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// `Canvas` is the drawing surface elements render onto: a top-to-bottom list of rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Canvas {
    rows: Vec<Vec<Segment>>,
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    pub fn push_row<I>(&mut self, segments: I)
    where
        I: IntoIterator<Item = Segment>,
    {
        self.rows.push(segments.into_iter().collect());
    }

    /// Returns the width of the widest row, in terminal columns.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().map(Segment::width).sum())
            .max()
            .unwrap_or(0)
    }

    fn write_impl<W: Write>(&self, mut w: W, ansi: bool) -> io::Result<()> {
        if ansi {
            write!(w, csi!("0m"))?;
        }

        let mut color = None;
        for row in &self.rows {
            for segment in row {
                if ansi && segment.color != color {
                    write!(
                        w,
                        csi!("{}m"),
                        Colored::ForegroundColor(segment.color.unwrap_or(Color::Reset))
                    )?;
                    color = segment.color;
                }
                w.write_all(segment.text.as_bytes())?;
            }
            if ansi {
                // clear until end of line
                write!(w, csi!("K"))?;
                // add a carriage return in case we're in raw mode
                w.write_all(b"\r\n")?;
            } else {
                w.write_all(b"\n")?;
            }
        }
        if ansi {
            write!(w, csi!("0m"))?;
        }
        w.flush()?;
        Ok(())
    }

    /// Writes the canvas with color escape sequences and raw-mode line endings.
    pub fn write_ansi<W: Write>(&self, w: W) -> io::Result<()> {
        self.write_impl(w, true)
    }

    /// Writes the canvas as plain text.
    pub fn write<W: Write>(&self, w: W) -> io::Result<()> {
        self.write_impl(w, false)
    }
}

impl Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::with_capacity(self.width() * self.rows.len());
        self.write(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_output() {
        let mut canvas = Canvas::new();
        assert_eq!(canvas.to_string(), "");

        canvas.push_row([Segment::colored("│", Color::Blue), Segment::plain("버튼")]);
        canvas.push_row([Segment::plain("state: 0")]);
        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.to_string(), "│버튼\nstate: 0\n");

        let mut ansi = Vec::new();
        canvas.write_ansi(&mut ansi).unwrap();
        let ansi = String::from_utf8(ansi).unwrap();
        assert!(ansi.contains("버튼"));
        assert!(ansi.contains("\r\n"));
        assert!(ansi.starts_with("\x1b[0m"));
    }

    #[test]
    fn test_segment_width() {
        assert_eq!(Segment::plain("버튼").width(), 4);
        assert_eq!(Segment::plain("value: 0").width(), 8);
    }
}
