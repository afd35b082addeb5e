//! Lays the screen model out for a terminal of a given size.

use super::model::Line;

const ELLIPSIS: &str = "...";

/// How successive frames are written.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Clear the terminal before every frame.
    Standard,
    /// Never clear; pad below the block so old frames scroll out instead.
    NoClear,
}

/// One finished frame, top row first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<String>,
}

/// Stateless layout of `Line`s into a `Frame`.
#[derive(Debug, Clone)]
pub struct Renderer {
    box_width: usize,
    mode: RenderMode,
}

impl Renderer {
    pub fn new(box_width: usize, mode: RenderMode) -> Self {
        Self { box_width, mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Width actually available to the content box on a `cols`-wide terminal.
    pub fn content_width(&self, cols: u16) -> usize {
        self.box_width.min(cols as usize)
    }

    pub fn render(&self, lines: &[Line], cols: u16, rows: u16) -> Frame {
        let term_width = cols as usize;
        let term_height = rows as usize;
        let width = self.content_width(cols);

        // Keep the last terminal row free for the cursor.
        let visible = &lines[..lines.len().min(term_height.saturating_sub(1))];
        let pad = (term_height / 2).saturating_sub(visible.len() / 2);

        let mut out: Vec<String> = Vec::with_capacity(term_height);
        out.extend(std::iter::repeat_n(String::new(), pad));

        for line in visible {
            let text = truncate(&line.text, width);
            let boxed = if line.centered {
                center(&text, width)
            } else {
                format!("{text:<width$}")
            };
            out.push(center(&boxed, term_width));
        }

        if self.mode == RenderMode::NoClear {
            out.extend(std::iter::repeat_n(String::new(), pad.saturating_sub(2)));
        }

        out.truncate(term_height);
        Frame { rows: out }
    }
}

/// Cut `text` to `width` characters, ending in `...` when shortened.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(width.saturating_sub(ELLIPSIS.len())).collect();
    cut.push_str(ELLIPSIS);
    cut.chars().take(width).collect()
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
