//! A surface that records draw calls.

use glam::Vec2;
use iconlabel_core::{Bounds, DrawSurface, Icon, TextStyle};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Bitmap {
        source: String,
        /// Top-left corner
        origin: Vec2,
        size: Vec2,
    },
    Text {
        text: String,
        /// Left edge and baseline
        origin: Vec2,
        style: TextStyle,
    },
}

/// Draw calls in the order they were issued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text of every recorded line, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Bitmap { .. } => None,
        })
    }
}

impl DrawSurface for DrawList {
    fn draw_bitmap(&mut self, icon: &Icon, bounds: Bounds) {
        self.commands.push(DrawCommand::Bitmap {
            source: icon.source.clone(),
            origin: bounds.position(),
            size: bounds.size(),
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin: Vec2::new(x as f32, y as f32),
            style: style.clone(),
        });
    }
}
