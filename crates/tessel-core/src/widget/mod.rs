//! Widget tree capabilities and state propagation.
//!
//! The host toolkit owns the widgets. This module only needs to read a
//! widget's identity, enabled flag and font, and to enumerate its children:
//! - [`Widget`] is the capability each widget kind implements
//! - [`NativeHost`] receives the native enable/font calls
//! - [`walk`] traverses descendants and propagates state down the tree

pub mod kinds;
pub mod walk;

pub use kinds::{Composite, Label, LineEdit, NumberEdit, TabPage, TabWidget, WidgetBase};
pub use walk::{set_descendants_enabled, set_descendants_font, walk_descendants};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Native window handle of a widget.
pub type WidgetHandle = Uuid;

/// Font description applied to widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub point_size: f32,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl Font {
    pub fn new(family: impl Into<String>, point_size: f32) -> Self {
        Self {
            family: family.into(),
            point_size,
            bold: false,
            italic: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// A node of the widget tree.
pub trait Widget {
    /// Stable native handle.
    fn handle(&self) -> WidgetHandle;

    /// The widget's own enabled flag, independent of its ancestors.
    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// The explicitly set font, if any.
    fn font(&self) -> Option<&Font>;

    fn set_font(&mut self, font: Option<Font>);

    /// Logical children in order. Leaf kinds keep the default.
    fn children(&self) -> Vec<&dyn Widget> {
        Vec::new()
    }
}

/// Native side of the widget tree.
pub trait NativeHost {
    /// Enable or disable the native window.
    fn enable_window(&mut self, handle: WidgetHandle, enabled: bool);

    /// Apply a font to the native window.
    fn set_window_font(&mut self, handle: WidgetHandle, font: &Font);
}
