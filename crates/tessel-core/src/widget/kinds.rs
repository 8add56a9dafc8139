//! Concrete widget kinds and their child rules.
//!
//! - [`Label`], [`LineEdit`]: leaves
//! - [`NumberEdit`]: wraps a single [`LineEdit`]
//! - [`TabWidget`]: one child per [`TabPage`]
//! - [`TabPage`], [`Composite`]: ordered list of child widgets

use super::{Font, Widget, WidgetHandle};
use crate::number::{NumberFormat, ParseNumberError};
use uuid::Uuid;

/// State shared by every widget kind.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetBase {
    pub(crate) handle: WidgetHandle,
    pub(crate) enabled: bool,
    pub(crate) font: Option<Font>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::with_handle(Uuid::new_v4())
    }
}

impl WidgetBase {
    /// Create an enabled base with a fresh handle and no explicit font.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handle(handle: WidgetHandle) -> Self {
        Self {
            handle,
            enabled: true,
            font: None,
        }
    }
}

/// Implements the state accessors of [`Widget`] through a `base` field.
macro_rules! base_accessors {
    () => {
        fn handle(&self) -> WidgetHandle {
            self.base.handle
        }

        fn is_enabled(&self) -> bool {
            self.base.enabled
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.base.enabled = enabled;
        }

        fn font(&self) -> Option<&Font> {
            self.base.font.as_ref()
        }

        fn set_font(&mut self, font: Option<Font>) {
            self.base.font = font;
        }
    };
}

/// Static text.
#[derive(Debug, Clone)]
pub struct Label {
    base: WidgetBase,
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    base_accessors!();
}

/// Single-line text input.
#[derive(Debug, Clone, Default)]
pub struct LineEdit {
    base: WidgetBase,
    text: String,
}

impl LineEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for LineEdit {
    base_accessors!();
}

/// Numeric input: a [`LineEdit`] showing a locale-formatted value.
#[derive(Debug, Clone)]
pub struct NumberEdit {
    base: WidgetBase,
    edit: LineEdit,
    format: NumberFormat,
    decimals: usize,
    value: f64,
}

impl NumberEdit {
    pub fn new(format: NumberFormat, decimals: usize) -> Self {
        let mut widget = Self {
            base: WidgetBase::new(),
            edit: LineEdit::new(),
            format,
            decimals,
            value: 0.0,
        };
        widget.set_value(0.0);
        widget
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value and show it grouped with the configured decimals.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.edit.set_text(self.format.format_grouped(value, self.decimals));
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn edit(&self) -> &LineEdit {
        &self.edit
    }

    pub fn edit_mut(&mut self) -> &mut LineEdit {
        &mut self.edit
    }

    /// Parse the edit's text into the value, reformatting it on success.
    ///
    /// On failure the previous value is kept and the text left as typed.
    pub fn commit_text(&mut self) -> Result<f64, ParseNumberError> {
        let value = self.format.parse(self.edit.text())?;
        self.set_value(value);
        Ok(value)
    }
}

impl Widget for NumberEdit {
    base_accessors!();

    fn children(&self) -> Vec<&dyn Widget> {
        vec![&self.edit as &dyn Widget]
    }
}

/// Generic container with an ordered list of children.
#[derive(Default)]
pub struct Composite {
    base: WidgetBase,
    children: Vec<Box<dyn Widget>>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child and return `self` for chaining.
    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl Widget + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn children_mut(&mut self) -> &mut Vec<Box<dyn Widget>> {
        &mut self.children
    }
}

impl Widget for Composite {
    base_accessors!();

    fn children(&self) -> Vec<&dyn Widget> {
        self.children.iter().map(|child| &**child as &dyn Widget).collect()
    }
}

/// A page of a [`TabWidget`].
#[derive(Default)]
pub struct TabPage {
    base: WidgetBase,
    title: String,
    children: Vec<Box<dyn Widget>>,
}

impl TabPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl Widget + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn children_mut(&mut self) -> &mut Vec<Box<dyn Widget>> {
        &mut self.children
    }
}

impl Widget for TabPage {
    base_accessors!();

    fn children(&self) -> Vec<&dyn Widget> {
        self.children.iter().map(|child| &**child as &dyn Widget).collect()
    }
}

/// Tabbed container; each page is a child.
#[derive(Default)]
pub struct TabWidget {
    base: WidgetBase,
    pages: Vec<TabPage>,
}

impl TabWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: TabPage) -> Self {
        self.pages.push(page);
        self
    }

    pub fn pages(&self) -> &[TabPage] {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> &mut Vec<TabPage> {
        &mut self.pages
    }
}

impl Widget for TabWidget {
    base_accessors!();

    fn children(&self) -> Vec<&dyn Widget> {
        self.pages.iter().map(|page| page as &dyn Widget).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleSeparators;

    fn german() -> NumberFormat {
        NumberFormat::new(LocaleSeparators::new(',', '.'))
    }

    #[test]
    fn test_child_rules() {
        assert!(Label::new("Name").children().is_empty());

        let number = NumberEdit::new(german(), 2);
        let children = number.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].handle(), number.edit().handle());

        let tabs = TabWidget::new()
            .with_page(TabPage::new("General").with_child(Label::new("a")))
            .with_page(TabPage::new("Advanced"));
        let pages: Vec<_> = tabs.children().iter().map(|w| w.handle()).collect();
        assert_eq!(pages, vec![tabs.pages()[0].handle(), tabs.pages()[1].handle()]);
        assert_eq!(tabs.pages()[0].children().len(), 1);

        let composite = Composite::new()
            .with_child(Label::new("a"))
            .with_child(LineEdit::new());
        assert_eq!(composite.children().len(), 2);
        assert!(Composite::new().children().is_empty());
    }

    #[test]
    fn test_number_edit_formats_value() {
        let mut number = NumberEdit::new(german(), 2);
        assert_eq!(number.edit().text(), "0,00");

        number.set_value(12_345.678);
        assert_eq!(number.edit().text(), "12.345,68");
    }

    #[test]
    fn test_number_edit_commit() {
        let mut number = NumberEdit::new(german(), 1);
        number.edit_mut().set_text("1.500,26");
        assert_eq!(number.commit_text().unwrap(), 1500.26);
        assert_eq!(number.edit().text(), "1.500,3");

        number.edit_mut().set_text("zwei");
        assert!(number.commit_text().is_err());
        assert_eq!(number.value(), 1500.26);
        assert_eq!(number.edit().text(), "zwei");
    }

    #[test]
    fn test_handles_are_unique() {
        assert_ne!(Label::new("a").handle(), Label::new("a").handle());
        let handle = Uuid::new_v4();
        assert_eq!(WidgetBase::with_handle(handle).handle, handle);
    }
}
