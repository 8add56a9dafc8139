//! Descendant traversal and enable/font propagation.

use super::{Font, NativeHost, Widget};

/// Visit `root` and its descendants depth-first, parents before children.
///
/// When `visit` returns `false` the children of that widget are skipped;
/// siblings are still visited. A `None` root visits nothing.
pub fn walk_descendants(root: Option<&dyn Widget>, visit: &mut dyn FnMut(&dyn Widget) -> bool) {
    let Some(widget) = root else {
        return;
    };
    if !visit(widget) {
        return;
    }
    for child in widget.children() {
        walk_descendants(Some(child), visit);
    }
}

/// Enable or disable `root` and update the native state of its descendants.
///
/// A descendant is natively enabled only if `enabled` and its own flag are
/// both set, so a widget disabled on its own stays disabled when an ancestor
/// is re-enabled.
pub fn set_descendants_enabled(root: &mut dyn Widget, host: &mut dyn NativeHost, enabled: bool) {
    root.set_enabled(enabled);
    let root_handle = root.handle();
    host.enable_window(root_handle, enabled);

    walk_descendants(Some(&*root), &mut |widget| {
        if widget.handle() != root_handle {
            host.enable_window(widget.handle(), enabled && widget.is_enabled());
        }
        true
    });
}

/// Set the font of `root` and let descendants without an explicit font
/// inherit it natively.
///
/// A descendant with its own font keeps it, and so does its whole subtree.
pub fn set_descendants_font(root: &mut dyn Widget, host: &mut dyn NativeHost, font: &Font) {
    root.set_font(Some(font.clone()));
    let root_handle = root.handle();
    host.set_window_font(root_handle, font);

    walk_descendants(Some(&*root), &mut |widget| {
        if widget.handle() == root_handle {
            return true;
        }
        if widget.font().is_some() {
            return false;
        }
        host.set_window_font(widget.handle(), font);
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Composite, Label, LineEdit, NumberEdit, TabPage, TabWidget, WidgetHandle};
    use crate::NumberFormat;
    use std::collections::HashMap;

    /// Records the last native call per handle.
    #[derive(Default)]
    struct RecordingHost {
        enabled: HashMap<WidgetHandle, bool>,
        fonts: HashMap<WidgetHandle, Font>,
    }

    impl NativeHost for RecordingHost {
        fn enable_window(&mut self, handle: WidgetHandle, enabled: bool) {
            self.enabled.insert(handle, enabled);
        }

        fn set_window_font(&mut self, handle: WidgetHandle, font: &Font) {
            self.fonts.insert(handle, font.clone());
        }
    }

    fn visit_order(root: &dyn Widget, stop_at: Option<WidgetHandle>) -> Vec<WidgetHandle> {
        let mut visited = Vec::new();
        walk_descendants(Some(root), &mut |widget| {
            visited.push(widget.handle());
            Some(widget.handle()) != stop_at
        });
        visited
    }

    /// window
    /// ├── tabs
    /// │   ├── page one
    /// │   │   └── label
    /// │   └── page two
    /// │       └── number edit
    /// │           └── line edit
    /// └── footer label
    fn sample_tree() -> Composite {
        let number = NumberEdit::new(NumberFormat::default(), 2);
        let tabs = TabWidget::new()
            .with_page(TabPage::new("One").with_child(Label::new("label")))
            .with_page(TabPage::new("Two").with_child(number));
        Composite::new().with_child(tabs).with_child(Label::new("footer"))
    }

    fn handles(root: &Composite) -> Vec<WidgetHandle> {
        visit_order(root, None)
    }

    #[test]
    fn test_walk_pre_order() {
        let root = sample_tree();
        let order = handles(&root);
        assert_eq!(order.len(), 8);
        assert_eq!(order[0], root.handle());

        let tabs = root.children()[0];
        let pages = tabs.children();
        assert_eq!(order[1], tabs.handle());
        assert_eq!(order[2], pages[0].handle());
        assert_eq!(order[3], pages[0].children()[0].handle());
        assert_eq!(order[4], pages[1].handle());
        assert_eq!(order[7], root.children()[1].handle());
    }

    #[test]
    fn test_walk_short_circuit_keeps_siblings() {
        let root = sample_tree();
        let tabs = root.children()[0];
        let first_page = tabs.children()[0].handle();

        let order = visit_order(&root, Some(first_page));
        let all = handles(&root);
        // The pruned page's label is skipped, everything else is visited.
        assert_eq!(order.len(), all.len() - 1);
        assert!(!order.contains(&all[3]));
        assert!(order.contains(&first_page));
        assert!(order.contains(&all[4]));
    }

    #[test]
    fn test_walk_stop_at_root() {
        let root = sample_tree();
        assert_eq!(visit_order(&root, Some(root.handle())), vec![root.handle()]);
    }

    #[test]
    fn test_walk_none_is_noop() {
        let mut visited = 0;
        walk_descendants(None, &mut |_| {
            visited += 1;
            true
        });
        assert_eq!(visited, 0);
    }

    #[test]
    fn test_disabled_descendant_stays_disabled() {
        let mut host = RecordingHost::default();
        let mut edit = LineEdit::new();
        edit.set_enabled(false);
        let edit_handle = edit.handle();
        let label = Label::new("label");
        let label_handle = label.handle();
        let mut root = Composite::new().with_child(edit).with_child(label);

        set_descendants_enabled(&mut root, &mut host, false);
        assert!(!root.is_enabled());
        assert_eq!(host.enabled[&root.handle()], false);
        assert_eq!(host.enabled[&label_handle], false);
        assert_eq!(host.enabled[&edit_handle], false);

        set_descendants_enabled(&mut root, &mut host, true);
        assert!(root.is_enabled());
        assert_eq!(host.enabled[&root.handle()], true);
        assert_eq!(host.enabled[&label_handle], true);
        assert_eq!(host.enabled[&edit_handle], false);
    }

    #[test]
    fn test_explicit_font_shields_subtree() {
        let mut host = RecordingHost::default();
        let own_font = Font::new("Consolas", 10.0);
        let inherited = Font::new("Segoe UI", 9.0).bold();

        let inner = Label::new("inner");
        let inner_handle = inner.handle();
        let mut shielded = Composite::new().with_child(inner);
        shielded.set_font(Some(own_font.clone()));
        let shielded_handle = shielded.handle();
        let plain = Label::new("plain");
        let plain_handle = plain.handle();
        let mut root = Composite::new().with_child(shielded).with_child(plain);

        set_descendants_font(&mut root, &mut host, &inherited);

        assert_eq!(root.font(), Some(&inherited));
        assert_eq!(host.fonts[&root.handle()], inherited);
        assert_eq!(host.fonts[&plain_handle], inherited);
        assert!(!host.fonts.contains_key(&shielded_handle));
        assert!(!host.fonts.contains_key(&inner_handle));
        assert_eq!(root.children()[0].font(), Some(&own_font));
    }
}
