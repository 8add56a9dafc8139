//! Tessel Core Library
//!
//! Support layer of the Tessel widget toolkit: locale-aware number formatting
//! and parsing, ordering of dynamic values for sortable views, and traversal
//! of the widget tree.

pub mod locale;
pub mod number;
pub mod ordering;
pub mod widget;

pub use locale::{FixedLocale, HostLocale, LocaleError, LocaleFacility, LocaleId, LocaleSeparators};
pub use number::{
    NumberFormat, ParseNumberError, Rational, RationalError, format_float, format_float_grouped,
    parse_float,
};
pub use ordering::{DynamicValue, SortOrder, less, sort_by_less, sort_values};
pub use widget::{Font, NativeHost, Widget, WidgetHandle};
