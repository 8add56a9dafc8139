//! Ordering of dynamically typed cell values for sortable collections.
//!
//! [`less`] is the single ordering primitive: errors sort last, absent
//! values first, and values of the same kind by their natural order.
//! Values of different kinds are unordered.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::SystemTime;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Flip an ascending "less" result for descending order.
    pub fn apply(self, less: bool) -> bool {
        match self {
            SortOrder::Ascending => less,
            SortOrder::Descending => !less,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// A scalar value of one of a closed set of kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Str(String),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Bool(bool),
    Time(SystemTime),
    /// A value that failed to load or compute, with its message.
    Error(String),
    /// No value.
    Absent,
}

impl DynamicValue {
    pub fn is_error(&self) -> bool {
        matches!(self, DynamicValue::Error(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DynamicValue::Absent)
    }

    /// Build an error marker from any displayable error.
    pub fn error(err: impl Display) -> Self {
        DynamicValue::Error(err.to_string())
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for DynamicValue {
                fn from(value: $ty) -> Self {
                    DynamicValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    String => Str,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    SystemTime => Time,
}

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        DynamicValue::Str(value.to_string())
    }
}

impl<T: Into<DynamicValue>> From<Option<T>> for DynamicValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DynamicValue::Absent, Into::into)
    }
}

impl<T: Into<DynamicValue>, E: Display> From<Result<T, E>> for DynamicValue {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => value.into(),
            Err(err) => DynamicValue::error(err),
        }
    }
}

/// Whether `a` sorts before `b` in the given direction.
///
/// Precedence:
/// 1. Errors sort after everything else.
/// 2. Absent values sort before everything except errors.
/// 3. Values of the same kind compare by their natural order
///    (`false < true` for booleans).
///
/// The direction flips the result of each rule. Values of different kinds are
/// unordered: the result is `false` in both directions.
pub fn less(a: &DynamicValue, b: &DynamicValue, order: SortOrder) -> bool {
    use DynamicValue::*;

    let ascending = match (a, b) {
        (Error(_), _) => false,
        (_, Error(_)) => true,
        (Absent, _) => !b.is_absent(),
        (_, Absent) => false,
        (Str(a), Str(b)) => a < b,
        (I8(a), I8(b)) => a < b,
        (I16(a), I16(b)) => a < b,
        (I32(a), I32(b)) => a < b,
        (I64(a), I64(b)) => a < b,
        (Isize(a), Isize(b)) => a < b,
        (U8(a), U8(b)) => a < b,
        (U16(a), U16(b)) => a < b,
        (U32(a), U32(b)) => a < b,
        (U64(a), U64(b)) => a < b,
        (Usize(a), Usize(b)) => a < b,
        (F32(a), F32(b)) => a < b,
        (F64(a), F64(b)) => a < b,
        (Bool(a), Bool(b)) => !a & b,
        (Time(a), Time(b)) => a < b,
        (
            Str(_) | I8(_) | I16(_) | I32(_) | I64(_) | Isize(_) | U8(_) | U16(_) | U32(_)
            | U64(_) | Usize(_) | F32(_) | F64(_) | Bool(_) | Time(_),
            _,
        ) => return false,
    };

    order.apply(ascending)
}

/// Stable merge sort driven only by a "less" predicate.
///
/// Unlike the slice sorts, this tolerates predicates that are not a total
/// order: the result is then some permutation, never a panic.
pub fn sort_by_less<T>(items: &mut Vec<T>, mut less: impl FnMut(&T, &T) -> bool) {
    merge_sort(items, &mut less);
}

fn merge_sort<T>(items: &mut Vec<T>, less: &mut impl FnMut(&T, &T) -> bool) {
    if items.len() < 2 {
        return;
    }
    let mut right = items.split_off(items.len() / 2);
    merge_sort(items, less);
    merge_sort(&mut right, less);

    let left = std::mem::take(items);
    items.reserve(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Take from the right only when strictly less, keeping equal items in order.
        let next = if less(r, l) { right.next() } else { left.next() };
        items.extend(next);
    }
    items.extend(left);
    items.extend(right);
}

/// Sort dynamic values in place with [`less`].
pub fn sort_values(values: &mut Vec<DynamicValue>, order: SortOrder) {
    sort_by_less(values, |a, b| less(a, b, order));
}

#[cfg(test)]
mod tests {
    use super::DynamicValue::{Absent, Bool, F64, I32, Str};
    use super::*;
    use std::time::Duration;

    const ASC: SortOrder = SortOrder::Ascending;
    const DESC: SortOrder = SortOrder::Descending;

    fn err() -> DynamicValue {
        DynamicValue::error("load failed")
    }

    #[test]
    fn test_error_sorts_last() {
        assert!(!less(&err(), &I32(5), ASC));
        assert!(less(&I32(5), &err(), ASC));
        assert!(!less(&err(), &err(), ASC));
        assert!(less(&Absent, &err(), ASC));
        assert!(!less(&err(), &Absent, ASC));
    }

    #[test]
    fn test_absent_sorts_first() {
        assert!(less(&Absent, &I32(5), ASC));
        assert!(!less(&I32(5), &Absent, ASC));
        assert!(!less(&Absent, &Absent, ASC));
    }

    #[test]
    fn test_same_kind_is_total() {
        let t0 = SystemTime::UNIX_EPOCH;
        let pairs = [
            (Str("apple".into()), Str("banana".into())),
            (I32(-3), I32(7)),
            (DynamicValue::U64(1), DynamicValue::U64(u64::MAX)),
            (DynamicValue::I8(i8::MIN), DynamicValue::I8(0)),
            (DynamicValue::F32(0.5), DynamicValue::F32(1.5)),
            (F64(-1.0e9), F64(2.5)),
            (Bool(false), Bool(true)),
            (DynamicValue::Time(t0), DynamicValue::Time(t0 + Duration::from_secs(1))),
        ];
        for (a, b) in &pairs {
            assert!(less(a, b, ASC) ^ less(b, a, ASC), "{a:?} vs {b:?}");
            assert!(less(a, b, ASC));
            assert_eq!(less(a, b, DESC), less(b, a, ASC), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_mismatched_kinds_are_unordered() {
        for order in [ASC, DESC] {
            assert!(!less(&I32(1), &F64(2.0), order));
            assert!(!less(&F64(2.0), &I32(1), order));
            assert!(!less(&Str("1".into()), &DynamicValue::I64(1), order));
            assert!(!less(&DynamicValue::U8(1), &DynamicValue::U16(2), order));
        }
    }

    #[test]
    fn test_descending_flips_markers() {
        assert!(less(&err(), &I32(5), DESC));
        assert!(!less(&Absent, &I32(5), DESC));
    }

    #[test]
    fn test_sort_order_serde() {
        let order: SortOrder = serde_json::from_str(r#""descending""#).unwrap();
        assert_eq!(order, DESC);
        assert_eq!(order.reversed(), ASC);
        assert_eq!(serde_json::to_string(&ASC).unwrap(), r#""ascending""#);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(DynamicValue::from(3_i32), I32(3));
        assert_eq!(DynamicValue::from("x"), Str("x".into()));
        assert_eq!(DynamicValue::from(None::<f64>), Absent);
        assert_eq!(DynamicValue::from(Some(true)), Bool(true));
        let failed: Result<i32, &str> = Err("boom");
        assert_eq!(DynamicValue::from(failed), DynamicValue::Error("boom".into()));
    }

    #[test]
    fn test_sort_values() {
        let mut values = vec![I32(3), err(), Absent, I32(1), I32(2)];
        sort_values(&mut values, ASC);
        assert_eq!(values, vec![Absent, I32(1), I32(2), I32(3), err()]);

        sort_values(&mut values, DESC);
        assert_eq!(values, vec![err(), I32(3), I32(2), I32(1), Absent]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut rows = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        sort_by_less(&mut rows, |a, b| a.0 < b.0);
        assert_eq!(rows, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_sort_survives_mixed_kinds() {
        let input = vec![Str("b".into()), I32(2), F64(f64::NAN), Str("a".into()), I32(1)];
        let mut values = input.clone();
        sort_values(&mut values, ASC);

        let debug_sorted = |values: &[DynamicValue]| {
            let mut out: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
            out.sort();
            out
        };
        assert_eq!(debug_sorted(&values), debug_sorted(&input));

        let mut values = vec![I32(3), I32(1), Str("b".into()), Str("a".into())];
        sort_values(&mut values, ASC);
        assert_eq!(values, vec![I32(1), I32(3), Str("a".into()), Str("b".into())]);
    }
}
