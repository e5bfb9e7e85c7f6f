//! Engine-independent column type names and classification.

use std::fmt;

use arrow::datatypes::{DataType, TimeUnit};

/// Closed set of column kinds, derived from the Arrow type by tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    Null,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    Decimal { precision: u8, scale: i8 },
    Utf8,
    Binary,
    Date,
    Time,
    Datetime { unit: TimeUnit, tz: Option<String> },
    Duration { unit: TimeUnit },
    List(Box<ColumnKind>),
    Struct(usize),
    Map,
    Other(String),
}

impl ColumnKind {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnKind::Int8
                | ColumnKind::Int16
                | ColumnKind::Int32
                | ColumnKind::Int64
                | ColumnKind::UInt8
                | ColumnKind::UInt16
                | ColumnKind::UInt32
                | ColumnKind::UInt64
                | ColumnKind::Float16
                | ColumnKind::Float32
                | ColumnKind::Float64
                | ColumnKind::Decimal { .. }
        )
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ColumnKind::Utf8)
    }
}

impl From<&DataType> for ColumnKind {
    fn from(data_type: &DataType) -> Self {
        match data_type {
            DataType::Null => ColumnKind::Null,
            DataType::Boolean => ColumnKind::Bool,
            DataType::Int8 => ColumnKind::Int8,
            DataType::Int16 => ColumnKind::Int16,
            DataType::Int32 => ColumnKind::Int32,
            DataType::Int64 => ColumnKind::Int64,
            DataType::UInt8 => ColumnKind::UInt8,
            DataType::UInt16 => ColumnKind::UInt16,
            DataType::UInt32 => ColumnKind::UInt32,
            DataType::UInt64 => ColumnKind::UInt64,
            DataType::Float16 => ColumnKind::Float16,
            DataType::Float32 => ColumnKind::Float32,
            DataType::Float64 => ColumnKind::Float64,
            DataType::Decimal128(precision, scale) | DataType::Decimal256(precision, scale) => {
                ColumnKind::Decimal {
                    precision: *precision,
                    scale: *scale,
                }
            }
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => ColumnKind::Utf8,
            DataType::Binary
            | DataType::LargeBinary
            | DataType::BinaryView
            | DataType::FixedSizeBinary(_) => ColumnKind::Binary,
            DataType::Date32 | DataType::Date64 => ColumnKind::Date,
            DataType::Time32(_) | DataType::Time64(_) => ColumnKind::Time,
            DataType::Timestamp(unit, tz) => ColumnKind::Datetime {
                unit: *unit,
                tz: tz.as_ref().map(|tz| tz.to_string()),
            },
            DataType::Duration(unit) => ColumnKind::Duration { unit: *unit },
            DataType::List(field)
            | DataType::LargeList(field)
            | DataType::ListView(field)
            | DataType::LargeListView(field)
            | DataType::FixedSizeList(field, _) => {
                ColumnKind::List(Box::new(ColumnKind::from(field.data_type())))
            }
            DataType::Struct(fields) => ColumnKind::Struct(fields.len()),
            DataType::Map(_, _) => ColumnKind::Map,
            // dictionaries behave like their values for display and stats
            DataType::Dictionary(_, value) => ColumnKind::from(value.as_ref()),
            other => ColumnKind::Other(other.to_string().to_lowercase()),
        }
    }
}

fn unit_name(unit: &TimeUnit) -> &'static str {
    match unit {
        TimeUnit::Second => "s",
        TimeUnit::Millisecond => "ms",
        TimeUnit::Microsecond => "us",
        TimeUnit::Nanosecond => "ns",
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Null => write!(f, "null"),
            ColumnKind::Bool => write!(f, "bool"),
            ColumnKind::Int8 => write!(f, "i8"),
            ColumnKind::Int16 => write!(f, "i16"),
            ColumnKind::Int32 => write!(f, "i32"),
            ColumnKind::Int64 => write!(f, "i64"),
            ColumnKind::UInt8 => write!(f, "u8"),
            ColumnKind::UInt16 => write!(f, "u16"),
            ColumnKind::UInt32 => write!(f, "u32"),
            ColumnKind::UInt64 => write!(f, "u64"),
            ColumnKind::Float16 => write!(f, "f16"),
            ColumnKind::Float32 => write!(f, "f32"),
            ColumnKind::Float64 => write!(f, "f64"),
            ColumnKind::Decimal { precision, scale } => write!(f, "decimal({precision},{scale})"),
            ColumnKind::Utf8 => write!(f, "str"),
            ColumnKind::Binary => write!(f, "binary"),
            ColumnKind::Date => write!(f, "date"),
            ColumnKind::Time => write!(f, "time"),
            ColumnKind::Datetime { unit, tz: None } => write!(f, "datetime[{}]", unit_name(unit)),
            ColumnKind::Datetime { unit, tz: Some(tz) } => {
                write!(f, "datetime[{}, {tz}]", unit_name(unit))
            }
            ColumnKind::Duration { unit } => write!(f, "duration[{}]", unit_name(unit)),
            ColumnKind::List(inner) => write!(f, "list[{inner}]"),
            ColumnKind::Struct(n) => write!(f, "struct[{n}]"),
            ColumnKind::Map => write!(f, "map"),
            ColumnKind::Other(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{Field, Fields};
    use std::sync::Arc;

    #[test]
    fn test_portable_names() {
        let cases = [
            (DataType::Int64, "i64"),
            (DataType::UInt8, "u8"),
            (DataType::Float64, "f64"),
            (DataType::Boolean, "bool"),
            (DataType::Utf8, "str"),
            (DataType::LargeUtf8, "str"),
            (DataType::Utf8View, "str"),
            (DataType::Date32, "date"),
            (DataType::Decimal128(10, 2), "decimal(10,2)"),
            (
                DataType::Timestamp(TimeUnit::Millisecond, None),
                "datetime[ms]",
            ),
            (
                DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into())),
                "datetime[us, UTC]",
            ),
            (DataType::Duration(TimeUnit::Second), "duration[s]"),
        ];
        for (data_type, expected) in cases {
            assert_eq!(ColumnKind::from(&data_type).to_string(), expected);
        }
    }

    #[test]
    fn test_nested_names() {
        let list = DataType::List(Arc::new(Field::new("item", DataType::Int64, true)));
        assert_eq!(ColumnKind::from(&list).to_string(), "list[i64]");

        let nested = DataType::List(Arc::new(Field::new("item", list, true)));
        assert_eq!(ColumnKind::from(&nested).to_string(), "list[list[i64]]");

        let fields = Fields::from(vec![
            Field::new("a", DataType::Int32, true),
            Field::new("b", DataType::Utf8, true),
        ]);
        assert_eq!(
            ColumnKind::from(&DataType::Struct(fields)).to_string(),
            "struct[2]"
        );
    }

    #[test]
    fn test_dictionary_uses_value_kind() {
        let dict = DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::Utf8));
        let kind = ColumnKind::from(&dict);
        assert_eq!(kind, ColumnKind::Utf8);
        assert!(kind.is_text());
    }

    #[test]
    fn test_classification_by_tag() {
        for numeric in [
            DataType::Int8,
            DataType::Int64,
            DataType::UInt32,
            DataType::Float32,
            DataType::Float64,
            DataType::Decimal128(38, 4),
            DataType::Decimal256(50, 0),
        ] {
            let kind = ColumnKind::from(&numeric);
            assert!(kind.is_numeric(), "{numeric}");
            assert!(!kind.is_text(), "{numeric}");
        }

        for other in [
            DataType::Boolean,
            DataType::Date32,
            DataType::Timestamp(TimeUnit::Nanosecond, None),
            DataType::Binary,
        ] {
            let kind = ColumnKind::from(&other);
            assert!(!kind.is_numeric(), "{other}");
            assert!(!kind.is_text(), "{other}");
        }

        assert!(ColumnKind::from(&DataType::Utf8).is_text());
    }
}
