//! Cell-to-text policy for rendered tables.

use arrow::{
    array::{Array, AsArray},
    buffer::NullBuffer,
    datatypes::{DataType, Float16Type, Float32Type, Float64Type},
    error::ArrowError,
    util::display::{ArrayFormatter, FormatOptions},
};

/// Shown in place of missing values.
pub const NULL_MARKER: &str = "∅";

const SIGNIFICANT_DIGITS: usize = 6;
const MAX_COMPOUND_CHARS: usize = 80;
const COMPOUND_KEEP_CHARS: usize = 77;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Float,
    Compound,
    Plain,
}

impl CellKind {
    fn of(data_type: &DataType) -> Self {
        match data_type {
            DataType::Float16 | DataType::Float32 | DataType::Float64 => CellKind::Float,
            DataType::List(_)
            | DataType::LargeList(_)
            | DataType::ListView(_)
            | DataType::LargeListView(_)
            | DataType::FixedSizeList(_, _)
            | DataType::Struct(_)
            | DataType::Map(_, _)
            | DataType::Union(_, _) => CellKind::Compound,
            _ => CellKind::Plain,
        }
    }
}

/// Formats the cells of one column.
pub struct CellFormatter<'a> {
    array: &'a dyn Array,
    nulls: Option<NullBuffer>,
    kind: CellKind,
    display: ArrayFormatter<'a>,
}

impl<'a> CellFormatter<'a> {
    pub fn try_new(array: &'a dyn Array) -> Result<Self, ArrowError> {
        Ok(Self {
            array,
            nulls: array.logical_nulls(),
            kind: CellKind::of(array.data_type()),
            display: ArrayFormatter::try_new(array, &FormatOptions::default())?,
        })
    }

    pub fn format(&self, row: usize) -> String {
        if self.nulls.as_ref().is_some_and(|n| n.is_null(row)) {
            return NULL_MARKER.to_string();
        }

        match self.kind {
            CellKind::Float => match self.float_value(row) {
                Some(v) => format_general(v),
                None => self.display.value(row).to_string(),
            },
            CellKind::Compound => truncate_compound(self.display.value(row).to_string()),
            CellKind::Plain => self.display.value(row).to_string(),
        }
    }

    fn float_value(&self, row: usize) -> Option<f64> {
        match self.array.data_type() {
            DataType::Float16 => Some(self.array.as_primitive::<Float16Type>().value(row).to_f64()),
            DataType::Float32 => Some(f64::from(
                self.array.as_primitive::<Float32Type>().value(row),
            )),
            DataType::Float64 => Some(self.array.as_primitive::<Float64Type>().value(row)),
            _ => None,
        }
    }
}

/// Format like C's `%.6g`: six significant digits, fixed or exponential
/// notation depending on magnitude, trailing zeros removed.
pub fn format_general(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // rounding to the significant digits first decides the exponent
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    #[allow(clippy::cast_possible_wrap)]
    let digits = SIGNIFICANT_DIGITS as i32;
    if exp < -4 || exp >= digits {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs())
    } else {
        #[allow(clippy::cast_sign_loss)]
        let decimals = (digits - 1 - exp) as usize;
        trim_fraction(&format!("{v:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Cap the display form of nested values at 80 characters.
pub fn truncate_compound(s: String) -> String {
    if s.chars().count() > MAX_COMPOUND_CHARS {
        let mut truncated: String = s.chars().take(COMPOUND_KEEP_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        s
    }
}
