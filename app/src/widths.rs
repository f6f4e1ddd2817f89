//! Integer widths the report can exercise
//!
//! Widths are selected by name. Besides the Rust spellings, the registry
//! accepts the C type names the classic overflow exercises use, `native`
//! for the machine word and `all` for every width.

use crate::error::ReportError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// A primitive integer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

impl IntWidth {
    /// Every width, in report order.
    pub const ALL: [IntWidth; 12] = [
        IntWidth::I8,
        IntWidth::I16,
        IntWidth::I32,
        IntWidth::I64,
        IntWidth::I128,
        IntWidth::Isize,
        IntWidth::U8,
        IntWidth::U16,
        IntWidth::U32,
        IntWidth::U64,
        IntWidth::U128,
        IntWidth::Usize,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IntWidth::I8 => "i8",
            IntWidth::I16 => "i16",
            IntWidth::I32 => "i32",
            IntWidth::I64 => "i64",
            IntWidth::I128 => "i128",
            IntWidth::Isize => "isize",
            IntWidth::U8 => "u8",
            IntWidth::U16 => "u16",
            IntWidth::U32 => "u32",
            IntWidth::U64 => "u64",
            IntWidth::U128 => "u128",
            IntWidth::Usize => "usize",
        }
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registry of width names and aliases
pub static WIDTH_ALIASES: Lazy<HashMap<&'static str, IntWidth>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for width in IntWidth::ALL {
        m.insert(width.name(), width);
    }
    m.insert("native", IntWidth::Isize);
    m.insert("char", IntWidth::I8);
    m.insert("signed-char", IntWidth::I8);
    m.insert("short", IntWidth::I16);
    m.insert("int", IntWidth::I32);
    m.insert("long", IntWidth::I64);
    m.insert("long-long", IntWidth::I64);
    m.insert("unsigned-char", IntWidth::U8);
    m.insert("unsigned-short", IntWidth::U16);
    m.insert("unsigned", IntWidth::U32);
    m.insert("unsigned-int", IntWidth::U32);
    m.insert("unsigned-long", IntWidth::U64);
    m.insert("unsigned-long-long", IntWidth::U64);
    m.insert("size_t", IntWidth::Usize);
    m
});

/// Get a width by name or alias
pub fn get_width(name: &str) -> Option<IntWidth> {
    WIDTH_ALIASES.get(name.trim().to_lowercase().as_str()).copied()
}

/// Resolve a list of names into widths, expanding `all` and dropping repeats.
pub fn resolve_widths(names: &[String]) -> Result<Vec<IntWidth>, ReportError> {
    let mut widths = Vec::new();

    for name in names {
        let selected: Vec<IntWidth> = if name.trim().eq_ignore_ascii_case("all") {
            IntWidth::ALL.to_vec()
        } else {
            vec![get_width(name).ok_or_else(|| ReportError::UnknownWidth(name.clone()))?]
        };

        for width in selected {
            if !widths.contains(&width) {
                widths.push(width);
            }
        }
    }

    if widths.is_empty() {
        return Err(ReportError::NoWidths);
    }

    Ok(widths)
}
