// -----------------------------------------------------------------------------
// EnumTable

/// The name table of an enumeration, in declaration order.
///
/// Single-valued tables map one name to one value. Flag tables treat values
/// as bitmasks: encoding joins the names of all covered bits with `|`, and
/// decoding ORs the named bits back together.
///
/// # Examples
///
/// ```
/// use tagtree::EnumTable;
///
/// static LEVEL: EnumTable = EnumTable::new("Level", &[("Low", 0), ("Mid", 1), ("High", 2)]);
///
/// assert_eq!(LEVEL.key_of(1), Some("Mid"));
/// assert_eq!(LEVEL.value_of("High"), Some(2));
/// assert_eq!(LEVEL.value_of("Ultra"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EnumTable {
    name: &'static str,
    is_flag: bool,
    entries: &'static [(&'static str, i64)],
}

impl EnumTable {
    /// Creates a single-valued enum table.
    #[inline]
    pub const fn new(name: &'static str, entries: &'static [(&'static str, i64)]) -> Self {
        Self {
            name,
            is_flag: false,
            entries,
        }
    }

    /// Creates a flag (bitmask) enum table.
    #[inline]
    pub const fn flags(name: &'static str, entries: &'static [(&'static str, i64)]) -> Self {
        Self {
            name,
            is_flag: true,
            entries,
        }
    }

    /// Returns the enumeration's name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` when values are bitmasks of the entries.
    #[inline]
    pub const fn is_flag(&self) -> bool {
        self.is_flag
    }

    /// Returns the entries in declaration order.
    #[inline]
    pub const fn entries(&self) -> &'static [(&'static str, i64)] {
        self.entries
    }

    /// Returns the first name matching `value` exactly.
    pub fn key_of(&self, value: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, entry)| *entry == value)
            .map(|(name, _)| *name)
    }

    /// Returns the value registered under `key`.
    pub fn value_of(&self, key: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }
}

// -----------------------------------------------------------------------------
// Tests
