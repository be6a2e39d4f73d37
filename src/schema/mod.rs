//! Per-type property schemas: the descriptor tables driving the engine.
//!
//! A [`Schema`] is an ordered slice of [`Property`] descriptors plus an
//! offset excluding properties inherited from a common base. Descriptors are
//! `const`-constructible so a type's schema can live in a `static` inside
//! its [`Serializable`](crate::Serializable) impl.

mod enum_table;
mod kind;
mod property;

pub use enum_table::EnumTable;
pub use kind::{ElementCodec, Kind};
pub use property::{Property, Schema};

pub(crate) use property::{Access, Adapter};
