use std::fmt;
use num_enum::TryFromPrimitive;

/// Render a registry id by variant name, or as hex when unknown.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:04x}", raw),
    }
}

/// Number of `char`s in `text`; fragment sizes are measured in characters.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
