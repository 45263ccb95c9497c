//!
//! Support for serde implementations
//!
use crate::*;
use crate::stdlib::str::FromStr;
use serde::{de, ser};

impl ser::Serialize for DigitList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a DigitList
struct DigitListVisitor;

impl<'de> de::Visitor<'de> for DigitListVisitor {
    type Value = DigitList;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-negative integer or decimal digit string")
    }

    fn visit_str<E>(self, value: &str) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        DigitList::from_str(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        Ok(DigitList::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        DigitList::try_from(value).map_err(E::custom)
    }

    fn visit_u128<E>(self, value: u128) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        Ok(DigitList::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        DigitList::try_from(value).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for DigitList {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(DigitListVisitor)
    }
}
