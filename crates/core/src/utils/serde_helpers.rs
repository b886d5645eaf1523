//! Serde utility helpers for lenient enum deserialization

/// Normalizes an enum tag so `ifStatement`, `if_statement`, `IF-STATEMENT`
/// all compare equal.
pub fn normalize_tag(tag: &str) -> String {
    tag.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Macro to implement case- and separator-insensitive deserialization for unit enums
///
/// Usage:
/// ```ignore
/// impl_lenient_deserialize!(
///     MyEnum,
///     Variant1 => "variant1",
///     Variant2 => "variant2"
/// );
/// ```
///
/// The string on the right is the normalized form produced by
/// [`normalize_tag`]: lowercase, no `_` or `-`.
#[macro_export]
macro_rules! impl_lenient_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:expr),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                match $crate::utils::serde_helpers::normalize_tag(&s).as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))),
                }
            }
        }

        impl std::str::FromStr for $enum_type {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match $crate::utils::serde_helpers::normalize_tag(s).as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    )),
                }
            }
        }
    };
}
