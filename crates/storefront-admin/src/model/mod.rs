//! Pure data structures implementing the [`ResourceEntity`](resource_actor::ResourceEntity) trait,
//! plus the drafts and patches that feed them.

/// Error returned when a path segment is not a valid identifier for the collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cast to {kind} id failed for value \"{value}\"")]
pub struct IdParseError {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a store-assigned identifier rendered as `<prefix>_<sequence>`.
///
/// The id travels as a plain string on the wire and in snapshots.
macro_rules! sequence_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(seq: u32) -> Self {
                Self(seq)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.strip_prefix(concat!($prefix, "_"))
                    .and_then(|seq| seq.parse::<u32>().ok())
                    .map(Self)
                    .ok_or_else(|| $crate::model::IdParseError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use sequence_id;

pub mod message;
pub mod product;

pub use message::*;
pub use product::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_their_text_form() {
        let id: ProductId = "product_12".parse().unwrap();
        assert_eq!(id, ProductId(12));
        assert_eq!(id.to_string(), "product_12");
        assert_eq!(MessageId(3).to_string(), "message_3");
    }

    #[test]
    fn test_foreign_or_garbled_ids_are_rejected() {
        for raw in ["message_1", "product_", "product_x", "12", "664f1c2e9b1e8a3d4c5b6a70"] {
            let err = raw.parse::<ProductId>().unwrap_err();
            assert_eq!(err.kind, "Product");
            assert_eq!(err.value, raw);
        }
    }

    #[test]
    fn test_ids_serialize_as_strings() {
        let json = serde_json::to_string(&MessageId(7)).unwrap();
        assert_eq!(json, "\"message_7\"");
        let back: MessageId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MessageId(7));
    }
}
