use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from an existing value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Creates a new random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is blank.
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Unique identifier for a customer.
    CustomerId
}

string_id! {
    /// Unique identifier for a product.
    ProductId
}

string_id! {
    /// Unique identifier for an order.
    OrderId
}

string_id! {
    /// Identifier of a line item inside an order.
    OrderItemId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_creates_unique_ids() {
        let id1 = OrderId::generate();
        let id2 = OrderId::generate();
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(id1.as_str()).is_ok());
    }

    #[test]
    fn string_conversion_preserves_value() {
        let id = CustomerId::new("123");
        assert_eq!(id.as_str(), "123");

        let id2: ProductId = "SKU-002".into();
        assert_eq!(id2.to_string(), "SKU-002");
        assert_eq!(String::from(id2), "SKU-002");
    }

    #[test]
    fn blank_ids_are_empty() {
        assert!(OrderItemId::new("").is_empty());
        assert!(OrderItemId::new("   ").is_empty());
        assert!(!OrderItemId::new("1").is_empty());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = CustomerId::new("c-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"c-1\"");
        let deserialized: CustomerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
