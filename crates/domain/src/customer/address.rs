use serde::{Deserialize, Serialize};

use super::AddressError;

/// Postal address of a customer.
///
/// Immutable once built; change a customer's address by replacing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AddressFields")]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

#[derive(Deserialize)]
struct AddressFields {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl TryFrom<AddressFields> for Address {
    type Error = AddressError;

    fn try_from(fields: AddressFields) -> Result<Self, Self::Error> {
        Address::new(fields.street, fields.number, fields.zip, fields.city)
    }
}

impl Address {
    /// Creates a validated address.
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, AddressError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), AddressError> {
        if self.street.trim().is_empty() {
            return Err(AddressError::StreetRequired);
        }
        if self.number == 0 {
            return Err(AddressError::NumberRequired);
        }
        if self.zip.trim().is_empty() {
            return Err(AddressError::ZipRequired);
        }
        if self.city.trim().is_empty() {
            return Err(AddressError::CityRequired);
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}
