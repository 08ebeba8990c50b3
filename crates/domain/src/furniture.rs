//! Furniture: the single kind of record held by the catalogue.

use serde::{Deserialize, Serialize};

use crate::code::FurnitureCode;
use crate::error::{MueblesError, ValidationError};

/// A furniture item as stored in the `muebles` collection.
///
/// Every descriptive field is optional: a record is accepted as soon as one
/// of them is supplied, and absent fields are omitted from the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    #[serde(rename = "codigo")]
    pub code: FurnitureCode,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "precio", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Furniture {
    /// Materialize a draft under the given code.
    #[must_use]
    pub fn from_draft(code: FurnitureCode, draft: FurnitureDraft) -> Self {
        Self {
            code,
            name: draft.name,
            price: draft.price,
            category: draft.category,
        }
    }

    /// Overwrite the fields supplied in `draft`, keeping the others.
    pub fn apply(&mut self, draft: FurnitureDraft) {
        if let Some(name) = draft.name {
            self.name = Some(name);
        }
        if let Some(price) = draft.price {
            self.price = Some(price);
        }
        if let Some(category) = draft.category {
            self.category = Some(category);
        }
    }
}

/// Client-supplied fields for a create or a partial update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FurnitureDraft {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "precio")]
    pub price: Option<f64>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
}

impl FurnitureDraft {
    /// `true` when no field was supplied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.category.is_none()
    }

    /// Check the presence invariant.
    ///
    /// Only a draft with *every* field absent is rejected; any single field
    /// is enough.
    ///
    /// # Errors
    ///
    /// Returns [`MueblesError::Validation`] when the draft is empty.
    pub fn validate(&self) -> Result<(), MueblesError> {
        if self.is_empty() {
            return Err(ValidationError::MissingData.into());
        }
        Ok(())
    }
}
