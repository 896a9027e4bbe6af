//! Food models
//!
//! Data structures matching the backend's `/foods` resource.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A food record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Assigned by the backend, never set by the client.
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub image: String,
}

impl Food {
    /// Returns a copy of this record with the present fields of `edit` applied on top.
    pub fn merged(&self, edit: &FoodEdit) -> Food {
        Food {
            id: self.id,
            name: edit.name.clone().unwrap_or_else(|| self.name.clone()),
            description: edit
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            price: edit.price.unwrap_or(self.price),
            available: self.available,
            image: edit.image.clone().unwrap_or_else(|| self.image.clone()),
        }
    }
}

impl Display for Food {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let availability = if self.available {
            "available"
        } else {
            "unavailable"
        };
        write!(
            f,
            "#{} {} (R$ {:.2}, {}) - {}",
            self.id, self.name, self.price, availability, self.description
        )
    }
}

/// The creatable fields of a food, as submitted from the create dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

impl FoodDraft {
    /// Build the POST body. New foods are always created as available.
    pub fn into_new_food(self) -> NewFood {
        NewFood {
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            available: true,
        }
    }
}

/// Request body for `POST /foods`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub available: bool,
}

/// Partial edit submitted from the edit dialog. Absent fields keep the selected food's value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodEdit {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl FoodEdit {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image.is_none()
    }
}
