use crate::api::error::ApiError;
use crate::models::{Food, NewFood};

pub(crate) mod client;
pub use client::FoodApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The REST collaborator behind the dashboard.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FoodApi: Send + Sync {
    /// Base URL requests are sent to.
    fn base_url(&self) -> String;

    /// `GET /foods`: the full collection.
    async fn list_foods(&self) -> Result<Vec<Food>, ApiError>;

    /// `POST /foods`: create a food; the server assigns its id.
    async fn create_food(&self, food: NewFood) -> Result<Food, ApiError>;

    /// `PUT /foods/{id}`: replace the food at `id` with `food`.
    async fn update_food(&self, id: u64, food: Food) -> Result<Food, ApiError>;

    /// `DELETE /foods/{id}`.
    async fn delete_food(&self, id: u64) -> Result<(), ApiError>;
}
