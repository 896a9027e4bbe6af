//! Food API Client
//!
//! A JSON client for the `/foods` REST resource.

use crate::api::FoodApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::http;
use crate::models::{Food, NewFood};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("food-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FoodApiClient {
    client: Client,
    base_url: String,
}

impl FoodApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(http::CONNECT_TIMEOUT)
            .timeout(http::REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn food_endpoint(id: u64) -> String {
        format!("foods/{}", id)
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self.client.post(&url).json(body).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn put_request<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self.client.put(&url).json(body).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn delete_request(&self, endpoint: &str) -> Result<(), ApiError> {
        let url = self.build_url(endpoint);
        let response = self.client.delete(&url).send().await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl FoodApi for FoodApiClient {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    async fn list_foods(&self) -> Result<Vec<Food>, ApiError> {
        self.get_request("foods").await
    }

    async fn create_food(&self, food: NewFood) -> Result<Food, ApiError> {
        self.post_request("foods", &food).await
    }

    async fn update_food(&self, id: u64, food: Food) -> Result<Food, ApiError> {
        self.put_request(&Self::food_endpoint(id), &food).await
    }

    async fn delete_food(&self, id: u64) -> Result<(), ApiError> {
        self.delete_request(&Self::food_endpoint(id)).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on an ephemeral port and return the base URL.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}", addr)
    }

    #[test]
    /// Slashes between the base URL and the endpoint are normalized.
    fn test_build_url_normalizes_slashes() {
        let client = FoodApiClient::new("http://localhost:3333/").unwrap();
        assert_eq!(client.build_url("/foods"), "http://localhost:3333/foods");
        assert_eq!(
            client.build_url(&FoodApiClient::food_endpoint(7)),
            "http://localhost:3333/foods/7"
        );
        assert_eq!(client.base_url(), "http://localhost:3333/");
    }

    #[tokio::test]
    /// A successful GET decodes the JSON array body.
    async fn test_list_foods_decodes_body() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 80\r\nconnection: close\r\n\r\n[{\"id\":1,\"name\":\"A\",\"description\":\"a\",\"price\":1.5,\"available\":true,\"image\":\"i\"}]",
        )
        .await;
        let client = FoodApiClient::new(base).unwrap();
        let foods = client.list_foods().await.unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].id, 1);
        assert_eq!(foods[0].name, "A");
    }

    #[tokio::test]
    /// A non-success status becomes an HTTP error carrying the body text.
    async fn test_error_status_maps_to_http_error() {
        let base = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 9\r\nconnection: close\r\n\r\nnot found",
        )
        .await;
        let client = FoodApiClient::new(base).unwrap();
        match client.delete_food(42).await {
            Err(ApiError::Http { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    /// A body that is not a food becomes a decode error.
    async fn test_malformed_body_maps_to_decode_error() {
        let base = serve_once(
            "HTTP/1.1 201 Created\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{}",
        )
        .await;
        let client = FoodApiClient::new(base).unwrap();
        let draft = crate::models::FoodDraft {
            name: "A".to_string(),
            description: "a".to_string(),
            price: 1.0,
            image: "i".to_string(),
        };
        let result = client.create_food(draft.into_new_food()).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    /// An unreachable backend surfaces as a transport error.
    async fn test_unreachable_backend_is_reqwest_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = FoodApiClient::new(format!("http://{}", addr)).unwrap();
        let result = client.list_foods().await;
        assert!(matches!(result, Err(ApiError::Reqwest(_))));
    }
}
