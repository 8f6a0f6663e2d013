use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    BadClientData,
    NotFound,
    InternalServerError,
    UnexpectedStatusCode,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

pub struct BaseClient {
    address: String,
    client: Client,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address: format!("{}/api/v1", address),
            client: Client::new(),
        }
    }

    async fn handle_api_response<T: DeserializeOwned>(
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let status = res.status();
        if status != expected_status_code {
            let variant = match status {
                StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
                StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
                StatusCode::INTERNAL_SERVER_ERROR => APIErrorVariant::InternalServerError,
                _ => APIErrorVariant::UnexpectedStatusCode,
            };
            let message = res.text().await.unwrap_or_default();
            return Err(APIError { variant, message });
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .get(format!("{}/{}", self.address, path))
            .send()
            .await
            .map_err(|e| APIError {
                variant: APIErrorVariant::Network,
                message: e.to_string(),
            })?;
        Self::handle_api_response(res, expected_status_code).await
    }

    pub async fn post<S: Serialize, T: DeserializeOwned>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .post(format!("{}/{}", self.address, path))
            .json(&body)
            .send()
            .await
            .map_err(|e| APIError {
                variant: APIErrorVariant::Network,
                message: e.to_string(),
            })?;
        Self::handle_api_response(res, expected_status_code).await
    }
}
