//! Cover-image upload.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::{ApiClient, ClientError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    image_url: String,
}

impl ApiClient {
    /// Upload a cover image and return its public URL.
    pub async fn upload_post_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ClientError> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let response = self
            .http()
            .post(self.url("blog/posts/upload-image"))
            .multipart(form)
            .send()
            .await?;
        let parsed: UploadResponse = Self::check(response).await?.json().await?;
        Ok(parsed.image_url)
    }
}
