// Endpoint operations of the Formdesk API
//
// Every method here is a fixed mapping: build the path from the API
// version and resource IDs, pick the HTTP verb, hand a typed body to the
// dispatcher and deserialize the returned bytes. No validation, no
// retries, no business logic.

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::Client;
use crate::errors::Error;
use formdesk_core::{BaseInfo, Design, DesignInfo, Form, FormInfo, ImageInfo, NewImage, UrlInfo};

/// Body of a create-image request
#[derive(Serialize)]
struct NewImageRequest<'a> {
    url: &'a str,
}

/// Body of a create-url / modify-url request
#[derive(Serialize)]
struct UrlBindingRequest<'a> {
    form_id: &'a str,
}

/// Deserialize a response body into its typed record
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    tracing::trace!(body = %String::from_utf8_lossy(body), "decoding response body");
    serde_json::from_slice(body).map_err(|e| Error::Decoding(e.to_string()))
}

impl Client {
    /// Fetch metadata about the API itself
    pub async fn base_info(&self) -> Result<BaseInfo, Error> {
        let path = format!("/{}/", self.api_version());

        let (body, _) = self
            .dispatch::<()>(&path, Method::GET, HeaderMap::new(), &[], None)
            .await?;
        decode(&body)
    }

    /// Create a new form
    ///
    /// # Arguments
    /// * `new_form` - The form definition; `title` and `fields` are required
    pub async fn create_form(&self, new_form: &Form) -> Result<FormInfo, Error> {
        let path = format!("/{}/forms", self.api_version());

        let (body, _) = self
            .dispatch(&path, Method::POST, HeaderMap::new(), &[], Some(new_form))
            .await?;
        decode(&body)
    }

    /// Fetch an existing form by ID
    pub async fn get_form(&self, form_id: &str) -> Result<FormInfo, Error> {
        let path = format!("/{}/forms/{}", self.api_version(), form_id);

        let (body, _) = self
            .dispatch::<()>(&path, Method::GET, HeaderMap::new(), &[], None)
            .await?;
        decode(&body)
    }

    /// Upload an image by URL, for use in picture-choice fields
    pub async fn create_image(&self, image_url: &str) -> Result<NewImage, Error> {
        let path = format!("/{}/images", self.api_version());
        let payload = NewImageRequest { url: image_url };

        let (body, _) = self
            .dispatch(&path, Method::POST, HeaderMap::new(), &[], Some(&payload))
            .await?;
        decode(&body)
    }

    /// Fetch an existing image by ID
    pub async fn get_image(&self, image_id: &str) -> Result<ImageInfo, Error> {
        let path = format!("/{}/images/{}", self.api_version(), image_id);

        let (body, _) = self
            .dispatch::<()>(&path, Method::GET, HeaderMap::new(), &[], None)
            .await?;
        decode(&body)
    }

    /// Create a new design
    pub async fn create_design(&self, new_design: &Design) -> Result<DesignInfo, Error> {
        let path = format!("/{}/designs", self.api_version());

        let (body, _) = self
            .dispatch(&path, Method::POST, HeaderMap::new(), &[], Some(new_design))
            .await?;
        decode(&body)
    }

    /// Fetch an existing design by ID
    pub async fn get_design(&self, design_id: &str) -> Result<DesignInfo, Error> {
        let path = format!("/{}/designs/{}", self.api_version(), design_id);

        let (body, _) = self
            .dispatch::<()>(&path, Method::GET, HeaderMap::new(), &[], None)
            .await?;
        decode(&body)
    }

    /// Create a URL binding under which a form is rendered
    pub async fn create_url(&self, form_id: &str) -> Result<UrlInfo, Error> {
        let path = format!("/{}/urls", self.api_version());
        let payload = UrlBindingRequest { form_id };

        let (body, _) = self
            .dispatch(&path, Method::POST, HeaderMap::new(), &[], Some(&payload))
            .await?;
        decode(&body)
    }

    /// Fetch an existing URL binding by ID
    pub async fn get_url(&self, url_id: &str) -> Result<UrlInfo, Error> {
        let path = format!("/{}/urls/{}", self.api_version(), url_id);

        let (body, _) = self
            .dispatch::<()>(&path, Method::GET, HeaderMap::new(), &[], None)
            .await?;
        decode(&body)
    }

    /// Point an existing URL binding at a different form
    ///
    /// # Arguments
    /// * `url_id` - The binding to modify
    /// * `form_id` - The form it should render from now on
    pub async fn modify_url(&self, url_id: &str, form_id: &str) -> Result<UrlInfo, Error> {
        let path = format!("/{}/urls/{}", self.api_version(), url_id);
        let payload = UrlBindingRequest { form_id };

        let (body, _) = self
            .dispatch(&path, Method::PUT, HeaderMap::new(), &[], Some(&payload))
            .await?;
        decode(&body)
    }

    /// Delete a URL binding. The form itself is left untouched.
    pub async fn delete_url(&self, url_id: &str) -> Result<(), Error> {
        let path = format!("/{}/urls/{}", self.api_version(), url_id);

        self.dispatch::<()>(&path, Method::DELETE, HeaderMap::new(), &[], None)
            .await?;
        Ok(())
    }
}
