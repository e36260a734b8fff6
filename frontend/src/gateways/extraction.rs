use super::{decode_error, ensure_ok, js_error, network_error};
use common::gateway::{ExtractionGateway, GatewayError, UploadFile};
use common::model::extraction::ExtractionData;
use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, FormData};

/// Multipart form field the extraction service reads the document from.
const FILE_FIELD: &str = "file";

/// Remote extraction service reached with a multipart `POST`.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpExtractionService {
    url: String,
}

impl HttpExtractionService {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn form_for(file: &UploadFile) -> Result<FormData, GatewayError> {
        let parts = Array::of1(&Uint8Array::from(file.bytes.as_slice()));
        let options = BlobPropertyBag::new();
        if let Some(mime_type) = &file.mime_type {
            options.set_type(mime_type);
        }
        let blob =
            Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;

        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(FILE_FIELD, &blob, &file.name)
            .map_err(js_error)?;
        Ok(form)
    }
}

impl ExtractionGateway for HttpExtractionService {
    async fn extract(&self, file: &UploadFile) -> Result<ExtractionData, GatewayError> {
        let form = Self::form_for(file)?;
        let response = Request::post(&self.url)
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        // Anything that is not an object decodes as empty data.
        let raw: serde_json::Value = ensure_ok(response)
            .await?
            .json()
            .await
            .map_err(decode_error)?;
        Ok(ExtractionData::from(raw))
    }
}
