//! `gloo-net` implementation of the API transport.

use std::rc::Rc;

use common::api::{ApiClient, FormPart, HttpReply, MultipartForm, Transport};
use common::config::SiteConfig;
use common::error::ApiError;
use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

pub type Api = ApiClient<FetchTransport>;

pub fn api_client(config: &SiteConfig) -> Rc<Api> {
    Rc::new(ApiClient::from_config(config, FetchTransport))
}

pub struct FetchTransport;

impl Transport for FetchTransport {
    type File = File;

    async fn get(&self, url: &str) -> Result<HttpReply, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_reply(response).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        form: &MultipartForm<File>,
    ) -> Result<HttpReply, ApiError> {
        let body = to_form_data(form)?;
        let response = Request::post(url)
            .body(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_reply(response).await
    }
}

async fn read_reply(response: Response) -> Result<HttpReply, ApiError> {
    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response
        .binary()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(HttpReply {
        status,
        content_type,
        body,
    })
}

fn to_form_data(form: &MultipartForm<File>) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(js_error)?;
    for (name, part) in form.parts() {
        match part {
            FormPart::Text(value) => data.append_with_str(name, value),
            FormPart::File(file) => data.append_with_blob_and_filename(name, &file.handle, &file.name),
        }
        .map_err(js_error)?;
    }
    Ok(data)
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Transport(
        err.as_string()
            .unwrap_or_else(|| "Could not build the request body".to_string()),
    )
}
