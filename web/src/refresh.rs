//! Best-effort credential refresh from the local endpoint.

use prepper_banner::BannerError;
use prepper_banner::CredentialsResponse;
use prepper_banner::RefreshConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::dom;

/// `GET` the endpoint and parse the JSON body.
///
/// Network errors, non-2xx statuses, and bodies that do not look like a
/// credentials object all come back as errors; callers treat every one of
/// them as "data unavailable".
pub async fn fetch_credentials(endpoint: &str) -> Result<CredentialsResponse, BannerError> {
    let window = web_sys::window().ok_or(BannerError::NoDocument)?;
    let fetched = JsFuture::from(window.fetch_with_str(endpoint))
        .await
        .map_err(|error| BannerError::Network(format!("{error:?}")))?;
    let response: Response = fetched
        .dyn_into()
        .map_err(|error| BannerError::Network(format!("{error:?}")))?;
    if !response.ok() {
        return Err(BannerError::Status(response.status()));
    }
    let body = JsFuture::from(response.json().map_err(parse_err)?)
        .await
        .map_err(parse_err)?;
    serde_wasm_bindgen::from_value(body).map_err(|error| BannerError::Parse(error.to_string()))
}

/// One refresh pass: fetch, fold into the displayed state, write back.
///
/// On any failure the DOM is left untouched.
pub async fn refresh_once(config: &RefreshConfig) -> Result<(), BannerError> {
    let response = fetch_credentials(&config.endpoint).await?;
    let document = dom::document()?;
    let previous = dom::displayed_state(&document)?;
    dom::render_state(&document, &previous.apply(&response))
}

fn parse_err(value: wasm_bindgen::JsValue) -> BannerError {
    BannerError::Parse(format!("{value:?}"))
}
