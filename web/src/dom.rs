//! Banner construction, insertion, and the DOM read/write of the two lines.

use prepper_banner::BannerError;
use prepper_banner::BannerState;
use prepper_banner::markup;
use wasm_bindgen::JsValue;
use web_sys::Document;
use web_sys::Element;
use web_sys::Node;

pub fn document() -> Result<Document, BannerError> {
    let window = web_sys::window().ok_or(BannerError::NoDocument)?;
    window.document().ok_or(BannerError::NoDocument)
}

/// Build the banner and insert it immediately before the page container, or
/// before the body's first child when no container matches.
///
/// Not idempotent: a second call inserts a second banner.
pub fn insert_banner(document: &Document, container_selector: &str) -> Result<Element, BannerError> {
    let banner = document.create_element("div").map_err(dom_err)?;
    banner.set_class_name(markup::BANNER_CLASS);
    banner.set_inner_html(markup::BANNER_HTML);

    let anchor = insertion_anchor(document, container_selector)?;
    let parent = anchor.parent_node().ok_or(BannerError::NoInsertionPoint)?;
    parent.insert_before(&banner, Some(&anchor)).map_err(dom_err)?;
    Ok(banner)
}

/// First element matching the container selector, else the body's first child.
fn insertion_anchor(document: &Document, container_selector: &str) -> Result<Node, BannerError> {
    let matched = document
        .query_selector(container_selector)
        .map_err(dom_err)?;
    match matched {
        Some(element) => Ok(element.into()),
        None => document
            .body()
            .and_then(|body| body.first_child())
            .ok_or(BannerError::NoInsertionPoint),
    }
}

/// State currently shown by the banner, reconstructed from the rendered text.
pub fn displayed_state(document: &Document) -> Result<BannerState, BannerError> {
    let ssid_line = line_text(document, markup::SSID_ELEMENT_ID)?;
    let password_line = line_text(document, markup::PASSWORD_ELEMENT_ID)?;
    Ok(BannerState::from_lines(&ssid_line, &password_line))
}

/// Write both lines back into the banner as plain text.
pub fn render_state(document: &Document, state: &BannerState) -> Result<(), BannerError> {
    set_line_text(document, markup::SSID_ELEMENT_ID, &state.ssid_line())?;
    set_line_text(document, markup::PASSWORD_ELEMENT_ID, &state.password_line())
}

fn line_text(document: &Document, id: &'static str) -> Result<String, BannerError> {
    let element = document
        .get_element_by_id(id)
        .ok_or(BannerError::MissingElement(id))?;
    Ok(element.text_content().unwrap_or_default())
}

fn set_line_text(document: &Document, id: &'static str, text: &str) -> Result<(), BannerError> {
    let element = document
        .get_element_by_id(id)
        .ok_or(BannerError::MissingElement(id))?;
    element.set_text_content(Some(text));
    Ok(())
}

pub(crate) fn dom_err(value: JsValue) -> BannerError {
    BannerError::Dom(format!("{value:?}"))
}
