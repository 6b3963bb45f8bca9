use super::*;

pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    Err(FetchError::Unsupported {
        url: url.to_string(),
    })
}

// Without a DOM the ancestor cannot be inspected; assume the hover class is present.
pub fn parent_has_class(_element: &web_sys::Element, _class: &str) -> bool {
    true
}
