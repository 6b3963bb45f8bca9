//! Browser capability bridge for `platform_host_web` service adapters.
//!
//! Domain entry points stay stable while `interop` switches between the wasm32 implementation
//! and the native fallback shim.

mod interop;

pub async fn fetch_text(url: &str) -> Result<String, platform_host::FetchError> {
    interop::fetch_text(url).await
}

pub fn parent_has_class(element: &web_sys::Element, class: &str) -> bool {
    interop::parent_has_class(element, class)
}
