/// Full-page navigation. Already being on `path` is a no-op, as is running
/// off-browser, so host-side tests can exercise redirecting code paths.
#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == path {
                return;
            }
        }
        let _ = location.set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(_path: &str) {}
