//! WASM bindings for JavaScript interop

use crate::backend::Backend;
use tracing::warn;
use wasm_bindgen::prelude::*;
use waypoint_core::{build_router_with, AppShell, Error, NavigationType, Renderer, RouterConfig, View};
use waypoint_router::{HistoryMode, Location};

// ============================================================================
// Renderer
// ============================================================================

/// Calls `render(viewName, path)` on every view change and
/// `render(null, path)` when the screen should be cleared
struct JsRenderer {
    render: js_sys::Function,
    last_path: String,
}

impl Renderer<View> for JsRenderer {
    fn mount(&mut self, view: &View, location: &Location) {
        self.last_path = location.to_string();
        let name = JsValue::from_str(view.name());
        let path = JsValue::from_str(&self.last_path);
        if let Err(e) = self.render.call2(&JsValue::NULL, &name, &path) {
            warn!(view = view.name(), error = ?e, "render callback threw");
        }
    }

    fn unmount(&mut self) {
        let path = JsValue::from_str(&self.last_path);
        if let Err(e) = self.render.call2(&JsValue::NULL, &JsValue::NULL, &path) {
            warn!(error = ?e, "render callback threw on unmount");
        }
    }
}

fn to_js(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn kind_str(kind: NavigationType) -> String {
    kind.as_str().to_string()
}

// ============================================================================
// Router
// ============================================================================

/// WASM-exposed application router
///
/// Owns the app shell. Hosts using `web` or `hash` mode should call
/// `sync()` from a `popstate` listener.
#[wasm_bindgen]
pub struct WasmRouter {
    shell: AppShell<View, Backend, JsRenderer>,
}

#[wasm_bindgen]
impl WasmRouter {
    /// Create the router
    ///
    /// `mode` is `"web"`, `"hash"` or `"memory"`; `base` defaults to `/`.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str, base: Option<String>, render: js_sys::Function) -> Result<WasmRouter, JsValue> {
        let mode = HistoryMode::from_name(mode)
            .ok_or_else(|| JsValue::from_str(&format!("unknown history mode: {mode}")))?;
        let base = base.unwrap_or_else(|| "/".to_string());
        let history = Backend::for_mode(mode, &base);
        let config = RouterConfig::new().mode(mode).base(base);
        let router = build_router_with(config, history).map_err(to_js)?;
        Ok(Self {
            shell: AppShell::new(
                router,
                JsRenderer {
                    render,
                    last_path: String::new(),
                },
            ),
        })
    }

    /// Render the view for the current address
    pub fn start(&mut self) -> Result<String, JsValue> {
        self.shell.mount().map(kind_str).map_err(to_js)
    }

    /// Push `path` and render its view
    pub fn navigate(&mut self, path: &str) -> Result<String, JsValue> {
        self.shell.navigate(path).map(kind_str).map_err(to_js)
    }

    /// Replace the current entry with `path` and render its view
    pub fn replace(&mut self, path: &str) -> Result<String, JsValue> {
        self.shell.replace(path).map(kind_str).map_err(to_js)
    }

    /// Browser modes finish on the next `popstate`
    pub fn back(&mut self) -> Result<(), JsValue> {
        self.shell.back().map(|_| ()).map_err(to_js)
    }

    pub fn forward(&mut self) -> Result<(), JsValue> {
        self.shell.forward().map(|_| ()).map_err(to_js)
    }

    /// Follow the address bar after `popstate`
    pub fn sync(&mut self) -> Result<String, JsValue> {
        self.shell.sync().map(kind_str).map_err(to_js)
    }

    /// View name bound to `path`, if any
    pub fn resolve(&self, path: &str) -> Option<String> {
        self.shell
            .router()
            .resolve(path)
            .ok()
            .map(|entry| entry.view.name().to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn current_path(&self) -> Option<String> {
        self.shell
            .router()
            .current()
            .map(|route| route.location.to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn current_view(&self) -> Option<String> {
        self.shell
            .router()
            .current()
            .map(|route| route.view.name().to_string())
    }

    /// URL written to the address bar for `path`
    pub fn href(&self, path: &str) -> String {
        self.shell.router().href(path)
    }

    /// All route paths in registration order
    pub fn paths(&self) -> Vec<String> {
        self.shell
            .router()
            .routes()
            .map(|entry| entry.path.clone())
            .collect()
    }

    /// Tear down: clears the screen and frees the router
    pub fn unmount(self) {
        self.shell.unmount();
    }
}
