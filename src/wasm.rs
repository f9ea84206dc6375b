//! WebAssembly bindings for the in-browser editor

use crate::loader::parse_snapshot;
use crate::project::Session;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("Error in {}: {}", context, err))
}

/// One editing session, owned by the page.
#[wasm_bindgen]
pub struct Workspace {
    session: Session,
}

#[wasm_bindgen]
impl Workspace {
    /// New workspace with the starter files.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Workspace, JsValue> {
        let session = Session::new().map_err(|e| js_error("Project Initialization", e))?;
        Ok(Workspace { session })
    }

    /// Replace files and settings from a saved snapshot (JSON text).
    pub fn restore(&mut self, snapshot_json: &str) -> Result<(), JsValue> {
        let snapshot = parse_snapshot(snapshot_json).map_err(|e| js_error("Project Load", e))?;
        self.session
            .restore(&snapshot)
            .map_err(|e| js_error("Project Load", e))?;
        console_log!("Project loaded: {} files", self.session.project.len());
        Ok(())
    }

    /// Snapshot as JSON text for the page to persist.
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot()).map_err(|e| js_error("Project Save", e))
    }

    #[wasm_bindgen(js_name = addFile)]
    pub fn add_file(&mut self, name: &str, content: &str) -> Result<(), JsValue> {
        self.session
            .project
            .add(name, content)
            .map_err(|e| js_error("Add New File", e))
    }

    #[wasm_bindgen(js_name = addNewFile)]
    pub fn add_new_file(&mut self, name: &str) -> Result<(), JsValue> {
        self.session
            .project
            .add_new(name)
            .map_err(|e| js_error("Add New File", e))
    }

    #[wasm_bindgen(js_name = addIcon)]
    pub fn add_icon(&mut self, name: &str, bytes: &[u8]) -> Result<(), JsValue> {
        self.session
            .project
            .add_icon(name, bytes)
            .map_err(|e| js_error("Icon Upload", e))
    }

    #[wasm_bindgen(js_name = getFile)]
    pub fn get_file(&self, name: &str) -> String {
        self.session.project.get(name).to_string()
    }

    #[wasm_bindgen(js_name = updateFile)]
    pub fn update_file(&mut self, name: &str, content: &str) -> bool {
        self.session.project.update(name, content)
    }

    #[wasm_bindgen(js_name = deleteFile)]
    pub fn delete_file(&mut self, name: &str) -> bool {
        self.session.project.delete(name).is_some()
    }

    #[wasm_bindgen(js_name = fileNames)]
    pub fn file_names(&self) -> Vec<String> {
        self.session.project.names().map(str::to_string).collect()
    }

    pub fn select(&mut self, name: &str) -> Result<(), JsValue> {
        self.session
            .project
            .select(name)
            .map_err(|e| js_error("File Selection", e))
    }

    pub fn selected(&self) -> Option<String> {
        self.session.project.selected().map(str::to_string)
    }

    /// Whether the file list changed since the last call.
    #[wasm_bindgen(js_name = takeDirty)]
    pub fn take_dirty(&mut self) -> bool {
        self.session.project.take_dirty()
    }

    /// Milliseconds between autosaves, or 0 when disabled.
    #[wasm_bindgen(js_name = autosaveIntervalMs)]
    pub fn autosave_interval_ms(&self) -> f64 {
        self.session
            .settings
            .autosave_interval()
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }

    /// Run the analysis and return the report as JSON text.
    pub fn analyze(&self) -> Result<String, JsValue> {
        let report = self.session.analyze();
        console_log!(
            "Analysis completed: {} findings, {} failures",
            report.total(),
            report.failures.len()
        );
        serde_json::to_string(&report).map_err(|e| js_error("Analysis", e))
    }

    /// Report rendered as a standalone HTML document for download.
    #[wasm_bindgen(js_name = exportReport)]
    pub fn export_report(&self) -> String {
        crate::report::generate_html_report(&self.session.analyze())
    }
}

/// Colorized HTML for JSON text.
#[wasm_bindgen(js_name = formatJson)]
pub fn format_json(text: &str) -> String {
    crate::highlight::highlight_json(text)
}
