//! WASM bindings for the paginator

pub mod flat_buffer;

use js_sys::Function;
use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::{ConfigurationError, PaginatorConfig};
use crate::notify::ActivePageObserver;
use crate::render::{PageStrip, RenderDiff};
use crate::Paginator;
use flat_buffer::StripBuffer;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Forwards active page notifications to a JS callback
#[derive(Debug)]
pub struct JsObserver {
    callback: Function,
}

impl JsObserver {
    pub fn new(callback: Function) -> Self {
        Self { callback }
    }
}

impl ActivePageObserver for JsObserver {
    fn on_active_page_changed(&mut self, page: usize) {
        if let Err(err) = self.callback.call1(&JsValue::NULL, &JsValue::from(page as u32)) {
            warn!("active page callback threw: {:?}", err);
        }
    }
}

/// Either a working paginator or the reason it was not created
enum Widget {
    Ready(Paginator<JsObserver>),
    Rejected(ConfigurationError),
}

/// WASM-exposed paginator wrapper.
///
/// A rejected configuration does not throw: the wrapper keeps the warning
/// and renders no page controls.
#[wasm_bindgen]
pub struct WasmPaginator {
    widget: Widget,
    buffer: StripBuffer,
    /// Strip handed out by the last `getRenderDiffJson` call
    last_strip: Option<PageStrip>,
}

#[wasm_bindgen]
impl WasmPaginator {
    /// Create a paginator with the default "Prev"/"Next" labels
    #[wasm_bindgen(constructor)]
    pub fn new(
        items_per_page: i32,
        total_items: i32,
        context_size: i32,
        on_change: Function,
    ) -> Self {
        let config = PaginatorConfig::new(
            i64::from(items_per_page),
            i64::from(total_items),
            i64::from(context_size),
        );
        Self::from_config(config, on_change)
    }

    /// Create a paginator with custom prev/next labels
    #[wasm_bindgen(js_name = withLabels)]
    pub fn with_labels(
        items_per_page: i32,
        total_items: i32,
        context_size: i32,
        prev_text: String,
        next_text: String,
        on_change: Function,
    ) -> Self {
        let config = PaginatorConfig::new(
            i64::from(items_per_page),
            i64::from(total_items),
            i64::from(context_size),
        )
        .with_labels(prev_text, next_text);
        Self::from_config(config, on_change)
    }

    /// Create a paginator from a camelCase JSON configuration
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str, on_change: Function) -> Self {
        match PaginatorConfig::from_json(json) {
            Ok(config) => Self::from_config(config, on_change),
            Err(err) => {
                warn!("paginator configuration rejected: {}", err);
                Self::rejected(err)
            }
        }
    }

    /// Select a page; out-of-range pages are ignored
    #[wasm_bindgen(js_name = selectPage)]
    pub fn select_page(&mut self, page: i32) -> bool {
        match &mut self.widget {
            Widget::Ready(paginator) => paginator.select_page(i64::from(page)),
            Widget::Rejected(_) => false,
        }
    }

    /// "Previous" control
    #[wasm_bindgen(js_name = selectPrevious)]
    pub fn select_previous(&mut self) -> bool {
        match &mut self.widget {
            Widget::Ready(paginator) => paginator.select_previous(),
            Widget::Rejected(_) => false,
        }
    }

    /// "Next" control
    #[wasm_bindgen(js_name = selectNext)]
    pub fn select_next(&mut self) -> bool {
        match &mut self.widget {
            Widget::Ready(paginator) => paginator.select_next(),
            Widget::Rejected(_) => false,
        }
    }

    /// Active page, 0 when the configuration was rejected
    #[wasm_bindgen(js_name = getActivePage)]
    pub fn get_active_page(&self) -> u32 {
        match &self.widget {
            Widget::Ready(paginator) => paginator.active_page() as u32,
            Widget::Rejected(_) => 0,
        }
    }

    /// Total pages, 0 when the configuration was rejected
    #[wasm_bindgen(js_name = getTotalPages)]
    pub fn get_total_pages(&self) -> u32 {
        match &self.widget {
            Widget::Ready(paginator) => paginator.total_pages() as u32,
            Widget::Rejected(_) => 0,
        }
    }

    /// First item index of the active page (0-based, inclusive)
    #[wasm_bindgen(js_name = getItemStart)]
    pub fn get_item_start(&self) -> u32 {
        match &self.widget {
            Widget::Ready(paginator) => paginator.item_range().start as u32,
            Widget::Rejected(_) => 0,
        }
    }

    /// End of the active page's items (0-based, exclusive)
    #[wasm_bindgen(js_name = getItemEnd)]
    pub fn get_item_end(&self) -> u32 {
        match &self.widget {
            Widget::Ready(paginator) => paginator.item_range().end as u32,
            Widget::Rejected(_) => 0,
        }
    }

    #[wasm_bindgen(js_name = hasWarning)]
    pub fn has_warning(&self) -> bool {
        matches!(self.widget, Widget::Rejected(_))
    }

    /// Advisory message for a rejected configuration
    #[wasm_bindgen(js_name = getWarning)]
    pub fn get_warning(&self) -> Option<String> {
        match &self.widget {
            Widget::Ready(_) => None,
            Widget::Rejected(err) => Some(err.warning_message().to_string()),
        }
    }

    /// Full render data as JSON
    #[wasm_bindgen(js_name = getRenderJson)]
    pub fn get_render_json(&self) -> String {
        let render_data = RenderData::from_widget(&self.widget);
        serde_json::to_string(&render_data).unwrap_or_else(|_| "null".to_string())
    }

    /// Patches since the previous call, as JSON (everything on the first call)
    #[wasm_bindgen(js_name = getRenderDiffJson)]
    pub fn get_render_diff_json(&mut self) -> String {
        let Widget::Ready(paginator) = &self.widget else {
            return serde_json::to_string(&RenderDiff::default())
                .unwrap_or_else(|_| "null".to_string());
        };

        let current = paginator.page_strip();
        let diff = match &self.last_strip {
            Some(previous) => RenderDiff::between(previous, &current),
            None => RenderDiff::between(&empty_strip(), &current),
        };
        self.last_strip = Some(current);

        serde_json::to_string(&diff).unwrap_or_else(|_| "null".to_string())
    }

    /// Page strip encoded as a flat `u32` buffer (see [`flat_buffer`])
    #[wasm_bindgen(js_name = getStripBuffer)]
    pub fn get_strip_buffer(&mut self) -> Vec<u32> {
        match &self.widget {
            Widget::Ready(paginator) => self.buffer.write_strip(&paginator.page_strip()),
            Widget::Rejected(_) => self.buffer.write_warning(),
        }
        self.buffer.as_slice().to_vec()
    }
}

impl WasmPaginator {
    fn from_config(config: PaginatorConfig, on_change: Function) -> Self {
        match Paginator::initialize(config, JsObserver::new(on_change)) {
            Ok(paginator) => Self {
                widget: Widget::Ready(paginator),
                buffer: StripBuffer::new(),
                last_strip: None,
            },
            Err(err) => Self::rejected(err),
        }
    }

    fn rejected(err: ConfigurationError) -> Self {
        Self {
            widget: Widget::Rejected(err),
            buffer: StripBuffer::new(),
            last_strip: None,
        }
    }
}

fn empty_strip() -> PageStrip {
    PageStrip {
        version: 0,
        active_page: 0,
        total_pages: 0,
        items: Vec::new(),
    }
}

/// Serializable render data for JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderData {
    pub warning: Option<&'static str>,
    pub warning_field: Option<&'static str>,
    pub strip: Option<PageStrip>,
}

impl RenderData {
    fn from_widget(widget: &Widget) -> Self {
        match widget {
            Widget::Ready(paginator) => RenderData {
                warning: None,
                warning_field: None,
                strip: Some(paginator.page_strip()),
            },
            Widget::Rejected(err) => RenderData {
                warning: Some(err.warning_message()),
                warning_field: err.field(),
                strip: None,
            },
        }
    }
}
