//! Mounting of list views on server-rendered catalog pages.

use crate::shared::api_utils::HttpFragmentSource;
use crate::shared::config::{ListViewConfig, CONFIG_ATTRIBUTE};
use crate::shared::dom::DomSurface;
use crate::shared::error::ListViewError;
use crate::shared::paged_list::{ListView, SharedListView};
use crate::shared::task::BrowserSpawner;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

pub type DomListView = SharedListView<DomSurface, HttpFragmentSource>;

thread_local! {
    // Views live as long as the page.
    static MOUNTED: RefCell<Vec<DomListView>> = const { RefCell::new(Vec::new()) };
}

/// Mount now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn mount_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("{}", ListViewError::NoDocument);
        return;
    };

    if document.ready_state() != "loading" {
        mount_all(&document);
        return;
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move || {
        mount_all(&target);
    });
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}

/// Mount every list container of `document`; returns how many were newly
/// mounted.
///
/// Containers are the elements carrying [`CONFIG_ATTRIBUTE`]. Pages without
/// any get the default container, if present. Containers that already have
/// a view are skipped.
pub fn mount_all(document: &Document) -> usize {
    let mut mounted = 0;
    for container in find_containers(document) {
        if is_mounted(&container) {
            log::debug!("Catalog list already mounted");
            continue;
        }
        match mount_container(document, container) {
            Ok(view) => {
                MOUNTED.with(|views| views.borrow_mut().push(view));
                mounted += 1;
            }
            Err(err) => log::warn!("Catalog list not mounted: {}", err),
        }
    }
    if mounted > 0 {
        log::info!("Mounted {} catalog list view(s)", mounted);
    }
    mounted
}

fn is_mounted(container: &Element) -> bool {
    let container: &Node = container;
    MOUNTED.with(|views| {
        views.borrow().iter().any(|view| {
            view.try_borrow()
                .is_ok_and(|view| view.surface().container().is_same_node(Some(container)))
        })
    })
}

fn find_containers(document: &Document) -> Vec<Element> {
    let marked = document
        .query_selector_all(&format!("[{}]", CONFIG_ATTRIBUTE))
        .map(|nodes| {
            (0..nodes.length())
                .filter_map(|i| nodes.get(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    if !marked.is_empty() {
        return marked;
    }

    let default_container = ListViewConfig::default().container;
    match document.query_selector(&default_container).ok().flatten() {
        Some(container) => vec![container],
        None => {
            log::debug!("No catalog list on this page");
            Vec::new()
        }
    }
}

/// Build the view for one container from its configuration attribute.
pub fn mount_container(
    document: &Document,
    container: Element,
) -> Result<DomListView, ListViewError> {
    let config = match container.get_attribute(CONFIG_ATTRIBUTE) {
        Some(json) => ListViewConfig::from_json(&json)?,
        None => ListViewConfig::default(),
    };
    let config = Rc::new(config);
    let surface = DomSurface::locate(document.clone(), container, config.clone())?;
    let source = HttpFragmentSource::new(
        config.fragment_header.clone(),
        config.fragment_header_value.clone(),
    );
    Ok(ListView::mount(
        surface,
        Rc::new(source),
        Rc::new(BrowserSpawner),
        &config,
    ))
}
