#![cfg(target_arch = "wasm32")]

use catalog_frontend::app::{mount_all, mount_container};
use catalog_frontend::shared::api_utils::HttpFragmentSource;
use catalog_frontend::shared::config::ListViewConfig;
use catalog_frontend::shared::dom::DomSurface;
use catalog_frontend::shared::error::ListViewError;
use catalog_frontend::shared::paged_list::{ListAction, ListSurface};
use contracts::shared::listing::SortDirection;
use gloo_net::http::Method;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Course page markup with `items` cards; replaces the body content.
fn render_page(items: usize) -> Element {
    let list = cards("Course", items);
    let body = document().body().unwrap();
    body.set_inner_html(&format!(
        r#"
        <select id="SortByDropDown">
            <option value="">Sort by</option>
            <option value="name">Name</option>
            <option value="cost">Cost</option>
        </select>
        <div class="toggle-container"><span class="arrow arrow-down"></span></div>
        <div id="All-Course-Container">{list}</div>
        <select id="itemsPerPage">
            <option value="5">5</option>
            <option value="10" selected>10</option>
        </select>
        <button id="prevPage">Prev</button>
        <span id="pageInfo"></span>
        <button id="nextPage">Next</button>
        "#
    ));
    document().get_element_by_id("All-Course-Container").unwrap()
}

fn visible_cards() -> usize {
    let nodes = document()
        .query_selector_all(".Course-Card-Outer-Container")
        .unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .filter(|e| e.style().get_property_value("display").unwrap_or_default() != "none")
        .count()
}

fn cards(label: &str, items: usize) -> String {
    (1..=items)
        .map(|i| format!(r#"<div class="Course-Card-Outer-Container">{label} {i}</div>"#))
        .collect()
}

fn arrow_class() -> String {
    document().query_selector(".arrow").unwrap().unwrap().class_name()
}

fn text(selector: &str) -> String {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn click(selector: &str) {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
fn test_missing_pager_is_reported() {
    let container = render_page(3);
    document().get_element_by_id("pageInfo").unwrap().remove();
    let result = DomSurface::locate(document(), container, Rc::new(ListViewConfig::default()));
    assert!(matches!(result, Err(ListViewError::MissingElement(s)) if s == "#pageInfo"));
}

#[wasm_bindgen_test]
fn test_surface_reads_controls() {
    let container = render_page(3);
    let surface =
        DomSurface::locate(document(), container, Rc::new(ListViewConfig::default())).unwrap();

    assert_eq!(surface.query_items().len(), 3);
    assert_eq!(surface.page_size_value().as_deref(), Some("10"));
    assert_eq!(surface.sort_value().as_deref(), Some(""));
    assert_eq!(surface.direction_indicator(), Some(SortDirection::Desc));

    surface.set_direction_indicator(SortDirection::Asc);
    assert_eq!(surface.direction_indicator(), Some(SortDirection::Asc));

    surface.set_sort_value("cost");
    assert_eq!(surface.sort_value().as_deref(), Some("cost"));
}

#[wasm_bindgen_test]
fn test_mounted_view_paginates() {
    let container = render_page(23);
    let view = mount_container(&document(), container).unwrap();

    assert_eq!(visible_cards(), 10);
    assert_eq!(text("#pageInfo"), "Page 1 of 3");
    assert!(document().get_element_by_id("prevPage").unwrap().has_attribute("disabled"));

    click("#nextPage");
    click("#nextPage");
    assert_eq!(visible_cards(), 3);
    assert_eq!(text("#pageInfo"), "Page 3 of 3");
    assert!(document().get_element_by_id("nextPage").unwrap().has_attribute("disabled"));

    // A replaced container is picked up after the completed sort.
    let seq = view
        .borrow_mut()
        .apply_sort(
            ListViewConfig::default()
                .sort_schema()
                .parse_field("name", SortDirection::Desc)
                .unwrap(),
        )
        .unwrap()
        .seq;
    view.borrow_mut().complete_sort(seq, Ok(cards("Sorted", 4)));

    assert_eq!(visible_cards(), 4);
    assert_eq!(text("#pageInfo"), "Page 1 of 1");
    assert!(view.borrow().is_bound(ListAction::NextPage));
    assert_eq!(
        document().query_selector(".arrow").unwrap().unwrap().class_name(),
        "arrow arrow-down"
    );
}

#[wasm_bindgen_test]
fn test_listeners_survive_repeated_sorts_once() {
    let container = render_page(23);
    let view = mount_container(&document(), container).unwrap();
    let schema = ListViewConfig::default().sort_schema();

    for (round, field) in ["name", "cost", "location", "lab_hours", "name"]
        .into_iter()
        .enumerate()
    {
        let selection = schema.parse_field(field, SortDirection::Desc).unwrap();
        let seq = view.borrow_mut().apply_sort(selection).unwrap().seq;
        view.borrow_mut()
            .complete_sort(seq, Ok(cards(&format!("Round {round}"), 23)));
    }
    assert_eq!(text("#pageInfo"), "Page 1 of 3");

    click("#nextPage");
    assert_eq!(text("#pageInfo"), "Page 2 of 3");
    assert_eq!(visible_cards(), 10);

    click("#prevPage");
    assert_eq!(text("#pageInfo"), "Page 1 of 3");

    assert_eq!(arrow_class(), "arrow arrow-down");
    click(".toggle-container");
    assert_eq!(arrow_class(), "arrow arrow-up");
}

#[wasm_bindgen_test]
fn test_mount_all_skips_mounted_containers() {
    render_page(23);
    assert_eq!(mount_all(&document()), 1);
    assert_eq!(mount_all(&document()), 0);

    click("#nextPage");
    assert_eq!(text("#pageInfo"), "Page 2 of 3");
}

#[wasm_bindgen_test]
fn test_fragment_request_carries_marker_header() {
    let request = HttpFragmentSource::default()
        .request("/courses/sort/?sort=name&order=asc")
        .build()
        .unwrap();
    assert_eq!(request.method(), Method::GET);
    assert_eq!(
        request.headers().get("X-Requested-With").as_deref(),
        Some("XMLHttpRequest")
    );
}
