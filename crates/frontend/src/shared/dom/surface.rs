use super::binding::DomBinding;
use crate::shared::config::ListViewConfig;
use crate::shared::error::ListViewError;
use crate::shared::paged_list::{Handler, ItemNode, ListAction, ListSurface};
use contracts::shared::listing::SortDirection;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

/// A server-rendered list container and the controls around it.
///
/// Controls are looked up by selector on every access: the sort fragment may
/// re-render any of them.
pub struct DomSurface {
    document: Document,
    container: Element,
    config: Rc<ListViewConfig>,
}

impl DomSurface {
    /// Fails when the pager controls are missing; the list is then left as
    /// the server rendered it.
    pub fn locate(
        document: Document,
        container: Element,
        config: Rc<ListViewConfig>,
    ) -> Result<Self, ListViewError> {
        for selector in config.required_controls() {
            if query(&document, selector).is_none() {
                return Err(ListViewError::MissingElement(selector.to_string()));
            }
        }
        Ok(Self {
            document,
            container,
            config,
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    fn control(&self, selector: &str) -> Option<Element> {
        query(&self.document, selector)
    }

    fn set_disabled(&self, selector: &str, disabled: bool) {
        if let Some(button) = self.control(selector) {
            let _ = button.toggle_attribute_with_force("disabled", disabled);
        }
    }

    fn binding_target(&self, action: ListAction) -> (&str, &'static str) {
        let config = &self.config;
        match action {
            ListAction::PreviousPage => (config.previous_button.as_str(), "click"),
            ListAction::NextPage => (config.next_button.as_str(), "click"),
            ListAction::PageSizeChanged => (config.page_size_select.as_str(), "change"),
            ListAction::SortChanged => (config.sort_select.as_str(), "change"),
            ListAction::DirectionToggled => (config.direction_toggle.as_str(), "click"),
        }
    }
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    if selector.trim().is_empty() {
        return None;
    }
    document.query_selector(selector).ok().flatten()
}

fn control_value(element: &Element) -> Option<String> {
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element.get_attribute("value")
}

fn set_control_value(element: &Element, value: &str) {
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }
}

/// One item element of the list
pub struct DomItem {
    element: HtmlElement,
    display: Rc<str>,
}

impl ItemNode for DomItem {
    fn set_visible(&self, visible: bool) {
        let style = self.element.style();
        let _ = if !visible {
            style.set_property("display", "none")
        } else if self.display.is_empty() {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", &self.display)
        };
    }
}

impl ListSurface for DomSurface {
    type Item = DomItem;
    type Binding = DomBinding;

    fn query_items(&self) -> Vec<DomItem> {
        let Ok(nodes) = self.container.query_selector_all(&self.config.item_selector) else {
            log::warn!("Invalid item selector `{}`", self.config.item_selector);
            return Vec::new();
        };
        let display: Rc<str> = Rc::from(self.config.item_display.as_str());
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|element| DomItem {
                element,
                display: display.clone(),
            })
            .collect()
    }

    fn set_page_indicator(&self, text: &str) {
        if let Some(indicator) = self.control(&self.config.page_indicator) {
            indicator.set_text_content(Some(text));
        }
    }

    fn set_previous_disabled(&self, disabled: bool) {
        self.set_disabled(&self.config.previous_button, disabled);
    }

    fn set_next_disabled(&self, disabled: bool) {
        self.set_disabled(&self.config.next_button, disabled);
    }

    fn page_size_value(&self) -> Option<String> {
        self.control(&self.config.page_size_select)
            .and_then(|select| control_value(&select))
    }

    fn sort_value(&self) -> Option<String> {
        self.control(&self.config.sort_select)
            .and_then(|select| control_value(&select))
    }

    fn set_sort_value(&self, value: &str) {
        if let Some(select) = self.control(&self.config.sort_select) {
            set_control_value(&select, value);
        }
    }

    fn direction_indicator(&self) -> Option<SortDirection> {
        let arrow = self.control(&self.config.direction_arrow)?;
        let classes = arrow.class_list();
        if classes.contains(&self.config.arrow_up_class) {
            Some(SortDirection::Asc)
        } else if classes.contains(&self.config.arrow_down_class) {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }

    fn set_direction_indicator(&self, direction: SortDirection) {
        let Some(arrow) = self.control(&self.config.direction_arrow) else {
            return;
        };
        let classes = arrow.class_list();
        let (add, remove) = match direction {
            SortDirection::Asc => (&self.config.arrow_up_class, &self.config.arrow_down_class),
            SortDirection::Desc => (&self.config.arrow_down_class, &self.config.arrow_up_class),
        };
        let _ = classes.remove_1(remove);
        let _ = classes.add_1(add);
    }

    fn location_search(&self) -> String {
        self.document
            .location()
            .and_then(|location| location.search().ok())
            .unwrap_or_default()
    }

    fn replace_content(&self, html: &str) {
        self.container.set_inner_html(html);
    }

    fn bind(&self, action: ListAction, handler: Handler) -> Option<DomBinding> {
        let (selector, event) = self.binding_target(action);
        let control = self.control(selector)?;
        DomBinding::attach(control.into(), event, handler)
    }
}
