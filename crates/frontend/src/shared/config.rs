//! Настройки виджета списка: селекторы элементов, endpoint сортировки, размер страницы.
//!
//! Значения по умолчанию соответствуют каталогу курсов. Контейнер может
//! переопределить любое подмножество полей через JSON в атрибуте
//! `data-list-view`:
//!
//! ```html
//! <div id="All-Course-Container" data-list-view='{"default_page_size": 20}'>
//! ```

use crate::shared::api_utils::{FRAGMENT_HEADER, FRAGMENT_HEADER_VALUE};
use crate::shared::error::ListViewError;
use crate::shared::paged_list::sort_sync::{SelectionMode, StaleResponsePolicy};
use contracts::domain::a001_course;
use contracts::shared::listing::{PageSize, SortSchema};
use serde::Deserialize;

/// Attribute marking a list container and carrying its JSON overrides
pub const CONFIG_ATTRIBUTE: &str = "data-list-view";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListViewConfig {
    /// Used only when no element carries [`CONFIG_ATTRIBUTE`]
    pub container: String,
    /// Items, looked up inside the container
    pub item_selector: String,
    /// Inline `display` value for visible items; empty removes the property
    pub item_display: String,

    pub page_size_select: String,
    pub previous_button: String,
    pub next_button: String,
    pub page_indicator: String,

    pub sort_select: String,
    pub direction_toggle: String,
    pub direction_arrow: String,
    pub arrow_up_class: String,
    pub arrow_down_class: String,

    pub sort_endpoint: String,
    pub fragment_header: String,
    pub fragment_header_value: String,

    pub default_page_size: PageSize,
    pub sort_fields: Vec<String>,
    pub sort_placeholders: Vec<String>,
    pub selection_mode: SelectionMode,
    pub stale_responses: StaleResponsePolicy,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self {
            container: "#All-Course-Container".to_string(),
            item_selector: ".Course-Card-Outer-Container".to_string(),
            item_display: String::new(),
            page_size_select: "#itemsPerPage".to_string(),
            previous_button: "#prevPage".to_string(),
            next_button: "#nextPage".to_string(),
            page_indicator: "#pageInfo".to_string(),
            sort_select: "#SortByDropDown".to_string(),
            direction_toggle: ".toggle-container".to_string(),
            direction_arrow: ".arrow".to_string(),
            arrow_up_class: "arrow-up".to_string(),
            arrow_down_class: "arrow-down".to_string(),
            sort_endpoint: a001_course::SORT_ENDPOINT.to_string(),
            fragment_header: FRAGMENT_HEADER.to_string(),
            fragment_header_value: FRAGMENT_HEADER_VALUE.to_string(),
            default_page_size: PageSize::default(),
            sort_fields: a001_course::SORT_FIELDS.iter().map(|f| f.to_string()).collect(),
            sort_placeholders: a001_course::SORT_PLACEHOLDERS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            selection_mode: SelectionMode::default(),
            stale_responses: StaleResponsePolicy::default(),
        }
    }
}

impl ListViewConfig {
    /// Parse overrides; missing fields keep their defaults, blank input is
    /// the default configuration.
    pub fn from_json(json: &str) -> Result<Self, ListViewError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn sort_schema(&self) -> SortSchema {
        SortSchema::new(self.sort_fields.clone(), self.sort_placeholders.clone())
    }

    /// Controls without which the pager cannot work
    pub fn required_controls(&self) -> [&str; 3] {
        [
            self.previous_button.as_str(),
            self.next_button.as_str(),
            self.page_indicator.as_str(),
        ]
    }
}
