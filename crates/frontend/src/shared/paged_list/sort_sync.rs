use contracts::shared::listing::query::{ORDER_KEY, SORT_KEY};
use contracts::shared::listing::{
    QueryParams, SortDirection, SortError, SortSchema, SortSelection, SortState,
};
use serde::Deserialize;

use crate::shared::api_utils::FetchError;

/// What the sort selector's value holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Field name only; direction comes from the toggle
    #[default]
    Field,
    /// `field-direction`, e.g. `cost-desc`
    Combined,
}

/// Which fragment responses may replace the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleResponsePolicy {
    /// Only the response to the most recent request
    #[default]
    Latest,
    /// Every response, in the order they complete
    All,
}

/// A fragment request ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub seq: u64,
    pub state: SortState,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    Applied,
    /// A newer request was issued meanwhile
    Stale,
    Failed(FetchError),
}

/// Sort state of one list view and the requests derived from it.
///
/// The held direction is authoritative; the arrow only mirrors it.
#[derive(Debug, Clone)]
pub struct SortSync {
    schema: SortSchema,
    endpoint: String,
    mode: SelectionMode,
    policy: StaleResponsePolicy,
    current: Option<SortState>,
    direction: SortDirection,
    issued: u64,
}

impl SortSync {
    pub fn new(
        schema: SortSchema,
        endpoint: impl Into<String>,
        mode: SelectionMode,
        policy: StaleResponsePolicy,
    ) -> Self {
        Self {
            schema,
            endpoint: endpoint.into(),
            mode,
            policy,
            current: None,
            direction: SortDirection::default(),
            issued: 0,
        }
    }

    /// Pick up the sort the page was rendered with. Issues nothing.
    ///
    /// Direction: arrow, then the `order` query parameter, then ascending.
    /// Field: selector, then the `sort` query parameter.
    pub fn restore(&mut self, selector: Option<&str>, arrow: Option<SortDirection>, search: &str) {
        let query = QueryParams::parse(search);
        self.direction = arrow
            .or_else(|| query.get(ORDER_KEY).and_then(|raw| raw.parse().ok()))
            .unwrap_or_default();

        let from_selector = selector.and_then(|raw| self.select(raw).ok()?.into_state());
        let from_query = || {
            let field = self.schema.field(query.get(SORT_KEY)?).ok()?;
            Some(SortState::new(field, self.direction))
        };
        let current = from_selector.or_else(from_query);
        if let Some(state) = &current {
            self.direction = state.direction;
        }
        self.current = current;
    }

    /// Interpret a selector value according to the selection mode
    pub fn select(&self, raw: &str) -> Result<SortSelection, SortError> {
        match self.mode {
            SelectionMode::Field => self.schema.parse_field(raw, self.direction),
            SelectionMode::Combined => self.schema.parse_combined(raw),
        }
    }

    /// Flip the held direction and return the new one
    pub fn toggle_direction(&mut self) -> SortDirection {
        self.direction = self.direction.toggled();
        self.direction
    }

    /// Record `state` as current and build its request from the page's query
    /// string: `sort` and `order` overwritten, everything else kept.
    pub fn request(&mut self, state: SortState, search: &str) -> SortRequest {
        self.issued += 1;
        self.direction = state.direction;
        let url = QueryParams::parse(search)
            .with_sort(&state)
            .to_url(&self.endpoint);
        self.current = Some(state.clone());
        SortRequest {
            seq: self.issued,
            state,
            url,
        }
    }

    /// Whether the response to request `seq` may be applied
    pub fn accepts(&self, seq: u64) -> bool {
        match self.policy {
            StaleResponsePolicy::Latest => seq == self.issued,
            StaleResponsePolicy::All => true,
        }
    }

    /// Selector value representing `state` in the current mode
    pub fn selector_value(&self, state: &SortState) -> String {
        match self.mode {
            SelectionMode::Field => state.field.to_string(),
            SelectionMode::Combined => state.combined(),
        }
    }

    pub fn current(&self) -> Option<&SortState> {
        self.current.as_ref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn issued(&self) -> u64 {
        self.issued
    }
}
