//! In-memory page, fragment source and task queue for driving list views in
//! native tests.

use super::surface::{Handler, ItemNode, ListAction, ListSurface};
use crate::shared::api_utils::{FetchError, FragmentFuture, FragmentSource};
use crate::shared::task::{LocalTask, TaskSpawner};
use contracts::shared::listing::SortDirection;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// Marker counted as one item in fragments given to [`FakeSurface`]
pub const ITEM_MARKUP: &str = "<article class=\"course\"></article>";

pub fn fragment(items: usize) -> String {
    ITEM_MARKUP.repeat(items)
}

#[derive(Default)]
pub struct FakePage {
    items: Vec<Rc<Cell<bool>>>,
    content: String,
    indicator: String,
    previous_disabled: bool,
    next_disabled: bool,
    page_size: Option<String>,
    sort_value: Option<String>,
    has_toggle: bool,
    arrow: Option<Option<SortDirection>>,
    search: String,
    handlers: Vec<(u64, ListAction, Handler)>,
    next_handler_id: u64,
    replacements: usize,
}

/// Shared handle to a fake page
#[derive(Clone, Default)]
pub struct FakeSurface(Rc<RefCell<FakePage>>);

pub struct FakeItem(Rc<Cell<bool>>);

impl ItemNode for FakeItem {
    fn set_visible(&self, visible: bool) {
        self.0.set(visible);
    }
}

pub struct FakeBinding {
    id: u64,
    page: Weak<RefCell<FakePage>>,
}

impl Drop for FakeBinding {
    fn drop(&mut self) {
        if let Some(page) = self.page.upgrade() {
            page.borrow_mut().handlers.retain(|(id, _, _)| *id != self.id);
        }
    }
}

impl FakeSurface {
    /// Page with `items` items, a page-size select showing `10`, a sort
    /// select on its placeholder and a direction toggle pointing up.
    pub fn with_items(items: usize) -> Self {
        let surface = Self::default();
        surface.load(&fragment(items));
        {
            let mut page = surface.0.borrow_mut();
            page.page_size = Some("10".to_string());
            page.sort_value = Some(String::new());
            page.has_toggle = true;
            page.arrow = Some(Some(SortDirection::Asc));
        }
        surface
    }

    /// Page with only the container and the pager controls
    pub fn bare(items: usize) -> Self {
        let surface = Self::default();
        surface.load(&fragment(items));
        surface
    }

    fn load(&self, html: &str) {
        let mut page = self.0.borrow_mut();
        page.content = html.to_string();
        page.items = (0..html.matches(ITEM_MARKUP).count())
            .map(|_| Rc::new(Cell::new(true)))
            .collect();
    }

    pub fn set_page_size(&self, value: &str) {
        self.0.borrow_mut().page_size = Some(value.to_string());
    }

    pub fn clear_page_size(&self) {
        self.0.borrow_mut().page_size = None;
    }

    pub fn select_sort(&self, value: &str) {
        self.0.borrow_mut().sort_value = Some(value.to_string());
    }

    pub fn set_arrow(&self, direction: Option<SortDirection>) {
        self.0.borrow_mut().arrow = Some(direction);
    }

    pub fn set_search(&self, search: &str) {
        self.0.borrow_mut().search = search.to_string();
    }

    /// Run every handler attached for `action`, like a browser dispatching
    /// the event. Returns how many handlers ran.
    pub fn fire(&self, action: ListAction) -> usize {
        let handlers: Vec<Handler> = self
            .0
            .borrow()
            .handlers
            .iter()
            .filter(|(_, a, _)| *a == action)
            .map(|(_, _, handler)| handler.clone())
            .collect();
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    pub fn handler_count(&self, action: ListAction) -> usize {
        self.0
            .borrow()
            .handlers
            .iter()
            .filter(|(_, a, _)| *a == action)
            .count()
    }

    pub fn total_handlers(&self) -> usize {
        self.0.borrow().handlers.len()
    }

    /// 1-based positions of visible items
    pub fn visible_items(&self) -> Vec<usize> {
        self.0
            .borrow()
            .items
            .iter()
            .enumerate()
            .filter(|(_, visible)| visible.get())
            .map(|(index, _)| index + 1)
            .collect()
    }

    pub fn item_cells(&self) -> Vec<Rc<Cell<bool>>> {
        self.0.borrow().items.clone()
    }

    pub fn indicator(&self) -> String {
        self.0.borrow().indicator.clone()
    }

    pub fn previous_disabled(&self) -> bool {
        self.0.borrow().previous_disabled
    }

    pub fn next_disabled(&self) -> bool {
        self.0.borrow().next_disabled
    }

    pub fn content(&self) -> String {
        self.0.borrow().content.clone()
    }

    pub fn replacements(&self) -> usize {
        self.0.borrow().replacements
    }

    pub fn arrow(&self) -> Option<SortDirection> {
        self.0.borrow().arrow.flatten()
    }

    pub fn current_sort_value(&self) -> Option<String> {
        self.0.borrow().sort_value.clone()
    }
}

impl ListSurface for FakeSurface {
    type Item = FakeItem;
    type Binding = FakeBinding;

    fn query_items(&self) -> Vec<FakeItem> {
        self.0
            .borrow()
            .items
            .iter()
            .map(|cell| FakeItem(cell.clone()))
            .collect()
    }

    fn set_page_indicator(&self, text: &str) {
        self.0.borrow_mut().indicator = text.to_string();
    }

    fn set_previous_disabled(&self, disabled: bool) {
        self.0.borrow_mut().previous_disabled = disabled;
    }

    fn set_next_disabled(&self, disabled: bool) {
        self.0.borrow_mut().next_disabled = disabled;
    }

    fn page_size_value(&self) -> Option<String> {
        self.0.borrow().page_size.clone()
    }

    fn sort_value(&self) -> Option<String> {
        self.0.borrow().sort_value.clone()
    }

    fn set_sort_value(&self, value: &str) {
        let mut page = self.0.borrow_mut();
        if page.sort_value.is_some() {
            page.sort_value = Some(value.to_string());
        }
    }

    fn direction_indicator(&self) -> Option<SortDirection> {
        self.0.borrow().arrow.flatten()
    }

    fn set_direction_indicator(&self, direction: SortDirection) {
        let mut page = self.0.borrow_mut();
        if page.arrow.is_some() {
            page.arrow = Some(Some(direction));
        }
    }

    fn location_search(&self) -> String {
        self.0.borrow().search.clone()
    }

    fn replace_content(&self, html: &str) {
        self.load(html);
        self.0.borrow_mut().replacements += 1;
    }

    fn bind(&self, action: ListAction, handler: Handler) -> Option<FakeBinding> {
        let mut page = self.0.borrow_mut();
        let present = match action {
            ListAction::PreviousPage | ListAction::NextPage => true,
            ListAction::PageSizeChanged => page.page_size.is_some(),
            ListAction::SortChanged => page.sort_value.is_some(),
            ListAction::DirectionToggled => page.has_toggle,
        };
        if !present {
            return None;
        }
        let id = page.next_handler_id;
        page.next_handler_id += 1;
        page.handlers.push((id, action, handler));
        Some(FakeBinding {
            id,
            page: Rc::downgrade(&self.0),
        })
    }
}

/// Answers fetches from a script of responses, in request order
#[derive(Default)]
pub struct ScriptedSource {
    responses: RefCell<VecDeque<Result<String, FetchError>>>,
    requested: RefCell<Vec<String>>,
}

impl ScriptedSource {
    pub fn respond(&self, response: Result<String, FetchError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl FragmentSource for ScriptedSource {
    fn fetch_fragment(&self, url: &str) -> FragmentFuture {
        self.requested.borrow_mut().push(url.to_string());
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("no scripted response".to_string())));
        Box::pin(async move { response })
    }
}

/// Holds spawned tasks until the test runs them
#[derive(Clone, Default)]
pub struct QueuedSpawner(Rc<RefCell<VecDeque<LocalTask>>>);

impl QueuedSpawner {
    pub fn pending(&self) -> usize {
        self.0.borrow().len()
    }

    /// Run queued tasks oldest first
    pub fn run_all(&self) {
        loop {
            let task = self.0.borrow_mut().pop_front();
            let Some(task) = task else { break };
            futures::executor::block_on(task);
        }
    }

    /// Run queued tasks newest first
    pub fn run_all_reversed(&self) {
        loop {
            let task = self.0.borrow_mut().pop_back();
            let Some(task) = task else { break };
            futures::executor::block_on(task);
        }
    }
}

impl TaskSpawner for QueuedSpawner {
    fn spawn(&self, task: LocalTask) {
        self.0.borrow_mut().push_back(task);
    }
}
