use super::surface::{ItemNode, ListSurface};
use contracts::shared::listing::{PageSize, PageState, PageView};

/// Shows one page of the items currently rendered in the list container.
///
/// Item handles are only valid until the container content is replaced;
/// call [`Paginator::initialize`] after every replacement.
pub struct Paginator<S: ListSurface> {
    items: Vec<S::Item>,
    state: PageState,
}

impl<S: ListSurface> Paginator<S> {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            items: Vec::new(),
            state: PageState::new(page_size),
        }
    }

    /// Query the items afresh, go to page 1 and render.
    pub fn initialize(&mut self, surface: &S, page_size: PageSize) -> PageView {
        self.items = surface.query_items();
        self.state = PageState::new(page_size);
        self.render(surface)
    }

    pub fn render(&self, surface: &S) -> PageView {
        let view = self.state.view(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            item.set_visible(view.is_visible(index));
        }
        surface.set_page_indicator(&view.indicator);
        surface.set_previous_disabled(view.previous_disabled);
        surface.set_next_disabled(view.next_disabled);
        view
    }

    /// `None` when already on the first page
    pub fn go_to_previous_page(&mut self, surface: &S) -> Option<PageView> {
        self.state.previous().then(|| self.render(surface))
    }

    /// `None` when already on the last page
    pub fn go_to_next_page(&mut self, surface: &S) -> Option<PageView> {
        let count = self.items.len();
        self.state.next(count).then(|| self.render(surface))
    }

    pub fn set_page_size(&mut self, surface: &S, page_size: PageSize) -> PageView {
        self.state.set_page_size(page_size);
        self.render(surface)
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn page_size(&self) -> PageSize {
        self.state.page_size()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
