use super::paginator::Paginator;
use super::session::ViewSession;
use super::sort_sync::{SelectionMode, SortOutcome, SortRequest, SortSync};
use super::surface::{Handler, ListAction, ListSurface};
use crate::shared::api_utils::{FetchError, FragmentSource};
use crate::shared::config::ListViewConfig;
use crate::shared::task::TaskSpawner;
use contracts::shared::listing::{PageSize, PageState, SortSelection, SortState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type SharedListView<S, F> = Rc<RefCell<ListView<S, F>>>;

/// One paginated, server-sorted list on the page.
///
/// Owns the page and sort state of the list and the event bindings of its
/// controls. Handlers only hold a weak reference back to the view.
pub struct ListView<S: ListSurface, F: FragmentSource> {
    this: Weak<RefCell<ListView<S, F>>>,
    surface: S,
    source: Rc<F>,
    spawner: Rc<dyn TaskSpawner>,
    default_page_size: PageSize,
    paginator: Paginator<S>,
    sort: SortSync,
    session: Option<ViewSession<S::Binding>>,
    generation: u64,
}

impl<S, F> ListView<S, F>
where
    S: ListSurface + 'static,
    F: FragmentSource + 'static,
{
    /// Read the initial state from the page, render page 1 and bind the
    /// controls.
    pub fn mount(
        surface: S,
        source: Rc<F>,
        spawner: Rc<dyn TaskSpawner>,
        config: &ListViewConfig,
    ) -> SharedListView<S, F> {
        let view = Rc::new_cyclic(|this| {
            RefCell::new(ListView {
                this: this.clone(),
                surface,
                source,
                spawner,
                default_page_size: config.default_page_size,
                paginator: Paginator::new(config.default_page_size),
                sort: SortSync::new(
                    config.sort_schema(),
                    config.sort_endpoint.clone(),
                    config.selection_mode,
                    config.stale_responses,
                ),
                session: None,
                generation: 0,
            })
        });
        view.borrow_mut().start();
        view
    }

    fn start(&mut self) {
        let search = self.surface.location_search();
        self.sort.restore(
            self.surface.sort_value().as_deref(),
            self.surface.direction_indicator(),
            &search,
        );
        self.sync_sort_controls();

        let page_size = self.read_page_size(self.default_page_size);
        self.paginator.initialize(&self.surface, page_size);
        self.rebind();
    }

    /// Replace the event bindings with fresh ones on the controls present now.
    fn rebind(&mut self) {
        // The old session detaches its handlers on drop, before the new one
        // attaches, even when a control survived the content swap.
        self.session = None;
        self.generation += 1;
        let this = self.this.clone();
        let session = ViewSession::open(&self.surface, self.generation, |action| {
            let this = this.clone();
            Rc::new(move || dispatch(&this, action)) as Handler
        });
        self.session = Some(session);
    }

    /// React to a user action. Returns the fragment request to send, if any.
    pub fn handle(&mut self, action: ListAction) -> Option<SortRequest> {
        match action {
            ListAction::PreviousPage => {
                self.go_to_previous_page();
                None
            }
            ListAction::NextPage => {
                self.go_to_next_page();
                None
            }
            ListAction::PageSizeChanged => {
                self.change_page_size();
                None
            }
            ListAction::SortChanged => self.sort_changed(),
            ListAction::DirectionToggled => self.toggle_direction(),
        }
    }

    pub fn go_to_previous_page(&mut self) -> bool {
        self.paginator.go_to_previous_page(&self.surface).is_some()
    }

    pub fn go_to_next_page(&mut self) -> bool {
        self.paginator.go_to_next_page(&self.surface).is_some()
    }

    /// Apply the page-size control's current value
    pub fn change_page_size(&mut self) {
        let page_size = self.read_page_size(self.default_page_size);
        self.paginator.set_page_size(&self.surface, page_size);
    }

    /// Page size from the page-size control.
    ///
    /// Without a control the size is `when_missing`; a control holding
    /// anything but a positive integer gives the configured default.
    fn read_page_size(&self, when_missing: PageSize) -> PageSize {
        let Some(raw) = self.surface.page_size_value() else {
            return when_missing;
        };
        raw.parse().unwrap_or_else(|err| {
            log::warn!(
                "Rejected page size: {}; using {}",
                err,
                self.default_page_size
            );
            self.default_page_size
        })
    }

    /// The sort selector changed
    pub fn sort_changed(&mut self) -> Option<SortRequest> {
        let raw = self.surface.sort_value()?;
        match self.sort.select(&raw) {
            Ok(selection) => self.apply_sort(selection),
            Err(err) => {
                log::warn!("Ignoring sort selection: {}", err);
                None
            }
        }
    }

    /// The direction toggle was clicked: flip the arrow and re-sort the
    /// selected field in the new direction.
    pub fn toggle_direction(&mut self) -> Option<SortRequest> {
        let direction = self.sort.toggle_direction();
        self.surface.set_direction_indicator(direction);

        let selected = match self.surface.sort_value() {
            Some(raw) => self.sort.select(&raw),
            None => Ok(self
                .sort
                .current()
                .cloned()
                .map_or(SortSelection::Placeholder, SortSelection::Sort)),
        };
        match selected {
            Ok(SortSelection::Sort(state)) => {
                self.apply_sort(SortSelection::Sort(state.with_direction(direction)))
            }
            Ok(SortSelection::Placeholder) => None,
            Err(err) => {
                log::warn!("Ignoring sort selection: {}", err);
                None
            }
        }
    }

    /// Build the fragment request for `selection`; placeholders are a no-op.
    pub fn apply_sort(&mut self, selection: SortSelection) -> Option<SortRequest> {
        let state = selection.into_state()?;
        let search = self.surface.location_search();
        let request = self.sort.request(state, &search);
        if self.sort.mode() == SelectionMode::Combined {
            self.surface.set_direction_indicator(request.state.direction);
        }
        log::debug!("Sort by {}", request.url);
        Some(request)
    }

    /// Apply the response to request `seq`.
    ///
    /// On success the container content is replaced, the controls are bound
    /// again and the paginator starts over on the new items. Failures leave
    /// the page as it was.
    pub fn complete_sort(&mut self, seq: u64, result: Result<String, FetchError>) -> SortOutcome {
        if !self.sort.accepts(seq) {
            log::debug!(
                "Dropping response to sort request #{} (latest is #{})",
                seq,
                self.sort.issued()
            );
            return SortOutcome::Stale;
        }

        let html = match result {
            Ok(html) => html,
            Err(err) => {
                log::error!("Sort request #{} failed: {}", seq, err);
                return SortOutcome::Failed(err);
            }
        };

        self.surface.replace_content(&html);
        self.rebind();
        self.sync_sort_controls();
        let page_size = self.read_page_size(self.paginator.page_size());
        self.paginator.initialize(&self.surface, page_size);
        SortOutcome::Applied
    }

    /// Mirror the held sort state onto the arrow and the selector, which the
    /// fragment may have re-rendered.
    fn sync_sort_controls(&self) {
        if self.surface.direction_indicator().is_some() || self.sort.current().is_some() {
            self.surface.set_direction_indicator(self.sort.direction());
        }
        if let Some(state) = self.sort.current() {
            self.surface.set_sort_value(&self.sort.selector_value(state));
        }
    }

    pub fn page_state(&self) -> PageState {
        self.paginator.state()
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.current()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Render generation of the current bindings; bumps on every rebind
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_bound(&self, action: ListAction) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.is_bound(action))
    }
}

/// Run the handler for `action` and send the resulting request, if any.
fn dispatch<S, F>(view: &Weak<RefCell<ListView<S, F>>>, action: ListAction)
where
    S: ListSurface + 'static,
    F: FragmentSource + 'static,
{
    let Some(view) = view.upgrade() else { return };
    let request = match view.try_borrow_mut() {
        Ok(mut list) => list.handle(action),
        Err(_) => {
            log::warn!("List view busy, ignoring {:?}", action);
            return;
        }
    };
    if let Some(request) = request {
        send(&view, request);
    }
}

/// Programmatic sort: the same path the sort controls take.
pub fn request_sort<S, F>(view: &SharedListView<S, F>, selection: SortSelection)
where
    S: ListSurface + 'static,
    F: FragmentSource + 'static,
{
    let request = match view.try_borrow_mut() {
        Ok(mut list) => list.apply_sort(selection),
        Err(_) => {
            log::warn!("List view busy, ignoring sort request");
            return;
        }
    };
    if let Some(request) = request {
        send(view, request);
    }
}

fn send<S, F>(view: &SharedListView<S, F>, request: SortRequest)
where
    S: ListSurface + 'static,
    F: FragmentSource + 'static,
{
    let (fetch, spawner) = {
        let list = view.borrow();
        (list.source.fetch_fragment(&request.url), list.spawner.clone())
    };
    let weak = Rc::downgrade(view);
    spawner.spawn(Box::pin(async move {
        let result = fetch.await;
        let Some(view) = weak.upgrade() else { return };
        let Ok(mut list) = view.try_borrow_mut() else {
            log::warn!("List view busy, dropping response to #{}", request.seq);
            return;
        };
        list.complete_sort(request.seq, result);
    }));
}
