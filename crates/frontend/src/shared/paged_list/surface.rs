use contracts::shared::listing::SortDirection;
use std::rc::Rc;

/// Event handler attached to a control
pub type Handler = Rc<dyn Fn()>;

/// Logical user actions a list view reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListAction {
    PreviousPage,
    NextPage,
    PageSizeChanged,
    SortChanged,
    DirectionToggled,
}

impl ListAction {
    pub const ALL: [ListAction; 5] = [
        ListAction::PreviousPage,
        ListAction::NextPage,
        ListAction::PageSizeChanged,
        ListAction::SortChanged,
        ListAction::DirectionToggled,
    ];
}

/// One rendered item of the list
pub trait ItemNode {
    fn set_visible(&self, visible: bool);
}

/// The part of the page a list view reads and writes.
///
/// Every accessor looks its element up again, so nothing handed out before a
/// content replacement is reused after it.
pub trait ListSurface {
    type Item: ItemNode;
    /// Detaches its handler when dropped
    type Binding;

    /// Items currently inside the container, in document order
    fn query_items(&self) -> Vec<Self::Item>;

    fn set_page_indicator(&self, text: &str);
    fn set_previous_disabled(&self, disabled: bool);
    fn set_next_disabled(&self, disabled: bool);

    /// Raw value of the page-size control, if the page has one
    fn page_size_value(&self) -> Option<String>;

    /// Raw value of the sort selector, if the page has one
    fn sort_value(&self) -> Option<String>;
    fn set_sort_value(&self, value: &str);

    /// Direction shown by the arrow, if the arrow exists and shows one
    fn direction_indicator(&self) -> Option<SortDirection>;
    fn set_direction_indicator(&self, direction: SortDirection);

    /// Query string of the current page, with or without the leading `?`
    fn location_search(&self) -> String;

    /// Replace the inner content of the list container
    fn replace_content(&self, html: &str);

    /// Attach `handler` to the control behind `action`. `None` when the page
    /// has no such control.
    fn bind(&self, action: ListAction, handler: Handler) -> Option<Self::Binding>;
}
