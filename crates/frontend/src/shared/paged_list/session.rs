use super::surface::{Handler, ListAction, ListSurface};

/// Every event binding of one render generation.
///
/// Dropping the session detaches all of its handlers. A list view replaces
/// its session wholesale after each content swap instead of patching it, so
/// no control ever carries more than one handler per action.
pub struct ViewSession<B> {
    generation: u64,
    bindings: Vec<(ListAction, B)>,
}

impl<B> ViewSession<B> {
    /// Bind every action whose control is present on the page right now.
    pub fn open<S>(
        surface: &S,
        generation: u64,
        mut handler_for: impl FnMut(ListAction) -> Handler,
    ) -> Self
    where
        S: ListSurface<Binding = B>,
    {
        let bindings = ListAction::ALL
            .into_iter()
            .filter_map(|action| {
                surface
                    .bind(action, handler_for(action))
                    .map(|binding| (action, binding))
            })
            .collect();
        Self {
            generation,
            bindings,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_bound(&self, action: ListAction) -> bool {
        self.bindings.iter().any(|(bound, _)| *bound == action)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
