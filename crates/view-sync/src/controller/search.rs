//! Search mode

use super::ViewSync;
use crate::surface::{SearchView, Surface, ViewMode};
use crate::transport::Transport;

impl<T: Transport, S: Surface> ViewSync<T, S> {
    /// Switch to search mode and render results for `raw_query`.
    ///
    /// A blank query does nothing. If a newer search or a close happens
    /// before the response arrives, the response is dropped.
    pub async fn search(&self, raw_query: &str) {
        let query = raw_query.trim();
        if query.is_empty() {
            return;
        }
        let generation = self.next_search_generation();

        self.surface.set_view_mode(ViewMode::Search);
        self.surface.render_search(SearchView::Pending);
        self.surface.set_search_loading(true);

        let result = self.api.search(query).await;
        if self.search_generation.get() != generation {
            log::debug!("Dropping superseded results for {:?}", query);
            return;
        }
        self.surface.set_search_loading(false);

        match result {
            Ok(items) if items.is_empty() => self.surface.render_search(SearchView::NoResults),
            Ok(items) => {
                let cards = items.iter().map(|item| self.card(item)).collect();
                self.surface.render_search(SearchView::Results(cards));
            }
            Err(e) => log::error!("Search failed: {}", e),
        }
    }

    /// Leave search mode and clear the input
    pub fn close_search(&self) {
        self.next_search_generation();
        self.surface.set_search_loading(false);
        self.surface.set_view_mode(ViewMode::Menu);
        self.surface.clear_search_input();
    }

    fn next_search_generation(&self) -> u64 {
        let next = self.search_generation.get().wrapping_add(1);
        self.search_generation.set(next);
        next
    }
}
