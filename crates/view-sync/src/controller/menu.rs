//! Menu loading

use std::collections::BTreeMap;

use super::ViewSync;
use crate::card::Card;
use crate::model::Category;
use crate::surface::Surface;
use crate::transport::Transport;

impl<T: Transport, S: Surface> ViewSync<T, S> {
    /// Fetch the menu and rebuild all four category grids
    pub async fn load_menu(&self) {
        let items = match self.api.menu().await {
            Ok(items) => items,
            Err(e) => {
                log::error!("Menu load failed: {}", e);
                return;
            }
        };

        let mut grids: BTreeMap<Category, Vec<Card>> =
            Category::ALL.into_iter().map(|c| (c, Vec::new())).collect();
        let mut dropped = 0usize;
        for item in &items {
            match item.category().and_then(|c| grids.get_mut(&c)) {
                Some(grid) => grid.push(self.card(item)),
                None => dropped += 1,
            }
        }

        for (category, cards) in grids {
            self.surface.replace_grid(category, cards);
        }
        log::debug!("Menu rendered: {} items, {} without a known category", items.len(), dropped);
    }

    /// Ask the server for a short description of a dish (admin menu form)
    pub async fn suggest_description(&self, food_name: &str) {
        let name = food_name.trim();
        if name.is_empty() {
            return;
        }
        match self.api.ai_description(name).await {
            Ok(description) => self.surface.set_description_suggestion(&description),
            Err(e) => log::error!("Description lookup failed: {}", e),
        }
    }
}
