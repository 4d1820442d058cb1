//! Card View Model
//!
//! One rendered menu or search item. Fields hold raw text: the frontend
//! renders them as text nodes and attribute values, never as markup.

use crate::config::ClientConfig;
use crate::model::MenuItem;
use crate::transport::encode_component;

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub item_id: u32,
    /// Unit price sent back with add-to-cart
    pub price: f64,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub image_url: String,
    pub image_alt: String,
}

impl Card {
    pub fn from_item(item: &MenuItem, config: &ClientConfig) -> Self {
        let description = item
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&config.fallback_description)
            .to_string();
        let image_url = format!(
            "{}{}",
            config.image_base,
            encode_component(item.image.as_deref().unwrap_or_default())
        );

        Self {
            item_id: item.id,
            price: item.price,
            title: item.name.clone(),
            description,
            price_label: price_label(item.price),
            image_url,
            image_alt: item.name.clone(),
        }
    }
}

/// `₹` followed by the amount
pub fn price_label(amount: f64) -> String {
    format!("₹{}", format_amount(amount))
}

/// Shortest decimal that reads back as `amount`; whole amounts print
/// without a fraction
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        // covers -0
        return "0".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: Option<&str>, image: Option<&str>) -> MenuItem {
        MenuItem {
            id: 9,
            name: "<b>Dal</b> & Rice".to_string(),
            description: description.map(str::to_string),
            price: 180.0,
            image: image.map(str::to_string),
            category: Some("veg".to_string()),
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(250.0), "250");
        assert_eq!(format_amount(99.5), "99.5");
        assert_eq!(format_amount(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(-50.0), "-50");
        assert_eq!(price_label(12.25), "₹12.25");
    }

    #[test]
    fn test_format_amount_keeps_precision() {
        assert_eq!(format_amount(12.345), "12.345");
        assert_eq!(format_amount(0.004), "0.004");
        assert_eq!(format_amount(19.999), "19.999");
        assert_eq!(format_amount(3.0 * 33.33), "99.99");
    }

    #[test]
    fn test_card_keeps_raw_text() {
        let card = Card::from_item(&item(Some("Comfort <i>food</i>"), Some("dal.jpg")), &ClientConfig::default());
        assert_eq!(card.title, "<b>Dal</b> & Rice");
        assert_eq!(card.description, "Comfort <i>food</i>");
        assert_eq!(card.price_label, "₹180");
        assert_eq!(card.image_url, "/static/images/dal.jpg");
    }

    #[test]
    fn test_card_fallback_description() {
        let config = ClientConfig::default();
        assert_eq!(Card::from_item(&item(None, None), &config).description, config.fallback_description);
        assert_eq!(Card::from_item(&item(Some("  "), None), &config).description, config.fallback_description);
    }

    #[test]
    fn test_image_filename_cannot_escape_path() {
        let card = Card::from_item(&item(None, Some("../x\" onerror=\"y.png")), &ClientConfig::default());
        assert_eq!(card.image_url, "/static/images/..%2Fx%22%20onerror%3D%22y.png");
    }
}
