//! Wire Models
//!
//! Client-side projections of server responses. None of these outlive the
//! render they were fetched for.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

// ========================
// Menu
// ========================

/// Menu category, one grid per variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Veg,
    NonVeg,
    Dessert,
    IceCream,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Veg,
        Category::NonVeg,
        Category::Dessert,
        Category::IceCream,
    ];

    /// Wire key, also used as the section identifier
    pub fn key(self) -> &'static str {
        match self {
            Category::Veg => "veg",
            Category::NonVeg => "nonveg",
            Category::Dessert => "dessert",
            Category::IceCream => "icecream",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Veg => "Veg",
            Category::NonVeg => "Non-Veg",
            Category::Dessert => "Desserts",
            Category::IceCream => "Ice Creams",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Menu item as served by the menu listing and the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "de_amount")]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    /// Raw category key; search results usually omit it
    #[serde(default)]
    pub category: Option<String>,
}

impl MenuItem {
    pub fn category(&self) -> Option<Category> {
        self.category.as_deref().and_then(Category::from_key)
    }
}

// ========================
// Cart
// ========================

/// Cart mapping key (the item id as the server stringifies it)
///
/// Orders like a browser iterates object keys: canonical integer keys
/// ascending first, everything else lexically after them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn index(&self) -> Option<u32> {
        let s = self.0.as_str();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if s.len() > 1 && s.starts_with('0') {
            return None;
        }
        // 2^32 - 1 is not an array index
        s.parse().ok().filter(|i| *i < u32::MAX)
    }
}

impl Ord for ItemKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.index(), other.index()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ItemKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub qty: i64,
    #[serde(deserialize_with = "de_amount")]
    pub price: f64,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.qty as f64 * self.price
    }
}

/// Full server-side cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(BTreeMap<ItemKey, CartLine>);

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = (&ItemKey, &CartLine)> {
        self.0.iter()
    }

    /// Per-line subtotals and the running total. Quantities are taken as-is.
    pub fn summarize(&self) -> CartSummary {
        let lines: Vec<CartSummaryLine> = self
            .0
            .iter()
            .map(|(key, line)| CartSummaryLine {
                key: key.clone(),
                qty: line.qty,
                unit_price: line.price,
                subtotal: line.subtotal(),
            })
            .collect();
        let total = lines.iter().map(|l| l.subtotal).sum();
        CartSummary { lines, total }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartSummaryLine {
    pub key: ItemKey,
    pub qty: i64,
    pub unit_price: f64,
    pub subtotal: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartSummaryLine>,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CartCount {
    /// Sum of quantities; negative when the cart holds negative lines
    #[serde(default)]
    pub count: i64,
}

/// What the server made of an add-to-cart request
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added,
    LoginRequired,
    Rejected(Option<String>),
}

// ========================
// Request / Reply Bodies
// ========================

#[derive(Serialize)]
pub(crate) struct AddToCartArgs {
    pub item_id: u32,
    pub price: f64,
}

#[derive(Serialize)]
pub(crate) struct ConfirmArgs {
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddReply {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `{status, message?}` reply used by register and booking
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusReply {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusReply {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DescriptionReply {
    #[serde(default)]
    pub description: String,
}

/// Accepts a JSON number or a numeric string (SQL decimals arrive as text)
fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys() {
        assert_eq!(Category::from_key("veg"), Some(Category::Veg));
        assert_eq!(Category::from_key("icecream"), Some(Category::IceCream));
        assert_eq!(Category::from_key("Veg"), None);
        assert_eq!(Category::from_key("drinks"), None);
    }

    #[test]
    fn test_menu_item_price_as_string() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":3,"name":"Paneer Tikka","description":null,"price":"249.50","image":"paneer.jpg","category":"veg"}"#,
        )
        .unwrap();
        assert_eq!(item.price, 249.5);
        assert_eq!(item.description, None);
        assert_eq!(item.category(), Some(Category::Veg));
    }

    #[test]
    fn test_search_result_without_category() {
        let item: MenuItem =
            serde_json::from_str(r#"{"id":1,"name":"Kulfi","price":120,"image":"kulfi.png"}"#)
                .unwrap();
        assert_eq!(item.category, None);
        assert_eq!(item.category(), None);
    }

    #[test]
    fn test_bad_price_rejected() {
        let result: Result<MenuItem, _> =
            serde_json::from_str(r#"{"id":1,"name":"X","price":"cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_cart_iterates_like_browser_keys() {
        let cart: Cart = serde_json::from_str(
            r#"{"10":{"qty":1,"price":10},"2":{"qty":1,"price":2},"b":{"qty":1,"price":1},"01":{"qty":1,"price":1}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = cart.lines().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["2", "10", "01", "b"]);
    }

    #[test]
    fn test_max_u32_key_sorts_as_text() {
        let cart: Cart = serde_json::from_str(
            r#"{"4294967295":{"qty":1,"price":1},"10":{"qty":1,"price":1},"01":{"qty":1,"price":1},"4294967294":{"qty":1,"price":1}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = cart.lines().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["10", "4294967294", "01", "4294967295"]);
    }

    #[test]
    fn test_negative_count_decodes() {
        let count: CartCount = serde_json::from_str(r#"{"count":-1}"#).unwrap();
        assert_eq!(count.count, -1);
    }

    #[test]
    fn test_summary_totals() {
        let cart: Cart = serde_json::from_str(
            r#"{"1":{"qty":2,"price":150.0},"4":{"qty":3,"price":"40"}}"#,
        )
        .unwrap();
        let summary = cart.summarize();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].subtotal, 300.0);
        assert_eq!(summary.lines[1].subtotal, 120.0);
        assert_eq!(summary.total, 420.0);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let summary = Cart::default().summarize();
        assert!(summary.lines.is_empty());
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn test_negative_quantity_trusted() {
        let cart: Cart = serde_json::from_str(r#"{"7":{"qty":-1,"price":50}}"#).unwrap();
        assert_eq!(cart.summarize().total, -50.0);
    }
}
