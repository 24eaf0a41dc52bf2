//! # Menu Catalog
//!
//! Static, process-wide restaurant menus keyed by restaurant key. Item ids are
//! unique within a menu and prices are whole cents.
//!
//! `asian-fusion` is a legacy key kept so that old practice links still resolve; it
//! carries the Chinese Kitchen menu and cannot be used for new assignments.

mod catalog;
pub mod money;

pub use money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Money,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RestaurantMenu {
    pub key: &'static str,
    pub name: &'static str,
    pub items: &'static [MenuItem],
    /// Whether teachers may bind an assignment slot to this menu.
    pub assignable: bool,
}

impl RestaurantMenu {
    pub fn item(&self, id: &str) -> Option<&'static MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Any known menu, including legacy keys.
pub fn restaurant(key: &str) -> Option<&'static RestaurantMenu> {
    catalog::all().iter().find(|menu| menu.key == key)
}

/// A menu that may back a new assignment.
pub fn assignable(key: &str) -> Option<&'static RestaurantMenu> {
    restaurant(key).filter(|menu| menu.assignable)
}

/// Menus offered when creating an assignment, in catalog order.
pub fn assignable_restaurants() -> impl Iterator<Item = &'static RestaurantMenu> {
    catalog::all().iter().filter(|menu| menu.assignable)
}
