//! Menu Store
//!
//! Owns every dish and the active filter. Dishes are kept newest first and
//! are never edited or removed.

use shared::models::{Dish, DishCreate, MenuFilter};
use shared::util::IdGenerator;

#[derive(Debug, Default)]
pub struct MenuStore {
    /// Newest first
    dishes: Vec<Dish>,
    filter: MenuFilter,
    ids: IdGenerator,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an id and put the dish at the front of the list.
    ///
    /// The payload is already validated by the form.
    pub fn add_dish(&mut self, payload: DishCreate) -> &Dish {
        let dish = Dish::new(self.ids.next_id(), payload);
        tracing::info!(
            dish_id = dish.id,
            name = %dish.name,
            category = %dish.category,
            price = %dish.price,
            "Dish added"
        );
        self.dishes.insert(0, dish);
        &self.dishes[0]
    }

    /// Replace the active filter
    pub fn set_filter(&mut self, filter: MenuFilter) {
        if self.filter != filter {
            tracing::debug!(from = %self.filter, to = %filter, "Filter changed");
        }
        self.filter = filter;
    }

    pub fn filter(&self) -> MenuFilter {
        self.filter
    }

    /// Dishes passing the active filter, newest first
    pub fn filtered_dishes(&self) -> impl Iterator<Item = &Dish> + '_ {
        let filter = self.filter;
        self.dishes
            .iter()
            .filter(move |dish| filter.matches(dish.category))
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_dishes().count()
    }

    /// All dishes, newest first
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    // ==================== Display text ====================

    /// Header title, counts every dish regardless of filter
    pub fn header_title(&self) -> String {
        format!("Menu ({})", self.len())
    }

    pub fn summary_line(&self) -> String {
        format!("Showing: {} ({} items)", self.filter, self.filtered_count())
    }

    /// Shown when no dish passes the filter
    pub fn empty_state_message(&self) -> String {
        format!("No dishes found in the {} category.", self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::{DishCategory, Price};
    use std::collections::HashSet;

    fn payload(name: &str, category: DishCategory) -> DishCreate {
        DishCreate {
            name: name.to_string(),
            description: String::new(),
            category,
            price: Price::from_decimal(Decimal::new(1000, 2)),
        }
    }

    fn names<'a>(dishes: impl Iterator<Item = &'a Dish>) -> Vec<&'a str> {
        dishes.map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = MenuStore::new();
        assert!(store.is_empty());
        assert_eq!(store.filter(), MenuFilter::All);
        assert_eq!(store.filtered_count(), 0);
        assert_eq!(store.header_title(), "Menu (0)");
    }

    #[test]
    fn test_add_dish_prepends() {
        let mut store = MenuStore::new();
        store.add_dish(payload("Soup", DishCategory::Starters));
        store.add_dish(payload("Steak", DishCategory::MainCourse));
        let added = store.add_dish(payload("Malva", DishCategory::Desserts));
        assert_eq!(added.name, "Malva");

        assert_eq!(names(store.filtered_dishes()), ["Malva", "Steak", "Soup"]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.header_title(), "Menu (3)");
    }

    #[test]
    fn test_filter_keeps_newest_first() {
        let mut store = MenuStore::new();
        store.add_dish(payload("Soup", DishCategory::Starters));
        store.add_dish(payload("Steak", DishCategory::MainCourse));
        store.add_dish(payload("Samoosas", DishCategory::Starters));

        store.set_filter(DishCategory::Starters.into());
        assert_eq!(names(store.filtered_dishes()), ["Samoosas", "Soup"]);
        assert_eq!(store.summary_line(), "Showing: Starters (2 items)");

        store.set_filter(MenuFilter::Only(DishCategory::MainCourse));
        assert_eq!(names(store.filtered_dishes()), ["Steak"]);

        store.set_filter(MenuFilter::All);
        assert_eq!(store.filtered_count(), 3);
    }

    #[test]
    fn test_empty_category_message() {
        let mut store = MenuStore::new();
        store.add_dish(payload("Soup", DishCategory::Starters));
        store.set_filter(MenuFilter::Only(DishCategory::Desserts));

        assert_eq!(store.filtered_count(), 0);
        assert!(store.empty_state_message().contains("Desserts"));
        assert_eq!(
            store.empty_state_message(),
            "No dishes found in the Desserts category."
        );
        // Filtering never drops records
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_filter_survives_new_dishes() {
        let mut store = MenuStore::new();
        store.set_filter(MenuFilter::Only(DishCategory::Desserts));
        store.add_dish(payload("Soup", DishCategory::Starters));
        assert_eq!(store.filter(), MenuFilter::Only(DishCategory::Desserts));
        store.add_dish(payload("Koeksister", DishCategory::Desserts));
        assert_eq!(names(store.filtered_dishes()), ["Koeksister"]);
    }

    #[test]
    fn test_ids_unique_across_many_adds() {
        let mut store = MenuStore::new();
        for i in 0..1000 {
            store.add_dish(payload(&format!("Dish {}", i), DishCategory::MainCourse));
        }
        let ids: HashSet<i64> = store.dishes().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), 1000);
        assert_eq!(store.dishes()[0].name, "Dish 999");
    }
}
