//! Food list
//!
//! An immutable, shared list of foods. Every change produces a new list; entries
//! that are not touched keep pointing at the same allocation.

use crate::models::Food;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct FoodList(Arc<Vec<Arc<Food>>>);

impl FoodList {
    pub fn new(foods: Vec<Food>) -> Self {
        Self(Arc::new(foods.into_iter().map(Arc::new).collect()))
    }

    /// A new list with `food` at the end.
    pub fn appended(&self, food: Food) -> Self {
        let mut foods = Vec::with_capacity(self.0.len() + 1);
        foods.extend(self.0.iter().cloned());
        foods.push(Arc::new(food));
        Self(Arc::new(foods))
    }

    /// A new list where every entry with `food.id` is replaced by `food`.
    pub fn replaced(&self, food: Food) -> Self {
        let food = Arc::new(food);
        let foods = self
            .0
            .iter()
            .map(|entry| {
                if entry.id == food.id {
                    Arc::clone(&food)
                } else {
                    Arc::clone(entry)
                }
            })
            .collect();
        Self(Arc::new(foods))
    }

    /// A new list without any entry whose id is `id`.
    pub fn without(&self, id: u64) -> Self {
        let foods = self
            .0
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        Self(Arc::new(foods))
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Food>> {
        self.0.get(index)
    }

    pub fn find(&self, id: u64) -> Option<&Arc<Food>> {
        self.0.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Food>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether both handles point at the same list value.
    pub fn ptr_eq(&self, other: &FoodList) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for FoodList {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.len() == other.len()
                && self.iter().zip(other.iter()).all(|(a, b)| a == b))
    }
}

impl PartialEq<Vec<Food>> for FoodList {
    fn eq(&self, other: &Vec<Food>) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| **a == *b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: u64, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            price: 10.0,
            available: true,
            image: format!("https://example.com/{}.png", id),
        }
    }

    #[test]
    fn test_appended_keeps_original_and_entries() {
        let list = FoodList::new(vec![food(1, "A")]);
        let next = list.appended(food(2, "B"));

        assert_eq!(list.len(), 1);
        assert_eq!(next, vec![food(1, "A"), food(2, "B")]);
        assert!(!next.ptr_eq(&list));
        assert!(Arc::ptr_eq(list.get(0).unwrap(), next.get(0).unwrap()));
    }

    #[test]
    fn test_replaced_swaps_only_matching_entry() {
        let list = FoodList::new(vec![food(1, "A"), food(2, "B")]);
        let next = list.replaced(food(2, "C"));

        assert_eq!(next, vec![food(1, "A"), food(2, "C")]);
        assert!(Arc::ptr_eq(list.get(0).unwrap(), next.get(0).unwrap()));
        assert!(!Arc::ptr_eq(list.get(1).unwrap(), next.get(1).unwrap()));
        assert_eq!(list.get(1).unwrap().name, "B");
    }

    #[test]
    fn test_replaced_unknown_id_changes_nothing_but_reference() {
        let list = FoodList::new(vec![food(1, "A")]);
        let next = list.replaced(food(9, "Z"));

        assert_eq!(next, list);
        assert!(!next.ptr_eq(&list));
    }

    #[test]
    fn test_without_filters_and_is_noop_for_missing_id() {
        let list = FoodList::new(vec![food(1, "A"), food(2, "B")]);

        let next = list.without(1);
        assert_eq!(next, vec![food(2, "B")]);

        let same = next.without(42);
        assert_eq!(same, next);
        assert!(!same.ptr_eq(&next));
    }

    #[test]
    fn test_find_by_id() {
        let list = FoodList::new(vec![food(1, "A"), food(2, "B")]);
        assert_eq!(list.find(2).map(|f| f.name.as_str()), Some("B"));
        assert!(list.find(3).is_none());
        assert!(FoodList::default().is_empty());
    }
}
