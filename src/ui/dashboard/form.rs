//! Food form
//!
//! Text fields backing the create and edit dialogs.

use crate::models::{Food, FoodDraft, FoodEdit};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Price,
    Image,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Description,
        FormField::Price,
        FormField::Image,
    ];

    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Price,
            FormField::Price => FormField::Image,
            FormField::Image => FormField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Image,
            FormField::Description => FormField::Name,
            FormField::Price => FormField::Description,
            FormField::Image => FormField::Price,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub focus: FormField,
    /// Shown under the fields when the last submit was refused.
    pub error: Option<String>,
}

impl FoodForm {
    /// Form prefilled with `food`'s editable fields.
    pub fn from_food(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price.to_string(),
            image: food.image.clone(),
            ..Self::default()
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Price => &self.price,
            FormField::Image => &self.image,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::Price => &mut self.price,
            FormField::Image => &mut self.image,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focus;
        self.value_mut(field).push(c);
        self.error = None;
    }

    pub fn pop_char(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
        self.error = None;
    }

    fn parse_price(&self) -> Result<f64, String> {
        self.price
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or_else(|| format!("Price \"{}\" is not a number", self.price.trim()))
    }

    /// The draft this form describes, or the reason it cannot be built.
    pub fn to_draft(&self) -> Result<FoodDraft, String> {
        Ok(FoodDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.parse_price()?,
            image: self.image.trim().to_string(),
        })
    }

    /// The edit this form describes. Every field is submitted, as the dialog shows them all.
    pub fn to_edit(&self) -> Result<FoodEdit, String> {
        let draft = self.to_draft()?;
        Ok(FoodEdit::default()
            .with_name(draft.name)
            .with_description(draft.description)
            .with_price(draft.price)
            .with_image(draft.image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(form: &mut FoodForm, text: &str) {
        for c in text.chars() {
            form.push_char(c);
        }
    }

    #[test]
    fn test_typing_fills_focused_fields() {
        let mut form = FoodForm::default();
        typed(&mut form, "Veggie");
        form.focus_next();
        typed(&mut form, "Salad");
        form.focus_next();
        typed(&mut form, "21,90");
        form.focus_next();
        typed(&mut form, "https://example.com/v.png");

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.name, "Veggie");
        assert_eq!(draft.description, "Salad");
        assert_eq!(draft.price, 21.9);
        assert_eq!(draft.image, "https://example.com/v.png");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = FoodForm::default();
        form.focus_prev();
        assert_eq!(form.focus, FormField::Image);
        form.focus_next();
        assert_eq!(form.focus, FormField::Name);
        for _ in FormField::ALL {
            form.focus_next();
        }
        assert_eq!(form.focus, FormField::Name);
    }

    #[test]
    fn test_bad_price_is_refused() {
        let mut form = FoodForm::default();
        form.focus = FormField::Price;
        typed(&mut form, "cheap");
        assert!(form.to_draft().is_err());
        assert!(form.to_edit().is_err());

        form.pop_char();
        assert_eq!(form.price, "chea");
    }

    #[test]
    fn test_edit_form_round_trips_food() {
        let food = Food {
            id: 3,
            name: "A la Camarón".to_string(),
            description: "Macarrão com vegetais".to_string(),
            price: 19.9,
            available: true,
            image: "https://example.com/a.png".to_string(),
        };
        let form = FoodForm::from_food(&food);
        let edit = form.to_edit().unwrap();
        assert_eq!(food.merged(&edit), food);
    }
}
