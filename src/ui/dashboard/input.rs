//! Dashboard key handling
//!
//! Turns key presses into store intents. Plain navigation stays local.

use super::form::FoodForm;
use super::state::DashboardState;
use crate::store::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    None,
    Quit,
    /// Intents to send to the store, in order.
    Dispatch(Vec<Intent>),
}

/// What a key press did to a dialog form.
enum FormInput {
    Edited,
    Submit,
    Close,
}

fn form_input(form: &mut FoodForm, key: KeyEvent) -> FormInput {
    match key.code {
        KeyCode::Esc => FormInput::Close,
        KeyCode::Enter => FormInput::Submit,
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            FormInput::Edited
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            FormInput::Edited
        }
        KeyCode::Backspace => {
            form.pop_char();
            FormInput::Edited
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.push_char(c);
            FormInput::Edited
        }
        _ => FormInput::Edited,
    }
}

impl DashboardState {
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if self.snapshot.add_modal.is_open() {
            return match form_input(&mut self.add_form, key) {
                FormInput::Close => KeyAction::Dispatch(vec![Intent::ToggleAddModal]),
                FormInput::Submit => match self.add_form.to_draft() {
                    Ok(draft) => {
                        KeyAction::Dispatch(vec![Intent::Create(draft), Intent::ToggleAddModal])
                    }
                    Err(reason) => {
                        self.add_form.error = Some(reason);
                        KeyAction::None
                    }
                },
                FormInput::Edited => KeyAction::None,
            };
        }

        if self.snapshot.edit_modal.is_open() {
            return match form_input(&mut self.edit_form, key) {
                FormInput::Close => KeyAction::Dispatch(vec![Intent::ToggleEditModal]),
                FormInput::Submit => match self.edit_form.to_edit() {
                    Ok(edit) => {
                        KeyAction::Dispatch(vec![Intent::Update(edit), Intent::ToggleEditModal])
                    }
                    Err(reason) => {
                        self.edit_form.error = Some(reason);
                        KeyAction::None
                    }
                },
                FormInput::Edited => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char('a') => KeyAction::Dispatch(vec![Intent::ToggleAddModal]),
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                KeyAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                KeyAction::None
            }
            KeyCode::Char('e') => match self.selected_food() {
                Some(food) => KeyAction::Dispatch(vec![Intent::BeginEdit(Arc::clone(food))]),
                None => KeyAction::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_food() {
                Some(food) => KeyAction::Dispatch(vec![Intent::Delete(food.id)]),
                None => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}
