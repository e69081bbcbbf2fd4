use crossterm::event::KeyCode;

use crate::app::{AppState, EventForm, Mode, ViewType};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') | KeyCode::Left => state.previous_period(),
        KeyCode::Char('l') | KeyCode::Right => state.next_period(),
        KeyCode::Char('j') | KeyCode::Down => state.move_event_selection_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_event_selection_up(),
        KeyCode::Char('t') => state.jump_to_today(),
        KeyCode::Char('m') => state.set_view(ViewType::Month),
        KeyCode::Char('w') => state.set_view(ViewType::Week),
        KeyCode::Char('d') => state.set_view(ViewType::Day),
        KeyCode::Char('a') => open_new_event_form(state),
        KeyCode::Char('e') => open_edit_form(state),
        KeyCode::Char('x') => request_delete(state),
        KeyCode::Enter => drill_into_day(state),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => state.show_help = true,
        _ => {}
    }
}

fn open_new_event_form(state: &mut AppState) {
    state.event_form = Some(EventForm::new(state.reference_date, String::new()));
    state.mode = Mode::Insert;
}

fn open_edit_form(state: &mut AppState) {
    if let Some(event) = state.selected_event() {
        state.event_form = Some(EventForm::for_event(event));
        state.mode = Mode::Insert;
    }
}

fn request_delete(state: &mut AppState) {
    if let Some(event) = state.selected_event() {
        state.delete_confirmation_event_id = Some(event.id.clone());
    }
}

fn drill_into_day(state: &mut AppState) {
    match state.view {
        ViewType::Month | ViewType::Week => state.set_view(ViewType::Day),
        ViewType::Day => open_edit_form(state),
    }
}

fn enter_command_mode(state: &mut AppState) {
    state.command_buffer = ":".to_string();
    state.status_message = None;
    state.mode = Mode::Command;
}
