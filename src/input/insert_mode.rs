use crossterm::event::KeyCode;

use crate::app::{AppState, FormField};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    let Some(form) = state.event_form.as_mut() else {
        return;
    };

    match key {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Backspace => {
            match form.active_field {
                FormField::Title => {
                    form.title.pop();
                }
                FormField::Date => {
                    form.date_buffer.pop();
                }
                FormField::StartTime => {
                    form.time_buffer.pop();
                }
                FormField::Duration => {
                    form.duration_buffer.pop();
                }
                FormField::Location => {
                    form.location.pop();
                }
                FormField::Notes => {
                    form.notes.pop();
                }
            }
            form.error = None;
        }
        KeyCode::Char(c) => {
            match form.active_field {
                FormField::Title => form.title.push(c),
                FormField::Date => {
                    if (c.is_ascii_digit() || c == '-') && form.date_buffer.len() < 10 {
                        form.date_buffer.push(c);
                    }
                }
                FormField::StartTime => {
                    if (c.is_ascii_digit() || c == ':') && form.time_buffer.len() < 5 {
                        form.time_buffer.push(c);
                    }
                }
                FormField::Duration => {
                    if c.is_ascii_digit() && form.duration_buffer.len() < 4 {
                        form.duration_buffer.push(c);
                    }
                }
                FormField::Location => form.location.push(c),
                FormField::Notes => form.notes.push(c),
            }
            form.error = None;
        }
        _ => {}
    }
}
