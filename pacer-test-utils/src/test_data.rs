// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Trigger payloads modelled on the UI events these wrappers usually guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    Keystroke { text: String },
    Resize { width: u32, height: u32 },
    Click { x: i32, y: i32 },
}

pub fn keystroke(text: &str) -> TriggerEvent {
    TriggerEvent::Keystroke {
        text: text.to_string(),
    }
}

pub fn resize(width: u32, height: u32) -> TriggerEvent {
    TriggerEvent::Resize { width, height }
}

pub fn click(x: i32, y: i32) -> TriggerEvent {
    TriggerEvent::Click { x, y }
}

/// Keystrokes typing `text` one character at a time: "r", "ru", "rus", ...
pub fn typing(text: &str) -> Vec<TriggerEvent> {
    text.char_indices()
        .map(|(index, ch)| keystroke(&text[..index + ch.len_utf8()]))
        .collect()
}
