//! Chip list: the view's mirror of the token store
//!
//! The list is only ever changed through `apply`, fed with the `Change`s the
//! app reports. Removal requests leave here as plain values; the chip itself
//! is detached when the matching `Change::Removed` comes back.

use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::engine::Token;
use crate::input::Change;

/// Label drawn for the remove control at the end of each chip
pub const REMOVE_CONTROL: &str = "x";

/// Where a chip landed on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSlot {
    pub value: String,
    /// Text actually drawn, possibly elided
    pub label: String,
    pub area: Rect,
}

impl ChipSlot {
    /// Column of the remove control
    pub fn remove_column(&self) -> u16 {
        self.area.x + self.area.width.saturating_sub(2)
    }
}

/// What a mouse click hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    RemoveControl(String),
    Chip(String),
    Container,
    Outside,
}

/// How a key press is routed between chip selection and the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRoute {
    Field,
    Consumed,
    Remove(String),
}

#[derive(Debug, Default)]
pub struct ChipList {
    chips: Vec<Token>,
    selected: Option<usize>,
}

impl ChipList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chips(&self) -> &[Token] {
        &self.chips
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.chips.get(i))
            .map(|t| t.value.as_str())
    }

    pub fn apply(&mut self, change: &Change) {
        match change {
            Change::Added(token) => self.chips.push(token.clone()),
            Change::Removed(token) => self.detach(&token.value),
        }
    }

    pub fn apply_all(&mut self, changes: &[Change]) {
        for change in changes {
            self.apply(change);
        }
    }

    fn detach(&mut self, value: &str) {
        let Some(index) = self.chips.iter().position(|t| t.value == value) else {
            log::warn!("no chip rendered for removed token {value:?}");
            return;
        };
        self.chips.remove(index);

        self.selected = match self.selected {
            _ if self.chips.is_empty() => None,
            Some(i) if i > index || i >= self.chips.len() => Some(i.saturating_sub(1)),
            other => other,
        };
    }

    /// Decides whether a key drives the chip selection or the text field.
    ///
    /// With an empty field, `Left` or `Backspace` selects the last chip.
    /// While a chip is selected, arrows move the selection and
    /// `Delete`/`Backspace` ask for its removal.
    pub fn route_key(&mut self, code: KeyCode, field_is_empty: bool) -> KeyRoute {
        if let Some(index) = self.selected {
            return match code {
                KeyCode::Left => {
                    self.selected = Some(index.saturating_sub(1));
                    KeyRoute::Consumed
                }
                KeyCode::Right => {
                    self.selected = if index + 1 < self.chips.len() {
                        Some(index + 1)
                    } else {
                        None
                    };
                    KeyRoute::Consumed
                }
                KeyCode::Delete | KeyCode::Backspace => match self.chips.get(index) {
                    Some(token) => KeyRoute::Remove(token.value.clone()),
                    None => {
                        self.selected = None;
                        KeyRoute::Consumed
                    }
                },
                KeyCode::Esc => {
                    self.selected = None;
                    KeyRoute::Consumed
                }
                _ => {
                    self.selected = None;
                    KeyRoute::Field
                }
            };
        }

        match code {
            KeyCode::Left | KeyCode::Backspace if field_is_empty && !self.chips.is_empty() => {
                self.selected = Some(self.chips.len() - 1);
                KeyRoute::Consumed
            }
            _ => KeyRoute::Field,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// Text drawn for a chip, remove control included
pub fn chip_label(value: &str) -> String {
    format!(" {value} {REMOVE_CONTROL} ")
}

/// Like `chip_label`, but elides the value with `…` so the label fits in
/// `max_width` columns with the remove control still at its end.
pub fn fitted_label(value: &str, max_width: u16) -> String {
    let label = chip_label(value);
    if label.width() <= usize::from(max_width) {
        return label;
    }

    // " " + value + " x "
    let room = usize::from(max_width).saturating_sub(chip_label("").width() + 1);
    let mut elided = String::new();
    let mut used = 0;
    for c in value.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > room {
            break;
        }
        used += w;
        elided.push(c);
    }
    elided.push('…');
    chip_label(&elided)
}

/// Result of flowing the chips and the field into an area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowLayout {
    pub slots: Vec<ChipSlot>,
    pub field: Rect,
    /// Chips scrolled off above the first visible row
    pub hidden: usize,
}

/// Flows chips left to right, wrapping to the next row when a chip does not
/// fit. The field takes the remaining space after the last chip, or a fresh
/// row when less than `min_field_width` is left.
///
/// When the rows outgrow `area`, the earliest rows scroll off so that the
/// field and the most recent chips stay visible.
pub fn layout(chips: &[Token], area: Rect, min_field_width: u16) -> FlowLayout {
    if area.width == 0 || area.height == 0 {
        return FlowLayout {
            slots: Vec::new(),
            field: Rect::new(area.x, area.y, 0, 0),
            hidden: chips.len(),
        };
    }

    let right = area.x + area.width;
    let mut placed = Vec::with_capacity(chips.len());
    let mut x = area.x;
    let mut row = 0usize;

    for token in chips {
        let label = fitted_label(&token.value, area.width);
        let width = u16::try_from(label.width())
            .unwrap_or(u16::MAX)
            .min(area.width);
        if x > area.x && x + width > right {
            x = area.x;
            row += 1;
        }
        placed.push((row, x, width, label, token.value.clone()));
        x = (x + width + 1).min(right);
    }

    if x > area.x && right.saturating_sub(x) < min_field_width {
        x = area.x;
        row += 1;
    }

    let first_row = (row + 1).saturating_sub(usize::from(area.height));
    let visible_y = |r: usize| area.y + u16::try_from(r - first_row).unwrap_or(u16::MAX);

    let hidden = placed.iter().filter(|p| p.0 < first_row).count();
    let slots = placed
        .into_iter()
        .filter(|p| p.0 >= first_row)
        .map(|(r, x, width, label, value)| ChipSlot {
            value,
            label,
            area: Rect::new(x, visible_y(r), width, 1),
        })
        .collect();

    FlowLayout {
        slots,
        field: Rect::new(x, visible_y(row), right - x, 1),
        hidden,
    }
}

/// Resolves a click against the last layout.
pub fn hit_test(slots: &[ChipSlot], container: Rect, column: u16, row: u16) -> Hit {
    let position = Position::new(column, row);
    if let Some(slot) = slots.iter().find(|s| s.area.contains(position)) {
        if column == slot.remove_column() {
            return Hit::RemoveControl(slot.value.clone());
        }
        return Hit::Chip(slot.value.clone());
    }

    if container.contains(position) {
        Hit::Container
    } else {
        Hit::Outside
    }
}
