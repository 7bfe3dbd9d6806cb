use std::collections::HashMap;

use ratatui::style::{Color, Modifier, Style};

use crate::engine::ClassNames;

/// Midnight palette
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub invalid: Color,
    pub dimmed: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::midnight()
    }
}

impl Palette {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            accent: Color::Rgb(122, 162, 247),  // #7AA2F7 Blue
            invalid: Color::Rgb(247, 118, 142), // #F7768E Coral Red
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
        }
    }
}

/// Resolves the configured class names to terminal styles.
///
/// Class names are the styling hooks of the control; the theme is the only
/// place that knows what they look like.
#[derive(Debug, Clone)]
pub struct Theme {
    palette: Palette,
    classes: ClassNames,
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new(classes: &ClassNames, palette: Palette) -> Self {
        let mut styles = HashMap::new();
        styles.insert(
            classes.container.clone(),
            Style::default().fg(palette.dimmed).bg(palette.background),
        );
        styles.insert(
            classes.item_input.clone(),
            Style::default().fg(palette.text).bg(palette.background),
        );
        styles.insert(
            classes.item.clone(),
            Style::default().fg(palette.background).bg(palette.accent),
        );
        styles.insert(
            classes.item_invalid.clone(),
            Style::default()
                .fg(palette.invalid)
                .add_modifier(Modifier::UNDERLINED),
        );

        Self {
            palette,
            classes: classes.clone(),
            styles,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn class(&self, name: &str) -> Style {
        self.styles.get(name).copied().unwrap_or_default()
    }

    pub fn container(&self) -> Style {
        self.class(&self.classes.container)
    }

    pub fn input(&self) -> Style {
        self.class(&self.classes.item_input)
    }

    pub fn placeholder(&self) -> Style {
        self.input().fg(self.palette.dimmed)
    }

    /// Chip style: the item class, patched with the invalid class when the
    /// token failed validation.
    pub fn chip(&self, is_valid: bool, selected: bool) -> Style {
        let mut style = self.class(&self.classes.item);
        if !is_valid {
            style = style.patch(self.class(&self.classes.item_invalid));
        }
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    pub fn status(&self) -> Style {
        Style::default()
            .fg(self.palette.dimmed)
            .bg(self.palette.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new(&ClassNames::default(), Palette::midnight())
    }
}
