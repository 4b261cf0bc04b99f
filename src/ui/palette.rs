//! Color pairs used by the row formatter
//!
//! Colors are configured once at startup and handed to every renderer as
//! a [`Palette`]; nothing reads colors from global state.

use crossterm::style::Color;

/// Foreground/background combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl ColorPair {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

/// Named slot in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pair {
    Normal,
    Selected,
    Branch,
    BranchSelected,
}

/// Every color pair the views draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub normal: ColorPair,
    pub selected: ColorPair,
    pub branch: ColorPair,
    pub branch_selected: ColorPair,
}

impl Palette {
    pub fn get(&self, pair: Pair) -> ColorPair {
        match pair {
            Pair::Normal => self.normal,
            Pair::Selected => self.selected,
            Pair::Branch => self.branch,
            Pair::BranchSelected => self.branch_selected,
        }
    }
}

impl Default for Palette {
    /// White on black, inverted selection, green tree branches.
    fn default() -> Self {
        let black = Color::AnsiValue(0);
        let white = Color::AnsiValue(231);
        let green = Color::AnsiValue(2);
        Self {
            normal: ColorPair::new(white, black),
            selected: ColorPair::new(black, white),
            branch: ColorPair::new(green, black),
            branch_selected: ColorPair::new(green, white),
        }
    }
}

/// Parses a color name, an ANSI index (`"231"`) or `"#rrggbb"`.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return Some(Color::Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        });
    }

    if let Ok(index) = value.parse::<u8>() {
        return Some(Color::AnsiValue(index));
    }

    let color = match value.to_lowercase().replace(['-', ' '], "_").as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Black,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        _ => return None,
    };
    Some(color)
}
