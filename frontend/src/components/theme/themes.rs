use serde::{Deserialize, Serialize};
use std::fmt;
use yew::AttrValue;

#[derive(Clone, Debug, PartialEq, Eq, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    pub const STORAGE_KEY: &'static str = "theme";

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => RawPalette::light(),
            Self::Dark => RawPalette::dark(),
        }
        .into()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub bg_color: AttrValue,
    pub contrast_bg_color: AttrValue,
    pub text_color: AttrValue,
    pub button_bg_color: AttrValue,
    pub button_text_color: AttrValue,
    pub box_border_color: AttrValue,
}

struct RawPalette<'a> {
    pub bg_color: &'a str,
    pub contrast_bg_color: &'a str,
    pub text_color: &'a str,
    pub button_bg_color: &'a str,
    pub button_text_color: &'a str,
    pub box_border_color: &'a str,
}

impl<'a> RawPalette<'a> {
    fn light() -> Self {
        let dark = "#333333";
        let light = "#ffffff";

        Self {
            bg_color: light,
            contrast_bg_color: "#f3f4f6",
            text_color: dark,
            button_bg_color: dark,
            button_text_color: light,
            box_border_color: dark,
        }
    }

    fn dark() -> Self {
        let dark = "#333333";
        let light = "#ffffff";

        Self {
            bg_color: dark,
            contrast_bg_color: "#262626",
            text_color: light,
            button_bg_color: light,
            button_text_color: dark,
            box_border_color: light,
        }
    }
}

impl<'a> From<RawPalette<'a>> for Palette {
    fn from(palette: RawPalette) -> Self {
        Palette {
            bg_color: palette.bg_color.to_owned().into(),
            contrast_bg_color: palette.contrast_bg_color.to_owned().into(),
            text_color: palette.text_color.to_owned().into(),
            button_bg_color: palette.button_bg_color.to_owned().into(),
            button_text_color: palette.button_text_color.to_owned().into(),
            box_border_color: palette.box_border_color.to_owned().into(),
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn names_parse_back() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::try_from(theme.name()), Ok(theme));
            assert_eq!(
                serde_json::to_string(&theme).unwrap(),
                format!("\"{theme}\"")
            );
        }
        assert_eq!(Theme::try_from("pastel"), Err(()));
    }

    #[test]
    fn button_inverts_the_page_colors() {
        for theme in [Theme::Light, Theme::Dark] {
            let palette = theme.palette();
            assert_eq!(palette.button_bg_color, palette.text_color);
            assert_eq!(palette.button_text_color, palette.bg_color);
        }
    }
}
