use ratatui::style::Color;

/// Light or dark colour scheme, switchable while the exam runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub correct: Color,
    pub incorrect: Color,
    pub hint: Color,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                highlight: Color::Magenta,
                correct: Color::Green,
                incorrect: Color::Red,
                hint: Color::Blue,
            },
            Theme::Dark => Palette {
                background: Color::Reset,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::Yellow,
                correct: Color::Green,
                incorrect: Color::Red,
                hint: Color::LightBlue,
            },
        }
    }
}
