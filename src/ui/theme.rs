use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();
static ERR_THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub warn: Style,
    pub dim: Style,
}

impl Theme {
    /// Colored only for a terminal stream whose CLICOLOR/NO_COLOR setting allows it
    pub fn detect(is_term: bool, colors_enabled: bool) -> Self {
        if is_term && colors_enabled {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            warn: Style::new().yellow().bold(),
            dim: Style::new().white().dimmed(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            warn: Style::new(),
            dim: Style::new(),
        }
    }
}

/// Theme for stdout
pub fn theme() -> &'static Theme {
    THEME.get_or_init(|| Theme::detect(console::Term::stdout().is_term(), console::colors_enabled()))
}

/// Theme for stderr
pub fn err_theme() -> &'static Theme {
    ERR_THEME.get_or_init(|| {
        Theme::detect(console::Term::stderr().is_term(), console::colors_enabled_stderr())
    })
}
