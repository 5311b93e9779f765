pub mod icons;
pub mod output;
pub mod theme;

pub use icons::Icons;
pub use output::{section, success, summary_row, warn};
pub use theme::{err_theme, theme, Theme};
