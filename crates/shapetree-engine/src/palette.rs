use once_cell::sync::Lazy;
use owo_colors::Style;

/// Read-only category-to-style table referenced by the renderer.
///
/// One style per rendered field category; every colorized segment carries its
/// own reset so categories cannot bleed into each other.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub shape: Style,
    pub dtype: Style,
    pub device: Style,
    pub grad: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            shape: Style::new().green(),
            dtype: Style::new().purple(),
            device: Style::new().bright_black(),
            grad: Style::new().blue(),
        }
    }
}

static PALETTE: Lazy<Palette> = Lazy::new(Palette::default);

/// Process-wide palette instance
pub fn palette() -> &'static Palette {
    &PALETTE
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    #[test]
    fn test_shape_style_is_green_with_reset() {
        let styled = format!("{}", "<3>".style(palette().shape));
        assert_eq!(styled, "\u{1b}[32m<3>\u{1b}[0m");
    }

    #[test]
    fn test_category_styles_are_distinct() {
        let sample = |style: Style| format!("{}", "x".style(style));
        let rendered = [
            sample(palette().shape),
            sample(palette().dtype),
            sample(palette().device),
            sample(palette().grad),
        ];
        for (i, a) in rendered.iter().enumerate() {
            for b in rendered.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
