//! Plot configuration shared across visualization functions
//!
//! Two levels:
//! - [`PlotStyle`]: publication defaults (resolution, font sizes, palette)
//! - [`FigureLayout`]: physical figure width and aspect ratio
//!
//! [`PlotConfig`] combines them with per-plot settings (title, labels). It is
//! always passed explicitly, nothing is stored globally.

use plotters::prelude::*;

// =================================================================================================
// Style
// =================================================================================================

/// Set1 qualitative palette
pub const SET1: [RGBColor; 9] = [
    RGBColor(228, 26, 28),
    RGBColor(55, 126, 184),
    RGBColor(77, 175, 74),
    RGBColor(152, 78, 163),
    RGBColor(255, 127, 0),
    RGBColor(255, 255, 51),
    RGBColor(166, 86, 40),
    RGBColor(247, 129, 191),
    RGBColor(153, 153, 153),
];

/// Typographic and color defaults, sizes in points
#[derive(Clone, Debug, PartialEq)]
pub struct PlotStyle {
    /// Output resolution (dots per inch)
    pub dpi: u32,

    pub font_family: String,
    pub font_size: f64,
    pub title_size: f64,
    pub label_size: f64,
    pub tick_size: f64,
    pub legend_size: f64,
    pub legend_title_size: f64,

    pub line_width: f64,
    pub marker_size: f64,

    /// Series colors, cycled
    pub palette: Vec<RGBColor>,
}

impl PlotStyle {
    /// Thesis figure defaults: 200 dpi, sans-serif, thin lines, Set1 colors
    pub fn thesis() -> Self {
        Self {
            dpi: 200,
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            title_size: 10.0,
            label_size: 10.0,
            tick_size: 8.0,
            legend_size: 8.0,
            legend_title_size: 10.0,
            line_width: 0.5,
            marker_size: 3.0,
            palette: SET1.to_vec(),
        }
    }

    /// Convert a size in points to pixels at this resolution (at least 1)
    pub fn to_pixels(&self, points: f64) -> u32 {
        ((points / 72.0 * self.dpi as f64).round() as u32).max(1)
    }

    /// Color of series `index`, cycling through the palette
    pub fn color(&self, index: usize) -> RGBColor {
        if self.palette.is_empty() {
            return BLACK;
        }
        self.palette[index % self.palette.len()]
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::thesis()
    }
}

// =================================================================================================
// Layout
// =================================================================================================

/// Physical figure size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureLayout {
    /// Figure width in millimetres
    pub width_mm: f64,

    /// Width / height
    pub aspect: f64,
}

/// Golden ratio used as default aspect
pub const GOLDEN_RATIO: f64 = 1.618;

const MM_PER_INCH: f64 = 25.4;

impl FigureLayout {
    /// Single journal column, 90 mm
    pub fn one_column() -> Self {
        Self {
            width_mm: 90.0,
            aspect: GOLDEN_RATIO,
        }
    }

    /// Two journal columns, 180 mm
    pub fn two_column() -> Self {
        Self {
            width_mm: 180.0,
            aspect: GOLDEN_RATIO,
        }
    }

    /// Full page width, 180 mm
    pub fn full_page() -> Self {
        Self {
            width_mm: 180.0,
            aspect: GOLDEN_RATIO,
        }
    }

    /// Width and height in inches
    pub fn inches(&self) -> (f64, f64) {
        let width = self.width_mm / MM_PER_INCH;
        (width, width / self.aspect)
    }

    /// Width and height in pixels at `dpi`
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffusion_rs::output::visualization::FigureLayout;
    ///
    /// let (w, h) = FigureLayout::one_column().pixels(200);
    /// assert_eq!((w, h), (709, 438));
    /// ```
    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        let (width, height) = self.inches();
        (
            (width * dpi as f64).round() as u32,
            (height * dpi as f64).round() as u32,
        )
    }
}

// =================================================================================================
// Plot configuration
// =================================================================================================

/// Configuration for customizing plots
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::visualization::{FigureLayout, PlotConfig, PlotStyle};
///
/// let config = PlotConfig::profile("Steady state")
///     .with_layout(&PlotStyle::thesis(), FigureLayout::two_column());
/// assert_eq!(config.title, "Steady state");
/// assert_eq!(config.width, 1417);
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title
    pub title: String,

    /// X-axis label (default: "x")
    pub xlabel: String,

    /// Y-axis label (default: "c(x)")
    pub ylabel: String,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Fonts and palette
    pub style: PlotStyle,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: "x".to_string(),
            ylabel: "c(x)".to_string(),
            background: WHITE,
            line_width: 2,
            show_grid: true,
            style: PlotStyle::thesis(),
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Concentration profiles c(x), default title "Concentration Profile"
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Concentration Profile".to_string()),
            ..Default::default()
        }
    }

    /// Snapshots of a run, default title "Profile Evolution"
    pub fn evolution(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Profile Evolution".to_string()),
            ..Default::default()
        }
    }

    /// Size the image for `layout` and take line width and fonts from `style`
    pub fn with_layout(mut self, style: &PlotStyle, layout: FigureLayout) -> Self {
        let (width, height) = layout.pixels(style.dpi);
        self.width = width;
        self.height = height;
        self.line_width = style.to_pixels(style.line_width);
        self.style = style.clone();
        self
    }

    /// Color for series `index`
    pub(crate) fn series_color(&self, index: usize) -> RGBColor {
        self.style.color(index)
    }

    /// Font size in pixels for a size given in points
    pub(crate) fn font_px(&self, points: f64) -> u32 {
        self.style.to_pixels(points)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
        assert_eq!(config.xlabel, "x");
    }

    #[test]
    fn test_profile_config_titles() {
        assert_eq!(PlotConfig::profile(NO_TITLE).title, "Concentration Profile");
        assert_eq!(PlotConfig::profile("Reflect").title, "Reflect");
        assert_eq!(PlotConfig::evolution(format!("D = {}", 1.0)).title, "D = 1");
        assert_eq!(PlotConfig::evolution(None::<String>).title, "Profile Evolution");
    }

    #[test]
    fn test_thesis_style() {
        let style = PlotStyle::thesis();
        assert_eq!(style.dpi, 200);
        assert_eq!(style.font_size, 12.0);
        assert_eq!(style.tick_size, 8.0);
        assert_eq!(style.legend_title_size, 10.0);
        assert_eq!(style.line_width, 0.5);
        assert_eq!(style.marker_size, 3.0);
        assert_eq!(style.palette.len(), 9);
    }

    #[test]
    fn test_points_to_pixels() {
        let style = PlotStyle::thesis();
        // 12 pt at 200 dpi = 33.3 px
        assert_eq!(style.to_pixels(12.0), 33);
        // thin lines never vanish
        assert_eq!(style.to_pixels(0.1), 1);
    }

    #[test]
    fn test_palette_cycles() {
        let style = PlotStyle::thesis();
        assert_eq!(style.color(0), SET1[0]);
        assert_eq!(style.color(9), SET1[0]);

        let empty = PlotStyle {
            palette: Vec::new(),
            ..PlotStyle::thesis()
        };
        assert_eq!(empty.color(3), BLACK);
    }

    #[test]
    fn test_layouts() {
        let (w, h) = FigureLayout::one_column().inches();
        assert!((w - 90.0 / 25.4).abs() < 1e-12);
        assert!((h - w / 1.618).abs() < 1e-12);

        assert_eq!(FigureLayout::two_column(), FigureLayout::full_page());
        assert_eq!(FigureLayout::two_column().pixels(200), (1417, 876));
    }

    #[test]
    fn test_with_layout() {
        let style = PlotStyle::thesis();
        let config = PlotConfig::profile(NO_TITLE).with_layout(&style, FigureLayout::one_column());
        assert_eq!((config.width, config.height), (709, 438));
        assert_eq!(config.line_width, 1);
        assert_eq!(config.series_color(1), SET1[1]);
        assert_eq!(config.font_px(10.0), 28);
    }
}
