//! Element tree and tailwind-style builders
//!
//! Screens describe their UI as a tree of [`Element`]s:
//! ```rust
//! use surftrak_app::element::{div, text};
//! use surftrak_core::Color;
//!
//! let ui = div()
//!     .flex_row()
//!     .gap(4.0)
//!     .p(2.0)
//!     .bg(Color::WHITE)
//!     .child(text("Hello").size(18.0).bold());
//! assert_eq!(ui.texts(), vec!["Hello"]);
//! ```
//!
//! Spacing methods take 4px units like Tailwind (`p(4.0)` is 16px); the
//! `_px` variants take pixels.

use serde::Serialize;
use smallvec::SmallVec;
use surftrak_animation::StyleProps;
use surftrak_core::Color;
use taffy::prelude::*;

use crate::navigator::Tab;

/// Fill for an element's background
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Brush {
    Solid(Color),
    /// Linear gradient, first color at the start edge
    Linear(SmallVec<[Color; 3]>),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl Brush {
    pub fn linear(colors: impl IntoIterator<Item = Color>) -> Self {
        Brush::Linear(colors.into_iter().collect())
    }
}

/// What pressing an element does
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SelectTab(Tab),
    OpenSession(String),
    AddSession,
    FilterSessions,
    OpenSettings,
    GoalOptions,
    SeeAll(String),
    OpenMenu(&'static str),
    SignOut,
}

/// Font weight options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    SemiBold,
    Bold,
}

/// Element-specific content
#[derive(Clone, Debug, PartialEq)]
pub enum ElementKind {
    Div,
    Text {
        content: String,
        font_size: f32,
        color: Color,
        weight: FontWeight,
    },
    Icon {
        name: &'static str,
        size: f32,
        color: Color,
    },
    Image {
        source: String,
    },
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Div => "div",
            ElementKind::Text { .. } => "text",
            ElementKind::Icon { .. } => "icon",
            ElementKind::Image { .. } => "image",
        }
    }

    /// Text content, icon name or image source
    pub fn label(&self) -> Option<&str> {
        match self {
            ElementKind::Div => None,
            ElementKind::Text { content, .. } => Some(content),
            ElementKind::Icon { name, .. } => Some(name),
            ElementKind::Image { source } => Some(source),
        }
    }
}

/// A node in the UI tree
#[derive(Clone, Debug)]
pub struct Element {
    pub kind: ElementKind,
    style: Style,
    pub background: Option<Brush>,
    pub corner_radius: f32,
    /// Projected style for this frame, applied over the static style
    pub animated: Option<StyleProps>,
    pub on_press: Option<Action>,
    pub key: Option<String>,
    pub children: Vec<Element>,
}

impl Default for Element {
    fn default() -> Self {
        Self::new(ElementKind::Div)
    }
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            style: Style::default(),
            background: None,
            corner_radius: 0.0,
            animated: None,
            on_press: None,
            key: None,
            children: Vec::new(),
        }
    }

    // =========================================================================
    // Flex
    // =========================================================================

    pub fn flex_row(mut self) -> Self {
        self.style.display = Display::Flex;
        self.style.flex_direction = FlexDirection::Row;
        self
    }

    pub fn flex_col(mut self) -> Self {
        self.style.display = Display::Flex;
        self.style.flex_direction = FlexDirection::Column;
        self
    }

    /// Grow and shrink to share the remaining space
    pub fn flex_1(mut self) -> Self {
        self.style.flex_grow = 1.0;
        self.style.flex_shrink = 1.0;
        self.style.flex_basis = Dimension::Length(0.0);
        self
    }

    /// Allow shrinking below content height; overflow is clipped by hit tests
    pub fn min_h_0(mut self) -> Self {
        self.style.min_size.height = Dimension::Length(0.0);
        self
    }

    pub fn flex_shrink_0(mut self) -> Self {
        self.style.flex_shrink = 0.0;
        self
    }

    pub fn items_center(mut self) -> Self {
        self.style.align_items = Some(AlignItems::Center);
        self
    }

    pub fn items_start(mut self) -> Self {
        self.style.align_items = Some(AlignItems::FlexStart);
        self
    }

    pub fn justify_center(mut self) -> Self {
        self.style.justify_content = Some(JustifyContent::Center);
        self
    }

    pub fn justify_between(mut self) -> Self {
        self.style.justify_content = Some(JustifyContent::SpaceBetween);
        self
    }

    /// Center children on both axes
    pub fn center(self) -> Self {
        self.items_center().justify_center()
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    pub fn w(mut self, px: f32) -> Self {
        self.style.size.width = Dimension::Length(px);
        self
    }

    pub fn h(mut self, px: f32) -> Self {
        self.style.size.height = Dimension::Length(px);
        self
    }

    pub fn size(self, w: f32, h: f32) -> Self {
        self.w(w).h(h)
    }

    pub fn square(self, px: f32) -> Self {
        self.w(px).h(px)
    }

    pub fn w_full(mut self) -> Self {
        self.style.size.width = Dimension::Percent(1.0);
        self
    }

    pub fn h_full(mut self) -> Self {
        self.style.size.height = Dimension::Percent(1.0);
        self
    }

    // =========================================================================
    // Spacing (4px base unit)
    // =========================================================================

    pub fn gap(self, units: f32) -> Self {
        self.gap_px(units * 4.0)
    }

    pub fn gap_px(mut self, px: f32) -> Self {
        self.style.gap = Size {
            width: LengthPercentage::Length(px),
            height: LengthPercentage::Length(px),
        };
        self
    }

    pub fn p(mut self, units: f32) -> Self {
        let px = LengthPercentage::Length(units * 4.0);
        self.style.padding = Rect {
            left: px,
            right: px,
            top: px,
            bottom: px,
        };
        self
    }

    pub fn px(mut self, units: f32) -> Self {
        let px = LengthPercentage::Length(units * 4.0);
        self.style.padding.left = px;
        self.style.padding.right = px;
        self
    }

    pub fn py(mut self, units: f32) -> Self {
        let px = LengthPercentage::Length(units * 4.0);
        self.style.padding.top = px;
        self.style.padding.bottom = px;
        self
    }

    pub fn pt_px(mut self, px: f32) -> Self {
        self.style.padding.top = LengthPercentage::Length(px);
        self
    }

    pub fn pb_px(mut self, px: f32) -> Self {
        self.style.padding.bottom = LengthPercentage::Length(px);
        self
    }

    pub fn mx(mut self, units: f32) -> Self {
        let px = LengthPercentageAuto::Length(units * 4.0);
        self.style.margin.left = px;
        self.style.margin.right = px;
        self
    }

    pub fn my(mut self, units: f32) -> Self {
        let px = LengthPercentageAuto::Length(units * 4.0);
        self.style.margin.top = px;
        self.style.margin.bottom = px;
        self
    }

    pub fn mt(mut self, units: f32) -> Self {
        self.style.margin.top = LengthPercentageAuto::Length(units * 4.0);
        self
    }

    pub fn mb(mut self, units: f32) -> Self {
        self.style.margin.bottom = LengthPercentageAuto::Length(units * 4.0);
        self
    }

    pub fn mr(mut self, units: f32) -> Self {
        self.style.margin.right = LengthPercentageAuto::Length(units * 4.0);
        self
    }

    pub fn ml(mut self, units: f32) -> Self {
        self.style.margin.left = LengthPercentageAuto::Length(units * 4.0);
        self
    }

    // =========================================================================
    // Position
    // =========================================================================

    pub fn relative(mut self) -> Self {
        self.style.position = Position::Relative;
        self
    }

    /// Take the element out of flow, pinned to all four parent edges
    pub fn absolute_fill(mut self) -> Self {
        self.style.position = Position::Absolute;
        let zero = LengthPercentageAuto::Length(0.0);
        self.style.inset = Rect {
            left: zero,
            right: zero,
            top: zero,
            bottom: zero,
        };
        self
    }

    /// Out of flow, pinned to the parent's top-left corner
    pub fn absolute_top_left(mut self) -> Self {
        self.style.position = Position::Absolute;
        self.style.inset.left = LengthPercentageAuto::Length(0.0);
        self.style.inset.top = LengthPercentageAuto::Length(0.0);
        self
    }

    // =========================================================================
    // Visual
    // =========================================================================

    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(Brush::Solid(color));
        self
    }

    pub fn background(mut self, brush: impl Into<Brush>) -> Self {
        self.background = Some(brush.into());
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Pill shape; the renderer clamps to half the shorter side
    pub fn rounded_full(mut self) -> Self {
        self.corner_radius = 9999.0;
        self
    }

    /// Attach this frame's projected style
    pub fn animated(mut self, style: StyleProps) -> Self {
        self.animated = Some(style);
        self
    }

    pub fn on_press(mut self, action: Action) -> Self {
        self.on_press = Some(action);
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    // =========================================================================
    // Children
    // =========================================================================

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Layout style with the projected width applied
    pub fn layout_style(&self) -> Style {
        let mut style = self.style.clone();
        if let Some(fraction) = self.animated.as_ref().and_then(|a| a.width_fraction) {
            style.size.width = Dimension::Percent(fraction.clamp(0.0, 1.0));
        }
        style
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Depth-first walk over this element and its descendants
    pub fn walk(&self, f: &mut impl FnMut(&Element)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// All text content in document order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let ElementKind::Text { content, .. } = &self.kind {
            out.push(content);
        }
        for child in &self.children {
            child.collect_texts(out);
        }
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// First element with the given key
    pub fn find(&self, key: &str) -> Option<&Element> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }

    /// Every press action in document order
    pub fn actions(&self) -> Vec<Action> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if let Some(action) = &el.on_press {
                out.push(action.clone());
            }
        });
        out
    }

    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }
}

/// Create a div
pub fn div() -> Element {
    Element::default()
}

// ============================================================================
// Text
// ============================================================================

/// A text element builder
#[derive(Clone, Debug)]
pub struct Text {
    content: String,
    font_size: f32,
    color: Color,
    weight: FontWeight,
    margin_top: f32,
    margin_bottom: f32,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: 14.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
            margin_top: 0.0,
            margin_bottom: 0.0,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }

    pub fn semibold(self) -> Self {
        self.weight(FontWeight::SemiBold)
    }

    pub fn medium(self) -> Self {
        self.weight(FontWeight::Medium)
    }

    pub fn mt(mut self, units: f32) -> Self {
        self.margin_top = units * 4.0;
        self
    }

    pub fn mb(mut self, units: f32) -> Self {
        self.margin_bottom = units * 4.0;
        self
    }

    /// Rough single-line size: average glyph is half the font size wide
    pub fn estimated_size(&self) -> (f32, f32) {
        let chars = self.content.chars().count() as f32;
        (chars * self.font_size * 0.5, self.font_size * 1.2)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        let (width, height) = text.estimated_size();
        let mut el = Element::new(ElementKind::Text {
            content: text.content,
            font_size: text.font_size,
            color: text.color,
            weight: text.weight,
        })
        .size(width, height)
        .flex_shrink_0();
        el.style.margin.top = LengthPercentageAuto::Length(text.margin_top);
        el.style.margin.bottom = LengthPercentageAuto::Length(text.margin_bottom);
        el
    }
}

/// Create a text element
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

// ============================================================================
// Icon & Image
// ============================================================================

/// A named glyph from the icon set, `size` pixels square
pub fn icon(name: &'static str, size: f32, color: Color) -> Element {
    Element::new(ElementKind::Icon { name, size, color })
        .square(size)
        .flex_shrink_0()
}

/// An image by URL or bundled asset name
pub fn image(source: impl Into<String>) -> Element {
    Element::new(ElementKind::Image {
        source: source.into(),
    })
    .flex_shrink_0()
}
