//! Headless layout
//!
//! Mirrors an [`Element`] tree into a taffy tree, computes flexbox layout
//! for a fixed viewport and returns absolute frames for every element.

use serde::Serialize;
use taffy::prelude::*;
use taffy::TaffyError;

use crate::element::{Action, Brush, Element};
use crate::error::{AppError, Result};

/// A laid-out element with its absolute frame
#[derive(Clone, Debug, Serialize)]
pub struct LayoutNode {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Text content, icon name or image source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Brush>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// First node with the given key
    pub fn find(&self, key: &str) -> Option<&LayoutNode> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }

    /// Press target under a point, deepest first
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&Action> {
        if !self.contains(x, y) {
            return None;
        }
        self.children
            .iter()
            .rev()
            .find_map(|c| c.hit_test(x, y))
            .or(self.on_press.as_ref())
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Lay out `root` inside a `width` x `height` viewport
pub fn compute_layout(root: &Element, width: f32, height: f32) -> Result<LayoutNode> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let content = build(&mut tree, root)?;
    let viewport = tree
        .new_with_children(
            Style {
                size: Size {
                    width: Dimension::Length(width),
                    height: Dimension::Length(height),
                },
                ..Style::default()
            },
            &[content],
        )
        .map_err(layout_error)?;

    tree.compute_layout(
        viewport,
        Size {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::Definite(height),
        },
    )
    .map_err(layout_error)?;

    let node = collect(&tree, root, content, 0.0, 0.0)?;
    tracing::debug!(nodes = root.count(), width, height, "layout computed");
    Ok(node)
}

fn build(tree: &mut TaffyTree<()>, element: &Element) -> Result<NodeId> {
    let style = element.layout_style();
    if element.children.is_empty() {
        return tree.new_leaf(style).map_err(layout_error);
    }

    let children = element
        .children
        .iter()
        .map(|child| build(tree, child))
        .collect::<Result<Vec<_>>>()?;
    tree.new_with_children(style, &children)
        .map_err(layout_error)
}

fn collect(
    tree: &TaffyTree<()>,
    element: &Element,
    node: NodeId,
    parent_x: f32,
    parent_y: f32,
) -> Result<LayoutNode> {
    let layout = tree.layout(node).map_err(layout_error)?;
    let x = parent_x + layout.location.x;
    let y = parent_y + layout.location.y;

    let ids = tree.children(node).map_err(layout_error)?;
    let children = element
        .children
        .iter()
        .zip(ids)
        .map(|(child, id)| collect(tree, child, id, x, y))
        .collect::<Result<Vec<_>>>()?;

    let animated = element.animated.as_ref();
    // A projected color or gradient replaces the static fill
    let background = match animated {
        Some(style) if style.gradient.is_some() => style.gradient.clone().map(Brush::Linear),
        Some(style) if style.background.is_some() => style.background.map(Brush::Solid),
        _ => element.background.clone(),
    };

    Ok(LayoutNode {
        kind: element.kind.name(),
        key: element.key.clone(),
        label: element.kind.label().map(str::to_string),
        x,
        y,
        width: layout.size.width,
        height: layout.size.height,
        background,
        opacity: animated.and_then(|a| a.opacity),
        scale: animated.and_then(|a| a.scale),
        on_press: element.on_press.clone(),
        children,
    })
}

fn layout_error(err: TaffyError) -> AppError {
    AppError::Layout(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{div, text};
    use surftrak_animation::StyleProps;
    use surftrak_core::Color;

    #[test]
    fn test_row_positions() {
        let ui = div()
            .w_full()
            .h(100.0)
            .flex_row()
            .gap_px(10.0)
            .child(div().key("a").size(50.0, 20.0))
            .child(div().key("b").size(30.0, 20.0));

        let root = compute_layout(&ui, 200.0, 400.0).unwrap();
        assert_eq!(root.width, 200.0);
        let b = root.find("b").unwrap();
        assert_eq!(b.x, 60.0);
        assert_eq!(b.width, 30.0);
    }

    #[test]
    fn test_nested_positions_are_absolute() {
        let ui = div().p(5.0).child(
            div()
                .p(2.0)
                .child(div().key("leaf").square(10.0)),
        );
        let root = compute_layout(&ui, 300.0, 300.0).unwrap();
        let leaf = root.find("leaf").unwrap();
        assert_eq!((leaf.x, leaf.y), (28.0, 28.0));
    }

    #[test]
    fn test_width_fraction_resolves_to_pixels() {
        let ui = div().w(300.0).h(8.0).child(
            div()
                .key("fill")
                .h_full()
                .animated(StyleProps::new().width_fraction(0.3)),
        );
        let root = compute_layout(&ui, 390.0, 844.0).unwrap();
        let fill = root.find("fill").unwrap();
        assert!((fill.width - 90.0).abs() < 0.01);
        assert_eq!(fill.height, 8.0);
    }

    #[test]
    fn test_animated_background_wins() {
        let ui = div()
            .key("btn")
            .square(40.0)
            .bg(Color::WHITE)
            .animated(StyleProps::new().opacity(0.5).gradient([Color::BLACK, Color::WHITE]));
        let root = compute_layout(&ui, 100.0, 100.0).unwrap();
        assert_eq!(root.opacity, Some(0.5));
        assert!(matches!(root.background, Some(Brush::Linear(ref c)) if c.len() == 2));
    }

    #[test]
    fn test_hit_test_prefers_deepest() {
        let ui = div()
            .size(100.0, 100.0)
            .on_press(Action::OpenSettings)
            .child(div().square(20.0).on_press(Action::AddSession));
        let root = compute_layout(&ui, 100.0, 100.0).unwrap();
        assert_eq!(root.hit_test(5.0, 5.0), Some(&Action::AddSession));
        assert_eq!(root.hit_test(50.0, 50.0), Some(&Action::OpenSettings));
        assert_eq!(root.hit_test(150.0, 50.0), None);
    }

    #[test]
    fn test_text_label_serializes() {
        let ui = div().child(text("Sessions").size(20.0));
        let root = compute_layout(&ui, 390.0, 844.0).unwrap();
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["children"][0]["kind"], "text");
        assert_eq!(json["children"][0]["label"], "Sessions");
    }
}
