//! Code export
//!
//! Turns a snapshot of the editor (properties, items, layout name) into text
//! in one of four dialects. Every function here is pure: the same snapshot
//! always produces the same bytes.

use std::fmt;
use std::str::FromStr;

use crate::constants::gap::SPACING_SCALE_PX;
use crate::error::ParseError;
use crate::layout::{
    AlignItems, FlexDirection, FlexWrap, FlexboxProperties, JustifyContent, LayoutItem,
};

const CONTAINER_CLASSES: &str = "p-6 min-h-[400px] bg-gray-100 rounded-lg";
const ITEM_CLASSES: &str = "bg-blue-500 text-white rounded-lg p-4 min-w-[80px] min-h-[80px] flex items-center justify-center font-bold text-xl";

/// Output format of the export dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Markup with utility classes
    Html,
    /// Markup with a stylesheet
    Css,
    /// Component source
    React,
    /// Raw `key: value` dump
    Properties,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [Dialect::Html, Dialect::Css, Dialect::React, Dialect::Properties];

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            Dialect::Html => "HTML + Tailwind",
            Dialect::Css => "HTML + CSS",
            Dialect::React => "React JSX",
            Dialect::Properties => "Properties",
        }
    }

    /// Heading above the code
    pub fn heading(self) -> &'static str {
        match self {
            Dialect::Html => "HTML with Tailwind CSS",
            Dialect::Css => "HTML with CSS",
            Dialect::React => "React JSX Component",
            Dialect::Properties => "CSS Properties",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dialect::Html => "html",
            Dialect::Css => "css",
            Dialect::React => "react",
            Dialect::Properties => "properties",
        })
    }
}

impl FromStr for Dialect {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "tailwind" => Ok(Dialect::Html),
            "css" => Ok(Dialect::Css),
            "react" | "jsx" => Ok(Dialect::React),
            "properties" | "props" => Ok(Dialect::Properties),
            _ => Err(ParseError::UnknownDialect(s.to_string())),
        }
    }
}

/// Everything the generator reads
#[derive(Debug, Clone, Copy)]
pub struct ExportSnapshot<'a> {
    pub properties: &'a FlexboxProperties,
    pub items: &'a [LayoutItem],
    pub layout_name: &'a str,
}

impl ExportSnapshot<'_> {
    pub fn render(&self, dialect: Dialect) -> String {
        match dialect {
            Dialect::Html => html(self.properties, self.items),
            Dialect::Css => stylesheet(self.properties),
            Dialect::React => component(self.properties, self.items, self.layout_name),
            Dialect::Properties => property_dump(self.properties),
        }
    }
}

fn justify_class(justify: JustifyContent) -> &'static str {
    match justify {
        JustifyContent::FlexStart => "justify-start",
        JustifyContent::FlexEnd => "justify-end",
        JustifyContent::Center => "justify-center",
        JustifyContent::SpaceBetween => "justify-between",
        JustifyContent::SpaceAround => "justify-around",
        JustifyContent::SpaceEvenly => "justify-evenly",
    }
}

fn align_class(align: AlignItems) -> &'static str {
    match align {
        AlignItems::FlexStart => "items-start",
        AlignItems::FlexEnd => "items-end",
        AlignItems::Center => "items-center",
        AlignItems::Baseline => "items-baseline",
        AlignItems::Stretch => "items-stretch",
    }
}

fn direction_class(direction: FlexDirection) -> Option<&'static str> {
    match direction {
        FlexDirection::Row => None,
        FlexDirection::RowReverse => Some("flex-row-reverse"),
        FlexDirection::Column => Some("flex-column"),
        FlexDirection::ColumnReverse => Some("flex-column-reverse"),
    }
}

fn wrap_class(wrap: FlexWrap) -> Option<&'static str> {
    match wrap {
        FlexWrap::NoWrap => None,
        FlexWrap::Wrap => Some("flex-wrap"),
        FlexWrap::WrapReverse => Some("flex-wrap-reverse"),
    }
}

/// Pixel gap to the nearest step of the spacing scale, halves rounding up
fn spacing_step(gap: u32) -> u32 {
    gap / SPACING_SCALE_PX + u32::from(gap % SPACING_SCALE_PX >= SPACING_SCALE_PX / 2)
}

/// Utility class list for the container
pub fn utility_classes(properties: &FlexboxProperties) -> String {
    let mut classes = vec!["flex".to_string()];
    classes.extend(direction_class(properties.flex_direction).map(str::to_string));
    classes.extend(wrap_class(properties.flex_wrap).map(str::to_string));
    classes.push(justify_class(properties.justify_content).to_string());
    classes.push(align_class(properties.align_items).to_string());
    if properties.gap > 0 {
        classes.push(format!("gap-{}", spacing_step(properties.gap)));
    }
    classes.join(" ")
}

fn item_elements(
    items: &[LayoutItem],
    indent: &str,
    class_attr: &str,
    style_attr: fn(&LayoutItem) -> Option<String>,
) -> String {
    items
        .iter()
        .map(|item| {
            let style = style_attr(item)
                .map(|style| format!(" style={style}"))
                .unwrap_or_default();
            format!(
                "{indent}<div {class_attr}=\"{ITEM_CLASSES}\"{style}>\n{indent}  {}\n{indent}</div>",
                item.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn html_style(item: &LayoutItem) -> Option<String> {
    item.inline_style().map(|style| format!("\"{style}\""))
}

fn jsx_style(item: &LayoutItem) -> Option<String> {
    let styles = item.custom_styles.as_ref().filter(|s| !s.is_empty())?;
    let entries = styles
        .iter()
        .map(|(property, value)| format!("{}: \"{value}\"", camel_case(property)))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("{{{{ {entries} }}}}"))
}

fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper = false;
    for ch in property.chars() {
        if ch == '-' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Markup with utility classes
pub fn html(properties: &FlexboxProperties, items: &[LayoutItem]) -> String {
    format!(
        "<div class=\"{} {CONTAINER_CLASSES}\">\n{}\n</div>",
        utility_classes(properties),
        item_elements(items, "  ", "class", html_style)
    )
}

/// Container and item rules; items are not enumerated
pub fn stylesheet(properties: &FlexboxProperties) -> String {
    let mut out = String::from(".flexbox-container {\n");
    for declaration in properties.css_declarations() {
        out.push_str("  ");
        out.push_str(&declaration);
        out.push('\n');
    }
    out.push_str(
        "  padding: 24px;
  min-height: 400px;
  background-color: #f3f4f6;
  border-radius: 8px;
}

.flexbox-item {
  background-color: #3b82f6;
  color: white;
  border-radius: 8px;
  padding: 16px;
  min-width: 80px;
  min-height: 80px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: bold;
  font-size: 1.25rem;
}",
    );
    out
}

/// Component identifier for a layout name: `"Card Grid"` → `CardGridLayout`
pub fn component_name(layout_name: &str) -> String {
    let mut name: String = layout_name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if name.is_empty() {
        return "FlexboxLayout".to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, "Flexbox");
    }
    if !name.ends_with("Layout") {
        name.push_str("Layout");
    }
    name
}

/// Component source mirroring [`html`]
pub fn component(properties: &FlexboxProperties, items: &[LayoutItem], layout_name: &str) -> String {
    format!(
        "// {layout_name} Layout Component
export const {} = () => {{
  return (
    <div className=\"{} {CONTAINER_CLASSES}\">
{}
    </div>
  );
}};",
        component_name(layout_name),
        utility_classes(properties),
        item_elements(items, "      ", "className", jsx_style)
    )
}

/// One `key: value` line per field, in field order
pub fn property_dump(properties: &FlexboxProperties) -> String {
    properties
        .values()
        .iter()
        .map(|value| format!("{}: {value}", value.key()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{AlignContent, DisplayMode, ItemSequence};

    fn centered() -> FlexboxProperties {
        FlexboxProperties {
            display: DisplayMode::Flex,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::NoWrap,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Stretch,
            align_content: AlignContent::Stretch,
            gap: 10,
        }
    }

    #[test]
    fn test_utility_classes_defaults_omit_modifiers() {
        assert_eq!(utility_classes(&centered()), "flex justify-center items-stretch gap-3");
    }

    #[test]
    fn test_utility_classes_with_modifiers() {
        let props = FlexboxProperties {
            flex_direction: FlexDirection::ColumnReverse,
            flex_wrap: FlexWrap::WrapReverse,
            justify_content: JustifyContent::SpaceEvenly,
            align_items: AlignItems::Baseline,
            gap: 0,
            ..centered()
        };
        assert_eq!(
            utility_classes(&props),
            "flex flex-column-reverse flex-wrap-reverse justify-evenly items-baseline"
        );
    }

    #[test]
    fn test_spacing_step_rounds_half_up() {
        assert_eq!(spacing_step(1), 0);
        assert_eq!(spacing_step(2), 1);
        assert_eq!(spacing_step(6), 2);
        assert_eq!(spacing_step(10), 3);
        assert_eq!(spacing_step(16), 4);
        assert_eq!(spacing_step(50), 13);
        assert_eq!(spacing_step(u32::MAX), u32::MAX / 4 + 1);
    }

    #[test]
    fn test_utility_classes_huge_gap() {
        let props = FlexboxProperties {
            gap: u32::MAX,
            ..centered()
        };
        assert_eq!(
            utility_classes(&props),
            "flex justify-center items-stretch gap-1073741824"
        );
    }

    #[test]
    fn test_direction_tokens() {
        let tokens: Vec<_> = FlexDirection::ALL
            .iter()
            .map(|&flex_direction| {
                utility_classes(&FlexboxProperties {
                    flex_direction,
                    gap: 0,
                    ..centered()
                })
            })
            .collect();
        assert_eq!(
            tokens,
            [
                "flex justify-center items-stretch",
                "flex flex-row-reverse justify-center items-stretch",
                "flex flex-column justify-center items-stretch",
                "flex flex-column-reverse justify-center items-stretch",
            ]
        );
    }

    #[test]
    fn test_html_golden() {
        let items = ItemSequence::with_count(2);
        let expected = r#"<div class="flex justify-center items-stretch gap-3 p-6 min-h-[400px] bg-gray-100 rounded-lg">
  <div class="bg-blue-500 text-white rounded-lg p-4 min-w-[80px] min-h-[80px] flex items-center justify-center font-bold text-xl">
    1
  </div>
  <div class="bg-blue-500 text-white rounded-lg p-4 min-w-[80px] min-h-[80px] flex items-center justify-center font-bold text-xl">
    2
  </div>
</div>"#;
        assert_eq!(html(&centered(), items.as_slice()), expected);
    }

    #[test]
    fn test_html_preserves_item_order() {
        let items = ItemSequence::with_count(3);
        let out = html(&centered(), items.as_slice());
        let first = out.find("    1\n").unwrap();
        let second = out.find("    2\n").unwrap();
        let third = out.find("    3\n").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_html_includes_custom_styles() {
        let mut items = ItemSequence::with_count(2);
        items.style_item(1, "flex-grow", "1");
        let out = html(&centered(), items.as_slice());
        assert!(out.contains(r#"text-xl" style="flex-grow: 1;">"#));
        assert_eq!(out.matches("style=").count(), 1);
    }

    #[test]
    fn test_stylesheet_golden() {
        let expected = ".flexbox-container {
  display: flex;
  flex-direction: row;
  flex-wrap: nowrap;
  justify-content: center;
  align-items: stretch;
  align-content: stretch;
  gap: 10px;
  padding: 24px;
  min-height: 400px;
  background-color: #f3f4f6;
  border-radius: 8px;
}

.flexbox-item {
  background-color: #3b82f6;
  color: white;
  border-radius: 8px;
  padding: 16px;
  min-width: 80px;
  min-height: 80px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: bold;
  font-size: 1.25rem;
}";
        assert_eq!(stylesheet(&centered()), expected);
    }

    #[test]
    fn test_stylesheet_ignores_items() {
        let snapshot = |count| {
            let items = ItemSequence::with_count(count);
            ExportSnapshot {
                properties: &centered(),
                items: items.as_slice(),
                layout_name: "Test",
            }
            .render(Dialect::Css)
        };
        assert_eq!(snapshot(1), snapshot(9));
    }

    #[test]
    fn test_component_golden() {
        let items = ItemSequence::with_count(1);
        let expected = r#"// Perfect Center Layout Component
export const PerfectCenterLayout = () => {
  return (
    <div className="flex justify-center items-stretch gap-3 p-6 min-h-[400px] bg-gray-100 rounded-lg">
      <div className="bg-blue-500 text-white rounded-lg p-4 min-w-[80px] min-h-[80px] flex items-center justify-center font-bold text-xl">
        1
      </div>
    </div>
  );
};"#;
        assert_eq!(component(&centered(), items.as_slice(), "Perfect Center"), expected);
    }

    #[test]
    fn test_component_style_object() {
        let mut items = ItemSequence::with_count(1);
        items.style_item(0, "min-width", "120px");
        let out = component(&centered(), items.as_slice(), "Sidebar");
        assert!(out.contains(r#"style={{ minWidth: "120px" }}>"#));
    }

    #[test]
    fn test_component_name() {
        assert_eq!(component_name("Card Grid"), "CardGridLayout");
        assert_eq!(component_name("Sidebar Layout"), "SidebarLayout");
        assert_eq!(component_name("sticky-footer"), "StickyFooterLayout");
        assert_eq!(component_name("3 column"), "Flexbox3ColumnLayout");
        assert_eq!(component_name("  "), "FlexboxLayout");
    }

    #[test]
    fn test_property_dump_golden() {
        let expected = "display: flex
flexDirection: row
flexWrap: nowrap
justifyContent: center
alignItems: stretch
alignContent: stretch
gap: 10";
        let out = property_dump(&centered());
        assert_eq!(out, expected);
        assert_eq!(out.lines().count(), 7);
    }

    #[test]
    fn test_render_is_deterministic() {
        let items = ItemSequence::with_count(3);
        let props = centered();
        let snapshot = ExportSnapshot {
            properties: &props,
            items: items.as_slice(),
            layout_name: "Basic Row",
        };
        for dialect in Dialect::ALL {
            assert_eq!(snapshot.render(dialect), snapshot.render(dialect));
        }
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("HTML".parse(), Ok(Dialect::Html));
        assert_eq!("jsx".parse(), Ok(Dialect::React));
        assert_eq!("props".parse(), Ok(Dialect::Properties));
        assert_eq!(
            "svg".parse::<Dialect>(),
            Err(ParseError::UnknownDialect("svg".to_string()))
        );
    }
}
