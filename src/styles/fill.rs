//! Fill records.

use super::color::Color;
use crate::xml::XmlNode;

/// Cell background fill.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Fill {
    /// No fill
    #[default]
    None,
    /// Pattern fill
    Pattern {
        /// Pattern name (e.g. "solid", "gray125")
        pattern_type: String,
        /// Foreground color
        fg_color: Option<Color>,
        /// Background color
        bg_color: Option<Color>,
    },
    /// Gradient fill (simplified: stops are not modeled)
    Gradient {
        /// "linear" or "path"
        gradient_type: Option<String>,
        /// Rotation of a linear gradient, in degrees
        degree: Option<f64>,
    },
}

impl Fill {
    /// Solid fill in the given foreground color.
    pub fn solid(color: Color) -> Self {
        Fill::Pattern {
            pattern_type: "solid".to_string(),
            fg_color: Some(color),
            bg_color: None,
        }
    }

    /// The second default fill every stylesheet carries.
    pub(crate) fn gray125() -> Self {
        Fill::Pattern {
            pattern_type: "gray125".to_string(),
            fg_color: None,
            bg_color: None,
        }
    }

    /// Whether this is a solid pattern fill.
    pub fn is_solid(&self) -> bool {
        matches!(self, Fill::Pattern { pattern_type, .. } if pattern_type == "solid")
    }

    pub(crate) fn read(node: &XmlNode) -> Fill {
        if let Some(pattern) = node.child("patternFill") {
            let pattern_type = pattern.attribute_or("patternType", "none");
            if pattern_type == "none" {
                return Fill::None;
            }
            return Fill::Pattern {
                pattern_type: pattern_type.to_string(),
                fg_color: pattern.child("fgColor").and_then(Color::read),
                bg_color: pattern.child("bgColor").and_then(Color::read),
            };
        }
        if let Some(gradient) = node.child("gradientFill") {
            return Fill::Gradient {
                gradient_type: gradient.attribute("type").map(str::to_string),
                degree: gradient
                    .attribute("degree")
                    .and_then(|v| fast_float2::parse(v).ok()),
            };
        }
        Fill::None
    }

    pub(crate) fn write(&self) -> XmlNode {
        let mut node = XmlNode::new("fill");
        match self {
            Fill::None => {
                node.append_element("patternFill")
                    .set_attribute("patternType", "none");
            },
            Fill::Pattern {
                pattern_type,
                fg_color,
                bg_color,
            } => {
                let pattern = node.append_element("patternFill");
                pattern.set_attribute("patternType", pattern_type.clone());
                if let Some(fg) = fg_color {
                    pattern.append_child(fg.write("fgColor"));
                }
                if let Some(bg) = bg_color {
                    pattern.append_child(bg.write("bgColor"));
                }
            },
            Fill::Gradient {
                gradient_type,
                degree,
            } => {
                let gradient = node.append_element("gradientFill");
                if let Some(kind) = gradient_type {
                    gradient.set_attribute("type", kind.clone());
                }
                if let Some(degree) = degree {
                    gradient.set_attribute("degree", ryu::Buffer::new().format(*degree));
                }
            },
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_round_trip() {
        for fill in [
            Fill::None,
            Fill::gray125(),
            Fill::solid(Color::rgb("FFFF0000")),
            Fill::Pattern {
                pattern_type: "lightGray".to_string(),
                fg_color: Some(Color::Indexed(8)),
                bg_color: Some(Color::Auto),
            },
            Fill::Gradient {
                gradient_type: Some("linear".to_string()),
                degree: Some(90.0),
            },
        ] {
            assert_eq!(Fill::read(&fill.write()), fill);
        }
    }

    #[test]
    fn missing_pattern_reads_as_none() {
        assert_eq!(Fill::read(&XmlNode::new("fill")), Fill::None);
    }

    #[test]
    fn solid_predicate() {
        assert!(Fill::solid(Color::Auto).is_solid());
        assert!(!Fill::None.is_solid());
        assert!(!Fill::gray125().is_solid());
    }
}
