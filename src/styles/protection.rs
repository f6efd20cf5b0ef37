//! Cell protection settings.

use crate::xml::XmlNode;

/// Protection applied to a cell while the sheet is protected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protection {
    /// Cell is locked against editing (schema default: true)
    pub locked: bool,
    /// Formula is hidden from the formula bar
    pub hidden: bool,
}

impl Default for Protection {
    fn default() -> Self {
        Protection {
            locked: true,
            hidden: false,
        }
    }
}

impl Protection {
    /// Create the default protection (locked, not hidden).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// An explicitly unlocked cell.
    pub fn unlocked() -> Self {
        Protection {
            locked: false,
            hidden: false,
        }
    }

    pub(crate) fn read(node: &XmlNode) -> Protection {
        Protection {
            locked: !matches!(node.attribute("locked"), Some("0") | Some("false")),
            hidden: node.bool_attribute("hidden"),
        }
    }

    pub(crate) fn write(&self) -> XmlNode {
        let mut node = XmlNode::new("protection");
        if !self.locked {
            node.set_attribute("locked", "0");
        }
        if self.hidden {
            node.set_attribute("hidden", "1");
        }
        node
    }
}
