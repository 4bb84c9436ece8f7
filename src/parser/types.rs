//! Option Registry.
//!
//! The closed catalog of rendering options that may appear in the
//! `options` section of an input file.

use std::fmt;
use std::str::FromStr;

/// A named rendering/behavior flag selected in the input.
///
/// Options carry an associated color; flags that only toggle behavior
/// have an empty color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderOption {
    /// Remove completed work from the rendered graph
    Cleanup,
    /// Allow circular dependencies
    Circular,
    /// Highlight nodes that can be worked on next
    ColorNext,
    /// Highlight completed nodes
    ColorComplete,
    /// Highlight urgent nodes
    ColorUrgent,
}

impl RenderOption {
    /// Every recognized option, in catalog order.
    pub const ALL: [RenderOption; 5] = [
        RenderOption::Cleanup,
        RenderOption::Circular,
        RenderOption::ColorNext,
        RenderOption::ColorComplete,
        RenderOption::ColorUrgent,
    ];

    /// The keyword used for this option in the input language.
    pub fn name(&self) -> &'static str {
        match self {
            RenderOption::Cleanup => "cleanup",
            RenderOption::Circular => "circular",
            RenderOption::ColorNext => "color_next",
            RenderOption::ColorComplete => "color_complete",
            RenderOption::ColorUrgent => "color_urgent",
        }
    }

    /// The Graphviz color associated with this option, or `""`.
    pub fn color(&self) -> &'static str {
        match self {
            RenderOption::Cleanup | RenderOption::Circular => "",
            RenderOption::ColorNext => "lightskyblue",
            RenderOption::ColorComplete => "springgreen",
            RenderOption::ColorUrgent => "crimson",
        }
    }

    /// Looks up a keyword in the catalog.
    ///
    /// Returns `None` for anything that isn't an exact keyword match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depdot::parser::RenderOption;
    ///
    /// assert_eq!(RenderOption::lookup("circular"), Some(RenderOption::Circular));
    /// assert_eq!(RenderOption::lookup("Circular"), None);
    /// ```
    pub fn lookup(keyword: &str) -> Option<RenderOption> {
        Self::ALL.iter().copied().find(|o| o.name() == keyword)
    }
}

impl fmt::Display for RenderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RenderOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RenderOption::lookup(s).ok_or_else(|| format!("unrecognized option: {}", s))
    }
}
