//! Parser module for depdot.
//!
//! Reads the line-oriented dependency description language into a
//! [`DependencyGraph`](crate::graph::DependencyGraph).
//!
//! # Input Format
//!
//! ```text
//! # comment, ignored anywhere
//! 1: apple                 declaration, number >= 1
//! 2: blueberry
//! options
//! color_next cleanup       space separated, repeatable
//! dependencies
//! 1 -> 2                   1 is depended upon by 2
//! 2 <- 1                   2 depends on 1 (same edge)
//! ```
//!
//! # Example
//!
//! ```
//! use depdot::parser::{parse_str, RenderOption};
//!
//! let graph = parse_str("1: apple\noptions\ncircular\n").unwrap();
//! assert_eq!(graph.options(), &[RenderOption::Circular]);
//! ```

pub mod dsl;
pub mod types;

// Re-export commonly used types for convenience
pub use dsl::{
    classify, parse_declaration, parse_dependency, parse_file, parse_lines, parse_number_list,
    parse_options, parse_options_into, parse_str, LineKind, ParseError, ParseErrorKind,
    ParseResult, Section,
};

pub use types::RenderOption;
