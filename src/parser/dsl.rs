//! Line parser for the dependency description language.
//!
//! Input is processed one trimmed line at a time through a three-state
//! machine. Blank lines and `#` comments are skipped everywhere, the literal
//! lines `options` and `dependencies` switch sections, and every other line
//! is handed to the handler of the current section:
//!
//! ```text
//! 1: apple
//! 2: blueberry
//! options
//! color_next cleanup
//! dependencies
//! 1 -> 2
//! ```
//!
//! The first error aborts the whole parse; no partially built graph is
//! returned.

use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use super::types::RenderOption;
use crate::graph::{DependencyGraph, EdgeKind, Node, NodeId};

/// Coarse classification of parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Wrong number of segments around `:`, `->` or `<-`
    Format,
    /// Not an integer, or an integer out of range
    Value,
    /// Option keyword not in the catalog
    UnknownOption,
    /// Node number not declared
    Reference,
    /// A node listed as its own dependency
    SelfReference,
    /// The input could not be read
    Io,
}

/// Errors that can occur while parsing an input description.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// A line didn't split into the expected segments.
    #[error("could not parse {what}: {line}")]
    Format {
        /// What the line was parsed as ("declaration", "dependency")
        what: &'static str,
        /// The offending line
        line: String,
    },

    /// Text where an integer was expected.
    #[error("could not parse {text} as a number")]
    InvalidNumber {
        /// The offending text
        text: String,
    },

    /// A declaration number below 1.
    #[error("number in declaration less than 1: {number}")]
    OutOfRange {
        /// The declared number
        number: i64,
    },

    /// An option keyword outside the catalog.
    #[error("unrecognized option: {token}")]
    UnknownOption {
        /// The offending token
        token: String,
    },

    /// A dependency naming a node that was never declared.
    #[error("reference to {number} not found")]
    Reference {
        /// The missing node number
        number: NodeId,
    },

    /// A dependency from a node to itself.
    #[error("{number} cannot refer to itself")]
    SelfReference {
        /// The node number
        number: NodeId,
    },

    /// Any of the above, tagged with the 1-based input line it came from.
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number in the input
        line: usize,
        /// The underlying error
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Returns the kind of the underlying error, looking through line tags.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::IoError(_) => ParseErrorKind::Io,
            ParseError::Format { .. } => ParseErrorKind::Format,
            ParseError::InvalidNumber { .. } | ParseError::OutOfRange { .. } => {
                ParseErrorKind::Value
            }
            ParseError::UnknownOption { .. } => ParseErrorKind::UnknownOption,
            ParseError::Reference { .. } => ParseErrorKind::Reference,
            ParseError::SelfReference { .. } => ParseErrorKind::SelfReference,
            ParseError::Line { source, .. } => source.kind(),
        }
    }

    /// The 1-based input line, if the error has been tagged with one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Line { line, .. } => Some(*line),
            _ => None,
        }
    }

    fn at_line(self, line: usize) -> Self {
        ParseError::Line {
            line,
            source: Box::new(self),
        }
    }

    fn format(what: &'static str, line: &str) -> Self {
        ParseError::Format {
            what,
            line: line.to_string(),
        }
    }

    fn invalid_number(text: &str) -> Self {
        ParseError::InvalidNumber {
            text: text.to_string(),
        }
    }
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Section of the input currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Node declarations, `<number>: <name>` (initial section)
    #[default]
    Declaration,
    /// Space-separated option keywords
    Options,
    /// `<number> -> <list>` and `<number> <- <list>` edges
    Dependency,
}

impl Section {
    /// The section a header line switches to, if `line` is a header.
    pub fn from_header(line: &str) -> Option<Section> {
        match line {
            "options" => Some(Section::Options),
            "dependencies" => Some(Section::Dependency),
            _ => None,
        }
    }
}

/// What a single trimmed line means to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank or comment; ignored and leaves the section unchanged
    Skip,
    /// Section header; switches section and carries no content
    Header(Section),
    /// Content for the current section's handler
    Content(&'a str),
}

/// Classifies one line. Surrounding whitespace is ignored.
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return LineKind::Skip;
    }
    match Section::from_header(line) {
        Some(section) => LineKind::Header(section),
        None => LineKind::Content(line),
    }
}

/// Parses a sequence of already-read lines into a graph.
///
/// # Example
///
/// ```rust
/// use depdot::parser::parse_lines;
///
/// let lines = ["1: apple", "2: blueberry", "dependencies", "1 -> 2"];
/// let graph = parse_lines(lines).unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.node(1).unwrap().provides, vec![2]);
/// ```
pub fn parse_lines<I, S>(lines: I) -> ParseResult<DependencyGraph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut graph = DependencyGraph::new();
    let mut section = Section::default();

    for (index, raw) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        match classify(raw.as_ref()) {
            LineKind::Skip => {}
            LineKind::Header(next) => {
                debug!(line = line_number, from = ?section, to = ?next, "section change");
                section = next;
            }
            LineKind::Content(content) => {
                apply_line(&mut graph, section, content).map_err(|e| e.at_line(line_number))?;
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        options = graph.options().len(),
        "parsed graph"
    );
    Ok(graph)
}

/// Parses a whole input text.
pub fn parse_str(content: &str) -> ParseResult<DependencyGraph> {
    parse_lines(content.lines())
}

/// Reads and parses an input file.
pub fn parse_file(path: &Path) -> ParseResult<DependencyGraph> {
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "read input");
    parse_str(&content)
}

fn apply_line(graph: &mut DependencyGraph, section: Section, line: &str) -> ParseResult<()> {
    match section {
        Section::Declaration => {
            let node = parse_declaration(line)?;
            if let Some(previous) = graph.node(node.number) {
                warn!(
                    number = node.number,
                    previous = %previous.name,
                    name = %node.name,
                    "declaration overwrites existing node"
                );
            }
            trace!(number = node.number, name = %node.name, "declared node");
            graph.insert_node(node);
        }
        Section::Options => {
            for option in parse_options(line)? {
                graph.push_option(option);
            }
        }
        Section::Dependency => parse_dependency(line, graph)?,
    }
    Ok(())
}

/// Parses a `<number>: <name>` declaration.
///
/// The line must contain exactly one `:`, so names cannot contain colons.
/// The number must be an integer >= 1; the name is trimmed.
///
/// # Example
///
/// ```rust
/// use depdot::parser::parse_declaration;
///
/// let node = parse_declaration("   1:  some name      ").unwrap();
/// assert_eq!(node.number, 1);
/// assert_eq!(node.name, "some name");
///
/// assert!(parse_declaration("1: a: b").is_err());
/// ```
pub fn parse_declaration(line: &str) -> ParseResult<Node> {
    let (left, right) = match line.split_once(':') {
        Some((left, right)) if !right.contains(':') => (left, right),
        _ => return Err(ParseError::format("declaration", line)),
    };

    let item = left.trim();
    let number: i64 = item
        .parse()
        .map_err(|_| ParseError::invalid_number(item))?;
    if number < 1 {
        return Err(ParseError::OutOfRange { number });
    }

    Ok(Node::new(number as NodeId, right.trim()))
}

/// Parses an options line, appending each resolved option to `out`.
///
/// Tokens are separated by single spaces; empty tokens left by repeated
/// whitespace are skipped. Stops at the first unknown keyword, leaving the
/// options resolved before it in `out`.
pub fn parse_options_into(line: &str, out: &mut Vec<RenderOption>) -> ParseResult<()> {
    for word in line.split(' ') {
        let item = word.trim();
        if item.is_empty() {
            continue;
        }
        match RenderOption::lookup(item) {
            Some(option) => out.push(option),
            None => {
                return Err(ParseError::UnknownOption {
                    token: item.to_string(),
                })
            }
        }
    }
    Ok(())
}

/// Parses an options line into a list of options.
///
/// # Example
///
/// ```rust
/// use depdot::parser::{parse_options, RenderOption};
///
/// let options = parse_options("color_next  color_complete").unwrap();
/// assert_eq!(options, vec![RenderOption::ColorNext, RenderOption::ColorComplete]);
/// ```
pub fn parse_options(line: &str) -> ParseResult<Vec<RenderOption>> {
    let mut options = Vec::new();
    parse_options_into(line, &mut options)?;
    Ok(options)
}

/// Parses a dependency line and adds its edges to `graph`.
///
/// `a -> b,c` records that `a` provides `b` and `c`; `a <- b,c` records
/// that `a` requires them. Every number must already be declared and none
/// may equal the left-hand number. Edges are added in list order until the
/// first failing entry.
pub fn parse_dependency(line: &str, graph: &mut DependencyGraph) -> ParseResult<()> {
    let (kind, left, right) = split_dependency(line)?;

    let item = left.trim();
    let number: NodeId = item
        .parse()
        .map_err(|_| ParseError::invalid_number(item))?;
    if !graph.contains(number) {
        return Err(ParseError::Reference { number });
    }

    for target in parse_number_list(right)? {
        if !graph.contains(target) {
            return Err(ParseError::Reference { number: target });
        }
        if target == number {
            return Err(ParseError::SelfReference { number });
        }

        match kind {
            EdgeKind::Provide => graph.add_provide(number, target),
            EdgeKind::Require => graph.add_require(number, target),
        };
        trace!(from = number, to = target, %kind, "added edge");
    }
    Ok(())
}

fn split_dependency(line: &str) -> ParseResult<(EdgeKind, &str, &str)> {
    let provides = line.matches(EdgeKind::Provide.arrow()).count();
    let requires = line.matches(EdgeKind::Require.arrow()).count();

    let kind = match (provides, requires) {
        (1, 0) => EdgeKind::Provide,
        (0, 1) => EdgeKind::Require,
        _ => return Err(ParseError::format("dependency", line)),
    };

    match line.split_once(kind.arrow()) {
        Some((left, right)) => Ok((kind, left, right)),
        None => Err(ParseError::format("dependency", line)),
    }
}

/// Parses a comma-separated list of node numbers.
///
/// Blank entries are skipped.
///
/// # Example
///
/// ```rust
/// use depdot::parser::parse_number_list;
///
/// assert_eq!(parse_number_list("  1, 22  ").unwrap(), vec![1, 22]);
/// assert!(parse_number_list("1,junk").is_err());
/// ```
pub fn parse_number_list(text: &str) -> ParseResult<Vec<NodeId>> {
    let mut numbers = Vec::new();

    for item in text.split(',') {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            continue;
        }
        let number = trimmed
            .parse()
            .map_err(|_| ParseError::invalid_number(item))?;
        numbers.push(number);
    }

    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_graph() -> DependencyGraph {
        parse_lines(["1: apple", "2: blueberry", "3: cranberry"]).unwrap()
    }

    // Declarations

    #[test]
    fn test_parse_declaration_valid() {
        let node = parse_declaration("   1:  some name      ").unwrap();
        assert!(node.equal(&Node::new(1, "some name")));
    }

    #[test]
    fn test_parse_declaration_no_colon() {
        let err = parse_declaration("   1  some name      ").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Format);
    }

    #[test]
    fn test_parse_declaration_too_many_colons() {
        let err = parse_declaration(" :  1  some : name      ").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Format);
        assert!(err.to_string().contains("some : name"));
    }

    #[test]
    fn test_parse_declaration_not_a_number() {
        let err = parse_declaration("   apple  : some name      ").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Value);
        assert_eq!(err.to_string(), "could not parse apple as a number");
    }

    #[test]
    fn test_parse_declaration_below_one() {
        let err = parse_declaration("   -1  : some name      ").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Value);

        let err = parse_declaration("0: zero").unwrap_err();
        assert!(matches!(err, ParseError::OutOfRange { number: 0 }));
    }

    #[test]
    fn test_parse_declaration_empty_name() {
        let node = parse_declaration("4:").unwrap();
        assert_eq!(node.number, 4);
        assert_eq!(node.name, "");
    }

    // Options

    #[test]
    fn test_parse_options_single() {
        assert_eq!(
            parse_options("  color_next  ").unwrap(),
            vec![RenderOption::ColorNext]
        );
    }

    #[test]
    fn test_parse_options_multiple() {
        assert_eq!(
            parse_options("color_next color_complete").unwrap(),
            vec![RenderOption::ColorNext, RenderOption::ColorComplete]
        );
    }

    #[test]
    fn test_parse_options_unknown() {
        let err = parse_options("junk").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnknownOption);
        assert_eq!(err.to_string(), "unrecognized option: junk");
    }

    #[test]
    fn test_parse_options_partial_before_error() {
        let mut options = Vec::new();
        let result = parse_options_into("circular junk cleanup", &mut options);

        assert!(result.is_err());
        assert_eq!(options, vec![RenderOption::Circular]);
    }

    // Number lists

    #[test]
    fn test_parse_number_list() {
        assert_eq!(parse_number_list("1").unwrap(), vec![1]);
        assert_eq!(parse_number_list("1,22").unwrap(), vec![1, 22]);
        assert_eq!(parse_number_list("  1, 22  ").unwrap(), vec![1, 22]);
        assert_eq!(parse_number_list("1,,3,").unwrap(), vec![1, 3]);
        assert!(parse_number_list("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_number_list_invalid() {
        let err = parse_number_list("1,junk").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Value);
        assert!(parse_number_list("1,-2").is_err());
    }

    // Dependencies

    #[test]
    fn test_parse_dependency_provide_list() {
        let mut graph = fruit_graph();
        parse_dependency("1 -> 2,3", &mut graph).unwrap();

        assert_eq!(graph.node(1).unwrap().provides, vec![2, 3]);
        assert_eq!(graph.node(2).unwrap().requires, vec![1]);
        assert_eq!(graph.node(3).unwrap().requires, vec![1]);
        assert!(graph.node(1).unwrap().requires.is_empty());
    }

    #[test]
    fn test_parse_dependency_require_list() {
        let mut graph = fruit_graph();
        parse_dependency(" 3 <- 1, 2 ", &mut graph).unwrap();

        assert_eq!(graph.node(3).unwrap().requires, vec![1, 2]);
        assert_eq!(graph.node(1).unwrap().provides, vec![3]);
        assert_eq!(graph.node(2).unwrap().provides, vec![3]);
    }

    #[test]
    fn test_parse_dependency_repeated_is_idempotent() {
        let mut graph = fruit_graph();
        parse_dependency("1 -> 2", &mut graph).unwrap();
        parse_dependency("1 -> 2,2", &mut graph).unwrap();

        assert_eq!(graph.node(1).unwrap().provides, vec![2]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parse_dependency_self_reference() {
        let mut graph = fruit_graph();
        let err = parse_dependency("1 <- 1", &mut graph).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::SelfReference);

        let err = parse_dependency("2 -> 3,2", &mut graph).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::SelfReference);
    }

    #[test]
    fn test_parse_dependency_unknown_reference() {
        let mut graph = fruit_graph();

        let err = parse_dependency("9 -> 1", &mut graph).unwrap_err();
        assert!(matches!(err, ParseError::Reference { number: 9 }));

        let err = parse_dependency("1 -> 9", &mut graph).unwrap_err();
        assert!(matches!(err, ParseError::Reference { number: 9 }));
    }

    #[test]
    fn test_parse_dependency_stops_at_first_error() {
        let mut graph = fruit_graph();
        assert!(parse_dependency("1 -> 2,9,3", &mut graph).is_err());

        assert_eq!(graph.node(1).unwrap().provides, vec![2]);
    }

    #[test]
    fn test_parse_dependency_format_errors() {
        let mut graph = fruit_graph();
        for line in ["1 2", "1 -> 2 -> 3", "1 -> 2 <- 3", "1 <-> 2", "1 <- 2 <- 3"] {
            let err = parse_dependency(line, &mut graph).unwrap_err();
            assert_eq!(err.kind(), ParseErrorKind::Format, "line: {}", line);
        }
    }

    #[test]
    fn test_parse_dependency_left_not_a_number() {
        let mut graph = fruit_graph();
        let err = parse_dependency("1,2 -> 3", &mut graph).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Value);
    }

    // State machine

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), LineKind::Skip);
        assert_eq!(classify("   "), LineKind::Skip);
        assert_eq!(classify("  # options"), LineKind::Skip);
        assert_eq!(classify(" options "), LineKind::Header(Section::Options));
        assert_eq!(classify("dependencies"), LineKind::Header(Section::Dependency));
        assert_eq!(classify("Options"), LineKind::Content("Options"));
        assert_eq!(classify(" 1: a "), LineKind::Content("1: a"));
    }

    #[test]
    fn test_parse_lines_full() {
        let lines = [
            "# fruit",
            "  1: apple",
            "  2: blueberry",
            "  5: cranberry ",
            "",
            "options",
            "color_next cleanup",
            "dependencies",
            " 1 -> 2",
            " 5 <- 2",
            "options",
            "color_next",
        ];
        let graph = parse_lines(lines).unwrap();

        assert_eq!(graph.order_nodes(), vec![1, 2, 5]);
        assert_eq!(graph.node(5).unwrap().name, "cranberry");
        assert_eq!(graph.node(2).unwrap().provides, vec![5]);
        assert_eq!(
            graph.options(),
            &[
                RenderOption::ColorNext,
                RenderOption::Cleanup,
                RenderOption::ColorNext
            ]
        );
    }

    #[test]
    fn test_parse_lines_section_switch_back_to_declaration_impossible() {
        // once in options, declarations are read as option keywords
        let err = parse_lines(["options", "1: apple"]).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnknownOption);
    }

    #[test]
    fn test_parse_lines_forward_reference() {
        let err = parse_lines(["1: apple", "dependencies", "1 -> 2", "2: b"]).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Reference);
    }

    #[test]
    fn test_parse_lines_reports_line_number() {
        let err = parse_lines(["1: apple", "", "two: blueberry"]).unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.kind(), ParseErrorKind::Value);
        assert_eq!(err.to_string(), "line 3: could not parse two as a number");
    }

    #[test]
    fn test_parse_lines_duplicate_number_overwrites() {
        let graph = parse_lines(["1: apple", "1: apricot"]).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node(1).unwrap().name, "apricot");
    }

    #[test]
    fn test_parse_str() {
        let graph = parse_str("1: apple\r\n2: blueberry\r\ndependencies\r\n2 <- 1\r\n").unwrap();
        assert_eq!(graph.node(1).unwrap().provides, vec![2]);
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(Path::new("does/not/exist.deps")).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Io);
    }
}
