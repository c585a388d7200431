//! Text instance format and solution output.
//!
//! Instances are `<n> <m>` followed by `m` lines `<u> <v>`; solutions are
//! `<colors> <0|1>` followed by one line of vertex colors.

use std::path::Path;

use chromaforge_core::{ChromaForgeError, ColoringResult, Graph, Result, VertexId};

/// Parses an instance from text.
///
/// Tokens are whitespace separated, so the line structure is not enforced
/// beyond the order of the numbers. Anything after the announced edges is
/// rejected.
///
/// # Errors
///
/// Returns [`ChromaForgeError::InvalidInput`] for a missing header, a
/// non-integer token, fewer edges than announced, trailing tokens, or an
/// endpoint outside `[0, n)`.
///
/// # Example
///
/// ```
/// use chromaforge::io::parse_instance;
///
/// let graph = parse_instance("4 4\n0 1\n1 2\n2 3\n3 0\n").unwrap();
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 4);
/// ```
pub fn parse_instance(text: &str) -> Result<Graph> {
    let mut tokens = text.split_whitespace();
    let n = next_number(&mut tokens, "vertex count")?;
    let m = next_number(&mut tokens, "edge count")?;

    let mut edges: Vec<(VertexId, VertexId)> = Vec::with_capacity(m);
    for i in 0..m {
        let what = format!("edge #{}", i);
        let u = next_number(&mut tokens, &what)?;
        let v = next_number(&mut tokens, &what)?;
        edges.push((u, v));
    }

    if let Some(extra) = tokens.next() {
        return Err(ChromaForgeError::InvalidInput(format!(
            "unexpected token {:?} after {} edges",
            extra, m
        )));
    }

    Graph::load(n, &edges)
}

/// Reads and parses an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        ChromaForgeError::InvalidInput(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_instance(&text)
}

/// Renders a result in the two-line output format, with a trailing newline.
///
/// ```
/// use chromaforge::io::format_solution;
/// use chromaforge::ColoringResult;
///
/// let result = ColoringResult::new(2, true, vec![0, 1, 0, 1]);
/// assert_eq!(format_solution(&result), "2 1\n0 1 0 1\n");
/// ```
pub fn format_solution(result: &ColoringResult) -> String {
    format!("{}\n", result)
}

fn next_number<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<usize> {
    let token = tokens.next().ok_or_else(|| {
        ChromaForgeError::InvalidInput(format!("unexpected end of input reading {}", what))
    })?;
    token.parse().map_err(|_| {
        ChromaForgeError::InvalidInput(format!("{}: {:?} is not a vertex index or count", what, token))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_blank_lines() {
        let graph = parse_instance("3 2\n\n0 1\n1 2\n\n\n").unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.neighbors(1), &[0, 2]);
    }

    #[test]
    fn test_parse_edgeless() {
        let graph = parse_instance("5 0").unwrap();

        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_missing_header() {
        let err = parse_instance("").unwrap_err();
        assert!(err.to_string().contains("vertex count"));

        let err = parse_instance("4").unwrap_err();
        assert!(err.to_string().contains("edge count"));
    }

    #[test]
    fn test_too_few_edges() {
        let err = parse_instance("3 2\n0 1\n").unwrap_err();

        assert!(matches!(err, ChromaForgeError::InvalidInput(_)));
        assert!(err.to_string().contains("edge #1"));
    }

    #[test]
    fn test_non_integer_token() {
        let err = parse_instance("3 1\n0 x\n").unwrap_err();
        assert!(err.to_string().contains("\"x\""));

        assert!(parse_instance("3 1\n0 -1\n").is_err());
    }

    #[test]
    fn test_trailing_tokens() {
        let err = parse_instance("3 1\n0 1\n1 2\n").unwrap_err();
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_out_of_range_vertex() {
        let err = parse_instance("3 1\n0 3\n").unwrap_err();
        assert!(matches!(err, ChromaForgeError::InvalidInput(_)));
    }

    #[test]
    fn test_self_loop_parses() {
        let graph = parse_instance("2 1\n1 1\n").unwrap();
        assert!(graph.has_self_loop());
    }

    #[test]
    fn test_missing_file() {
        let err = read_instance("/nonexistent/chromaforge/graph.txt").unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn test_format_empty_solution() {
        let result = ColoringResult::new(0, true, Vec::new());
        assert_eq!(format_solution(&result), "0 1\n\n");
    }
}
