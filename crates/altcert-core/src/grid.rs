//! Column-aligned text view of a batch of sequences.
//!
//! Each sequence is one row and each integer of the batch universe one
//! 4-wide column, so shared values line up vertically:
//!
//! ```text
//!  List:   1   2   3   4   5
//!   A_1:   1           4
//!   A_2:       2       4   5
//! ```

use crate::sequence::{universe_of, Sequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Print a header row listing every column value.
    pub header: bool,
    /// Mark absent values with `·` instead of blanks.
    pub show_dots: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            header: true,
            show_dots: false,
        }
    }
}

/// Render `sequences` as a grid. Rows are named `A_1..A_k` unless `names`
/// supplies at least one name per sequence.
pub fn render_grid(sequences: &[Sequence], names: Option<&[&str]>, options: GridOptions) -> String {
    if sequences.is_empty() {
        return "No lists to show\n".to_string();
    }
    let Some((min, max)) = universe_of(sequences) else {
        return "All lists are empty\n".to_string();
    };

    let names: Vec<String> = match names {
        Some(names) if names.len() >= sequences.len() => {
            names.iter().map(|n| n.to_string()).collect()
        }
        _ => (1..=sequences.len()).map(|i| format!("A_{i}")).collect(),
    };

    let mut out = String::new();
    if options.header {
        out.push_str(&format!("{:>5}:", "List"));
        for v in min..=max {
            out.push_str(&format!("{v:>4}"));
        }
        out.push('\n');
    }

    let blank = if options.show_dots { "   ·" } else { "    " };
    for (seq, name) in sequences.iter().zip(&names) {
        out.push_str(&format!("{name:>5}:"));
        for v in min..=max {
            if seq.contains(v) {
                out.push_str(&format!("{v:>4}"));
            } else {
                out.push_str(blank);
            }
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::sequences_from;

    #[test]
    fn test_render_with_header_and_dots() {
        let seqs = sequences_from(vec![vec![1, 3], vec![2, 3]]);
        let grid = render_grid(
            &seqs,
            None,
            GridOptions {
                header: true,
                show_dots: true,
            },
        );
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines[0], " List:   1   2   3");
        assert_eq!(lines[1], "  A_1:   1   ·   3");
        assert_eq!(lines[2], "  A_2:   ·   2   3");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_render_custom_names_without_header() {
        let seqs = sequences_from(vec![vec![5], vec![6]]);
        let grid = render_grid(
            &seqs,
            Some(&["left", "right"][..]),
            GridOptions {
                header: false,
                show_dots: false,
            },
        );
        assert_eq!(grid, " left:   5    \nright:       6\n\n");
    }

    #[test]
    fn test_render_wide_and_negative_values() {
        let seqs = sequences_from(vec![vec![-1, 1], vec![0, 1]]);
        let grid = render_grid(&seqs, None, GridOptions::default());
        assert_eq!(
            grid,
            " List:  -1   0   1\n  A_1:  -1       1\n  A_2:       0   1\n\n"
        );
    }

    #[test]
    fn test_render_empty_inputs() {
        assert_eq!(
            render_grid(&[], None, GridOptions::default()),
            "No lists to show\n"
        );
        let empty = sequences_from(vec![Vec::<i64>::new()]);
        assert_eq!(
            render_grid(&empty, None, GridOptions::default()),
            "All lists are empty\n"
        );
    }
}
