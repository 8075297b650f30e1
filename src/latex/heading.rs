//! Heading level selection.

use crate::Options;

/// Opening commands per effective level, numbered then unnumbered.
///
/// LaTeX has nothing below `\subparagraph`, so the deepest level falls back
/// to bold text in both columns.
const HEADING_TABLE: [[&str; 2]; 6] = [
    ["\\section{", "\\section*{"],
    ["\\subsection{", "\\subsection*{"],
    ["\\subsubsection{", "\\subsubsection*{"],
    ["\\paragraph{", "\\paragraph*{"],
    ["\\subparagraph{", "\\subparagraph*{"],
    ["\\textbf{", "\\textbf{"],
];

/// The deepest effective level.
pub const MAX_LEVEL: usize = HEADING_TABLE.len() - 1;

/// The 0-based effective level of a heading: `level - 1 + offset`,
/// saturating to `0..=MAX_LEVEL`.
pub fn effective_level(level: u8, offset: i32) -> usize {
    let shifted = i64::from(level) - 1 + i64::from(offset);
    shifted.clamp(0, MAX_LEVEL as i64) as usize
}

/// The command that opens a heading of the given source level.
pub fn heading_command(level: u8, options: &Options) -> &'static str {
    let effective = effective_level(level, options.heading_level_offset);
    HEADING_TABLE[effective][usize::from(options.no_heading_numbering)]
}
