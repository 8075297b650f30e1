//! Figure attributes carried in an image destination.
//!
//! Markdown has no syntax for figure options, so they ride along as a query
//! string: `![alt](plot.png?width=0.5&caption=A%20plot&label=fig:plot)`.

use bstr::ByteSlice;
use smallvec::SmallVec;
use std::borrow::Cow;

/// A problem found while reading the attributes.  Problems are reported and
/// skipped; they never stop the figure from being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeProblem<'d> {
    /// A piece of the query without `=`.
    Invalid(&'d [u8]),

    /// A `key=value` pair with a key that is not understood.
    Unsupported(&'d [u8]),
}

/// The attributes of a figure.  Missing attributes stay `None` and are
/// written as empty fields.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImageAttributes<'d> {
    /// The destination up to the first `?`.
    pub path: &'d [u8],

    /// Fraction of `\textwidth`.
    pub width: Option<&'d [u8]>,

    /// Argument to `\label`.
    pub label: Option<&'d [u8]>,

    /// Argument to `\caption`, with `%20` turned into spaces.
    pub caption: Option<Cow<'d, [u8]>>,

    /// Everything that could not be used, in order of appearance.
    pub problems: SmallVec<[AttributeProblem<'d>; 2]>,
}

impl<'d> ImageAttributes<'d> {
    /// Reads the attributes from an image destination.
    ///
    /// The query is split on `&` and each piece on its first `=`.  Only
    /// `width`, `label` and `caption` are understood; a repeated key keeps
    /// its last value.  Percent-encoding is not decoded, except for `%20` in
    /// captions.
    ///
    /// ```
    /// # use mdlatex::latex::image::{AttributeProblem, ImageAttributes};
    /// let attributes = ImageAttributes::parse(b"pic.png?width=0.5&caption=A%20B&bogus=1");
    /// assert_eq!(attributes.path, b"pic.png");
    /// assert_eq!(attributes.width, Some(&b"0.5"[..]));
    /// assert_eq!(attributes.caption.as_deref(), Some(&b"A B"[..]));
    /// assert_eq!(&attributes.problems[..], &[AttributeProblem::Unsupported(b"bogus")]);
    /// ```
    pub fn parse(destination: &'d [u8]) -> Self {
        let (path, query) = match destination.split_once_str("?") {
            Some((path, query)) => (path, Some(query)),
            None => (destination, None),
        };

        let mut attributes = ImageAttributes {
            path,
            ..ImageAttributes::default()
        };

        let query = match query {
            Some(query) => query,
            None => return attributes,
        };

        for piece in query.split_str("&") {
            if piece.is_empty() {
                continue;
            }
            let (key, value) = match piece.split_once_str("=") {
                Some(pair) => pair,
                None => {
                    attributes.problems.push(AttributeProblem::Invalid(piece));
                    continue;
                }
            };
            match key {
                b"width" => attributes.width = Some(value),
                b"label" => attributes.label = Some(value),
                b"caption" => attributes.caption = Some(decode_spaces(value)),
                _ => attributes.problems.push(AttributeProblem::Unsupported(key)),
            }
        }

        attributes
    }
}

/// Bytes that could close or escape a figure argument.
const ARGUMENT_BREAKERS: &[u8] = b"{}\\%#\r\n";

/// Prepares a path, width or label for use as a figure argument.
///
/// These are written without escaping, so a file name like `my_plot.png`
/// reaches `\includegraphics` as it is.  Bytes that could end the argument or
/// start a command are dropped instead.
///
/// ```
/// # use mdlatex::latex::image::argument;
/// assert_eq!(&argument(b"my_plot.png")[..], b"my_plot.png");
/// assert_eq!(&argument(b"a}\\input{b}")[..], b"ainputb");
/// ```
pub fn argument(value: &[u8]) -> Cow<'_, [u8]> {
    if value.find_byteset(ARGUMENT_BREAKERS).is_none() {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .iter()
            .copied()
            .filter(|b| !ARGUMENT_BREAKERS.contains(b))
            .collect(),
    )
}

fn decode_spaces(value: &[u8]) -> Cow<'_, [u8]> {
    if value.find("%20").is_some() {
        Cow::Owned(value.replace("%20", " "))
    } else {
        Cow::Borrowed(value)
    }
}
