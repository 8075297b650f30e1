//! Configuration for the renderer.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{self, Debug, Formatter};
use std::panic::RefUnwindSafe;
use std::sync::Arc;

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Umbrella options struct.
///
/// An `Options` value is read-only while rendering and can be reused for any
/// number of documents.
pub struct Options<'c> {
    /// Shift every heading by this many levels.  With an offset of 1, a level
    /// 1 heading becomes `\subsection` rather than `\section`.  Negative
    /// offsets are allowed; the result is clamped to the six levels
    /// available.
    ///
    /// ```rust
    /// # use mdlatex::Options;
    /// # use mdlatex::latex::heading::heading_command;
    /// let mut options = Options::default();
    /// assert_eq!(heading_command(1, &options), "\\section{");
    ///
    /// options.heading_level_offset = 1;
    /// assert_eq!(heading_command(1, &options), "\\subsection{");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub heading_level_offset: i32,

    /// Use the starred, unnumbered sectioning commands.
    ///
    /// ```rust
    /// # use mdlatex::Options;
    /// # use mdlatex::latex::heading::heading_command;
    /// let mut options = Options::default();
    /// options.no_heading_numbering = true;
    /// assert_eq!(heading_command(2, &options), "\\subsection*{");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub no_heading_numbering: bool,

    /// Replace the default preamble.  It is emitted verbatim and should not
    /// contain `\begin{document}`, which is added automatically.
    pub preamble: Option<Vec<u8>>,

    /// Render potentially unsafe content: links to dangerous URLs, raw text,
    /// and code block lines that could close the verbatim environment early.
    #[cfg_attr(feature = "bon", builder(default))]
    pub r#unsafe: bool,

    /// Declare the non-ASCII characters used in the document in the preamble,
    /// replacing each with what the mapper returns.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use mdlatex::Options;
    /// let mut options = Options::default();
    /// options.unicode_mapper = Some(Arc::new(|c: char| match c {
    ///     'é' => Some("\\'e".to_string()),
    ///     _ => None,
    /// }));
    /// ```
    pub unicode_mapper: Option<Arc<dyn UnicodeMapper + 'c>>,

    /// Emit `\maketitle` right after `\begin{document}`.
    #[cfg_attr(feature = "bon", builder(default))]
    pub make_title: bool,

    /// Decides which link destinations are dangerous.  When unset,
    /// [`is_dangerous_url`](crate::latex::safety::is_dangerous_url) is used.
    /// Ignored in unsafe mode.
    pub dangerous_url: Option<Arc<dyn UrlFilter + 'c>>,
}

impl<'c> Options<'c> {
    /// Whether `url` may be written into the output.
    pub(crate) fn url_allowed(&self, url: &[u8]) -> bool {
        if self.r#unsafe {
            return true;
        }
        match self.dangerous_url {
            Some(ref filter) => !filter.is_dangerous(url),
            None => !crate::latex::safety::is_dangerous_url(url),
        }
    }
}

/// Trait for declaring non-ASCII characters in the preamble.
pub trait UnicodeMapper: RefUnwindSafe + Send + Sync {
    /// Returns the LaTeX replacement for `c`, or `None` to leave it undeclared.
    fn declare(&self, c: char) -> Option<String>;
}

impl<'c> Debug for dyn UnicodeMapper + 'c {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("<dyn UnicodeMapper>")
    }
}

impl<F> UnicodeMapper for F
where
    F: Fn(char) -> Option<String>,
    F: RefUnwindSafe + Send + Sync,
{
    fn declare(&self, c: char) -> Option<String> {
        self(c)
    }
}

/// Trait for judging link destinations.
pub trait UrlFilter: RefUnwindSafe + Send + Sync {
    /// Returns whether `url` must not be written into the output.
    fn is_dangerous(&self, url: &[u8]) -> bool;
}

impl<'c> Debug for dyn UrlFilter + 'c {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("<dyn UrlFilter>")
    }
}

impl<F> UrlFilter for F
where
    F: Fn(&[u8]) -> bool,
    F: RefUnwindSafe + Send + Sync,
{
    fn is_dangerous(&self, url: &[u8]) -> bool {
        self(url)
    }
}
