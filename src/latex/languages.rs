//! Languages the verbatim environment can highlight.

/// Maximum length of a language tag considered for lookup; longer tags are
/// truncated before the lookup.
pub const MAX_LANGUAGE_LEN: usize = 10;

/// Language tags accepted as the argument of the verbatim environment.
/// Lookups are case-sensitive.
static SUPPORTED: phf::Set<&'static str> = phf::phf_set! {
    "abap", "acm", "acmscript", "acsl", "ada", "algol", "assembler", "awk", "basic", "clean",
    "idl", "c", "caml", "cil", "cobol", "comsol", "csh", "bash", "sh", "delphi", "eiffel",
    "elan", "erlang", "euphoria", "fortran", "gap", "go", "gcl", "gnuplot", "hansl", "haskell",
    "html", "inform", "java", "jvmis", "scala", "ksh", "lingo", "lisp", "elisp", "llvm",
    "logo", "lua", "make", "matlab", "mathematica", "mercury", "metapost", "miranda", "mizar",
    "ml", "mupad", "nastran", "ocl", "octave", "oz", "pascal", "perl", "php", "plasm",
    "postscript", "pov", "prolog", "promela", "pstricks", "python", "rexx", "oorexx", "reduce",
    "rsl", "ruby", "scilab", "shelxl", "simula", "sparql", "sql", "swift", "tcl", "s", "r",
    "sas", "tex", "vbscript", "verilog", "vhdl", "vrml", "xslt", "ant", "xml"
};

/// The language argument to emit for a fenced block's tag, if it is supported.
pub fn supported_language(tag: &[u8]) -> Option<&'static str> {
    let tag = &tag[..tag.len().min(MAX_LANGUAGE_LEN)];
    let tag = std::str::from_utf8(tag).ok()?;
    SUPPORTED.get_key(tag).copied()
}
