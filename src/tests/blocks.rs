use super::*;
use crate::nodes::{NodeCodeBlock, NodeHeading, NodeList};
use ntest::test_case;
use pretty_assertions::assert_eq;

fn heading<'a>(f: &Fixture<'a>, level: u8, text: &str) -> &'a AstNode<'a> {
    f.node(NodeValue::Heading(NodeHeading { level }), &[f.text(text)])
}

fn list<'a>(f: &Fixture<'a>, ordered: bool, items: &[&'a AstNode<'a>]) -> &'a AstNode<'a> {
    f.node(NodeValue::List(NodeList { ordered, start: 1 }), items)
}

fn item<'a>(f: &Fixture<'a>, children: &[&'a AstNode<'a>]) -> &'a AstNode<'a> {
    f.node(NodeValue::Item, children)
}

fn text_block<'a>(f: &Fixture<'a>, text: &str) -> &'a AstNode<'a> {
    f.node(NodeValue::TextBlock, &[f.text(text)])
}

#[test_case(1, 0, 0, "\\section{")]
#[test_case(2, 0, 1, "\\subsection{")]
#[test_case(3, 0, 2, "\\subsubsection{")]
#[test_case(4, 0, 3, "\\paragraph{")]
#[test_case(5, 0, 4, "\\subparagraph{")]
#[test_case(6, 0, 5, "\\textbf{\n")]
#[test_case(1, 2, 2, "\\subsubsection{")]
#[test_case(5, 3, 5, "\\textbf{\n")]
fn heading_levels(level: u8, offset: i32, index: usize, command: &str) {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let mut options = options();
    options.heading_level_offset = offset;

    assert_eq!(
        f.body(&[heading(&f, level, "Title")], &options),
        format!(
            "% mdlatex: heading start - level {}\n{}Title}}\n% mdlatex: heading end\n",
            index, command
        )
    );
}

#[test]
fn negative_offset_clamps_to_section() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let mut options = options();
    options.heading_level_offset = -3;

    assert_eq!(
        f.body(&[heading(&f, 2, "Top")], &options),
        "% mdlatex: heading start - level 0\n\\section{Top}\n% mdlatex: heading end\n"
    );
}

#[test]
fn unnumbered_headings() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let mut options = options();
    options.no_heading_numbering = true;

    assert_eq!(
        f.body(&[heading(&f, 1, "A"), heading(&f, 6, "B")], &options),
        concat!(
            "% mdlatex: heading start - level 0\n",
            "\\section*{A}\n",
            "% mdlatex: heading end\n",
            "% mdlatex: heading start - level 5\n",
            "\\textbf{\nB}\n",
            "% mdlatex: heading end\n",
        )
    );
}

#[test]
fn heading_text_is_escaped() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);

    assert_eq!(
        f.body(&[heading(&f, 1, "R&D_2")], &options()),
        "% mdlatex: heading start - level 0\n\\section{R\\&D\\_2}\n% mdlatex: heading end\n"
    );
}

#[test]
fn block_quote() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let quote = f.node(NodeValue::BlockQuote, &[f.paragraph(&[f.text("Yes.")])]);

    assert_eq!(
        f.body(&[quote], &options()),
        format!(
            "\n\\begin{{framed}}\n\\begin{{quote}}\n{}\\end{{quote}}\n\\end{{framed}}\n",
            para("Yes.")
        )
    );
}

#[test]
fn tight_lists() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let bullets = list(
        &f,
        false,
        &[
            item(&f, &[text_block(&f, "one")]),
            item(&f, &[text_block(&f, "two")]),
        ],
    );
    let numbers = list(&f, true, &[item(&f, &[text_block(&f, "first")])]);

    assert_eq!(
        f.body(&[bullets, numbers], &options()),
        concat!(
            "\n\\begin{itemize}\n",
            "\\item~ one\n",
            "\\item~ two\n",
            "\\end{itemize}\n",
            "\n\\begin{enumerate}\n",
            "\\item~ first\n",
            "\\end{enumerate}\n",
        )
    );
}

#[test]
fn nested_list_after_text_block() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let inner = list(&f, false, &[item(&f, &[text_block(&f, "inner")])]);
    let outer = list(&f, false, &[item(&f, &[text_block(&f, "outer"), inner])]);

    assert_eq!(
        f.body(&[outer], &options()),
        concat!(
            "\n\\begin{itemize}\n",
            "\\item~ outer\n",
            "\n\\begin{itemize}\n",
            "\\item~ inner\n",
            "\\end{itemize}\n",
            "\n",
            "\\end{itemize}\n",
        )
    );
}

#[test]
fn empty_text_block_adds_no_line() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let empty = f.node(NodeValue::TextBlock, &[]);
    let outer = list(&f, false, &[item(&f, &[empty, text_block(&f, "x")])]);

    assert_eq!(
        f.body(&[outer], &options()),
        "\n\\begin{itemize}\n\\item~ x\n\\end{itemize}\n"
    );
}

#[test]
fn loose_list_paragraphs() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let loose = list(&f, false, &[item(&f, &[f.paragraph(&[f.text("loose")])])]);

    assert_eq!(
        f.body(&[loose], &options()),
        concat!(
            "\n\\begin{itemize}\n",
            "\\item~ % mdlatex: paragraph start\n",
            "loose\n",
            "% mdlatex: paragraph end\n",
            "\n",
            "\\end{itemize}\n",
        )
    );
}

#[test]
fn paragraph_directly_in_list() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let odd = list(&f, true, &[f.paragraph(&[f.text("p")])]);

    assert_eq!(
        f.body(&[odd], &options()),
        concat!(
            "\n\\begin{enumerate}\n",
            "% mdlatex: paragraph start\n",
            "p\n",
            "% mdlatex: paragraph end\n",
            "\\end{enumerate}\n",
        )
    );
}

#[test]
fn thematic_break() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);

    assert_eq!(
        f.body(
            &[
                f.paragraph(&[f.text("a")]),
                f.node(NodeValue::ThematicBreak, &[]),
                f.paragraph(&[f.text("b")]),
            ],
            &options()
        ),
        format!("{}\n\\hrulefill\n\n{}", para("a"), para("b"))
    );
}

#[test]
fn html_block_is_skipped() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let html = f.node(
        NodeValue::HtmlBlock(NodeCodeBlock {
            lines: f.lines(&["<div>\n", "\\end{document}\n", "</div>\n"]),
        }),
        &[f.text("child text")],
    );

    assert_eq!(
        f.body(&[html], &options()),
        "\n% mdlatex: HTML block rendering unsupported, skipped\n"
    );
}
