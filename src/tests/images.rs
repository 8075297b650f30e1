use super::*;
use crate::nodes::NodeLink;
use pretty_assertions::assert_eq;

fn image<'a>(f: &Fixture<'a>, destination: &str, title: &str) -> &'a AstNode<'a> {
    f.node(
        NodeValue::Image(NodeLink {
            destination: destination.into(),
            title: title.into(),
        }),
        &[f.text("alt text")],
    )
}

fn figure(width: &str, path: &str, caption: &str, label: &str) -> String {
    format!(
        "\\begin{{figure}}[h]\n\t\\centering\n\t\\includegraphics[width={}\\textwidth]{{{}}}\n\t\\caption{{{}}}\n\t\\label{{{}}}\n\\end{{figure}}\n",
        width, path, caption, label
    )
}

#[test]
fn figure_with_attributes() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let destination = "plot.png?width=0.5&caption=A%20plot&label=fig:plot";

    assert_eq!(
        f.body(&[f.paragraph(&[image(&f, destination, "Plot")])], &options()),
        para(&format!(
            "\n% mdlatex: image destination: {}, title: Plot\n{}",
            destination,
            figure("0.5", "plot.png", "A plot", "fig:plot")
        ))
    );
}

#[test]
fn bare_path() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);

    assert_eq!(
        f.body(&[f.paragraph(&[image(&f, "cat.jpg", "")])], &options()),
        para(&format!(
            "\n% mdlatex: image destination: cat.jpg, title: \n{}",
            figure("", "cat.jpg", "", "")
        ))
    );
}

#[test]
fn problems_are_reported_in_order() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let destination = "a.png?bogus&height=2&width=1";

    assert_eq!(
        f.body(&[f.paragraph(&[image(&f, destination, "")])], &options()),
        para(&format!(
            concat!(
                "\n% mdlatex: image destination: {}, title: \n",
                "% mdlatex: image a.png has invalid attribute bogus\n",
                "% mdlatex: image a.png has unsupported attribute height\n",
                "{}"
            ),
            destination,
            figure("1", "a.png", "", "")
        ))
    );
}

#[test]
fn caption_is_escaped_and_file_names_are_kept() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let destination = "my_pic.png?caption=50%25%20off}&label=fig_1#b";

    assert_eq!(
        f.body(&[f.paragraph(&[image(&f, destination, "")])], &options()),
        para(&format!(
            "\n% mdlatex: image destination: {}, title: \n{}",
            destination,
            figure("", "my_pic.png", "50\\%25 off\\}", "fig_1b")
        ))
    );
}

#[test]
fn path_cannot_leave_its_argument() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let destination = "a}\\input{/etc/passwd}%.png?width=1}\\def";

    assert_eq!(
        f.body(&[f.paragraph(&[image(&f, destination, "")])], &options()),
        para(&format!(
            "\n% mdlatex: image destination: {}, title: \n{}",
            destination,
            figure("1def", "ainput/etc/passwd.png", "", "")
        ))
    );
}

#[test]
fn title_carriage_return_stays_in_comment() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);
    let image = image(&f, "x.png", "t\r\\input{/etc/passwd}\r\nmore");

    assert_eq!(
        f.body(&[f.paragraph(&[image])], &options()),
        para(&format!(
            concat!(
                "\n% mdlatex: image destination: x.png, title: t\n",
                "% \\input{{/etc/passwd}}\n",
                "% more\n",
                "{}"
            ),
            figure("", "x.png", "", "")
        ))
    );
}

#[test]
fn title_newline_stays_in_comment() {
    let arena = Arena::new();
    let f = Fixture::new(&arena);

    assert_eq!(
        f.body(&[f.paragraph(&[image(&f, "x.png", "two\nlines")])], &options()),
        para(&format!(
            "\n% mdlatex: image destination: x.png, title: two\n% lines\n{}",
            figure("", "x.png", "", "")
        ))
    );
}
