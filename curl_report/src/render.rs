//! Document templates. Sections are plain data substituted with `format!`.

use crate::input::TestCase;
use clap::ValueEnum;

pub const DOCUMENT_TITLE: &str = "curl tests of REST API";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Flavor {
    /// Emacs org-mode
    #[default]
    Org,
    /// Markdown with fenced blocks
    Markdown,
}

/// Values substituted into one section template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub url: String,
    pub command: String,
    pub stdout: String,
}

impl Section {
    pub fn new(case: &TestCase, stdout: String) -> Self {
        Section {
            title: case.title.clone(),
            url: case.url.clone(),
            command: case.command.clone(),
            stdout,
        }
    }
}

pub fn header(flavor: Flavor) -> String {
    match flavor {
        Flavor::Org => format!(
            "#+BEGIN_HEADER\n#+TITLE: {}\n#+SETUPFILE: ~/org/setup.org\n#+END_HEADER\n",
            DOCUMENT_TITLE
        ),
        Flavor::Markdown => format!("# {}\n\n", DOCUMENT_TITLE),
    }
}

pub fn render_section(flavor: Flavor, s: &Section) -> String {
    match flavor {
        Flavor::Org => format!(
            "** {title}\n\n: {url}\n\n#+BEGIN_SRC sh\n{command}\n#+END_SRC\n\n\
             *** Output\n#+BEGIN_EXAMPLE\n{stdout}\n#+END_EXAMPLE\n\n",
            title = s.title,
            url = s.url,
            command = s.command,
            stdout = s.stdout,
        ),
        Flavor::Markdown => format!(
            "## {title}\n\n`{url}`\n\n```sh\n{command}\n```\n\n\
             ### Output\n\n```\n{stdout}\n```\n\n",
            title = s.title,
            url = s.url,
            command = s.command,
            stdout = s.stdout.trim_end_matches('\n'),
        ),
    }
}

/// Header followed by every section, in order.
pub fn render_document(flavor: Flavor, sections: &[Section]) -> String {
    let mut doc = header(flavor);
    for section in sections {
        doc.push_str(&render_section(flavor, section));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> Section {
        Section {
            title: "Get thing".into(),
            url: "/thing/1".into(),
            command: "curl -s localhost:4567/thing/1".into(),
            stdout: "{\"id\":1}\n".into(),
        }
    }

    #[test]
    fn org_section_layout() {
        let text = render_section(Flavor::Org, &section());
        assert_eq!(
            text,
            "** Get thing\n\n: /thing/1\n\n#+BEGIN_SRC sh\ncurl -s localhost:4567/thing/1\n#+END_SRC\n\n\
             *** Output\n#+BEGIN_EXAMPLE\n{\"id\":1}\n\n#+END_EXAMPLE\n\n"
        );
    }

    #[test]
    fn markdown_section_layout() {
        let text = render_section(Flavor::Markdown, &section());
        assert_eq!(
            text,
            "## Get thing\n\n`/thing/1`\n\n```sh\ncurl -s localhost:4567/thing/1\n```\n\n\
             ### Output\n\n```\n{\"id\":1}\n```\n\n"
        );
    }

    #[test]
    fn document_starts_with_header() {
        let doc = render_document(Flavor::Org, &[section(), section()]);
        assert!(doc.starts_with("#+BEGIN_HEADER\n#+TITLE: curl tests of REST API\n"));
        assert_eq!(doc.matches("** Get thing").count(), 2);

        let empty = render_document(Flavor::Markdown, &[]);
        assert_eq!(empty, "# curl tests of REST API\n\n");
    }
}
