// ABOUTME: Markdown editor helpers: default document and toolbar snippets.
// ABOUTME: Snippet insertion is cursor-aware and returns the new caret position.

/// Markdown shown on first launch, before anything was saved
pub fn default_content() -> &'static str {
    "# Welcome to Study Desk\n\n\
     Load a page or video on the left, ask the assistant questions, and \
     take notes here. Everything you write is saved automatically and \
     restored the next time you open the workspace.\n\n\
     ## Features\n\n\
     - Markdown support\n\
     - Import and export functionality\n\
     - Drag and resize panels\n\
     - AI assistance\n"
}

/// A toolbar snippet to insert at the caret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snippet {
    Heading1,
    Heading2,
    Heading3,
    Bold,
    Italic,
    Link,
    Image,
    CodeBlock,
    Quote,
    BulletList,
    NumberedList,
    Table,
    Rule,
}

/// Result of a snippet insertion: the new document text and the byte
/// offset the caret should move to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub text: String,
    pub cursor: usize,
}

/// Insert `snippet` into `text`, replacing the `start..end` selection.
/// Inline snippets wrap the selection (or a placeholder when nothing is
/// selected) and leave the caret after the wrapped body; block snippets
/// insert a template on its own line. Offsets are byte positions and
/// must fall on character boundaries.
pub fn insert_snippet(text: &str, start: usize, end: usize, snippet: Snippet) -> Insertion {
    let end = end.min(text.len());
    let start = start.min(end);
    let before = &text[..start];
    let selected = &text[start..end];
    let after = &text[end..];

    match snippet {
        Snippet::Bold => wrap(before, selected, after, start, "**", "**", "bold text"),
        Snippet::Italic => wrap(before, selected, after, start, "*", "*", "italic text"),
        Snippet::Link => wrap(
            before,
            selected,
            after,
            start,
            "[",
            "](https://example.com)",
            "link text",
        ),
        Snippet::Image => wrap(
            before,
            selected,
            after,
            start,
            "![",
            "](https://example.com/image.jpg)",
            "image description",
        ),
        Snippet::CodeBlock => wrap(before, selected, after, start, "```\n", "\n```", "code"),
        Snippet::Quote => wrap(before, selected, after, start, "> ", "", "quoted text"),
        Snippet::Heading1 => heading(before, selected, after, start, "# "),
        Snippet::Heading2 => heading(before, selected, after, start, "## "),
        Snippet::Heading3 => heading(before, selected, after, start, "### "),
        Snippet::BulletList => block(
            before,
            after,
            start,
            "- List item\n- List item\n- List item",
        ),
        Snippet::NumberedList => block(
            before,
            after,
            start,
            "1. List item\n2. List item\n3. List item",
        ),
        Snippet::Table => block(
            before,
            after,
            start,
            "| Header | Header |\n| --- | --- |\n| Cell | Cell |",
        ),
        Snippet::Rule => block(before, after, start, "---"),
    }
}

fn wrap(
    before: &str,
    selected: &str,
    after: &str,
    start: usize,
    open: &str,
    close: &str,
    placeholder: &str,
) -> Insertion {
    let body = if selected.is_empty() {
        placeholder
    } else {
        selected
    };
    Insertion {
        text: format!("{before}{open}{body}{close}{after}"),
        cursor: start + open.len() + body.len(),
    }
}

fn heading(before: &str, selected: &str, after: &str, start: usize, marker: &str) -> Insertion {
    // Headings must start a line of their own.
    let prefix = if before.is_empty() || before.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    let body = if selected.is_empty() {
        "Heading"
    } else {
        selected
    };
    Insertion {
        text: format!("{before}{prefix}{marker}{body}{after}"),
        cursor: start + prefix.len() + marker.len() + body.len(),
    }
}

fn block(before: &str, after: &str, start: usize, template: &str) -> Insertion {
    let prefix = if before.is_empty() || before.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    Insertion {
        text: format!("{before}{prefix}{template}{after}"),
        cursor: start + prefix.len() + template.len(),
    }
}
