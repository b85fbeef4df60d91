//! Documents fed to one filter in several buffers.

use mdblank::{BlankMarkup, Block, MarkdownFilter, Options, PendingSpan};

/// Process each chunk in turn with one filter, returning the joined output.
fn run_chunks<M: mdblank::MarkupBlanker>(filter: &mut MarkdownFilter<M>, chunks: &[&str]) -> String {
    let mut out = String::new();
    for chunk in chunks {
        let mut buf = chunk.as_bytes().to_vec();
        filter.process(&mut buf);
        out.push_str(&String::from_utf8(buf).unwrap());
    }
    out
}

#[test]
fn code_span_continues_into_next_buffer() {
    let mut filter = MarkdownFilter::new();
    let out = run_chunks(&mut filter, &["a `b\n"]);
    assert_eq!(out, "a   \n");
    assert_eq!(
        filter.pending_span(),
        Some(PendingSpan::InlineCode { marker_len: 1 })
    );

    let out = run_chunks(&mut filter, &["c` d\n"]);
    assert_eq!(out, "   d\n");
    assert_eq!(filter.pending_span(), None);
}

#[test]
fn reset_drops_pending_span() {
    let mut filter = MarkdownFilter::new();
    run_chunks(&mut filter, &["text `unterminated\n"]);
    assert!(filter.pending_span().is_some());

    filter.reset();
    assert_eq!(filter.pending_span(), None);
    assert_eq!(filter.blocks(), &[Block::Root]);
    assert_eq!(run_chunks(&mut filter, &["plain text\n"]), "plain text\n");
}

#[test]
fn fence_spans_buffers() {
    let mut filter = MarkdownFilter::new();
    let out = run_chunks(&mut filter, &["```\n", "code\n", "```\ntext\n"]);
    assert_eq!(out, "   \n    \n   \ntext\n");
}

#[test]
fn blocks_carry_over() {
    let mut filter = MarkdownFilter::new();
    run_chunks(&mut filter, &["> quote\n"]);
    assert_eq!(filter.blocks(), &[Block::Root, Block::BlockQuote]);
    assert_eq!(run_chunks(&mut filter, &["> more\n"]), "  more\n");
    assert_eq!(filter.blocks(), &[Block::Root, Block::BlockQuote]);
}

#[test]
fn multiline_tag_spans_buffers() {
    let options = Options {
        multiline_tags: true,
        ..Options::default()
    };
    let mut filter = MarkdownFilter::with_markup(options, BlankMarkup);
    let out = run_chunks(&mut filter, &["<a\n"]);
    assert_eq!(out, "  \n");
    assert_eq!(filter.pending_span(), Some(PendingSpan::HtmlTag));

    let out = run_chunks(&mut filter, &["href=x>y\n"]);
    assert_eq!(out, "       y\n");
    assert_eq!(filter.pending_span(), None);
}

#[test]
fn comment_spans_buffers() {
    let mut filter = MarkdownFilter::with_markup(Options::default(), BlankMarkup);
    let out = run_chunks(&mut filter, &["<!-- a\n", "b\n", "c --> d\n"]);
    assert_eq!(out, "      \n \n      d\n");
}

#[test]
fn chunked_matches_whole() {
    let doc = "# T\n\n> q `c\n> d` e\n\n- x\n\n      code\n\n~~~\n<b>\n~~~\n<i a='1'>\n";
    let whole = mdblank::blank_str(doc);
    let lines: Vec<&str> = doc.split_inclusive('\n').collect();
    let mut filter = MarkdownFilter::new();
    assert_eq!(run_chunks(&mut filter, &lines), whole);
}

// --- Line terminators ---

#[test]
fn crlf_lines() {
    assert_eq!(mdblank::blank_str("> a\r\n> b\r\n"), "  a\r\n  b\r\n");
    assert_eq!(mdblank::blank_str("```\r\nx\r\n```\r\n"), "   \r\n \r\n   \r\n");
}

#[test]
fn lone_cr_lines() {
    assert_eq!(mdblank::blank_str("> a\r> b"), "  a\r  b");
}

#[test]
fn empty_buffer() {
    let mut filter = MarkdownFilter::new();
    let mut buf = Vec::new();
    filter.process(&mut buf);
    assert!(buf.is_empty());
    assert_eq!(filter.blocks(), &[Block::Root]);
}
