use newsletter_agent::formatter::{DocFormatter, DocRequest, BODY_START_INDEX};

#[test]
fn spans_track_appended_lengths() {
    let mut fmt = DocFormatter::new();

    let a = fmt.add_text("hello");
    let b = fmt.add_bold_text(" world");
    let c = fmt.add_newline();

    assert_eq!(a.start, BODY_START_INDEX);
    assert_eq!(a.len(), 5);
    assert_eq!(b.len(), 6);
    assert_eq!(c.len(), 1);

    // Strictly increasing, non-overlapping
    assert_eq!(a.end, b.start);
    assert_eq!(b.end, c.start);
    assert_eq!(fmt.text_len(), 12);
    assert_eq!(fmt.cursor(), BODY_START_INDEX + 12);
}

#[test]
fn offsets_count_characters_not_bytes() {
    let mut fmt = DocFormatter::new();
    let span = fmt.add_text("🤖 robots");
    assert_eq!(span.len(), 8);
}

#[test]
fn heading_includes_line_break_and_clamps_level() {
    let mut fmt = DocFormatter::new();
    let span = fmt.add_heading("Title", 7);
    assert_eq!(span.len(), 6); // "Title\n"

    let requests = fmt.build();
    assert_eq!(requests.len(), 2);
    match &requests[1] {
        DocRequest::UpdateParagraphStyle(op) => {
            assert_eq!(op.paragraph_style.named_style_type.as_deref(), Some("HEADING_1"));
            assert_eq!(op.range.start_index, span.start);
            assert_eq!(op.range.end_index, span.end);
        }
        other => panic!("expected paragraph style op, got {:?}", other),
    }
}

#[test]
fn bullet_range_coalesces_consecutive_lines() {
    let mut fmt = DocFormatter::new();
    fmt.add_heading("Tools", 2);

    let start = fmt.cursor();
    fmt.add_bullet_item("first");
    fmt.add_bullet_item("second");
    fmt.add_bullet_item("third");
    let end = fmt.cursor();
    fmt.add_bullets_to_range(start, end);

    let requests = fmt.build();
    let bullets: Vec<_> = requests
        .iter()
        .filter_map(|r| match r {
            DocRequest::CreateParagraphBullets(op) => Some(op),
            _ => None,
        })
        .collect();

    // One op covering all three lines
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].range.start_index, start);
    assert_eq!(bullets[0].range.end_index, end);
    assert_eq!(end - start, "first\nsecond\nthird\n".len());
}

#[test]
fn empty_builder_yields_no_requests() {
    let fmt = DocFormatter::new();
    assert!(fmt.build().is_empty());
}

#[test]
fn build_emits_insert_first_then_ops_in_order() {
    let mut fmt = DocFormatter::new();
    fmt.add_heading("A", 1);
    fmt.add_bold_text("b");
    fmt.add_italic_text("c");
    fmt.add_link("d", "https://example.com");
    fmt.add_horizontal_rule();

    let requests = fmt.build();
    assert!(matches!(&requests[0], DocRequest::InsertText(op) if op.location.index == 1));
    assert!(matches!(requests[1], DocRequest::UpdateParagraphStyle(_))); // heading
    assert!(matches!(requests[2], DocRequest::UpdateTextStyle(_))); // bold
    assert!(matches!(requests[3], DocRequest::UpdateTextStyle(_))); // italic
    assert!(matches!(requests[4], DocRequest::UpdateTextStyle(_))); // link
    assert!(matches!(requests[5], DocRequest::UpdateParagraphStyle(_))); // rule
}

#[test]
fn styled_helpers_record_one_text_style_op_per_span() {
    let mut fmt = DocFormatter::new();
    let bold = fmt.add_bold_text("bold");
    let italic = fmt.add_italic_text("italic");
    let link = fmt.add_bold_link("both", "https://example.com");

    let requests = fmt.build();
    let ops: Vec<_> = requests
        .iter()
        .filter_map(|r| match r {
            DocRequest::UpdateTextStyle(op) => Some(op),
            _ => None,
        })
        .collect();
    assert_eq!(ops.len(), 3);

    assert_eq!((ops[0].range.start_index, ops[0].range.end_index), (bold.start, bold.end));
    assert_eq!(ops[0].fields, "bold");
    assert_eq!(ops[0].text_style.bold, Some(true));

    assert_eq!((ops[1].range.start_index, ops[1].range.end_index), (italic.start, italic.end));
    assert_eq!(ops[1].fields, "italic");
    assert_eq!(ops[1].text_style.italic, Some(true));

    assert_eq!((ops[2].range.start_index, ops[2].range.end_index), (link.start, link.end));
    assert_eq!(ops[2].fields, "bold,link,foregroundColor");
    assert_eq!(ops[2].text_style.bold, Some(true));
    assert!(ops[2].text_style.link.is_some());
}

#[test]
fn requests_serialize_to_wire_format() {
    let mut fmt = DocFormatter::new();
    fmt.add_link("click", "https://example.com");
    let requests = fmt.build();

    let json = serde_json::to_value(&requests).unwrap();
    assert_eq!(json[0]["insertText"]["location"]["index"], 1);
    assert_eq!(json[0]["insertText"]["text"], "click");

    let style = &json[1]["updateTextStyle"];
    assert_eq!(style["range"]["startIndex"], 1);
    assert_eq!(style["range"]["endIndex"], 6);
    assert_eq!(style["textStyle"]["link"]["url"], "https://example.com");
    assert_eq!(style["fields"], "link,foregroundColor");
    // Absent style fields must not appear at all
    assert!(style["textStyle"].get("bold").is_none());
}

#[test]
fn rule_is_zero_width_bordered_paragraph() {
    let mut fmt = DocFormatter::new();
    let span = fmt.add_horizontal_rule();
    assert_eq!(span.len(), 1); // single line break

    let json = serde_json::to_value(fmt.build()).unwrap();
    let border = &json[1]["updateParagraphStyle"]["paragraphStyle"]["borderBottom"];
    assert_eq!(border["dashStyle"], "SOLID");
    assert_eq!(json[1]["updateParagraphStyle"]["fields"], "borderBottom");
}
