//! Conversion driven by serialized layout dumps.

use std::io::Cursor;

use trestle_core::{ConvertError, FragmentSource, LayoutDump, convert_to_markdown};

const TWO_PAGE_DUMP: &str = r#"{
    "pages": [
        {
            "pageno": 1,
            "bbox": [0.0, 0.0, 612.0, 792.0],
            "elements": [
                { "kind": "text", "bbox": [72.0, 700.0, 180.0, 712.0], "text": "Name  Age" },
                { "kind": "text", "bbox": [72.0, 680.0, 180.0, 692.0], "text": "Alice  30" },
                { "kind": "image", "bbox": [300.0, 500.0, 400.0, 600.0] }
            ]
        },
        {
            "pageno": 2,
            "bbox": [0.0, 0.0, 612.0, 792.0],
            "elements": [
                { "kind": "text", "bbox": [72.0, 700.0, 300.0, 712.0], "text": "Closing remarks" }
            ]
        }
    ]
}"#;

#[test]
fn test_dump_converts_end_to_end() {
    let dump = LayoutDump::parse(TWO_PAGE_DUMP).unwrap();
    let markdown = convert_to_markdown(&dump, None).unwrap();

    let expected = "Name  Age\nAlice  30\n\nClosing remarks\n\n\
        ## Extracted Tables\n\n\
        ### Page 1\n\n\
        | Name | Age |\n\
        | --- | --- |\n\
        | Alice | 30 |";
    assert_eq!(markdown, expected);
}

#[test]
fn test_dump_reads_from_reader() {
    let dump = LayoutDump::from_reader(Cursor::new(TWO_PAGE_DUMP.as_bytes())).unwrap();
    assert_eq!(dump.len(), 2);
}

#[test]
fn test_unusable_elements_are_dropped_not_fatal() {
    let dump = LayoutDump::parse(
        r#"{
            "pages": [
                {
                    "pageno": 1,
                    "elements": [
                        { "kind": "glyph", "bbox": [0, 0, 1, 1] },
                        { "kind": "text", "text": "geometry missing" },
                        { "kind": "text", "bbox": [72.0, 700.0, 180.0, 712.0], "text": "kept" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let pages = dump.pages().unwrap();
    assert_eq!(pages[0].iter().count(), 1);
    assert_eq!(
        pages[0].text_fragments().next().unwrap().get_text(),
        "kept"
    );
}

#[test]
fn test_zero_page_number_is_malformed() {
    let err = LayoutDump::parse(r#"{ "pages": [ { "pageno": 0 } ] }"#).unwrap_err();
    assert!(matches!(err, ConvertError::MalformedDump(_)));
}

#[test]
fn test_garbage_input_is_a_json_error() {
    let err = LayoutDump::parse("]{ not json").unwrap_err();
    assert!(matches!(err, ConvertError::Json(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = LayoutDump::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, ConvertError::Io(_)));
}

#[test]
fn test_empty_dump_converts_to_nothing() {
    let dump = LayoutDump::parse(r#"{ "pages": [] }"#).unwrap();
    let markdown = convert_to_markdown(&dump, None).unwrap();
    assert_eq!(markdown, "");
}
