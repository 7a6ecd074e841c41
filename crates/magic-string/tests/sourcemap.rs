use magic_string::{MagicString, OverwriteOptions, Segment, SourceMapOptions};
use pretty_assertions::assert_eq;

fn seg(generated_column: u32, original_line: u32, original_column: u32) -> Segment {
    Segment {
        generated_column,
        source_index: 0,
        original_line,
        original_column,
        name_index: None,
    }
}

#[test]
fn test_overwrite_mappings() {
    let mut s = MagicString::new("1 2 1 2");
    s.overwrite(2, 3, "3", OverwriteOptions::default()).unwrap();
    let map = s.generate_map(&SourceMapOptions::default());
    assert_eq!(map.mappings, "AAAA,EAAE,CAAC");
    assert_eq!(map.sources, vec![String::new()]);
    assert_eq!(map.file, None);
    assert_eq!(map.sources_content, None);
}

#[test]
fn test_hires_maps_every_character() {
    let mut s = MagicString::new("abcd");
    s.prepend("//");
    let lores = s.generate_map(&SourceMapOptions::default());
    assert_eq!(lores.mappings, "EAAA");
    let hires = s.generate_map(&SourceMapOptions::default().with_hires(true));
    assert_eq!(hires.mappings, "EAAA,CAAC,CAAC,CAAC");
}

#[test]
fn test_prepended_line_shifts_mappings() {
    let mut s = MagicString::new("a\nb");
    s.prepend("x\n");
    assert_eq!(s.generate_map(&SourceMapOptions::default()).mappings, ";AAAA;AACA");
}

#[test]
fn test_decoded_map_lines() {
    let mut s = MagicString::new("a\nbc\nd");
    s.overwrite(3, 4, "X", OverwriteOptions::default()).unwrap();
    let decoded = s.generate_decoded_map(&SourceMapOptions::default());
    assert_eq!(
        decoded.mappings,
        vec![
            vec![seg(0, 0, 0)],
            vec![seg(0, 1, 0), seg(1, 1, 1)],
            vec![seg(0, 2, 0)],
        ]
    );
    assert_eq!(decoded.encode().mappings, "AAAA;AACA,CAAC;AACD");
}

#[test]
fn test_file_source_and_content() {
    let s = MagicString::new("abc");
    let options = SourceMapOptions::default()
        .with_file("dist/out.js")
        .with_source("src/in.js")
        .with_include_content(true);
    let map = s.generate_map(&options);
    assert_eq!(
        map.to_string(),
        r#"{"version":3,"file":"out.js","sources":["../src/in.js"],"sourcesContent":["abc"],"names":[],"mappings":"AAAA"}"#
    );
}

#[test]
fn test_stored_names() {
    let mut s = MagicString::new("let foo = 1");
    s.overwrite(
        4,
        7,
        "bar",
        OverwriteOptions {
            store_name: true,
            ..OverwriteOptions::default()
        },
    )
    .unwrap();
    let map = s.generate_map(&SourceMapOptions::default());
    assert_eq!(map.names, vec!["foo".to_string()]);
    assert_eq!(map.mappings, "AAAA,IAAIA,GAAG");
}

#[test]
fn test_sourcemap_location() {
    let mut s = MagicString::new("abcdef");
    s.add_sourcemap_location(3);
    assert_eq!(s.generate_map(&SourceMapOptions::default()).mappings, "AAAA,GAAG");
}

#[test]
fn test_columns_are_utf16() {
    let mut s = MagicString::new("é = 1");
    s.overwrite(5, 6, "2", OverwriteOptions::default()).unwrap();
    assert_eq!(s.to_string(), "é = 2");
    assert_eq!(s.generate_map(&SourceMapOptions::default()).mappings, "AAAA,IAAI");
}

#[test]
fn test_map_decodes_with_independent_consumer() {
    let mut s = MagicString::new("hello world");
    s.overwrite(
        6,
        11,
        "there",
        OverwriteOptions {
            store_name: true,
            ..OverwriteOptions::default()
        },
    )
    .unwrap();
    s.prepend("// x\n");

    let json = s
        .generate_map(&SourceMapOptions::default().with_source("in.js"))
        .to_json()
        .unwrap();
    let map = sourcemap::SourceMap::from_slice(json.as_bytes()).unwrap();

    let token = map.lookup_token(1, 7).unwrap();
    assert_eq!(token.get_src_line(), 0);
    assert_eq!(token.get_src_col(), 6);
    assert_eq!(token.get_name(), Some("world"));
    assert_eq!(token.get_source(), Some("in.js"));

    let token = map.lookup_token(1, 2).unwrap();
    assert_eq!(token.get_src_col(), 0);
    assert_eq!(token.get_name(), None);
}

#[test]
fn test_decoded_map_converts_to_sourcemap_crate() {
    let mut s = MagicString::new("let foo = 1;\nfoo += 2;");
    s.overwrite(
        4,
        7,
        "bar",
        OverwriteOptions {
            store_name: true,
            ..OverwriteOptions::default()
        },
    )
    .unwrap();
    let options = SourceMapOptions::default()
        .with_file("out.js")
        .with_source("in.js")
        .with_include_content(true);
    let map = s.generate_decoded_map(&options).to_sourcemap();

    assert_eq!(map.get_file(), Some("out.js"));
    assert_eq!(map.get_source(0), Some("in.js"));
    assert_eq!(map.get_source_contents(0), Some(s.original()));
    assert_eq!(map.get_name(0), Some("foo"));

    let token = map.lookup_token(0, 5).unwrap();
    assert_eq!(token.get_src_col(), 4);
    assert_eq!(token.get_name(), Some("foo"));
    let token = map.lookup_token(1, 3).unwrap();
    assert_eq!(token.get_src_line(), 1);
    assert_eq!(token.get_src_col(), 0);

    let mut written = Vec::new();
    map.to_writer(&mut written).unwrap();
    let reparsed = sourcemap::SourceMap::from_slice(&written).unwrap();
    assert_eq!(reparsed.get_token_count(), map.get_token_count());
}
