use omfl::{
    from_reader, parse, parse_with_options, Document, Error, Kind, Node, ParseOptions, Value,
};
use std::io::Cursor;
use std::sync::Arc;
use std::thread;

const GATEWAY: &str = r#"
# gateway configuration
name = "gateway"
debug = false
workers = 8

[server.http]
port = 8080
hosts = ["a.local", "b.local",]
timeout = 2.5   # seconds

[server.tls]
enabled = true
ciphers = []

[limits]
burst = [10, 20, [30, 40]]
floor = -3.5
offset = +-3
"#;

#[test]
fn test_simple_key() {
    let doc = parse("key = 1");
    assert!(doc.is_valid());
    assert_eq!(doc.get("key").as_int(), Ok(1));
    assert!(!doc.get("key").is_string());
}

#[test]
fn test_realistic_document() {
    let doc = parse(GATEWAY);
    assert!(doc.is_valid(), "{}", doc.errors());

    assert_eq!(doc.get("name").as_str(), Ok("gateway"));
    assert_eq!(doc.get("debug").as_bool(), Ok(false));
    assert_eq!(doc.get("workers").as_int(), Ok(8));
    assert_eq!(doc.get("server.http.port").as_int(), Ok(8080));
    assert_eq!(doc.get("server.http.timeout").as_float(), Ok(2.5));
    assert_eq!(doc.get("server.tls.enabled").as_bool(), Ok(true));
    assert_eq!(doc.get("server.tls.ciphers").as_array().map(<[Value]>::len), Ok(0));
    assert_eq!(doc.get("limits.offset").as_int(), Ok(-3));

    let floor = doc.get("limits.floor").as_float().unwrap();
    assert!((floor + 3.5).abs() < f32::EPSILON);
}

#[test]
fn test_missing_paths_yield_nothing() {
    let doc = parse(GATEWAY);
    assert!(doc.get("missing.path").is_nothing());
    assert!(doc.get("server.http.port.deeper").is_nothing());
    assert!(doc.get("server.ftp").is_nothing());
    assert!(doc.lookup("server.ftp").is_none());
    assert_eq!(doc.get("missing").kind(), Kind::Nothing);
}

#[test]
fn test_array_indexing_is_soft() {
    let doc = parse("a = [1, 2, 3]");
    let a = doc.get("a");
    assert_eq!(a.at(0).unwrap().as_int(), Ok(1));
    assert!(a.at(10).unwrap().is_nothing());
    assert_eq!(doc.get("a").value().map(|v| &v[2]), Some(&Value::Int(3)));
}

#[test]
fn test_indexing_a_section_fails() {
    let doc = parse(GATEWAY);
    let err = doc.get("server").at(0).unwrap_err();
    assert_eq!(
        err,
        Error::KindMismatch {
            expected: Kind::Array,
            found: Kind::Section
        }
    );
    assert_eq!(err.to_string(), "Kind mismatch: expected array, found section");
}

#[test]
fn test_nested_arrays() {
    let doc = parse(GATEWAY);
    let burst = doc.get("limits.burst");
    assert_eq!(burst.at(2).unwrap().at(1).unwrap().as_int(), Ok(40));
    assert!(burst.at(0).unwrap().at(0).unwrap().is_nothing());
}

#[test]
fn test_trailing_comma_and_empty_array() {
    let doc = parse("a = [1, 2,]\nb = []");
    assert!(doc.is_valid());
    assert_eq!(doc.get("a").as_array().unwrap().len(), 2);
    assert!(doc.get("b").as_array().unwrap().is_empty());
}

#[test]
fn test_typed_extraction_is_strict() {
    let doc = parse(GATEWAY);
    assert!(doc.get("workers").as_float().is_err());
    assert!(doc.get("server.http.timeout").as_int().is_err());
    assert!(doc.get("name").as_bool().is_err());
    assert!(doc.get("server").as_str().is_err());
}

#[test]
fn test_defaults_never_fail() {
    let doc = parse(GATEWAY);
    assert_eq!(doc.get("workers").as_int_or(1), 8);
    assert_eq!(doc.get("name").as_int_or(1), 1);
    assert_eq!(doc.get("server").as_str_or("none"), "none");
    assert_eq!(doc.get("nope").as_float_or(0.5), 0.5);
    assert!(!doc.get("nope").as_bool_or(false));
}

#[test]
fn test_duplicate_key_invalidates() {
    let doc = parse("a = 1\na = 2");
    assert!(!doc.is_valid());
    assert!(!doc.errors().is_empty());
}

#[test]
fn test_dotted_sections() {
    let doc = parse("[x.y]\nz = 1");
    assert!(doc.is_valid());
    assert_eq!(doc.get("x.y.z").as_int(), Ok(1));
    assert!(doc.get("x").is_section());
    assert!(doc.get("x.y").is_section());
}

#[test]
fn test_reopened_sections_merge() {
    let doc = parse("[x]\na = 1\n[y]\nc = 3\n[x]\nb = 2");
    assert!(doc.is_valid());
    assert_eq!(doc.get("x.a").as_int(), Ok(1));
    assert_eq!(doc.get("x.b").as_int(), Ok(2));

    let keys: Vec<_> = doc.get("x").as_section().unwrap().keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_root_keys_before_first_section() {
    let doc = parse("top = 1\n[s]\ninner = 2");
    let root = doc.root().as_section().unwrap();
    let keys: Vec<_> = root.keys().collect();
    assert_eq!(keys, vec!["top", "s"]);
    assert!(doc.get("s.top").is_nothing());
}

#[test]
fn test_walk_sections() {
    let doc = parse(GATEWAY);
    let server = doc.get("server").as_section().unwrap();

    let mut seen = Vec::new();
    for (name, node) in server.iter() {
        let section = node.as_section().unwrap();
        seen.push((name, section.len()));
    }
    assert_eq!(seen, vec![("http", 3), ("tls", 2)]);
}

#[test]
fn test_node_relative_queries() {
    let doc = parse(GATEWAY);
    let http: Node<'_> = doc.get("server.http");
    assert_eq!(http.get("port").as_int(), Ok(8080));
    assert_eq!(http.get("hosts").at(1).unwrap().as_str(), Ok("b.local"));
}

#[test]
fn test_collect_all_reports_every_error() {
    let input = "a = 1\nb = @\n[c d]\nd = 4\na = 5\ne = \"open";
    let doc = parse_with_options(input, ParseOptions::collect_all());

    let lines: Vec<_> = doc.diagnostics().iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![2, 3, 5, 6]);
    assert!(!doc.is_valid());
    assert_eq!(doc.get("a").as_int(), Ok(1));
    assert_eq!(doc.get("d").as_int(), Ok(4));
    assert_eq!(doc.errors().lines().count(), 4);
}

#[test]
fn test_first_error_stops_scan_by_default() {
    let doc = parse("a = 1\nb = @\nc = 3");
    assert_eq!(doc.diagnostics().len(), 1);
    assert_eq!(doc.get("a").as_int(), Ok(1));
    assert!(doc.get("c").is_nothing());
}

#[test]
fn test_from_reader() {
    let doc = from_reader(Cursor::new(GATEWAY));
    assert_eq!(doc, parse(GATEWAY));
}

#[test]
fn test_serde_json_export() {
    let doc = parse("name = \"gw\"\nmissing = []\n[s]\nn = 1\nf = 0.5\nflags = [true, \"x\"]");
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "gw",
            "missing": [],
            "s": { "n": 1, "f": 0.5, "flags": [true, "x"] }
        })
    );

    let text = serde_json::to_string(&doc.get("s.flags")).unwrap();
    assert_eq!(text, r#"[true,"x"]"#);
    assert_eq!(serde_json::to_string(&doc.get("nope")).unwrap(), "null");
}

#[test]
fn test_export_keeps_definition_order() {
    let doc = parse("zeta = 1\nalpha = 2\n[mid]\n");
    let text = serde_json::to_string(&doc).unwrap();
    assert_eq!(text, r#"{"zeta":1,"alpha":2,"mid":{}}"#);
}

#[test]
fn test_document_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Document>();
    assert_send_sync::<Value>();

    let doc = Arc::new(parse(GATEWAY));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = Arc::clone(&doc);
            thread::spawn(move || doc.get("server.http.port").as_int_or(0))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 8080);
    }
}

#[test]
fn test_clone_is_independent_and_equal() {
    let doc = parse(GATEWAY);
    let copy = doc.clone();
    drop(doc);
    assert_eq!(copy.get("server.http.hosts").at(0).unwrap().as_str(), Ok("a.local"));
}
