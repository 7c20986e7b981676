use inidoc::{Document, Entry, SaveError, SetValueError};
use std::fs;
use tempfile::TempDir;

const NET_LOG: [&str; 6] = [
    "[Net]",
    "host=localhost",
    "port=8080",
    "",
    "[Log]",
    "level=debug",
];

#[test]
fn test_example_scenario() {
    let mut doc = Document::from_lines(NET_LOG);

    let port = doc.get_value("Net", "port").unwrap();
    assert_eq!((port.key, port.value), ("port", "8080"));

    let net: Vec<_> = doc
        .get_values("Net")
        .iter()
        .map(|p| (p.key, p.value))
        .collect();
    assert_eq!(net, vec![("host", "localhost"), ("port", "8080")]);

    doc.set_value("Net", "port", "9090").unwrap();
    assert_eq!(doc.get_value("Net", "port").map(|p| p.value), Some("9090"));

    assert!(doc.get_value("Log", "missing").is_none());
}

#[test]
fn test_round_trip_without_comments() {
    let lines = vec![
        "[Net]",
        "host=localhost",
        "port=8080",
        "",
        "[Log]",
        "level=debug",
        "",
        "[Empty]",
    ];
    let doc = Document::from_lines(&lines);
    assert_eq!(doc.to_lines().unwrap(), lines);
}

#[test]
fn test_round_trip_is_stable() {
    let doc = Document::parse("# c\n[A]\nk= v \n\n\n;x\n[B]\nurl=a=b\n");
    let once = doc.serialize().unwrap();
    let twice = Document::parse(&once).serialize().unwrap();
    assert_eq!(once, twice);
    assert_eq!(once, "[A]\nk= v \n\n[B]\nurl=a=b\n");
}

#[test]
fn test_enumeration_is_exactly_the_section() {
    let doc = Document::from_lines(["top=0", "[A]", "a1=1", "a2=2", "[B]", "b1=1", "[A]", "a3=3"]);
    let keys: Vec<_> = doc.get_values("A").iter().map(|p| p.key).collect();
    assert_eq!(keys, vec!["a1", "a2"]);
    let keys: Vec<_> = doc.get_values("B").iter().map(|p| p.key).collect();
    assert_eq!(keys, vec!["b1"]);
}

#[test]
fn test_malformed_line_never_becomes_a_pair() {
    let doc = Document::from_lines(["[A]", "justtext", "k=v"]);
    assert!(doc.entries().iter().all(|e| match e {
        Entry::Pair { key, .. } => key != "justtext",
        Entry::Category { .. } => true,
    }));
    assert_eq!(doc.get_values("A").len(), 1);
}

#[test]
fn test_set_value_on_missing_leaves_document_unchanged() {
    let mut doc = Document::from_lines(NET_LOG);
    let before = doc.clone();

    assert!(matches!(
        doc.set_value("Log", "file", "/tmp/x"),
        Err(SetValueError::KeyNotFound { .. })
    ));
    assert!(matches!(
        doc.set_value("Missing", "file", "/tmp/x"),
        Err(SetValueError::CategoryNotFound(_))
    ));
    assert_eq!(doc, before);
}

#[test]
fn test_create_category_then_serialize() {
    let mut doc = Document::from_lines(NET_LOG);
    assert!(doc.create_category("Db"));
    assert!(!doc.create_category("Db"));
    assert_eq!(
        doc.serialize().unwrap(),
        "[Net]\nhost=localhost\nport=8080\n\n[Log]\nlevel=debug\n\n[Db]\n"
    );
}

#[test]
fn test_create_category_on_empty_document_is_saveable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.ini");
    let mut doc = Document::new();

    assert!(matches!(doc.save_as(&path), Err(SaveError::EmptyDocument)));
    assert!(doc.create_category("Main"));
    doc.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[Main]\n");
}

#[test]
fn test_load_modify_save_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.ini");
    fs::write(&path, "[Net]\r\nhost=localhost\r\n; comment\r\n[Log]\r\nlevel=debug\r\n").unwrap();

    let mut doc = Document::load(&path).unwrap();
    doc.set_value("Net", "host", "example.org").unwrap();
    doc.save().unwrap();

    let reloaded = Document::load(&path).unwrap();
    assert_eq!(
        reloaded.get_value("Net", "host").map(|p| p.value),
        Some("example.org")
    );
    assert_eq!(reloaded.categories().collect::<Vec<_>>(), vec!["Net", "Log"]);
}

#[test]
fn test_write_to_sink() {
    let doc = Document::from_lines(["[A]", "k=v"]);
    let mut out = Vec::new();
    doc.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[A]\nk=v\n");
}
