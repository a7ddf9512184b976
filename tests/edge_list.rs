use std::fs;
use std::io::BufReader;

use ghost_prim::{EdgeList, ParseError};

const SAMPLE: &str = "\
4 5
1 2 1
2 3 2
3 4 1
1 4 5
2 4 4
";

#[test]
fn reads_file_and_computes_cost() {
    let path = std::env::temp_dir().join(format!("ghost_prim_edges_{}.txt", std::process::id()));
    fs::write(&path, SAMPLE).unwrap();

    let file = fs::File::open(&path).unwrap();
    let list = EdgeList::from_reader(BufReader::new(file)).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(list.header.as_deref(), Some("4 5"));
    assert_eq!(list.len(), 5);

    let summary = list.summarize().unwrap();
    assert_eq!(summary.total_cost, 4.0);
    assert_eq!(summary.vertex_count, 4);
    assert_eq!(summary.edge_count, 5);
    assert!(summary.is_spanning());
}

#[test]
fn summary_serializes_to_json() {
    let summary = EdgeList::parse(SAMPLE).unwrap().summarize().unwrap();
    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["total_cost"], 4.0);
    assert_eq!(json["settled"], 4);
    assert_eq!(json["stranded_roots"], 0);
}

#[test]
fn disconnected_input_is_flagged() {
    let summary = EdgeList::parse("x\n1 2 1\n3 4 1\n5 6 1\n")
        .unwrap()
        .summarize()
        .unwrap();
    assert_eq!(summary.stranded_roots, 2);
    assert!(summary.total_cost.is_infinite());
}

#[test]
fn parse_errors_abort_before_the_core() {
    let err = EdgeList::parse("x\n1 2 1\n1 two 3\n").unwrap_err();
    assert!(matches!(err, ParseError::InvalidId { line: 3, ref token } if token == "two"));
}
