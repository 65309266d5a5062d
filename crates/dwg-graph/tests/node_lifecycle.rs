use dwg_graph::Graph;

fn sample_graph() -> Graph<String, i32> {
    Graph::from_edges([
        ("hello".to_string(), "how".to_string(), 5),
        ("hello".to_string(), "are".to_string(), 8),
        ("hello".to_string(), "are".to_string(), 2),
        ("how".to_string(), "you?".to_string(), 1),
        ("how".to_string(), "hello".to_string(), 4),
        ("are".to_string(), "you?".to_string(), 3),
    ])
}

#[test]
fn insert_node_reports_duplicates() {
    let mut graph: Graph<String, i32> = Graph::new();
    assert!(graph.insert_node("hi".to_string()));
    assert!(!graph.insert_node("hi".to_string()));
    assert!(graph.is_node(&"hi".to_string()));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn duplicate_insert_leaves_graph_unchanged() {
    let mut graph = sample_graph();
    let snapshot = graph.clone();
    assert!(!graph.insert_node("hello".to_string()));
    assert_eq!(graph, snapshot);
}

#[test]
fn nodes_are_listed_in_ascending_order() {
    let mut graph: Graph<String, i32> = Graph::new();
    assert!(graph.nodes().is_empty());
    graph.insert_node("bag".to_string());
    graph.insert_node("mat".to_string());
    graph.insert_node("app".to_string());
    assert_eq!(graph.nodes(), vec!["app", "bag", "mat"]);
}

#[test]
fn nodes_from_iterator_are_deduplicated() {
    let graph: Graph<&str, i32> = ["one", "two", "one", "three"].into_iter().collect();
    assert_eq!(graph.nodes(), vec!["one", "three", "two"]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn delete_node_removes_incoming_and_outgoing_edges() {
    let mut graph = sample_graph();
    // "hello": out-degree 3, in-degree 1, no self-loop
    let before = graph.edge_count();
    assert!(graph.delete_node(&"hello".to_string()));
    assert!(!graph.is_node(&"hello".to_string()));
    assert_eq!(graph.edge_count(), before - 4);
    assert!(graph
        .find(&"how".to_string(), &"hello".to_string(), &4)
        .is_end());
    for (from, to, _) in graph.iter() {
        assert_ne!(from, "hello");
        assert_ne!(to, "hello");
    }
}

#[test]
fn delete_missing_node_is_a_no_op() {
    let mut graph = sample_graph();
    let snapshot = graph.clone();
    assert!(!graph.delete_node(&"yolo".to_string()));
    assert_eq!(graph, snapshot);
}

#[test]
fn delete_node_with_self_loop_counts_it_once() {
    let mut graph: Graph<&str, i32> = Graph::from_edges([("a", "a", 1), ("a", "b", 2), ("c", "a", 3)]);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.delete_node(&"a"));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.nodes(), vec!["b", "c"]);
}

#[test]
fn clear_is_idempotent() {
    let mut graph = sample_graph();
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    graph.clear();
    assert!(graph.is_empty());
    // the graph is fully usable afterwards
    assert!(graph.insert_node("fresh".to_string()));
}
