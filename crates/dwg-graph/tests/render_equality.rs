use dwg_graph::Graph;

fn sample_graph() -> Graph<String, i32> {
    let mut graph = Graph::new();
    for node in ["hello", "how", "are", "you?"] {
        graph.insert_node(node.to_string());
    }
    graph.insert_edge(&"hello".into(), &"how".into(), 5).unwrap();
    graph.insert_edge(&"hello".into(), &"are".into(), 8).unwrap();
    graph.insert_edge(&"hello".into(), &"are".into(), 2).unwrap();
    graph.insert_edge(&"how".into(), &"you?".into(), 1).unwrap();
    graph.insert_edge(&"how".into(), &"hello".into(), 4).unwrap();
    graph.insert_edge(&"are".into(), &"you?".into(), 3).unwrap();
    graph
}

#[test]
fn rendering_is_deterministic_and_ordered() {
    let graph = sample_graph();
    let expected = "are (\n\
                    \tyou? | 3\n\
                    )\n\
                    hello (\n\
                    \tare | 2\n\
                    \tare | 8\n\
                    \thow | 5\n\
                    )\n\
                    how (\n\
                    \thello | 4\n\
                    \tyou? | 1\n\
                    )\n\
                    you? (\n\
                    )\n";
    assert_eq!(graph.to_string(), expected);
}

#[test]
fn edge_free_nodes_render_an_empty_block() {
    let mut graph: Graph<String, i32> = Graph::new();
    graph.insert_node("4".to_string());
    assert_eq!(graph.to_string(), "4 (\n)\n");
}

#[test]
fn empty_graph_renders_nothing() {
    let graph: Graph<String, i32> = Graph::new();
    assert_eq!(graph.to_string(), "");
}

#[test]
fn equal_graphs_compare_equal_in_both_directions() {
    let edges = [
        ("1", "2", 1),
        ("1", "3", 3),
        ("2", "3", 0),
        ("3", "5", 4),
        ("5", "1", 1),
        ("5", "1", 2),
    ];
    let mut g1: Graph<&str, i32> = Graph::from_edges(edges);
    g1.insert_node("4");
    let mut g2: Graph<&str, i32> = Graph::from_edges(edges);
    g2.insert_node("4");

    assert_eq!(g1, g2);
    assert_eq!(g2, g1);
}

#[test]
fn extra_node_or_edge_breaks_equality() {
    let edges = [("1", "2", 1), ("1", "3", 3)];
    let g1: Graph<&str, i32> = Graph::from_edges(edges);

    let mut with_node = Graph::from_edges(edges);
    with_node.insert_node("6");
    assert_ne!(g1, with_node);

    let mut with_edge = Graph::from_edges(edges);
    with_edge.insert_edge(&"2", &"3", 8).unwrap();
    assert_ne!(g1, with_edge);
}

#[test]
fn different_node_sets_of_equal_size_compare_unequal() {
    let g1: Graph<&str, i32> = Graph::from_nodes(["a", "b", "c"]);
    let g2: Graph<&str, i32> = Graph::from_nodes(["a", "b", "d"]);
    assert_ne!(g1, g2);
}

#[test]
fn empty_graphs_are_equal() {
    let g1: Graph<&str, i32> = Graph::new();
    let g2: Graph<&str, i32> = Graph::new();
    assert_eq!(g1, g2);
}

#[test]
fn equality_ignores_insertion_order() {
    let g1: Graph<&str, i32> = Graph::from_edges([("a", "b", 1), ("b", "c", 2)]);
    let g2: Graph<&str, i32> = Graph::from_edges([("b", "c", 2), ("a", "b", 1)]);
    assert_eq!(g1, g2);
}
