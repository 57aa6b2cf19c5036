pub mod ambient_graph;
