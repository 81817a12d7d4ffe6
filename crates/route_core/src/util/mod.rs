pub mod cli;
pub mod test_graphs;
