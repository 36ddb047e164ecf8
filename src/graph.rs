use crate::{grid::GridConfig, passage_set::PassageSet};

use petgraph::{
    algo::{connected_components, is_cyclic_undirected},
    graph::{NodeIndex, UnGraph},
    visit::{depth_first_search, Control, DfsEvent},
};

/// The maze as an undirected graph: one node per cell (node index == cell index), one edge per
/// passage.
pub fn passage_graph(config: &GridConfig, passages: &PassageSet) -> UnGraph<usize, ()> {
    let mut graph = UnGraph::with_capacity(config.total_cells(), passages.len());
    for cell in 0..config.total_cells() {
        graph.add_node(cell);
    }
    for key in passages.sorted_keys().into_iter() {
        graph.add_edge(NodeIndex::new(key.lo()), NodeIndex::new(key.hi()), ());
    }

    graph
}

pub fn connected_component_count(graph: &UnGraph<usize, ()>) -> usize {
    connected_components(graph)
}

/// True iff there is exactly one simple path between any two cells, i.e. the graph is a spanning
/// tree.
pub fn is_perfect_maze(graph: &UnGraph<usize, ()>) -> bool {
    graph.node_count() > 0
        && graph.edge_count() + 1 == graph.node_count()
        && connected_component_count(graph) == 1
        && !is_cyclic_undirected(graph)
}

/// Depth of every node below `root`, and the parent it was reached from. Assumes `graph` is a tree.
fn tree_depths(graph: &UnGraph<usize, ()>, root: NodeIndex) -> (Vec<usize>, Vec<NodeIndex>) {
    let mut depths = vec![0; graph.node_count()];
    let mut predecessors = vec![NodeIndex::end(); graph.node_count()];
    depth_first_search(graph, Some(root), |event| {
        if let DfsEvent::TreeEdge(u, v) = event {
            predecessors[v.index()] = u;
            depths[v.index()] = depths[u.index()] + 1;
        }

        Control::<()>::Continue
    });

    (depths, predecessors)
}

/// Returns the cells of a longest path in the maze, from one end to the other. Assumes `graph` is
/// a tree.
pub fn longest_path_in_tree(graph: &UnGraph<usize, ()>) -> Vec<usize> {
    if graph.node_count() == 0 {
        return Vec::new();
    }

    // The node farthest from any node is one end of a longest path.
    let (depths, _) = tree_depths(graph, NodeIndex::new(0));
    let end = deepest(&depths);
    let (depths, predecessors) = tree_depths(graph, end);
    let start = deepest(&depths);

    let mut path = vec![graph[start]];
    let mut next = start;
    while next != end {
        next = predecessors[next.index()];
        path.push(graph[next]);
    }

    path
}

fn deepest(depths: &[usize]) -> NodeIndex {
    let mut best = 0;
    for (i, d) in depths.iter().enumerate() {
        if *d > depths[best] {
            best = i;
        }
    }

    NodeIndex::new(best)
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
