//! Frontier search over the person/movie graph.
//!
//! People are vertices and movies are edge groups: two people are adjacent
//! when they starred in the same movie. Adjacency is derived on demand from
//! the [`GraphIndex`]; nothing is precomputed.
//!
//! With [`Strategy::Bfs`] the first path found is a shortest one. With
//! [`Strategy::Dfs`] the result is a valid path but may be longer than
//! necessary. That difference is intentional; DFS is offered to compare how
//! many nodes each order explores.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::SearchError;
use crate::graph_index::{GraphIndex, MovieId, PersonId};

/// Ordered `(movie, person)` hops from the one nearest the source to the target.
pub type Path = Vec<(MovieId, PersonId)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Stack frontier: depth-first.
    Dfs,
    /// Queue frontier: breadth-first.
    Bfs,
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DFS" => Ok(Strategy::Dfs),
            "BFS" => Ok(Strategy::Bfs),
            _ => Err(SearchError::InvalidStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Dfs => write!(f, "DFS"),
            Strategy::Bfs => write!(f, "BFS"),
        }
    }
}

/// A search-tree node. `parent` indexes into the search's arena of expanded
/// nodes; the root has neither parent nor action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub state: PersonId,
    pub parent: Option<usize>,
    pub action: Option<MovieId>,
}

impl Node {
    pub fn root(state: &str) -> Self {
        Self { state: state.to_string(), parent: None, action: None }
    }
}

/// Open nodes plus a removal order. The same contract for both strategies;
/// only `remove` looks at the order.
///
/// The frontier does not reject duplicate states; callers check
/// [`Frontier::contains_state`] before adding.
#[derive(Debug)]
pub struct Frontier {
    strategy: Strategy,
    nodes: VecDeque<Node>,
    pending: HashMap<PersonId, usize>, // state -> held count
}

impl Frontier {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy, nodes: VecDeque::new(), pending: HashMap::new() }
    }

    pub fn add(&mut self, node: Node) {
        *self.pending.entry(node.state.clone()).or_default() += 1;
        self.nodes.push_back(node);
    }

    /// Stack order for DFS (most recent first), queue order for BFS (oldest first).
    pub fn remove(&mut self) -> Result<Node, SearchError> {
        let node = match self.strategy {
            Strategy::Dfs => self.nodes.pop_back(),
            Strategy::Bfs => self.nodes.pop_front(),
        }
        .ok_or(SearchError::EmptyFrontier)?;

        if let Some(count) = self.pending.get_mut(&node.state) {
            *count -= 1;
            if *count == 0 {
                self.pending.remove(&node.state);
            }
        }
        Ok(node)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.pending.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// `(movie, person)` pairs for everyone who shares a movie with `person_id`.
///
/// The queried person appears in the result too, once per movie, since they
/// are a member of every movie they starred in. The search never follows
/// those pairs because the person is already explored by then.
/// Ordered by movie id then person id so DFS runs are reproducible.
pub fn neighbors_for_person<'a>(index: &'a GraphIndex, person_id: &str) -> BTreeSet<(&'a str, &'a str)> {
    let mut neighbors = BTreeSet::new();
    let Some(person) = index.person(person_id) else {
        return neighbors; // unknown id: no neighbors
    };
    for movie_id in &person.movies {
        if let Some(movie) = index.movie(movie_id) {
            for star in &movie.stars {
                neighbors.insert((movie_id.as_str(), star.as_str()));
            }
        }
    }
    neighbors
}

/// Outcome of one search. `nodes_explored` counts frontier removals and is
/// filled in whether or not a path was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub path: Option<Path>,
    pub nodes_explored: usize,
}

impl SearchReport {
    pub fn degrees(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

/// Walks parent links from `node` back to the root, then reverses.
fn reconstruct_path(tree: &[Node], node: &Node) -> Path {
    let mut path = Vec::new();
    let mut current = node;
    while let (Some(parent), Some(action)) = (current.parent, current.action.as_ref()) {
        path.push((action.clone(), current.state.clone()));
        current = &tree[parent];
    }
    path.reverse();
    path
}

/// Finds a chain of shared movies from `source` to `target`.
///
/// Ids are not validated here: an unknown id has no neighbors, so the
/// search simply ends with no path unless `source == target`.
pub fn shortest_path(index: &GraphIndex, source: &str, target: &str, strategy: Strategy) -> SearchReport {
    let mut frontier = Frontier::new(strategy);
    frontier.add(Node::root(source));

    let mut tree: Vec<Node> = Vec::new(); // expanded nodes, referenced by child.parent
    let mut explored: HashSet<PersonId> = HashSet::new();
    let mut nodes_explored = 0;

    // an empty frontier ends the search with no path
    while let Ok(current) = frontier.remove() {
        nodes_explored += 1;

        if current.state == target {
            let path = reconstruct_path(&tree, &current);
            info!(%strategy, nodes_explored, degrees = path.len(), "path found");
            return SearchReport { path: Some(path), nodes_explored };
        }

        explored.insert(current.state.clone());
        let parent = tree.len();
        let neighbors = neighbors_for_person(index, &current.state);
        tree.push(current);

        for (movie_id, person_id) in neighbors {
            if !explored.contains(person_id) && !frontier.contains_state(person_id) {
                frontier.add(Node {
                    state: person_id.to_string(),
                    parent: Some(parent),
                    action: Some(movie_id.to_string()),
                });
            }
        }
        debug!(expanded = %tree[parent].state, frontier = frontier.len(), "expanded node");
    }

    info!(%strategy, nodes_explored, "no path");
    SearchReport { path: None, nodes_explored }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(state: &str) -> Node {
        Node::root(state)
    }

    /// A-M1-B-M2-C plus an isolated Z.
    fn chain() -> GraphIndex {
        let mut index = GraphIndex::new();
        for (id, name) in [("a", "A"), ("b", "B"), ("c", "C"), ("z", "Z")] {
            index.insert_person(id, name, "1970");
        }
        index.insert_movie("m1", "First", "2001");
        index.insert_movie("m2", "Second", "2002");
        index.link("a", "m1");
        index.link("b", "m1");
        index.link("b", "m2");
        index.link("c", "m2");
        index
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(" bfs \n".parse::<Strategy>(), Ok(Strategy::Bfs));
        assert_eq!("DFS".parse::<Strategy>(), Ok(Strategy::Dfs));
        assert!(matches!("A*".parse::<Strategy>(), Err(SearchError::InvalidStrategy(_))));
    }

    #[test]
    fn test_stack_frontier_order() {
        let mut frontier = Frontier::new(Strategy::Dfs);
        frontier.add(node("1"));
        frontier.add(node("2"));
        assert_eq!(frontier.remove().unwrap().state, "2");
        frontier.add(node("3"));
        assert_eq!(frontier.remove().unwrap().state, "3");
        assert_eq!(frontier.remove().unwrap().state, "1");
        assert!(frontier.is_empty());
        assert_eq!(frontier.remove(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn test_queue_frontier_order() {
        let mut frontier = Frontier::new(Strategy::Bfs);
        frontier.add(node("1"));
        frontier.add(node("2"));
        assert_eq!(frontier.remove().unwrap().state, "1");
        frontier.add(node("3"));
        assert_eq!(frontier.remove().unwrap().state, "2");
        assert_eq!(frontier.remove().unwrap().state, "3");
        assert_eq!(frontier.remove(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn test_contains_state_tracks_held_nodes() {
        let mut frontier = Frontier::new(Strategy::Bfs);
        assert!(frontier.is_empty());
        frontier.add(node("1"));
        assert!(frontier.contains_state("1"));
        assert!(!frontier.contains_state("2"));
        frontier.remove().unwrap();
        assert!(!frontier.contains_state("1"));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_neighbors_include_self() {
        let index = chain();
        let neighbors = neighbors_for_person(&index, "b");
        let expected: BTreeSet<(&str, &str)> =
            [("m1", "a"), ("m1", "b"), ("m2", "b"), ("m2", "c")].into_iter().collect();
        assert_eq!(neighbors, expected);
        assert!(neighbors_for_person(&index, "z").is_empty());
        assert!(neighbors_for_person(&index, "nobody").is_empty());
    }

    #[test]
    fn test_self_path_is_empty() {
        let report = shortest_path(&chain(), "a", "a", Strategy::Bfs);
        assert_eq!(report.path, Some(vec![]));
        assert_eq!(report.nodes_explored, 1);
    }

    #[test]
    fn test_direct_costar() {
        let report = shortest_path(&chain(), "a", "b", Strategy::Bfs);
        assert_eq!(report.path, Some(vec![("m1".to_string(), "b".to_string())]));
        assert_eq!(report.degrees(), Some(1));
    }

    #[test]
    fn test_two_hop_chain() {
        let expected = vec![("m1".to_string(), "b".to_string()), ("m2".to_string(), "c".to_string())];
        assert_eq!(shortest_path(&chain(), "a", "c", Strategy::Bfs).path, Some(expected.clone()));
        assert_eq!(shortest_path(&chain(), "a", "c", Strategy::Dfs).path, Some(expected));
    }

    #[test]
    fn test_disconnected() {
        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            let report = shortest_path(&chain(), "a", "z", strategy);
            assert_eq!(report.path, None);
            assert_eq!(report.nodes_explored, 3); // a, b, c
        }
    }

    #[test]
    fn test_dfs_may_take_the_long_way() {
        // s-m1-c-m2-t is two hops; s-m4-a-m5-b-m6-t is three
        let mut index = GraphIndex::new();
        for id in ["s", "a", "b", "c", "t"] {
            index.insert_person(id, id, "");
        }
        for id in ["m1", "m2", "m4", "m5", "m6"] {
            index.insert_movie(id, id, "");
        }
        for (p, m) in [("s", "m1"), ("c", "m1"), ("c", "m2"), ("t", "m2"), ("s", "m4"), ("a", "m4"), ("a", "m5"), ("b", "m5"), ("b", "m6"), ("t", "m6")] {
            assert!(index.link(p, m));
        }

        let bfs = shortest_path(&index, "s", "t", Strategy::Bfs);
        assert_eq!(bfs.degrees(), Some(2));

        // a is pushed after c, so the stack follows a's branch all the way
        let dfs = shortest_path(&index, "s", "t", Strategy::Dfs);
        let hops: Vec<(&str, &str)> = dfs.path.as_ref().unwrap().iter().map(|(m, p)| (m.as_str(), p.as_str())).collect();
        assert_eq!(hops, vec![("m4", "a"), ("m5", "b"), ("m6", "t")]);
        assert_eq!(dfs.nodes_explored, 4);
    }

    #[test]
    fn test_unknown_source_is_not_connected() {
        let report = shortest_path(&chain(), "nobody", "a", Strategy::Bfs);
        assert_eq!(report.path, None);
        assert_eq!(report.nodes_explored, 1);
    }
}
