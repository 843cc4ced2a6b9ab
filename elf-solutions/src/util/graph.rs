use std::collections::HashMap;

/// Counts distinct walks from `start` to `goal` in a directed acyclic graph.
///
/// Nodes without an adjacency entry are sinks. The count can grow
/// exponentially in the number of nodes, hence the memo table.
pub fn count_walks(adjacency: &HashMap<&str, Vec<&str>>, start: &str, goal: &str) -> u64 {
    let mut memo: HashMap<String, u64> = HashMap::new();
    walks_from(adjacency, start, goal, &mut memo)
}

fn walks_from(
    adjacency: &HashMap<&str, Vec<&str>>,
    node: &str,
    goal: &str,
    memo: &mut HashMap<String, u64>,
) -> u64 {
    if node == goal {
        return 1;
    }
    if let Some(&count) = memo.get(node) {
        return count;
    }
    let count = adjacency
        .get(node)
        .map(|successors| {
            successors
                .iter()
                .map(|next| walks_from(adjacency, next, goal, memo))
                .sum()
        })
        .unwrap_or(0);
    memo.insert(node.to_owned(), count);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&'static str, &'static [&'static str])]) -> HashMap<&'static str, Vec<&'static str>> {
        edges.iter().map(|(from, to)| (*from, to.to_vec())).collect()
    }

    #[test]
    fn counts_all_walks_in_a_diamond() {
        let adjacency = graph(&[
            ("a", &["b", "c"]),
            ("b", &["d"]),
            ("c", &["d"]),
        ]);
        assert_eq!(count_walks(&adjacency, "a", "d"), 2);
    }

    #[test]
    fn unreachable_goal_counts_zero() {
        let adjacency = graph(&[("a", &["b"])]);
        assert_eq!(count_walks(&adjacency, "a", "z"), 0);
        assert_eq!(count_walks(&adjacency, "missing", "z"), 0);
    }

    #[test]
    fn start_equals_goal_is_one_empty_walk() {
        let adjacency = graph(&[("a", &["a"])]);
        assert_eq!(count_walks(&adjacency, "a", "a"), 1);
    }
}
