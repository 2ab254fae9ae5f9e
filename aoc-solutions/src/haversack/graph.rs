use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::error::GraphError;

static RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<container>\S(?:.*?\S)?) bags contain (?P<list>.+?)\.?$")
        .expect("valid rule regex")
});

static CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<count>[0-9]+) (?P<content>\S(?:.*?\S)?) bags?$").expect("valid content regex")
});

const EMPTY_LIST: &str = "no other bags";

/// One weighted edge: a container bag holds `count` bags of `content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContainmentEdge<'g> {
    pub container: &'g str,
    pub content: &'g str,
    pub count: u32,
}

/// Adjacency entry; `node` is the bag on the other end of the edge.
#[derive(Debug, Clone, Copy)]
pub(super) struct Edge {
    pub(super) node: usize,
    pub(super) count: u32,
}

/// Directed, weighted "bag holds bag" graph built from rule text.
///
/// Bags are interned to dense indices. Both directions are indexed:
/// `contents[container]` lists what a bag holds, `containers[content]` lists
/// which bags hold it. Every bag named anywhere in the rules is a node, even
/// when it has no edges.
#[derive(Debug, Clone, Default)]
pub struct BagGraph {
    names: Vec<String>,
    ids: HashMap<String, usize>,
    contents: Vec<Vec<Edge>>,
    containers: Vec<Vec<Edge>>,
    has_rule: Vec<bool>,
}

impl BagGraph {
    /// Build the graph from newline-separated rules. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        Self::from_rules(text.lines())
    }

    /// Build the graph from one rule per item.
    ///
    /// Fails on the first malformed rule; nothing is returned in that case.
    pub fn from_rules<'r, I>(rules: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = &'r str>,
    {
        let mut graph = BagGraph::default();
        for (idx, raw) in rules.into_iter().enumerate() {
            let rule = raw.trim();
            if rule.is_empty() {
                continue;
            }
            graph
                .add_rule(rule)
                .map_err(|reason| GraphError::Parse {
                    line: idx + 1,
                    reason,
                    text: rule.to_string(),
                })?;
        }

        debug!(
            bags = graph.node_count(),
            edges = graph.edge_count(),
            "parsed bag rules"
        );
        Ok(graph)
    }

    fn add_rule(&mut self, rule: &str) -> Result<(), &'static str> {
        let caps = RULE
            .captures(rule)
            .ok_or("expected `<bag> bags contain <list>`")?;
        let container = self.intern(&caps["container"]);
        if std::mem::replace(&mut self.has_rule[container], true) {
            return Err("duplicate rule for bag");
        }

        let list = caps["list"].trim();
        if list == EMPTY_LIST {
            return Ok(());
        }

        for item in list.split(',').map(str::trim) {
            let caps = CONTENT
                .captures(item)
                .ok_or("expected `<count> <bag> bag[s]`")?;
            let count: u32 = caps["count"].parse().map_err(|_| "bag count too large")?;
            if count == 0 {
                return Err("bag count must be positive");
            }
            let content = self.intern(&caps["content"]);
            if self.contents[container].iter().any(|e| e.node == content) {
                return Err("bag listed twice in one rule");
            }
            self.contents[container].push(Edge {
                node: content,
                count,
            });
            self.containers[content].push(Edge {
                node: container,
                count,
            });
        }
        Ok(())
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.contents.push(Vec::new());
        self.containers.push(Vec::new());
        self.has_rule.push(false);
        id
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.contents.iter().map(Vec::len).sum()
    }

    /// Bags directly held by `name`, with their counts
    pub fn contents_of(&self, name: &str) -> Result<Vec<(&str, u32)>, GraphError> {
        let id = self.index_of(name)?;
        Ok(self.resolve_edges(&self.contents[id]))
    }

    /// Bags that directly hold `name`, with how many of it they hold
    pub fn containers_of(&self, name: &str) -> Result<Vec<(&str, u32)>, GraphError> {
        let id = self.index_of(name)?;
        Ok(self.resolve_edges(&self.containers[id]))
    }

    /// Every edge, sorted by container then content.
    ///
    /// The result does not depend on the order the rules were given in.
    pub fn edges(&self) -> Vec<ContainmentEdge<'_>> {
        let mut edges: Vec<_> = self
            .contents
            .iter()
            .enumerate()
            .flat_map(|(container, held)| {
                held.iter().map(move |e| ContainmentEdge {
                    container: &self.names[container],
                    content: &self.names[e.node],
                    count: e.count,
                })
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    fn resolve_edges(&self, edges: &[Edge]) -> Vec<(&str, u32)> {
        let mut resolved: Vec<_> = edges
            .iter()
            .map(|e| (self.names[e.node].as_str(), e.count))
            .collect();
        resolved.sort_unstable();
        resolved
    }

    pub(super) fn index_of(&self, name: &str) -> Result<usize, GraphError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    pub(super) fn name(&self, id: usize) -> &str {
        &self.names[id]
    }

    pub(super) fn content_edges(&self, id: usize) -> &[Edge] {
        &self.contents[id]
    }

    pub(super) fn container_edges(&self, id: usize) -> &[Edge] {
        &self.containers[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        light red bags contain 1 bright white bag, 2 muted yellow bags.
        dark orange bags contain 3 bright white bags, 4 muted yellow bags.
        bright white bags contain 1 shiny gold bag.
        muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
        shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
        dark olive bags contain 3 faded blue bags, 4 dotted black bags.
        vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
        faded blue bags contain no other bags.
        dotted black bags contain no other bags.
    "};

    #[test]
    fn test_parse_example() {
        let graph = BagGraph::parse(EXAMPLE).unwrap();
        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.edge_count(), 13);
        assert_eq!(
            graph.contents_of("muted yellow").unwrap(),
            vec![("faded blue", 9), ("shiny gold", 2)]
        );
        assert_eq!(
            graph.containers_of("shiny gold").unwrap(),
            vec![("bright white", 1), ("muted yellow", 2)]
        );
        assert!(graph.contents_of("faded blue").unwrap().is_empty());
        assert!(graph.containers_of("light red").unwrap().is_empty());
    }

    #[test]
    fn test_edges_independent_of_rule_order() {
        let forward = BagGraph::parse(EXAMPLE).unwrap();
        let reversed_text: Vec<&str> = EXAMPLE.lines().rev().collect();
        let reversed = BagGraph::from_rules(reversed_text).unwrap();
        assert_eq!(forward.edges(), reversed.edges());
    }

    #[test]
    fn test_bag_only_mentioned_as_content_is_a_node() {
        let graph = BagGraph::parse("red bags contain 2 blue bags.").unwrap();
        assert!(graph.contains_node("blue"));
        assert!(graph.contains_node("red"));
        assert!(!graph.contains_node("green"));
        assert_eq!(
            graph.edges(),
            vec![ContainmentEdge {
                container: "red",
                content: "blue",
                count: 2
            }]
        );
    }

    #[test]
    fn test_trailing_period_and_blank_lines_optional() {
        let graph = BagGraph::parse("\n  red bags contain 1 blue bag  \n\nblue bags contain no other bags\n")
            .unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.contents_of("red").unwrap(), vec![("blue", 1)]);
    }

    #[test]
    fn test_malformed_rules_rejected_with_line_number() {
        let cases = [
            ("red bags hold 2 blue bags.", "expected `<bag> bags contain <list>`"),
            ("red bags contain two blue bags.", "expected `<count> <bag> bag[s]`"),
            ("red bags contain 2 blue.", "expected `<count> <bag> bag[s]`"),
            ("red bags contain 0 blue bags.", "bag count must be positive"),
            ("red bags contain 99999999999 blue bags.", "bag count too large"),
            ("red bags contain 1 blue bag, 2 blue bags.", "bag listed twice in one rule"),
            ("red bags contain 1 blue bag,.", "expected `<count> <bag> bag[s]`"),
            ("red  bags contain 1 blue bag.", "expected `<bag> bags contain <list>`"),
            ("red bags contain 1  blue bag.", "expected `<count> <bag> bag[s]`"),
            ("red bags contain 1 blue  bag.", "expected `<count> <bag> bag[s]`"),
            ("red bags contain \u{662} blue bags.", "expected `<count> <bag> bag[s]`"),
        ];
        for (rule, expected_reason) in cases {
            let text = format!("blue bags contain no other bags.\n{}", rule);
            match BagGraph::parse(&text) {
                Err(GraphError::Parse { line, reason, text }) => {
                    assert_eq!(line, 2, "{}", rule);
                    assert_eq!(reason, expected_reason, "{}", rule);
                    assert_eq!(text, rule);
                }
                other => panic!("expected parse error for {:?}, got {:?}", rule, other),
            }
        }
    }

    #[test]
    fn test_padded_bag_name_does_not_create_node() {
        let err = BagGraph::parse("red  bags contain 1 blue bag.\nouter bags contain 1 red bag.").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }), "{:?}", err);
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let err = BagGraph::parse(indoc! {"
            red bags contain 1 blue bag.
            blue bags contain no other bags.
            red bags contain no other bags.
        "})
        .unwrap_err();
        assert_eq!(
            err,
            GraphError::Parse {
                line: 3,
                reason: "duplicate rule for bag",
                text: "red bags contain no other bags.".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_bag_lookup() {
        let graph = BagGraph::parse(EXAMPLE).unwrap();
        assert_eq!(
            graph.contents_of("plaid"),
            Err(GraphError::UnknownNode("plaid".to_string()))
        );
    }
}
