//! The topic catalog: a fixed, ordered set of browsable cards.

use crate::error::{Result, TopixError};

/// Icon shown next to a topic title.
///
/// The catalog is closed, so the icons form a closed enumeration; each
/// variant maps to a single terminal glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicIcon {
    /// Indexed list.
    List,
    /// Chain link.
    Link,
    /// Stacked layers.
    Layers,
    /// Flowing stream.
    Stream,
    /// Tree.
    Tree,
    /// Connected diagram.
    Diagram,
    /// Hash mark.
    Hash,
    /// Puzzle piece.
    Puzzle,
}

impl TopicIcon {
    /// Get the glyph rendered for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            TopicIcon::List => "☰",
            TopicIcon::Link => "⛓",
            TopicIcon::Layers => "▤",
            TopicIcon::Stream => "≋",
            TopicIcon::Tree => "🌲",
            TopicIcon::Diagram => "◉",
            TopicIcon::Hash => "#",
            TopicIcon::Puzzle => "⬡",
        }
    }
}

/// A single catalog entry.
///
/// Topics are defined once at startup and never mutated. The id is the
/// stable key used for expansion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Unique, stable identifier.
    pub id: u32,
    /// Card title (the search target).
    pub title: &'static str,
    /// Icon shown next to the title.
    pub icon: TopicIcon,
    /// Short description, always visible.
    pub description: &'static str,
    /// Long-form text shown when the card is expanded.
    pub details: &'static str,
}

/// The ordered topic catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    /// Build a catalog from an ordered list of topics.
    ///
    /// Ids must be unique; they key the expansion state across renders.
    pub fn new(topics: Vec<Topic>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for topic in &topics {
            if !seen.insert(topic.id) {
                return Err(TopixError::duplicate_topic(topic.id));
            }
        }
        Ok(Self { topics })
    }

    /// Build the built-in data-structure catalog.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_topics())
    }

    /// All topics in catalog order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Number of topics in the catalog.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Look up a topic by id.
    pub fn get(&self, id: u32) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Filter topics whose title contains `term`, case-insensitively.
    ///
    /// Order is preserved; an empty term matches everything.
    pub fn filter(&self, term: &str) -> Vec<&Topic> {
        let term_lower = term.to_lowercase();
        self.topics
            .iter()
            .filter(|topic| topic.title.to_lowercase().contains(&term_lower))
            .collect()
    }
}

fn builtin_topics() -> Vec<Topic> {
    vec![
        Topic {
            id: 1,
            title: "Arrays",
            icon: TopicIcon::List,
            description: "A data structure consisting of a collection of elements, each identified by an array index.",
            details: "Arrays are fundamental data structures that store elements of the same type in contiguous memory locations. They provide constant-time access to elements using their indices. Common operations include insertion, deletion, and traversal. Arrays are widely used in various algorithms and form the basis for more complex data structures.",
        },
        Topic {
            id: 2,
            title: "Linked Lists",
            icon: TopicIcon::Link,
            description: "A linear collection of data elements whose order is not given by their physical placement in memory.",
            details: "Linked Lists consist of nodes, where each node contains data and a reference (or link) to the next node in the sequence. They allow for efficient insertion and deletion of elements, but do not provide constant-time access to individual elements. Linked Lists can be singly linked, doubly linked, or circular, each with its own advantages and use cases.",
        },
        Topic {
            id: 3,
            title: "Stacks",
            icon: TopicIcon::Layers,
            description: "A Last-In-First-Out (LIFO) data structure.",
            details: "Stacks follow the Last-In-First-Out (LIFO) principle, where the last element added is the first one to be removed. They support two main operations: push (add an element) and pop (remove the top element). Stacks are used in various algorithms, including depth-first search, expression evaluation, and function call management in programming languages.",
        },
        Topic {
            id: 4,
            title: "Queues",
            icon: TopicIcon::Stream,
            description: "A First-In-First-Out (FIFO) data structure.",
            details: "Queues follow the First-In-First-Out (FIFO) principle, where the first element added is the first one to be removed. They support two main operations: enqueue (add an element) and dequeue (remove the front element). Queues are used in breadth-first search, task scheduling, and buffer management in various applications.",
        },
        Topic {
            id: 5,
            title: "Trees",
            icon: TopicIcon::Tree,
            description: "A hierarchical data structure consisting of nodes connected by edges.",
            details: "Trees are non-linear data structures composed of nodes connected by edges. Each tree has a root node, and every node can have child nodes. Common types include binary trees, binary search trees, AVL trees, and B-trees. Trees are used in file systems, expression parsing, and efficient searching and sorting algorithms.",
        },
        Topic {
            id: 6,
            title: "Graphs",
            icon: TopicIcon::Diagram,
            description: "A non-linear data structure consisting of vertices and edges.",
            details: "Graphs are versatile data structures consisting of vertices (nodes) connected by edges. They can be directed or undirected, weighted or unweighted. Graphs are used to represent networks, social connections, and various real-world relationships. Common algorithms include depth-first search, breadth-first search, Dijkstra's algorithm, and minimum spanning tree algorithms.",
        },
        Topic {
            id: 7,
            title: "Hash Tables",
            icon: TopicIcon::Hash,
            description: "A data structure that implements an associative array abstract data type.",
            details: "Hash Tables provide efficient key-value pair storage and retrieval. They use a hash function to compute an index for each key, allowing for constant-time average-case complexity for basic operations. Hash Tables are used in database indexing, caches, and implementing sets and maps in programming languages.",
        },
        Topic {
            id: 8,
            title: "Heaps",
            icon: TopicIcon::Puzzle,
            description: "A specialized tree-based data structure that satisfies the heap property.",
            details: "Heaps are complete binary trees that satisfy the heap property: for a max heap, each parent node is greater than or equal to its children; for a min heap, each parent is less than or equal to its children. Heaps are used to implement priority queues and in algorithms like heapsort and Dijkstra's algorithm for efficient element retrieval.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_has_eight_topics_in_id_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<u32> = catalog.topics().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn empty_term_matches_everything() {
        let catalog = Catalog::builtin().unwrap();
        let filtered = catalog.filter("");
        assert_eq!(filtered.len(), catalog.len());
        let ids: Vec<u32> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        let filtered = catalog.filter("array");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[0].title, "Arrays");

        let upper = catalog.filter("ARRAY");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].id, 1);
    }

    #[test]
    fn filter_excludes_non_matching_titles() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.filter("xyz").is_empty());

        let term = "a";
        for topic in catalog.topics() {
            let matched = catalog.filter(term).iter().any(|t| t.id == topic.id);
            assert_eq!(matched, topic.title.to_lowercase().contains(term));
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let catalog = Catalog::builtin().unwrap();
        let once = catalog.filter("s");
        let sub = Catalog::new(once.iter().map(|t| (*t).clone()).collect()).unwrap();
        let twice = sub.filter("s");
        let once_ids: Vec<u32> = once.iter().map(|t| t.id).collect();
        let twice_ids: Vec<u32> = twice.iter().map(|t| t.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let dup = Topic {
            id: 1,
            title: "Arrays",
            icon: TopicIcon::List,
            description: "",
            details: "",
        };
        let result = Catalog::new(vec![dup.clone(), dup]);
        assert!(result.is_err());
    }

    #[test]
    fn get_finds_topics_by_id() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.get(5).unwrap().title, "Trees");
        assert!(catalog.get(99).is_none());
    }
}
