#![deny(clippy::disallowed_methods)]

use itertools::Itertools;
#[cfg(any(test, feature = "proptest-arbitrary"))]
use proptest::prelude::*;
use std::{fmt, iter::successors};
use tracing::trace;


#[cfg(any(test, feature = "proptest-arbitrary"))]
const MAX_LEN: usize = 32;

/// Position of a node within the list that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// A singly linked list that always holds at least one node.
///
/// Nodes live in an arena owned by the list and link to their successor by
/// index. The tail is a plain index into the arena, so appending never walks
/// the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkedList<T> {
    nodes: Vec<Node<T>>,
    head: NodeId,
    tail: NodeId,
    length: usize,
}

impl<T> LinkedList<T> {
    pub fn new(value: T) -> Self {
        LinkedList {
            nodes: vec![Node { value, next: None }],
            head: NodeId(0),
            tail: NodeId(0),
            length: 1,
        }
    }

    pub fn append(&mut self, value: T) {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { value, next: None });
        self.nodes[self.tail.0].next = Some(id);
        self.tail = id;
        self.length += 1;
        trace!(length = self.length, "appended node");
    }

    pub fn len(&self) -> usize {
        self.length
    }

    // there is always a head node
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn tail(&self) -> NodeId {
        self.tail
    }

    /// `None` if `id` was handed out by a different, shorter list.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    pub fn next_node(&self, node: &Node<T>) -> Option<&Node<T>> {
        node.next.and_then(|id| self.node(id))
    }

    // ids reachable from head always index into this list's arena
    fn walk(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> + '_ {
        successors(Some(self.head), |&id| self.nodes[id.0].next).map(|id| (id, &self.nodes[id.0]))
    }

    pub fn invariants(&self) -> bool {
        let mut visited = 0;
        let mut last = self.head;
        for (id, _) in self.walk() {
            visited += 1;
            last = id;
            // a cycle would never reach the tail
            if visited > self.nodes.len() {
                return false;
            }
        }
        self.nodes[self.tail.0].next.is_none()
            && last == self.tail
            && visited == self.length
            && self.nodes.len() == self.length
    }
}

// values in order from head to tail, separated by spaces
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.walk().map(|(_, node)| &node.value).join(" "))
    }
}

#[cfg(any(test, feature = "proptest-arbitrary"))]
impl<T: Arbitrary> LinkedList<T> {
    pub fn arb_list() -> impl Strategy<Value = Self> {
        (T::arbitrary(), proptest::collection::vec(T::arbitrary(), 0..MAX_LEN)).prop_map(
            |(first, rest)| {
                let mut list = LinkedList::new(first);
                for t in rest {
                    list.append(t);
                }
                list
            },
        )
    }
}
