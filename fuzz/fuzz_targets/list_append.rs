#![no_main]
use libfuzzer_sys::fuzz_target;

use slist::LinkedList;

fuzz_target!(|input: (u32, Vec<u32>)| {
    let (first, rest) = input;
    let mut list = LinkedList::new(first);
    for &t in &rest {
        list.append(t);
    }
    assert!(list.invariants());
    assert_eq!(list.len(), rest.len() + 1);

    let mut node = list.node(list.head());
    for expected in std::iter::once(first).chain(rest) {
        let n = node.unwrap();
        assert_eq!(*n.value(), expected);
        node = list.next_node(n);
    }
    assert!(node.is_none());
});
