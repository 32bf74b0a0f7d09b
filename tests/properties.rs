//! Property-based tests for query equivalences

use proptest::prelude::*;
use xmlquery::{Query, Selector, XmlNode};

fn arb_node() -> impl Strategy<Value = XmlNode> {
    let leaf = prop_oneof![
        "[a-c]".prop_map(|name: String| XmlNode::element(name)),
        "[a-z ]{0,4}".prop_map(|value: String| XmlNode::text(value)),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            "[a-c]",
            prop::option::of("[0-2]"),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, id, children)| {
                let node = XmlNode::element(name).with_children(children);
                match id {
                    Some(id) => node.with_attr("id", id),
                    None => node,
                }
            })
    })
}

fn count_named(node: &XmlNode, name: &str) -> usize {
    let own = usize::from(node.name() == Some(name));
    own + node.children().iter().map(|child| count_named(child, name)).sum::<usize>()
}

proptest! {
    #[test]
    fn has_agrees_with_find(root in arb_node(), name in "[a-d]") {
        let query = Query::from_node(&root);
        prop_assert_eq!(query.has(name.as_str()), query.find(name.as_str()).size() > 0);
    }

    #[test]
    fn has_agrees_with_find_filtered(root in arb_node(), name in "[a-c]", id in "[0-3]") {
        let query = Query::from_node(&root);
        let selector = Selector::tag(&name).with_attr("id", &id);
        prop_assert_eq!(query.has(&selector), query.find(&selector).size() > 0);
    }

    #[test]
    fn find_counts_every_named_node(root in arb_node(), name in "[a-c]") {
        let found = Query::from_node(&root).find(name.as_str());
        prop_assert_eq!(found.size(), count_named(&root, &name));
        prop_assert!(found.iter().all(|node| node.name() == Some(name.as_str())));
    }

    #[test]
    fn children_flattens_one_level(roots in prop::collection::vec(arb_node(), 0..4)) {
        let query = Query::from(&roots);
        let expected: usize = roots.iter().map(|node| node.children().len()).sum();
        prop_assert_eq!(query.children().size(), expected);
    }

    #[test]
    fn duplicated_context_doubles_results(root in arb_node(), name in "[a-c]") {
        let single = Query::from_node(&root);
        let doubled = Query::new([&root, &root]);
        prop_assert_eq!(doubled.find(name.as_str()).size(), 2 * single.find(name.as_str()).size());
        prop_assert_eq!(doubled.text(), single.text().repeat(2));
    }
}
