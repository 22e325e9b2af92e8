//! Flattening properties: nesting never changes the output, only the order does.

use proptest::prelude::*;
use thriftdoc_babel::markdown::{assemble, render, tree_to_blocks, DocTree, HeadingLevel, MdNode};

fn leaf() -> impl Strategy<Value = DocTree> {
    prop_oneof![
        (1usize..=6, "[A-Za-z]{1,12}").prop_map(|(depth, text)| {
            let level = HeadingLevel::from_depth(depth).unwrap_or(HeadingLevel::H6);
            DocTree::from(MdNode::heading(level, text.as_str()))
        }),
        "[a-z ]{0,12}".prop_map(|text| DocTree::from(MdNode::block_quote(text.as_str()))),
        "[a-z ]{0,12}".prop_map(|text| DocTree::from(MdNode::paragraph(text.as_str()))),
        "[a-z\\[\\]_]{0,10}".prop_map(DocTree::raw),
    ]
}

fn doc_tree() -> impl Strategy<Value = DocTree> {
    leaf().prop_recursive(4, 32, 5, |inner| {
        prop::collection::vec(inner, 0..5).prop_map(DocTree::seq)
    })
}

proptest! {
    #[test]
    fn concatenation_of_trees_is_concatenation_of_outputs(a in doc_tree(), b in doc_tree()) {
        let expected = format!("{}{}", assemble(&a), assemble(&b));
        prop_assert_eq!(assemble(&DocTree::seq(vec![a, b])), expected);
    }

    #[test]
    fn grouping_does_not_change_output(a in doc_tree(), b in doc_tree(), c in doc_tree()) {
        let left = DocTree::seq(vec![DocTree::seq(vec![a.clone(), b.clone()]), c.clone()]);
        let right = DocTree::seq(vec![a, DocTree::seq(vec![b, c])]);
        prop_assert_eq!(assemble(&left), assemble(&right));
    }

    #[test]
    fn wrapping_in_a_sequence_is_transparent(tree in doc_tree()) {
        let wrapped = DocTree::seq(vec![tree.clone()]);
        prop_assert_eq!(assemble(&wrapped), assemble(&tree));
    }

    #[test]
    fn assembling_twice_gives_identical_text(tree in doc_tree()) {
        prop_assert_eq!(assemble(&tree), assemble(&tree));
    }

    #[test]
    fn flattening_a_flat_sequence_preserves_it(
        texts in prop::collection::vec("[a-z]{1,8}", 0..8),
    ) {
        let nodes: Vec<MdNode> = texts.iter().map(|t| MdNode::paragraph(t.as_str())).collect();
        let tree = DocTree::from(nodes.clone());
        let expected: String = nodes.iter().map(render).collect();

        prop_assert_eq!(tree_to_blocks(&tree).len(), nodes.len());
        prop_assert_eq!(assemble(&tree), expected);
    }
}

#[test]
fn empty_sequences_vanish() {
    let tree = DocTree::seq(vec![
        DocTree::seq(vec![]),
        MdNode::heading(HeadingLevel::H2, "Types").into(),
        DocTree::seq(vec![DocTree::seq(vec![])]),
    ]);

    assert_eq!(tree_to_blocks(&tree).len(), 1);
    assert_eq!(assemble(&tree), "## Types\n\n");
}
