use super::*;
use proptest::prelude::*;

// Property: the parser returns, it never panics, whatever the input
proptest! {
    #[test]
    fn prop_parse_total(s in "\\PC*") {
        let _ = parse(&s);
    }
}

// Property: escaped text parses back to exactly the original text
proptest! {
    #[test]
    fn prop_escape_is_literal(s in "[a-zA-Z0-9 $~{}().]*") {
        let root = parse(&escape(&s)).unwrap();
        prop_assert!(!root.has_spans());
        prop_assert_eq!(root.plain_text(), s);
    }
}

// Property: text without special characters is one text node
proptest! {
    #[test]
    fn prop_plain_text_single_node(s in "[a-zA-Z0-9 ,.:;!?()]+") {
        let root = parse(&s).unwrap();
        prop_assert_eq!(root.children, vec![MarkupNode::text(s)]);
    }
}

// Property: a resolver that knows nothing leaves the text unchanged
proptest! {
    #[test]
    fn prop_expand_without_values_is_identity(s in "[a-z ${}:_^~]*") {
        prop_assert_eq!(expand_variables(&s, |_, _| None), s);
    }
}
