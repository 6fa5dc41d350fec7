// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean query expression tree.

use std::fmt;

/// A parsed boolean query.
///
/// `And`/`Or` hold one or more children. The parser collapses single-child
/// nodes into the child itself, so a well-formed tree never wraps a lone
/// operand and the evaluator never sees an empty operand list.
///
/// Term text is preserved exactly as read; normalization to the on-disk
/// term form happens in the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    Term(String),
    Not(Box<QueryNode>),
    And(Vec<QueryNode>),
    Or(Vec<QueryNode>),
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryNode::Term(term) => write!(f, "{term}"),
            QueryNode::Not(child) => write!(f, "NOT({child})"),
            QueryNode::And(children) => write_operands(f, "AND", children),
            QueryNode::Or(children) => write_operands(f, "OR", children),
        }
    }
}

fn write_operands(f: &mut fmt::Formatter<'_>, name: &str, children: &[QueryNode]) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, ")")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_nested_tree() {
        let node = QueryNode::Or(vec![
            QueryNode::Term("кот".to_string()),
            QueryNode::And(vec![
                QueryNode::Term("собака".to_string()),
                QueryNode::Not(Box::new(QueryNode::Term("мышь".to_string()))),
            ]),
        ]);
        assert_eq!(node.to_string(), "OR(кот, AND(собака, NOT(мышь)))");
    }
}
