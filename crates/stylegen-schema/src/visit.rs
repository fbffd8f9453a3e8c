use crate::{error::ErrorTree, node::ValidateNode};

///
/// Visitor
///

pub trait Visitor {
    fn enter(&mut self, _segment: &str) {}
    fn exit(&mut self) {}

    fn check(&mut self, node: &dyn ValidateNode);
}

///
/// ValidateVisitor
///
/// Walks a node graph, running each node's local validation and
/// aggregating failures under route-aware keys.
///

#[derive(Default)]
pub struct ValidateVisitor {
    pub errors: ErrorTree,
    route: Vec<String>,
}

impl ValidateVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn current_route(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .route
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("."))
        }
    }
}

impl Visitor for ValidateVisitor {
    fn enter(&mut self, segment: &str) {
        self.route.push(segment.to_string());
    }

    fn exit(&mut self) {
        self.route.pop();
    }

    fn check(&mut self, node: &dyn ValidateNode) {
        if let Err(tree) = node.validate() {
            match self.current_route() {
                Some(route) => self.errors.merge(&route, tree),
                None => self.errors.extend(tree),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err;

    struct Leaf {
        ok: bool,
    }

    impl ValidateNode for Leaf {
        fn validate(&self) -> Result<(), ErrorTree> {
            let mut errs = ErrorTree::new();
            if !self.ok {
                err!(errs, "leaf is broken");
            }

            errs.result()
        }
    }

    impl crate::node::VisitableNode for Leaf {
        fn route_key(&self) -> String {
            "leaf".to_string()
        }
    }

    #[test]
    fn aggregates_under_routes() {
        use crate::node::VisitableNode;

        let mut visitor = ValidateVisitor::new();
        Leaf { ok: false }.accept(&mut visitor);
        Leaf { ok: true }.accept(&mut visitor);

        let tree = visitor.errors.result().unwrap_err();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.to_string(), "leaf: leaf is broken");
    }
}
