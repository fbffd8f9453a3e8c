use crate::{error::ErrorTree, visit::Visitor};

///
/// ValidateNode
///
/// Local invariants for one model node. Failures accumulate; a node with
/// nothing to check keeps the default.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// VisitableNode
///

pub trait VisitableNode: ValidateNode {
    /// Route segment identifying this node in aggregated errors.
    fn route_key(&self) -> String {
        String::new()
    }

    fn drive<V: Visitor>(&self, _v: &mut V) {}

    fn accept<V: Visitor>(&self, v: &mut V)
    where
        Self: Sized,
    {
        v.enter(&self.route_key());
        v.check(self);
        self.drive(v);
        v.exit();
    }
}
