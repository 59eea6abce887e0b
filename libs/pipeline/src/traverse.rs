//! # Tree Walker
//!
//! Generic depth-first traversal of any source tree. For every reachable node
//! the walker calls [`Visitor::enter`] (pre-order), recurses into the node's
//! children, then calls [`Visitor::exit`] (post-order). It never mutates the
//! tree and knows nothing about what the hooks do.
//!
//! The only grammar-specific knowledge is which fields hold children. Each
//! grammar supplies it by implementing [`SyntaxNode::children`] as an
//! exhaustive `match` over its node enum, so adding a node type without a
//! children rule does not compile.
//!
//! ## Example
//!
//! ```rust
//! use transpile_pipeline::error::TraversalError;
//! use transpile_pipeline::traverse::{traverse, Children, SyntaxNode, Visit, Visitor};
//!
//! enum Expr {
//!     Sum(Vec<Expr>),
//!     Num(u32),
//! }
//!
//! impl SyntaxNode for Expr {
//!     fn node_type(&self) -> &'static str {
//!         match self {
//!             Expr::Sum(_) => "Sum",
//!             Expr::Num(_) => "Num",
//!         }
//!     }
//!
//!     fn children(&self) -> Children<'_, Self> {
//!         match self {
//!             Expr::Sum(terms) => Children::Many(terms.as_slice()),
//!             Expr::Num(_) => Children::Leaf,
//!         }
//!     }
//! }
//!
//! struct Total(u32);
//!
//! impl Visitor<Expr> for Total {
//!     fn enter(
//!         &mut self,
//!         visit: Visit<'_, Expr>,
//!         _: Option<Visit<'_, Expr>>,
//!     ) -> Result<(), TraversalError> {
//!         if let Expr::Num(n) = visit.node {
//!             self.0 += n;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let tree = Expr::Sum(vec![Expr::Num(2), Expr::Sum(vec![Expr::Num(4), Expr::Num(2)])]);
//! let mut total = Total(0);
//! traverse(&tree, &mut total).unwrap();
//! assert_eq!(total.0, 8);
//! ```

use crate::error::TraversalError;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use serde::Serialize;
use std::fmt;

// =============================================================================
// SYNTAX NODE
// =============================================================================

/// A node of a tree the walker can traverse.
pub trait SyntaxNode: Sized {
    /// Tag naming the node's variant, e.g. `CallExpression`.
    fn node_type(&self) -> &'static str;

    /// The node's child collection, in traversal order.
    fn children(&self) -> Children<'_, Self>;
}

/// Children of a node, as declared by its grammar.
#[derive(Debug)]
pub enum Children<'a, N> {
    /// The node is a traversal leaf.
    Leaf,
    /// A single child field, e.g. a declarator's initializer.
    One(&'a N),
    /// A child collection, e.g. a program body.
    Many(&'a [N]),
}

impl<'a, N> Children<'a, N> {
    /// View the children as a slice.
    pub fn as_slice(&self) -> &'a [N] {
        match *self {
            Children::Leaf => &[],
            Children::One(child) => std::slice::from_ref(child),
            Children::Many(children) => children,
        }
    }
}

// =============================================================================
// NODE IDENTITY
// =============================================================================

/// Identity of a node within one traversal: its pre-order index.
///
/// Ids are handed out as nodes are entered, so a parent's id is always
/// smaller than its children's and the root is always [`NodeId::ROOT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Id of the node traversal starts from.
    pub const ROOT: NodeId = NodeId(0);

    /// Pre-order index of the node.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node together with its identity in the current traversal.
#[derive(Debug)]
pub struct Visit<'a, N> {
    /// Identity of the node.
    pub id: NodeId,
    /// The node itself.
    pub node: &'a N,
}

impl<N> Clone for Visit<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Visit<'_, N> {}

// =============================================================================
// VISITOR
// =============================================================================

/// Hooks called by [`traverse`]. Both default to doing nothing, so a visitor
/// only overrides what it intercepts.
pub trait Visitor<N: SyntaxNode> {
    /// Called before the node's children are visited.
    fn enter(
        &mut self,
        visit: Visit<'_, N>,
        parent: Option<Visit<'_, N>>,
    ) -> Result<(), TraversalError> {
        let _ = (visit, parent);
        Ok(())
    }

    /// Called after the node's children are visited.
    fn exit(
        &mut self,
        visit: Visit<'_, N>,
        parent: Option<Visit<'_, N>>,
    ) -> Result<(), TraversalError> {
        let _ = (visit, parent);
        Ok(())
    }
}

// =============================================================================
// TRAVERSAL
// =============================================================================

/// Walk `root` depth-first, driving `visitor`.
///
/// The first hook error stops the walk; no further hooks run.
pub fn traverse<N, V>(root: &N, visitor: &mut V) -> Result<(), TraversalError>
where
    N: SyntaxNode,
    V: Visitor<N> + ?Sized,
{
    let mut walker = Walker {
        visitor,
        next_id: NodeId::ROOT.index(),
    };
    walker.traverse_node(root, None)?;
    tracing::debug!(nodes = walker.next_id, "traversed tree");
    Ok(())
}

struct Walker<'v, V: ?Sized> {
    visitor: &'v mut V,
    next_id: usize,
}

impl<V: ?Sized> Walker<'_, V> {
    fn traverse_node<'n, N>(
        &mut self,
        node: &'n N,
        parent: Option<Visit<'n, N>>,
    ) -> Result<(), TraversalError>
    where
        N: SyntaxNode,
        V: Visitor<N>,
    {
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.visit_node(node, parent)
        })
    }

    fn visit_node<'n, N>(
        &mut self,
        node: &'n N,
        parent: Option<Visit<'n, N>>,
    ) -> Result<(), TraversalError>
    where
        N: SyntaxNode,
        V: Visitor<N>,
    {
        let visit = Visit {
            id: NodeId(self.next_id),
            node,
        };
        self.next_id += 1;
        tracing::trace!(id = %visit.id, node_type = node.node_type(), "enter");

        self.visitor.enter(visit, parent)?;
        for child in node.children().as_slice() {
            self.traverse_node(child, Some(visit))?;
        }
        self.visitor.exit(visit, parent)
    }
}

// =============================================================================
// TESTS
// =============================================================================
