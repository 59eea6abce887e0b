//! # Target Contexts
//!
//! A transformer builds the target tree while the walker is still inside the
//! source tree. Each source node that owns children gets a *context*: the
//! place in the target tree where its children's translations belong.
//!
//! Contexts live in a side table keyed by [`NodeId`]. A context names the
//! owning target node by its [`TargetId`] plus a [`Placement`] that says
//! whether children are appended to one of its collections or assigned into
//! one of its slots. The source tree itself stays immutable.
//!
//! Target nodes are kept in a flat arena while the walk runs, each with the
//! ordered list of children placed into it. Installing a context and
//! attaching a node are constant time whatever the nesting depth; the nested
//! tree is assembled once, by [`TargetBuilder::finish`].
//!
//! ## Example
//!
//! ```rust
//! use transpile_pipeline::context::{TargetBuilder, TargetId};
//! use transpile_pipeline::estree::Node;
//! use transpile_pipeline::traverse::{NodeId, Visit};
//!
//! # struct Leaf;
//! # impl transpile_pipeline::traverse::SyntaxNode for Leaf {
//! #     fn node_type(&self) -> &'static str { "Leaf" }
//! #     fn children(&self) -> transpile_pipeline::traverse::Children<'_, Self> {
//! #         transpile_pipeline::traverse::Children::Leaf
//! #     }
//! # }
//! let root = Leaf;
//! let parent = Visit { id: NodeId::ROOT, node: &root };
//!
//! let mut builder = TargetBuilder::new();
//! let id = builder.attach(parent, Node::number("2")).unwrap();
//! assert_ne!(id, TargetId::ROOT);
//! assert_eq!(
//!     builder.finish().unwrap(),
//!     Node::Program { body: vec![Node::number("2")] }
//! );
//! ```

use crate::error::TraversalError;
use crate::estree::{Field, Node};
use crate::traverse::{NodeId, SyntaxNode, Visit};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// TARGET ID
// =============================================================================

/// Handle of a target node inside a [`TargetBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(usize);

impl TargetId {
    /// The target `Program`.
    pub const ROOT: TargetId = TargetId(0);
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

/// How children are placed into their owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Push onto the collection `field`.
    Append(Field),
    /// Fill the empty slot `field`. A slot takes one child only.
    Assign(Field),
}

/// Where translations of a source node's children go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Target node that receives the children.
    pub owner: TargetId,
    /// How they are placed into it.
    pub placement: Placement,
}

impl Context {
    /// Children are pushed onto `owner`'s collection `field`.
    pub fn append(owner: TargetId, field: Field) -> Self {
        Self {
            owner,
            placement: Placement::Append(field),
        }
    }

    /// The single child fills `owner`'s slot `field`.
    pub fn assign(owner: TargetId, field: Field) -> Self {
        Self {
            owner,
            placement: Placement::Assign(field),
        }
    }
}

/// Side table from source node identity to its context.
#[derive(Debug, Default)]
pub struct ContextTable {
    contexts: HashMap<NodeId, Context>,
}

impl ContextTable {
    /// Record the context of a source node, replacing any earlier one.
    pub fn install(&mut self, id: NodeId, context: Context) {
        self.contexts.insert(id, context);
    }

    /// Context of a source node, if one was installed.
    pub fn get(&self, id: NodeId) -> Option<Context> {
        self.contexts.get(&id).copied()
    }
}

// =============================================================================
// TARGET BUILDER
// =============================================================================

/// A target node whose children are still held as handles.
#[derive(Debug)]
struct Entry {
    node: Node,
    children: Vec<(Placement, TargetId)>,
}

/// Target tree under construction, together with the context table that
/// addresses it.
///
/// A new builder holds an empty `Program` whose body is the context of the
/// source root, so top-level translations land in the program body.
#[derive(Debug)]
pub struct TargetBuilder {
    entries: Vec<Entry>,
    contexts: ContextTable,
}

impl Default for TargetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetBuilder {
    /// Create a builder with an empty program.
    pub fn new() -> Self {
        let mut contexts = ContextTable::default();
        contexts.install(NodeId::ROOT, Context::append(TargetId::ROOT, Field::Body));
        Self {
            entries: vec![Entry {
                node: Node::program(),
                children: Vec::new(),
            }],
            contexts,
        }
    }

    /// Make `context` the destination of `id`'s children.
    pub fn install(&mut self, id: NodeId, context: Context) {
        tracing::trace!(%id, owner = %context.owner, "install context");
        self.contexts.install(id, context);
    }

    /// Place `node` into the context of the source node `parent`.
    ///
    /// ## Returns
    ///
    /// The handle of the placed node, so the caller can install it as a
    /// context for the source node it translates. Fails with
    /// `UnknownNodeType` naming the parent when the parent has no context.
    /// See [`TargetBuilder::place`] for the other failures.
    pub fn attach<N: SyntaxNode>(
        &mut self,
        parent: Visit<'_, N>,
        node: Node,
    ) -> Result<TargetId, TraversalError> {
        let context = self
            .contexts
            .get(parent.id)
            .ok_or(TraversalError::UnknownNodeType {
                node_type: parent.node.node_type(),
            })?;
        self.place(context, node)
    }

    /// Wrap `expression` in an `ExpressionStatement` placed into the context
    /// of `parent`, and return the handle of the expression.
    pub fn attach_statement<N: SyntaxNode>(
        &mut self,
        parent: Visit<'_, N>,
        expression: Node,
    ) -> Result<TargetId, TraversalError> {
        // The empty identifier is replaced by `expression` in `finish`.
        let statement = self.attach(parent, Node::statement(Node::identifier("")))?;
        self.place(Context::assign(statement, Field::Expression), expression)
    }

    /// Place `node` according to `context`.
    ///
    /// Fails with `UnknownNodeType` naming the owner when it has no field of
    /// the placement's kind, or naming `node` when the slot is already
    /// filled.
    pub fn place(&mut self, context: Context, node: Node) -> Result<TargetId, TraversalError> {
        let id = TargetId(self.entries.len());
        let owner = self
            .entries
            .get_mut(context.owner.0)
            .ok_or(TraversalError::UnknownNodeType {
                node_type: node.node_type(),
            })?;

        let accepted = match context.placement {
            Placement::Append(field) => owner.node.has_collection(field),
            Placement::Assign(field) => {
                if owner.children.iter().any(|(placed, _)| *placed == context.placement) {
                    return Err(TraversalError::UnknownNodeType {
                        node_type: node.node_type(),
                    });
                }
                owner.node.has_slot(field)
            }
        };
        if !accepted {
            return Err(TraversalError::UnknownNodeType {
                node_type: owner.node.node_type(),
            });
        }

        owner.children.push((context.placement, id));
        self.entries.push(Entry {
            node,
            children: Vec::new(),
        });
        Ok(id)
    }

    /// Context installed for a source node.
    pub fn context(&self, id: NodeId) -> Option<Context> {
        self.contexts.get(id)
    }

    /// Assemble the finished target tree.
    ///
    /// Every child handle is newer than its owner, so walking the arena from
    /// the back finds each child complete before its owner takes it.
    pub fn finish(self) -> Result<Node, TraversalError> {
        let count = self.entries.len();
        let mut built: Vec<Option<Node>> = Vec::with_capacity(count);
        built.resize_with(count, || None);

        for (index, entry) in self.entries.into_iter().enumerate().rev() {
            let Entry { mut node, children } = entry;
            for (placement, child) in children {
                let child = built
                    .get_mut(child.0)
                    .and_then(Option::take)
                    .ok_or(TraversalError::UnknownNodeType {
                        node_type: node.node_type(),
                    })?;
                fill(&mut node, placement, child)?;
            }
            built[index] = Some(node);
        }

        tracing::debug!(nodes = count, "target tree built");
        built
            .into_iter()
            .next()
            .flatten()
            .ok_or(TraversalError::UnknownNodeType { node_type: "Program" })
    }
}

fn fill(owner: &mut Node, placement: Placement, child: Node) -> Result<(), TraversalError> {
    let unknown = TraversalError::UnknownNodeType {
        node_type: owner.node_type(),
    };
    match placement {
        Placement::Append(field) => {
            owner.collection_mut(field).ok_or(unknown)?.push(child);
            Ok(())
        }
        Placement::Assign(field) => owner.set_child(field, child).map_err(|_| unknown),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::Children;

    /// Source tree stand-in: only identity and type matter here.
    struct Source(&'static str);

    impl SyntaxNode for Source {
        fn node_type(&self) -> &'static str {
            self.0
        }

        fn children(&self) -> Children<'_, Self> {
            Children::Leaf
        }
    }

    fn at_root(node: &Source) -> Visit<'_, Source> {
        Visit { id: NodeId::ROOT, node }
    }

    #[test]
    fn test_root_context_is_program_body() {
        let builder = TargetBuilder::new();
        let context = builder.context(NodeId::ROOT).unwrap();
        assert_eq!(context, Context::append(TargetId::ROOT, Field::Body));
    }

    #[test]
    fn test_attach_appends_in_order() {
        let root = Source("Program");
        let mut builder = TargetBuilder::new();
        let first = builder.attach(at_root(&root), Node::number("1")).unwrap();
        let second = builder.attach(at_root(&root), Node::number("2")).unwrap();
        assert_eq!(first.to_string(), "@1");
        assert_eq!(second.to_string(), "@2");
        assert_eq!(
            builder.finish().unwrap(),
            Node::Program {
                body: vec![Node::number("1"), Node::number("2")]
            }
        );
    }

    #[test]
    fn test_nested_context_through_statement() {
        let root = Source("Program");
        let mut builder = TargetBuilder::new();
        let call = builder
            .attach_statement(at_root(&root), Node::call("add", Vec::new()))
            .unwrap();

        // Re-root the program body onto the call so the next attach lands
        // in its arguments.
        builder.install(NodeId::ROOT, Context::append(call, Field::Arguments));
        builder.attach(at_root(&root), Node::number("2")).unwrap();
        builder.attach(at_root(&root), Node::number("3")).unwrap();
        assert_eq!(
            builder.finish().unwrap(),
            Node::Program {
                body: vec![Node::statement(Node::call(
                    "add",
                    vec![Node::number("2"), Node::number("3")]
                ))]
            }
        );
    }

    #[test]
    fn test_assign_fills_slot_once() {
        let root = Source("Program");
        let mut builder = TargetBuilder::new();
        let declarator = builder
            .attach(at_root(&root), Node::declarator("o", None))
            .unwrap();
        builder.install(NodeId::ROOT, Context::assign(declarator, Field::Init));
        builder.attach(at_root(&root), Node::identifier("x")).unwrap();

        let err = builder.attach(at_root(&root), Node::number("1")).unwrap_err();
        assert_eq!(err, TraversalError::UnknownNodeType { node_type: "NumberLiteral" });
        assert_eq!(
            builder.finish().unwrap(),
            Node::Program {
                body: vec![Node::declarator("o", Some(Node::identifier("x")))]
            }
        );
    }

    #[test]
    fn test_missing_parent_context_names_parent() {
        let mut builder = TargetBuilder::new();
        let parent = Source("ChainExpression");
        builder.contexts = ContextTable::default();
        let err = builder.attach(at_root(&parent), Node::number("1")).unwrap_err();
        assert_eq!(err, TraversalError::UnknownNodeType { node_type: "ChainExpression" });
    }

    #[test]
    fn test_wrong_placement_names_owner() {
        let root = Source("Program");
        let mut builder = TargetBuilder::new();
        builder.install(NodeId::ROOT, Context::append(TargetId::ROOT, Field::Arguments));
        let err = builder.attach(at_root(&root), Node::number("1")).unwrap_err();
        assert_eq!(err, TraversalError::UnknownNodeType { node_type: "Program" });

        builder.install(NodeId::ROOT, Context::assign(TargetId::ROOT, Field::Init));
        let err = builder.attach(at_root(&root), Node::number("1")).unwrap_err();
        assert_eq!(err, TraversalError::UnknownNodeType { node_type: "Program" });
    }

    #[test]
    fn test_arena_grows_by_one_entry_per_node() {
        let root = Source("Program");
        let mut builder = TargetBuilder::new();
        let mut owner = builder.attach(at_root(&root), Node::call("f", Vec::new())).unwrap();
        for depth in 2..1000 {
            let context = Context::append(owner, Field::Arguments);
            let call = builder.place(context, Node::call("f", Vec::new())).unwrap();
            assert_eq!(call, TargetId(depth));
            owner = call;
        }
        builder.install(NodeId::ROOT, Context::append(owner, Field::Arguments));
        builder.attach(at_root(&root), Node::number("1")).unwrap();
        assert_eq!(builder.entries.len(), 1001);

        let output = crate::codegen::generate(&builder.finish().unwrap()).unwrap();
        assert_eq!(output, format!("{}1{}", "f(".repeat(999), ")".repeat(999)));
    }
}
