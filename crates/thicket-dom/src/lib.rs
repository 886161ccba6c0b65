//! Element tree for Thicket.
//!
//! This crate provides an arena-based tree following the node model of the
//! [DOM Living Standard](https://dom.spec.whatwg.org/). Markup parsing is not
//! part of Thicket; trees are assembled programmatically with
//! [`DomTree::append_element`] and [`DomTree::append_text`].
//!
//! # Design
//!
//! Nodes sit in a single arena and link to their parent, children and both
//! siblings by [`NodeId`]. Every link the selector engine follows is a
//! constant-time lookup.

/// A single `name="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute's local name.
    pub name: String,
    /// The attribute's value (possibly empty).
    pub value: String,
}

impl Attribute {
    /// Create an attribute from anything string-like.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Index of a node in its [`DomTree`].
///
/// Ids are only meaningful for the tree that allocated them. They are handed
/// out in allocation order, which for trees built top-down by appending is
/// also document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// One slot of the arena: the node's payload plus its links.
///
/// Sibling links are stored alongside the child list so the selector
/// combinators can step sideways without searching the parent.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is, with its data.
    pub node_type: NodeType,
    /// `None` for the document and for allocated but unattached nodes.
    pub parent: Option<NodeId>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-next-sibling)
    pub next_sibling: Option<NodeId>,
    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-previous-sibling)
    pub prev_sibling: Option<NodeId>,
}

impl Node {
    const fn detached(node_type: NodeType) -> Self {
        Self {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

/// Node payloads. Only [`NodeType::Element`] nodes take part in matching.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// The tree root. Never matched by selectors.
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(String),
}

/// Element-specific data.
///
/// Attributes keep their source order. Lookups scan front to back, so when a
/// name appears twice the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// Tag name, compared case-sensitively.
    pub tag_name: String,
    /// Attributes in source order, duplicates allowed.
    pub attrs: Vec<Attribute>,
}

impl ElementData {
    /// Create element data with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: Vec::new(),
        }
    }

    /// Builder-style helper appending one attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attribute::new(name, value));
        self
    }

    /// Value of the first attribute called `name`.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Whether any attribute called `name` is present (its value may be empty).
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Returns the class names from the class attribute, in source order.
    ///
    /// The value is split on single U+0020 SPACE characters, so runs of
    /// spaces produce empty entries.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").into_iter().flat_map(|list| list.split(' '))
    }
}

/// Arena of nodes rooted at a Document node.
///
/// All nodes live in one vector and refer to each other by [`NodeId`]. Nodes
/// are never removed, so ids stay valid for the lifetime of the tree.
#[derive(Debug, Clone)]
pub struct DomTree {
    /// Slot 0 is the Document (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// A tree holding only its Document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeType::Document)],
        }
    }

    /// The Document node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The node at `id`, if it exists in this tree.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the tree, the Document included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the Document cannot be removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate an unattached node.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        self.nodes.push(Node::detached(node_type));
        NodeId(self.nodes.len() - 1)
    }

    /// Attach the unattached node `child` as the last child of `parent` and
    /// link it to its new previous sibling.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let last = self.nodes[parent.0].children.last().copied();
        self.nodes[parent.0].children.push(child);

        let node = &mut self.nodes[child.0];
        node.parent = Some(parent);
        node.prev_sibling = last;
        if let Some(last) = last {
            self.nodes[last.0].next_sibling = Some(child);
        }
    }

    /// Allocate an element and append it under `parent`.
    pub fn append_element(&mut self, parent: NodeId, element: ElementData) -> NodeId {
        let id = self.alloc(NodeType::Element(element));
        self.append_child(parent, id);
        id
    }

    /// Allocate a text node and append it under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let id = self.alloc(NodeType::Text(text.into()));
        self.append_child(parent, id);
        id
    }

    /// Parent link; `None` for the Document.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Children of any type, in order. Empty for an unknown id.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// First child of any type.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Next sibling of any type.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Previous sibling of any type.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Ancestors, nearest first, ending with the Document.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> LinkWalk<'_> {
        LinkWalk {
            tree: self,
            current: self.parent(id),
            step: Self::parent,
        }
    }

    /// Earlier siblings, nearest first.
    #[must_use]
    pub fn preceding_siblings(&self, id: NodeId) -> LinkWalk<'_> {
        LinkWalk {
            tree: self,
            current: self.prev_sibling(id),
            step: Self::prev_sibling,
        }
    }

    /// Later siblings, nearest first.
    #[must_use]
    pub fn following_siblings(&self, id: NodeId) -> LinkWalk<'_> {
        LinkWalk {
            tree: self,
            current: self.next_sibling(id),
            step: Self::next_sibling,
        }
    }

    /// The element payload, for element nodes.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// The character data, for text nodes.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Concatenation of the node's immediate text children.
    ///
    /// Text nested inside child elements is not included.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        self.children(id)
            .iter()
            .filter_map(|&child| self.as_text(child))
            .collect()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator following one link (parent, previous or next sibling) until it
/// runs out.
pub struct LinkWalk<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
    step: fn(&DomTree, NodeId) -> Option<NodeId>,
}

impl Iterator for LinkWalk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = (self.step)(self.tree, id);
        Some(id)
    }
}
