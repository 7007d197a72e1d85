use std::fmt::{self, Display, Formatter};
use log::trace;
use crate::sceneparser::error::{Error, ErrorCode, Result};
use crate::sceneparser::factory::{self, ContainerKind, NodeKind};
use crate::sceneparser::stream::Stream;
use crate::sceneparser::value::Value;

/// Index of a node inside its owning `Tree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Container(Container),
    Leaf(Value)
}

/// Keyed children in the order they were read. Keys are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub kind : ContainerKind,
    children : Vec<(String, NodeId)>
}

impl Container {
    pub fn get(&self, key: &str) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(k, _)| k == key)
            .map(|&(_, id)| id)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.children.iter().map(|(k, id)| (k.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena holding one parsed container and everything below it. Children
/// are stored before their parent, so the root is always the last node.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes : Vec<Node>,
    root  : NodeId
}

impl Tree {
    /// Parses a `{ key = value; ... }` block whose legal keys are those of
    /// `kind`. Nothing is returned unless the whole block is valid.
    pub fn parse(s: &mut Stream, kind: ContainerKind) -> Result<Tree> {
        let mut nodes = Vec::new();
        let root = parse_container(&mut nodes, s, kind)?;

        Ok(Tree { nodes, root })
    }

    pub fn parse_str(text: &str, kind: ContainerKind) -> Result<Tree> {
        Tree::parse(&mut Stream::new(text), kind)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// `None` when `id` came from another tree and is out of range here.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn container(&self, id: NodeId) -> Option<&Container> {
        match self.node(id)? {
            Node::Container(c) => Some(c),
            Node::Leaf(_)      => None
        }
    }

    // Ids reached from our own containers always index into `nodes`.
    fn at(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn root_container(&self) -> &Container {
        match self.at(self.root) {
            Node::Container(c) => c,
            Node::Leaf(_)      => unreachable!("tree root is always a container")
        }
    }

    pub fn kind(&self) -> ContainerKind {
        self.root_container().kind
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.root_container().get(key).map(|id| self.at(id))
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        match self.get(key)? {
            Node::Leaf(v)      => Some(v),
            Node::Container(_) => None
        }
    }

    /// Copy of the container stored under `key`, as a tree of its own.
    pub fn subtree(&self, key: &str) -> Option<Tree> {
        let id = self.root_container().get(key)?;
        self.container(id)?;

        let mut nodes = Vec::new();
        let root = self.copy_into(id, &mut nodes);

        Some(Tree { nodes, root })
    }

    fn copy_into(&self, id: NodeId, out: &mut Vec<Node>) -> NodeId {
        let node = match self.at(id) {
            Node::Leaf(v)      => Node::Leaf(v.clone()),
            Node::Container(c) => {
                let children = c
                    .entries()
                    .map(|(k, child)| (k.to_owned(), self.copy_into(child, out)))
                    .collect();

                Node::Container(Container { kind: c.kind, children })
            }
        };

        out.push(node);
        NodeId(out.len() - 1)
    }

    fn write_node(&self, f: &mut Formatter<'_>, id: NodeId) -> fmt::Result {
        match self.at(id) {
            Node::Leaf(v)      => write!(f, "{}", v),
            Node::Container(c) => {
                write!(f, "{{ ")?;
                for (key, child) in c.entries() {
                    write!(f, "{} = ", key)?;
                    self.write_node(f, child)?;
                    write!(f, "; ")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root)
    }
}

fn parse_node(nodes: &mut Vec<Node>, s: &mut Stream, kind: NodeKind) -> Result<NodeId> {
    match kind {
        NodeKind::Container(c) => parse_container(nodes, s, c),
        NodeKind::Leaf(v)      => {
            let value = Value::decode(s, v)?;
            nodes.push(Node::Leaf(value));
            Ok(NodeId(nodes.len() - 1))
        }
    }
}

fn parse_container(nodes: &mut Vec<Node>, s: &mut Stream, kind: ContainerKind) -> Result<NodeId> {
    s.expect('{')?;

    let mut children: Vec<(String, NodeId)> = Vec::new();

    loop {
        if s.eat('}') {
            break;
        }

        let location = s.location();
        let key = read_key(s)?;
        s.expect('=')?;

        let child_kind = factory::make_child(kind, key)
            .map_err(|code| Error::new(location, code))?;
        trace!("{} key \"{}\" -> {:?}", kind, key, child_kind);

        let id = parse_node(nodes, s, child_kind)?;

        if children.iter().any(|(k, _)| k == key) {
            return Err(Error::new(location, ErrorCode::DuplicateKey { key: key.to_owned() }));
        }
        children.push((key.to_owned(), id));

        s.expect(';')?;
    }

    nodes.push(Node::Container(Container { kind, children }));
    Ok(NodeId(nodes.len() - 1))
}

/// Entry key. Anything else where a key may start means the block was
/// supposed to close.
pub(crate) fn read_key<'input>(s: &mut Stream<'input>) -> Result<&'input str> {
    if let Some(key) = s.key() {
        return Ok(key);
    }

    match s.peek() {
        Some(found) => Err(s.error(ErrorCode::ExpectedCharacter { expected: '}', found })),
        None        => Err(s.error(ErrorCode::UnexpectedEndOfInput))
    }
}
