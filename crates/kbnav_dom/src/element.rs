//! Element handles over the rcdom tree.

use std::rc::Rc;

use markup5ever::LocalName;
use rcdom::NodeData;
use tendril::StrTendril;

/// A reference to a node in the parsed tree.
pub type Handle = Rc<rcdom::Node>;

/// An element handle over an rcdom node.
///
/// Handles are cheap to clone and compare by node identity. All accessors
/// are read-only views of the tree at call time.
#[derive(Clone)]
pub struct Element {
    /// The wrapped node.
    pub node: Handle,
}

fn is_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

impl Element {
    /// Wraps a node without checking its type; non-element nodes answer
    /// every query negatively.
    pub fn new(node: Handle) -> Self {
        Self { node }
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Returns the element's local tag name.
    pub fn local_name(&self) -> Option<LocalName> {
        let NodeData::Element { ref name, .. } = self.node.data else {
            return None;
        };
        Some(name.local.clone())
    }

    /// Whether the element's tag matches the given local name.
    pub fn is(&self, name: &LocalName) -> bool {
        self.local_name().is_some_and(|n| &n == name)
    }

    /// Returns the value of an attribute by local name.
    pub fn attr(&self, attr: &LocalName) -> Option<StrTendril> {
        let NodeData::Element { ref attrs, .. } = self.node.data else {
            return None;
        };
        attrs
            .borrow()
            .iter()
            .find(|a| &a.name.local == attr)
            .map(|a| a.value.clone())
    }

    /// Whether the element carries the given attribute, with any value.
    pub fn has_attr(&self, attr: &LocalName) -> bool {
        self.attr(attr).is_some()
    }

    /// Returns the element's parent element, if it has one.
    pub fn parent(&self) -> Option<Self> {
        let parent = self.node.parent.take()?;
        let parent_node = parent.upgrade();
        self.node.parent.set(Some(parent));
        let parent_node = parent_node?;
        if is_element(&parent_node) {
            Some(Self::new(parent_node))
        } else {
            None
        }
    }

    /// Iterates over the element's ancestor elements, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = Self> {
        std::iter::successors(self.parent(), Self::parent)
    }

    /// Walks up from this element (inclusive) until an element with the
    /// given tag is found.
    pub fn closest(&self, name: &LocalName) -> Option<Self> {
        std::iter::once(self.clone())
            .chain(self.ancestors())
            .find(|e| e.is(name))
    }

    /// Iterates over the element's child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = Self> {
        let children = self.node.children.borrow().clone();
        children.into_iter().filter(is_element).map(Self::new)
    }

    /// Returns the element's first child element.
    pub fn first_element_child(&self) -> Option<Self> {
        self.children().next()
    }

    /// Returns a depth-first, pre-order iterator over the element's strict
    /// descendants.
    pub fn descendants(&self) -> ElementIterator {
        ElementIterator {
            current: self.clone(),
            index_cache: Vec::default(),
        }
    }

    /// Returns the topmost element still connected to this one.
    ///
    /// For a mounted element that is the document element (`<html>`); for a
    /// detached subtree it is the subtree's root element.
    pub fn scope_root(&self) -> Self {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let NodeData::Element { ref name, ref attrs, .. } = self.node.data else {
            return f.write_str("Element(#non-element)");
        };
        write!(f, "<{}", name.local)?;
        for attr in attrs.borrow().iter() {
            write!(f, r#" {}="{}""#, attr.name.local, attr.value)?;
        }
        f.write_str(">")
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Element {}

impl From<&Handle> for Element {
    fn from(value: &Handle) -> Self {
        Self::new(value.clone())
    }
}

/// Depth-first, pre-order iterator over the descendants of an element.
///
/// The starting element itself is not yielded. The iterator assumes the
/// tree is not mutated while it is alive.
pub struct ElementIterator {
    current: Element,
    index_cache: Vec<usize>,
}

impl ElementIterator {
    fn get_first_child(&mut self) -> Option<Element> {
        let children = &*self.current.node.children.borrow();
        let (index, first_child) = children.iter().enumerate().find(|(_, c)| is_element(c))?;
        self.index_cache.push(index);
        Some(Element::new(first_child.clone()))
    }

    fn get_next_sibling(&mut self) -> Option<Element> {
        let self_index = self.index_cache.pop()?;
        let parent = {
            let parent = self.current.node.parent.take()?;
            let parent_node = parent.upgrade();
            self.current.node.parent.set(Some(parent));
            Element::new(parent_node?)
        };
        let siblings = &*parent.node.children.borrow();
        assert!(
            siblings
                .get(self_index)
                .is_some_and(|n| Rc::ptr_eq(n, &self.current.node)),
            "parent children no longer holds node in place"
        );
        let next_node = siblings
            .iter()
            .enumerate()
            .skip(self_index + 1)
            .find(|(_, c)| is_element(c));
        if let Some((next_index, next_node)) = next_node {
            self.index_cache.push(next_index);
            Some(Element::new(next_node.clone()))
        } else {
            self.current = parent.clone();
            self.get_next_sibling()
        }
    }
}

impl Iterator for ElementIterator {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.get_first_child().or_else(|| self.get_next_sibling())?;
        self.current = result.clone();
        Some(result)
    }
}
