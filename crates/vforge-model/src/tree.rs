//! Pre-order traversal of the element tree.
//!
//! Order is parent before children, children in declaration order. Role
//! lookup depends on this order, so every consumer walks through here.

use crate::element::Element;

pub struct Walk<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// Like [`Walk`], also yielding the child-index path from the root.
pub struct WalkIndexed<'a> {
    stack: Vec<(Vec<usize>, &'a Element)>,
}

impl<'a> Iterator for WalkIndexed<'a> {
    type Item = (Vec<usize>, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, element) = self.stack.pop()?;
        for (index, child) in element.children.iter().enumerate().rev() {
            let mut child_path = path.clone();
            child_path.push(index);
            self.stack.push((child_path, child));
        }
        Some((path, element))
    }
}

impl Element {
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    pub fn walk_indexed(&self) -> WalkIndexed<'_> {
        WalkIndexed {
            stack: vec![(Vec::new(), self)],
        }
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.walk().find(|element| element.id.as_str() == id)
    }

    /// First element carrying `role` in traversal order.
    pub fn find_role(&self, role: &str) -> Option<&Element> {
        self.walk().find(|element| element.has_role(role))
    }

    pub fn descendant_count(&self) -> usize {
        self.walk().count() - 1
    }
}

#[cfg(test)]
mod tests {
    use crate::element::{Element, ElementKind};

    fn tree() -> Element {
        Element::new("root", "Root", ElementKind::Container)
            .with_child(
                Element::new("a", "A", ElementKind::Container)
                    .with_child(Element::new("a1", "A1", ElementKind::Text).with_role("label")),
            )
            .with_child(Element::new("b", "B", ElementKind::Text).with_role("label"))
    }

    #[test]
    fn walk_is_pre_order() {
        let root = tree();
        let ids: Vec<&str> = root.walk().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "a", "a1", "b"]);
    }

    #[test]
    fn walk_indexed_yields_paths() {
        let root = tree();
        let paths: Vec<Vec<usize>> = root.walk_indexed().map(|(path, _)| path).collect();
        assert_eq!(paths, vec![vec![], vec![0], vec![0, 0], vec![1]]);
    }

    #[test]
    fn find_role_returns_first_in_traversal() {
        let root = tree();
        assert_eq!(root.find_role("label").map(|e| e.id.as_str()), Some("a1"));
        assert_eq!(root.descendant_count(), 3);
    }
}
