mod content;
mod node;
mod role;

pub use content::Content;
pub use node::Element;
pub use role::Role;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Visit every element in document order.
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(root);
    if let Content::Children(children) = &root.content {
        for child in children {
            walk(child, visit);
        }
    }
}

/// All elements carrying the given role, in document order.
pub fn find_by_role<'a>(root: &'a Element, role: Role) -> Vec<&'a Element> {
    let mut found = Vec::new();
    walk(root, &mut |el| {
        if el.role.matches(&role) {
            found.push(el);
        }
    });
    found
}

/// Concatenated text of an element and its descendants, one entry per text node.
pub fn text_content(root: &Element) -> Vec<&str> {
    let mut texts = Vec::new();
    walk(root, &mut |el| {
        if let Content::Text(text) = &el.content {
            texts.push(text.as_str());
        }
    });
    texts
}
