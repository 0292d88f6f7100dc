/*!
 * Hierarchical document tree.
 *
 * Every node optionally carries a name (absent only on the synthetic root),
 * optional subtitle text, and its children. Children are unique by name within
 * their parent: inserting an existing name merges into the existing child.
 */

use log::warn;

/// One position in the output hierarchy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentNode {
    /// Raw source name; `None` only for the root
    pub name: Option<String>,

    /// Raw subtitle text for leaves that came from an actual file
    pub text: Option<String>,

    /// Children in insertion order until sorted
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    /// Create the synthetic root of a new tree
    pub fn root() -> Self {
        Self::default()
    }

    /// Create a named node without text
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.name.is_none()
    }

    /// Find a direct child by exact name
    pub fn child(&self, name: &str) -> Option<&DocumentNode> {
        self.children.iter().find(|c| c.name.as_deref() == Some(name))
    }

    // @returns: Existing child with this name, or a newly appended one
    fn child_mut_or_insert(&mut self, name: &str) -> &mut DocumentNode {
        let index = match self.children.iter().position(|c| c.name.as_deref() == Some(name)) {
            Some(index) => index,
            None => {
                self.children.push(DocumentNode::named(name));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Insert a leaf under the containers named by `path_prefix`.
    ///
    /// Missing containers are created in first-seen order. If the leaf already
    /// exists its text is replaced, so the last insertion wins.
    pub fn insert<S: AsRef<str>>(&mut self, path_prefix: &[S], leaf_name: &str, leaf_text: &str) {
        match path_prefix.split_first() {
            Some((segment, rest)) => {
                self.child_mut_or_insert(segment.as_ref())
                    .insert(rest, leaf_name, leaf_text);
            }
            None => {
                let leaf = self.child_mut_or_insert(leaf_name);
                if leaf.text.is_some() {
                    warn!("Duplicate subtitle name '{}', keeping the last one", leaf_name);
                }
                leaf.text = Some(leaf_text.to_string());
            }
        }
    }

    /// Make sure the container path exists without attaching any text
    pub fn insert_container<S: AsRef<str>>(&mut self, path: &[S]) {
        if let Some((segment, rest)) = path.split_first() {
            self.child_mut_or_insert(segment.as_ref()).insert_container(rest);
        }
    }

    /// Order children by name at every level, case-sensitively (byte order).
    pub fn sort(&mut self) {
        self.children.sort_by(|a, b| a.name.cmp(&b.name));
        for child in &mut self.children {
            child.sort();
        }
    }

    /// Number of nodes carrying text in this subtree
    pub fn leaf_count(&self) -> usize {
        let own = usize::from(self.text.is_some());
        own + self.children.iter().map(DocumentNode::leaf_count).sum::<usize>()
    }
}
