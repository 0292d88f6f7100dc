/*!
 * Document assembly: tree building, sorting and rendering.
 *
 * - `tree`: the named node hierarchy and its insert/sort operations
 * - `render`: depth-first emission of headings and paragraph blocks
 */

pub mod render;
pub mod tree;

use log::debug;

use crate::output_format::ConversionOutput;
use crate::source::SourceItem;

pub use render::{render, RenderOptions, DEFAULT_TITLE};
pub use tree::DocumentNode;

/// Build a tree from loaded source items.
///
/// Items without text only contribute their container path.
pub fn build_tree(sources: &[SourceItem]) -> DocumentNode {
    let mut root = DocumentNode::root();
    for item in sources {
        match &item.text {
            Some(text) => root.insert(&item.path_prefix, &item.name, text),
            None => {
                let mut path = item.path_prefix.clone();
                path.push(item.name.clone());
                root.insert_container(&path);
            }
        }
    }
    debug!("Built document tree with {} subtitle file(s)", root.leaf_count());
    root
}

/// Run the whole core pipeline: build, sort and render.
pub fn convert(sources: &[SourceItem], options: &RenderOptions) -> ConversionOutput {
    let mut tree = build_tree(sources);
    tree.sort();
    ConversionOutput {
        content: render(&tree, options),
        format: options.format,
    }
}
