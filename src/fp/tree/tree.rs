use std::collections::BTreeSet;

/// Handle of the synthetic root; every tree has it at index 0.
pub const ROOT_NODE_ID: usize = 0;

const DEFAULT_INITIAL_SIZE: usize = 8;
const DEFAULT_CHILDREN_INITIAL_SIZE: usize = 2;
const DEFAULT_HEADER_TABLE_INITIAL_SIZE: usize = 4;
const GROWTH_RATE: f64 = 1.5;

/// Capacity after one growth step, never below `floor`.
fn grown(len: usize, floor: usize) -> usize {
    ((len as f64 * GROWTH_RATE) as usize).max(floor)
}

/// One record of the node arena.
///
/// Records past the live node count are kept around so their `children`
/// buffers can be reused after [`FPTree::clear`].
#[derive(Debug, Clone)]
pub struct FPNode {
    pub attribute: Option<usize>,
    pub count: u64,
    pub parent: Option<usize>,
    /// Next node carrying the same attribute (the node-link list)
    pub next: Option<usize>,
    pub children: Vec<usize>,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            attribute: None,
            count: 0,
            parent: None,
            next: None,
            children: Vec::with_capacity(DEFAULT_CHILDREN_INITIAL_SIZE),
        }
    }

    pub fn new_item(attribute: usize, count: u64, parent: Option<usize>) -> Self {
        Self {
            attribute: Some(attribute),
            count,
            parent,
            next: None,
            children: Vec::with_capacity(DEFAULT_CHILDREN_INITIAL_SIZE),
        }
    }

    /// Overwrite a recycled record in place, keeping its children buffer.
    fn reset(&mut self, attribute: Option<usize>, count: u64, parent: Option<usize>) {
        self.attribute = attribute;
        self.count = count;
        self.parent = parent;
        self.next = None;
        self.children.clear();
    }
}

/// Aggregate support and node-link anchors of one attribute.
#[derive(Debug, Clone, Copy, Default)]
struct HeaderEntry {
    support: u64,
    head: Option<usize>,
    tail: Option<usize>,
}

/// Array-encoded FP-tree.
///
/// Nodes live in an arena addressed by dense handles. The header table keeps,
/// per attribute, the aggregate support and the head/tail of the linked list
/// of nodes carrying that attribute. `header_lookup` maps an attribute id to
/// its header slot in O(1); `header_attributes` lists the attributes in slot
/// order until [`FPTree::reorder_header_table`] sorts it by id.
#[derive(Debug, Clone)]
pub struct FPTree {
    nodes: Vec<FPNode>,
    node_count: usize,
    header: Vec<HeaderEntry>,
    header_attributes: Vec<usize>,
    header_count: usize,
    header_lookup: Vec<Option<usize>>,
    seen_attributes: BTreeSet<usize>,
    single_path: bool,
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_SIZE)
    }

    /// Tree sized for `size` nodes and attribute ids below `size`.
    pub fn with_capacity(size: usize) -> Self {
        let size = size.max(DEFAULT_INITIAL_SIZE);
        let mut tree = Self {
            nodes: Vec::with_capacity(size),
            node_count: 0,
            header: Vec::with_capacity(DEFAULT_HEADER_TABLE_INITIAL_SIZE),
            header_attributes: Vec::with_capacity(DEFAULT_HEADER_TABLE_INITIAL_SIZE),
            header_count: 0,
            header_lookup: vec![None; size],
            seen_attributes: BTreeSet::new(),
            single_path: true,
        };
        tree.create_root_node();
        tree
    }

    /// Reset to a lone root, keeping every buffer allocated.
    ///
    /// Handles issued before the call are invalid afterwards.
    pub fn clear(&mut self) {
        self.node_count = 0;
        self.header_count = 0;
        self.single_path = true;
        self.header_lookup.fill(None);
        self.seen_attributes.clear();
        self.create_root_node();
    }

    pub fn is_empty(&self) -> bool {
        self.node_count <= 1
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn is_single_path(&self) -> bool {
        self.single_path
    }

    /// Clears the flag; it never goes back to true except through `clear`.
    pub fn mark_multi_path(&mut self) {
        self.single_path = false;
    }

    fn ensure_node_capacity(&mut self) {
        if self.node_count == self.nodes.capacity() {
            let target = grown(self.node_count, DEFAULT_INITIAL_SIZE);
            self.nodes.reserve_exact(target - self.node_count);
        }
    }

    fn push_node(&mut self, attribute: Option<usize>, count: u64, parent: Option<usize>) -> usize {
        let id = self.node_count;
        if id < self.nodes.len() {
            self.nodes[id].reset(attribute, count, parent);
        } else {
            self.ensure_node_capacity();
            self.nodes.push(match attribute {
                Some(attribute) => FPNode::new_item(attribute, count, parent),
                None => FPNode::new_root(),
            });
        }
        self.node_count += 1;
        id
    }

    fn create_root_node(&mut self) -> usize {
        self.push_node(None, 0, None)
    }

    /// Append a node under `parent` and at the tail of `attribute`'s list.
    pub fn create_node(&mut self, parent: usize, attribute: usize, count: u64) -> usize {
        let id = self.push_node(Some(attribute), count, Some(parent));
        self.add_child(parent, id);
        self.add_header_next(attribute, id);
        id
    }

    /// Append a detached node; the caller links it with `set_parent` and
    /// `add_header_next` once its place is known.
    pub fn create_conditional_node(&mut self, attribute: usize, count: u64) -> usize {
        self.push_node(Some(attribute), count, None)
    }

    /// Register `child` under `parent`. A second child clears the single-path flag.
    pub fn add_child(&mut self, parent: usize, child: usize) {
        let children = &mut self.nodes[parent].children;
        if children.len() == children.capacity() {
            let target = grown(children.len(), DEFAULT_CHILDREN_INITIAL_SIZE);
            children.reserve_exact(target - children.len());
        }
        children.push(child);
        if children.len() > 1 {
            self.single_path = false;
        }
    }

    pub fn add_count(&mut self, node: usize, delta: u64) -> bool {
        if node < self.node_count {
            self.nodes[node].count += delta;
            return true;
        }
        false
    }

    /// Zero a node's count, returning what it held.
    pub fn take_count(&mut self, node: usize) -> u64 {
        if node < self.node_count {
            return std::mem::take(&mut self.nodes[node].count);
        }
        0
    }

    pub fn set_next(&mut self, node: usize, next: Option<usize>) -> bool {
        if node < self.node_count {
            self.nodes[node].next = next;
            return true;
        }
        false
    }

    /// Point `node` at `parent` and append it to `parent`'s children.
    pub fn set_parent(&mut self, node: usize, parent: usize) -> bool {
        if node < self.node_count && parent < self.node_count {
            self.nodes[node].parent = Some(parent);
            let children = &mut self.nodes[parent].children;
            if children.len() == children.capacity() {
                let target = grown(children.len(), DEFAULT_CHILDREN_INITIAL_SIZE);
                children.reserve_exact(target - children.len());
            }
            children.push(node);
            return true;
        }
        false
    }

    pub fn attribute(&self, node: usize) -> Option<usize> {
        self.nodes[node].attribute
    }

    pub fn count(&self, node: usize) -> u64 {
        self.nodes[node].count
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    pub fn next(&self, node: usize) -> Option<usize> {
        self.nodes[node].next
    }

    pub fn children(&self, node: usize) -> &[usize] {
        &self.nodes[node].children
    }

    pub fn child_count(&self, node: usize) -> usize {
        self.nodes[node].children.len()
    }

    pub fn child_with_attribute(&self, node: usize, attribute: usize) -> Option<usize> {
        self.nodes[node]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].attribute == Some(attribute))
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [FPNode] {
        &mut self.nodes[..self.node_count]
    }

    /// Header slot of `attribute`, creating an empty entry on first sight.
    fn header_index(&mut self, attribute: usize) -> usize {
        if attribute >= self.header_lookup.len() {
            let size = grown(attribute, attribute + 1).max(attribute + 1);
            self.header_lookup.resize(size, None);
        }
        if let Some(index) = self.header_lookup[attribute] {
            return index;
        }

        let index = self.header_count;
        let entry = HeaderEntry::default();
        if index < self.header.len() {
            self.header[index] = entry;
            self.header_attributes[index] = attribute;
        } else {
            if self.header.len() == self.header.capacity() {
                let target = grown(self.header.len(), DEFAULT_HEADER_TABLE_INITIAL_SIZE);
                self.header.reserve_exact(target - self.header.len());
            }
            self.header.push(entry);
            self.header_attributes.push(attribute);
        }
        self.header_count += 1;
        self.header_lookup[attribute] = Some(index);
        self.seen_attributes.insert(attribute);
        index
    }

    fn lookup(&self, attribute: usize) -> Option<&HeaderEntry> {
        let index = (*self.header_lookup.get(attribute)?)?;
        Some(&self.header[index])
    }

    pub fn add_header_count(&mut self, attribute: usize, delta: u64) {
        let index = self.header_index(attribute);
        self.header[index].support += delta;
    }

    /// Append `node` to the tail of `attribute`'s node list.
    pub fn add_header_next(&mut self, attribute: usize, node: usize) {
        let index = self.header_index(attribute);
        match self.header[index].tail {
            None => {
                self.header[index].head = Some(node);
                self.header[index].tail = Some(node);
            }
            Some(tail) => {
                self.set_next(tail, Some(node));
                self.header[index].tail = Some(node);
            }
        }
    }

    /// Drop the head-of-chain pointer; the nodes stay allocated.
    pub fn remove_header_next(&mut self, attribute: usize) {
        if let Some(Some(index)) = self.header_lookup.get(attribute).copied() {
            self.header[index].head = None;
            self.header[index].tail = None;
        }
    }

    /// Move the tail pointer back after the last node was unlinked.
    pub(crate) fn set_header_tail(&mut self, attribute: usize, node: Option<usize>) {
        if let Some(Some(index)) = self.header_lookup.get(attribute).copied() {
            self.header[index].tail = node;
        }
    }

    pub(crate) fn header_tail(&self, attribute: usize) -> Option<usize> {
        self.lookup(attribute).and_then(|entry| entry.tail)
    }

    /// First node carrying `attribute`, or `None` when absent or pruned.
    pub fn header_next(&self, attribute: usize) -> Option<usize> {
        self.lookup(attribute).and_then(|entry| entry.head)
    }

    /// Aggregate support of `attribute`; zero when it has no header entry.
    pub fn header_support(&self, attribute: usize) -> u64 {
        self.lookup(attribute).map_or(0, |entry| entry.support)
    }

    pub fn header_table_count(&self) -> usize {
        self.header_count
    }

    pub fn attribute_at_index(&self, index: usize) -> usize {
        self.header_attributes[index]
    }

    pub fn header_table_attributes(&self) -> &[usize] {
        &self.header_attributes[..self.header_count]
    }

    /// Sort the header attribute list ascending by id.
    pub fn reorder_header_table(&mut self) {
        for (slot, &attribute) in self
            .header_attributes
            .iter_mut()
            .zip(self.seen_attributes.iter())
        {
            *slot = attribute;
        }
    }

    /// Position of `attribute` in the sorted header list.
    ///
    /// Only meaningful after `reorder_header_table`.
    pub fn header_position(&self, attribute: usize) -> Option<usize> {
        self.header_table_attributes().binary_search(&attribute).ok()
    }

    /// Iterate the node list of `attribute` from its head.
    pub fn attribute_nodes(&self, attribute: usize) -> AttributeNodes<'_> {
        AttributeNodes { tree: self, node: self.header_next(attribute) }
    }
}

/// Walks one attribute's node-link list.
pub struct AttributeNodes<'a> {
    tree: &'a FPTree,
    node: Option<usize>,
}

impl Iterator for AttributeNodes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let node = self.node?;
        self.node = self.tree.next(node);
        Some(node)
    }
}
