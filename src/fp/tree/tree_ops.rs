use std::collections::HashMap;

use super::tree::{FPTree, ROOT_NODE_ID};

impl FPTree {
    /// Insert one transaction of ascending attribute ids with weight `count`.
    ///
    /// Shared prefixes only gain count; the first unmatched item switches to
    /// append mode, where every remaining item gets a fresh node. Hitting an
    /// attribute whose global support is below `min_support` abandons the
    /// rest of the transaction. Returns the number of nodes created.
    pub fn add_transaction(
        &mut self,
        transaction: &[usize],
        count: u64,
        min_support: u64,
        attribute_frequency: &[u64],
    ) -> usize {
        let mut current = ROOT_NODE_ID;
        let mut created = 0;
        let mut add_count_mode = true;

        for &attribute in transaction {
            if attribute_frequency[attribute] < min_support {
                return created;
            }

            if add_count_mode {
                match self.child_with_attribute(current, attribute) {
                    Some(child) => {
                        self.add_count(child, count);
                        current = child;
                        continue;
                    }
                    None => add_count_mode = false,
                }
            }

            current = self.create_node(current, attribute, count);
            created += 1;
        }
        created
    }

    /// Replace `node` in its parent's child list by its own children.
    fn splice_out(&mut self, node: usize) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        let nodes = self.nodes_mut();
        let mut children = std::mem::take(&mut nodes[node].children);
        for &child in &children {
            nodes[child].parent = Some(parent);
        }
        let siblings = &mut nodes[parent].children;
        if let Some(position) = siblings.iter().position(|&sibling| sibling == node) {
            siblings.splice(position..=position, children.iter().copied());
        }
        children.clear();
        nodes[node].children = children;
    }

    /// Fold `node` into its sibling `kept`: count, lone child and all.
    fn merge_into(&mut self, kept: usize, node: usize) {
        let count = self.take_count(node);
        self.add_count(kept, count);

        if let Some(&child) = self.children(node).first() {
            self.add_child(kept, child);
            self.nodes_mut()[child].parent = Some(kept);
        }

        let nodes = self.nodes_mut();
        nodes[node].children.clear();
        if let Some(parent) = nodes[node].parent {
            nodes[parent].children.retain(|&sibling| sibling != node);
        }
    }

    /// Two-phase simplification of a freshly built conditional tree.
    ///
    /// Phase one splices out every node whose attribute's support is below
    /// `min_support` and drops that attribute's node list. Phase two merges
    /// same-attribute siblings when neither has more than one child.
    pub fn prune(&mut self, min_support: u64) {
        for index in 0..self.header_table_count() {
            let attribute = self.attribute_at_index(index);
            if self.header_support(attribute) >= min_support {
                continue;
            }
            let mut next = self.header_next(attribute);
            self.remove_header_next(attribute);
            while let Some(node) = next {
                self.splice_out(node);
                next = self.next(node);
            }
        }

        let mut first_under_parent: HashMap<Option<usize>, usize> = HashMap::new();
        for index in 0..self.header_table_count() {
            let attribute = self.attribute_at_index(index);
            first_under_parent.clear();

            let mut previous: Option<usize> = None;
            let mut next = self.header_next(attribute);
            while let Some(node) = next {
                next = self.next(node);
                let parent = self.parent(node);

                let Some(&kept) = first_under_parent.get(&parent) else {
                    first_under_parent.insert(parent, node);
                    previous = Some(node);
                    continue;
                };

                if self.child_count(kept) <= 1 && self.child_count(node) <= 1 {
                    self.merge_into(kept, node);
                    // kept precedes node in the list, so previous is set
                    if let Some(previous) = previous {
                        self.set_next(previous, next);
                    }
                    if self.header_tail(attribute) == Some(node) {
                        self.set_header_tail(attribute, previous);
                    }
                } else {
                    previous = Some(node);
                }
            }
        }
    }

    /// Walk the unique chain below the root, keeping `(attribute, count)` of
    /// every node whose count reaches `min_support`.
    pub fn single_path_items(&self, min_support: u64) -> Vec<(usize, u64)> {
        let mut items = Vec::new();
        let mut current = ROOT_NODE_ID;

        while let Some(&child) = self.children(current).first() {
            if self.child_count(current) > 1 {
                log::warn!(
                    "Single path tree has {} children under node {}",
                    self.child_count(current),
                    current
                );
            }
            current = child;
            if self.count(current) >= min_support {
                if let Some(attribute) = self.attribute(current) {
                    items.push((attribute, self.count(current)));
                }
            }
        }
        items
    }
}
