use std::collections::HashMap;

use log::{debug, info};

use crate::fp::status::StatusUpdater;
use crate::fp::tree::{FPTree, ROOT_NODE_ID};

/// Build the base tree from id transactions.
///
/// Every id below `attribute_frequency.len()` gets its header entry up front
/// with its global support, so the header table starts out sorted by id.
/// A `status_interval` of zero turns progress notes off.
pub fn build_fp_tree(
    transactions: &[(Vec<usize>, u64)],
    attribute_frequency: &[u64],
    min_support: u64,
    status_interval: usize,
    updater: &mut dyn StatusUpdater,
) -> FPTree {
    let mut tree = FPTree::with_capacity(attribute_frequency.len());
    for (attribute, &support) in attribute_frequency.iter().enumerate() {
        tree.add_header_count(attribute, support);
    }
    tree.reorder_header_table();

    let mut node_count = 0;
    let mut items: Vec<usize> = Vec::new();
    for (read, (transaction, count)) in transactions.iter().enumerate() {
        items.clear();
        items.extend_from_slice(transaction);
        items.sort_unstable();
        node_count += tree.add_transaction(&items, *count, min_support, attribute_frequency);

        let read = read + 1;
        if status_interval > 0 && read % status_interval == 0 {
            debug!("FPTree Building: Read {} Transactions", read);
            updater.update(&format!("FPTree Building: Read {read} Transactions"));
        }
    }

    info!("Number of Nodes in the FP Tree: {}", node_count);
    tree
}

/// Build into `dest` the conditional tree of `attribute` in `source`.
///
/// Every node of `attribute`'s list contributes its ancestor chain, minus
/// ancestors whose attribute is infrequent in `source`, weighted by the
/// node's count. `scratch` maps source ancestors to their destination nodes
/// so chains sharing an ancestor share the destination node; it is left
/// empty on return. `dest` ends reordered and pruned.
pub fn build_conditional_tree(
    source: &FPTree,
    attribute: usize,
    min_support: u64,
    dest: &mut FPTree,
    scratch: &mut HashMap<usize, usize>,
) {
    for chain_node in source.attribute_nodes(attribute) {
        let weight = source.count(chain_node);
        // (destination node, created during this walk)
        let mut previous: Option<(usize, bool)> = None;
        let mut path_node = source.parent(chain_node);

        while let Some(ancestor) = path_node.filter(|&node| node != ROOT_NODE_ID) {
            path_node = source.parent(ancestor);
            let Some(ancestor_attribute) = source.attribute(ancestor) else {
                continue;
            };
            if source.header_support(ancestor_attribute) < min_support {
                continue;
            }

            dest.add_header_count(ancestor_attribute, weight);
            let (conditional, fresh) = match scratch.get(&ancestor) {
                Some(&existing) => {
                    dest.mark_multi_path();
                    (existing, false)
                }
                None => {
                    let created = dest.create_conditional_node(ancestor_attribute, 0);
                    scratch.insert(ancestor, created);
                    dest.add_header_next(ancestor_attribute, created);
                    (created, true)
                }
            };

            if let Some((child, true)) = previous {
                dest.set_parent(child, conditional);
            }
            dest.add_count(conditional, weight);
            previous = Some((conditional, fresh));
        }

        if let Some((top, true)) = previous {
            dest.set_parent(top, ROOT_NODE_ID);
            if dest.child_count(ROOT_NODE_ID) > 1 {
                dest.mark_multi_path();
            }
        }
    }

    scratch.clear();
    dest.reorder_header_table();
    dest.prune(min_support);
}
