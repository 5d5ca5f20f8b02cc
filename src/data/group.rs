use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Grouping by a categorical label
// ---------------------------------------------------------------------------

/// Items sharing one label, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a, T> {
    pub label: &'a str,
    pub members: Vec<&'a T>,
}

/// Group `items` by the label `label_fn` extracts.
///
/// Groups come back in the order their label was first seen, so iteration is
/// deterministic. Single pass, hash-based lookup of the group slot.
pub fn group_by<'a, T, F>(items: &'a [T], label_fn: F) -> Vec<Group<'a, T>>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<Group<'a, T>> = Vec::new();

    for item in items {
        let label = label_fn(item);
        let idx = *slots.entry(label).or_insert_with(|| {
            groups.push(Group {
                label,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].members.push(item);
    }
    groups
}
