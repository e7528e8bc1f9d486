//! Canonical child ordering for well-known node types

use log::debug;

use crate::node::SrsNode;

/// Ordering schema: parent keyword followed by its children in canonical order
const ORDERING_RULES: &[(&str, &[&str])] = &[
    ("PROJCS", &["GEOGCS", "PROJECTION", "PARAMETER", "UNIT", "AXIS", "AUTHORITY", "EXTENSION"]),
    ("GEOGCS", &["DATUM", "PRIMEM", "UNIT", "AXIS", "AUTHORITY"]),
    ("DATUM", &["SPHEROID", "TOWGS84", "AUTHORITY"]),
    ("GEOCCS", &["DATUM", "PRIMEM", "UNIT", "AXIS", "AUTHORITY"]),
];

/// Schema for a parent keyword, if one exists
pub fn ordering_rule(value: &str) -> Option<&'static [&'static str]> {
    ORDERING_RULES
        .iter()
        .find(|(parent, _)| parent.eq_ignore_ascii_case(value))
        .map(|(_, rule)| *rule)
}

impl SrsNode {
    /// Reorder children into schema order, recursively
    ///
    /// Children are processed first. A node is only reordered when a schema
    /// exists for its value and it has at least three children. The first
    /// child (the name) never moves, and children not named in the schema
    /// keep their position and block swaps across them.
    pub fn fixup_ordering(&mut self) {
        for index in 0..self.child_count() {
            if let Some(child) = self.child_mut(index) {
                child.fixup_ordering();
            }
        }

        if self.child_count() < 3 {
            return;
        }

        let rule = match ordering_rule(self.value()) {
            Some(rule) => rule,
            None => return,
        };

        let mut keys: Vec<Option<usize>> = vec![None; self.child_count()];
        for (index, key) in keys.iter_mut().enumerate().skip(1) {
            let child_value = self.child_value(index).unwrap_or("");
            *key = rule.iter().position(|entry| entry.eq_ignore_ascii_case(child_value));
            if key.is_none() {
                debug!(
                    "Found unexpected key {} when trying to order SRS nodes.",
                    child_value
                );
            }
        }

        let count = self.child_count();
        let mut changed = true;
        let mut pass = 1;
        while changed && pass < count - 1 {
            changed = false;
            for j in 1..count - pass {
                let (left, right) = match (keys[j], keys[j + 1]) {
                    (Some(left), Some(right)) => (left, right),
                    _ => continue,
                };
                if left > right {
                    self.children.swap(j, j + 1);
                    keys.swap(j, j + 1);
                    changed = true;
                }
            }
            pass += 1;
        }
    }
}
