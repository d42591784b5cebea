use std::rc::Rc;

use super::model::MediaItem;

/// Iterator over an item's ancestors, nearest first.
pub struct Ancestors {
    next: Option<Rc<MediaItem>>,
}

impl Iterator for Ancestors {
    type Item = Rc<MediaItem>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

/// Pre-order depth-first iterator over a subtree, children in display order.
pub struct Descendants {
    stack: Vec<Rc<MediaItem>>,
}

impl Iterator for Descendants {
    type Item = Rc<MediaItem>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Reversed so the first child is popped first.
        self.stack.extend(current.items().into_iter().rev());
        Some(current)
    }
}

impl MediaItem {
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Number of parent hops to the root; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// The topmost reachable ancestor, or `self` when it has no parent.
    pub fn root(self: &Rc<Self>) -> Rc<MediaItem> {
        self.ancestors().last().unwrap_or_else(|| Rc::clone(self))
    }

    /// All items in this subtree, including `self`, in pre-order.
    pub fn descendants(self: &Rc<Self>) -> Descendants {
        Descendants {
            stack: vec![Rc::clone(self)],
        }
    }

    /// Items in this subtree that have no children.
    pub fn leaves(self: &Rc<Self>) -> impl Iterator<Item = Rc<MediaItem>> {
        self.descendants().filter(|item| item.is_leaf())
    }

    /// Sum of `duration` over this subtree, saturating at `u64::MAX`.
    pub fn total_duration(self: &Rc<Self>) -> u64 {
        self.descendants()
            .fold(0u64, |acc, item| acc.saturating_add(item.duration()))
    }

    /// First direct child whose title equals `title` exactly.
    pub fn find_child(&self, title: &str) -> Option<Rc<MediaItem>> {
        self.items().into_iter().find(|c| c.title() == title)
    }
}
