use dwg_core::NodeId;

/// Slot arena owning the canonical value of every live node.
///
/// Each slot is addressed by a stable [`NodeId`]; the handle stays valid for
/// the lifetime of the node regardless of renames, because a rename mutates
/// the slot in place. Freed slots are recycled through a free list.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<N> {
    slots: Vec<Option<N>>,
    free: Vec<usize>,
}

impl<N> NodeArena<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores a value and returns its handle, reusing a freed slot if any.
    pub(crate) fn insert(&mut self, value: N) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(value);
                NodeId::from_raw(index as u64)
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Some(value));
                NodeId::from_raw(index as u64)
            }
        }
    }

    /// Returns the value stored in the slot, if the handle is live.
    pub(crate) fn get(&self, id: NodeId) -> Option<&N> {
        self.slots.get(id.as_raw() as usize).and_then(Option::as_ref)
    }

    /// Overwrites the slot in place, returning the previous value.
    ///
    /// Every holder of the handle observes the new value immediately.
    pub(crate) fn rename(&mut self, id: NodeId, value: N) -> Option<N> {
        self.slots
            .get_mut(id.as_raw() as usize)
            .and_then(|slot| slot.replace(value))
    }

    /// Frees the slot and returns the value it held.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<N> {
        let index = id.as_raw() as usize;
        let value = self.slots.get_mut(index).and_then(Option::take);
        if value.is_some() {
            self.free.push(index);
        }
        value
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
