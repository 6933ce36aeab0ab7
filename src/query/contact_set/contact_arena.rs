use slab::Slab;

use crate::query::Contact;

/// A handle to a contact stored in a [`ContactArena`].
///
/// Handles are generation-checked: once the contact is recycled, its handle no longer
/// resolves, even if its slot is reused by another contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactHandle {
    index: u32,
    generation: u32,
}

impl ContactHandle {
    /// The index of the arena slot of this handle.
    #[inline]
    pub fn index(self) -> u32 {
        self.index
    }

    /// The generation of the arena slot this handle refers to.
    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// Storage for contacts handed out to long-lived consumers.
///
/// Freed slots are reused by subsequent insertions.
#[derive(Clone, Debug, Default)]
pub struct ContactArena {
    contacts: Slab<Contact>,
    generations: Vec<u32>,
}

impl ContactArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of live contacts in this arena.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Does this arena contain no live contact?
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Stores a contact, returning its handle.
    pub fn insert(&mut self, contact: Contact) -> ContactHandle {
        let index = self.contacts.insert(contact);

        if index >= self.generations.len() {
            self.generations.resize(index + 1, 0);
        }

        ContactHandle {
            index: index as u32,
            generation: self.generations[index],
        }
    }

    /// The contact identified by `handle`, if it was not recycled.
    pub fn get(&self, handle: ContactHandle) -> Option<&Contact> {
        if self.is_live(handle) {
            self.contacts.get(handle.index as usize)
        } else {
            None
        }
    }

    /// The contact identified by `handle`, if it was not recycled.
    pub fn get_mut(&mut self, handle: ContactHandle) -> Option<&mut Contact> {
        if self.is_live(handle) {
            self.contacts.get_mut(handle.index as usize)
        } else {
            None
        }
    }

    /// Frees the slot of `handle`, returning its contact.
    ///
    /// Returns `None` if the handle was already recycled.
    pub fn recycle(&mut self, handle: ContactHandle) -> Option<Contact> {
        if !self.is_live(handle) {
            return None;
        }

        let index = handle.index as usize;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.contacts.try_remove(index)
    }

    /// Recycles every contact of this arena, invalidating all the outstanding handles.
    pub fn clear(&mut self) {
        for (index, _) in self.contacts.iter() {
            self.generations[index] = self.generations[index].wrapping_add(1);
        }

        self.contacts.clear();
    }

    fn is_live(&self, handle: ContactHandle) -> bool {
        let index = handle.index as usize;
        self.contacts.contains(index) && self.generations.get(index) == Some(&handle.generation)
    }
}
