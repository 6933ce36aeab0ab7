use crate::query::contact_set::{ContactArena, ContactHandle};
use crate::query::{Contact, QueryTolerances};
use crate::shape::GeometricObject;

/// The kind of result a collision query must compute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QueryType {
    /// Only determine whether the objects touch. No contact is stored.
    Boolean,
    /// Compute the penetrating contacts between the objects.
    Contacts,
    /// Compute the single closest-point contact between the objects, even if they are
    /// separated (in which case its depth is negative).
    ClosestPoints,
}

/// The two objects of a collision query, and the contacts found between them.
///
/// A contact set accumulates the contacts produced by collision algorithms through
/// [`ContactSet::merge`], which enforces the number of contacts each [`QueryType`] may keep:
///
/// * `Boolean`: none, only the [`ContactSet::have_contact`] flag is set.
/// * `ClosestPoints`: at most one, the deepest (or the nearest for ray hits).
/// * `Contacts`: any number of penetrating contacts, at most one of which is a ray hit.
pub struct ContactSet<'a> {
    /// The first object of the query.
    pub object_a: GeometricObject<'a>,
    /// The second object of the query.
    pub object_b: GeometricObject<'a>,
    contacts: Vec<Contact>,
    have_contact: bool,
}

impl<'a> ContactSet<'a> {
    /// Creates an empty contact set between two objects.
    pub fn new(object_a: GeometricObject<'a>, object_b: GeometricObject<'a>) -> Self {
        Self {
            object_a,
            object_b,
            contacts: Vec::new(),
            have_contact: false,
        }
    }

    /// Do the objects touch?
    #[inline]
    pub fn have_contact(&self) -> bool {
        self.have_contact
    }

    /// Records that the objects touch without storing any contact.
    #[inline]
    pub fn set_have_contact(&mut self) {
        self.have_contact = true;
    }

    /// The contacts stored in this set.
    #[inline]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// An iterator through the contacts stored in this set.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// The number of contacts stored in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Does this set contain no contact?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Merges a contact into this set, following the rules of `query_type`.
    ///
    /// * `Boolean`: no contact is stored, `have_contact` is set if the contact is penetrating.
    /// * `ClosestPoints`: the contact replaces the stored one if it is deeper (or, for ray
    ///   hits, nearer to the ray origin). `have_contact` reflects whether the kept contact is
    ///   penetrating.
    /// * `Contacts`: separated contacts are ignored. A ray hit only replaces a farther ray
    ///   hit. Otherwise, the contact replaces an existing one closer than
    ///   `tolerances.contact_position_tolerance`, or is appended.
    pub fn merge(&mut self, contact: Contact, query_type: QueryType, tolerances: &QueryTolerances) {
        match query_type {
            QueryType::Boolean => {
                if contact.is_penetrating() {
                    self.have_contact = true;
                }
            }
            QueryType::ClosestPoints => {
                let replace = self
                    .contacts
                    .first()
                    .map(|old| is_closer(&contact, old))
                    .unwrap_or(true);

                if replace {
                    self.have_contact = contact.is_penetrating();
                    self.contacts.clear();
                    self.contacts.push(contact);
                }
            }
            QueryType::Contacts => {
                if !contact.is_penetrating() {
                    return;
                }

                self.have_contact = true;

                if contact.is_ray_hit {
                    if let Some(old) = self.contacts.iter_mut().find(|c| c.is_ray_hit) {
                        if contact.penetration_depth < old.penetration_depth {
                            *old = contact;
                        }
                        return;
                    }
                } else {
                    let tolerance_sq = tolerances.contact_position_tolerance
                        * tolerances.contact_position_tolerance;
                    let duplicate = self.contacts.iter_mut().find(|c| {
                        !c.is_ray_hit
                            && na::distance_squared(&c.position, &contact.position)
                                <= tolerance_sq
                    });

                    if let Some(old) = duplicate {
                        *old = contact;
                        return;
                    }
                }

                self.contacts.push(contact);
            }
        }
    }

    /// Swaps both objects of this set, flipping the stored contacts accordingly.
    pub fn swap_objects(&mut self) {
        core::mem::swap(&mut self.object_a, &mut self.object_b);
        self.contacts.iter_mut().for_each(Contact::flip);
    }

    /// Removes all the contacts of this set and resets its contact flag.
    ///
    /// The contact buffer is kept for reuse.
    pub fn clear(&mut self) {
        self.contacts.clear();
        self.have_contact = false;
    }

    /// Moves all the contacts of this set into `arena`, returning their handles.
    ///
    /// The contact flag is left unchanged.
    pub fn drain_into(&mut self, arena: &mut ContactArena) -> Vec<ContactHandle> {
        self.contacts.drain(..).map(|c| arena.insert(c)).collect()
    }
}

impl<'a, 'b> IntoIterator for &'b ContactSet<'a> {
    type Item = &'b Contact;
    type IntoIter = core::slice::Iter<'b, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn is_closer(new: &Contact, old: &Contact) -> bool {
    if new.is_ray_hit && old.is_ray_hit {
        new.penetration_depth < old.penetration_depth
    } else {
        new.penetration_depth > old.penetration_depth
    }
}
