use crate::math::Transform;

use super::TransformId;

/// Transform store shared by nodes and engines.
///
/// Transforms are never removed, so a `TransformId` stays valid for the
/// lifetime of the store that issued it.
#[derive(Debug, Default)]
pub struct Transforms {
    items: Vec<Transform>,
}

impl Transforms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, transform: Transform) -> TransformId {
        let id = TransformId(self.items.len());
        self.items.push(transform);
        id
    }

    #[inline]
    pub fn get(&self, id: TransformId) -> Option<&Transform> {
        self.items.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: TransformId) -> Option<&mut Transform> {
        self.items.get_mut(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_issued_in_order() {
        let mut store = Transforms::new();
        let a = store.insert(Transform::identity());
        let b = store.insert(Transform::identity());
        assert_eq!((a, b), (TransformId(0), TransformId(1)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn foreign_id_is_rejected() {
        let mut other = Transforms::new();
        other.insert(Transform::identity());
        let foreign = other.insert(Transform::identity());

        let mut store = Transforms::new();
        store.insert(Transform::identity());
        assert!(store.get(foreign).is_none());
        assert!(store.get_mut(foreign).is_none());
    }
}
