//! Level: the placed actors and the world collision snapshot built from them

use slotmap::{new_key_type, SlotMap};

use crate::physics::collision::VertexData;
use super::mesh::MeshActor;

new_key_type! {
    /// Stable handle to an actor in a [`Level`]
    pub struct ActorKey;
}

/// Actors of one level plus their compiled collision triangles
///
/// The snapshot is not kept in sync automatically; call
/// [`Level::rebuild_collision`] after adding, removing or moving solid actors.
#[derive(Debug, Default)]
pub struct Level {
    name: String,
    actors: SlotMap<ActorKey, MeshActor>,
    order: Vec<ActorKey>,
    world: VertexData,
}

impl Level {
    /// Create an empty level
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Level name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an actor; it joins the snapshot on the next rebuild
    pub fn add_actor(&mut self, actor: MeshActor) -> ActorKey {
        let key = self.actors.insert(actor);
        self.order.push(key);
        key
    }

    /// Remove an actor; it leaves the snapshot on the next rebuild
    pub fn remove_actor(&mut self, key: ActorKey) -> Option<MeshActor> {
        let actor = self.actors.remove(key)?;
        self.order.retain(|&k| k != key);
        Some(actor)
    }

    /// Look up an actor
    pub fn actor(&self, key: ActorKey) -> Option<&MeshActor> {
        self.actors.get(key)
    }

    /// Look up an actor mutably
    pub fn actor_mut(&mut self, key: ActorKey) -> Option<&mut MeshActor> {
        self.actors.get_mut(key)
    }

    /// Actors in insertion order
    pub fn actors(&self) -> impl Iterator<Item = (ActorKey, &MeshActor)> {
        self.order
            .iter()
            .filter_map(|&key| self.actors.get(key).map(|actor| (key, actor)))
    }

    /// Number of actors
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// True when the level has no actors
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Recompile the world snapshot from every active, collidable actor in
    /// insertion order
    pub fn rebuild_collision(&mut self) {
        let solid = self
            .actors()
            .filter(|(_, mesh)| mesh.actor.is_solid())
            .map(|(_, mesh)| mesh.actor.triangles());

        self.world = VertexData::compile(solid);
        log::info!(
            "Level '{}': compiled {} collision triangle(s) from {} actor(s)",
            self.name,
            self.world.len(),
            self.actors.len()
        );
    }

    /// Read-only world snapshot
    pub fn world(&self) -> &VertexData {
        &self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Transform, Vec3};
    use crate::scene::actor::ActorFlags;
    use crate::scene::mesh::{quad, CollisionType};

    fn panel(name: &str, z: f32) -> MeshActor {
        let (positions, indices) = quad(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        MeshActor::new(name, positions, indices)
            .and_then(|mesh| mesh.with_transform(Transform::from_position(Vec3::new(0.0, 0.0, z))))
            .unwrap()
    }

    #[test]
    fn test_rebuild_compiles_in_insertion_order() {
        let mut level = Level::new("test");
        level.add_actor(panel("a", -1.0));
        level.add_actor(panel("b", -2.0));
        assert!(level.world().is_empty());

        level.rebuild_collision();
        let world = level.world();
        assert_eq!(world.len(), 4);
        assert_eq!(world.triangles()[0].points[0].z, -1.0);
        assert_eq!(world.triangles()[3].points[0].z, -2.0);
    }

    #[test]
    fn test_rebuild_skips_non_solid_actors() {
        let mut level = Level::new("test");
        level.add_actor(panel("solid", -1.0));
        level.add_actor(panel("ghost", -2.0).with_flags(ActorFlags::ACTIVE));
        let inactive = level.add_actor(panel("inactive", -3.0));
        if let Some(mesh) = level.actor_mut(inactive) {
            mesh.actor.set_flag(ActorFlags::ACTIVE, false);
        }
        let mut cubic = panel("cubic", -4.0);
        cubic.set_collision_type(CollisionType::Cubic).unwrap();
        level.add_actor(cubic);

        level.rebuild_collision();
        assert_eq!(level.world().len(), 2);
    }

    #[test]
    fn test_remove_actor() {
        let mut level = Level::new("test");
        let a = level.add_actor(panel("a", -1.0));
        let b = level.add_actor(panel("b", -2.0));
        level.rebuild_collision();
        assert_eq!(level.world().len(), 4);

        let removed = level.remove_actor(a).unwrap();
        assert_eq!(removed.actor.name, "a");
        assert!(level.actor(a).is_none());
        assert!(level.remove_actor(a).is_none());

        level.rebuild_collision();
        assert_eq!(level.len(), 1);
        assert_eq!(level.world().triangles()[0].points[0].z, -2.0);
        assert_eq!(level.actors().next().map(|(key, _)| key), Some(b));
    }
}
