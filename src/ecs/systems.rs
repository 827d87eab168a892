use specs::prelude::*;

use super::{
    components::{IntentStep, Position},
    movement::{candidate_position, validate_position},
    resources::MovementContext,
};

#[derive(Default)]
pub struct MovementSystem;

impl<'a> System<'a> for MovementSystem {
    type SystemData = (
        Entities<'a>,
        WriteStorage<'a, Position>,
        WriteStorage<'a, IntentStep>,
        ReadExpect<'a, MovementContext>,
    );

    fn run(&mut self, (entities, mut positions, mut intents, movement): Self::SystemData) {
        let mut to_clear = Vec::new();
        for (entity, pos, intent) in (&entities, &mut positions, &intents).join() {
            let candidate = candidate_position(pos.point, intent.command);
            let target = validate_position(&*movement, pos.point, candidate);
            pos.previous = pos.point;
            pos.point = target;
            to_clear.push(entity);
        }

        for entity in to_clear {
            intents.remove(entity);
        }
    }
}
