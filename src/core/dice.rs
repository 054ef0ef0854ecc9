//! Dice and the per-round dice pool.
//!
//! Each role rolls a fixed number of dice at the top of every round. A die
//! keeps its `DieId` for the whole round; once marked used it stays used
//! until the next roll replaces the pool.
//!
//! Die IDs are allocated from a counter that only resets with the pool
//! itself, so an ID from a previous round never matches a current die.

use serde::{Deserialize, Serialize};

use super::rng::DiceSource;
use super::role::{Role, RoleMap};

/// Lowest die face.
pub const MIN_FACE: u8 = 1;
/// Highest die face.
pub const MAX_FACE: u8 = 6;

/// Stable identity of a die within its round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DieId(pub u32);

impl std::fmt::Display for DieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Die({})", self.0)
    }
}

/// A single rolled die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub id: DieId,
    /// Face value in `1..=6`.
    pub value: u8,
    pub used: bool,
}

/// Both roles' dice for the current round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    dice: RoleMap<Vec<Die>>,
    next_id: u32,
}

impl DicePool {
    /// Create an empty pool. Nothing can be placed until `roll` is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both roles' dice with `per_role` fresh dice each.
    ///
    /// Pilot dice are rolled first, then copilot dice.
    pub fn roll<R: DiceSource + ?Sized>(&mut self, per_role: usize, source: &mut R) {
        for role in Role::ALL {
            let fresh: Vec<Die> = (0..per_role)
                .map(|_| {
                    let id = DieId(self.next_id);
                    self.next_id = self.next_id.wrapping_add(1);
                    Die {
                        id,
                        value: source.roll_face(),
                        used: false,
                    }
                })
                .collect();
            self.dice[role] = fresh;
        }
    }

    /// All of a role's dice in roll order.
    #[must_use]
    pub fn dice(&self, role: Role) -> &[Die] {
        &self.dice[role]
    }

    /// Look up one of a role's dice, used or not.
    #[must_use]
    pub fn find(&self, role: Role, id: DieId) -> Option<&Die> {
        self.dice[role].iter().find(|d| d.id == id)
    }

    /// Look up one of a role's dice if it can still be spent.
    #[must_use]
    pub fn find_unused(&self, role: Role, id: DieId) -> Option<&Die> {
        self.find(role, id).filter(|d| !d.used)
    }

    /// First unused die of a role showing `value`.
    #[must_use]
    pub fn find_unused_with_value(&self, role: Role, value: u8) -> Option<DieId> {
        self.unused(role).find(|d| d.value == value).map(|d| d.id)
    }

    pub fn unused(&self, role: Role) -> impl Iterator<Item = &Die> {
        self.dice[role].iter().filter(|d| !d.used)
    }

    #[must_use]
    pub fn unused_count(&self, role: Role) -> usize {
        self.unused(role).count()
    }

    /// True once every die of both roles has been spent.
    #[must_use]
    pub fn all_used(&self) -> bool {
        self.dice.both(|dice| dice.iter().all(|d| d.used))
    }

    /// Mark a die used and return its value.
    ///
    /// Returns `None` (and changes nothing) if the die is unknown or
    /// already spent.
    pub fn consume(&mut self, role: Role, id: DieId) -> Option<u8> {
        let die = self.dice[role].iter_mut().find(|d| d.id == id && !d.used)?;
        die.used = true;
        Some(die.value)
    }

    /// Give every unused die of a role a new face. Returns how many changed.
    pub fn reroll_unused<R: DiceSource + ?Sized>(&mut self, role: Role, source: &mut R) -> usize {
        let mut count = 0;
        for die in self.dice[role].iter_mut().filter(|d| !d.used) {
            die.value = source.roll_face();
            count += 1;
        }
        count
    }

    /// Give one unused die a new face and return it.
    pub fn reroll_one<R: DiceSource + ?Sized>(
        &mut self,
        role: Role,
        id: DieId,
        source: &mut R,
    ) -> Option<u8> {
        let die = self.dice[role].iter_mut().find(|d| d.id == id && !d.used)?;
        die.value = source.roll_face();
        Some(die.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedDice;

    fn rolled(faces: [u8; 8]) -> DicePool {
        let mut pool = DicePool::new();
        pool.roll(4, &mut ScriptedDice::new(faces));
        pool
    }

    #[test]
    fn test_roll_assigns_pilot_first() {
        let pool = rolled([1, 2, 3, 4, 5, 6, 1, 2]);

        let pilot: Vec<_> = pool.dice(Role::Pilot).iter().map(|d| d.value).collect();
        let copilot: Vec<_> = pool.dice(Role::Copilot).iter().map(|d| d.value).collect();

        assert_eq!(pilot, vec![1, 2, 3, 4]);
        assert_eq!(copilot, vec![5, 6, 1, 2]);
        assert!(!pool.all_used());
    }

    #[test]
    fn test_ids_unique_across_rolls() {
        let mut pool = DicePool::new();
        let mut script = ScriptedDice::new([3]);

        pool.roll(4, &mut script);
        let first: Vec<_> = pool.dice(Role::Pilot).iter().map(|d| d.id).collect();

        pool.roll(4, &mut script);
        for role in Role::ALL {
            for die in pool.dice(role) {
                assert!(!first.contains(&die.id));
            }
        }
    }

    #[test]
    fn test_consume_once() {
        let mut pool = rolled([4, 4, 4, 4, 2, 2, 2, 2]);
        let id = pool.dice(Role::Pilot)[0].id;

        assert_eq!(pool.consume(Role::Pilot, id), Some(4));
        assert_eq!(pool.consume(Role::Pilot, id), None);
        assert!(pool.find_unused(Role::Pilot, id).is_none());
        assert!(pool.find(Role::Pilot, id).is_some_and(|d| d.used));
        assert_eq!(pool.unused_count(Role::Pilot), 3);
    }

    #[test]
    fn test_dice_are_role_scoped() {
        let mut pool = rolled([4, 4, 4, 4, 2, 2, 2, 2]);
        let copilot_die = pool.dice(Role::Copilot)[0].id;

        assert!(pool.find(Role::Pilot, copilot_die).is_none());
        assert_eq!(pool.consume(Role::Pilot, copilot_die), None);
    }

    #[test]
    fn test_find_unused_with_value() {
        let mut pool = rolled([1, 6, 6, 2, 3, 3, 3, 3]);
        let first_six = pool.find_unused_with_value(Role::Pilot, 6).unwrap();
        assert_eq!(first_six, pool.dice(Role::Pilot)[1].id);

        pool.consume(Role::Pilot, first_six);
        let second_six = pool.find_unused_with_value(Role::Pilot, 6).unwrap();
        assert_eq!(second_six, pool.dice(Role::Pilot)[2].id);

        assert!(pool.find_unused_with_value(Role::Copilot, 6).is_none());
    }

    #[test]
    fn test_reroll_unused_skips_used() {
        let mut pool = rolled([1, 1, 1, 1, 1, 1, 1, 1]);
        let used = pool.dice(Role::Pilot)[0].id;
        pool.consume(Role::Pilot, used);

        let count = pool.reroll_unused(Role::Pilot, &mut ScriptedDice::new([5]));
        assert_eq!(count, 3);

        let values: Vec<_> = pool.dice(Role::Pilot).iter().map(|d| d.value).collect();
        assert_eq!(values, vec![1, 5, 5, 5]);
        // Copilot untouched
        assert!(pool.dice(Role::Copilot).iter().all(|d| d.value == 1));
    }

    #[test]
    fn test_reroll_one() {
        let mut pool = rolled([1, 1, 1, 1, 1, 1, 1, 1]);
        let id = pool.dice(Role::Copilot)[2].id;

        assert_eq!(pool.reroll_one(Role::Copilot, id, &mut ScriptedDice::new([6])), Some(6));
        assert_eq!(pool.find(Role::Copilot, id).map(|d| d.value), Some(6));

        pool.consume(Role::Copilot, id);
        assert_eq!(pool.reroll_one(Role::Copilot, id, &mut ScriptedDice::new([2])), None);
    }

    #[test]
    fn test_all_used() {
        let mut pool = rolled([1, 2, 3, 4, 5, 6, 1, 2]);
        for role in Role::ALL {
            let ids: Vec<_> = pool.dice(role).iter().map(|d| d.id).collect();
            for id in ids {
                pool.consume(role, id);
            }
        }
        assert!(pool.all_used());
    }
}
