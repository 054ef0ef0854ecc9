//! Crew roles and per-role data storage.
//!
//! ## Role
//!
//! The two seats in the cockpit: `Pilot` and `Copilot`. The pilot always
//! opens a round.
//!
//! ## RoleMap
//!
//! Fixed two-slot storage indexable by `Role`, used for everything the
//! engine keeps once per seat (dice, axis and engine slots, reroll flags).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A seat in the cockpit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Pilot,
    Copilot,
}

impl Role {
    /// Both roles, pilot first.
    pub const ALL: [Role; 2] = [Role::Pilot, Role::Copilot];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Role::Pilot => Role::Copilot,
            Role::Copilot => Role::Pilot,
        }
    }

    /// Stable 0-based index (pilot = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Role::Pilot => 0,
            Role::Copilot => 1,
        }
    }

    /// Iterate over both roles, pilot first.
    ///
    /// ```
    /// use skyteam_engine::core::Role;
    ///
    /// let roles: Vec<_> = Role::all().collect();
    /// assert_eq!(roles, vec![Role::Pilot, Role::Copilot]);
    /// ```
    pub fn all() -> impl Iterator<Item = Role> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Pilot => write!(f, "pilot"),
            Role::Copilot => write!(f, "copilot"),
        }
    }
}

/// Per-role data storage.
///
/// ## Example
///
/// ```
/// use skyteam_engine::core::{Role, RoleMap};
///
/// let mut axis: RoleMap<Option<u8>> = RoleMap::with_default();
/// axis[Role::Copilot] = Some(4);
///
/// assert_eq!(axis[Role::Pilot], None);
/// assert_eq!(axis[Role::Copilot], Some(4));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleMap<T> {
    pilot: T,
    copilot: T,
}

impl<T> RoleMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Role) -> T) -> Self {
        Self {
            pilot: factory(Role::Pilot),
            copilot: factory(Role::Copilot),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            pilot: value.clone(),
            copilot: value,
        }
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, role: Role) -> &T {
        match role {
            Role::Pilot => &self.pilot,
            Role::Copilot => &self.copilot,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut T {
        match role {
            Role::Pilot => &mut self.pilot,
            Role::Copilot => &mut self.copilot,
        }
    }

    /// Iterate over (Role, &T) pairs, pilot first.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        [(Role::Pilot, &self.pilot), (Role::Copilot, &self.copilot)].into_iter()
    }

    /// Check a predicate holds for both roles.
    pub fn both(&self, pred: impl Fn(&T) -> bool) -> bool {
        pred(&self.pilot) && pred(&self.copilot)
    }
}

impl<T> Index<Role> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: Role) -> &Self::Output {
        self.get(role)
    }
}

impl<T> IndexMut<Role> for RoleMap<T> {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        self.get_mut(role)
    }
}
