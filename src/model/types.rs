//! Player and role identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A player on the roster of a [`ConstraintModel`](super::ConstraintModel).
///
/// Players are interned when the model is built, so two players are equal
/// exactly when their names are equal. The wrapped value is the position of
/// the player in the roster; use
/// [`ConstraintModel::name`](super::ConstraintModel::name) to get the name
/// back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player(u16);

impl Player {
    pub(crate) fn from_index(index: u16) -> Self {
        Self(index)
    }

    /// Roster position of this player.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// A court position within one set.
///
/// Ordered the way lineups are printed: setter first, libero last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "s")]
    Setter,
    #[serde(rename = "oh1")]
    Outside1,
    #[serde(rename = "oh2")]
    Outside2,
    #[serde(rename = "mb1")]
    Middle1,
    #[serde(rename = "mb2")]
    Middle2,
    #[serde(rename = "opp")]
    Opposite,
    #[serde(rename = "lib")]
    Libero,
}

impl Role {
    /// All roles, in lineup order.
    pub const ALL: [Role; 7] = [
        Role::Setter,
        Role::Outside1,
        Role::Outside2,
        Role::Middle1,
        Role::Middle2,
        Role::Opposite,
        Role::Libero,
    ];

    /// Roles that every lineup fills, whether or not a libero is used.
    pub const COURT: [Role; 6] = [
        Role::Setter,
        Role::Outside1,
        Role::Outside2,
        Role::Middle1,
        Role::Middle2,
        Role::Opposite,
    ];

    /// Short label used in roster files and output (`s`, `oh1`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Role::Setter => "s",
            Role::Outside1 => "oh1",
            Role::Outside2 => "oh2",
            Role::Middle1 => "mb1",
            Role::Middle2 => "mb2",
            Role::Opposite => "opp",
            Role::Libero => "lib",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A set of roles, stored as a bit mask.
///
/// # Examples
///
/// ```
/// use volley_lineup::model::{Role, RoleSet};
///
/// let outside: RoleSet = [Role::Outside1, Role::Outside2].into_iter().collect();
/// assert!(outside.contains(Role::Outside2));
/// assert!(!outside.contains(Role::Setter));
/// assert_eq!(outside.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Whether `role` is a member.
    pub fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    /// Returns this set with `role` added.
    pub fn with(self, role: Role) -> Self {
        Self(self.0 | role.bit())
    }

    /// Whether the set has no members.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of members.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in lineup order.
    pub fn iter(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |r| self.contains(*r))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), RoleSet::with)
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.iter().map(Role::label).collect();
        write!(f, "{{{}}}", labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels_match_serde() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.label()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn test_unknown_role_label_rejected() {
        assert!(serde_json::from_str::<Role>("\"oh3\"").is_err());
    }

    #[test]
    fn test_role_set_membership() {
        let set = RoleSet::empty().with(Role::Setter).with(Role::Libero);
        assert!(set.contains(Role::Setter));
        assert!(set.contains(Role::Libero));
        assert!(!set.contains(Role::Opposite));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Role::Setter, Role::Libero]);
    }

    #[test]
    fn test_role_set_duplicates_collapse() {
        let set: RoleSet = [Role::Middle1, Role::Middle1].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(!RoleSet::empty().contains(Role::Middle1));
        assert!(RoleSet::empty().is_empty());
    }

    #[test]
    fn test_role_set_display() {
        let set: RoleSet = [Role::Outside2, Role::Outside1].into_iter().collect();
        assert_eq!(set.to_string(), "{oh1, oh2}");
    }
}
