//! The set-lineup record.

use crate::error::LineupError;
use crate::model::{Player, Role};

/// One player per role for a single set.
///
/// `libero` is `None` for teams playing without a libero. A lineup is a
/// plain value: it is never modified after construction.
///
/// # Examples
///
/// ```
/// use volley_lineup::lineup::SetLineup;
/// use volley_lineup::model::{Role, RosterConfig};
///
/// let model = RosterConfig::new()
///     .with_setters(["A"]).with_outside(["B", "C"])
///     .with_middle(["D", "E"]).with_opposite(["F"])
///     .build().unwrap();
/// let p = |name| model.player(name).unwrap();
///
/// let lineup = SetLineup::from_assignments([
///     (Role::Setter, p("A")),
///     (Role::Outside1, p("B")),
///     (Role::Outside2, p("C")),
///     (Role::Middle1, p("D")),
///     (Role::Middle2, p("E")),
///     (Role::Opposite, p("F")),
/// ]).unwrap();
/// assert_eq!(lineup.get(Role::Middle2), Some(p("E")));
/// assert_eq!(lineup.get(Role::Libero), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetLineup {
    setter: Player,
    outside: [Player; 2],
    middle: [Player; 2],
    opposite: Player,
    libero: Option<Player>,
}

impl SetLineup {
    /// Creates a lineup from its slots. `outside` fills `oh1`/`oh2` and
    /// `middle` fills `mb1`/`mb2`, in that order.
    pub fn new(
        setter: Player,
        outside: [Player; 2],
        middle: [Player; 2],
        opposite: Player,
        libero: Option<Player>,
    ) -> Self {
        Self {
            setter,
            outside,
            middle,
            opposite,
            libero,
        }
    }

    /// Builds a lineup from `(role, player)` pairs.
    ///
    /// Every court role must appear exactly once; `lib` may appear at most
    /// once.
    pub fn from_assignments<I>(assignments: I) -> Result<Self, LineupError>
    where
        I: IntoIterator<Item = (Role, Player)>,
    {
        let mut slots: [Option<Player>; 7] = [None; 7];
        for (role, player) in assignments {
            let slot = &mut slots[role as usize];
            if slot.is_some() {
                return Err(LineupError::DuplicateRole(role));
            }
            *slot = Some(player);
        }
        let take = |role: Role| slots[role as usize].ok_or(LineupError::MissingRole(role));
        Ok(Self {
            setter: take(Role::Setter)?,
            outside: [take(Role::Outside1)?, take(Role::Outside2)?],
            middle: [take(Role::Middle1)?, take(Role::Middle2)?],
            opposite: take(Role::Opposite)?,
            libero: slots[Role::Libero as usize],
        })
    }

    /// The player filling `role`, if the role is part of this lineup.
    pub fn get(&self, role: Role) -> Option<Player> {
        match role {
            Role::Setter => Some(self.setter),
            Role::Outside1 => Some(self.outside[0]),
            Role::Outside2 => Some(self.outside[1]),
            Role::Middle1 => Some(self.middle[0]),
            Role::Middle2 => Some(self.middle[1]),
            Role::Opposite => Some(self.opposite),
            Role::Libero => self.libero,
        }
    }

    pub fn libero(&self) -> Option<Player> {
        self.libero
    }

    /// Number of filled roles: 7 with a libero, 6 without.
    pub fn role_count(&self) -> usize {
        Role::COURT.len() + usize::from(self.libero.is_some())
    }

    /// `(role, player)` pairs in lineup order.
    pub fn assignments(&self) -> impl Iterator<Item = (Role, Player)> + '_ {
        Role::ALL
            .into_iter()
            .filter_map(move |role| self.get(role).map(|player| (role, player)))
    }

    /// Players on court, i.e. every assigned player except the libero.
    pub fn court_players(&self) -> [Player; 6] {
        [
            self.setter,
            self.outside[0],
            self.outside[1],
            self.middle[0],
            self.middle[1],
            self.opposite,
        ]
    }

    /// The first player found in two roles, if any.
    pub fn duplicate(&self) -> Option<Player> {
        let mut seen: Vec<Player> = Vec::with_capacity(Role::ALL.len());
        for (_, player) in self.assignments() {
            if seen.contains(&player) {
                return Some(player);
            }
            seen.push(player);
        }
        None
    }

    /// Whether `player` fills any role.
    pub fn contains(&self, player: Player) -> bool {
        self.assignments().any(|(_, p)| p == player)
    }
}
