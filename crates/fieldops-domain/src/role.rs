//! Actor role resolution.

use serde::{Serialize, Serializer};

/// Group name carried by supervisors.
pub const SUPERVISOR_GROUP: &str = "Supervisor";

/// Group names carried by technicians. `Tecnico` is the seeded name.
pub const TECHNICIAN_GROUPS: [&str; 2] = ["Tecnico", "Technician"];

/// Authorization role of an authenticated actor.
///
/// Never persisted. Recomputed on every request from the superuser flag and
/// the actor's group memberships.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Administrator,
    Supervisor,
    Technician,
    /// Member of a group with no gating significance (e.g. `Cliente`).
    Group(String),
    /// Authenticated actor without any group.
    User,
}

impl Role {
    /// Resolve the role of an actor.
    ///
    /// Superusers are always `Administrator`. Otherwise the group with the
    /// highest precedence wins: `Supervisor`, then `Technician`, then any other
    /// group in ascending name order. Actors without groups are `User`.
    /// The result does not depend on the order `groups` is given in.
    pub fn resolve<S: AsRef<str>>(is_superuser: bool, groups: &[S]) -> Self {
        if is_superuser {
            return Self::Administrator;
        }
        groups
            .iter()
            .map(|g| Self::from_group_name(g.as_ref()))
            .min_by(|a, b| {
                a.precedence()
                    .cmp(&b.precedence())
                    .then_with(|| a.label().cmp(b.label()))
            })
            .unwrap_or(Self::User)
    }

    /// Map a single group name to a role.
    pub fn from_group_name(name: &str) -> Self {
        if name == SUPERVISOR_GROUP {
            Self::Supervisor
        } else if TECHNICIAN_GROUPS.contains(&name) {
            Self::Technician
        } else {
            Self::Group(name.to_owned())
        }
    }

    /// Human-readable role label reported to clients.
    pub fn label(&self) -> &str {
        match self {
            Self::Administrator => "Administrator",
            Self::Supervisor => "Supervisor",
            Self::Technician => "Technician",
            Self::Group(name) => name,
            Self::User => "User",
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Administrator => 0,
            Self::Supervisor => 1,
            Self::Technician => 2,
            Self::Group(_) => 3,
            Self::User => 4,
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.label())
    }
}
