//! Named boolean behaviors on a light's data.

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::ModelError;

/// A behavior modifier on a light.
///
/// Variants are declared in alphabetical order of their names so the derived
/// `Ord` matches the order flags are written back out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    IgnoreScale,
    NoExternalEmittance,
    PortalStrict,
    RandomAnimStart,
    Shadow,
    Simple,
    SyncAddonNodes,
    UpdateOnCellTransition,
    UpdateOnWaiting,
}

impl Flag {
    pub const ALL: [Flag; 9] = [
        Flag::IgnoreScale,
        Flag::NoExternalEmittance,
        Flag::PortalStrict,
        Flag::RandomAnimStart,
        Flag::Shadow,
        Flag::Simple,
        Flag::SyncAddonNodes,
        Flag::UpdateOnCellTransition,
        Flag::UpdateOnWaiting,
    ];

    /// The canonical spelling of this flag.
    pub fn name(self) -> &'static str {
        match self {
            Flag::IgnoreScale => "IgnoreScale",
            Flag::NoExternalEmittance => "NoExternalEmittance",
            Flag::PortalStrict => "PortalStrict",
            Flag::RandomAnimStart => "RandomAnimStart",
            Flag::Shadow => "Shadow",
            Flag::Simple => "Simple",
            Flag::SyncAddonNodes => "SyncAddonNodes",
            Flag::UpdateOnCellTransition => "UpdateOnCellTransition",
            Flag::UpdateOnWaiting => "UpdateOnWaiting",
        }
    }

    /// Look up a flag by name, ignoring ASCII case.
    pub fn parse(token: &str) -> Result<Self, ModelError> {
        Flag::ALL
            .into_iter()
            .find(|flag| flag.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| ModelError::UnrecognizedFlag {
                token: token.to_string(),
            })
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The distinct flags set on a light, kept in alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Flags(BTreeSet<Flag>);

impl Flags {
    /// Parse a `|`-delimited flag string such as `"Shadow|portalstrict"`.
    ///
    /// Returns `Ok(None)` for an empty string. Repeated flags collapse to one.
    pub fn parse(raw: &str) -> Result<Option<Self>, ModelError> {
        if raw.is_empty() {
            return Ok(None);
        }
        let flags = raw
            .split('|')
            .map(Flag::parse)
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Some(Flags(flags)))
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.0.contains(&flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        Flags(iter.into_iter().collect())
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(flag.name())?;
        }
        Ok(())
    }
}

impl Serialize for Flags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Flag::parse("shadow").unwrap(), Flag::Shadow);
        assert_eq!(Flag::parse("SYNCADDONNODES").unwrap(), Flag::SyncAddonNodes);
        assert_eq!(Flag::parse("UpdateOnWaiting").unwrap(), Flag::UpdateOnWaiting);
    }

    #[test]
    fn parse_unknown_flag_fails() {
        let err = Flag::parse("Glowing").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnrecognizedFlag {
                token: "Glowing".to_string()
            }
        );
    }

    #[test]
    fn every_flag_round_trips_its_name() {
        for flag in Flag::ALL {
            assert_eq!(Flag::parse(flag.name()).unwrap(), flag);
        }
    }

    #[test]
    fn declaration_order_is_alphabetical() {
        let names: Vec<_> = Flag::ALL.iter().map(|f| f.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn flags_are_distinct_and_sorted() {
        let flags = Flags::parse("Simple|shadow|PortalStrict|Shadow").unwrap().unwrap();
        assert_eq!(flags.iter().count(), 3);
        assert_eq!(flags.to_string(), "PortalStrict|Shadow|Simple");
    }

    #[test]
    fn empty_flag_string_is_absent() {
        assert_eq!(Flags::parse("").unwrap(), None);
    }

    #[test]
    fn empty_token_is_unrecognized() {
        assert!(matches!(
            Flags::parse("Shadow||Simple"),
            Err(ModelError::UnrecognizedFlag { ref token }) if token.is_empty()
        ));
    }

    #[test]
    fn flag_order_does_not_affect_equality() {
        let a = Flags::parse("Shadow|Simple").unwrap();
        let b = Flags::parse("simple|SHADOW").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn flags_serialize_as_joined_string() {
        let flags: Flags = [Flag::UpdateOnWaiting, Flag::IgnoreScale].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&flags).unwrap(),
            r#""IgnoreScale|UpdateOnWaiting""#
        );
    }
}
