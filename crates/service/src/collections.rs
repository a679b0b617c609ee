use std::{fmt, str::FromStr};

/// The collections exposed under `/api/{collection}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Achievements,
    Experiences,
    Projects,
    Skills,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::Achievements,
        CollectionKind::Experiences,
        CollectionKind::Projects,
        CollectionKind::Skills,
    ];

    /// Plural name, as used in the URL path.
    pub fn name(self) -> &'static str {
        match self {
            CollectionKind::Achievements => "achievements",
            CollectionKind::Experiences => "experiences",
            CollectionKind::Projects => "projects",
            CollectionKind::Skills => "skills",
        }
    }

    /// Key under which a created record is echoed back.
    pub fn singular(self) -> &'static str {
        match self {
            CollectionKind::Achievements => "achievement",
            CollectionKind::Experiences => "experience",
            CollectionKind::Projects => "project",
            CollectionKind::Skills => "skill",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }

    /// `"Skill added successfully"` and friends.
    pub fn created_message(self) -> String {
        let singular = self.singular();
        let mut chars = singular.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        };
        format!("{capitalized} added successfully")
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCollection(pub String);

impl fmt::Display for UnknownCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown collection: {}", self.0)
    }
}

impl std::error::Error for UnknownCollection {}

impl FromStr for CollectionKind {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollectionKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in CollectionKind::ALL {
            assert_eq!(kind.name().parse::<CollectionKind>().unwrap(), kind);
        }
        assert_eq!(
            "blog".parse::<CollectionKind>(),
            Err(UnknownCollection("blog".into()))
        );
        // case sensitive, like the URL routes
        assert!("Skills".parse::<CollectionKind>().is_err());
    }

    #[test]
    fn file_names_and_messages() {
        assert_eq!(CollectionKind::Skills.file_name(), "skills.json");
        assert_eq!(CollectionKind::Achievements.file_name(), "achievements.json");
        assert_eq!(CollectionKind::Skills.created_message(), "Skill added successfully");
        assert_eq!(CollectionKind::Experiences.created_message(), "Experience added successfully");
        assert_eq!(CollectionKind::Projects.singular(), "project");
    }
}
