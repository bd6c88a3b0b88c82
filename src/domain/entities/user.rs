use std::fmt;

/// Represents a user in the system
///
/// Pure data: no I/O, no knowledge of any storage mechanism. Durability
/// is owned by whatever [`crate::domain::traits::UserStore`] the caller
/// picks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    name: String,
    age: u32,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_constructed_values() {
        let user = User::new("Alex", 30);
        assert_eq!(user.name(), "Alex");
        assert_eq!(user.age(), 30);
    }

    #[test]
    fn test_display() {
        let user = User::new("Alex", 30);
        assert_eq!(user.to_string(), "Alex (30)");
    }
}
