//! Single Responsibility: the entity knows about itself, storage lives elsewhere.
//!
//! `Animal` only carries its data. Anything about persisting it belongs to an
//! `AnimalStorage` implementation, so the two can change independently.

/// An animal identified by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
}

impl Animal {
    pub fn new(name: impl Into<String>) -> Self {
        Animal { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Describes "what an animal is".
///
/// Not implemented for [`Animal`]: the entity exposes its name through
/// [`Animal::name`] and nothing else.
pub trait AnimalDescription {
    fn get_animal(&self) -> String;
}

/// Persistence operations over [`Animal`], kept out of the entity itself.
pub trait AnimalStorage {
    fn save(&self, animal: Animal);
    fn get(&self, animal: Animal);
}

/// Storage that accepts every call and does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnimalStorage;

impl AnimalStorage for NoopAnimalStorage {
    fn save(&self, _animal: Animal) {}

    fn get(&self, _animal: Animal) {}
}
