//! Branching on a name field vs. dispatching through a shared trait.
//!
//! Both routines write the same three lines. The first needs to know every
//! name up front; the second only needs values that implement [`MakeSound`].

use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// Anything that can produce a sound.
pub trait MakeSound {
    fn make_sound(&self) -> &'static str;
}

pub struct Lion;

impl MakeSound for Lion {
    fn make_sound(&self) -> &'static str {
        "roar"
    }
}

pub struct Squirrel;

impl MakeSound for Squirrel {
    fn make_sound(&self) -> &'static str {
        "squeak"
    }
}

pub struct Snake;

impl MakeSound for Snake {
    fn make_sound(&self) -> &'static str {
        "hiss"
    }
}

/// Closed set of the same variants, for callers that prefer an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalKind {
    Lion,
    Squirrel,
    Snake,
}

impl MakeSound for AnimalKind {
    fn make_sound(&self) -> &'static str {
        match self {
            AnimalKind::Lion => Lion.make_sound(),
            AnimalKind::Squirrel => Squirrel.make_sound(),
            AnimalKind::Snake => Snake.make_sound(),
        }
    }
}

// =============================================================================
// The wrong way: one struct, behavior picked by comparing strings
// =============================================================================

/// Single concrete type whose behavior is selected by `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalBase {
    pub name: String,
}

impl AnimalBase {
    pub fn new(name: impl Into<String>) -> Self {
        AnimalBase { name: name.into() }
    }
}

/// Writes a sound for each known name. Names other than "lion", "mouse" and
/// "snake" produce no output at all.
pub fn write_sounds_by_name(animals: &[AnimalBase], out: &mut impl Write) -> Result<()> {
    for animal in animals {
        if animal.name == "lion" {
            writeln!(out, "roar")?;
        } else if animal.name == "mouse" {
            writeln!(out, "squeak")?;
        } else if animal.name == "snake" {
            writeln!(out, "hiss")?;
        } else {
            debug!(name = %animal.name, "no branch for animal name, skipped");
        }
    }
    Ok(())
}

pub fn animal_sounds_wrong(out: &mut impl Write) -> Result<()> {
    let animals = vec![
        AnimalBase::new("lion"),
        AnimalBase::new("mouse"),
        AnimalBase::new("snake"),
    ];
    write_sounds_by_name(&animals, out)
}

// =============================================================================
// The right way: every variant implements the same trait
// =============================================================================

/// Static dispatch for a single value.
pub fn write_sound<T: MakeSound + ?Sized>(animal: &T, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", animal.make_sound())?;
    Ok(())
}

/// Dynamic dispatch over a heterogeneous list.
pub fn write_sounds(animals: &[Box<dyn MakeSound>], out: &mut impl Write) -> Result<()> {
    for animal in animals {
        write_sound(animal.as_ref(), out)?;
    }
    Ok(())
}

pub fn animal_sounds_trait(out: &mut impl Write) -> Result<()> {
    let animals: Vec<Box<dyn MakeSound>> = vec![
        Box::new(Lion),
        Box::new(Squirrel),
        Box::new(Snake),
    ];
    write_sounds(&animals, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_variant_sounds() {
        assert_eq!(Lion.make_sound(), "roar");
        assert_eq!(Squirrel.make_sound(), "squeak");
        assert_eq!(Snake.make_sound(), "hiss");
    }

    #[test]
    fn test_enum_matches_unit_structs() {
        assert_eq!(AnimalKind::Lion.make_sound(), Lion.make_sound());
        assert_eq!(AnimalKind::Squirrel.make_sound(), Squirrel.make_sound());
        assert_eq!(AnimalKind::Snake.make_sound(), Snake.make_sound());
    }

    #[test]
    fn test_known_names_in_order() {
        let animals = vec![
            AnimalBase::new("snake"),
            AnimalBase::new("lion"),
            AnimalBase::new("mouse"),
        ];
        let mut buf = Vec::new();
        write_sounds_by_name(&animals, &mut buf).unwrap();
        assert_eq!(lines(buf), ["hiss", "roar", "squeak"]);
    }

    #[test]
    fn test_unknown_name_writes_nothing() {
        let animals = vec![
            AnimalBase::new("lion"),
            AnimalBase::new("squirrel"),
            AnimalBase::new("Lion"),
            AnimalBase::new(""),
            AnimalBase::new("snake"),
        ];
        let mut buf = Vec::new();
        write_sounds_by_name(&animals, &mut buf).unwrap();
        assert_eq!(lines(buf), ["roar", "hiss"]);
    }

    #[test]
    fn test_wrong_routine_output() {
        let mut buf = Vec::new();
        animal_sounds_wrong(&mut buf).unwrap();
        assert_eq!(buf, b"roar\nsqueak\nhiss\n");
    }

    #[test]
    fn test_trait_routine_output() {
        let mut buf = Vec::new();
        animal_sounds_trait(&mut buf).unwrap();
        assert_eq!(buf, b"roar\nsqueak\nhiss\n");
    }

    #[test]
    fn test_dispatch_follows_input_order() {
        let animals: Vec<Box<dyn MakeSound>> = vec![
            Box::new(Snake),
            Box::new(AnimalKind::Squirrel),
            Box::new(Snake),
        ];
        let mut buf = Vec::new();
        write_sounds(&animals, &mut buf).unwrap();
        assert_eq!(lines(buf), ["hiss", "squeak", "hiss"]);
    }

    #[test]
    fn test_new_variant_needs_no_dispatch_change() {
        struct Owl;
        impl MakeSound for Owl {
            fn make_sound(&self) -> &'static str {
                "hoot"
            }
        }

        let animals: Vec<Box<dyn MakeSound>> = vec![Box::new(Lion), Box::new(Owl)];
        let mut buf = Vec::new();
        write_sounds(&animals, &mut buf).unwrap();
        assert_eq!(lines(buf), ["roar", "hoot"]);
    }

    #[test]
    fn test_empty_inputs_write_nothing() {
        let mut buf = Vec::new();
        write_sounds_by_name(&[], &mut buf).unwrap();
        write_sounds(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
