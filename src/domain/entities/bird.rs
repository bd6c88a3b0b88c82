//! Bird variants of the [`Movable`] capability
//!
//! Every variant honors the full contract: `advance` succeeds for a duck
//! and for a penguin alike. Flight is deliberately absent from the shared
//! capability because not every bird can honor it.

use crate::domain::traits::Movable;

/// A bird that moves by flying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duck;

impl Movable for Duck {
    fn advance(&self) {
        println!("The duck takes off and flies ahead");
    }

    fn species(&self) -> &str {
        "duck"
    }
}

/// A bird that moves by sliding on its belly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Penguin;

impl Movable for Penguin {
    fn advance(&self) {
        println!("The penguin slides ahead on its belly");
    }

    fn species(&self) -> &str {
        "penguin"
    }
}
