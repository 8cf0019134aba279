// Copyright (c) 2025, Card Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! A small demo deck driven from the command line: subscribes to the model,
//! swipes through a few profiles, reverts one, and prints every published
//! event. Run with `RUST_LOG=trace` to also see the model's trace logs.

use card_stack::{CardStackModel, Identifiable, SwipeDirection};

#[derive(Debug, Clone)]
struct Profile {
    id: u32,
    name: &'static str,
}

impl Identifiable for Profile {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut deck = CardStackModel::new(vec![
        Profile { id: 1, name: "Ada" },
        Profile { id: 2, name: "Grace" },
        Profile { id: 3, name: "Edsger" },
    ]);

    deck.subscribe(|event| println!("published: {}", event));

    deck.swipe(SwipeDirection::Right, |d| println!("completed swipe {}", d));
    deck.swipe(SwipeDirection::Left, |d| println!("completed swipe {}", d));

    // Changed our mind about Grace.
    deck.unswipe();

    deck.add_element(Profile { id: 4, name: "Barbara" });

    println!();
    for entry in deck.entries() {
        let offset = deck.index_in_stack(entry).unwrap();
        let status = match entry.direction() {
            Some(direction) => format!("swiped {}", direction),
            None => "pending".to_string(),
        };
        println!("{:>2}  {:<8} {}", offset, entry.element().name, status);
    }
    println!("current: {:?}", deck.current().map(|e| e.element().name));
}
