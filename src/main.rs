//! MM-Paginator demo (for testing purposes only)
//! The main interface is the library and its WASM bindings.

use mm_paginator::{NoopObserver, Paginator, PaginatorConfig};

fn main() {
    println!("MM-Paginator Core");
    println!("=================");
    println!();

    for context_size in [-1, 0, 1, 2] {
        let config = PaginatorConfig::new(1, 12, context_size);
        let Ok(mut paginator) = Paginator::initialize(config, NoopObserver) else {
            continue;
        };

        println!("12 pages, context size {}:", context_size);
        for page in 1..=12 {
            paginator.select_page(page);
            println!("  {:>2}: {}", page, paginator.state().summary());
        }
        println!();
    }

    println!("To use from the browser:");
    println!("  wasm-pack build --target web");
}
