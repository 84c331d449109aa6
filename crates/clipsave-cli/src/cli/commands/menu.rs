//! `clipsave menu` – list the context-menu entries.

use clipsave_core::menu::{register_menu_entries, MenuEntry, MenuRegistry};

struct PrintedMenu;

impl MenuRegistry for PrintedMenu {
    fn create(&mut self, entry: &MenuEntry) {
        let contexts: Vec<String> = entry
            .contexts
            .iter()
            .map(|c| format!("{c:?}").to_lowercase())
            .collect();
        println!("{:<10} {:<20} {}", entry.id, entry.title, contexts.join(","));
    }
}

pub fn run_menu() {
    println!("{:<10} {:<20} {}", "ID", "TITLE", "CONTEXTS");
    register_menu_entries(&mut PrintedMenu);
}
