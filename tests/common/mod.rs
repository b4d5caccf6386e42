#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn annuaire_cmd() -> Command {
    let mut cmd = Command::cargo_bin("annuaire").unwrap();
    cmd.env_remove("ANNUAIRE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a document under `root`, creating parent directories
pub fn write_doc(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small directory: two categories, three cities, four listings
pub fn sample_content(root: &Path) {
    write_doc(
        root,
        "restaurants/Ile-de-France/Paris/le-bistro.mdx",
        "---\nname: \"Le Bistro\"\ntype: \"Restaurant\"\ntags: [\"bistro\", \"paris\"]\nrating: 4.5\n---\n# Le Bistro\n\nCuisine **maison**.\n",
    );
    write_doc(
        root,
        "restaurants/Ile-de-France/Paris/chez-marie.mdx",
        "---\nname: Chez Marie\ntype: Crêperie\nsummary: Crêpes bretonnes a Paris\ntags: [creperie]\n---\nBody\n",
    );
    write_doc(
        root,
        "restaurants/Bretagne/Rennes/ty-breizh.mdx",
        "---\ntitle: Ty Breizh\ntype: Crêperie\ntags: [creperie, bistro-like]\n---\n",
    );
    write_doc(
        root,
        "salles/Ile-de-France/Versailles/fitness-club.mdx",
        "---\nname: Fitness Club\ntype: Salle de sport\nfull_address: 3 avenue de Paris, Versailles\nservices: [\"WiFi gratuit\", \"Parking\"]\nequipment: [Rameur]\n---\n",
    );
}
