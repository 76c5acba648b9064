//! End-to-end simulation tests.

use parlor_games::grid::{Mark, Side};
use parlor_games::sim::{self, SimConfig};

#[test]
fn test_same_seed_same_report() {
    let config = SimConfig::new().with_seed(31).with_grid_matches(4).with_card_rounds(40);
    let first = sim::run(&config).unwrap();
    let second = sim::run(&config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.seed, 31);
    assert_eq!(first.cards.rounds(), 40);
}

#[test]
fn test_opponent_first_with_o() {
    let config = SimConfig::new()
        .with_grid_matches(3)
        .with_card_rounds(0)
        .with_human_mark(Mark::O)
        .with_first_mover(Side::Opponent);
    let report = sim::run(&config).unwrap();
    let grid = report.grid;
    assert_eq!(grid.human_matches + grid.opponent_matches + grid.unfinished_matches, 3);
    assert!(grid.tied_rounds <= grid.rounds);
}

#[test]
fn test_load_config_from_toml_file() {
    let path = std::env::temp_dir().join(format!("parlor-sim-{}.toml", std::process::id()));
    std::fs::write(&path, "seed = 5\ngrid_matches = 1\ncard_rounds = 3\nstand_on = 15\n").unwrap();

    let config = SimConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.seed, 5);
    assert_eq!(config.grid_matches, 1);
    assert_eq!(config.card_rounds, 3);
    assert_eq!(config.stand_on, 15);
    assert_eq!(sim::run(&config).unwrap().cards.rounds(), 3);
}
