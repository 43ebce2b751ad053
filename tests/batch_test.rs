//! Folder processing: input discovery, output naming, failure handling.

mod common;

use common::fixtures::{self, colors};
use common::TestWorkspace;
use pearlerizer::error::PearlError;
use pearlerizer::models::AppConfig;
use pearlerizer::services::run_batch;
use pretty_assertions::assert_eq;

#[test]
fn test_batch_converts_every_supported_format() {
    let ws = TestWorkspace::new();
    fixtures::save(&fixtures::solid(8, 8, colors::RED), &ws.input("a.png"));
    fixtures::save(&fixtures::solid(8, 8, colors::GREEN), &ws.input("b.jpg"));
    fixtures::save(&fixtures::solid(8, 8, colors::BLUE), &ws.input("c.bmp"));
    fixtures::save(&fixtures::solid(8, 8, colors::WHITE), &ws.input("d.gif"));
    std::fs::write(ws.input("notes.txt"), "not an image").unwrap();

    let config = AppConfig {
        block_size: 4,
        ..ws.config()
    };
    let report = run_batch(&config).unwrap();

    assert!(report.is_success(), "failures: {:?}", report.failed);
    assert_eq!(report.processed.len(), 4);
    for (name, expected) in [
        ("a.png", colors::RED),
        ("b.png", colors::GREEN),
        ("c.png", colors::BLUE),
        ("d.png", colors::WHITE),
    ] {
        let img = common::assert_png(&ws.output(name), 8, 8);
        assert_eq!(
            common::distinct_colors(&img).into_iter().collect::<Vec<_>>(),
            vec![expected],
            "{name}"
        );
    }
    assert!(!ws.output("notes.png").exists());
}

#[test]
fn test_batch_processes_in_path_order() {
    let ws = TestWorkspace::new();
    for name in ["c.png", "a.png", "b.png"] {
        fixtures::save(&fixtures::solid(4, 4, colors::BLACK), &ws.input(name));
    }

    let report = run_batch(&ws.config()).unwrap();
    assert_eq!(
        report.processed,
        vec![ws.input("a.png"), ws.input("b.png"), ws.input("c.png")]
    );
}

#[test]
fn test_batch_uppercase_extension_keeps_stem() {
    let ws = TestWorkspace::new();
    fixtures::save(&fixtures::solid(6, 4, colors::BLUE), &ws.input("tmp.png"));
    std::fs::rename(ws.input("tmp.png"), ws.input("PHOTO.PNG")).unwrap();

    let report = run_batch(&ws.config()).unwrap();

    assert_eq!(report.processed.len(), 1);
    common::assert_png(&ws.output("PHOTO.png"), 6, 4);
}

#[test]
fn test_batch_continues_after_failure() {
    let ws = TestWorkspace::new();
    std::fs::write(ws.input("broken.png"), b"truncated").unwrap();
    fixtures::save(&fixtures::solid(5, 5, colors::WHITE), &ws.input("good.png"));

    let report = run_batch(&ws.config()).unwrap();

    assert!(!report.is_success());
    assert_eq!(report.total(), 2);
    assert_eq!(report.processed, vec![ws.input("good.png")]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, ws.input("broken.png"));
    assert!(!ws.output("broken.png").exists());
    common::assert_png(&ws.output("good.png"), 5, 5);
}

#[test]
fn test_batch_target_width_resizes_output() {
    let ws = TestWorkspace::new();
    fixtures::save(&fixtures::gradient(64, 40), &ws.input("wide.png"));

    let config = AppConfig {
        target_width: Some(16),
        ..ws.config()
    };
    run_batch(&config).unwrap();

    let img = common::assert_png(&ws.output("wide.png"), 16, 10);
    common::assert_palette_only(&img, &colors::ALL);
}

#[test]
fn test_batch_empty_input_creates_output_dir() {
    let ws = TestWorkspace::new();

    let report = run_batch(&ws.config()).unwrap();

    assert_eq!(report.total(), 0);
    assert!(ws.output_dir().is_dir());
}

#[test]
fn test_batch_missing_palette_fails_before_processing() {
    let ws = TestWorkspace::new();
    fixtures::save(&fixtures::solid(4, 4, colors::RED), &ws.input("a.png"));
    std::fs::remove_file(ws.palette_path()).unwrap();

    let result = run_batch(&ws.config());

    assert!(matches!(result, Err(PearlError::Io { .. })), "{result:?}");
    assert!(!ws.output("a.png").exists());
}

#[test]
fn test_batch_missing_input_dir() {
    let ws = TestWorkspace::new();
    let config = AppConfig {
        input_dir: ws.root().join("nowhere"),
        ..ws.config()
    };

    assert!(matches!(run_batch(&config), Err(PearlError::Io { .. })));
}
