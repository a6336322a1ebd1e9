use std::env;
use std::fs;
use std::path::PathBuf;

use bv_workload::{Config, Generator};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir()
        .join(format!("bv-workload-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn writes_one_file_per_exponent() {
    let dir = scratch_dir("files");
    let config = Config {
        out_dir: dir.clone(),
        min_exponent: 2,
        max_exponent: 6,
        ranks: 20,
        seed: Some(42),
        ..Config::default()
    };

    let reports = Generator::new(config).run().unwrap();
    assert_eq!(reports.len(), 5);

    for (report, exponent) in reports.iter().zip(2..=6) {
        assert_eq!(report.exponent, exponent);
        assert_eq!(
            report.path,
            dir.join(format!("evaluationInput-2^{}.txt", exponent))
        );

        let text = fs::read_to_string(&report.path).unwrap();
        assert_eq!(text.lines().count() as u64, report.lines());
        assert_eq!(report.lines(), 2 + (1 << exponent) + 20);
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn seed_reproduces_files() {
    let first = scratch_dir("seed-a");
    let second = scratch_dir("seed-b");
    let config = |dir: &PathBuf, min_exponent| Config {
        out_dir: dir.clone(),
        min_exponent,
        max_exponent: 8,
        ranks: 100,
        seed: Some(0xdead_beef),
        ..Config::default()
    };

    // the second run skips 3..=5; exponent 8 must not depend on that
    Generator::new(config(&first, 3)).run().unwrap();
    Generator::new(config(&second, 6)).run().unwrap();

    for exponent in 6..=8 {
        let name = format!("evaluationInput-2^{}.txt", exponent);
        assert_eq!(
            fs::read(first.join(&name)).unwrap(),
            fs::read(second.join(&name)).unwrap()
        );
    }

    fs::remove_dir_all(&first).unwrap();
    fs::remove_dir_all(&second).unwrap();
}

#[test]
fn custom_prefix() {
    let dir = scratch_dir("prefix");
    let config = Config {
        out_dir: dir.clone(),
        prefix: "bv".to_owned(),
        min_exponent: 1,
        max_exponent: 1,
        ranks: 1,
        seed: Some(1),
    };

    let reports = Generator::new(config).run().unwrap();
    assert_eq!(reports[0].path, dir.join("bv-2^1.txt"));
    assert!(reports[0].path.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn rejects_inverted_range_before_writing() {
    let dir = scratch_dir("inverted");
    let config = Config {
        out_dir: dir.clone(),
        min_exponent: 5,
        max_exponent: 4,
        ..Config::default()
    };

    assert!(Generator::new(config).run().is_err());
    assert!(!dir.exists());
}

#[test]
fn unseeded_runs_differ() {
    let a = Generator::new(Config::default());
    let b = Generator::new(Config::default());
    // two independent 64-bit draws
    assert_ne!(a.seed(), b.seed());
}
