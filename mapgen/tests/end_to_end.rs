use std::{fs, path::PathBuf, process::Command};

fn run_in_fresh_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mapgen-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_mapgen"))
        .current_dir(&dir)
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "mapgen failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(out.stdout.is_empty());
    dir.join("map.txt")
}

fn parse(text: &str) -> Vec<Vec<u8>> {
    text.lines()
        .map(|line| {
            line.split_whitespace()
                .map(|t| t.parse().unwrap())
                .collect()
        })
        .collect()
}

#[test]
fn writes_map_txt_with_fixed_edges() {
    let path = run_in_fresh_dir("edges");
    assert!(path.exists());

    let text = fs::read_to_string(&path).unwrap();
    let rows = parse(&text);
    assert_eq!(rows.len(), 80);
    assert!(rows.iter().all(|row| row.len() == 80));
    assert!(text.lines().all(|line| line.ends_with(' ')));

    for x in 0..79 {
        assert_eq!(rows[79][x], 2, "line 79, column {x}");
    }
    assert_eq!(rows[79][79], 0);
    for (y, row) in rows.iter().enumerate().take(79) {
        assert_eq!(row[79], 1, "line {y}, column 79");
        assert!(row[..79].iter().all(|c| (1..=3).contains(c)));
    }
}

#[test]
fn overwrites_and_varies_between_runs() {
    let path = run_in_fresh_dir("repeat");
    let first = fs::read_to_string(&path).unwrap();

    fs::write(&path, "stale").unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_mapgen"))
        .current_dir(path.parent().unwrap())
        .output()
        .unwrap();
    assert!(out.status.success());

    let second = fs::read_to_string(&path).unwrap();
    assert_eq!(parse(&second).len(), 80);
    assert!(!second.contains("stale"));
    assert_ne!(first, second);
}
