//! CLI tests for `rowpolicy init`.

use std::fs;
use std::process::Command;

use rowpolicy::exit_codes;
use rowpolicy::io::config::{CONFIG_FILE, PolicyConfig, load_config};
use rowpolicy::test_support::TestDir;

fn init(dir: &TestDir, args: &[&str]) -> (Option<i32>, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_rowpolicy"))
        .current_dir(dir.path())
        .arg("init")
        .args(args)
        .output()
        .expect("rowpolicy init");
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    (output.status.code(), stdout)
}

#[test]
fn init_writes_default_config() {
    let dir = TestDir::new().expect("dir");
    let (code, stdout) = init(&dir, &[]);
    assert_eq!(code, Some(exit_codes::OK));
    assert_eq!(stdout, format!("wrote {}\n", CONFIG_FILE));

    let cfg = load_config(&dir.path().join(CONFIG_FILE)).expect("load");
    assert_eq!(cfg, PolicyConfig::default());
}

#[test]
fn init_keeps_existing_config_unless_forced() {
    let dir = TestDir::new().expect("dir");
    let path = dir.write_config("include_hidden = true\n").expect("config");

    let (code, stdout) = init(&dir, &[]);
    assert_eq!(code, Some(exit_codes::OK));
    assert_eq!(stdout, format!("kept {}\n", CONFIG_FILE));
    assert_eq!(fs::read_to_string(&path).expect("read"), "include_hidden = true\n");

    let (code, _) = init(&dir, &["--force"]);
    assert_eq!(code, Some(exit_codes::OK));
    assert!(!load_config(&path).expect("load").include_hidden);
}
