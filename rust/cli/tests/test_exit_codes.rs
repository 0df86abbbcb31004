use headsup_cli::{EXIT_ERROR, EXIT_SUCCESS, run};

fn code_of(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn help_goes_to_stdout_with_success() {
    let (code, stdout, _) = code_of(&["headsup", "--help"]);
    assert_eq!(code, EXIT_SUCCESS);
    assert!(stdout.contains("play"));
    assert!(stdout.contains("eval"));
}

#[test]
fn unknown_command_lists_the_real_ones() {
    let (code, _, stderr) = code_of(&["headsup", "sim"]);
    assert_eq!(code, EXIT_ERROR);
    for c in ["play", "deal", "eval", "cfg"] {
        assert!(stderr.contains(c), "missing {} in {}", c, stderr);
    }
}

#[test]
fn zero_hands_fails_at_parse_time() {
    let (code, _, _) = code_of(&["headsup", "play", "--hands", "0"]);
    assert_eq!(code, 2);
}
