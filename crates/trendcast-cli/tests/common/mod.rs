use std::process::{Command, Output};

/// Environment variables the binary reads; scrubbed before every run so
/// tests are isolated from the developer's shell.
const CONFIG_VARS: [&str; 4] = [
    "YOUTUBE_API_KEY",
    "PUBSUB_TOPIC",
    "GCP_PROJECT",
    "PUBSUB_AUTH_TOKEN",
];

/// Run the CLI binary with arguments and a scoped environment.
pub fn run_cli(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_trendcast"));
    cmd.args(args);
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    for (name, value) in envs {
        cmd.env(name, value);
    }
    cmd.output().expect("failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_success(args: &[&str], envs: &[(&str, &str)]) -> String {
    let output = run_cli(args, envs);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
