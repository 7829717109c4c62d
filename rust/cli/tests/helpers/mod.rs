//! Shared helpers for the CLI integration tests.
#![allow(dead_code)]

/// Runs the CLI in-process and captures both streams.
pub fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["koikoi"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = koikoi_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).expect("stdout utf8"),
        String::from_utf8(err).expect("stderr utf8"),
    )
}

/// Every variable the CLI reads; cleared before each env test.
pub const KOIKOI_VARS: &[&str] = &[
    "KOIKOI_CONFIG",
    "KOIKOI_SEED",
    "KOIKOI_ROUNDS",
    "KOIKOI_AI",
    "KOIKOI_PLAYER_NAME",
    "KOIKOI_SIM_BREAK_AFTER",
];

/// Sets variables for the lifetime of the guard and restores the previous
/// values on drop. Tests using it must be `#[serial]`.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn clean() -> Self {
        let mut guard = EnvGuard {
            restores: Vec::new(),
        };
        for key in KOIKOI_VARS {
            guard.remember(key);
            unsafe {
                std::env::remove_var(key);
            }
        }
        guard
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.remember(key);
        unsafe {
            std::env::set_var(key, value);
        }
        self
    }

    fn remember(&mut self, key: &str) {
        if !self.restores.iter().any(|(k, _)| k == key) {
            self.restores.push((key.to_string(), std::env::var(key).ok()));
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
