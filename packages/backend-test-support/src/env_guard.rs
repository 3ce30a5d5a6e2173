use std::env;

/// Sets process environment variables for the lifetime of the guard and
/// restores the previous values on drop.
///
/// Process env is global: pair this with `#[serial]`.
#[derive(Debug, Default)]
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.save(name);
        env::set_var(name, value);
        self
    }

    pub fn unset(mut self, name: &str) -> Self {
        self.save(name);
        env::remove_var(name);
        self
    }

    fn save(&mut self, name: &str) {
        if !self.saved.iter().any(|(n, _)| n == name) {
            self.saved.push((name.to_string(), env::var(name).ok()));
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.saved.drain(..).rev() {
            match value {
                Some(v) => env::set_var(&name, v),
                None => env::remove_var(&name),
            }
        }
    }
}
